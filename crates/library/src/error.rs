//! Error types shared by every layer of the playlist engine.
//!
//! All fallible operations return [`Result<T>`]; nothing in the core
//! terminates the process on bad input.

use thiserror::Error;

/// Errors that can occur while mutating or querying the playlist.
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    /// A required field was empty or a value was outside its domain
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Lookup by id, title or path came back empty
    #[error("{what} '{key}' not found")]
    NotFound { what: &'static str, key: String },

    /// A song with this id is already indexed
    #[error("Song already exists: {id}")]
    Duplicate { id: String },

    /// Positional access outside the playlist bounds
    #[error("Index {index} out of range for playlist of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Pop or peek on an empty playback history
    #[error("Playback history is empty")]
    EmptyHistory,
}

impl PlaylistError {
    /// Shorthand for a song-id miss.
    pub fn song_not_found(id: impl Into<String>) -> Self {
        PlaylistError::NotFound {
            what: "Song",
            key: id.into(),
        }
    }
}

/// Convenience type alias for Results in this workspace
pub type Result<T> = std::result::Result<T, PlaylistError>;
