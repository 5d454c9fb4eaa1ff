//! # Library Crate
//!
//! This crate holds the song record and the arena that owns every song.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Song, NewSong, SongKey, SongStore)
//! - **catalog**: The predefined sample catalog used for bulk loading
//! - **error**: Error taxonomy shared by the whole workspace
//!
//! ## Example Usage
//!
//! ```ignore
//! use library::{NewSong, Song, SongStore};
//!
//! let mut store = SongStore::new();
//! let key = store.insert(Song::new("creep-radiohead-1", NewSong {
//!     title: "Creep".into(),
//!     artist: "Radiohead".into(),
//!     ..NewSong::default()
//! }));
//!
//! store.get_mut(key).unwrap().play();
//! ```
//!
//! ## Ownership Model
//!
//! Every index in the `indexes` crate stores [`SongKey`] handles rather than
//! songs. The store is the single owner; a play or a rating change made
//! through [`SongStore::get_mut`] is immediately visible to every index.

// Public modules
pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::{CatalogEntry, sample_catalog};
pub use error::{PlaylistError, Result};
pub use types::{
    MAX_RATING, MIN_RATING, NewSong, Song, SongKey, SongStore, UNRATED, is_valid_rating,
};
