//! Engine configuration.
//!
//! Every field has a default, so a JSON document only needs the keys it
//! wants to change:
//!
//! ```json
//! { "playlist_name": "Road Trip", "history_capacity": 25 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or has a field of the wrong type
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for a [`crate::PlaylistEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Name shown in snapshots
    pub playlist_name: String,

    /// Maximum number of plays kept in the history (0 falls back to 50)
    pub history_capacity: usize,

    /// Initial bucket count for the id and title indexes (0 falls back to 16)
    pub lookup_capacity: usize,

    /// How many recent plays seed recommendations
    pub recommendation_window: usize,

    /// Recommendations returned when a caller asks for zero
    pub default_recommendations: usize,

    /// Max duration difference, in seconds, for two songs to count as similar
    pub similarity_window_secs: u32,

    /// Recent plays included in a snapshot
    pub snapshot_recent: usize,

    /// Longest songs included in a snapshot
    pub snapshot_top_longest: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            playlist_name: "My Playlist".to_string(),
            history_capacity: 100,
            lookup_capacity: 64,
            recommendation_window: 20,
            default_recommendations: 10,
            similarity_window_secs: 30,
            snapshot_recent: 10,
            snapshot_top_longest: 5,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Set the playlist name
    pub fn with_playlist_name(mut self, name: impl Into<String>) -> Self {
        self.playlist_name = name.into();
        self
    }

    /// Set the history capacity (default: 100)
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set the initial lookup bucket count (default: 64)
    pub fn with_lookup_capacity(mut self, capacity: usize) -> Self {
        self.lookup_capacity = capacity;
        self
    }

    /// Set how many recent plays seed recommendations (default: 20)
    pub fn with_recommendation_window(mut self, window: usize) -> Self {
        self.recommendation_window = window;
        self
    }

    /// Set the fallback recommendation count (default: 10)
    pub fn with_default_recommendations(mut self, count: usize) -> Self {
        self.default_recommendations = count;
        self
    }

    /// Set the similarity duration window in seconds (default: 30)
    pub fn with_similarity_window_secs(mut self, secs: u32) -> Self {
        self.similarity_window_secs = secs;
        self
    }

    /// Set how many recent plays a snapshot includes (default: 10)
    pub fn with_snapshot_recent(mut self, count: usize) -> Self {
        self.snapshot_recent = count;
        self
    }

    /// Set how many of the longest songs a snapshot includes (default: 5)
    pub fn with_snapshot_top_longest(mut self, count: usize) -> Self {
        self.snapshot_top_longest = count;
        self
    }
}
