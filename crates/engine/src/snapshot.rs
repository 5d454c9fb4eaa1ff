//! Read-only views of the engine state.
//!
//! A [`Snapshot`] is the dashboard view: playlist metadata, the longest
//! songs, recent plays and per-index diagnostics. [`PlaylistStats`] is the
//! compact numeric summary. Both serialize to JSON.

use chrono::{DateTime, Utc};
use indexes::{CategoryStats, HistoryStats, LookupStats};
use library::Song;
use serde::Serialize;
use std::collections::BTreeMap;

/// Playlist-level metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistInfo {
    pub name: String,
    pub total_songs: usize,
    /// Seconds
    pub total_duration: u64,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Occupancy of both direct-lookup indexes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupReport {
    pub by_id: LookupStats,
    pub by_title: LookupStats,
}

/// Full dashboard view of the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub playlist: PlaylistInfo,
    /// Longest first
    pub top_longest: Vec<Song>,
    /// Most recent first
    pub recently_played: Vec<Song>,
    /// rating -> number of songs with that rating
    pub rating_distribution: BTreeMap<u8, usize>,
    pub categories: CategoryStats,
    pub playback: HistoryStats,
    pub lookups: LookupReport,
}

impl Snapshot {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Numeric summary of the playlist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistStats {
    pub total_songs: usize,
    /// Seconds
    pub total_duration: u64,
    /// Seconds, 0 for an empty playlist
    pub average_song_length: f64,
    pub total_play_count: u64,
    pub unique_artists: usize,
    pub unique_genres: usize,
    pub rating_distribution: BTreeMap<u8, usize>,
    pub history_size: usize,
}

impl PlaylistStats {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
