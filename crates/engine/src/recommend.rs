//! Smart recommendations - songs like the ones just played.
//!
//! ## Algorithm
//! 1. Take the most recent plays (20 by default) and reject their ids
//! 2. Walk the playlist in order, keeping songs not rejected that are
//!    similar to at least one recent play (same genre and mood, durations
//!    within 30 seconds)
//! 3. If that yields too few, backfill with any other non-rejected songs,
//!    again in playlist order
//!
//! With no history at all the first `count` songs of the playlist come back.

use crate::config::EngineConfig;
use indexes::{PlaybackHistory, Sequence};
use library::{Song, SongKey, SongStore};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Picks songs to play next from the history and the playlist order.
#[derive(Debug, Clone)]
pub struct Recommender {
    /// Number of recent plays that seed similarity
    window: usize,

    /// Max duration difference for two songs to count as similar
    similarity_window_secs: u32,

    /// Count used when the caller asks for zero
    default_count: usize,
}

impl Recommender {
    pub fn new() -> Self {
        Self {
            window: 20,
            similarity_window_secs: 30,
            default_count: 10,
        }
    }

    /// Build from the engine-wide configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new()
            .with_window(config.recommendation_window)
            .with_similarity_window_secs(config.similarity_window_secs)
            .with_default_count(config.default_recommendations)
    }

    /// Configure how many recent plays are considered (default: 20)
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Configure the similarity duration window (default: 30 seconds)
    pub fn with_similarity_window_secs(mut self, secs: u32) -> Self {
        self.similarity_window_secs = secs;
        self
    }

    /// Configure the fallback count (default: 10)
    pub fn with_default_count(mut self, count: usize) -> Self {
        self.default_count = count;
        self
    }

    /// Up to `count` handles to recommend, in playlist order within each pass.
    #[instrument(skip(self, songs, order, history))]
    pub fn recommend(
        &self,
        songs: &SongStore,
        order: &Sequence<SongKey>,
        history: &PlaybackHistory,
        count: usize,
    ) -> Vec<SongKey> {
        let count = if count == 0 { self.default_count } else { count };
        let recent: Vec<&Song> = history
            .recent(self.window)
            .into_iter()
            .filter_map(|key| songs.get(key))
            .collect();

        if recent.is_empty() {
            return order.iter().take(count).collect();
        }

        let rejected: HashSet<&str> = recent.iter().map(|song| song.id.as_str()).collect();
        let candidates: Vec<(SongKey, &Song)> = order
            .iter()
            .filter_map(|key| songs.get(key).map(|song| (key, song)))
            .filter(|(_, song)| !rejected.contains(song.id.as_str()))
            .collect();

        let mut picked: Vec<SongKey> = candidates
            .iter()
            .filter(|(_, song)| {
                recent
                    .iter()
                    .any(|played| song.is_similar(played, self.similarity_window_secs))
            })
            .map(|(key, _)| *key)
            .take(count)
            .collect();
        let similar = picked.len();

        if picked.len() < count {
            let chosen: HashSet<SongKey> = picked.iter().copied().collect();
            let backfill: Vec<SongKey> = candidates
                .iter()
                .map(|(key, _)| *key)
                .filter(|key| !chosen.contains(key))
                .take(count - picked.len())
                .collect();
            picked.extend(backfill);
        }

        debug!(
            "Recommended {} songs ({} similar, {} backfill) from {} recent plays",
            picked.len(),
            similar,
            picked.len() - similar,
            recent.len()
        );
        picked
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}
