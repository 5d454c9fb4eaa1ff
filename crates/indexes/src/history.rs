//! Bounded playback history.
//!
//! A stack of song handles, most recent on top. Pushing onto a full
//! history silently drops the oldest entry.

use library::{PlaylistError, Result, SongKey, SongStore};
use serde::Serialize;
use std::collections::{HashSet, VecDeque};

/// Capacity used when a history is created with a size of zero
pub const DEFAULT_HISTORY_SIZE: usize = 50;

/// Summary of what is currently in the history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub total_songs: usize,
    /// Sum of durations in seconds
    pub total_duration: u64,
    pub unique_artists: usize,
    pub unique_genres: usize,
}

/// Recency stack with a fixed maximum size.
#[derive(Debug, Clone)]
pub struct PlaybackHistory {
    // front = oldest, back = most recent
    entries: VecDeque<SongKey>,
    max_size: usize,
}

impl PlaybackHistory {
    pub fn new(max_size: usize) -> Self {
        let max_size = if max_size == 0 {
            DEFAULT_HISTORY_SIZE
        } else {
            max_size
        };
        Self {
            entries: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Record a play. Evicts the oldest entry when full.
    pub fn push(&mut self, key: SongKey) {
        while self.entries.len() >= self.max_size {
            self.entries.pop_front();
        }
        self.entries.push_back(key);
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Result<SongKey> {
        self.entries.pop_back().ok_or(PlaylistError::EmptyHistory)
    }

    /// The most recent entry without removing it.
    pub fn peek(&self) -> Result<SongKey> {
        self.entries
            .back()
            .copied()
            .ok_or(PlaylistError::EmptyHistory)
    }

    /// Up to `n` entries, most recent first.
    pub fn recent(&self, n: usize) -> Vec<SongKey> {
        self.entries.iter().rev().take(n).copied().collect()
    }

    pub fn contains(&self, key: SongKey) -> bool {
        self.entries.contains(&key)
    }

    /// Membership by song id, resolving handles through `songs`.
    pub fn contains_id(&self, id: &str, songs: &SongStore) -> bool {
        self.entries
            .iter()
            .filter_map(|&key| songs.get(key))
            .any(|song| song.id == id)
    }

    /// Drop every entry for `key`, returning how many were removed.
    pub fn remove_all(&mut self, key: SongKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|&k| k != key);
        before - self.entries.len()
    }

    /// Change the capacity, dropping the oldest entries if it shrank.
    /// Zero is ignored.
    pub fn set_max_size(&mut self, max_size: usize) {
        if max_size == 0 {
            return;
        }
        self.max_size = max_size;
        while self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Every entry, most recent first.
    pub fn to_vec(&self) -> Vec<SongKey> {
        self.entries.iter().rev().copied().collect()
    }

    pub fn stats(&self, songs: &SongStore) -> HistoryStats {
        let mut artists = HashSet::new();
        let mut genres = HashSet::new();
        let mut total_duration = 0u64;

        for song in self.entries.iter().filter_map(|&key| songs.get(key)) {
            total_duration += u64::from(song.duration);
            artists.insert(song.artist.as_str());
            genres.insert(song.genre.as_str());
        }

        HistoryStats {
            total_songs: self.entries.len(),
            total_duration,
            unique_artists: artists.len(),
            unique_genres: genres.len(),
        }
    }
}

impl Default for PlaybackHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}
