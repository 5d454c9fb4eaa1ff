//! Core domain types for the playlist engine.
//!
//! This module defines the song record and the arena that owns every song.
//! The index structures never hold a `Song` directly: they hold a
//! [`SongKey`] handle into the [`SongStore`], so a mutation made through
//! the store (a play, a rating change) is seen by every index at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Rating value of a song that has never been rated
pub const UNRATED: u8 = 0;

/// Lowest valid star rating
pub const MIN_RATING: u8 = 1;

/// Highest valid star rating
pub const MAX_RATING: u8 = 5;

/// Returns true when `rating` is a valid star rating (1-5).
pub fn is_valid_rating(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

// =============================================================================
// Handles
// =============================================================================

/// Stable handle to a song stored in a [`SongStore`].
///
/// Handles are never reused while the store is alive, so a stale handle
/// simply resolves to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SongKey(u32);

impl SongKey {
    /// Position of this handle inside the store's slot vector
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SongKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Song
// =============================================================================

/// The caller-supplied fields of a new song.
///
/// Ids, timestamps and play statistics are filled in by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub subgenre: String,
    #[serde(default)]
    pub mood: String,
    /// Length in seconds
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub bpm: u32,
}

/// A music track with its metadata and mutable play/rating state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub subgenre: String,
    pub mood: String,
    /// Length in seconds
    pub duration: u32,
    pub bpm: u32,
    /// 0 = unrated, otherwise 1-5 stars
    pub rating: u8,
    #[serde(rename = "playcount")]
    pub play_count: u32,
    pub added_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_played: Option<DateTime<Utc>>,
}

impl Song {
    /// Build an unrated, never-played song stamped with the current time.
    pub fn new(id: impl Into<String>, fields: NewSong) -> Self {
        Self::with_added_at(id, fields, Utc::now())
    }

    /// Same as [`Song::new`] with an explicit creation time.
    pub fn with_added_at(id: impl Into<String>, fields: NewSong, added_at: DateTime<Utc>) -> Self {
        let NewSong {
            title,
            artist,
            album,
            genre,
            subgenre,
            mood,
            duration,
            bpm,
        } = fields;

        Self {
            id: id.into(),
            title,
            artist,
            album,
            genre,
            subgenre,
            mood,
            duration,
            bpm,
            rating: UNRATED,
            play_count: 0,
            added_at,
            last_played: None,
        }
    }

    /// Record one play: bump the counter and stamp `last_played`.
    pub fn play(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
        self.last_played = Some(Utc::now());
    }

    /// Set the star rating. Values outside 1-5 are ignored.
    pub fn set_rating(&mut self, rating: u8) {
        if is_valid_rating(rating) {
            self.rating = rating;
        }
    }

    pub fn is_rated(&self) -> bool {
        self.rating != UNRATED
    }

    /// Two songs are similar when they share genre and mood and their
    /// lengths differ by at most `window_secs` seconds.
    pub fn is_similar(&self, other: &Song, window_secs: u32) -> bool {
        self.genre == other.genre
            && self.mood == other.mood
            && self.duration.abs_diff(other.duration) <= window_secs
    }

    /// Duration formatted as `MM:SS`
    pub fn duration_string(&self) -> String {
        format!("{:02}:{:02}", self.duration / 60, self.duration % 60)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.title, self.artist, self.duration_string())
    }
}

// =============================================================================
// SongStore - the arena every index points into
// =============================================================================

/// Owns every live song and hands out [`SongKey`] handles.
///
/// Removing a song leaves an empty slot behind; slots are only recycled by
/// [`SongStore::clear`], which is expected to be paired with clearing every
/// index that holds handles.
#[derive(Debug, Default, Clone)]
pub struct SongStore {
    slots: Vec<Option<Song>>,
    live: usize,
}

impl SongStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `song` and return its handle.
    pub fn insert(&mut self, song: Song) -> SongKey {
        let key = SongKey(self.slots.len() as u32);
        self.slots.push(Some(song));
        self.live += 1;
        key
    }

    pub fn get(&self, key: SongKey) -> Option<&Song> {
        self.slots.get(key.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, key: SongKey) -> Option<&mut Song> {
        self.slots.get_mut(key.index()).and_then(Option::as_mut)
    }

    /// Remove the song behind `key`, returning it if it was still live.
    pub fn remove(&mut self, key: SongKey) -> Option<Song> {
        let song = self.slots.get_mut(key.index())?.take();
        if song.is_some() {
            self.live -= 1;
        }
        song
    }

    pub fn contains(&self, key: SongKey) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterate over live songs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (SongKey, &Song)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|song| (SongKey(i as u32), song)))
    }

    /// Resolve a list of handles, silently dropping stale ones
    pub fn resolve<'a>(&'a self, keys: &[SongKey]) -> Vec<&'a Song> {
        keys.iter().filter_map(|&key| self.get(key)).collect()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.live = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, genre: &str, mood: &str, duration: u32) -> NewSong {
        NewSong {
            title: title.to_string(),
            artist: "Artist".to_string(),
            genre: genre.to_string(),
            mood: mood.to_string(),
            duration,
            ..NewSong::default()
        }
    }

    #[test]
    fn test_new_song_defaults() {
        let song = Song::new("id-1", fields("Creep", "Rock", "Melancholic", 238));
        assert_eq!(song.id, "id-1");
        assert_eq!(song.rating, UNRATED);
        assert_eq!(song.play_count, 0);
        assert!(song.last_played.is_none());
        assert!(!song.is_rated());
    }

    #[test]
    fn test_play_updates_stats() {
        let mut song = Song::new("id-1", fields("Creep", "Rock", "Melancholic", 238));
        song.play();
        song.play();
        assert_eq!(song.play_count, 2);
        assert!(song.last_played.is_some());
    }

    #[test]
    fn test_set_rating_ignores_out_of_range() {
        let mut song = Song::new("id-1", fields("Creep", "Rock", "Melancholic", 238));
        song.set_rating(4);
        assert_eq!(song.rating, 4);
        song.set_rating(0);
        song.set_rating(6);
        assert_eq!(song.rating, 4);
    }

    #[test]
    fn test_is_similar() {
        let a = Song::new("a", fields("A", "Rock", "Dark", 300));
        let b = Song::new("b", fields("B", "Rock", "Dark", 330));
        let c = Song::new("c", fields("C", "Rock", "Dark", 331));
        let d = Song::new("d", fields("D", "Rock", "Happy", 300));

        assert!(a.is_similar(&b, 30));
        assert!(b.is_similar(&a, 30));
        assert!(!a.is_similar(&c, 30));
        assert!(!a.is_similar(&d, 30));
    }

    #[test]
    fn test_duration_string_and_display() {
        let song = Song::new("a", fields("Strobe", "Electronic", "Atmospheric", 645));
        assert_eq!(song.duration_string(), "10:45");
        assert_eq!(song.to_string(), "Strobe - Artist (10:45)");
    }

    #[test]
    fn test_store_handles_are_not_reused() {
        let mut store = SongStore::new();
        let a = store.insert(Song::new("a", fields("A", "", "", 1)));
        let b = store.insert(Song::new("b", fields("B", "", "", 2)));
        assert_eq!(store.len(), 2);

        let removed = store.remove(a).unwrap();
        assert_eq!(removed.id, "a");
        assert!(store.get(a).is_none());
        assert!(store.remove(a).is_none());

        let c = store.insert(Song::new("c", fields("C", "", "", 3)));
        assert_ne!(a, c);
        assert_eq!(store.len(), 2);
        assert_eq!(store.resolve(&[a, b, c]).len(), 2);
    }

    #[test]
    fn test_store_mutation_is_shared() {
        let mut store = SongStore::new();
        let key = store.insert(Song::new("a", fields("A", "", "", 1)));
        store.get_mut(key).unwrap().play();
        assert_eq!(store.get(key).unwrap().play_count, 1);
    }

    #[test]
    fn test_song_serializes_with_external_field_names() {
        let song = Song::new("a", fields("A", "Rock", "Dark", 1));
        let json = serde_json::to_value(&song).unwrap();
        assert_eq!(json["playcount"], 0);
        assert!(json.get("last_played").is_none());
    }
}
