//! # Playlist Engine
//!
//! Owns the song arena and all five indexes, and applies every mutation to
//! each index that needs it:
//!
//! | Operation      | Sequence | History | Ratings | Id/Title lookup | Categories |
//! |----------------|----------|---------|---------|-----------------|------------|
//! | `add_song`     | append   |         | if rated| put             | add        |
//! | `delete_song`  | remove   | purge   | if rated| remove          | remove     |
//! | `move_song`    | move     |         |         |                 |            |
//! | `play_song`    | read     | push    |         |                 |            |
//! | `rate_song`    |          |         | re-file | read            |            |
//!
//! The sequence is the authority on existence and position: index-based
//! operations fail there first, before any other index is touched.
//!
//! ## Concurrency
//! The engine is a plain single-writer value. A host that shares it across
//! threads must serialize writes itself (e.g. behind a `Mutex`), since a
//! mutation updates several indexes in turn.

use crate::config::EngineConfig;
use crate::recommend::Recommender;
use crate::snapshot::{LookupReport, PlaylistInfo, PlaylistStats, Snapshot};
use chrono::{DateTime, Utc};
use indexes::{
    CategoryStructure, ChainedMap, ExplorerTree, HistoryStats, PlaybackHistory, RatingTree,
    Sequence,
};
use library::{NewSong, PlaylistError, Result, Song, SongKey, SongStore, is_valid_rating};
use sorting::{Algorithm, BenchmarkResult, PlaylistSorter, SortKey};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// The playlist coordinator.
pub struct PlaylistEngine {
    songs: SongStore,
    order: Sequence<SongKey>,
    history: PlaybackHistory,
    ratings: RatingTree,
    by_id: ChainedMap<SongKey>,
    by_title: ChainedMap<SongKey>,
    categories: ExplorerTree,
    recommender: Recommender,

    config: EngineConfig,
    total_duration: u64,
    created_at: DateTime<Utc>,
    /// Last nanosecond stamp handed out in an id
    last_id_stamp: i64,
}

impl PlaylistEngine {
    /// Create an empty engine with default settings and the given name.
    pub fn new(playlist_name: impl Into<String>) -> Self {
        Self::with_config(EngineConfig::default().with_playlist_name(playlist_name))
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            songs: SongStore::new(),
            order: Sequence::new(),
            history: PlaybackHistory::new(config.history_capacity),
            ratings: RatingTree::new(),
            by_id: ChainedMap::new("Song", config.lookup_capacity),
            by_title: ChainedMap::new("Title", config.lookup_capacity),
            categories: ExplorerTree::new(),
            recommender: Recommender::from_config(&config),
            config,
            total_duration: 0,
            created_at: Utc::now(),
            last_id_stamp: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ===== Mutations =====

    /// Add a song to the end of the playlist and return its generated id.
    #[instrument(skip(self, new_song), fields(title = %new_song.title))]
    pub fn add_song(&mut self, new_song: NewSong) -> Result<String> {
        if new_song.title.trim().is_empty() || new_song.artist.trim().is_empty() {
            return Err(PlaylistError::Validation(
                "title and artist are required".to_string(),
            ));
        }

        let id = self.generate_id(&new_song.title, &new_song.artist);
        if self.by_id.contains(&id) {
            return Err(PlaylistError::Duplicate { id });
        }

        let song = Song::new(id.clone(), new_song);
        let duration = u64::from(song.duration);
        let title = song.title.clone();

        let key = self.songs.insert(song);
        self.order.push_back(key);
        self.by_id.put(id.clone(), key);
        self.by_title.put(title, key);
        if let Some(song) = self.songs.get(key) {
            self.categories.add(key, song);
        }
        self.total_duration += duration;

        debug!("Added song {} at position {}", id, self.order.len() - 1);
        Ok(id)
    }

    /// Remove the song at `index` from every index and return it.
    #[instrument(skip(self))]
    pub fn delete_song(&mut self, index: usize) -> Result<Song> {
        let key = self.order.remove_at(index)?;
        let song = self
            .songs
            .remove(key)
            .ok_or_else(|| PlaylistError::NotFound {
                what: "Song handle",
                key: key.to_string(),
            })?;

        if let Err(err) = self.by_id.remove(&song.id) {
            warn!("Id index out of sync on delete: {}", err);
        }
        // Only drop the title entry if a later duplicate title has not taken it over
        if self.by_title.get(&song.title).is_ok_and(|&k| k == key) {
            if let Err(err) = self.by_title.remove(&song.title) {
                warn!("Title index out of sync on delete: {}", err);
            }
        }
        if song.is_rated() && !self.ratings.remove(key, song.rating) {
            warn!("Song {} missing from rating bucket {}", song.id, song.rating);
        }
        if !self.categories.remove(key) {
            warn!("Song {} missing from category tree", song.id);
        }
        let purged = self.history.remove_all(key);
        self.total_duration = self
            .total_duration
            .saturating_sub(u64::from(song.duration));

        debug!("Deleted song {} (purged {} history entries)", song.id, purged);
        Ok(song)
    }

    /// Move the song at `from` so it is reinserted at `to`.
    ///
    /// Moving forward lands one slot before `to`, since removing the song
    /// first shifts later positions down.
    pub fn move_song(&mut self, from: usize, to: usize) -> Result<()> {
        self.order.move_to(from, to)
    }

    /// Reverse the playlist order in place.
    pub fn reverse(&mut self) {
        self.order.reverse();
        debug!("Reversed playlist of {} songs", self.order.len());
    }

    /// Play the song at `index`: bump its play count, stamp `last_played`
    /// and push it onto the history.
    #[instrument(skip(self))]
    pub fn play_song(&mut self, index: usize) -> Result<&Song> {
        let key = self.order.get(index)?;
        let song = self
            .songs
            .get_mut(key)
            .ok_or_else(|| PlaylistError::song_not_found(key.to_string()))?;

        song.play();
        self.history.push(key);

        debug!("Playing {} (play count {})", song.id, song.play_count);
        Ok(song)
    }

    /// Forget the most recent play.
    ///
    /// Only the history entry goes away: the song keeps its play count and
    /// `last_played` stamp.
    pub fn undo_last_play(&mut self) -> Result<&Song> {
        let key = self.history.pop()?;
        self.songs
            .get(key)
            .ok_or_else(|| PlaylistError::song_not_found(key.to_string()))
    }

    /// Give a song a 1-5 star rating, moving it to the matching bucket.
    #[instrument(skip(self))]
    pub fn rate_song(&mut self, id: &str, rating: u8) -> Result<()> {
        if !is_valid_rating(rating) {
            return Err(PlaylistError::Validation(
                "rating must be between 1 and 5".to_string(),
            ));
        }

        let key = *self.by_id.get(id)?;
        let song = self
            .songs
            .get_mut(key)
            .ok_or_else(|| PlaylistError::song_not_found(id))?;

        if song.is_rated() && !self.ratings.remove(key, song.rating) {
            warn!("Song {} missing from rating bucket {}", id, song.rating);
        }
        song.set_rating(rating);
        self.ratings.insert(key, rating);

        debug!("Rated {} with {} stars", id, rating);
        Ok(())
    }

    /// Sort the playlist in place.
    pub fn sort_playlist(&mut self, key: SortKey, algorithm: Algorithm) {
        PlaylistSorter::new(&self.songs)
            .sort_sequence(&mut self.order, key, algorithm);
    }

    /// Drop every song and empty every index, keeping name and settings.
    pub fn clear_playlist(&mut self) {
        self.songs.clear();
        self.order.clear();
        self.history.clear();
        self.ratings.clear();
        self.by_id.clear();
        self.by_title.clear();
        self.categories.clear();
        self.total_duration = 0;
        info!("Cleared playlist '{}'", self.config.playlist_name);
    }

    pub fn set_playlist_name(&mut self, name: impl Into<String>) {
        self.config.playlist_name = name.into();
    }

    // ===== Lookups =====

    pub fn playlist_name(&self) -> &str {
        &self.config.playlist_name
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all song durations in seconds
    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }

    /// The playlist in its current order
    pub fn current_playlist(&self) -> Vec<&Song> {
        self.resolve(self.order.iter())
    }

    pub fn song_at(&self, index: usize) -> Result<&Song> {
        let key = self.order.get(index)?;
        self.songs
            .get(key)
            .ok_or_else(|| PlaylistError::song_not_found(key.to_string()))
    }

    pub fn search_by_id(&self, id: &str) -> Result<&Song> {
        let key = *self.by_id.get(id)?;
        self.songs
            .get(key)
            .ok_or_else(|| PlaylistError::song_not_found(id))
    }

    /// Exact, case-sensitive title match. With duplicate titles the most
    /// recently added song wins.
    pub fn search_by_title(&self, title: &str) -> Result<&Song> {
        let key = *self.by_title.get(title)?;
        self.songs.get(key).ok_or_else(|| PlaylistError::NotFound {
            what: "Title",
            key: title.to_string(),
        })
    }

    pub fn songs_by_rating(&self, rating: u8) -> Vec<&Song> {
        self.songs.resolve(self.ratings.search_exact(rating))
    }

    /// Songs rated within `[min, max]`, lowest rating first
    pub fn songs_by_rating_range(&self, min: u8, max: u8) -> Vec<&Song> {
        self.songs.resolve(&self.ratings.range_query(min, max))
    }

    /// Up to `count` recent plays, most recent first
    pub fn recently_played(&self, count: usize) -> Vec<&Song> {
        self.songs.resolve(&self.history.recent(count))
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_stats(&self) -> HistoryStats {
        self.history.stats(&self.songs)
    }

    // ===== Browsing =====

    pub fn genres(&self) -> Vec<String> {
        self.categories.genres()
    }

    pub fn subgenres(&self, genre: &str) -> Vec<String> {
        self.categories.subgenres(genre)
    }

    pub fn moods(&self, genre: &str, subgenre: &str) -> Vec<String> {
        self.categories.moods(genre, subgenre)
    }

    pub fn artists(&self, genre: &str, subgenre: &str, mood: &str) -> Vec<String> {
        self.categories.artists(genre, subgenre, mood)
    }

    pub fn songs_at(&self, genre: &str, subgenre: &str, mood: &str, artist: &str) -> Vec<&Song> {
        self.songs
            .resolve(self.categories.songs_at(genre, subgenre, mood, artist))
    }

    pub fn songs_in_genre(&self, genre: &str) -> Vec<&Song> {
        self.songs.resolve(&self.categories.songs_in_genre(genre))
    }

    pub fn songs_with_mood(&self, mood: &str) -> Vec<&Song> {
        self.songs.resolve(&self.categories.songs_with_mood(mood))
    }

    /// Whole browse tree with a song count per artist
    pub fn category_structure(&self) -> CategoryStructure {
        self.categories.structure()
    }

    /// `[genre, subgenre, mood, artist]` a song is filed under
    pub fn song_path(&self, id: &str) -> Result<[String; 4]> {
        let key = *self.by_id.get(id)?;
        self.categories
            .find_path(key)
            .ok_or_else(|| PlaylistError::NotFound {
                what: "Category path for song",
                key: id.to_string(),
            })
    }

    // ===== Derived views =====

    /// Songs similar to recent plays, backfilled from the playlist.
    /// A `count` of zero uses the configured default.
    pub fn recommendations(&self, count: usize) -> Vec<&Song> {
        let keys = self
            .recommender
            .recommend(&self.songs, &self.order, &self.history, count);
        self.songs.resolve(&keys)
    }

    /// Time each sort algorithm on the current playlist by title.
    pub fn benchmark_sort(&self) -> Vec<BenchmarkResult> {
        PlaylistSorter::new(&self.songs)
            .benchmark(&self.order.to_vec(), SortKey::Title)
    }

    pub fn snapshot(&self) -> Snapshot {
        let top_longest = PlaylistSorter::new(&self.songs)
            .sort_songs(&self.order.to_vec(), SortKey::DurationDesc, Algorithm::Merge)
            .into_iter()
            .take(self.config.snapshot_top_longest)
            .cloned()
            .collect();

        Snapshot {
            playlist: PlaylistInfo {
                name: self.config.playlist_name.clone(),
                total_songs: self.order.len(),
                total_duration: self.total_duration,
                created_at: self.created_at,
                last_updated: Utc::now(),
            },
            top_longest,
            recently_played: self
                .recently_played(self.config.snapshot_recent)
                .into_iter()
                .cloned()
                .collect(),
            rating_distribution: self.ratings.stats_by_rating(),
            categories: self.categories.stats(),
            playback: self.history.stats(&self.songs),
            lookups: LookupReport {
                by_id: self.by_id.stats(),
                by_title: self.by_title.stats(),
            },
        }
    }

    pub fn stats(&self) -> PlaylistStats {
        let playlist = self.current_playlist();
        let total_songs = playlist.len();
        let unique_artists: HashSet<&str> = playlist.iter().map(|s| s.artist.as_str()).collect();

        PlaylistStats {
            total_songs,
            total_duration: self.total_duration,
            average_song_length: if total_songs == 0 {
                0.0
            } else {
                self.total_duration as f64 / total_songs as f64
            },
            total_play_count: playlist.iter().map(|s| u64::from(s.play_count)).sum(),
            unique_artists: unique_artists.len(),
            unique_genres: self.categories.stats().genres,
            rating_distribution: self.ratings.stats_by_rating(),
            history_size: self.history.len(),
        }
    }

    // ===== Helpers =====

    /// `title-artist-<nanos>`, lower-cased with spaces turned into dashes.
    /// The stamp never repeats within one engine, even inside one clock tick.
    fn generate_id(&mut self, title: &str, artist: &str) -> String {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        let stamp = now.max(self.last_id_stamp.saturating_add(1));
        self.last_id_stamp = stamp;

        format!("{}-{}-{}", slug(title), slug(artist), stamp)
    }

    fn resolve(&self, keys: impl Iterator<Item = SongKey>) -> Vec<&Song> {
        keys.filter_map(|key| self.songs.get(key)).collect()
    }
}

impl Default for PlaylistEngine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

fn slug(s: &str) -> String {
    s.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, artist: &str, genre: &str, mood: &str, duration: u32) -> NewSong {
        NewSong {
            title: title.to_string(),
            artist: artist.to_string(),
            album: "Album".to_string(),
            genre: genre.to_string(),
            subgenre: "Sub".to_string(),
            mood: mood.to_string(),
            duration,
            bpm: 120,
        }
    }

    fn engine_with(n: usize) -> (PlaylistEngine, Vec<String>) {
        let mut engine = PlaylistEngine::new("Test");
        let ids = (0..n)
            .map(|i| {
                engine
                    .add_song(fields(
                        &format!("Song {i}"),
                        "Artist",
                        "Rock",
                        "Dark",
                        100 + i as u32,
                    ))
                    .unwrap()
            })
            .collect();
        (engine, ids)
    }

    #[test]
    fn test_add_song_indexes_everywhere() {
        let (engine, ids) = engine_with(1);
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.search_by_id(&ids[0]).unwrap().title, "Song 0");
        assert_eq!(engine.search_by_title("Song 0").unwrap().id, ids[0]);
        assert_eq!(engine.genres(), vec!["Rock"]);
        assert_eq!(engine.total_duration(), 100);
        assert!(engine.songs_by_rating_range(1, 5).is_empty());
    }

    #[test]
    fn test_add_song_requires_title_and_artist() {
        let mut engine = PlaylistEngine::default();
        let err = engine
            .add_song(fields("  ", "Artist", "", "", 1))
            .unwrap_err();
        assert!(matches!(err, PlaylistError::Validation(_)));
        let err = engine.add_song(fields("Title", "", "", "", 1)).unwrap_err();
        assert!(matches!(err, PlaylistError::Validation(_)));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_id_format_and_uniqueness() {
        let mut engine = PlaylistEngine::default();
        let a = engine
            .add_song(fields("Hey Jude", "The Beatles", "", "", 1))
            .unwrap();
        let b = engine
            .add_song(fields("Hey Jude", "The Beatles", "", "", 1))
            .unwrap();

        assert!(a.starts_with("hey-jude-the-beatles-"));
        assert_ne!(a, b);
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn test_delete_song_cleans_every_index() {
        let (mut engine, ids) = engine_with(2);
        engine.rate_song(&ids[0], 4).unwrap();
        engine.play_song(0).unwrap();

        let deleted = engine.delete_song(0).unwrap();
        assert_eq!(deleted.id, ids[0]);
        assert_eq!(engine.len(), 1);
        assert!(engine.search_by_id(&ids[0]).is_err());
        assert!(engine.search_by_title("Song 0").is_err());
        assert!(engine.songs_by_rating(4).is_empty());
        assert_eq!(engine.history_len(), 0);
        assert_eq!(engine.total_duration(), 101);
        assert_eq!(engine.songs_in_genre("Rock").len(), 1);
    }

    #[test]
    fn test_delete_out_of_range() {
        let (mut engine, _) = engine_with(1);
        assert_eq!(
            engine.delete_song(1).unwrap_err(),
            PlaylistError::IndexOutOfRange { index: 1, len: 1 }
        );
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_duplicate_title_keeps_survivor() {
        let mut engine = PlaylistEngine::default();
        let first = engine.add_song(fields("Intro", "A", "", "", 1)).unwrap();
        let second = engine.add_song(fields("Intro", "B", "", "", 1)).unwrap();

        // last write wins
        assert_eq!(engine.search_by_title("Intro").unwrap().id, second);

        engine.delete_song(0).unwrap();
        assert_eq!(engine.search_by_title("Intro").unwrap().id, second);
        assert!(engine.search_by_id(&first).is_err());
    }

    #[test]
    fn test_play_and_undo() {
        let (mut engine, ids) = engine_with(2);
        engine.play_song(1).unwrap();
        let played = engine.play_song(1).unwrap();
        assert_eq!(played.play_count, 2);
        assert!(played.last_played.is_some());

        let undone = engine.undo_last_play().unwrap();
        assert_eq!(undone.id, ids[1]);
        assert_eq!(undone.play_count, 2);
        assert_eq!(engine.history_len(), 1);

        engine.undo_last_play().unwrap();
        assert_eq!(
            engine.undo_last_play().unwrap_err(),
            PlaylistError::EmptyHistory
        );
    }

    #[test]
    fn test_play_out_of_range() {
        let (mut engine, _) = engine_with(1);
        assert!(engine.play_song(5).is_err());
        assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn test_rate_song_moves_buckets() {
        let (mut engine, ids) = engine_with(1);
        engine.rate_song(&ids[0], 4).unwrap();
        engine.rate_song(&ids[0], 5).unwrap();

        assert!(engine.songs_by_rating(4).is_empty());
        assert_eq!(engine.songs_by_rating(5).len(), 1);
        assert_eq!(engine.search_by_id(&ids[0]).unwrap().rating, 5);
    }

    #[test]
    fn test_rate_song_errors() {
        let (mut engine, ids) = engine_with(1);
        assert!(matches!(
            engine.rate_song(&ids[0], 0),
            Err(PlaylistError::Validation(_))
        ));
        assert!(matches!(
            engine.rate_song(&ids[0], 6),
            Err(PlaylistError::Validation(_))
        ));
        assert!(matches!(
            engine.rate_song("nope", 3),
            Err(PlaylistError::NotFound { .. })
        ));
    }

    #[test]
    fn test_move_and_reverse() {
        let (mut engine, ids) = engine_with(3);
        engine.move_song(2, 0).unwrap();
        let order: Vec<_> = engine
            .current_playlist()
            .iter()
            .map(|s| s.id.clone())
            .collect();
        assert_eq!(order, vec![ids[2].clone(), ids[0].clone(), ids[1].clone()]);

        engine.reverse();
        assert_eq!(engine.song_at(0).unwrap().id, ids[1]);
        assert!(engine.move_song(0, 3).is_err());
    }

    #[test]
    fn test_sort_playlist() {
        let mut engine = PlaylistEngine::default();
        for duration in [400, 150, 250] {
            engine
                .add_song(fields(&format!("D{duration}"), "A", "", "", duration))
                .unwrap();
        }
        engine.sort_playlist(SortKey::DurationDesc, Algorithm::Merge);
        let durations: Vec<_> = engine
            .current_playlist()
            .iter()
            .map(|s| s.duration)
            .collect();
        assert_eq!(durations, vec![400, 250, 150]);
    }

    #[test]
    fn test_song_path() {
        let mut engine = PlaylistEngine::default();
        let id = engine
            .add_song(fields("Creep", "radiohead", "rock", "sad", 238))
            .unwrap();
        assert_eq!(
            engine.song_path(&id).unwrap(),
            [
                "Rock".to_string(),
                "Sub".to_string(),
                "Sad".to_string(),
                "Radiohead".to_string()
            ]
        );
        assert!(engine.song_path("missing").is_err());
        assert_eq!(engine.category_structure()["Rock"]["Sub"]["Sad"]["Radiohead"], 1);
    }

    #[test]
    fn test_stats() {
        let (mut engine, ids) = engine_with(2);
        engine.rate_song(&ids[1], 3).unwrap();
        engine.play_song(0).unwrap();

        let stats = engine.stats();
        assert_eq!(stats.total_songs, 2);
        assert_eq!(stats.total_duration, 201);
        assert_eq!(stats.average_song_length, 100.5);
        assert_eq!(stats.total_play_count, 1);
        assert_eq!(stats.unique_artists, 1);
        assert_eq!(stats.unique_genres, 1);
        assert_eq!(stats.rating_distribution.get(&3), Some(&1));
        assert_eq!(stats.history_size, 1);

        let empty = PlaylistEngine::default().stats();
        assert_eq!(empty.average_song_length, 0.0);
    }

    #[test]
    fn test_snapshot() {
        let config = EngineConfig::default()
            .with_playlist_name("Snap")
            .with_snapshot_top_longest(2);
        let mut engine = PlaylistEngine::with_config(config);
        for (title, duration) in [("a", 10), ("b", 30), ("c", 20)] {
            engine
                .add_song(fields(title, "X", "Pop", "Happy", duration))
                .unwrap();
        }
        engine.play_song(0).unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.playlist.name, "Snap");
        assert_eq!(snapshot.playlist.total_songs, 3);
        assert_eq!(snapshot.playlist.total_duration, 60);
        let longest: Vec<_> = snapshot
            .top_longest
            .iter()
            .map(|s| s.duration)
            .collect();
        assert_eq!(longest, vec![30, 20]);
        assert_eq!(snapshot.recently_played.len(), 1);
        assert_eq!(snapshot.categories.genres, 1);
        assert_eq!(snapshot.playback.total_songs, 1);
        assert_eq!(snapshot.lookups.by_id.size, 3);
        assert_eq!(snapshot.lookups.by_title.capacity, 64);

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"top_longest\""));
    }

    #[test]
    fn test_clear_playlist() {
        let (mut engine, ids) = engine_with(3);
        engine.rate_song(&ids[0], 2).unwrap();
        engine.play_song(0).unwrap();

        engine.clear_playlist();
        assert!(engine.is_empty());
        assert_eq!(engine.total_duration(), 0);
        assert_eq!(engine.history_len(), 0);
        assert!(engine.genres().is_empty());
        assert!(engine.songs_by_rating(2).is_empty());
        assert_eq!(engine.playlist_name(), "Test");

        engine.add_song(fields("Fresh", "A", "", "", 1)).unwrap();
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_benchmark_sort() {
        let (engine, _) = engine_with(5);
        let results = engine.benchmark_sort();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.items == 5));
    }
}
