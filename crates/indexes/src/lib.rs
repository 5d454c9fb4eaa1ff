//! # Indexes Crate
//!
//! The five views the engine keeps over the song arena. Every structure
//! stores [`library::SongKey`] handles, never songs.
//!
//! ## Components
//!
//! ### Sequence
//! The canonical playlist order:
//! - Arena-backed doubly linked list
//! - Positional insert, remove, move and in-place reverse
//!
//! ### Playback History
//! Bounded recency stack:
//! - Most recent play on top, oldest evicted when full
//!
//! ### Rating Tree
//! Binary search tree keyed by star rating (1-5):
//! - Exact match and inclusive range queries
//! - Per-rating bucket sizes for the rating distribution
//!
//! ### Lookup
//! Separately chained hash map with djb2 hashing:
//! - Used twice by the engine, once by song id and once by title
//!
//! ### Explorer
//! Genre -> subgenre -> mood -> artist browse tree:
//! - Case-normalized categories, sorted listings
//! - Empty branches pruned on removal
//!
//! ## Example Usage
//!
//! ```ignore
//! use indexes::{ChainedMap, ExplorerTree, PlaybackHistory, RatingTree, Sequence};
//!
//! let key = store.insert(song);
//!
//! let mut order = Sequence::new();
//! order.push_back(key);
//!
//! let mut by_id = ChainedMap::new("Song", 64);
//! by_id.put(store.get(key).unwrap().id.clone(), key);
//!
//! let mut history = PlaybackHistory::new(100);
//! history.push(key);
//! ```

// Public modules
pub mod explorer;
pub mod history;
pub mod lookup;
pub mod rating_tree;
pub mod sequence;

// Re-export commonly used types
pub use explorer::{
    CategoryNode, CategoryStats, CategoryStructure, ExplorerTree, Level, normalize_category,
};
pub use history::{HistoryStats, PlaybackHistory};
pub use lookup::{ChainedMap, LookupStats, djb2};
pub use rating_tree::RatingTree;
pub use sequence::Sequence;

#[cfg(test)]
mod tests {
    use super::*;
    use library::{NewSong, Song, SongStore};

    #[test]
    fn test_all_indexes_share_one_handle() {
        let mut store = SongStore::new();
        let song = Song::new(
            "creep-radiohead-1",
            NewSong {
                title: "Creep".into(),
                artist: "Radiohead".into(),
                genre: "Rock".into(),
                ..NewSong::default()
            },
        );
        let key = store.insert(song.clone());

        let mut order = Sequence::new();
        let mut by_id = ChainedMap::new("Song", 8);
        let mut ratings = RatingTree::new();
        let mut tree = ExplorerTree::new();

        order.push_back(key);
        by_id.put(song.id.clone(), key);
        ratings.insert(key, 4);
        tree.add(key, &song);

        assert_eq!(order.get(0).unwrap(), key);
        assert_eq!(*by_id.get("creep-radiohead-1").unwrap(), key);
        assert_eq!(ratings.search_exact(4), &[key]);
        assert_eq!(tree.songs_in_genre("rock"), vec![key]);
    }
}
