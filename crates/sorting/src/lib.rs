//! Sorting for playlists.
//!
//! This crate provides:
//! - SortKey, the eight orderings a playlist can be put in
//! - SortAlgorithm trait with merge, quick and heap sort implementations
//! - PlaylistSorter for sorting handle lists, rebuilding a sequence in
//!   sorted order, multi-key sorts and timing comparisons
//!
//! ## Architecture
//! Algorithms are generic over the item type and know nothing about songs.
//! `PlaylistSorter` resolves handles against the song store, hands the
//! algorithm a comparator built from a `SortKey`, then maps the result back
//! to handles.
//!
//! ## Example Usage
//! ```ignore
//! use sorting::{Algorithm, PlaylistSorter, SortKey};
//!
//! let sorter = PlaylistSorter::new(&store);
//! sorter.sort_sequence(&mut order, SortKey::DurationDesc, Algorithm::from_name("quick"));
//!
//! for result in sorter.benchmark(&order.to_vec(), SortKey::Title) {
//!     println!("{}: {:?}", result.algorithm, result.elapsed);
//! }
//! ```

pub mod algorithms;
pub mod criteria;
pub mod sorter;
pub mod traits;

// Re-export main types
pub use algorithms::{Algorithm, HeapSort, MergeSort, QuickSort};
pub use criteria::SortKey;
pub use sorter::{BenchmarkResult, PlaylistSorter};
pub use traits::{Compare, SortAlgorithm};
