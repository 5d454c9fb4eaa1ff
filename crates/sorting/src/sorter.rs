//! PlaylistSorter ties the algorithms to the song arena.
//!
//! Sort operations work on lists of [`SongKey`] handles: each handle is
//! resolved once, the resolved rows are sorted with the chosen algorithm
//! and key, and the handles come back out in the new order. Handles that
//! no longer resolve are dropped.

use crate::algorithms::{Algorithm, MergeSort};
use crate::criteria::SortKey;
use crate::traits::SortAlgorithm;
use indexes::Sequence;
use library::{Song, SongKey, SongStore};
use std::cmp::Ordering;
use std::time::{Duration, Instant};
use tracing::debug;

type Row<'a> = (SongKey, &'a Song);

/// Wall-clock time one algorithm took in a benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub items: usize,
    pub elapsed: Duration,
}

/// Sorts handle lists by resolving them against a [`SongStore`].
///
/// ## Usage
/// ```ignore
/// let sorter = PlaylistSorter::new(&store);
/// let by_length = sorter.sort_keys(&keys, SortKey::DurationDesc, Algorithm::Merge);
///
/// // rewrite the playlist order in place
/// sorter.sort_sequence(&mut order, SortKey::Title, Algorithm::Quick);
/// ```
pub struct PlaylistSorter<'a> {
    songs: &'a SongStore,
}

impl<'a> PlaylistSorter<'a> {
    pub fn new(songs: &'a SongStore) -> Self {
        Self { songs }
    }

    /// Sorted copy of `keys`.
    pub fn sort_keys(&self, keys: &[SongKey], key: SortKey, algorithm: Algorithm) -> Vec<SongKey> {
        let rows = self.rows(keys);
        let sorted = algorithm.sort(&rows, &|a: &Row<'_>, b: &Row<'_>| key.compare(a.1, b.1));
        sorted.into_iter().map(|(k, _)| k).collect()
    }

    /// Sorted copies of the songs themselves.
    pub fn sort_songs(
        &self,
        keys: &[SongKey],
        key: SortKey,
        algorithm: Algorithm,
    ) -> Vec<&'a Song> {
        let rows = self.rows(keys);
        let sorted = algorithm.sort(&rows, &|a: &Row<'_>, b: &Row<'_>| key.compare(a.1, b.1));
        sorted.into_iter().map(|(_, song)| song).collect()
    }

    /// Drain `sequence`, sort it, and rebuild it in the new order.
    pub fn sort_sequence(
        &self,
        sequence: &mut Sequence<SongKey>,
        key: SortKey,
        algorithm: Algorithm,
    ) {
        let sorted = self.sort_keys(&sequence.to_vec(), key, algorithm);

        sequence.clear();
        for handle in sorted {
            sequence.push_back(handle);
        }

        debug!(
            "Sorted sequence by {} using {} ({} songs)",
            key.name(),
            algorithm.name(),
            sequence.len()
        );
    }

    /// Sort by several keys, the first key taking precedence.
    ///
    /// Runs one stable merge sort per key, starting from the last key, so
    /// earlier keys only reorder songs that later keys left tied.
    pub fn multi_criteria_sort(&self, keys: &[SongKey], criteria: &[SortKey]) -> Vec<SongKey> {
        let mut rows = self.rows(keys);
        for criterion in criteria.iter().rev() {
            rows = MergeSort.sort(&rows, &|a: &Row<'_>, b: &Row<'_>| criterion.compare(a.1, b.1));
        }
        rows.into_iter().map(|(k, _)| k).collect()
    }

    /// True when no adjacent pair in `keys` is out of order under `key`.
    pub fn is_sorted(&self, keys: &[SongKey], key: SortKey) -> bool {
        self.rows(keys)
            .windows(2)
            .all(|pair| key.compare(pair[0].1, pair[1].1) != Ordering::Greater)
    }

    /// Time every algorithm on the same input.
    ///
    /// Purely observational: the sorted output is discarded.
    pub fn benchmark(&self, keys: &[SongKey], key: SortKey) -> Vec<BenchmarkResult> {
        let rows = self.rows(keys);

        Algorithm::ALL
            .into_iter()
            .map(|algorithm| {
                let start = Instant::now();
                let sorted =
                    algorithm.sort(&rows, &|a: &Row<'_>, b: &Row<'_>| key.compare(a.1, b.1));
                let elapsed = start.elapsed();

                debug!(
                    "Benchmark: {} sorted {} songs in {:?}",
                    algorithm.name(),
                    sorted.len(),
                    elapsed
                );
                BenchmarkResult {
                    algorithm,
                    items: sorted.len(),
                    elapsed,
                }
            })
            .collect()
    }

    fn rows(&self, keys: &[SongKey]) -> Vec<Row<'a>> {
        keys.iter()
            .filter_map(|&k| self.songs.get(k).map(|song| (k, song)))
            .collect()
    }
}
