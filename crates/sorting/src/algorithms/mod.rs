//! The three sort implementations and the selector that picks one by name.

pub mod heap;
pub mod merge;
pub mod quick;

pub use heap::HeapSort;
pub use merge::MergeSort;
pub use quick::QuickSort;

use crate::traits::{Compare, SortAlgorithm};
use std::fmt;
use std::str::FromStr;

/// Which sort implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Merge, Algorithm::Quick, Algorithm::Heap];

    /// Parse "merge", "quick" or "heap" (a `_sort` suffix is accepted).
    /// Anything else falls back to merge sort.
    pub fn from_name(name: &str) -> Algorithm {
        match name.trim().to_ascii_lowercase().trim_end_matches("_sort") {
            "quick" => Algorithm::Quick,
            "heap" => Algorithm::Heap,
            _ => Algorithm::Merge,
        }
    }

    /// Name reported in benchmark output, e.g. `merge_sort`
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Merge => "merge_sort",
            Algorithm::Quick => "quick_sort",
            Algorithm::Heap => "heap_sort",
        }
    }

    /// Run the selected implementation.
    pub fn sort<T: Clone>(self, items: &[T], compare: Compare<'_, T>) -> Vec<T> {
        match self {
            Algorithm::Merge => MergeSort.sort(items, compare),
            Algorithm::Quick => QuickSort.sort(items, compare),
            Algorithm::Heap => HeapSort.sort(items, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Algorithm::from_name(s))
    }
}
