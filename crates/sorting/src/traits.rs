//! Core trait for the sort algorithms.
//!
//! Every algorithm takes a borrowed slice and a comparator and returns a
//! sorted copy, so the caller's data is never touched.

use std::cmp::Ordering;

/// Comparator handed to every algorithm
pub type Compare<'c, T> = &'c dyn Fn(&T, &T) -> Ordering;

/// A comparison sort over any cloneable item.
///
/// ## Design Note
/// - `Send + Sync` lets one algorithm instance be shared across threads
/// - The comparator is a trait object so the same algorithm value can sort
///   by any [`crate::SortKey`] without being re-instantiated
pub trait SortAlgorithm<T: Clone>: Send + Sync {
    /// Returns the name of this algorithm (for logging and benchmark output)
    fn name(&self) -> &'static str;

    /// Return a sorted copy of `items`.
    ///
    /// # Arguments
    /// * `items` - The items to sort (left untouched)
    /// * `compare` - Total order over the items
    fn sort(&self, items: &[T], compare: Compare<'_, T>) -> Vec<T>;
}
