//! Quick sort with a Lomuto partition and the last element as pivot.
//!
//! O(n log n) on average. Already-sorted and reverse-sorted input (and
//! runs of equal items) degrade it to O(n^2) comparisons, since the last
//! element is then always an extreme. Recursion always descends into the
//! smaller partition, so stack depth stays O(log n) even then.

use crate::traits::{Compare, SortAlgorithm};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl<T: Clone> SortAlgorithm<T> for QuickSort {
    fn name(&self) -> &'static str {
        "quick_sort"
    }

    fn sort(&self, items: &[T], compare: Compare<'_, T>) -> Vec<T> {
        let mut out = items.to_vec();
        quick_sort(&mut out, compare);
        out
    }
}

fn quick_sort<T>(mut items: &mut [T], compare: Compare<'_, T>) {
    while items.len() > 1 {
        let pivot = partition(items, compare);
        let (left, right) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left, compare);
            items = right;
        } else {
            quick_sort(right, compare);
            items = left;
        }
    }
}

/// Returns the final position of the pivot.
fn partition<T>(items: &mut [T], compare: Compare<'_, T>) -> usize {
    let last = items.len() - 1;
    let mut store = 0;

    for i in 0..last {
        if compare(&items[i], &items[last]) != Ordering::Greater {
            items.swap(store, i);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}
