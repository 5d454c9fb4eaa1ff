//! Top-down merge sort. O(n log n) always, O(n) extra space, stable.

use crate::traits::{Compare, SortAlgorithm};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl<T: Clone> SortAlgorithm<T> for MergeSort {
    fn name(&self) -> &'static str {
        "merge_sort"
    }

    fn sort(&self, items: &[T], compare: Compare<'_, T>) -> Vec<T> {
        merge_sort(items.to_vec(), compare)
    }
}

fn merge_sort<T>(mut items: Vec<T>, compare: Compare<'_, T>) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare);
    let right = merge_sort(right, compare);
    merge(left, right, compare)
}

fn merge<T>(left: Vec<T>, right: Vec<T>, compare: Compare<'_, T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // ties go left to keep equal items in their original order
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        out.extend(if take_left { left.next() } else { right.next() });
    }
    out
}
