//! Heap sort: build a max-heap, then repeatedly move the max to the end.
//! O(n log n) always, in place after the initial copy, not stable.

use crate::traits::{Compare, SortAlgorithm};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl<T: Clone> SortAlgorithm<T> for HeapSort {
    fn name(&self) -> &'static str {
        "heap_sort"
    }

    fn sort(&self, items: &[T], compare: Compare<'_, T>) -> Vec<T> {
        let mut out = items.to_vec();
        heap_sort(&mut out, compare);
        out
    }
}

fn heap_sort<T>(items: &mut [T], compare: Compare<'_, T>) {
    let len = items.len();

    for root in (0..len / 2).rev() {
        sift_down(items, root, len, compare);
    }
    for end in (1..len).rev() {
        items.swap(0, end);
        sift_down(items, 0, end, compare);
    }
}

fn sift_down<T>(items: &mut [T], mut root: usize, len: usize, compare: Compare<'_, T>) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && compare(&items[left], &items[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < len && compare(&items[right], &items[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }

        items.swap(root, largest);
        root = largest;
    }
}
