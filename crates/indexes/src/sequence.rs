//! Sequence - the canonical playlist order.
//!
//! A doubly linked list whose nodes live in a `Vec` arena and link to each
//! other by slot index. Freed slots go on a free list and are recycled by
//! the next insertion.
//!
//! ## Complexity
//! - `push_back` / `push_front`: O(1)
//! - `insert_at` / `remove_at` / `move_to` / `get`: O(n), walking from
//!   whichever end is closer to the target position
//! - `reverse`: O(n), swaps every node's links then swaps head and tail

use library::{PlaylistError, Result, SongKey, SongStore};
use tracing::debug;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered sequence of `T` with positional insert/remove/move/reverse.
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T: Copy> Sequence<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append to the end. O(1)
    pub fn push_back(&mut self, value: T) {
        let slot = self.allocate(value);
        self.nodes[slot].prev = self.tail;

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Prepend to the front. O(1)
    pub fn push_front(&mut self, value: T) {
        let slot = self.allocate(value);
        self.nodes[slot].next = self.head;

        match self.head {
            Some(head) => self.nodes[head].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    /// Insert `value` so that it ends up at position `index`.
    ///
    /// `index == len` appends. Fails with `IndexOutOfRange` when
    /// `index > len`.
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }

        let current = self.slot_at(index).ok_or(self.out_of_range(index))?;
        let slot = self.allocate(value);
        let prev = self.nodes[current].prev;

        self.nodes[slot].prev = prev;
        self.nodes[slot].next = Some(current);
        self.nodes[current].prev = Some(slot);
        match prev {
            Some(p) => self.nodes[p].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the value at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let slot = self.slot_at(index).ok_or(self.out_of_range(index))?;
        Ok(self.unlink(slot))
    }

    /// Move the value at `from` so it is reinserted at `to`.
    ///
    /// Implemented as remove-then-insert. When moving forward the removal
    /// shifts later positions down by one, so the insert position is
    /// `to - 1`. Both indexes must be in `[0, len)`.
    pub fn move_to(&mut self, from: usize, to: usize) -> Result<()> {
        if from >= self.len {
            return Err(self.out_of_range(from));
        }
        if to >= self.len {
            return Err(self.out_of_range(to));
        }
        if from == to {
            return Ok(());
        }

        let value = self.remove_at(from)?;
        let target = if to > from { to - 1 } else { to };
        self.insert_at(value, target)?;

        debug!(from, to, target, "moved sequence entry");
        Ok(())
    }

    /// Reverse the order in place. No-op on 0 or 1 elements.
    pub fn reverse(&mut self) {
        if self.head == self.tail {
            return;
        }

        let mut current = self.head;
        while let Some(slot) = current {
            let node = &mut self.nodes[slot];
            std::mem::swap(&mut node.prev, &mut node.next);
            // old `next` now sits in `prev`
            current = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Value at `index`, walking from the closer end.
    pub fn get(&self, index: usize) -> Result<T> {
        self.slot_at(index)
            .map(|slot| self.nodes[slot].value)
            .ok_or(self.out_of_range(index))
    }

    pub fn first(&self) -> Option<T> {
        self.head.map(|slot| self.nodes[slot].value)
    }

    pub fn last(&self) -> Option<T> {
        self.tail.map(|slot| self.nodes[slot].value)
    }

    /// Position of the first value matching `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(|value| predicate(&value))
    }

    /// Front-to-back iterator
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            sequence: self,
            cursor: self.head,
            remaining: self.len,
            backwards: false,
        }
    }

    /// Back-to-front iterator
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter {
            sequence: self,
            cursor: self.tail,
            remaining: self.len,
            backwards: true,
        }
    }

    /// Snapshot of the current order
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn allocate(&mut self, value: T) -> usize {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn unlink(&mut self, slot: usize) -> T {
        let Node { value, prev, next } = self.nodes[slot].clone();

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        self.nodes[slot].prev = None;
        self.nodes[slot].next = None;
        self.free.push(slot);
        self.len -= 1;
        value
    }

    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            let mut current = self.head?;
            for _ in 0..index {
                current = self.nodes[current].next?;
            }
            Some(current)
        } else {
            let mut current = self.tail?;
            for _ in index + 1..self.len {
                current = self.nodes[current].prev?;
            }
            Some(current)
        }
    }

    fn out_of_range(&self, index: usize) -> PlaylistError {
        PlaylistError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

impl Sequence<SongKey> {
    /// Sum of the durations of every song in the sequence, in seconds.
    pub fn total_duration(&self, songs: &SongStore) -> u64 {
        self.iter()
            .filter_map(|key| songs.get(key))
            .map(|song| u64::from(song.duration))
            .sum()
    }
}

impl<T: Copy> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Sequence::new();
        for value in iter {
            sequence.push_back(value);
        }
        sequence
    }
}

/// Iterator over a [`Sequence`] in either direction.
pub struct Iter<'a, T> {
    sequence: &'a Sequence<T>,
    cursor: Option<usize>,
    remaining: usize,
    backwards: bool,
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.sequence.nodes[self.cursor?];
        self.cursor = if self.backwards { node.prev } else { node.next };
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use library::{NewSong, Song};

    fn seq(values: &[u32]) -> Sequence<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_push_and_get() {
        let mut s = Sequence::new();
        assert!(s.is_empty());
        s.push_back(2);
        s.push_back(3);
        s.push_front(1);

        assert_eq!(s.len(), 3);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(s.get(0).unwrap(), 1);
        assert_eq!(s.get(2).unwrap(), 3);
        assert_eq!(s.first(), Some(1));
        assert_eq!(s.last(), Some(3));
    }

    #[test]
    fn test_get_out_of_range() {
        let s = seq(&[1, 2]);
        assert_eq!(
            s.get(2),
            Err(PlaylistError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_get_walks_from_either_end() {
        let s = seq(&[10, 11, 12, 13, 14, 15, 16]);
        for i in 0..7 {
            assert_eq!(s.get(i).unwrap(), 10 + i as u32);
        }
    }

    #[test]
    fn test_insert_at() {
        let mut s = seq(&[1, 3]);
        s.insert_at(2, 1).unwrap();
        s.insert_at(0, 0).unwrap();
        s.insert_at(4, 4).unwrap();
        assert_eq!(s.to_vec(), vec![0, 1, 2, 3, 4]);

        assert!(s.insert_at(9, 6).is_err());
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn test_insert_into_empty() {
        let mut s = Sequence::new();
        s.insert_at(7, 0).unwrap();
        assert_eq!(s.to_vec(), vec![7]);
        assert_eq!(s.first(), s.last());
    }

    #[test]
    fn test_remove_at() {
        let mut s = seq(&[1, 2, 3, 4]);
        assert_eq!(s.remove_at(0).unwrap(), 1);
        assert_eq!(s.remove_at(2).unwrap(), 4);
        assert_eq!(s.remove_at(1).unwrap(), 3);
        assert_eq!(s.to_vec(), vec![2]);
        assert_eq!(s.remove_at(0).unwrap(), 2);
        assert!(s.is_empty());
        assert_eq!(s.first(), None);
        assert!(s.remove_at(0).is_err());
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut s = seq(&[1, 2, 3]);
        s.remove_at(1).unwrap();
        s.push_back(4);
        assert_eq!(s.nodes.len(), 3);
        assert_eq!(s.to_vec(), vec![1, 3, 4]);
    }

    #[test]
    fn test_move_to() {
        // forward move lands one slot early because of the removal shift
        let mut s = seq(&[0, 1, 2, 3]);
        s.move_to(0, 2).unwrap();
        assert_eq!(s.to_vec(), vec![1, 0, 2, 3]);

        let mut s = seq(&[0, 1, 2, 3]);
        s.move_to(3, 0).unwrap();
        assert_eq!(s.to_vec(), vec![3, 0, 1, 2]);

        let mut s = seq(&[0, 1, 2]);
        s.move_to(1, 1).unwrap();
        assert_eq!(s.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_move_to_out_of_range() {
        let mut s = seq(&[0, 1, 2]);
        assert!(s.move_to(3, 0).is_err());
        assert!(s.move_to(0, 3).is_err());
        assert_eq!(s.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_reverse() {
        let mut s = seq(&[1, 2, 3, 4]);
        s.reverse();
        assert_eq!(s.to_vec(), vec![4, 3, 2, 1]);
        assert_eq!(s.iter_rev().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        s.reverse();
        assert_eq!(s.to_vec(), vec![1, 2, 3, 4]);

        let mut single = seq(&[1]);
        single.reverse();
        assert_eq!(single.to_vec(), vec![1]);

        let mut empty: Sequence<u32> = Sequence::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_operations_after_reverse() {
        let mut s = seq(&[1, 2, 3]);
        s.reverse();
        s.push_back(0);
        s.insert_at(9, 1).unwrap();
        assert_eq!(s.to_vec(), vec![3, 9, 2, 1, 0]);
        assert_eq!(s.remove_at(4).unwrap(), 0);
        assert_eq!(s.last(), Some(1));
    }

    #[test]
    fn test_find_and_clear() {
        let mut s = seq(&[5, 6, 7]);
        assert_eq!(s.find(|v| *v == 7), Some(2));
        assert_eq!(s.find(|v| *v == 8), None);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.iter().count(), 0);
    }

    #[test]
    fn test_total_duration() {
        let mut store = SongStore::new();
        let mut s = Sequence::new();
        for duration in [400, 150, 250] {
            let song = Song::new(
                format!("song-{duration}"),
                NewSong {
                    title: "t".into(),
                    artist: "a".into(),
                    duration,
                    ..NewSong::default()
                },
            );
            s.push_back(store.insert(song));
        }
        assert_eq!(s.total_duration(&store), 800);
    }
}
