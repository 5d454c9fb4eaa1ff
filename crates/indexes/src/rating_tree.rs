//! Rating index - a binary search tree keyed by star rating.
//!
//! Each node holds one rating value (1-5) and the bucket of songs carrying
//! that rating, in insertion order. With only five keys the tree never gets
//! deep, but it is a plain unbalanced BST and keeps BST semantics: deleting
//! an emptied node with two children promotes its in-order successor.

use library::{SongKey, is_valid_rating};
use std::cmp::Ordering;
use std::collections::BTreeMap;

type Link = Option<Box<RatingNode>>;

#[derive(Debug, Clone)]
struct RatingNode {
    rating: u8,
    bucket: Vec<SongKey>,
    left: Link,
    right: Link,
}

impl RatingNode {
    fn new(rating: u8, key: SongKey) -> Self {
        Self {
            rating,
            bucket: vec![key],
            left: None,
            right: None,
        }
    }
}

/// BST of rating -> songs with that rating.
#[derive(Debug, Clone, Default)]
pub struct RatingTree {
    root: Link,
    node_count: usize,
}

impl RatingTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` to the bucket for `rating`.
    ///
    /// Returns false (and does nothing) when `rating` is not 1-5.
    pub fn insert(&mut self, key: SongKey, rating: u8) -> bool {
        if !is_valid_rating(rating) {
            return false;
        }
        if Self::insert_node(&mut self.root, key, rating) {
            self.node_count += 1;
        }
        true
    }

    /// Songs with exactly `rating`, in insertion order.
    pub fn search_exact(&self, rating: u8) -> &[SongKey] {
        Self::find(&self.root, rating)
            .map(|node| node.bucket.as_slice())
            .unwrap_or(&[])
    }

    /// Remove `key` from the bucket for `rating`, deleting the node once
    /// its bucket is empty. Returns whether the key was present.
    pub fn remove(&mut self, key: SongKey, rating: u8) -> bool {
        let Some(node) = Self::find_mut(&mut self.root, rating) else {
            return false;
        };
        let Some(pos) = node.bucket.iter().position(|&k| k == key) else {
            return false;
        };
        node.bucket.remove(pos);

        if node.bucket.is_empty() {
            self.root = Self::delete_node(self.root.take(), rating);
            self.node_count -= 1;
        }
        true
    }

    /// Remove `key` wherever it is, returning the rating it was filed under.
    pub fn remove_any(&mut self, key: SongKey) -> Option<u8> {
        let rating = self.rating_of(key)?;
        self.remove(key, rating);
        Some(rating)
    }

    /// Rating bucket `key` is currently filed under, if any.
    pub fn rating_of(&self, key: SongKey) -> Option<u8> {
        let mut found = None;
        Self::walk_in_order(&self.root, &mut |node| {
            if found.is_none() && node.bucket.contains(&key) {
                found = Some(node.rating);
            }
        });
        found
    }

    /// Every song rated in `[min, max]`, lowest rating first.
    ///
    /// Empty when `min > max` or either bound is not a valid rating.
    pub fn range_query(&self, min: u8, max: u8) -> Vec<SongKey> {
        if min > max || !is_valid_rating(min) || !is_valid_rating(max) {
            return Vec::new();
        }
        let mut out = Vec::new();
        Self::collect_range(&self.root, min, max, &mut out);
        out
    }

    /// Bucket sizes per rating. Ratings with no songs are absent.
    pub fn stats_by_rating(&self) -> BTreeMap<u8, usize> {
        let mut stats = BTreeMap::new();
        Self::walk_in_order(&self.root, &mut |node| {
            stats.insert(node.rating, node.bucket.len());
        });
        stats
    }

    /// Every rated song, lowest rating first.
    pub fn all_sorted(&self) -> Vec<SongKey> {
        let mut out = Vec::new();
        Self::walk_in_order(&self.root, &mut |node| {
            out.extend_from_slice(&node.bucket);
        });
        out
    }

    /// Number of distinct ratings present
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of songs across all buckets
    pub fn total_len(&self) -> usize {
        self.stats_by_rating().values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.node_count = 0;
    }

    // ===== Tree plumbing =====

    /// Returns true when a new node was created.
    fn insert_node(link: &mut Link, key: SongKey, rating: u8) -> bool {
        match link {
            None => {
                *link = Some(Box::new(RatingNode::new(rating, key)));
                true
            }
            Some(node) => match rating.cmp(&node.rating) {
                Ordering::Equal => {
                    node.bucket.push(key);
                    false
                }
                Ordering::Less => Self::insert_node(&mut node.left, key, rating),
                Ordering::Greater => Self::insert_node(&mut node.right, key, rating),
            },
        }
    }

    fn find(link: &Link, rating: u8) -> Option<&RatingNode> {
        let node = link.as_deref()?;
        match rating.cmp(&node.rating) {
            Ordering::Equal => Some(node),
            Ordering::Less => Self::find(&node.left, rating),
            Ordering::Greater => Self::find(&node.right, rating),
        }
    }

    fn find_mut(link: &mut Link, rating: u8) -> Option<&mut RatingNode> {
        let node = link.as_deref_mut()?;
        match rating.cmp(&node.rating) {
            Ordering::Equal => Some(node),
            Ordering::Less => Self::find_mut(&mut node.left, rating),
            Ordering::Greater => Self::find_mut(&mut node.right, rating),
        }
    }

    fn delete_node(link: Link, rating: u8) -> Link {
        let mut node = link?;
        match rating.cmp(&node.rating) {
            Ordering::Less => {
                node.left = Self::delete_node(node.left.take(), rating);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::delete_node(node.right.take(), rating);
                Some(node)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => right,
                (left, None) => left,
                (left, Some(right)) => {
                    let (successor, rest) = Self::detach_min(right);
                    node.rating = successor.rating;
                    node.bucket = successor.bucket;
                    node.left = left;
                    node.right = rest;
                    Some(node)
                }
            },
        }
    }

    /// Split off the minimum node of a subtree.
    /// Returns (min node, remaining subtree).
    fn detach_min(mut node: Box<RatingNode>) -> (Box<RatingNode>, Link) {
        match node.left.take() {
            None => {
                let rest = node.right.take();
                (node, rest)
            }
            Some(left) => {
                let (min, rest) = Self::detach_min(left);
                node.left = rest;
                (min, Some(node))
            }
        }
    }

    fn walk_in_order(link: &Link, visit: &mut impl FnMut(&RatingNode)) {
        if let Some(node) = link {
            Self::walk_in_order(&node.left, visit);
            visit(node);
            Self::walk_in_order(&node.right, visit);
        }
    }

    fn collect_range(link: &Link, min: u8, max: u8, out: &mut Vec<SongKey>) {
        let Some(node) = link else {
            return;
        };
        if node.rating > min {
            Self::collect_range(&node.left, min, max, out);
        }
        if (min..=max).contains(&node.rating) {
            out.extend_from_slice(&node.bucket);
        }
        if node.rating < max {
            Self::collect_range(&node.right, min, max, out);
        }
    }
}
