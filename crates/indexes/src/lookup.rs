//! Direct-lookup index - a separately chained hash map keyed by string.
//!
//! Keys are hashed with djb2 (`h = h * 33 + byte`, seeded with 5381) and
//! reduced modulo the bucket count. The bucket count doubles whenever the
//! number of entries exceeds twice the bucket count, so chains stay short.
//!
//! The engine keeps two of these: song id -> handle and title -> handle.

use library::{PlaylistError, Result};
use serde::Serialize;
use tracing::debug;

/// Bucket count used when a map is created with a capacity of zero
pub const DEFAULT_CAPACITY: usize = 16;

/// djb2 string hash
pub fn djb2(key: &str) -> u64 {
    key.bytes()
        .fold(5381u64, |hash, byte| hash.wrapping_mul(33).wrapping_add(u64::from(byte)))
}

/// Occupancy numbers for one map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupStats {
    pub capacity: usize,
    pub size: usize,
    pub load_factor: f64,
    pub empty_buckets: usize,
    pub max_chain_length: usize,
}

/// String-keyed hash map with separate chaining.
#[derive(Debug, Clone)]
pub struct ChainedMap<V> {
    /// Noun used in `NotFound` errors, e.g. "Song" or "Title"
    label: &'static str,
    buckets: Vec<Vec<(String, V)>>,
    len: usize,
}

impl<V> ChainedMap<V> {
    pub fn new(label: &'static str, capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            label,
            buckets: Self::empty_buckets(capacity),
            len: 0,
        }
    }

    /// Insert or replace. Returns the previous value for `key`.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let index = self.bucket_of(&key);
        let bucket = &mut self.buckets[index];

        if let Some(entry) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut entry.1, value));
        }

        bucket.push((key, value));
        self.len += 1;

        if self.len > self.buckets.len() * 2 {
            self.resize();
        }
        None
    }

    pub fn get(&self, key: &str) -> Result<&V> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| self.not_found(key))
    }

    /// Remove `key`, returning its value. The chain order is not preserved.
    pub fn remove(&mut self, key: &str) -> Result<V> {
        let index = self.bucket_of(key);
        let bucket = &mut self.buckets[index];

        match bucket.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                let (_, value) = bucket.swap_remove(pos);
                self.len -= 1;
                Ok(value)
            }
            None => Err(self.not_found(key)),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().flatten().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.buckets.iter().flatten().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Entries per bucket
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Drop every entry, keeping the current bucket count.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
        self.len = 0;
    }

    pub fn stats(&self) -> LookupStats {
        LookupStats {
            capacity: self.capacity(),
            size: self.len,
            load_factor: self.load_factor(),
            empty_buckets: self.buckets.iter().filter(|b| b.is_empty()).count(),
            max_chain_length: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
        }
    }

    fn bucket_of(&self, key: &str) -> usize {
        (djb2(key) % self.buckets.len() as u64) as usize
    }

    fn resize(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, Self::empty_buckets(new_capacity));

        for (key, value) in old.into_iter().flatten() {
            let index = self.bucket_of(&key);
            self.buckets[index].push((key, value));
        }

        debug!(label = self.label, new_capacity, size = self.len, "resized lookup index");
    }

    fn empty_buckets(capacity: usize) -> Vec<Vec<(String, V)>> {
        std::iter::repeat_with(Vec::new).take(capacity).collect()
    }

    fn not_found(&self, key: &str) -> PlaylistError {
        PlaylistError::NotFound {
            what: self.label,
            key: key.to_string(),
        }
    }
}
