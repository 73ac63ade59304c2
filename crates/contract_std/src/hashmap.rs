//! Chained-bucket hash map with externally visible bucket occupancy.
//!
//! Fast in the common case but open to collision flooding: callers inserting
//! attacker-influenced keys must check `bucket_size` first and refuse to grow
//! a chain past their own bound. The map itself never refuses or caps an
//! insert.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use types::error::MapError;

struct Chained<K, V> {
    key: K,
    value: V,
    next: Option<Box<Chained<K, V>>>,
}

/// Keyed map from caller-hashed keys to values. Hash and equality functions
/// are supplied at construction and must agree: equal keys hash equal.
pub struct HashMap<K, V> {
    buckets: BTreeMap<u64, Box<Chained<K, V>>>,
    bucket_sizes: BTreeMap<u64, u32>,
    size: u32,
    eq: fn(&K, &K) -> bool,
    hash: fn(&K) -> u64,
}

impl<K, V> HashMap<K, V> {
    pub fn new(eq: fn(&K, &K) -> bool, hash: fn(&K) -> u64) -> Self {
        Self {
            buckets: BTreeMap::new(),
            bucket_sizes: BTreeMap::new(),
            size: 0,
            eq,
            hash,
        }
    }

    /// Current chain length of the bucket `key` hashes into. Check this
    /// before inserting any attacker-influenced key.
    pub fn bucket_size(&self, key: &K) -> u32 {
        let bucket = (self.hash)(key);
        self.bucket_sizes.get(&bucket).copied().unwrap_or(0)
    }

    pub fn count(&self) -> u32 {
        self.size
    }

    /// Inserts `key -> value`, replacing any entry with an equal key. The
    /// replacement is a fresh chain node, not an in-place update.
    pub fn set(&mut self, key: K, value: V) {
        self.delete(&key);

        let bucket = (self.hash)(&key);
        let prev = self.buckets.remove(&bucket);
        self.buckets.insert(bucket, Box::new(Chained { key, value, next: prev }));
        *self.bucket_sizes.entry(bucket).or_insert(0) += 1;
        self.size += 1;
    }

    pub fn get(&self, key: &K) -> Result<&V, MapError> {
        let bucket = (self.hash)(key);
        let mut node = self.buckets.get(&bucket);
        while let Some(n) = node {
            if (self.eq)(&n.key, key) {
                return Ok(&n.value);
            }
            node = n.next.as_ref();
        }

        Err(MapError::KeyNotFound)
    }

    /// Unlinks the entry with an equal key. Dropping the last entry of a
    /// chain removes the bucket itself. Returns whether anything was removed.
    pub fn delete(&mut self, key: &K) -> bool {
        let bucket = (self.hash)(key);
        let Some(head) = self.buckets.get_mut(&bucket) else {
            return false;
        };

        // Head of the chain...
        if (self.eq)(&head.key, key) {
            match head.next.take() {
                Some(next) => {
                    *head = next;
                    *self.bucket_sizes.get_mut(&bucket).unwrap() -= 1;
                }
                None => {
                    self.buckets.remove(&bucket);
                    self.bucket_sizes.remove(&bucket);
                }
            }
            self.size -= 1;
            return true;
        }

        // Interior of the chain...
        let mut node = head;
        while node.next.is_some() {
            if (self.eq)(&node.next.as_ref().unwrap().key, key) {
                let removed = node.next.take().unwrap();
                node.next = removed.next;
                *self.bucket_sizes.get_mut(&bucket).unwrap() -= 1;
                self.size -= 1;
                return true;
            }
            node = node.next.as_mut().unwrap();
        }

        false
    }
}
