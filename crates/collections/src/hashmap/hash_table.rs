use log::{trace, warn};

use super::TableError;
use super::hasher::{Djb2, KeyHasher};
use crate::linked_list::{List, Node};

pub const DEFAULT_BUCKET_SIZE: usize = 2;

/// String keyed hash table resolving collisions by chaining
///
/// Each bucket owns a singly linked [`List`] of entries. The table never grows
/// on its own, callers decide when to [`resize`](HashTable::resize), for example
/// by watching [`load_factor`](HashTable::load_factor).
pub struct HashTable<V, H = Djb2> {
    pub(crate) buckets: Vec<List<V>>,
    pub(crate) items: usize,
    hasher: H,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_SIZE, Djb2)
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with `capacity` buckets, hashing keys with DJB2
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidCapacity`] if `capacity` is zero
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Self::with_hasher(capacity, Djb2)
    }
}

impl<V, H: KeyHasher> HashTable<V, H> {
    /// Creates an empty table with `capacity` buckets and the given key hasher
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidCapacity`] if `capacity` is zero
    pub fn with_hasher(capacity: usize, hasher: H) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity { capacity });
        }

        Ok(Self::with_buckets(capacity, hasher))
    }

    /// `cap` must be non zero
    fn with_buckets(cap: usize, hasher: H) -> Self {
        Self {
            buckets: Self::empty_buckets(cap),
            items: 0,
            hasher,
        }
    }

    fn empty_buckets(cap: usize) -> Vec<List<V>> {
        (0..cap).map(|_| List::new()).collect()
    }

    /// Returns the number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of distinct keys stored
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored entries per bucket, only informative
    pub fn load_factor(&self) -> f64 {
        self.items as f64 / self.capacity() as f64
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// The bucket `key` lives in under the current capacity
    pub fn bucket_index(&self, key: &str) -> usize {
        self.hasher.bucket_index(key, self.capacity())
    }

    /// Stores `value` under `key`
    ///
    /// An existing entry for `key` has its value overwritten in place,
    /// otherwise a new entry is prepended to the bucket's chain.
    pub fn insert(&mut self, key: &str, value: V) {
        let i = self.bucket_index(key);
        let bucket = &mut self.buckets[i];

        match bucket.find_mut(key) {
            Some(node) => {
                trace!(target: "insert", "overwriting {key} in bucket {i}");
                node.value = value;
            }
            None => {
                trace!(target: "insert", "new entry {key} in bucket {i}");
                bucket.push(key, value);
                self.items += 1;
            }
        }
    }

    pub fn retrieve(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .find(key)
            .map(Node::value)
    }

    pub fn retrieve_mut(&mut self, key: &str) -> Option<&mut V> {
        let i = self.bucket_index(key);
        self.buckets[i].find_mut(key).map(Node::value_mut)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.retrieve(key).is_some()
    }

    /// Unlinks the entry for `key` and returns its value
    ///
    /// # Errors
    ///
    /// [`TableError::KeyNotFound`] if no entry exists for `key`,
    /// in which case the table is unchanged
    pub fn remove(&mut self, key: &str) -> Result<V, TableError> {
        let i = self.bucket_index(key);

        match self.buckets[i].remove(key) {
            Some(node) => {
                trace!(target: "remove", "removed {key} from bucket {i}");
                self.items -= 1;
                Ok(node.into_value())
            }
            None => {
                warn!(target: "remove", "key not found: {key}");
                Err(TableError::KeyNotFound { key: key.into() })
            }
        }
    }

    /// Doubles the number of buckets and rehashes every entry into them
    ///
    /// The new bucket array is fully allocated before any entry moves.
    /// Entries are relinked, not copied.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity does not fit in a `usize`
    pub fn resize(&mut self) {
        let old_cap = self.capacity();
        let Some(new_cap) = old_cap.checked_mul(2) else {
            panic!("capacity overflow while doubling {old_cap} buckets");
        };

        let old_buckets = std::mem::replace(&mut self.buckets, Self::empty_buckets(new_cap));

        let mut moved = 0;
        for mut chain in old_buckets {
            while let Some(node) = chain.pop_boxed() {
                Self::link(&mut self.buckets, &self.hasher, node);
                moved += 1;
            }
        }

        debug_assert_eq!(moved, self.items, "lost entries while rehashing");
        trace!(target: "resize", "moved {moved} entries from {old_cap} to {new_cap} buckets");
    }

    // [private]

    /// Insert logic for an already allocated entry
    fn link(buckets: &mut [List<V>], hasher: &H, node: Box<Node<V>>) {
        let i = hasher.bucket_index(&node.key, buckets.len());
        let bucket = &mut buckets[i];

        match bucket.find_mut(&node.key) {
            Some(existing) => existing.value = node.value,
            None => bucket.push_boxed(node),
        }
    }
}

impl<V: std::fmt::Debug, H> std::fmt::Debug for HashTable<V, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashTable")
            .field("capacity", &self.buckets.len())
            .field("items", &self.items)
            .field("buckets", &self.buckets)
            .finish()
    }
}
