//! Bounded Cache Module
//!
//! Main cache engine combining HashMap storage with a pluggable eviction policy.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::cache::Cache;
use crate::policy::EvictionPolicy;

// == Bounded Cache ==
/// Thread-safe cache holding at most `capacity` distinct keys.
///
/// Every structural change is reported to the policy, so the policy's tracked
/// keys always match the stored keys. Writers hold the storage lock for the
/// whole operation, including the eviction decision. Readers share the lock
/// and rely on the policy's own locking for recency updates.
pub struct BoundedCache<K, V> {
    /// Key-value storage
    storage: RwLock<HashMap<K, V>>,
    /// Eviction strategy
    policy: Box<dyn EvictionPolicy<K>>,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    // == Constructor ==
    /// Creates a new cache with the given capacity and eviction policy.
    ///
    /// A capacity of zero is clamped to one.
    pub fn new<P>(capacity: usize, policy: P) -> Self
    where
        P: EvictionPolicy<K> + 'static,
    {
        let capacity = if capacity == 0 {
            warn!("Cache capacity must be greater than 0, defaulting to 1");
            1
        } else {
            capacity
        };

        Self {
            storage: RwLock::new(HashMap::new()),
            policy: Box::new(policy),
            capacity,
        }
    }

    // == Capacity ==
    /// Returns the maximum number of entries, after clamping.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.storage.read().is_empty()
    }

    // == Contains Key ==
    /// Checks for `key` without counting as an access.
    pub fn contains_key(&self, key: &K) -> bool {
        self.storage.read().contains_key(key)
    }

    // == Keys ==
    /// Snapshot of the stored keys in arbitrary order, without touching the policy.
    pub fn keys(&self) -> Vec<K> {
        self.storage.read().keys().cloned().collect()
    }
}

impl<K, V> Cache<K, V> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    // == Get ==
    /// Retrieves a value by key. A hit counts as an access for the policy.
    fn get(&self, key: &K) -> Option<V> {
        let storage = self.storage.read();
        match storage.get(key) {
            Some(value) => {
                self.policy.on_access(key);
                trace!("cache hit");
                Some(value.clone())
            }
            None => {
                trace!("cache miss");
                None
            }
        }
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// Overwriting an existing key counts as an access and never evicts.
    /// Inserting a new key into a full cache evicts the policy's victim first.
    fn set(&self, key: K, value: V) {
        let mut storage = self.storage.write();

        if let Some(slot) = storage.get_mut(&key) {
            *slot = value;
            self.policy.on_access(&key);
            return;
        }

        if storage.len() >= self.capacity {
            match self.policy.on_evict() {
                Some(victim) => {
                    storage.remove(&victim);
                    debug!(len = storage.len(), "evicted entry to make room");
                }
                None => {
                    warn!(
                        capacity = self.capacity,
                        "eviction policy returned no key, cache will exceed capacity"
                    );
                }
            }
        }

        self.policy.on_add(&key);
        storage.insert(key, value);
    }

    // == Delete ==
    /// Removes an entry by key. Missing keys are ignored.
    fn delete(&self, key: &K) {
        let mut storage = self.storage.write();
        if storage.remove(key).is_some() {
            self.policy.on_remove(key);
        }
    }
}

impl<K, V> fmt::Debug for BoundedCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedCache")
            .field("capacity", &self.capacity)
            .field("len", &self.storage.read().len())
            .finish_non_exhaustive()
    }
}
