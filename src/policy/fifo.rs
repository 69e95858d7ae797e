//! FIFO Policy Module
//!
//! First In, First Out eviction: the earliest inserted key goes first.
//! Reads never reorder keys.

use std::hash::Hash;

use parking_lot::Mutex;

use crate::ds::KeyList;
use crate::policy::EvictionPolicy;

// == FIFO Policy ==
/// Tracks insertion order. Front = oldest insertion (next victim).
#[derive(Debug)]
pub struct FifoPolicy<K> {
    queue: Mutex<KeyList<K>>,
}

impl<K> FifoPolicy<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty FIFO policy.
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(KeyList::new()),
        }
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    // == Contains ==
    pub fn contains(&self, key: &K) -> bool {
        self.queue.lock().contains(key)
    }

    // == Keys ==
    /// Returns tracked keys from oldest to newest insertion.
    pub fn keys(&self) -> Vec<K> {
        self.queue.lock().keys()
    }
}

impl<K> Default for FifoPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for FifoPolicy<K>
where
    K: Eq + Hash + Clone + Send,
{
    fn on_add(&self, key: &K) {
        self.queue.lock().push_back(key);
    }

    fn on_access(&self, _key: &K) {}

    fn on_remove(&self, key: &K) {
        self.queue.lock().remove(key);
    }

    fn on_evict(&self) -> Option<K> {
        self.queue.lock().pop_front()
    }
}
