//! LIFO Policy Module
//!
//! Last In, First Out eviction: the most recently inserted key goes first.
//!
//! ```text
//!   insert a, b, c      front [a] [b] [c] back
//!                              keep      EVICT
//! ```
//!
//! Reads never reorder keys, and overwriting a key does not make it newer.

use std::hash::Hash;

use parking_lot::Mutex;

use crate::ds::KeyList;
use crate::policy::EvictionPolicy;

// == LIFO Policy ==
/// Tracks insertion order as a stack. Back = newest insertion (next victim).
#[derive(Debug)]
pub struct LifoPolicy<K> {
    stack: Mutex<KeyList<K>>,
}

impl<K> LifoPolicy<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty LIFO policy.
    pub fn new() -> Self {
        Self {
            stack: Mutex::new(KeyList::new()),
        }
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.stack.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.lock().is_empty()
    }

    // == Contains ==
    pub fn contains(&self, key: &K) -> bool {
        self.stack.lock().contains(key)
    }

    // == Keys ==
    /// Returns tracked keys from bottom (oldest) to top (newest) of the stack.
    pub fn keys(&self) -> Vec<K> {
        self.stack.lock().keys()
    }
}

impl<K> Default for LifoPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LifoPolicy<K>
where
    K: Eq + Hash + Clone + Send,
{
    fn on_add(&self, key: &K) {
        self.stack.lock().push_back(key);
    }

    fn on_access(&self, _key: &K) {}

    fn on_remove(&self, key: &K) {
        self.stack.lock().remove(key);
    }

    fn on_evict(&self) -> Option<K> {
        self.stack.lock().pop_back()
    }
}
