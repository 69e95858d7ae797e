//! LRU Policy Module
//!
//! Least Recently Used eviction: the key untouched for longest goes first.

use std::hash::Hash;

use parking_lot::Mutex;

use crate::ds::KeyList;
use crate::policy::EvictionPolicy;

// == LRU Policy ==
/// Tracks access order for LRU eviction.
///
/// Keys are kept in a `KeyList` where:
/// - Front = Least recently used (next victim)
/// - Back = Most recently used
#[derive(Debug)]
pub struct LruPolicy<K> {
    order: Mutex<KeyList<K>>,
}

impl<K> LruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty LRU policy.
    pub fn new() -> Self {
        Self {
            order: Mutex::new(KeyList::new()),
        }
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.lock().is_empty()
    }

    // == Contains ==
    pub fn contains(&self, key: &K) -> bool {
        self.order.lock().contains(key)
    }

    // == Keys ==
    /// Returns tracked keys from least to most recently used.
    pub fn keys(&self) -> Vec<K> {
        self.order.lock().keys()
    }
}

impl<K> Default for LruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K>
where
    K: Eq + Hash + Clone + Send,
{
    fn on_add(&self, key: &K) {
        self.order.lock().push_back(key);
    }

    /// Marks a key as recently used (moves to back).
    fn on_access(&self, key: &K) {
        self.order.lock().move_to_back(key);
    }

    fn on_remove(&self, key: &K) {
        self.order.lock().remove(key);
    }

    fn on_evict(&self) -> Option<K> {
        self.order.lock().pop_front()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn lru_with(keys: &[&'static str]) -> LruPolicy<&'static str> {
        let lru = LruPolicy::new();
        for key in keys {
            lru.on_add(key);
        }
        lru
    }

    #[test]
    fn test_lru_new() {
        let lru: LruPolicy<String> = LruPolicy::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
    }

    #[test]
    fn test_lru_evicts_oldest_added() {
        let lru = lru_with(&["key1", "key2", "key3"]);

        assert_eq!(lru.on_evict(), Some("key1"));
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.on_evict(), Some("key2"));
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_access_moves_to_back() {
        let lru = lru_with(&["a", "b", "c"]);

        lru.on_access(&"a");

        assert_eq!(lru.keys(), vec!["b", "c", "a"]);
        assert_eq!(lru.on_evict(), Some("b"));
        assert_eq!(lru.on_evict(), Some("c"));
        assert_eq!(lru.on_evict(), Some("a"));
    }

    #[test]
    fn test_lru_order_after_multiple_accesses() {
        let lru = lru_with(&["a", "b", "c"]);

        // [a, b, c] -> [b, c, a] -> [b, a, c] -> [a, c, b]
        lru.on_access(&"a");
        lru.on_access(&"c");
        lru.on_access(&"b");

        assert_eq!(lru.keys(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_lru_add_existing_key_is_noop() {
        let lru = lru_with(&["a", "b"]);

        lru.on_add(&"a");

        assert_eq!(lru.len(), 2);
        assert_eq!(lru.keys(), vec!["a", "b"]);
    }

    #[test]
    fn test_lru_access_unknown_key_is_noop() {
        let lru = lru_with(&["a"]);

        lru.on_access(&"ghost");

        assert_eq!(lru.keys(), vec!["a"]);
        assert!(!lru.contains(&"ghost"));
    }

    #[test]
    fn test_lru_remove() {
        let lru = lru_with(&["key1", "key2", "key3"]);

        lru.on_remove(&"key2");
        lru.on_remove(&"nonexistent");

        assert_eq!(lru.len(), 2);
        assert!(!lru.contains(&"key2"));
        assert!(lru.contains(&"key1"));
        assert!(lru.contains(&"key3"));
    }

    #[test]
    fn test_lru_evict_empty() {
        let lru: LruPolicy<u64> = LruPolicy::new();
        assert_eq!(lru.on_evict(), None);
    }

    #[test]
    fn test_lru_zero_key_is_distinguishable_from_empty() {
        let lru = LruPolicy::new();
        lru.on_add(&0u64);

        assert_eq!(lru.on_evict(), Some(0));
        assert_eq!(lru.on_evict(), None);
    }
}
