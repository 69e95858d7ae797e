//! Key List Module
//!
//! Doubly linked list of keys stored in a `SlotArena`, with a key → slot index.
//!
//! ```text
//!   index: HashMap<K, SlotId>        arena: SlotArena<Node<K>>
//!
//!   front ─► [a] ◄──► [b] ◄──► [c] ◄── back
//!           oldest             newest
//! ```
//!
//! Every operation except `keys` is O(1).

use std::collections::HashMap;
use std::hash::Hash;

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

// == Key List ==
/// Ordered set of keys. The front holds the oldest key, the back the newest.
#[derive(Debug)]
pub struct KeyList<K> {
    arena: SlotArena<Node<K>>,
    index: HashMap<K, SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<K> KeyList<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
        }
    }

    // == Push Back ==
    /// Appends `key` at the back. Returns `false` if the key is already present.
    pub fn push_back(&mut self, key: &K) -> bool {
        if self.index.contains_key(key) {
            return false;
        }
        let id = self.arena.insert(Node {
            key: key.clone(),
            prev: None,
            next: None,
        });
        self.attach_back(id);
        self.index.insert(key.clone(), id);
        true
    }

    // == Move To Back ==
    /// Moves an existing key to the back. Returns `false` if the key is absent.
    pub fn move_to_back(&mut self, key: &K) -> bool {
        let Some(&id) = self.index.get(key) else {
            return false;
        };
        if self.tail != Some(id) {
            self.detach(id);
            self.attach_back(id);
        }
        true
    }

    // == Remove ==
    /// Unlinks `key`. Returns `false` if the key is absent.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(id) => {
                self.detach(id);
                self.arena.remove(id);
                true
            }
            None => false,
        }
    }

    // == Pop Front ==
    /// Removes and returns the oldest key.
    pub fn pop_front(&mut self) -> Option<K> {
        let id = self.head?;
        self.take(id)
    }

    // == Pop Back ==
    /// Removes and returns the newest key.
    pub fn pop_back(&mut self) -> Option<K> {
        let id = self.tail?;
        self.take(id)
    }

    // == Queries ==
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Snapshot of the keys from front (oldest) to back (newest).
    pub fn keys(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut current = self.head;
        while let Some(id) = current {
            match self.arena.get(id) {
                Some(node) => {
                    keys.push(node.key.clone());
                    current = node.next;
                }
                None => break,
            }
        }
        keys
    }

    // == Internal Linking ==
    fn take(&mut self, id: SlotId) -> Option<K> {
        self.detach(id);
        let node = self.arena.remove(id)?;
        self.index.remove(&node.key);
        Some(node.key)
    }

    fn attach_back(&mut self, id: SlotId) {
        let old_tail = self.tail;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail) => {
                if let Some(node) = self.arena.get_mut(tail) {
                    node.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    fn detach(&mut self, id: SlotId) {
        let (prev, next) = match self.arena.get_mut(id) {
            Some(node) => (node.prev.take(), node.next.take()),
            None => return,
        };
        match prev {
            Some(prev) => {
                if let Some(node) = self.arena.get_mut(prev) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(next) => {
                if let Some(node) = self.arena.get_mut(next) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }
}

impl<K> Default for KeyList<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(keys: &[&'static str]) -> KeyList<&'static str> {
        let mut list = KeyList::new();
        for key in keys {
            list.push_back(key);
        }
        list
    }

    #[test]
    fn test_key_list_new() {
        let list: KeyList<u32> = KeyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.keys().is_empty());
    }

    #[test]
    fn test_key_list_push_back_keeps_order() {
        let list = list_of(&["a", "b", "c"]);
        assert_eq!(list.keys(), vec!["a", "b", "c"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_key_list_push_back_duplicate_rejected() {
        let mut list = list_of(&["a", "b"]);
        assert!(!list.push_back(&"a"));
        assert_eq!(list.keys(), vec!["a", "b"]);
    }

    #[test]
    fn test_key_list_move_to_back() {
        let mut list = list_of(&["a", "b", "c"]);

        assert!(list.move_to_back(&"a"));
        assert_eq!(list.keys(), vec!["b", "c", "a"]);

        // Moving the tail is a no-op on order
        assert!(list.move_to_back(&"a"));
        assert_eq!(list.keys(), vec!["b", "c", "a"]);

        assert!(list.move_to_back(&"c"));
        assert_eq!(list.keys(), vec!["b", "a", "c"]);

        assert!(!list.move_to_back(&"missing"));
    }

    #[test]
    fn test_key_list_remove_head_middle_tail() {
        let mut list = list_of(&["a", "b", "c", "d"]);

        assert!(list.remove(&"b"));
        assert_eq!(list.keys(), vec!["a", "c", "d"]);

        assert!(list.remove(&"a"));
        assert_eq!(list.keys(), vec!["c", "d"]);

        assert!(list.remove(&"d"));
        assert_eq!(list.keys(), vec!["c"]);

        assert!(!list.remove(&"d"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_key_list_pop_front_and_back() {
        let mut list = list_of(&["a", "b", "c"]);

        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(list.pop_back(), Some("b"));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_key_list_reuses_slots_after_removal() {
        let mut list = KeyList::new();
        for round in 0..3 {
            for i in 0..10u32 {
                list.push_back(&(round * 100 + i));
            }
            while list.pop_front().is_some() {}
        }
        assert!(list.is_empty());

        list.push_back(&7);
        list.push_back(&8);
        assert_eq!(list.keys(), vec![7, 8]);
        assert!(list.contains(&7));
    }

    #[test]
    fn test_key_list_single_element_links() {
        let mut list = list_of(&["only"]);
        assert!(list.move_to_back(&"only"));
        assert_eq!(list.pop_front(), Some("only"));
        assert!(list.push_back(&"next"));
        assert_eq!(list.keys(), vec!["next"]);
    }
}
