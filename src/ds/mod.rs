//! Data Structures Module
//!
//! Ordering structures shared by the eviction policies.

mod key_list;
mod slot_arena;

pub use key_list::KeyList;
