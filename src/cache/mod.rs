//! Cache Module
//!
//! Provides the minimal cache capability and the bounded, policy-driven store.

mod store;


use std::sync::Arc;

// Re-export public types
pub use store::BoundedCache;

// == Cache Capability ==
/// The minimal cache capability shared by the bounded store and its decorators.
///
/// Every operation succeeds: a miss is reported as `None` from `get`, and
/// deleting a missing key is a no-op.
pub trait Cache<K, V>: Send + Sync {
    /// Returns a copy of the value for `key`, if present.
    fn get(&self, key: &K) -> Option<V>;

    /// Inserts or overwrites the value for `key`.
    fn set(&self, key: K, value: V);

    /// Removes `key` if present.
    fn delete(&self, key: &K);
}

impl<K, V, C> Cache<K, V> for Arc<C>
where
    C: Cache<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn set(&self, key: K, value: V) {
        (**self).set(key, value)
    }

    fn delete(&self, key: &K) {
        (**self).delete(key)
    }
}

impl<K, V, C> Cache<K, V> for &C
where
    C: Cache<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn set(&self, key: K, value: V) {
        (**self).set(key, value)
    }

    fn delete(&self, key: &K) {
        (**self).delete(key)
    }
}
