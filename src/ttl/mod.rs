//! TTL Module
//!
//! Adds time-to-live expiration to any cache by wrapping it.
//!
//! The decorator keeps its own key → deadline map next to the wrapped cache.
//! Expired keys are removed lazily when read; nothing runs in the background.
//! Keys the wrapped cache evicts on its own keep their deadline record until
//! the key is next read, deleted, purged, or set again through the decorator.

mod entry;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::Cache;

pub use entry::Expiration;

// == TTL Cache ==
/// Cache decorator that expires keys after a per-key time-to-live.
///
/// `TtlCache` implements [`Cache`] itself, so it can wrap a `BoundedCache`,
/// another `TtlCache`, or anything else with the same capability. Its lock
/// guards the deadline map only and is never held while calling the wrapped
/// cache.
pub struct TtlCache<K, V, C> {
    /// Wrapped cache holding the actual values
    inner: C,
    /// Deadlines for keys that carry a TTL
    expirations: RwLock<HashMap<K, Expiration>>,
    _value: PhantomData<fn() -> V>,
}

impl<K, V, C> TtlCache<K, V, C>
where
    K: Eq + Hash + Clone,
    C: Cache<K, V>,
{
    // == Constructor ==
    /// Wraps `inner` with TTL tracking. No key starts with a deadline.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            expirations: RwLock::new(HashMap::new()),
            _value: PhantomData,
        }
    }

    /// Returns the wrapped cache for direct inspection.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    // == Set With TTL ==
    /// Stores a key-value pair that expires `ttl` from now.
    ///
    /// A zero `ttl` clears any previous deadline, so the key never expires.
    /// A non-zero `ttl` replaces any previous deadline. A `ttl` too large to
    /// turn into a deadline is treated like zero.
    pub fn set_with_ttl(&self, key: K, value: V, ttl: Duration) {
        let deadline = if ttl.is_zero() {
            None
        } else {
            Expiration::after(ttl)
        };

        self.inner.set(key.clone(), value);

        let mut expirations = self.expirations.write();
        match deadline {
            Some(entry) => {
                expirations.insert(key, entry);
            }
            None => {
                expirations.remove(&key);
            }
        }
    }

    // == Time To Live ==
    /// Returns the remaining lifetime of `key`.
    ///
    /// `None` means the key has no deadline. An elapsed deadline that has
    /// not been collected yet reports `Some(Duration::ZERO)`.
    pub fn ttl(&self, key: &K) -> Option<Duration> {
        self.expirations.read().get(key).map(Expiration::remaining)
    }

    /// Returns the number of keys currently carrying a deadline.
    pub fn tracked_len(&self) -> usize {
        self.expirations.read().len()
    }

    // == Purge Expired ==
    /// Removes every key whose deadline has passed.
    ///
    /// Only runs when called. Returns the number of keys removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let expired: Vec<K> = {
            let mut expirations = self.expirations.write();
            let keys: Vec<K> = expirations
                .iter()
                .filter(|(_, entry)| entry.is_expired_at(now))
                .map(|(key, _)| key.clone())
                .collect();
            for key in &keys {
                expirations.remove(key);
            }
            keys
        };

        for key in &expired {
            self.inner.delete(key);
        }

        if !expired.is_empty() {
            debug!(removed = expired.len(), "purged expired entries");
        }
        expired.len()
    }

    // == Expire ==
    /// Drops `key` if its deadline has passed. Returns whether it was dropped.
    ///
    /// The deadline is re-checked under the write lock, so a refresh that lands
    /// before the record is removed keeps the key alive. The lock is released
    /// before the wrapped cache is called, so a refresh landing between the two
    /// steps loses its value while its new deadline stays tracked.
    fn expire(&self, key: &K) -> bool {
        let removed = {
            let mut expirations = self.expirations.write();
            match expirations.get(key) {
                Some(entry) if entry.is_expired() => {
                    expirations.remove(key);
                    true
                }
                _ => false,
            }
        };

        if removed {
            self.inner.delete(key);
            debug!("expired entry removed on read");
        }
        removed
    }
}

impl<K, V, C> Cache<K, V> for TtlCache<K, V, C>
where
    K: Eq + Hash + Clone + Send + Sync,
    C: Cache<K, V>,
{
    // == Get ==
    /// Returns the value unless the key's deadline has passed.
    fn get(&self, key: &K) -> Option<V> {
        let expired = self
            .expirations
            .read()
            .get(key)
            .is_some_and(Expiration::is_expired);

        if expired && self.expire(key) {
            return None;
        }
        self.inner.get(key)
    }

    /// Stores a key-value pair that never expires.
    fn set(&self, key: K, value: V) {
        self.set_with_ttl(key, value, Duration::ZERO);
    }

    // == Delete ==
    /// Removes the deadline and the value, whether or not the key expired.
    fn delete(&self, key: &K) {
        self.expirations.write().remove(key);
        self.inner.delete(key);
    }
}

impl<K, V, C> fmt::Debug for TtlCache<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlCache")
            .field("tracked", &self.expirations.read().len())
            .finish_non_exhaustive()
    }
}
