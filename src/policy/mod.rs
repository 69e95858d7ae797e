//! Eviction Policy Module
//!
//! Defines the eviction policy capability and the built-in strategies.
//!
//! A policy is told about every structural change a cache makes and answers
//! one question: which key goes next. Policies lock internally, so every
//! method takes `&self` and may be called from concurrent readers.

mod fifo;
mod lifo;
mod lru;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::CacheError;

pub use fifo::FifoPolicy;
pub use lifo::LifoPolicy;
pub use lru::LruPolicy;

// == Eviction Policy ==
/// Decides which key a bounded cache evicts when it is full.
///
/// Implementations must treat unknown keys as no-ops rather than panicking.
pub trait EvictionPolicy<K>: Send + Sync {
    /// A key was newly inserted. Ignored if the key is already tracked.
    fn on_add(&self, key: &K);

    /// A key was read or overwritten.
    fn on_access(&self, key: &K);

    /// A key was explicitly removed. Ignored if the key is not tracked.
    fn on_remove(&self, key: &K);

    /// Untracks and returns the next victim, or `None` if nothing is tracked.
    fn on_evict(&self) -> Option<K>;
}

impl<K, P> EvictionPolicy<K> for Box<P>
where
    P: EvictionPolicy<K> + ?Sized,
{
    fn on_add(&self, key: &K) {
        (**self).on_add(key)
    }

    fn on_access(&self, key: &K) {
        (**self).on_access(key)
    }

    fn on_remove(&self, key: &K) {
        (**self).on_remove(key)
    }

    fn on_evict(&self) -> Option<K> {
        (**self).on_evict()
    }
}

impl<K, P> EvictionPolicy<K> for Arc<P>
where
    P: EvictionPolicy<K> + ?Sized,
{
    fn on_add(&self, key: &K) {
        (**self).on_add(key)
    }

    fn on_access(&self, key: &K) {
        (**self).on_access(key)
    }

    fn on_remove(&self, key: &K) {
        (**self).on_remove(key)
    }

    fn on_evict(&self) -> Option<K> {
        (**self).on_evict()
    }
}

// == Policy Kind ==
/// Names one of the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyKind {
    /// Least recently used
    #[default]
    Lru,
    /// First in, first out
    Fifo,
    /// Last in, first out
    Lifo,
}

impl PolicyKind {
    /// Creates a fresh policy instance of this kind.
    pub fn build<K>(self) -> Box<dyn EvictionPolicy<K>>
    where
        K: Eq + Hash + Clone + Send + 'static,
    {
        match self {
            PolicyKind::Lru => Box::new(LruPolicy::new()),
            PolicyKind::Fifo => Box::new(FifoPolicy::new()),
            PolicyKind::Lifo => Box::new(LifoPolicy::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Lru => "lru",
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lifo => "lifo",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(PolicyKind::Lru),
            "fifo" => Ok(PolicyKind::Fifo),
            "lifo" => Ok(PolicyKind::Lifo),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn drain(policy: &dyn EvictionPolicy<&'static str>) -> Vec<&'static str> {
        std::iter::from_fn(|| policy.on_evict()).collect()
    }

    #[test]
    fn test_policy_kind_parse() {
        assert_eq!("lru".parse::<PolicyKind>(), Ok(PolicyKind::Lru));
        assert_eq!("FIFO".parse::<PolicyKind>(), Ok(PolicyKind::Fifo));
        assert_eq!(" Lifo ".parse::<PolicyKind>(), Ok(PolicyKind::Lifo));
        assert_eq!(
            "random".parse::<PolicyKind>(),
            Err(CacheError::UnknownPolicy("random".to_string()))
        );
    }

    #[test]
    fn test_policy_kind_display_roundtrip() {
        for kind in [PolicyKind::Lru, PolicyKind::Fifo, PolicyKind::Lifo] {
            assert_eq!(kind.to_string().parse::<PolicyKind>(), Ok(kind));
        }
        assert_eq!(PolicyKind::default(), PolicyKind::Lru);
    }

    #[test]
    fn test_policy_kind_build_orders() {
        let expected = [
            (PolicyKind::Lru, vec!["b", "c", "a"]),
            (PolicyKind::Fifo, vec!["a", "b", "c"]),
            (PolicyKind::Lifo, vec!["c", "b", "a"]),
        ];

        for (kind, order) in expected {
            let policy = kind.build::<&'static str>();
            policy.on_add(&"a");
            policy.on_add(&"b");
            policy.on_add(&"c");
            policy.on_access(&"a");
            assert_eq!(drain(&*policy), order, "{kind} eviction order");
        }
    }

    #[test]
    fn test_shared_policy_through_arc() {
        let shared = Arc::new(FifoPolicy::new());
        let handle: Box<dyn EvictionPolicy<&'static str>> = Box::new(Arc::clone(&shared));

        handle.on_add(&"x");
        handle.on_add(&"y");
        assert_eq!(shared.keys(), vec!["x", "y"]);

        handle.on_remove(&"x");
        assert_eq!(shared.len(), 1);
        assert_eq!(handle.on_evict(), Some("y"));
        assert!(shared.is_empty());
    }
}
