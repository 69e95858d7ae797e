//! Policy Cache - A thread-safe bounded in-memory cache
//!
//! Provides a capacity-bounded store with pluggable eviction policies
//! (LRU, FIFO, LIFO or caller-defined) and a TTL decorator that adds
//! lazy expiration to any cache.

pub mod cache;
pub mod config;
pub(crate) mod ds;
pub mod error;
pub mod policy;
pub mod ttl;

pub use cache::{BoundedCache, Cache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use policy::{EvictionPolicy, FifoPolicy, LifoPolicy, LruPolicy, PolicyKind};
pub use ttl::TtlCache;
