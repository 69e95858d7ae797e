//! Policy Cache demo
//!
//! Walks through each eviction policy, a caller-defined policy, and the TTL
//! decorator, logging what the cache keeps and what it drops.

use std::thread::sleep;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use policy_cache::{
    BoundedCache, Cache, Config, EvictionPolicy, FifoPolicy, LifoPolicy, LruPolicy, TtlCache,
};

/// Evicts the oldest insertion using a plain Vec, no O(1) guarantees.
#[derive(Default)]
struct VecPolicy {
    keys: Mutex<Vec<String>>,
}

impl EvictionPolicy<String> for VecPolicy {
    fn on_add(&self, key: &String) {
        let mut keys = self.keys.lock();
        if !keys.contains(key) {
            keys.push(key.clone());
        }
    }

    fn on_access(&self, _key: &String) {}

    fn on_remove(&self, key: &String) {
        self.keys.lock().retain(|k| k != key);
    }

    fn on_evict(&self) -> Option<String> {
        let mut keys = self.keys.lock();
        if keys.is_empty() {
            None
        } else {
            Some(keys.remove(0))
        }
    }
}

/// Fills a capacity-2 cache with a, b, c and reports which keys survived.
fn demonstrate<P>(name: &str, policy: P)
where
    P: EvictionPolicy<String> + 'static,
{
    let cache = BoundedCache::new(2, policy);
    cache.set("a".to_string(), 1);
    cache.set("b".to_string(), 2);
    cache.set("c".to_string(), 3);

    for key in ["a", "b", "c"] {
        match cache.get(&key.to_string()) {
            Some(value) => info!("{} cache contains '{}' with value: {}", name, key, value),
            None => info!("{} cache evicted '{}'", name, key),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policy_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: capacity={}, policy={}, ttl={}ms",
        config.capacity,
        config.policy,
        config.ttl.as_millis()
    );

    demonstrate("LRU", LruPolicy::new());
    demonstrate("FIFO", FifoPolicy::new());
    demonstrate("LIFO", LifoPolicy::new());
    demonstrate("Custom", VecPolicy::default());

    let ttl = if config.ttl.is_zero() {
        Duration::from_millis(50)
    } else {
        config.ttl
    };
    let cache = TtlCache::new(config.build_cache::<String, String>());
    cache.set_with_ttl("session".to_string(), "token".to_string(), ttl);
    cache.set("profile".to_string(), "settings".to_string());
    info!(
        "TTL cache holds 'session' for {}ms: {:?}",
        ttl.as_millis(),
        cache.get(&"session".to_string())
    );

    sleep(ttl + Duration::from_millis(10));

    info!(
        "After {}ms: session={:?}, profile={:?}, stored entries={}",
        (ttl + Duration::from_millis(10)).as_millis(),
        cache.get(&"session".to_string()),
        cache.get(&"profile".to_string()),
        cache.inner().len()
    );

    Ok(())
}
