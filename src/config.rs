//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::BoundedCache;
use crate::error::{CacheError, Result};
use crate::policy::PolicyKind;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Eviction policy used by the bounded cache
    pub policy: PolicyKind,
    /// TTL applied by `set_with_ttl` callers; zero means entries never expire
    pub ttl: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `CACHE_POLICY` - `lru`, `fifo` or `lifo` (default: lru)
    /// - `CACHE_TTL_MS` - TTL in milliseconds, 0 disables expiry (default: 0)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    ///
    /// Unset variables fall back to defaults; set but unparsable ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let capacity = parse_var(&lookup, "CACHE_CAPACITY")?.unwrap_or(defaults.capacity);
        let policy = match lookup("CACHE_POLICY") {
            Some(raw) => raw.parse::<PolicyKind>()?,
            None => defaults.policy,
        };
        let ttl = parse_var::<u64, _>(&lookup, "CACHE_TTL_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.ttl);

        Ok(Self {
            capacity,
            policy,
            ttl,
        })
    }

    /// Creates an empty bounded cache from this configuration.
    pub fn build_cache<K, V>(&self) -> BoundedCache<K, V>
    where
        K: Eq + std::hash::Hash + Clone + Send + Sync + 'static,
        V: Clone + Send + Sync,
    {
        BoundedCache::new(self.capacity, self.policy.build::<K>())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            policy: PolicyKind::Lru,
            ttl: Duration::ZERO,
        }
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CacheError::InvalidConfig { var, value: raw }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.policy, PolicyKind::Lru);
        assert_eq!(config.ttl, Duration::ZERO);
    }

    #[test]
    fn test_config_from_lookup_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_from_lookup_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("CACHE_CAPACITY", "64"),
            ("CACHE_POLICY", "LIFO"),
            ("CACHE_TTL_MS", "250"),
        ]))
        .unwrap();

        assert_eq!(config.capacity, 64);
        assert_eq!(config.policy, PolicyKind::Lifo);
        assert_eq!(config.ttl, Duration::from_millis(250));
    }

    #[test]
    fn test_config_invalid_capacity() {
        let result = Config::from_lookup(lookup_from(&[("CACHE_CAPACITY", "-5")]));
        assert_eq!(
            result,
            Err(CacheError::InvalidConfig {
                var: "CACHE_CAPACITY",
                value: "-5".to_string(),
            })
        );
    }

    #[test]
    fn test_config_unknown_policy() {
        let result = Config::from_lookup(lookup_from(&[("CACHE_POLICY", "clock")]));
        assert_eq!(result, Err(CacheError::UnknownPolicy("clock".to_string())));
    }

    #[test]
    fn test_config_zero_capacity_is_clamped_by_cache() {
        let config = Config::from_lookup(lookup_from(&[("CACHE_CAPACITY", "0")])).unwrap();
        let cache: BoundedCache<u32, u32> = config.build_cache();
        assert_eq!(cache.capacity(), 1);
    }
}
