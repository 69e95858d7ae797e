//! Error types for the cache crate
//!
//! Cache operations never fail; these errors cover policy selection and
//! configuration only.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Policy name does not match a built-in eviction policy
    #[error("Unknown eviction policy: {0} (expected lru, fifo or lifo)")]
    UnknownPolicy(String),

    /// Environment variable holds a value that cannot be parsed
    #[error("Invalid value for {var}: {value}")]
    InvalidConfig { var: &'static str, value: String },
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
