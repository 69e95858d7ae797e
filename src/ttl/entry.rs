//! Expiration Entry Module
//!
//! Deadline bookkeeping for keys that carry a time-to-live.

use std::time::{Duration, Instant};

// == Expiration ==
/// Absolute deadline after which a key is logically absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiration {
    expires_at: Instant,
}

impl Expiration {
    // == Constructor ==
    /// Creates a deadline `ttl` from now.
    ///
    /// Returns `None` when the deadline is too far out for `Instant` to
    /// represent, which callers treat as never expiring.
    pub fn after(ttl: Duration) -> Option<Self> {
        Instant::now().checked_add(ttl).map(Self::at)
    }

    pub fn at(expires_at: Instant) -> Self {
        Self { expires_at }
    }

    // == Is Expired ==
    /// Checks whether the deadline has been reached at `now`.
    ///
    /// Boundary condition: the entry is expired once `now` is at or past the
    /// deadline, so a fully elapsed TTL is never served.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, or zero once the deadline has passed.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
