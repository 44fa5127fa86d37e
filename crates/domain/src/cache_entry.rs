use crate::ExpiryDate;
use std::time::{Duration, SystemTime};

/// Last successful lookup stored under a cache key.
///
/// At most one entry exists per key. A refresh replaces the whole entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub key: String,
    pub value: ExpiryDate,
    pub stored_at: SystemTime,
}

impl CacheEntry {
    pub fn new(key: impl Into<String>, value: ExpiryDate, stored_at: SystemTime) -> Self {
        Self {
            key: key.into(),
            value,
            stored_at,
        }
    }

    /// Age of the entry at `now`. A `stored_at` in the future counts as zero.
    pub fn age(&self, now: SystemTime) -> Duration {
        now.duration_since(self.stored_at).unwrap_or_default()
    }

    /// True while `now - stored_at < ttl`.
    #[inline]
    pub fn is_fresh(&self, ttl: Duration, now: SystemTime) -> bool {
        self.age(now) < ttl
    }
}
