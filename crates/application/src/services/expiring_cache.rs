use crate::ports::CacheStore;
use crate::services::CacheMetrics;
use certwatch_domain::{CacheEntry, DomainError, ExpiryDate};
use std::future::Future;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use thiserror::Error;
use tracing::{debug, warn};

/// Returned when a key is cold or stale and the upstream lookup failed.
///
/// Carries the upstream error so callers can decide whether to surface it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no fresh value available for {key}: {cause}")]
pub struct NoFreshValue {
    pub key: String,
    pub cause: DomainError,
}

/// Write-through TTL cache in front of an upstream lookup.
///
/// There is no single-flight de-duplication: concurrent calls for the same
/// expired key each run their lookup and the last `save` wins.
pub struct ExpiringCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
    metrics: Arc<CacheMetrics>,
}

impl ExpiringCache {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Serve the entry for `key` while it is younger than the TTL, otherwise
    /// run `lookup` and store its result.
    ///
    /// A failed lookup leaves any existing entry untouched. A failed `save`
    /// is logged and the looked-up value is still returned.
    pub async fn get_or_refresh<F, Fut>(
        &self,
        key: &str,
        lookup: F,
    ) -> Result<ExpiryDate, NoFreshValue>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ExpiryDate, DomainError>>,
    {
        let now = SystemTime::now();

        match self.store.load(key).await {
            Ok(Some(entry)) if entry.is_fresh(self.ttl, now) => {
                self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                debug!(
                    key = key,
                    age_secs = entry.age(now).as_secs(),
                    "Cache HIT"
                );
                return Ok(entry.value);
            }
            Ok(Some(entry)) => {
                debug!(key = key, age_secs = entry.age(now).as_secs(), "Cache STALE");
            }
            Ok(None) => {
                debug!(key = key, "Cache MISS");
            }
            Err(e) => {
                warn!(
                    key = key,
                    backend = self.store.backend_name(),
                    error = %e,
                    "Cache load failed, treating key as cold"
                );
            }
        }

        self.metrics.misses.fetch_add(1, Ordering::Relaxed);

        let value = match lookup().await {
            Ok(value) => value,
            Err(cause) => {
                self.metrics.refresh_failures.fetch_add(1, Ordering::Relaxed);
                debug!(key = key, error = %cause, "Upstream lookup failed, entry left untouched");
                return Err(NoFreshValue {
                    key: key.to_string(),
                    cause,
                });
            }
        };

        self.metrics.refreshes.fetch_add(1, Ordering::Relaxed);

        let entry = CacheEntry::new(key, value, SystemTime::now());
        if let Err(e) = self.store.save(entry).await {
            self.metrics.store_failures.fetch_add(1, Ordering::Relaxed);
            warn!(
                key = key,
                backend = self.store.backend_name(),
                error = %e,
                "Failed to persist cache entry"
            );
        }

        debug!(
            key = key,
            hit_rate = self.metrics.hit_rate(),
            "Cache refreshed"
        );

        Ok(value)
    }
}
