use async_trait::async_trait;
use certwatch_domain::{CacheEntry, DomainError};

/// Storage behind the expiring cache.
///
/// Implementations keep at most one entry per key and replace it wholesale on
/// `save`. They never decide freshness; that belongs to `ExpiringCache`.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<CacheEntry>, DomainError>;

    async fn save(&self, entry: CacheEntry) -> Result<(), DomainError>;

    fn backend_name(&self) -> &'static str;
}
