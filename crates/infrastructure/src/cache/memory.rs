use async_trait::async_trait;
use certwatch_application::ports::CacheStore;
use certwatch_domain::{CacheEntry, DomainError};
use dashmap::DashMap;
use std::sync::Arc;

/// Process-lifetime cache store; every key is cold after a restart.
#[derive(Clone, Default)]
pub struct InMemoryCacheStore {
    entries: Arc<DashMap<String, CacheEntry>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn load(&self, key: &str) -> Result<Option<CacheEntry>, DomainError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn save(&self, entry: CacheEntry) -> Result<(), DomainError> {
        self.entries.insert(entry.key.clone(), entry);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
