#![allow(dead_code)]

use async_trait::async_trait;
use certwatch_application::ports::{CacheStore, ExpiryLookup};
use certwatch_domain::{CacheEntry, DomainError, ExpiryDate, LookupKind};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn expiry(year: i32, month: u32, day: u32) -> ExpiryDate {
    ExpiryDate::from_ymd(year, month, day).unwrap()
}

// ============================================================================
// Mock CacheStore
// ============================================================================

#[derive(Clone, Default)]
pub struct MockCacheStore {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    fail_loads: Arc<RwLock<bool>>,
    fail_saves: Arc<RwLock<bool>>,
    saves: Arc<AtomicUsize>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, entry: CacheEntry) {
        self.entries.write().await.insert(entry.key.clone(), entry);
    }

    pub async fn entry(&self, key: &str) -> Option<CacheEntry> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn set_fail_loads(&self, fail: bool) {
        *self.fail_loads.write().await = fail;
    }

    pub async fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.write().await = fail;
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn load(&self, key: &str) -> Result<Option<CacheEntry>, DomainError> {
        if *self.fail_loads.read().await {
            return Err(DomainError::CacheStorage("mock load failure".to_string()));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, entry: CacheEntry) -> Result<(), DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if *self.fail_saves.read().await {
            return Err(DomainError::CacheStorage("mock save failure".to_string()));
        }
        self.entries.write().await.insert(entry.key.clone(), entry);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

// ============================================================================
// Mock ExpiryLookup
// ============================================================================

/// Replays scripted results in order; repeats the last one when exhausted.
#[derive(Clone)]
pub struct MockExpiryLookup {
    kind: LookupKind,
    script: Arc<RwLock<VecDeque<Result<ExpiryDate, DomainError>>>>,
    last: Arc<RwLock<Result<ExpiryDate, DomainError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockExpiryLookup {
    pub fn returning(kind: LookupKind, result: Result<ExpiryDate, DomainError>) -> Self {
        Self {
            kind,
            script: Arc::new(RwLock::new(VecDeque::new())),
            last: Arc::new(RwLock::new(result)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn scripted(kind: LookupKind, results: Vec<Result<ExpiryDate, DomainError>>) -> Self {
        let last = results
            .last()
            .cloned()
            .unwrap_or(Err(DomainError::QueryTimeout));
        Self {
            kind,
            script: Arc::new(RwLock::new(results.into())),
            last: Arc::new(RwLock::new(last)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExpiryLookup for MockExpiryLookup {
    async fn fetch_expiry(&self, _domain: &str) -> Result<ExpiryDate, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.write().await.pop_front() {
            Some(result) => result,
            None => self.last.read().await.clone(),
        }
    }

    fn kind(&self) -> LookupKind {
        self.kind
    }
}
