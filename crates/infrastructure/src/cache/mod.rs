// Cache stores - one entry per key, freshness decided by ExpiringCache

pub mod file;
pub mod memory;

pub use file::FileCacheStore;
pub use memory::InMemoryCacheStore;
