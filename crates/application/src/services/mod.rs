pub mod cache_metrics;
pub mod expiring_cache;

pub use cache_metrics::CacheMetrics;
pub use expiring_cache::{ExpiringCache, NoFreshValue};
