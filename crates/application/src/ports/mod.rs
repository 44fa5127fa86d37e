pub mod cache_store;
pub mod expiry_lookup;

pub use cache_store::CacheStore;
pub use expiry_lookup::ExpiryLookup;
