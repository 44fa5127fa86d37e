//! CertWatch Infrastructure Layer
pub mod cache;
pub mod lookup;

pub use cache::{FileCacheStore, InMemoryCacheStore};
pub use lookup::{TlsCertificateLookup, WhoisLookup};
