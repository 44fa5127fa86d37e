//! CertWatch Domain Layer
pub mod cache_entry;
pub mod config;
pub mod errors;
pub mod expiry;
pub mod validators;

pub use cache_entry::CacheEntry;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use expiry::{ExpiryDate, LookupKind, DATE_FORMAT};
pub use validators::is_valid_domain;
