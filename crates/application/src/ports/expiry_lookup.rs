use async_trait::async_trait;
use certwatch_domain::{DomainError, ExpiryDate, LookupKind};

/// Upstream source of expiry dates (TLS certificate or WHOIS record).
///
/// Implementations bound their own I/O with a timeout and report it as
/// `DomainError::QueryTimeout`.
#[async_trait]
pub trait ExpiryLookup: Send + Sync {
    async fn fetch_expiry(&self, domain: &str) -> Result<ExpiryDate, DomainError>;

    fn kind(&self) -> LookupKind;
}
