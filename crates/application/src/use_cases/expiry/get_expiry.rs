use crate::ports::ExpiryLookup;
use crate::services::ExpiringCache;
use certwatch_domain::{is_valid_domain, DomainError, ExpiryDate, LookupKind};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Result of one expiry request, before it is rendered for the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryOutcome {
    /// Fresh or cached expiry date
    Found(ExpiryDate),
    /// Input did not pass `is_valid_domain`
    InvalidDomain,
    /// Key was cold or stale and the upstream lookup failed
    Unavailable(DomainError),
}

/// Validate, then answer from the expiring cache in front of one lookup.
pub struct GetExpiryUseCase {
    lookup: Arc<dyn ExpiryLookup>,
    cache: Arc<ExpiringCache>,
}

impl GetExpiryUseCase {
    pub fn new(lookup: Arc<dyn ExpiryLookup>, cache: Arc<ExpiringCache>) -> Self {
        Self { lookup, cache }
    }

    pub fn kind(&self) -> LookupKind {
        self.lookup.kind()
    }

    #[instrument(skip(self), fields(kind = %self.lookup.kind()))]
    pub async fn execute(&self, domain: &str) -> ExpiryOutcome {
        if !is_valid_domain(domain) {
            debug!("Rejected invalid domain");
            return ExpiryOutcome::InvalidDomain;
        }

        let key = self.lookup.kind().cache_key(domain);
        let lookup = Arc::clone(&self.lookup);

        match self
            .cache
            .get_or_refresh(&key, || async move { lookup.fetch_expiry(domain).await })
            .await
        {
            Ok(expiry) => ExpiryOutcome::Found(expiry),
            Err(unavailable) => ExpiryOutcome::Unavailable(unavailable.cause),
        }
    }
}
