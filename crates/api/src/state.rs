use certwatch_application::use_cases::GetExpiryUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_ssl_expiry: Arc<GetExpiryUseCase>,
    pub get_whois_expiry: Arc<GetExpiryUseCase>,
    /// `max-age` of the `Cache-Control` header set on every response
    pub http_cache_max_age: u64,
}
