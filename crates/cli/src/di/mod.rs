use certwatch_api::AppState;
use certwatch_application::ports::{CacheStore, ExpiryLookup};
use certwatch_application::services::ExpiringCache;
use certwatch_application::use_cases::GetExpiryUseCase;
use certwatch_domain::config::CacheBackend;
use certwatch_domain::Config;
use certwatch_infrastructure::{
    FileCacheStore, InMemoryCacheStore, TlsCertificateLookup, WhoisLookup,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Builds the cache store selected by `cache.backend`.
pub async fn build_cache_store(config: &Config) -> anyhow::Result<Arc<dyn CacheStore>> {
    let store: Arc<dyn CacheStore> = match config.cache.backend {
        CacheBackend::Memory => Arc::new(InMemoryCacheStore::new()),
        CacheBackend::File => {
            let store = FileCacheStore::new(&config.cache.directory);
            store.ensure_directory().await?;
            Arc::new(store)
        }
    };

    info!(
        backend = store.backend_name(),
        directory = %config.cache.directory.display(),
        "Cache store ready"
    );
    Ok(store)
}

/// Wires lookups, caches and use cases into the API state.
pub fn build_app_state(config: &Config, store: Arc<dyn CacheStore>) -> AppState {
    let timeout = Duration::from_millis(config.upstream.timeout_ms);

    let ssl_lookup: Arc<dyn ExpiryLookup> =
        Arc::new(TlsCertificateLookup::new(config.upstream.tls_port, timeout));
    let whois_lookup: Arc<dyn ExpiryLookup> =
        Arc::new(WhoisLookup::from_config(&config.upstream));

    let ssl_cache = Arc::new(ExpiringCache::new(
        Arc::clone(&store),
        Duration::from_secs(config.cache.ssl_ttl_secs),
    ));
    let whois_cache = Arc::new(ExpiringCache::new(
        store,
        Duration::from_secs(config.cache.whois_ttl_secs),
    ));

    AppState {
        get_ssl_expiry: Arc::new(GetExpiryUseCase::new(ssl_lookup, ssl_cache)),
        get_whois_expiry: Arc::new(GetExpiryUseCase::new(whois_lookup, whois_cache)),
        http_cache_max_age: config.server.http_cache_max_age,
    }
}
