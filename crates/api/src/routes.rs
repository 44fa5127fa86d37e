use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Creates all API routes with state
///
/// Only GET is served; any other method or unknown path is a 404.
pub fn create_api_routes(state: AppState) -> Router {
    let cache_control = HeaderValue::from_str(&format!(
        "public, max-age={}",
        state.http_cache_max_age
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("no-cache"));

    Router::new()
        .route("/", get(handlers::hello).fallback(handlers::not_found))
        .route(
            "/ssl/{domain}",
            get(handlers::get_ssl_expiry).fallback(handlers::not_found),
        )
        .route(
            "/whois/{domain}",
            get(handlers::get_whois_expiry).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
