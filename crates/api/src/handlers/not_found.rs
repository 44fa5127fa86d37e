use axum::http::{Method, StatusCode, Uri};
use tracing::debug;

pub async fn not_found(method: Method, uri: Uri) -> StatusCode {
    debug!(method = %method, path = %uri.path(), "No route matched");
    StatusCode::NOT_FOUND
}
