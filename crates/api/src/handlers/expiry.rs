use crate::{dto::OutputResponse, state::AppState, utils::PrettyJson};
use axum::extract::{rejection::PathRejection, Path, State};
use certwatch_application::use_cases::ExpiryOutcome;
use tracing::{debug, instrument, warn};

pub const DOMAIN_INVALID: &str = "domain is invalid";
pub const MANY_REQUESTS: &str = "many requests";

/// A segment that cannot be decoded is just another invalid domain.
fn domain_from(path: Result<Path<String>, PathRejection>) -> Option<String> {
    match path {
        Ok(Path(domain)) => Some(domain),
        Err(rejection) => {
            debug!(error = %rejection, "Undecodable domain segment");
            None
        }
    }
}

/// Certificate expiry. Upstream failures are shown to the caller verbatim.
#[instrument(skip_all, name = "api_get_ssl_expiry")]
pub async fn get_ssl_expiry(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> PrettyJson<OutputResponse> {
    let outcome = match domain_from(path) {
        Some(domain) => state.get_ssl_expiry.execute(&domain).await,
        None => ExpiryOutcome::InvalidDomain,
    };

    let output = match outcome {
        ExpiryOutcome::Found(expiry) => {
            debug!(expiry = %expiry, "Certificate expiry resolved");
            expiry.format()
        }
        ExpiryOutcome::InvalidDomain => DOMAIN_INVALID.to_string(),
        ExpiryOutcome::Unavailable(e) => {
            warn!(error = %e, "Certificate lookup failed");
            e.to_string()
        }
    };

    PrettyJson(OutputResponse::new(output))
}

/// Registration expiry. Upstream failures collapse into a generic throttling message.
#[instrument(skip_all, name = "api_get_whois_expiry")]
pub async fn get_whois_expiry(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> PrettyJson<OutputResponse> {
    let outcome = match domain_from(path) {
        Some(domain) => state.get_whois_expiry.execute(&domain).await,
        None => ExpiryOutcome::InvalidDomain,
    };

    let output = match outcome {
        ExpiryOutcome::Found(expiry) => {
            debug!(expiry = %expiry, "Registration expiry resolved");
            expiry.format()
        }
        ExpiryOutcome::InvalidDomain => DOMAIN_INVALID.to_string(),
        ExpiryOutcome::Unavailable(e) => {
            warn!(error = %e, "WHOIS lookup failed");
            MANY_REQUESTS.to_string()
        }
    };

    PrettyJson(OutputResponse::new(output))
}
