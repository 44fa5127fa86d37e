use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("The host named `{0}` does not exist.")]
    HostDoesNotExist(String),

    #[error("Could not establish a TLS connection to `{host}`: {reason}")]
    TlsHandshake { host: String, reason: String },

    #[error("No certificate presented by `{0}`")]
    CertificateUnavailable(String),

    #[error("No WHOIS server known for `{0}`")]
    WhoisServerNotFound(String),

    #[error("WHOIS query to {server} failed: {reason}")]
    WhoisQueryFailed { server: String, reason: String },

    #[error("No expiration date found for `{0}`")]
    ExpiryNotFound(String),

    #[error("Invalid expiration date: {0}")]
    InvalidExpiryDate(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Cache storage error: {0}")]
    CacheStorage(String),
}

