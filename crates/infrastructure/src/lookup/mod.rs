pub mod tls;
pub mod whois;

pub use tls::TlsCertificateLookup;
pub use whois::WhoisLookup;
