use async_trait::async_trait;
use certwatch_application::ports::ExpiryLookup;
use certwatch_domain::{DomainError, ExpiryDate, LookupKind};
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, RootCertStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tracing::debug;

/// Reads the leaf certificate a host presents on its TLS port.
pub struct TlsCertificateLookup {
    port: u16,
    timeout: Duration,
    connector: TlsConnector,
}

impl TlsCertificateLookup {
    pub fn new(port: u16, timeout: Duration) -> Self {
        let mut roots = RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let config = ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();

        Self {
            port,
            timeout,
            connector: TlsConnector::from(Arc::new(config)),
        }
    }

    async fn fetch(&self, domain: &str) -> Result<ExpiryDate, DomainError> {
        let addr = tokio::net::lookup_host((domain, self.port))
            .await
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| DomainError::HostDoesNotExist(domain.to_string()))?;

        let handshake_error = |reason: String| DomainError::TlsHandshake {
            host: domain.to_string(),
            reason,
        };

        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| handshake_error(e.to_string()))?;

        let server_name = ServerName::try_from(domain.to_string())
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", domain, e)))?;

        let tls = self
            .connector
            .connect(server_name, stream)
            .await
            .map_err(|e| handshake_error(e.to_string()))?;

        let (_, session) = tls.get_ref();
        let leaf = session
            .peer_certificates()
            .and_then(|chain| chain.first())
            .ok_or_else(|| DomainError::CertificateUnavailable(domain.to_string()))?;

        let expiry = expiry_from_der(leaf.as_ref())?;

        debug!(domain = domain, server = %addr, expiry = %expiry, "Certificate inspected");
        Ok(expiry)
    }
}

#[async_trait]
impl ExpiryLookup for TlsCertificateLookup {
    async fn fetch_expiry(&self, domain: &str) -> Result<ExpiryDate, DomainError> {
        tokio::time::timeout(self.timeout, self.fetch(domain))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
    }

    fn kind(&self) -> LookupKind {
        LookupKind::Ssl
    }
}

/// `notAfter` of a DER-encoded X.509 certificate.
pub fn expiry_from_der(der: &[u8]) -> Result<ExpiryDate, DomainError> {
    let (_, cert) = x509_parser::parse_x509_certificate(der)
        .map_err(|e| DomainError::InvalidExpiryDate(format!("unparsable certificate: {}", e)))?;

    let not_after = cert.validity().not_after.timestamp();
    ExpiryDate::from_timestamp(not_after).ok_or_else(|| {
        DomainError::InvalidExpiryDate(format!("notAfter out of range: {}", not_after))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn self_signed_until(year: i32, month: u8, day: u8) -> Vec<u8> {
        let mut params = rcgen::CertificateParams::new(vec!["example.com".to_string()]).unwrap();
        params.not_after = rcgen::date_time_ymd(year, month, day);
        let key = rcgen::KeyPair::generate().unwrap();
        params.self_signed(&key).unwrap().der().to_vec()
    }

    #[test]
    fn test_expiry_from_der_reads_not_after() {
        let der = self_signed_until(2025, 12, 31);
        let expiry = expiry_from_der(&der).unwrap();
        assert_eq!(expiry.format(), "31/12/2025");
    }

    #[test]
    fn test_expiry_from_der_rejects_garbage() {
        let err = expiry_from_der(b"not a certificate").unwrap_err();
        assert!(matches!(err, DomainError::InvalidExpiryDate(_)));
    }

    #[test]
    fn test_lookup_kind() {
        let lookup = TlsCertificateLookup::new(443, Duration::from_secs(5));
        assert_eq!(lookup.kind(), LookupKind::Ssl);
    }

    #[tokio::test]
    async fn test_unresolvable_host_does_not_exist() {
        let lookup = TlsCertificateLookup::new(443, Duration::from_secs(5));
        let err = lookup.fetch_expiry("certwatch-missing.invalid").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::HostDoesNotExist(_) | DomainError::QueryTimeout
        ));
    }
}
