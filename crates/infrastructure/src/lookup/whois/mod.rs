pub mod client;
pub mod parser;

use async_trait::async_trait;
use certwatch_application::ports::ExpiryLookup;
use certwatch_domain::config::UpstreamConfig;
use certwatch_domain::{DomainError, ExpiryDate, LookupKind};
use dashmap::DashMap;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

/// Port-43 WHOIS client that resolves registration expiry dates.
///
/// The authoritative server of a TLD comes from the static overrides, then
/// from servers discovered earlier, then from the root server's referral.
pub struct WhoisLookup {
    root_server: String,
    port: u16,
    timeout: Duration,
    overrides: HashMap<String, String>,
    discovered: DashMap<String, String>,
}

impl WhoisLookup {
    pub fn new(root_server: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            root_server: root_server.into(),
            port,
            timeout,
            overrides: HashMap::new(),
            discovered: DashMap::new(),
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(
            config.whois_root_server.clone(),
            config.whois_port,
            Duration::from_millis(config.timeout_ms),
        )
        .with_servers(config.whois_servers.clone())
    }

    /// Static TLD to server overrides, consulted before any discovery.
    pub fn with_servers(mut self, servers: HashMap<String, String>) -> Self {
        self.overrides = servers
            .into_iter()
            .map(|(tld, server)| (tld.trim_start_matches('.').to_ascii_lowercase(), server))
            .collect();
        self
    }

    async fn server_for(&self, tld: &str) -> Result<String, DomainError> {
        if let Some(server) = self.overrides.get(tld) {
            return Ok(server.clone());
        }
        if let Some(server) = self.discovered.get(tld) {
            return Ok(server.value().clone());
        }

        let response = client::query(&self.root_server, self.port, tld).await?;
        let server = parser::parse_referral(&response)
            .ok_or_else(|| DomainError::WhoisServerNotFound(tld.to_string()))?;

        info!(tld = tld, server = %server, "Discovered WHOIS server");
        self.discovered.insert(tld.to_string(), server.clone());
        Ok(server)
    }

    async fn lookup(&self, domain: &str) -> Result<ExpiryDate, DomainError> {
        let domain = domain.to_ascii_lowercase();
        let tld = domain
            .rsplit('.')
            .next()
            .filter(|tld| !tld.is_empty())
            .ok_or_else(|| DomainError::InvalidDomainName(domain.clone()))?;

        let server = self.server_for(tld).await?;
        let response = client::query(&server, self.port, &domain).await?;

        if let Some(expiry) = parser::parse_expiry(&response) {
            return Ok(expiry);
        }

        if let Some(registrar) = parser::parse_registrar_server(&response) {
            if registrar != server {
                debug!(domain = %domain, registrar = %registrar, "Following registrar referral");
                let response = client::query(&registrar, self.port, &domain).await?;
                if let Some(expiry) = parser::parse_expiry(&response) {
                    return Ok(expiry);
                }
            }
        }

        Err(DomainError::ExpiryNotFound(domain))
    }
}

#[async_trait]
impl ExpiryLookup for WhoisLookup {
    async fn fetch_expiry(&self, domain: &str) -> Result<ExpiryDate, DomainError> {
        tokio::time::timeout(self.timeout, self.lookup(domain))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
    }

    fn kind(&self) -> LookupKind {
        LookupKind::Whois
    }
}
