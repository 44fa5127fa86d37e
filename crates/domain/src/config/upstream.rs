use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Settings shared by the TLS certificate and WHOIS clients
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Upper bound for one upstream lookup in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Port used for the TLS handshake (default: 443)
    #[serde(default = "default_tls_port")]
    pub tls_port: u16,

    /// WHOIS protocol port (default: 43)
    #[serde(default = "default_whois_port")]
    pub whois_port: u16,

    /// Server asked for the authoritative WHOIS server of a TLD
    #[serde(default = "default_whois_root_server")]
    pub whois_root_server: String,

    /// Static TLD to WHOIS server overrides, e.g. `com = "whois.verisign-grs.com"`
    #[serde(default)]
    pub whois_servers: HashMap<String, String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            tls_port: default_tls_port(),
            whois_port: default_whois_port(),
            whois_root_server: default_whois_root_server(),
            whois_servers: HashMap::new(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_tls_port() -> u16 {
    443
}

fn default_whois_port() -> u16 {
    43
}

fn default_whois_root_server() -> String {
    "whois.iana.org".to_string()
}
