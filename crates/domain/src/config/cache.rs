use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Where expiring cache entries live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Process-lifetime map; every key starts cold after a restart
    Memory,
    /// One `<key>.txt` file per entry; file mtime is the staleness clock
    File,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => Err(format!("unknown cache backend '{}'", other)),
        }
    }
}

/// Expiring cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Storage backend (default: memory)
    #[serde(default = "default_backend")]
    pub backend: CacheBackend,

    /// Directory holding cache files when `backend = "file"` (default: ".")
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// TTL for certificate expiry entries in seconds (default: 86400)
    #[serde(default = "default_ssl_ttl")]
    pub ssl_ttl_secs: u64,

    /// TTL for WHOIS expiry entries in seconds (default: 300)
    #[serde(default = "default_whois_ttl")]
    pub whois_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            directory: default_directory(),
            ssl_ttl_secs: default_ssl_ttl(),
            whois_ttl_secs: default_whois_ttl(),
        }
    }
}

fn default_backend() -> CacheBackend {
    CacheBackend::Memory
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_ssl_ttl() -> u64 {
    86400
}

fn default_whois_ttl() -> u64 {
    300
}
