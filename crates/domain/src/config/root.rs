use super::logging::LOG_LEVELS;
use super::{CacheBackend, CacheConfig, ConfigError, LoggingConfig, ServerConfig, UpstreamConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration, loaded from an optional TOML file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub log_level: Option<String>,
    pub cache_backend: Option<CacheBackend>,
    pub cache_dir: Option<PathBuf>,
}

impl Config {
    /// Load from `path` (or defaults when `None`) and apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_string(),
                    source,
                })?;
                Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_string(),
                    source,
                })?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(backend) = overrides.cache_backend {
            self.cache.backend = backend;
        }
        if let Some(dir) = overrides.cache_dir {
            self.cache.directory = dir;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("server.web_port cannot be 0".into()));
        }
        if self.cache.ssl_ttl_secs == 0 || self.cache.whois_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "cache TTLs must be greater than 0".into(),
            ));
        }
        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "upstream.timeout_ms must be greater than 0".into(),
            ));
        }
        if self.upstream.tls_port == 0 || self.upstream.whois_port == 0 {
            return Err(ConfigError::Validation(
                "upstream ports cannot be 0".into(),
            ));
        }
        if self.upstream.whois_root_server.trim().is_empty() {
            return Err(ConfigError::Validation(
                "upstream.whois_root_server cannot be empty".into(),
            ));
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}
