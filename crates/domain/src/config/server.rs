use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_web_port")]
    pub web_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// `max-age` advertised in the `Cache-Control` header of every response
    #[serde(default = "default_http_cache_max_age")]
    pub http_cache_max_age: u64,
}

fn default_web_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_http_cache_max_age() -> u64 {
    86400
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            web_port: default_web_port(),
            bind_address: default_bind_address(),
            http_cache_max_age: default_http_cache_max_age(),
        }
    }
}
