//! # CertWatch
//!
//! HTTP API reporting certificate and registration expiry dates

mod bootstrap;
mod di;
mod server;

use certwatch_domain::config::CacheBackend;
use certwatch_domain::CliOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "certwatch")]
#[command(version)]
#[command(about = "Certificate and WHOIS expiry lookups with short-lived caching")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Cache backend (memory or file)
    #[arg(long)]
    cache_backend: Option<CacheBackend>,

    /// Directory for cache files when the file backend is used
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.bind.clone(),
            web_port: self.port,
            log_level: self.log_level.clone(),
            cache_backend: self.cache_backend,
            cache_dir: self.cache_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    tracing::info!("CertWatch starting");

    let store = di::build_cache_store(&config).await?;
    let state = di::build_app_state(&config, store);
    let app = certwatch_api::create_api_routes(state);

    server::start_web_server(&config.server.bind_address, config.server.web_port, app).await
}
