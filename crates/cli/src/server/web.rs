use anyhow::Context;
use axum::Router;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing::info;

pub async fn start_web_server(bind_address: &str, port: u16, app: Router) -> anyhow::Result<()> {
    let socket_addr = socket_addr(bind_address, port)?;

    let listener = TcpListener::bind(socket_addr).await?;
    info!(bind_address = %socket_addr, "Web server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

/// Accepts bare IPv4 or IPv6 addresses (`0.0.0.0`, `::`), with or without brackets.
fn socket_addr(bind_address: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = bind_address
        .trim_start_matches('[')
        .trim_end_matches(']')
        .parse()
        .with_context(|| format!("invalid bind address '{}'", bind_address))?;
    Ok(SocketAddr::new(ip, port))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
