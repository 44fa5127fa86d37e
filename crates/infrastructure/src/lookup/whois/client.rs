use certwatch_domain::DomainError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// Upper bound on a single WHOIS response
const MAX_RESPONSE_SIZE: u64 = 256 * 1024;

/// Send one port-43 WHOIS query and read the answer until the server closes.
pub async fn query(server: &str, port: u16, query: &str) -> Result<String, DomainError> {
    let failed = |reason: String| DomainError::WhoisQueryFailed {
        server: server.to_string(),
        reason,
    };

    let mut stream = TcpStream::connect((server, port))
        .await
        .map_err(|e| failed(e.to_string()))?;

    stream
        .write_all(format!("{}\r\n", query).as_bytes())
        .await
        .map_err(|e| failed(e.to_string()))?;

    let mut raw = Vec::with_capacity(4096);
    (&mut stream)
        .take(MAX_RESPONSE_SIZE)
        .read_to_end(&mut raw)
        .await
        .map_err(|e| failed(e.to_string()))?;

    debug!(
        server = server,
        query = query,
        response_len = raw.len(),
        "WHOIS response received"
    );

    Ok(String::from_utf8_lossy(&raw).into_owned())
}
