//! Resolution and connection establishment.
//!
//! Every resolved address is a candidate. Candidates are tried strictly in
//! resolver order, one at a time, and the first one that accepts wins.

use std::net::SocketAddr;

use tokio::net::{TcpStream, lookup_host};

use crate::error::ConnectError;

/// Resolves `host:port` and connects to the first candidate that accepts.
///
/// A failed attempt's socket is dropped before the next candidate is tried,
/// so on error no socket is left open.
pub async fn connect(host: &str, port: u16) -> Result<TcpStream, ConnectError> {
    let authority = authority(host, port);

    let candidates: Vec<SocketAddr> = lookup_host(authority.as_str())
        .await
        .map_err(|source| {
            tracing::warn!(authority = %authority, error = %source, "Resolution failed");
            ConnectError::Resolve {
                authority: authority.clone(),
                source,
            }
        })?
        .collect();

    connect_any(&authority, &candidates).await
}

/// Tries `candidates` in order.
pub async fn connect_any(
    authority: &str,
    candidates: &[SocketAddr],
) -> Result<TcpStream, ConnectError> {
    for (attempt, addr) in candidates.iter().enumerate() {
        tracing::debug!(
            addr = %addr,
            attempt = attempt + 1,
            candidates = candidates.len(),
            "Connecting"
        );

        match TcpStream::connect(addr).await {
            Ok(stream) => {
                tracing::info!(addr = %addr, "Connected");
                return Ok(stream);
            }
            Err(e) => {
                tracing::warn!(addr = %addr, error = %e, "Connect attempt failed");
            }
        }
    }

    tracing::error!(authority = %authority, candidates = candidates.len(), "No candidate accepted");
    Err(ConnectError::NoRoute {
        authority: authority.to_string(),
    })
}

fn authority(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}
