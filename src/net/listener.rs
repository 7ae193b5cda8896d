//! Plaintext listener bootstrap.
//!
//! # Responsibilities
//! - Bind the plaintext listener on all interfaces
//!
//! # Design Decisions
//! - Accepting is left to the HTTP layer; only the bind lives here

use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;

/// Bind the plaintext listener on the given port, all interfaces.
pub async fn bind(port: u16) -> Result<TcpListener, std::io::Error> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %listener.local_addr()?, "Listener bound");
    Ok(listener)
}
