//! TCP transport.
//!
//! Every accepted connection gets its own MCP session. Sessions share the
//! server clone, and with it the single Sinch context.

use std::net::SocketAddr;
use std::time::Duration;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Back-off after a failed `accept`.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept connections forever.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - MCP sessions on tcp://{}", addr);

        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Could not set TCP_NODELAY for {}: {}", peer, e);
                    }
                    tokio::spawn(serve_session(server.clone(), stream, peer));
                }
                Err(e) => {
                    warn!("Accept failed: {}", e);
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                }
            }
        }
    }
}

async fn serve_session(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    let session = match server.serve(stream).await {
        Ok(session) => session,
        Err(e) => {
            warn!("Handshake with {} failed: {}", peer, e);
            return;
        }
    };
    info!("Session opened for {}", peer);

    match session.waiting().await {
        Ok(reason) => info!("Session for {} closed: {:?}", peer, reason),
        Err(e) => warn!("Session for {} ended with error: {}", peer, e),
    }
}
