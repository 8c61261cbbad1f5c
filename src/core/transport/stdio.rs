//! STDIO transport, the mode MCP desktop clients spawn.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single session on stdin/stdout until the client hangs up.
    ///
    /// Logs must go to stderr while this runs.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - serving MCP on stdin/stdout");

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let reason = session
            .waiting()
            .await
            .map_err(|e| TransportError::session(e.to_string()))?;

        info!("STDIO session closed: {:?}", reason);
        Ok(())
    }
}
