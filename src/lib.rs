//! Sinch MCP server library.
//!
//! Exposes the Sinch SMS, Numbers, Verification and sub-project APIs to
//! Model Context Protocol clients as tools and resources.
//!
//! # Architecture
//!
//! - **sinch**: project configuration, credential resolution and the HTTP
//!   clients for each Sinch API family
//! - **domains**: what MCP clients see
//!   - **tools**: one tool per Sinch operation
//!   - **resources**: `sinch://` views of SMS batches and active numbers
//! - **core**: configuration, the MCP server handler and transports
//!
//! # Example
//!
//! ```rust,no_run
//! use sinch_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     dotenvy::dotenv().ok();
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod sinch;

pub use core::{Config, Error, McpServer, Result};
pub use sinch::{SinchConfig, SinchContext, SinchError};
