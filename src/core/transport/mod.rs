//! Transports for the MCP server.
//!
//! - **STDIO** (feature `stdio`, default): one MCP session on stdin/stdout.
//! - **TCP** (feature `tcp`): one MCP session per accepted connection.
//! - **HTTP** (feature `http`): stateless JSON-RPC over POST.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
