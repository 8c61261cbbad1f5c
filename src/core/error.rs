//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error from the Sinch layer outside of a tool or resource call.
    #[error("Sinch error: {0}")]
    Sinch(#[from] crate::sinch::SinchError),

    /// Transport startup or runtime failure.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
