//! Domain modules containing the MCP surface of the server.
//!
//! - **tools**: Sinch operations callable by MCP clients
//! - **resources**: read-only `sinch://` resources

pub mod resources;
pub mod tools;
