//! Tools domain module.
//!
//! Tools are the Sinch operations MCP clients can call.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, one file per Sinch API family
//! - `registry.rs` - The closed [`ToolKind`] set, name lookup and HTTP dispatch
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a unit struct implementing `SinchTool` in the matching `definitions/` file
//! 2. Export it in `definitions/mod.rs`
//! 3. Add one line to the `tool_kinds!` table in `registry.rs`
//!
//! The router, the catalog and HTTP dispatch all follow from that table.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::{ToolError, ToolResult};
pub use registry::{ToolKind, ToolRegistry};
pub use router::build_tool_router;
