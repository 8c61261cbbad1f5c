//! Resources domain module.
//!
//! Read-only `sinch://` views over remote Sinch state: SMS batches and
//! active numbers of the default project.
//!
//! ## Architecture
//!
//! - `uri.rs` - Parsing and rendering of `sinch://<family>/<kind>/<id>`
//! - `definitions/` - One file per resource family
//! - `registry.rs` - Resource templates
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod uri;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::get_all_resource_templates;
pub use service::ResourceService;
pub use uri::{ResourceFamily, ResourceKind, ResourceUri};
