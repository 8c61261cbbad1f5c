//! Resource definitions module.
//!
//! Each browsable Sinch object family is defined in its own file with:
//! - URI template and metadata
//! - How to enumerate instances (from the matching list call)
//! - How to fetch one instance
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register it in `registry.rs` and route it in `service.rs`

use async_trait::async_trait;
use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceTemplate};
use serde_json::Value;

use super::uri::ResourceUri;
use crate::sinch::{SinchContext, SinchResult};

pub mod active_number;
pub mod sms_batch;

pub use active_number::ActiveNumberResource;
pub use sms_batch::SmsBatchResource;

/// MIME type of every Sinch resource.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Trait for resource definitions.
#[async_trait]
pub trait ResourceDefinition {
    /// RFC 6570 template of the resource URIs.
    const URI_TEMPLATE: &'static str;

    /// The display name of the template.
    const NAME: &'static str;

    /// A description of the template.
    const DESCRIPTION: &'static str;

    /// Enumerate the instances visible to the default project.
    async fn list(ctx: &SinchContext) -> SinchResult<Vec<Resource>>;

    /// Fetch one instance by id.
    async fn fetch(ctx: &SinchContext, id: &str) -> SinchResult<Value>;
}

/// Build the resource template advertised for a definition.
pub fn template<R: ResourceDefinition>() -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: R::URI_TEMPLATE.to_string(),
        name: R::NAME.to_string(),
        title: Some(R::NAME.to_string()),
        description: Some(R::DESCRIPTION.to_string()),
        mime_type: Some(JSON_MIME_TYPE.to_string()),
    }
    .no_annotation()
}

/// Build one listed resource descriptor.
pub fn descriptor(uri: &ResourceUri, name: String, description: String) -> Resource {
    let mut raw = RawResource::new(uri.to_string(), name);
    raw.description = Some(description);
    raw.mime_type = Some(JSON_MIME_TYPE.to_string());
    raw.no_annotation()
}

/// Items of a list response field, empty when absent.
fn items<'a>(body: &'a Value, field: &str) -> &'a [Value] {
    body.get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
