//! Resource service implementation.
//!
//! Lists and reads `sinch://` resources. Both always use the default
//! project; there is no per-request project selector on this path.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use super::definitions::{
    ActiveNumberResource, JSON_MIME_TYPE, ResourceDefinition, SmsBatchResource,
};
use super::error::ResourceError;
use super::registry::get_all_resource_templates;
use super::uri::{ResourceFamily, ResourceKind, ResourceUri};
use crate::sinch::SinchContext;

/// Service for listing and reading Sinch resources.
pub struct ResourceService {
    ctx: Arc<SinchContext>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService over the shared Sinch context.
    pub fn new(ctx: Arc<SinchContext>) -> Self {
        info!("Initializing ResourceService");
        Self {
            ctx,
            templates: get_all_resource_templates(),
        }
    }

    /// List the resources visible to the default project.
    ///
    /// Best effort: a failure is logged and whatever was collected before it
    /// is returned. Active numbers are only listed when the default project
    /// has a project ID.
    pub async fn list_resources(&self) -> Vec<Resource> {
        let mut resources = Vec::new();

        match SmsBatchResource::list(&self.ctx).await {
            Ok(batches) => resources.extend(batches),
            Err(e) => {
                warn!("Failed to list SMS batch resources: {}", e);
                return resources;
            }
        }

        let has_project_id = self
            .ctx
            .resolve(None)
            .is_ok_and(|project| project.config.project_id.is_some());
        if has_project_id {
            match ActiveNumberResource::list(&self.ctx).await {
                Ok(numbers) => resources.extend(numbers),
                Err(e) => warn!("Failed to list active number resources: {}", e),
            }
        }

        resources
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let address = ResourceUri::parse(uri)?;

        let body = match (address.family, address.kind) {
            (ResourceFamily::Sms, ResourceKind::Batch) => {
                SmsBatchResource::fetch(&self.ctx, &address.id).await?
            }
            (ResourceFamily::Numbers, ResourceKind::Active) => {
                ActiveNumberResource::fetch(&self.ctx, &address.id).await?
            }
            _ => return Err(ResourceError::not_found(uri)),
        };

        Ok(ReadResourceResult {
            contents: vec![json_contents(uri, &body)?],
        })
    }
}

fn json_contents(uri: &str, body: &Value) -> Result<ResourceContents, ResourceError> {
    let text =
        serde_json::to_string_pretty(body).map_err(|e| ResourceError::internal(e.to_string()))?;
    Ok(ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some(JSON_MIME_TYPE.to_string()),
        text,
        meta: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinch::SinchError;
    use crate::sinch::projects::{ENV_API_TOKEN, ENV_PROJECT_ID, ENV_SERVICE_PLAN_ID};
    use crate::sinch::testing::{RecordingTransport, context_with};
    use serde_json::json;

    const LEGACY: &[(&str, &str)] = &[(ENV_SERVICE_PLAN_ID, "sp"), (ENV_API_TOKEN, "tok")];
    const LEGACY_WITH_PROJECT: &[(&str, &str)] = &[
        (ENV_SERVICE_PLAN_ID, "sp"),
        (ENV_API_TOKEN, "tok"),
        (ENV_PROJECT_ID, "proj-1"),
    ];

    fn listing_transport() -> Arc<RecordingTransport> {
        RecordingTransport::with(|request| {
            if request.path.ends_with("/batches") {
                Ok(json!({"batches": [{"id": "b1", "to": ["+1"]}]}))
            } else {
                Ok(json!({"activeNumbers": [
                    {"phoneNumber": "+12025550123", "capability": ["SMS"]}
                ]}))
            }
        })
    }

    #[tokio::test]
    async fn test_list_without_project_id_skips_numbers() {
        let transport = listing_transport();
        let service = ResourceService::new(context_with(LEGACY, transport.clone()));

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.uri, "sinch://sms/batch/b1");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_list_with_project_id_includes_numbers() {
        let transport = listing_transport();
        let service = ResourceService::new(context_with(LEGACY_WITH_PROJECT, transport.clone()));

        let uris: Vec<_> = service
            .list_resources()
            .await
            .into_iter()
            .map(|r| r.raw.uri)
            .collect();
        assert_eq!(
            uris,
            vec!["sinch://sms/batch/b1", "sinch://numbers/active/%2B12025550123"]
        );
    }

    #[tokio::test]
    async fn test_list_failure_degrades_to_empty() {
        let transport = RecordingTransport::failing(500);
        let service = ResourceService::new(context_with(LEGACY_WITH_PROJECT, transport.clone()));

        assert!(service.list_resources().await.is_empty());
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_read_decodes_phone_number() {
        let transport = RecordingTransport::returning(json!({"phoneNumber": "+12025550123"}));
        let service = ResourceService::new(context_with(LEGACY_WITH_PROJECT, transport.clone()));

        let uri = "sinch://numbers/active/%2B12025550123";
        let result = service.read_resource(uri).await.unwrap();

        assert_eq!(
            transport.requests()[0].path,
            "/v1/projects/proj-1/activeNumbers/%2B12025550123"
        );
        match &result.contents[0] {
            ResourceContents::TextResourceContents {
                uri: content_uri,
                mime_type,
                text,
                ..
            } => {
                assert_eq!(content_uri, uri);
                assert_eq!(mime_type.as_deref(), Some("application/json"));
                let body: Value = serde_json::from_str(text).unwrap();
                assert_eq!(body["phoneNumber"], "+12025550123");
            }
            other => panic!("unexpected contents: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_unknown_shape_is_not_found() {
        let transport = RecordingTransport::returning(json!({}));
        let service = ResourceService::new(context_with(LEGACY, transport.clone()));

        let err = service.read_resource("sinch://voice/call/1").await.unwrap_err();
        assert_eq!(err.to_string(), "Resource not found: sinch://voice/call/1");
        assert!(err.is_addressing());
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_read_number_requires_project_id() {
        let transport = RecordingTransport::returning(json!({}));
        let service = ResourceService::new(context_with(LEGACY, transport.clone()));

        let err = service
            .read_resource("sinch://numbers/active/%2B1")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ResourceError::Sinch(SinchError::ProjectIdRequired { .. })
        ));
        assert_eq!(transport.call_count(), 0);
    }
}
