//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - [`ToolKind`], the closed set of tools, generated from one table
//! - Name-based dispatch for the HTTP transport
//! - Tool metadata for listing

use rmcp::handler::server::tool::ToolRoute;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use super::definitions::common;
use super::definitions::*;
use super::error::{ToolError, ToolResult};
use crate::sinch::SinchContext;

// ============================================================================
// Tool kinds
// ============================================================================

/// Generates [`ToolKind`] and its exhaustive per-tool matches.
macro_rules! tool_kinds {
    ($($variant:ident => $tool:ty),+ $(,)?) => {
        /// Every tool this server exposes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ToolKind {
            $($variant),+
        }

        impl ToolKind {
            /// All tools, in catalog order.
            pub const ALL: &'static [ToolKind] = &[$(ToolKind::$variant),+];

            /// Tool name as registered in MCP.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => <$tool as SinchTool>::NAME),+
                }
            }

            /// Tool model (metadata).
            pub fn to_tool(self) -> Tool {
                match self {
                    $(Self::$variant => common::to_tool::<$tool>()),+
                }
            }

            /// Route for the rmcp ToolRouter.
            pub fn route<S>(self, ctx: Arc<SinchContext>) -> ToolRoute<S>
            where
                S: Send + Sync + 'static,
            {
                match self {
                    $(Self::$variant => common::create_route::<$tool, S>(ctx)),+
                }
            }

            /// Decode arguments and run the tool.
            pub async fn call(
                self,
                ctx: &SinchContext,
                arguments: JsonObject,
            ) -> ToolResult<CallToolResult> {
                match self {
                    $(Self::$variant => common::call::<$tool>(ctx, arguments).await),+
                }
            }
        }
    };
}

tool_kinds! {
    ListProjects => ListProjectsTool,
    SendSms => SendSmsTool,
    GetBatch => GetBatchTool,
    GetDeliveryReport => GetDeliveryReportTool,
    ListBatches => ListBatchesTool,
    SearchNumbers => SearchNumbersTool,
    ActivateNumber => ActivateNumberTool,
    ListActiveNumbers => ListActiveNumbersTool,
    GetActiveNumber => GetActiveNumberTool,
    ReleaseNumber => ReleaseNumberTool,
    StartVerification => StartVerificationTool,
    ReportVerification => ReportVerificationTool,
    GetVerificationStatus => GetVerificationStatusTool,
    CreateSubproject => CreateSubprojectTool,
    ListSubprojects => ListSubprojectsTool,
    GetSubproject => GetSubprojectTool,
    DeleteSubproject => DeleteSubprojectTool,
    ListAllSubprojects => ListAllSubprojectsTool,
    TestParentAccess => TestParentAccessTool,
}

impl ToolKind {
    /// Look up a tool by its MCP name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - lists tools and dispatches calls by name.
pub struct ToolRegistry {
    ctx: Arc<SinchContext>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(ctx: Arc<SinchContext>) -> Self {
        Self { ctx }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        ToolKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        ToolKind::ALL.iter().map(|kind| kind.to_tool()).collect()
    }

    /// Dispatch a tool call by name (used by the HTTP transport).
    ///
    /// Operation failures come back as `isError: true` payloads; only an
    /// unknown tool or malformed arguments are returned as `Err`.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> ToolResult<Value> {
        let kind = ToolKind::from_name(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name)
        })?;

        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be an object, got {}",
                    other
                )));
            }
        };

        let result = kind.call(&self.ctx, arguments).await?;
        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinch::projects::{ENV_API_TOKEN, ENV_SERVICE_PLAN_ID};
    use crate::sinch::testing::{RecordingTransport, context_with};
    use serde_json::json;
    use std::collections::HashSet;

    const LEGACY: &[(&str, &str)] = &[(ENV_SERVICE_PLAN_ID, "sp"), (ENV_API_TOKEN, "tok")];

    fn registry(transport: Arc<RecordingTransport>) -> ToolRegistry {
        ToolRegistry::new(context_with(LEGACY, transport))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = registry(RecordingTransport::returning(json!({})));
        let names = registry.tool_names();
        assert_eq!(names.len(), 19);
        assert!(names.iter().all(|n| n.starts_with("sinch_")));

        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_from_name_round_trip() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(ToolKind::from_name("sinch_unknown"), None);
    }

    #[test]
    fn test_schemas_are_objects() {
        for tool in ToolRegistry::get_all_tools() {
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&json!("object")),
                "{} schema",
                tool.name
            );
        }
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = registry(RecordingTransport::returning(json!({})));
        let err = registry.call_tool("unknown", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_registry_call_success_passes_body_through() {
        let transport = RecordingTransport::returning(json!({"id": "b1", "canceled": false}));
        let registry = registry(transport.clone());

        let result = registry
            .call_tool("sinch_get_batch", json!({"batch_id": "b1"}))
            .await
            .unwrap();

        assert_eq!(result["isError"], false);
        let text = result["content"][0]["text"].as_str().unwrap();
        let body: Value = serde_json::from_str(text).unwrap();
        assert_eq!(body, json!({"id": "b1", "canceled": false}));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_precondition_becomes_error_result() {
        let transport = RecordingTransport::returning(json!({}));
        let registry = registry(transport.clone());

        let result = registry
            .call_tool("sinch_release_number", json!({"phone_number": "+15550000000"}))
            .await
            .unwrap();

        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "Project ID required for Numbers API (project: default)"
        );
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_becomes_error_result() {
        let registry = registry(RecordingTransport::failing(404));

        let result = registry
            .call_tool("sinch_get_batch", json!({"batch_id": "missing"}))
            .await
            .unwrap();

        assert_eq!(result["isError"], true);
        assert!(result["content"][0]["text"].as_str().unwrap().contains("404"));
    }

    #[tokio::test]
    async fn test_malformed_arguments_rejected() {
        let transport = RecordingTransport::returning(json!({}));
        let registry = registry(transport.clone());

        let err = registry
            .call_tool("sinch_get_batch", json!({"batchId": "b1"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        let err = registry
            .call_tool("sinch_list_batches", json!(["x"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert_eq!(transport.call_count(), 0);
    }
}
