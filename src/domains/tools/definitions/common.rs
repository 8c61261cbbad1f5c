//! Shared plumbing for Sinch tools.
//!
//! Every tool is a unit struct implementing [`SinchTool`]: a name, a
//! description, a typed parameter record and an async `execute`. The helpers
//! here turn such a tool into rmcp metadata and routes, and convert its
//! outcome into a `CallToolResult` exactly once.

use async_trait::async_trait;
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domains::tools::error::{ToolError, ToolResult};
use crate::sinch::SinchContext;

/// A tool backed by one Sinch operation.
#[async_trait]
pub trait SinchTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments; defaults are applied by serde.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the operation and return the remote body unmodified.
    async fn execute(ctx: &SinchContext, params: Self::Params) -> ToolResult<Value>;
}

/// Parameter record for tools that take no arguments.
#[derive(Debug, Clone, Default, serde::Deserialize, JsonSchema)]
pub struct NoParams {}

/// Build the Tool model (metadata) of a tool.
pub fn to_tool<T: SinchTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Decode an argument object into the tool's parameter record.
pub fn parse_params<T: SinchTool>(arguments: JsonObject) -> ToolResult<T::Params> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", T::NAME, e)))
}

/// Execute a tool and convert the outcome into a `CallToolResult`.
///
/// This is the single place where handler errors become error-flagged results.
pub async fn run<T: SinchTool>(ctx: &SinchContext, params: T::Params) -> CallToolResult {
    info!("Calling tool {}", T::NAME);
    match T::execute(ctx, params).await {
        Ok(body) => success_result(&body),
        Err(e) => {
            warn!("Tool {} failed: {}", T::NAME, e);
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}

/// Decode then run, for transports that dispatch by name.
pub async fn call<T: SinchTool>(
    ctx: &SinchContext,
    arguments: JsonObject,
) -> ToolResult<CallToolResult> {
    let params = parse_params::<T>(arguments)?;
    Ok(run::<T>(ctx, params).await)
}

/// Create a ToolRoute for STDIO/TCP transport.
pub fn create_route<T, S>(ctx: Arc<SinchContext>) -> ToolRoute<S>
where
    T: SinchTool + 'static,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |call: ToolCallContext<'_, S>| {
        let args = call.arguments.clone().unwrap_or_default();
        let ctx = ctx.clone();
        async move {
            let params = parse_params::<T>(args)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(run::<T>(&ctx, params).await)
        }
        .boxed()
    })
}

/// Render a remote body as pretty JSON text content.
fn success_result(body: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    CallToolResult::success(vec![Content::text(text)])
}
