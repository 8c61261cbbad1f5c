//! Sub-project tools, including the fan-out tools over every parent project.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::{NoParams, SinchTool};
use crate::domains::tools::error::ToolResult;
use crate::sinch::SinchContext;
use crate::sinch::aggregate;
use crate::sinch::clients::NewSubproject;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateSubprojectParams {
    #[schemars(description = "Parent project ID")]
    pub parent_project_id: String,

    #[schemars(description = "Display name of the new sub-project")]
    pub display_name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[schemars(description = "Named project whose credentials to use")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateSubprojectTool;

#[async_trait]
impl SinchTool for CreateSubprojectTool {
    const NAME: &'static str = "sinch_create_subproject";
    const DESCRIPTION: &'static str = "Create a sub-project under a parent project.";

    type Params = CreateSubprojectParams;

    async fn execute(ctx: &SinchContext, params: CreateSubprojectParams) -> ToolResult<Value> {
        let client = ctx.subprojects(params.project.as_deref())?;
        let subproject = NewSubproject {
            display_name: params.display_name,
            description: params.description,
        };
        Ok(client.create(&params.parent_project_id, &subproject).await?)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListSubprojectsParams {
    #[schemars(description = "Parent project ID")]
    pub parent_project_id: String,

    #[schemars(description = "Named project whose credentials to use")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ListSubprojectsTool;

#[async_trait]
impl SinchTool for ListSubprojectsTool {
    const NAME: &'static str = "sinch_list_subprojects";
    const DESCRIPTION: &'static str = "List the sub-projects of a parent project.";

    type Params = ListSubprojectsParams;

    async fn execute(ctx: &SinchContext, params: ListSubprojectsParams) -> ToolResult<Value> {
        let client = ctx.subprojects(params.project.as_deref())?;
        Ok(client.list(&params.parent_project_id).await?)
    }
}

/// Arguments shared by the tools addressing one sub-project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubprojectParams {
    #[schemars(description = "Parent project ID")]
    pub parent_project_id: String,

    #[schemars(description = "Sub-project ID")]
    pub subproject_id: String,

    #[schemars(description = "Named project whose credentials to use")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetSubprojectTool;

#[async_trait]
impl SinchTool for GetSubprojectTool {
    const NAME: &'static str = "sinch_get_subproject";
    const DESCRIPTION: &'static str = "Get one sub-project of a parent project.";

    type Params = SubprojectParams;

    async fn execute(ctx: &SinchContext, params: SubprojectParams) -> ToolResult<Value> {
        let client = ctx.subprojects(params.project.as_deref())?;
        Ok(client
            .get(&params.parent_project_id, &params.subproject_id)
            .await?)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteSubprojectTool;

#[async_trait]
impl SinchTool for DeleteSubprojectTool {
    const NAME: &'static str = "sinch_delete_subproject";
    const DESCRIPTION: &'static str = "Delete a sub-project of a parent project.";

    type Params = SubprojectParams;

    async fn execute(ctx: &SinchContext, params: SubprojectParams) -> ToolResult<Value> {
        let client = ctx.subprojects(params.project.as_deref())?;
        Ok(client
            .delete(&params.parent_project_id, &params.subproject_id)
            .await?)
    }
}

// ============================================================================
// Aggregates
// ============================================================================

#[derive(Debug, Clone)]
pub struct ListAllSubprojectsTool;

#[async_trait]
impl SinchTool for ListAllSubprojectsTool {
    const NAME: &'static str = "sinch_list_all_subprojects";
    const DESCRIPTION: &'static str = "List sub-projects across every configured parent project (SINCH_PARENT_PROJECTS plus the legacy project ID). Parents that fail are reported inline with their error.";

    type Params = NoParams;

    async fn execute(ctx: &SinchContext, _params: NoParams) -> ToolResult<Value> {
        Ok(aggregate::list_all_subprojects(ctx).await?)
    }
}

#[derive(Debug, Clone)]
pub struct TestParentAccessTool;

#[async_trait]
impl SinchTool for TestParentAccessTool {
    const NAME: &'static str = "sinch_test_parent_access";
    const DESCRIPTION: &'static str =
        "Check that every configured parent project is reachable with the default credentials.";

    type Params = NoParams;

    async fn execute(ctx: &SinchContext, _params: NoParams) -> ToolResult<Value> {
        Ok(aggregate::test_parent_access(ctx).await?)
    }
}
