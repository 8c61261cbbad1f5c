//! Numbers tools: search, rent, inspect and release phone numbers.
//!
//! Every tool here needs a project ID on the resolved project and fails
//! before any request when it is missing.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::SinchTool;
use crate::domains::tools::error::ToolResult;
use crate::sinch::SinchContext;
use crate::sinch::clients::{Capability, NumberSearch, NumberType};

fn default_region_code() -> String {
    "US".to_string()
}

// ============================================================================
// Search
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchNumbersParams {
    #[schemars(description = "ISO 3166-1 alpha-2 country code (default: US)")]
    #[serde(default = "default_region_code")]
    pub region_code: String,

    #[schemars(description = "Number type: MOBILE, LOCAL or TOLL_FREE (default: LOCAL)")]
    #[serde(default)]
    pub number_type: NumberType,

    #[schemars(description = "Required capabilities (SMS, VOICE)")]
    #[serde(default)]
    pub capabilities: Vec<Capability>,

    #[schemars(description = "Named project to use instead of the default")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchNumbersTool;

#[async_trait]
impl SinchTool for SearchNumbersTool {
    const NAME: &'static str = "sinch_search_numbers";
    const DESCRIPTION: &'static str = "Search phone numbers available for activation by country, type and capability.";

    type Params = SearchNumbersParams;

    async fn execute(ctx: &SinchContext, params: SearchNumbersParams) -> ToolResult<Value> {
        let client = ctx.numbers(params.project.as_deref())?;
        let search = NumberSearch {
            region_code: params.region_code,
            number_type: params.number_type,
            capabilities: params.capabilities,
        };
        Ok(client.search_available(&search).await?)
    }
}

// ============================================================================
// Activate
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ActivateNumberParams {
    #[schemars(description = "Phone number to activate, in E.164 format")]
    pub phone_number: String,

    #[schemars(description = "SMS configuration object, passed through to Sinch")]
    #[serde(default)]
    pub sms_configuration: Option<Value>,

    #[schemars(description = "Voice configuration object, passed through to Sinch")]
    #[serde(default)]
    pub voice_configuration: Option<Value>,

    #[schemars(description = "Named project to use instead of the default")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ActivateNumberTool;

#[async_trait]
impl SinchTool for ActivateNumberTool {
    const NAME: &'static str = "sinch_activate_number";
    const DESCRIPTION: &'static str = "Activate (rent) an available phone number for the project.";

    type Params = ActivateNumberParams;

    async fn execute(ctx: &SinchContext, params: ActivateNumberParams) -> ToolResult<Value> {
        let client = ctx.numbers(params.project.as_deref())?;
        Ok(client
            .activate(
                &params.phone_number,
                params.sms_configuration,
                params.voice_configuration,
            )
            .await?)
    }
}

// ============================================================================
// List / get / release
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListActiveNumbersParams {
    #[schemars(description = "Named project to use instead of the default")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ListActiveNumbersTool;

#[async_trait]
impl SinchTool for ListActiveNumbersTool {
    const NAME: &'static str = "sinch_list_active_numbers";
    const DESCRIPTION: &'static str = "List the phone numbers currently active on the project.";

    type Params = ListActiveNumbersParams;

    async fn execute(ctx: &SinchContext, params: ListActiveNumbersParams) -> ToolResult<Value> {
        let client = ctx.numbers(params.project.as_deref())?;
        Ok(client.list_active().await?)
    }
}

/// Arguments shared by the tools addressing one active number.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ActiveNumberParams {
    #[schemars(description = "Active phone number, in E.164 format")]
    pub phone_number: String,

    #[schemars(description = "Named project to use instead of the default")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetActiveNumberTool;

#[async_trait]
impl SinchTool for GetActiveNumberTool {
    const NAME: &'static str = "sinch_get_active_number";
    const DESCRIPTION: &'static str = "Get the configuration of one active phone number.";

    type Params = ActiveNumberParams;

    async fn execute(ctx: &SinchContext, params: ActiveNumberParams) -> ToolResult<Value> {
        let client = ctx.numbers(params.project.as_deref())?;
        Ok(client.get_active(&params.phone_number).await?)
    }
}

#[derive(Debug, Clone)]
pub struct ReleaseNumberTool;

#[async_trait]
impl SinchTool for ReleaseNumberTool {
    const NAME: &'static str = "sinch_release_number";
    const DESCRIPTION: &'static str = "Release an active phone number back to Sinch.";

    type Params = ActiveNumberParams;

    async fn execute(ctx: &SinchContext, params: ActiveNumberParams) -> ToolResult<Value> {
        let client = ctx.numbers(params.project.as_deref())?;
        Ok(client.release(&params.phone_number).await?)
    }
}
