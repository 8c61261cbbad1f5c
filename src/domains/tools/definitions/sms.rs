//! SMS tools: send, inspect and list batches.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::SinchTool;
use crate::domains::tools::error::ToolResult;
use crate::sinch::SinchContext;
use crate::sinch::clients::{BatchListFilter, DeliveryReportMode, SendBatch};

// ============================================================================
// Send
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SendSmsParams {
    #[schemars(description = "Recipient phone numbers in E.164 format")]
    pub to: Vec<String>,

    #[schemars(description = "Sender number or alphanumeric sender ID")]
    pub from: String,

    #[schemars(description = "Message text")]
    pub body: String,

    #[schemars(description = "Delivery report mode (default: none)")]
    #[serde(default)]
    pub delivery_report: DeliveryReportMode,

    #[schemars(description = "ISO-8601 timestamp after which delivery is abandoned")]
    #[serde(default)]
    pub expire_at: Option<String>,

    #[schemars(description = "Send as a flash message (default: false)")]
    #[serde(default)]
    pub flash_message: bool,

    #[schemars(description = "Named project to use instead of the default")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SendSmsTool;

#[async_trait]
impl SinchTool for SendSmsTool {
    const NAME: &'static str = "sinch_send_sms";
    const DESCRIPTION: &'static str = "Send an SMS batch to one or more recipients. Returns the created batch as reported by Sinch.";

    type Params = SendSmsParams;

    async fn execute(ctx: &SinchContext, params: SendSmsParams) -> ToolResult<Value> {
        let client = ctx.sms(params.project.as_deref())?;
        let batch = SendBatch {
            to: params.to,
            from: params.from,
            body: params.body,
            delivery_report: params.delivery_report,
            expire_at: params.expire_at,
            flash_message: params.flash_message,
        };
        Ok(client.send_batch(&batch).await?)
    }
}

// ============================================================================
// Get batch
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetBatchParams {
    #[schemars(description = "Batch ID returned when the batch was sent")]
    pub batch_id: String,

    #[schemars(description = "Named project to use instead of the default")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetBatchTool;

#[async_trait]
impl SinchTool for GetBatchTool {
    const NAME: &'static str = "sinch_get_batch";
    const DESCRIPTION: &'static str = "Get an SMS batch by ID.";

    type Params = GetBatchParams;

    async fn execute(ctx: &SinchContext, params: GetBatchParams) -> ToolResult<Value> {
        let client = ctx.sms(params.project.as_deref())?;
        Ok(client.get_batch(&params.batch_id).await?)
    }
}

// ============================================================================
// Delivery report
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDeliveryReportParams {
    #[schemars(description = "Batch ID")]
    pub batch_id: String,

    #[schemars(description = "Return the full per-recipient report instead of the summary (default: false)")]
    #[serde(default)]
    pub full: bool,

    #[schemars(description = "Named project to use instead of the default")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetDeliveryReportTool;

#[async_trait]
impl SinchTool for GetDeliveryReportTool {
    const NAME: &'static str = "sinch_get_delivery_report";
    const DESCRIPTION: &'static str =
        "Get the delivery report of an SMS batch, as a summary or with full per-recipient detail.";

    type Params = GetDeliveryReportParams;

    async fn execute(ctx: &SinchContext, params: GetDeliveryReportParams) -> ToolResult<Value> {
        let client = ctx.sms(params.project.as_deref())?;
        Ok(client
            .get_delivery_report(&params.batch_id, params.full)
            .await?)
    }
}

// ============================================================================
// List batches
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListBatchesParams {
    #[schemars(description = "Only batches created at or after this ISO-8601 date")]
    #[serde(default)]
    pub start_date: Option<String>,

    #[schemars(description = "Only batches created before this ISO-8601 date")]
    #[serde(default)]
    pub end_date: Option<String>,

    #[schemars(description = "Named project to use instead of the default")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ListBatchesTool;

#[async_trait]
impl SinchTool for ListBatchesTool {
    const NAME: &'static str = "sinch_list_batches";
    const DESCRIPTION: &'static str = "List SMS batches, optionally restricted to a date window.";

    type Params = ListBatchesParams;

    async fn execute(ctx: &SinchContext, params: ListBatchesParams) -> ToolResult<Value> {
        let client = ctx.sms(params.project.as_deref())?;
        let filter = BatchListFilter {
            start_date: params.start_date,
            end_date: params.end_date,
        };
        Ok(client.list_batches(&filter).await?)
    }
}
