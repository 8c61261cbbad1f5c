//! Verification tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::SinchTool;
use crate::domains::tools::error::ToolResult;
use crate::sinch::SinchContext;
use crate::sinch::clients::{StartVerification, VerificationMethod};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StartVerificationParams {
    #[schemars(description = "Phone number to verify, in E.164 format")]
    pub phone_number: String,

    #[schemars(description = "Verification method: sms, flashcall or callout")]
    pub method: VerificationMethod,

    #[schemars(description = "Custom data echoed back in callbacks")]
    #[serde(default)]
    pub custom: Option<String>,

    #[schemars(description = "Caller-supplied reference for this verification")]
    #[serde(default)]
    pub reference: Option<String>,

    #[schemars(description = "Named project to use instead of the default")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StartVerificationTool;

#[async_trait]
impl SinchTool for StartVerificationTool {
    const NAME: &'static str = "sinch_start_verification";
    const DESCRIPTION: &'static str = "Start verifying a phone number by SMS code, flash call or callout.";

    type Params = StartVerificationParams;

    async fn execute(ctx: &SinchContext, params: StartVerificationParams) -> ToolResult<Value> {
        let client = ctx.verification(params.project.as_deref())?;
        let request = StartVerification {
            phone_number: params.phone_number,
            method: params.method,
            custom: params.custom,
            reference: params.reference,
        };
        Ok(client.start(&request).await?)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReportVerificationParams {
    #[schemars(description = "Verification ID returned when the verification started")]
    pub verification_id: String,

    #[schemars(description = "Code received by the user")]
    pub code: String,

    #[schemars(description = "Named project to use instead of the default")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReportVerificationTool;

#[async_trait]
impl SinchTool for ReportVerificationTool {
    const NAME: &'static str = "sinch_report_verification";
    const DESCRIPTION: &'static str = "Report the code a user received to complete a verification.";

    type Params = ReportVerificationParams;

    async fn execute(ctx: &SinchContext, params: ReportVerificationParams) -> ToolResult<Value> {
        let client = ctx.verification(params.project.as_deref())?;
        Ok(client
            .report_code(&params.verification_id, &params.code)
            .await?)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct VerificationStatusParams {
    #[schemars(description = "Verification ID")]
    pub verification_id: String,

    #[schemars(description = "Named project to use instead of the default")]
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetVerificationStatusTool;

#[async_trait]
impl SinchTool for GetVerificationStatusTool {
    const NAME: &'static str = "sinch_get_verification_status";
    const DESCRIPTION: &'static str = "Get the current status of a verification.";

    type Params = VerificationStatusParams;

    async fn execute(ctx: &SinchContext, params: VerificationStatusParams) -> ToolResult<Value> {
        let client = ctx.verification(params.project.as_deref())?;
        Ok(client.get_status(&params.verification_id).await?)
    }
}
