//! Verification API client (`/verification/v1/verifications`).

use reqwest::Method;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::info;

use super::{ApiClient, segment};
use crate::sinch::context::SinchContext;
use crate::sinch::error::SinchResult;
use crate::sinch::resolver::ResolvedProject;

const VERIFICATIONS_PATH: &str = "/verification/v1/verifications";

/// How the verification code reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMethod {
    Sms,
    Flashcall,
    Callout,
}

impl VerificationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Flashcall => "flashcall",
            Self::Callout => "callout",
        }
    }
}

/// Parameters of a new verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartVerification {
    pub phone_number: String,
    pub method: VerificationMethod,
    pub custom: Option<String>,
    pub reference: Option<String>,
}

impl StartVerification {
    fn to_body(&self) -> Value {
        let mut body = Map::new();
        body.insert(
            "identity".to_string(),
            json!({"type": "number", "endpoint": self.phone_number}),
        );
        body.insert("method".to_string(), Value::from(self.method.as_str()));
        if let Some(custom) = &self.custom {
            body.insert("custom".to_string(), Value::from(custom.as_str()));
        }
        if let Some(reference) = &self.reference {
            body.insert("reference".to_string(), Value::from(reference.as_str()));
        }
        Value::Object(body)
    }
}

pub struct VerificationClient {
    api: ApiClient,
}

impl VerificationClient {
    pub fn new(ctx: &SinchContext, project: &ResolvedProject) -> Self {
        Self {
            api: ApiClient::new(
                ctx.transport(),
                ctx.endpoints().verification_base_url(),
                &project.config.api_token,
            ),
        }
    }

    fn by_id_path(verification_id: &str) -> String {
        format!("{}/id/{}", VERIFICATIONS_PATH, segment(verification_id))
    }

    /// Start a verification for a phone number.
    pub async fn start(&self, params: &StartVerification) -> SinchResult<Value> {
        info!(
            "Starting {} verification for {}",
            params.method.as_str(),
            params.phone_number
        );
        let request = self
            .api
            .request(Method::POST, VERIFICATIONS_PATH)
            .with_body(params.to_body());
        self.api.send(request).await
    }

    /// Report the code the user received.
    pub async fn report_code(&self, verification_id: &str, code: &str) -> SinchResult<Value> {
        let request = self
            .api
            .request(Method::PUT, Self::by_id_path(verification_id))
            .with_body(json!({"method": "sms", "sms": {"code": code}}));
        self.api.send(request).await
    }

    pub async fn get_status(&self, verification_id: &str) -> SinchResult<Value> {
        let request = self
            .api
            .request(Method::GET, Self::by_id_path(verification_id));
        self.api.send(request).await
    }
}
