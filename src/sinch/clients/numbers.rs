//! Numbers API client (`/v1/projects/{projectId}/...`).

use reqwest::Method;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use super::{ApiClient, segment};
use crate::sinch::context::SinchContext;
use crate::sinch::error::SinchResult;
use crate::sinch::resolver::ResolvedProject;

/// Number type filter for available-number searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberType {
    Mobile,
    #[default]
    Local,
    TollFree,
}

impl NumberType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "MOBILE",
            Self::Local => "LOCAL",
            Self::TollFree => "TOLL_FREE",
        }
    }
}

/// Number capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    Sms,
    Voice,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::Voice => "VOICE",
        }
    }
}

/// Query of `GET /availableNumbers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSearch {
    pub region_code: String,
    pub number_type: NumberType,
    pub capabilities: Vec<Capability>,
}

/// Client for the Numbers API of one project.
pub struct NumbersClient {
    api: ApiClient,
    project_id: String,
}

impl NumbersClient {
    /// Build a client; the project must carry a project ID.
    pub fn new(ctx: &SinchContext, project: &ResolvedProject) -> SinchResult<Self> {
        let project_id = project.require_project_id()?.to_string();
        Ok(Self {
            api: ApiClient::new(
                ctx.transport(),
                ctx.endpoints().numbers_base_url(),
                &project.config.api_token,
            ),
            project_id,
        })
    }

    fn project_path(&self, rest: &str) -> String {
        format!("/v1/projects/{}/{}", segment(&self.project_id), rest)
    }

    fn active_number_path(&self, phone_number: &str) -> String {
        self.project_path(&format!("activeNumbers/{}", segment(phone_number)))
    }

    /// Search numbers available for activation.
    pub async fn search_available(&self, search: &NumberSearch) -> SinchResult<Value> {
        let mut request = self
            .api
            .request(Method::GET, self.project_path("availableNumbers"))
            .with_query("regionCode", &search.region_code)
            .with_query("type", search.number_type.as_str());
        for capability in &search.capabilities {
            request = request.with_query("capability", capability.as_str());
        }
        self.api.send(request).await
    }

    /// Activate (rent) a number, optionally configuring SMS and voice.
    pub async fn activate(
        &self,
        phone_number: &str,
        sms_configuration: Option<Value>,
        voice_configuration: Option<Value>,
    ) -> SinchResult<Value> {
        info!("Activating number {}", phone_number);
        let mut body = Map::new();
        body.insert("phoneNumber".to_string(), Value::from(phone_number));
        if let Some(sms) = sms_configuration {
            body.insert("smsConfiguration".to_string(), sms);
        }
        if let Some(voice) = voice_configuration {
            body.insert("voiceConfiguration".to_string(), voice);
        }
        let request = self
            .api
            .request(Method::POST, self.project_path("activeNumbers"))
            .with_body(Value::Object(body));
        self.api.send(request).await
    }

    /// List the project's active numbers.
    pub async fn list_active(&self) -> SinchResult<Value> {
        let request = self.api.request(Method::GET, self.project_path("activeNumbers"));
        self.api.send(request).await
    }

    /// Fetch one active number.
    pub async fn get_active(&self, phone_number: &str) -> SinchResult<Value> {
        let request = self
            .api
            .request(Method::GET, self.active_number_path(phone_number));
        self.api.send(request).await
    }

    /// Release an active number back to the pool.
    pub async fn release(&self, phone_number: &str) -> SinchResult<Value> {
        info!("Releasing number {}", phone_number);
        let request = self
            .api
            .request(Method::DELETE, self.active_number_path(phone_number));
        self.api.send(request).await
    }
}
