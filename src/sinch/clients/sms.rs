//! SMS API client (`/xms/v1/{servicePlanId}/...`).

use reqwest::Method;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::{ApiClient, segment};
use crate::sinch::context::SinchContext;
use crate::sinch::error::SinchResult;
use crate::sinch::resolver::ResolvedProject;

/// Delivery report mode for an outbound batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryReportMode {
    #[default]
    None,
    Summary,
    Full,
    PerRecipient,
}

/// Body of `POST /batches`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendBatch {
    pub to: Vec<String>,
    pub from: String,
    pub body: String,
    pub delivery_report: DeliveryReportMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<String>,
    pub flash_message: bool,
}

/// Optional date window for listing batches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchListFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Client for one service plan of the SMS API.
pub struct SmsClient {
    api: ApiClient,
    service_plan_id: String,
}

impl SmsClient {
    /// Build a client; the project must carry a service plan ID.
    pub fn new(ctx: &SinchContext, project: &ResolvedProject) -> SinchResult<Self> {
        let service_plan_id = project.require_service_plan_id()?.to_string();
        Ok(Self {
            api: ApiClient::new(
                ctx.transport(),
                ctx.endpoints().sms_base_url(project.config.region),
                &project.config.api_token,
            ),
            service_plan_id,
        })
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    fn batches_path(&self) -> String {
        format!("/xms/v1/{}/batches", segment(&self.service_plan_id))
    }

    fn batch_path(&self, batch_id: &str) -> String {
        format!("{}/{}", self.batches_path(), segment(batch_id))
    }

    /// Send a batch of messages.
    pub async fn send_batch(&self, batch: &SendBatch) -> SinchResult<Value> {
        info!("Sending SMS to {} recipient(s)", batch.to.len());
        let body = serde_json::to_value(batch)?;
        let request = self
            .api
            .request(Method::POST, self.batches_path())
            .with_body(body);
        self.api.send(request).await
    }

    /// Fetch one batch.
    pub async fn get_batch(&self, batch_id: &str) -> SinchResult<Value> {
        let request = self.api.request(Method::GET, self.batch_path(batch_id));
        self.api.send(request).await
    }

    /// Fetch the summary or full delivery report of a batch.
    pub async fn get_delivery_report(&self, batch_id: &str, full: bool) -> SinchResult<Value> {
        let kind = if full { "full" } else { "summary" };
        let path = format!("{}/delivery_report/{}", self.batch_path(batch_id), kind);
        self.api.send(self.api.request(Method::GET, path)).await
    }

    /// List batches, optionally within a date window.
    pub async fn list_batches(&self, filter: &BatchListFilter) -> SinchResult<Value> {
        let mut request = self.api.request(Method::GET, self.batches_path());
        if let Some(start) = &filter.start_date {
            request = request.with_query("start_date", start);
        }
        if let Some(end) = &filter.end_date {
            request = request.with_query("end_date", end);
        }
        self.api.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinch::error::SinchError;
    use crate::sinch::projects::{ENV_DEFAULT_PROJECT, ENV_PROJECTS};
    use crate::sinch::testing::{RecordingTransport, context_with};
    use serde_json::json;

    const STAGING: &[(&str, &str)] = &[
        (
            ENV_PROJECTS,
            r#"{"staging": {"servicePlanId": "sp1", "apiToken": "tok1", "region": "eu"}}"#,
        ),
        (ENV_DEFAULT_PROJECT, "staging"),
    ];

    #[tokio::test]
    async fn test_send_uses_default_project_region_and_token() {
        let transport = RecordingTransport::returning(json!({"id": "b1"}));
        let ctx = context_with(STAGING, transport.clone());

        let client = ctx.sms(None).unwrap();
        assert_eq!(client.base_url(), "https://eu.sms.api.sinch.com");

        let batch = SendBatch {
            to: vec!["+46700000000".to_string()],
            from: "Sinch".to_string(),
            body: "hello".to_string(),
            delivery_report: DeliveryReportMode::default(),
            expire_at: None,
            flash_message: false,
        };
        let body = client.send_batch(&batch).await.unwrap();
        assert_eq!(body, json!({"id": "b1"}));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.base_url, "https://eu.sms.api.sinch.com");
        assert_eq!(request.path, "/xms/v1/sp1/batches");
        assert_eq!(request.bearer_token, "tok1");
        assert_eq!(
            request.body,
            Some(json!({
                "to": ["+46700000000"],
                "from": "Sinch",
                "body": "hello",
                "delivery_report": "none",
                "flash_message": false
            }))
        );
    }

    #[tokio::test]
    async fn test_delivery_report_paths() {
        let transport = RecordingTransport::returning(json!({}));
        let ctx = context_with(STAGING, transport.clone());
        let client = ctx.sms(Some("staging")).unwrap();

        client.get_delivery_report("b1", false).await.unwrap();
        client.get_delivery_report("b1", true).await.unwrap();

        let paths: Vec<_> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/xms/v1/sp1/batches/b1/delivery_report/summary",
                "/xms/v1/sp1/batches/b1/delivery_report/full"
            ]
        );
    }

    #[tokio::test]
    async fn test_list_batches_only_sends_given_dates() {
        let transport = RecordingTransport::returning(json!({"batches": []}));
        let ctx = context_with(STAGING, transport.clone());
        let client = ctx.sms(None).unwrap();

        client.list_batches(&BatchListFilter::default()).await.unwrap();
        client
            .list_batches(&BatchListFilter {
                start_date: Some("2024-01-01".to_string()),
                end_date: None,
            })
            .await
            .unwrap();

        let requests = transport.requests();
        assert!(requests[0].query.is_empty());
        assert_eq!(
            requests[1].query,
            vec![("start_date".to_string(), "2024-01-01".to_string())]
        );
    }

    #[test]
    fn test_missing_service_plan_id_fails_before_network() {
        let transport = RecordingTransport::returning(json!({}));
        let ctx = context_with(
            &[(
                ENV_PROJECTS,
                r#"{"sms": {"servicePlanId": "sp1", "apiToken": "tok1"},
                    "numbers": {"apiToken": "tok2", "projectId": "p2", "region": "EU"}}"#,
            )],
            transport.clone(),
        );

        let err = ctx.sms(Some("numbers")).err().unwrap();
        assert!(matches!(&err, SinchError::ServicePlanIdRequired { project } if project == "numbers"));
        assert_eq!(transport.call_count(), 0);

        assert!(ctx.sms(Some("sms")).is_ok());
        assert!(ctx.numbers(Some("numbers")).is_ok());
    }

    #[test]
    fn test_delivery_report_mode_serialization() {
        assert_eq!(
            serde_json::to_value(DeliveryReportMode::PerRecipient).unwrap(),
            json!("per_recipient")
        );
        let mode: DeliveryReportMode = serde_json::from_value(json!("full")).unwrap();
        assert_eq!(mode, DeliveryReportMode::Full);
    }
}
