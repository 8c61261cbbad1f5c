//! Sub-projects API client (`/v1alpha1/projects/{parent}/subprojects`).

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::{ApiClient, segment};
use crate::sinch::context::SinchContext;
use crate::sinch::error::SinchResult;
use crate::sinch::resolver::ResolvedProject;

/// Body of a sub-project creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubproject {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub struct SubprojectsClient {
    api: ApiClient,
}

impl SubprojectsClient {
    pub fn new(ctx: &SinchContext, project: &ResolvedProject) -> Self {
        Self {
            api: ApiClient::new(
                ctx.transport(),
                ctx.endpoints().subprojects_base_url(),
                &project.config.api_token,
            ),
        }
    }

    fn collection_path(parent_project_id: &str) -> String {
        format!(
            "/v1alpha1/projects/{}/subprojects",
            segment(parent_project_id)
        )
    }

    fn item_path(parent_project_id: &str, subproject_id: &str) -> String {
        format!(
            "{}/{}",
            Self::collection_path(parent_project_id),
            segment(subproject_id)
        )
    }

    pub async fn create(
        &self,
        parent_project_id: &str,
        subproject: &NewSubproject,
    ) -> SinchResult<Value> {
        info!(
            "Creating sub-project '{}' under {}",
            subproject.display_name, parent_project_id
        );
        let body = serde_json::to_value(subproject)?;
        let request = self
            .api
            .request(Method::POST, Self::collection_path(parent_project_id))
            .with_body(body);
        self.api.send(request).await
    }

    pub async fn list(&self, parent_project_id: &str) -> SinchResult<Value> {
        let request = self
            .api
            .request(Method::GET, Self::collection_path(parent_project_id));
        self.api.send(request).await
    }

    pub async fn get(&self, parent_project_id: &str, subproject_id: &str) -> SinchResult<Value> {
        let request = self
            .api
            .request(Method::GET, Self::item_path(parent_project_id, subproject_id));
        self.api.send(request).await
    }

    pub async fn delete(
        &self,
        parent_project_id: &str,
        subproject_id: &str,
    ) -> SinchResult<Value> {
        info!(
            "Deleting sub-project {} under {}",
            subproject_id, parent_project_id
        );
        let request = self.api.request(
            Method::DELETE,
            Self::item_path(parent_project_id, subproject_id),
        );
        self.api.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinch::projects::{ENV_API_TOKEN, ENV_SERVICE_PLAN_ID};
    use crate::sinch::testing::{RecordingTransport, context_with};
    use serde_json::json;

    const LEGACY: &[(&str, &str)] = &[(ENV_SERVICE_PLAN_ID, "sp"), (ENV_API_TOKEN, "tok")];

    #[tokio::test]
    async fn test_create_body_and_path() {
        let transport = RecordingTransport::returning(json!({"subprojectId": "s1"}));
        let ctx = context_with(LEGACY, transport.clone());

        ctx.subprojects(None)
            .unwrap()
            .create(
                "parent-1",
                &NewSubproject {
                    display_name: "Team A".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.base_url, "https://subproject.api.sinch.com");
        assert_eq!(request.path, "/v1alpha1/projects/parent-1/subprojects");
        assert_eq!(request.body, Some(json!({"displayName": "Team A"})));
    }

    #[tokio::test]
    async fn test_item_operations() {
        let transport = RecordingTransport::returning(Value::Null);
        let ctx = context_with(LEGACY, transport.clone());
        let client = ctx.subprojects(None).unwrap();

        client.get("parent-1", "s1").await.unwrap();
        client.delete("parent-1", "s1").await.unwrap();
        client.list("parent-1").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path, "/v1alpha1/projects/parent-1/subprojects/s1");
        assert_eq!(requests[1].method, Method::DELETE);
        assert_eq!(requests[1].path, requests[0].path);
        assert_eq!(requests[2].path, "/v1alpha1/projects/parent-1/subprojects");
    }
}
