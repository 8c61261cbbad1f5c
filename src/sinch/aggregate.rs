//! Fan-out helpers over every configured parent project.

use futures::future::join_all;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use super::context::SinchContext;
use super::error::SinchResult;
use super::projects::SinchConfig;

impl SinchConfig {
    /// Parent project IDs: configured parents, then the legacy project ID.
    ///
    /// Derived fresh on each call and de-duplicated in first-occurrence order.
    pub fn parent_project_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        let candidates = self
            .parent_projects
            .iter()
            .chain(self.legacy.project_id.iter());
        for id in candidates {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        ids
    }
}

/// List sub-projects under every parent project.
///
/// A failing parent is reported inline with an empty list; other parents
/// are unaffected.
#[instrument(skip(ctx))]
pub async fn list_all_subprojects(ctx: &SinchContext) -> SinchResult<Value> {
    let client = ctx.subprojects(None)?;
    let parents = ctx.config().parent_project_ids();
    info!("Listing sub-projects across {} parent project(s)", parents.len());

    let results = join_all(parents.iter().map(|parent| {
        let client = &client;
        async move {
            match client.list(parent).await {
                Ok(body) => {
                    let subprojects = body.get("subprojects").cloned().unwrap_or(body);
                    json!({"parentProjectId": parent, "subprojects": subprojects})
                }
                Err(e) => {
                    warn!("Listing sub-projects of {} failed: {}", parent, e);
                    json!({
                        "parentProjectId": parent,
                        "error": e.to_string(),
                        "subprojects": []
                    })
                }
            }
        }
    }))
    .await;

    Ok(summary(parents.len(), results))
}

/// Check that every parent project is reachable with the default credentials.
#[instrument(skip(ctx))]
pub async fn test_parent_access(ctx: &SinchContext) -> SinchResult<Value> {
    let client = ctx.subprojects(None)?;
    let parents = ctx.config().parent_project_ids();

    let results = join_all(parents.iter().map(|parent| {
        let client = &client;
        async move {
            match client.list(parent).await {
                Ok(_) => json!({
                    "parentProjectId": parent,
                    "status": "accessible",
                    "message": "Successfully accessed parent project"
                }),
                Err(e) => json!({
                    "parentProjectId": parent,
                    "status": "error",
                    "message": e.to_string()
                }),
            }
        }
    }))
    .await;

    Ok(summary(parents.len(), results))
}

fn summary(total: usize, results: Vec<Value>) -> Value {
    json!({"totalParentProjects": total, "results": results})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinch::error::SinchError;
    use crate::sinch::projects::{
        ENV_API_TOKEN, ENV_PARENT_PROJECTS, ENV_PROJECT_ID, ENV_SERVICE_PLAN_ID,
    };
    use crate::sinch::testing::{RecordingTransport, config_from, context_with};

    const PARENTS: &[(&str, &str)] = &[
        (ENV_SERVICE_PLAN_ID, "sp"),
        (ENV_API_TOKEN, "tok"),
        (ENV_PARENT_PROJECTS, "a, b ,b"),
        (ENV_PROJECT_ID, "c"),
    ];

    #[test]
    fn test_parent_ids_deduplicated_and_stable() {
        let config = config_from(PARENTS);
        assert_eq!(config.parent_project_ids(), vec!["a", "b", "c"]);
        assert_eq!(config.parent_project_ids(), vec!["a", "b", "c"]);
        assert_eq!(config.parent_projects, vec!["a", "b", "b"]);
    }

    #[test]
    fn test_legacy_project_already_listed() {
        let config = config_from(&[(ENV_PARENT_PROJECTS, "c,a"), (ENV_PROJECT_ID, "c")]);
        assert_eq!(config.parent_project_ids(), vec!["c", "a"]);
    }

    #[tokio::test]
    async fn test_list_all_twice_queries_each_parent_once_per_call() {
        let transport = RecordingTransport::returning(json!({"subprojects": [{"id": "s1"}]}));
        let ctx = context_with(PARENTS, transport.clone());

        list_all_subprojects(&ctx).await.unwrap();
        let body = list_all_subprojects(&ctx).await.unwrap();

        assert_eq!(body["totalParentProjects"], 3);
        assert_eq!(body["results"][2]["parentProjectId"], "c");
        assert_eq!(body["results"][0]["subprojects"], json!([{"id": "s1"}]));

        let paths: Vec<_> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths.len(), 6);
        for parent in ["a", "b", "c"] {
            let path = format!("/v1alpha1/projects/{}/subprojects", parent);
            assert_eq!(paths.iter().filter(|p| **p == path).count(), 2);
        }
    }

    #[tokio::test]
    async fn test_partial_failure_reported_inline() {
        let transport = RecordingTransport::with(|request| {
            if request.path.contains("/b/") {
                Err(SinchError::Api {
                    status: 403,
                    body: "forbidden".to_string(),
                })
            } else {
                Ok(json!({"items": []}))
            }
        });
        let ctx = context_with(PARENTS, transport);

        let body = list_all_subprojects(&ctx).await.unwrap();
        let results = body["results"].as_array().unwrap();
        assert_eq!(results[0]["subprojects"], json!({"items": []}));
        assert_eq!(results[1]["parentProjectId"], "b");
        assert_eq!(results[1]["subprojects"], json!([]));
        assert!(results[1]["error"].as_str().unwrap().contains("403"));

        let access = test_parent_access(&ctx).await.unwrap();
        let statuses: Vec<_> = access["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["status"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(statuses, vec!["accessible", "error", "accessible"]);
    }

    #[tokio::test]
    async fn test_unconfigured_fails_without_requests() {
        let transport = RecordingTransport::returning(json!({}));
        let ctx = context_with(&[(ENV_PARENT_PROJECTS, "a")], transport.clone());

        let err = list_all_subprojects(&ctx).await.unwrap_err();
        assert!(matches!(err, SinchError::NoValidConfiguration));
        assert_eq!(transport.call_count(), 0);
    }
}
