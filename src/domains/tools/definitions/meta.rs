//! Configuration summary tool.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::common::{NoParams, SinchTool};
use crate::domains::tools::error::ToolResult;
use crate::sinch::SinchContext;
use crate::sinch::projects::SinchConfig;

/// Lists configured projects without exposing any credential.
#[derive(Debug, Clone)]
pub struct ListProjectsTool;

#[async_trait]
impl SinchTool for ListProjectsTool {
    const NAME: &'static str = "sinch_list_projects";
    const DESCRIPTION: &'static str = "List the Sinch projects this server is configured with: named projects, the default project, legacy single-project credentials and parent projects. Tokens and secrets are never included.";

    type Params = NoParams;

    async fn execute(ctx: &SinchContext, _params: NoParams) -> ToolResult<Value> {
        Ok(project_summary(ctx.config()))
    }
}

fn project_summary(config: &SinchConfig) -> Value {
    let projects: Vec<Value> = config
        .projects
        .projects()
        .map(|projects| {
            projects
                .iter()
                .map(|(name, project)| {
                    json!({
                        "name": name,
                        "displayName": project.display_name,
                        "servicePlanId": project.service_plan_id,
                        "projectId": project.project_id,
                        "region": project.region,
                        "isDefault": config.default_project.as_deref() == Some(name.as_str()),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    json!({
        "multiProjectConfig": config.projects.status(),
        "defaultProject": config.default_project,
        "projects": projects,
        "skippedProjects": config.projects.skipped(),
        "legacy": {
            "configured": config.legacy.is_usable(),
            "servicePlanId": config.legacy.service_plan_id,
            "projectId": config.legacy.project_id,
            "region": config.legacy.region,
        },
        "parentProjects": config.parent_project_ids(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinch::projects::{
        ENV_API_TOKEN, ENV_DEFAULT_PROJECT, ENV_PROJECTS, ENV_SERVICE_PLAN_ID,
    };
    use crate::sinch::testing::config_from;

    #[test]
    fn test_summary_never_contains_secrets() {
        let config = config_from(&[
            (
                ENV_PROJECTS,
                r#"{"staging": {"servicePlanId": "sp1", "apiToken": "tok-secret", "clientSecret": "cs-secret"}}"#,
            ),
            (ENV_DEFAULT_PROJECT, "staging"),
            (ENV_SERVICE_PLAN_ID, "sp0"),
            (ENV_API_TOKEN, "legacy-secret"),
        ]);

        let summary = project_summary(&config);
        let rendered = summary.to_string();
        assert!(!rendered.contains("secret"));
        assert_eq!(summary["multiProjectConfig"], "loaded");
        assert_eq!(summary["projects"][0]["name"], "staging");
        assert_eq!(summary["projects"][0]["isDefault"], true);
        assert_eq!(summary["legacy"]["configured"], true);
    }

    #[test]
    fn test_summary_reports_invalid_block() {
        let config = config_from(&[(ENV_PROJECTS, "{not json")]);
        let summary = project_summary(&config);
        assert_eq!(summary["multiProjectConfig"], "invalid");
        assert_eq!(summary["projects"], json!([]));
    }
}
