//! Project configuration store.
//!
//! Sinch credentials come from the process environment and are read once at
//! startup. Two shapes are supported and may coexist:
//!
//! - **Legacy**: a single unnamed project from flat variables
//!   (`SINCH_SERVICE_PLAN_ID`, `SINCH_API_TOKEN`, `SINCH_PROJECT_ID`, `SINCH_REGION`).
//! - **Named**: a JSON object in `SINCH_PROJECTS` mapping project names to
//!   [`ProjectConfig`] entries, optionally with `SINCH_DEFAULT_PROJECT`.
//!
//! `SINCH_PARENT_PROJECTS` lists the parent projects used by the aggregate
//! sub-project tools.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

use super::error::{SinchError, SinchResult};

pub const ENV_SERVICE_PLAN_ID: &str = "SINCH_SERVICE_PLAN_ID";
pub const ENV_API_TOKEN: &str = "SINCH_API_TOKEN";
pub const ENV_PROJECT_ID: &str = "SINCH_PROJECT_ID";
pub const ENV_REGION: &str = "SINCH_REGION";
pub const ENV_CLIENT_ID: &str = "SINCH_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SINCH_CLIENT_SECRET";
pub const ENV_PROJECTS: &str = "SINCH_PROJECTS";
pub const ENV_DEFAULT_PROJECT: &str = "SINCH_DEFAULT_PROJECT";
pub const ENV_PARENT_PROJECTS: &str = "SINCH_PARENT_PROJECTS";

/// Name under which the legacy single-project configuration resolves.
pub const LEGACY_PROJECT_NAME: &str = "default";

// ============================================================================
// Region
// ============================================================================

/// SMS API region. Selects the regional SMS host.
///
/// Parsed case-insensitively, both from `SINCH_REGION` and from JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Us,
    Eu,
    Au,
    Br,
    Ca,
}

impl Region {
    pub const ALL: [Region; 5] = [Region::Us, Region::Eu, Region::Au, Region::Br, Region::Ca];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Au => "au",
            Self::Br => "br",
            Self::Ca => "ca",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == wanted)
            .ok_or_else(|| format!("Unknown region '{}' (expected one of us, eu, au, br, ca)", s))
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Project configuration
// ============================================================================

/// Credentials and routing for one named Sinch project.
///
/// Only the token is mandatory. The service plan ID is needed for SMS and
/// the project ID for Numbers; each is checked when that client is built.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_plan_id: Option<String>,
    pub api_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub region: Region,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    // Accepted for forward compatibility; no operation uses OAuth credentials yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl fmt::Debug for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectConfig")
            .field("service_plan_id", &self.service_plan_id)
            .field("api_token", &"[REDACTED]")
            .field("project_id", &self.project_id)
            .field("region", &self.region)
            .field("display_name", &self.display_name)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// The flat, unnamed single-project configuration.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LegacyConfig {
    pub service_plan_id: Option<String>,
    pub api_token: Option<String>,
    pub project_id: Option<String>,
    pub region: Region,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl LegacyConfig {
    /// Whether the legacy credentials are complete enough to build a client.
    pub fn is_usable(&self) -> bool {
        self.service_plan_id.is_some() && self.api_token.is_some()
    }

    /// Synthesize a project configuration from the flat fields.
    pub fn to_project(&self) -> Option<ProjectConfig> {
        Some(ProjectConfig {
            service_plan_id: Some(self.service_plan_id.clone()?),
            api_token: self.api_token.clone()?,
            project_id: self.project_id.clone(),
            region: self.region,
            display_name: None,
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        })
    }
}

impl fmt::Debug for LegacyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyConfig")
            .field("service_plan_id", &self.service_plan_id)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("project_id", &self.project_id)
            .field("region", &self.region)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Outcome of reading the multi-project JSON block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MultiProjectSource {
    /// `SINCH_PROJECTS` was not set.
    #[default]
    NotSupplied,
    /// `SINCH_PROJECTS` was a JSON object. Entries that failed to parse are
    /// listed in `skipped` and left out of `projects`.
    Loaded {
        projects: BTreeMap<String, ProjectConfig>,
        skipped: Vec<String>,
    },
    /// `SINCH_PROJECTS` was set but is not a JSON object; treated as empty.
    Invalid { error: String },
}

impl MultiProjectSource {
    /// Parse the raw JSON value of `SINCH_PROJECTS`.
    ///
    /// Each entry is parsed on its own; a malformed entry is logged and
    /// skipped without affecting its siblings.
    pub fn parse(raw: &str) -> Self {
        let entries = match serde_json::from_str::<BTreeMap<String, Value>>(raw) {
            Ok(entries) => entries,
            Err(e) => {
                return Self::Invalid {
                    error: e.to_string(),
                };
            }
        };

        let mut projects = BTreeMap::new();
        let mut skipped = Vec::new();
        for (name, value) in entries {
            match serde_json::from_value::<ProjectConfig>(value) {
                Ok(config) => {
                    projects.insert(name, config);
                }
                Err(e) => {
                    warn!("Skipping Sinch project '{}' in {}: {}", name, ENV_PROJECTS, e);
                    skipped.push(name);
                }
            }
        }

        Self::Loaded { projects, skipped }
    }

    /// Named projects, empty unless the block loaded.
    pub fn projects(&self) -> Option<&BTreeMap<String, ProjectConfig>> {
        match self {
            Self::Loaded { projects, .. } => Some(projects),
            Self::NotSupplied | Self::Invalid { .. } => None,
        }
    }

    /// Names of entries that were present but malformed.
    pub fn skipped(&self) -> &[String] {
        match self {
            Self::Loaded { skipped, .. } => skipped,
            Self::NotSupplied | Self::Invalid { .. } => &[],
        }
    }

    /// Short status label used in the project summary.
    pub fn status(&self) -> &'static str {
        match self {
            Self::NotSupplied => "not_supplied",
            Self::Loaded { .. } => "loaded",
            Self::Invalid { .. } => "invalid",
        }
    }
}

// ============================================================================
// Sinch configuration
// ============================================================================

/// Process-wide Sinch configuration. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinchConfig {
    pub projects: MultiProjectSource,
    pub default_project: Option<String>,
    pub legacy: LegacyConfig,
    pub parent_projects: Vec<String>,
}

impl SinchConfig {
    /// Load the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let region = match get(ENV_REGION) {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                warn!("{}; falling back to '{}'", e, Region::default());
                Region::default()
            }),
            None => Region::default(),
        };

        let legacy = LegacyConfig {
            service_plan_id: get(ENV_SERVICE_PLAN_ID),
            api_token: get(ENV_API_TOKEN),
            project_id: get(ENV_PROJECT_ID),
            region,
            client_id: get(ENV_CLIENT_ID),
            client_secret: get(ENV_CLIENT_SECRET),
        };

        let projects = match get(ENV_PROJECTS) {
            Some(raw) => {
                let source = MultiProjectSource::parse(&raw);
                match &source {
                    MultiProjectSource::Loaded { projects, .. } => {
                        info!("Loaded {} named Sinch project(s)", projects.len());
                    }
                    MultiProjectSource::Invalid { error } => {
                        warn!(
                            "Failed to parse {}: {}. Continuing without named projects",
                            ENV_PROJECTS, error
                        );
                    }
                    MultiProjectSource::NotSupplied => {}
                }
                source
            }
            None => MultiProjectSource::NotSupplied,
        };

        let parent_projects = get(ENV_PARENT_PROJECTS)
            .map(|raw| parse_parent_projects(&raw))
            .unwrap_or_default();

        Self {
            projects,
            default_project: get(ENV_DEFAULT_PROJECT),
            legacy,
            parent_projects,
        }
    }

    /// Look up a named project.
    pub fn named(&self, name: &str) -> Option<&ProjectConfig> {
        self.projects.projects().and_then(|p| p.get(name))
    }

    /// Names of all configured named projects, sorted.
    pub fn project_names(&self) -> Vec<&str> {
        self.projects
            .projects()
            .map(|p| p.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether at least one client can be constructed from this configuration.
    pub fn is_usable(&self) -> bool {
        self.legacy.is_usable() || self.projects.projects().is_some_and(|p| !p.is_empty())
    }

    /// Fail with a configuration error when no client could ever be built.
    pub fn ensure_usable(&self) -> SinchResult<()> {
        if self.is_usable() {
            Ok(())
        } else {
            Err(SinchError::NoValidConfiguration)
        }
    }
}

/// Split a comma-separated parent project list, trimming whitespace.
fn parse_parent_projects(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinch::testing::config_from;

    #[test]
    fn test_empty_environment_is_unusable() {
        let config = config_from(&[]);
        assert_eq!(config.projects, MultiProjectSource::NotSupplied);
        assert!(!config.is_usable());
        assert!(matches!(
            config.ensure_usable(),
            Err(SinchError::NoValidConfiguration)
        ));
    }

    #[test]
    fn test_legacy_fields() {
        let config = config_from(&[
            (ENV_SERVICE_PLAN_ID, "sp"),
            (ENV_API_TOKEN, "tok"),
            (ENV_PROJECT_ID, "proj"),
            (ENV_REGION, "EU"),
        ]);
        assert!(config.is_usable());
        assert_eq!(config.legacy.region, Region::Eu);
        assert_eq!(config.legacy.project_id.as_deref(), Some("proj"));
    }

    #[test]
    fn test_legacy_requires_token() {
        let config = config_from(&[(ENV_SERVICE_PLAN_ID, "sp")]);
        assert!(!config.legacy.is_usable());
        assert!(config.legacy.to_project().is_none());
    }

    #[test]
    fn test_unknown_region_defaults_to_us() {
        let config = config_from(&[(ENV_REGION, "mars")]);
        assert_eq!(config.legacy.region, Region::Us);
    }

    #[test]
    fn test_named_projects_parse() {
        let config = config_from(&[(
            ENV_PROJECTS,
            r#"{"staging": {"servicePlanId": "sp1", "apiToken": "tok1", "region": "eu"},
                "prod": {"servicePlanId": "sp2", "apiToken": "tok2", "projectId": "p2", "displayName": "Production"}}"#,
        )]);
        assert_eq!(config.projects.status(), "loaded");
        assert_eq!(config.project_names(), vec!["prod", "staging"]);

        let staging = config.named("staging").unwrap();
        assert_eq!(staging.region, Region::Eu);
        assert!(staging.project_id.is_none());

        let prod = config.named("prod").unwrap();
        assert_eq!(prod.region, Region::Us);
        assert_eq!(prod.display_name.as_deref(), Some("Production"));
        assert!(config.is_usable());
    }

    #[test]
    fn test_invalid_json_degrades_to_legacy() {
        let config = config_from(&[
            (ENV_PROJECTS, "{not json"),
            (ENV_SERVICE_PLAN_ID, "sp"),
            (ENV_API_TOKEN, "tok"),
        ]);
        assert!(matches!(config.projects, MultiProjectSource::Invalid { .. }));
        assert!(config.project_names().is_empty());
        assert!(config.is_usable());
    }

    #[test]
    fn test_bad_entry_does_not_discard_siblings() {
        let config = config_from(&[(
            ENV_PROJECTS,
            r#"{"sms": {"servicePlanId": "sp1", "apiToken": "tok1"},
                "numbers": {"apiToken": "tok2", "projectId": "p2"},
                "broken": {"servicePlanId": "sp3"}}"#,
        )]);
        assert_eq!(config.projects.status(), "loaded");
        assert_eq!(config.project_names(), vec!["numbers", "sms"]);
        assert_eq!(config.projects.skipped(), ["broken".to_string()]);

        let numbers = config.named("numbers").unwrap();
        assert!(numbers.service_plan_id.is_none());
        assert_eq!(numbers.project_id.as_deref(), Some("p2"));
    }

    #[test]
    fn test_named_region_is_case_insensitive() {
        let config = config_from(&[(
            ENV_PROJECTS,
            r#"{"eu": {"apiToken": "t", "region": "EU"}, "ca": {"apiToken": "t", "region": " Ca "}}"#,
        )]);
        assert_eq!(config.named("eu").unwrap().region, Region::Eu);
        assert_eq!(config.named("ca").unwrap().region, Region::Ca);
        assert_eq!(serde_json::to_value(Region::Eu).unwrap(), "eu");
    }

    #[test]
    fn test_non_object_block_is_invalid() {
        let config = config_from(&[(ENV_PROJECTS, "[1, 2]")]);
        assert!(matches!(config.projects, MultiProjectSource::Invalid { .. }));
        assert!(config.projects.skipped().is_empty());
    }

    #[test]
    fn test_empty_named_mapping_is_unusable() {
        let config = config_from(&[(ENV_PROJECTS, "{}")]);
        assert_eq!(config.projects.status(), "loaded");
        assert!(!config.is_usable());
    }

    #[test]
    fn test_parent_projects_trimmed() {
        let config = config_from(&[(ENV_PARENT_PROJECTS, "a, b ,,b ")]);
        assert_eq!(config.parent_projects, vec!["a", "b", "b"]);
    }

    #[test]
    fn test_project_debug_redacts_secrets() {
        let project = ProjectConfig {
            service_plan_id: Some("sp".to_string()),
            api_token: "super_secret_token".to_string(),
            project_id: None,
            region: Region::Us,
            display_name: None,
            client_id: Some("client".to_string()),
            client_secret: Some("super_secret_client".to_string()),
        };
        let debug_str = format!("{:?}", project);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
        assert!(!debug_str.contains("super_secret_client"));

        let legacy = config_from(&[(ENV_API_TOKEN, "legacy_secret")]).legacy;
        assert!(!format!("{:?}", legacy).contains("legacy_secret"));
    }
}
