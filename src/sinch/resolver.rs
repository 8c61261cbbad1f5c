//! Project resolver.
//!
//! Picks the credentials for a single call. Precedence, first match wins:
//!
//! 1. An explicit project name must exist in the named mapping. A missing
//!    name is a "not found" error, even when nothing is configured, and
//!    never falls back.
//! 2. The configured default project, when it exists in the mapping.
//! 3. The legacy flat configuration, resolved as `"default"`.
//! 4. Otherwise no valid configuration exists.

use tracing::{debug, warn};

use super::error::{SinchError, SinchResult};
use super::projects::{LEGACY_PROJECT_NAME, ProjectConfig, SinchConfig};

/// The project configuration selected for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    /// Name the project resolved under (`"default"` for legacy).
    pub name: String,
    pub config: ProjectConfig,
}

impl ResolvedProject {
    /// The project ID, or the Numbers precondition error naming this project.
    pub fn require_project_id(&self) -> SinchResult<&str> {
        self.config
            .project_id
            .as_deref()
            .ok_or_else(|| SinchError::project_id_required(&self.name))
    }

    /// The service plan ID, or the SMS precondition error naming this project.
    pub fn require_service_plan_id(&self) -> SinchResult<&str> {
        self.config
            .service_plan_id
            .as_deref()
            .ok_or_else(|| SinchError::service_plan_id_required(&self.name))
    }
}

impl SinchConfig {
    /// Resolve the project to use for one call.
    pub fn resolve(&self, project: Option<&str>) -> SinchResult<ResolvedProject> {
        if let Some(name) = project {
            return self
                .named(name)
                .map(|config| resolved(name, config.clone()))
                .ok_or_else(|| SinchError::project_not_found(name));
        }

        self.ensure_usable()?;

        if let Some(default) = &self.default_project {
            match self.named(default) {
                Some(config) => return Ok(resolved(default, config.clone())),
                None => warn!(
                    "Default project '{}' is not configured; falling back to legacy credentials",
                    default
                ),
            }
        }

        self.legacy
            .to_project()
            .map(|config| resolved(LEGACY_PROJECT_NAME, config))
            .ok_or(SinchError::NoValidConfiguration)
    }
}

fn resolved(name: &str, config: ProjectConfig) -> ResolvedProject {
    debug!(project = name, region = %config.region, "Resolved Sinch project");
    ResolvedProject {
        name: name.to_string(),
        config,
    }
}
