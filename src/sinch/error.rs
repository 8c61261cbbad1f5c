//! Errors raised while resolving credentials or talking to Sinch.

use thiserror::Error;

/// A specialized Result type for Sinch operations.
pub type SinchResult<T> = std::result::Result<T, SinchError>;

/// Errors from project resolution, operation preconditions and remote calls.
#[derive(Debug, Error)]
pub enum SinchError {
    /// A project was requested by name but is not configured.
    #[error("Project configuration '{0}' not found")]
    ProjectNotFound(String),

    /// Neither the legacy credentials nor any named project are usable.
    #[error(
        "No valid project configuration found. Set SINCH_SERVICE_PLAN_ID and SINCH_API_TOKEN, \
         or provide named projects in SINCH_PROJECTS"
    )]
    NoValidConfiguration,

    /// A Numbers API call was attempted against a project without a project ID.
    #[error("Project ID required for Numbers API (project: {project})")]
    ProjectIdRequired { project: String },

    /// An SMS API call was attempted against a project without a service plan ID.
    #[error("Service plan ID required for SMS API (project: {project})")]
    ServicePlanIdRequired { project: String },

    /// The remote API answered with a non-success status.
    #[error("Sinch API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The request never produced a response.
    #[error("Request to Sinch failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The response body was not valid JSON.
    #[error("Invalid response from Sinch: {0}")]
    Decode(String),
}

impl SinchError {
    /// Create a "project not found" error.
    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::ProjectNotFound(name.into())
    }

    /// Create a Numbers precondition error naming the resolved project.
    pub fn project_id_required(project: impl Into<String>) -> Self {
        Self::ProjectIdRequired {
            project: project.into(),
        }
    }

    /// Create an SMS precondition error naming the resolved project.
    pub fn service_plan_id_required(project: impl Into<String>) -> Self {
        Self::ServicePlanIdRequired {
            project: project.into(),
        }
    }

    /// Whether this error comes from configuration rather than the network.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::ProjectNotFound(_) | Self::NoValidConfiguration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_message_names_project() {
        let err = SinchError::project_id_required("default");
        assert_eq!(
            err.to_string(),
            "Project ID required for Numbers API (project: default)"
        );
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_not_found_is_configuration() {
        let err = SinchError::project_not_found("stagng");
        assert!(err.is_configuration());
        assert!(err.to_string().contains("'stagng'"));
    }
}
