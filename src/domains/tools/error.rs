//! Tool-specific error types.

use thiserror::Error;

use crate::sinch::SinchError;

/// A specialized Result type for tool execution.
pub type ToolResult<T> = std::result::Result<T, ToolError>;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Configuration, precondition or remote failure from the Sinch layer.
    #[error(transparent)]
    Sinch(#[from] SinchError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinch_errors_keep_their_message() {
        let err: ToolError = SinchError::project_id_required("default").into();
        assert_eq!(
            err.to_string(),
            "Project ID required for Numbers API (project: default)"
        );
    }
}
