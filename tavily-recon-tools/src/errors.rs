//! Tool-specific error types.
//!
//! [`ToolError`] is what an agent loop sees when a tool call fails. Facade
//! errors convert into it so a tool body can use `?` on any operation.

use tavily_recon_core::ReconError;
use thiserror::Error;

/// Errors that can occur during tool execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool execution failed.
    #[error("Tool execution failed: {message}")]
    ExecutionFailed {
        /// Error message.
        message: String,
        /// Whether this error is retryable.
        retryable: bool,
    },

    /// Invalid arguments provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Argument validation failed.
    #[error("Argument validation failed: {message}")]
    ValidationFailed {
        /// Validation error message.
        message: String,
        /// Field that failed validation, if applicable.
        field: Option<String>,
    },

    /// The tool is not usable with the current configuration.
    #[error("Tool not configured: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolError {
    /// Check if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ExecutionFailed { retryable: true, .. })
    }

    /// Create a non-retryable execution failure.
    #[must_use]
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            message: msg.into(),
            retryable: false,
        }
    }

    /// Create a retryable execution failure.
    #[must_use]
    pub fn retryable(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            message: msg.into(),
            retryable: true,
        }
    }

    /// Create an invalid arguments error.
    #[must_use]
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a validation failed error.
    #[must_use]
    pub fn validation_failed(msg: impl Into<String>, field: Option<String>) -> Self {
        Self::ValidationFailed {
            message: msg.into(),
            field,
        }
    }
}

impl From<ReconError> for ToolError {
    fn from(err: ReconError) -> Self {
        match err {
            ReconError::Configuration(msg) => Self::Configuration(msg),
            ReconError::InvalidRequest(msg) => Self::validation_failed(msg, None),
            ReconError::Serialization(e) => Self::Json(e),
            ReconError::Api { status, .. } if status == 429 || status >= 500 => {
                Self::retryable(err.to_string())
            }
            ReconError::Transport { .. } => Self::retryable(err.to_string()),
            other => Self::execution_failed(other.to_string()),
        }
    }
}
