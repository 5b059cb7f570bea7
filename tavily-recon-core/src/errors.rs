//! Error types for tavily-recon.
//!
//! Every operation fails with one of these variants. Configuration problems
//! are detected before any request leaves the process; everything that can
//! go wrong on the wire is grouped under the transport-class variants so a
//! caller can decide whether to degrade or surface it.

use thiserror::Error;

/// The main error type for tavily-recon operations.
#[derive(Debug, Error)]
pub enum ReconError {
    /// The facade is not usable as configured (missing credential, bad URL).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller arguments cannot form a valid request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Connection failure or timeout.
    #[error("Transport error: {message}")]
    Transport {
        /// Error message.
        message: String,
        /// Whether the request ran into the configured timeout.
        timed_out: bool,
    },

    /// The remote service answered with a non-success status.
    #[error("Tavily API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using ReconError.
pub type Result<T> = std::result::Result<T, ReconError>;

impl ReconError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a transport error.
    #[must_use]
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport {
            message: msg.into(),
            timed_out: false,
        }
    }

    /// Create a transport error caused by a timeout.
    #[must_use]
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Transport {
            message: msg.into(),
            timed_out: true,
        }
    }

    /// Create an API status error.
    #[must_use]
    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: msg.into(),
        }
    }

    /// Create a decode error.
    #[must_use]
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if this error came from talking to the remote service.
    ///
    /// Only these errors are eligible for degradation into a sentinel report.
    #[must_use]
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Api { .. } | Self::Decode(_)
        )
    }

    /// Check if this error was a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { timed_out: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error() {
        let err = ReconError::configuration("TAVILY_KEY is not set");
        assert!(err.is_configuration());
        assert!(!err.is_transport_failure());
        assert_eq!(err.to_string(), "Configuration error: TAVILY_KEY is not set");
    }

    #[test]
    fn test_transport_class() {
        assert!(ReconError::transport("connection refused").is_transport_failure());
        assert!(ReconError::api(500, "boom").is_transport_failure());
        assert!(ReconError::decode("missing field").is_transport_failure());
        assert!(!ReconError::invalid_request("empty query").is_transport_failure());
    }

    #[test]
    fn test_timeout() {
        let err = ReconError::timeout("deadline elapsed");
        assert!(err.is_timeout());
        assert!(!ReconError::transport("reset").is_timeout());
    }

    #[test]
    fn test_api_display() {
        let err = ReconError::api(401, "Unauthorized: missing or invalid API key.");
        assert_eq!(
            err.to_string(),
            "Tavily API error (HTTP 401): Unauthorized: missing or invalid API key."
        );
    }
}
