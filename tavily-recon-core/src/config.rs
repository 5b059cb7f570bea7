//! Facade configuration.
//!
//! The configuration is loaded once by the embedding application and handed
//! to the client explicitly. [`TavilyConfig::from_env`] is a convenience
//! loader; nothing else in the workspace reads the process environment.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fmt;
use url::Url;

use crate::errors::{ReconError, Result};
use crate::operation::{FailurePolicy, Operation};

/// Default API location.
pub const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable read by [`TavilyConfig::from_env`].
pub const API_KEY_ENV: &str = "TAVILY_KEY";

/// Alternate environment variable name used by other Tavily integrations.
pub const API_KEY_ENV_FALLBACK: &str = "TAVILY_API_KEY";

/// Remote endpoints used by the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `/search`
    Search,
    /// `/extract`
    Extract,
    /// `/crawl`
    Crawl,
    /// `/map`
    Map,
}

impl Endpoint {
    /// Path relative to the base URL.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Extract => "extract",
            Self::Crawl => "crawl",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Configuration for the Tavily facade.
#[derive(Clone, Serialize, Deserialize)]
pub struct TavilyConfig {
    /// API key used as the bearer credential.
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
    /// Base URL for the API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Per-operation overrides of the failure policy.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub failure_policies: HashMap<Operation, FailurePolicy>,
}

impl Default for TavilyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            failure_policies: HashMap::new(),
        }
    }
}

impl fmt::Debug for TavilyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TavilyConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("failure_policies", &self.failure_policies)
            .finish()
    }
}

impl TavilyConfig {
    /// Create a new configuration with an API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Load the API key from `TAVILY_KEY` (or `TAVILY_API_KEY`).
    ///
    /// A missing variable is not an error here: the facade reports it as a
    /// configuration error on the first operation.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_ENV)
            .or_else(|_| env::var(API_KEY_ENV_FALLBACK))
            .ok();
        Self {
            api_key,
            ..Default::default()
        }
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Override the failure policy of one operation.
    #[must_use]
    pub fn with_failure_policy(mut self, operation: Operation, policy: FailurePolicy) -> Self {
        self.failure_policies.insert(operation, policy);
        self
    }

    /// Effective failure policy of an operation.
    #[must_use]
    pub fn failure_policy(&self, operation: Operation) -> FailurePolicy {
        self.failure_policies
            .get(&operation)
            .copied()
            .unwrap_or_else(|| operation.default_failure_policy())
    }

    /// Return the credential, or a configuration error if it is unusable.
    pub fn validate(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            Some(_) => Err(ReconError::configuration(format!(
                "{API_KEY_ENV} is set but empty"
            ))),
            None => Err(ReconError::configuration(format!(
                "{API_KEY_ENV} environment variable is not set"
            ))),
        }
    }

    /// Resolve the absolute URL of an endpoint.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url> {
        let mut base = Url::parse(&self.base_url).map_err(|e| {
            ReconError::configuration(format!("invalid base URL '{}': {e}", self.base_url))
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(endpoint.path())
            .map_err(|e| ReconError::configuration(format!("invalid endpoint URL: {e}")))
    }
}
