//! # tavily-recon
//!
//! Web reconnaissance through the Tavily API: search, news, research,
//! direct answers, domain-scoped search, page extraction, crawling and
//! site mapping, each rendered as a plain-text report an agent can read.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tavily_recon::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let client = TavilyClient::new(TavilyConfig::from_env())?;
//!
//! let report = client
//!     .search(&SearchParams::new("CVE-2024-3094 xz backdoor").with_max_results(5))
//!     .await?;
//! println!("{report}");
//!
//! let sitemap = client.map(&MapParams::new("https://docs.rs").with_max_depth(2)).await?;
//! println!("{sitemap}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! | Crate | Contents |
//! |-------|----------|
//! | [`core`] | Configuration, errors, request normalization, response types, report formatting |
//! | [`client`] | HTTP transport and the [`TavilyClient`] facade |
//! | [`tools`] | Agent tools, JSON schemas and the [`ToolRegistry`] |
//!
//! ## Failure handling
//!
//! A missing credential is always an error and is reported before any
//! request is sent. Remote failures are either returned or rendered as the
//! operation's "nothing found" report, per [`FailurePolicy`]; see
//! [`Operation::default_failure_policy`] and
//! [`TavilyConfig::with_failure_policy`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

/// Configuration, errors, requests, responses and formatting.
pub use tavily_recon_core as core;

/// Transport and operation facade.
pub use tavily_recon_client as client;

/// Agent tool surface.
pub use tavily_recon_tools as tools;

pub use tavily_recon_core::{
    FailurePolicy, Operation, ReconError, Result, TavilyConfig,
};

pub use tavily_recon_client::{HttpTransport, TavilyClient, Transport};

pub use tavily_recon_tools::{Tool, ToolDefinition, ToolError, ToolRegistry, ToolResult};

/// Convenient imports for common usage.
pub mod prelude {
    // Configuration and errors
    pub use crate::core::{FailurePolicy, Operation, ReconError, Result, TavilyConfig};

    // Parameters
    pub use crate::core::{
        ContentFormat, CrawlParams, DomainSearchParams, ExtractParams, MapParams, NewsParams,
        QueryParams, SearchDepth, SearchParams, TimeRange, Topic,
    };

    // Client
    pub use crate::client::{HttpTransport, TavilyClient, Transport};

    // Tools
    pub use crate::tools::{Tool, ToolDefinition, ToolError, ToolRegistry, ToolResult};
}

/// Version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_version() {
        assert_eq!(super::VERSION, "0.1.0");
    }

    #[tokio::test]
    async fn test_client_and_tools_share_behaviour() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/extract"))
            .and(body_partial_json(json!({"urls": ["https://example.com"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"url": "https://example.com", "raw_content": "Example Domain"}],
                "failed_results": [{"url": "https://gone.example", "error": "404"}]
            })))
            .expect(2)
            .mount(&server)
            .await;

        let config = TavilyConfig::new("tvly-test").with_base_url(server.uri());
        let client = TavilyClient::new(config).unwrap();
        let direct = client
            .extract(&ExtractParams::new(vec!["https://example.com".into()]))
            .await
            .unwrap();

        let registry = ToolRegistry::tavily(client);
        let via_tool = registry
            .call(
                Operation::Extract.tool_name(),
                json!({"urls": ["https://example.com"]}),
            )
            .await
            .unwrap();

        assert_eq!(
            direct,
            "Detailed Results:\n\nURL: https://example.com\nContent: Example Domain\n\n\
             Failed URLs:\n  - https://gone.example: 404"
        );
        assert_eq!(via_tool, direct);
    }
}
