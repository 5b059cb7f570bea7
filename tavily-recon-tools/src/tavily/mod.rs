//! Tools backed by the Tavily operations.
//!
//! One tool per [`Operation`], named after [`Operation::tool_name`]. Every
//! tool deserializes its arguments into the matching parameter type (so
//! omitted arguments take the same defaults the schema advertises), runs the
//! operation on a shared [`TavilyClient`] and returns the report as text.

mod search;
mod site;

pub use search::{
    TavilyAnswerTool, TavilyDomainSearchTool, TavilyImageSearchTool, TavilyNewsTool,
    TavilyResearchTool, TavilySearchTool,
};
pub use site::{TavilyCrawlTool, TavilyExtractTool, TavilyMapTool};

use std::sync::Arc;
use tracing::debug;

use tavily_recon_client::TavilyClient;
use tavily_recon_core::request::{DEFAULT_LINK_LIMIT, DEFAULT_MAX_BREADTH, DEFAULT_MAX_DEPTH};
use tavily_recon_core::Operation;

use crate::{schema::SchemaBuilder, BoxedTool, ToolRegistry};

const TIME_RANGES: &[&str] = &["day", "week", "month", "year", "d", "w", "m", "y"];

fn limit_property(builder: SchemaBuilder, default: i64) -> SchemaBuilder {
    builder
        .integer_constrained(
            "limit",
            "Maximum number of results to return",
            false,
            Some(1),
            Some(20),
        )
        .default_value("limit", default)
}

fn traversal_properties(builder: SchemaBuilder) -> SchemaBuilder {
    builder
        .string("url", "Root URL to start from", true)
        .integer_constrained(
            "max_depth",
            "How many links away from the root to explore",
            false,
            Some(1),
            None,
        )
        .default_value("max_depth", DEFAULT_MAX_DEPTH)
        .integer_constrained(
            "max_breadth",
            "Links to follow on each page",
            false,
            Some(1),
            None,
        )
        .default_value("max_breadth", DEFAULT_MAX_BREADTH)
        .integer_constrained(
            "limit",
            "Total links to process before stopping",
            false,
            Some(1),
            None,
        )
        .default_value("limit", DEFAULT_LINK_LIMIT)
        .string(
            "instructions",
            "Natural-language guidance, e.g. 'only documentation pages'",
            false,
        )
        .string_array(
            "select_paths",
            "Regex patterns of URL paths to include, e.g. '/docs/.*'",
            false,
        )
        .string_array(
            "select_domains",
            "Regex patterns of domains to include",
            false,
        )
        .boolean("allow_external", "Return links to external domains", false)
        .default_value("allow_external", true)
}

fn log_call(operation: Operation) {
    debug!(operation = %operation, "running Tavily tool");
}

/// Every Tavily tool over one shared client, in [`Operation::ALL`] order.
#[must_use]
pub fn tavily_tools(client: Arc<TavilyClient>) -> Vec<BoxedTool> {
    Operation::ALL
        .iter()
        .map(|operation| tool_for(*operation, Arc::clone(&client)))
        .collect()
}

fn tool_for(operation: Operation, client: Arc<TavilyClient>) -> BoxedTool {
    match operation {
        Operation::Search => Arc::new(TavilySearchTool::new(client)),
        Operation::SearchWithImages => Arc::new(TavilyImageSearchTool::new(client)),
        Operation::NewsSearch => Arc::new(TavilyNewsTool::new(client)),
        Operation::Research => Arc::new(TavilyResearchTool::new(client)),
        Operation::GetAnswer => Arc::new(TavilyAnswerTool::new(client)),
        Operation::DomainSearch => Arc::new(TavilyDomainSearchTool::new(client)),
        Operation::Extract => Arc::new(TavilyExtractTool::new(client)),
        Operation::Crawl => Arc::new(TavilyCrawlTool::new(client)),
        Operation::Map => Arc::new(TavilyMapTool::new(client)),
    }
}

impl ToolRegistry {
    /// A registry holding every Tavily tool.
    #[must_use]
    pub fn tavily(client: TavilyClient) -> Self {
        let mut registry = Self::new();
        registry.register_tavily(Arc::new(client));
        registry
    }

    /// Register every Tavily tool over a shared client.
    pub fn register_tavily(&mut self, client: Arc<TavilyClient>) -> &mut Self {
        for tool in tavily_tools(client) {
            self.register(tool);
        }
        self
    }
}
