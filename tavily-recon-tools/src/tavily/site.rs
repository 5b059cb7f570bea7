//! Extract, crawl and map tools.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Arc;

use tavily_recon_client::TavilyClient;
use tavily_recon_core::{CrawlParams, ExtractParams, MapParams, Operation};

use super::{log_call, traversal_properties};
use crate::{
    schema::SchemaBuilder,
    tool::{parse_args, Tool, ToolDefinition, ToolResult},
};

fn extraction_properties(builder: SchemaBuilder) -> SchemaBuilder {
    builder
        .enum_values(
            "extract_depth",
            "'advanced' also retrieves tables and embedded content",
            &["basic", "advanced"],
            false,
        )
        .default_value("extract_depth", "basic")
        .enum_values(
            "format",
            "Format of the extracted content",
            &["markdown", "text"],
            false,
        )
        .default_value("format", "markdown")
        .boolean("include_favicon", "Include each page's favicon URL", false)
}

/// Page content extraction (`tavily_extract`).
#[derive(Debug, Clone)]
pub struct TavilyExtractTool {
    client: Arc<TavilyClient>,
}

impl TavilyExtractTool {
    /// Create the tool over a shared client.
    #[must_use]
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TavilyExtractTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            Operation::Extract.tool_name(),
            "Extract the full content of one or more web pages.",
            extraction_properties(
                SchemaBuilder::new()
                    .string_array("urls", "URLs to extract content from", true)
                    .boolean("include_images", "List the images found on each page", false),
            )
            .build(),
        )
    }

    async fn call(&self, args: JsonValue) -> ToolResult {
        let params: ExtractParams = parse_args(args)?;
        log_call(Operation::Extract);
        Ok(self.client.extract(&params).await?)
    }
}

/// Site crawl with content previews (`tavily_crawl`).
#[derive(Debug, Clone)]
pub struct TavilyCrawlTool {
    client: Arc<TavilyClient>,
}

impl TavilyCrawlTool {
    /// Create the tool over a shared client.
    #[must_use]
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TavilyCrawlTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            Operation::Crawl.tool_name(),
            "Crawl a website from a root URL, following links and previewing \
             the content of each page visited.",
            extraction_properties(traversal_properties(SchemaBuilder::new())).build(),
        )
    }

    async fn call(&self, args: JsonValue) -> ToolResult {
        let params: CrawlParams = parse_args(args)?;
        log_call(Operation::Crawl);
        Ok(self.client.crawl(&params).await?)
    }
}

/// Site structure discovery (`tavily_map`).
#[derive(Debug, Clone)]
pub struct TavilyMapTool {
    client: Arc<TavilyClient>,
}

impl TavilyMapTool {
    /// Create the tool over a shared client.
    #[must_use]
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TavilyMapTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            Operation::Map.tool_name(),
            "Map the structure of a website, listing the URLs reachable from a \
             root URL without fetching their content.",
            traversal_properties(SchemaBuilder::new()).build(),
        )
    }

    async fn call(&self, args: JsonValue) -> ToolResult {
        let params: MapParams = parse_args(args)?;
        log_call(Operation::Map);
        Ok(self.client.map(&params).await?)
    }
}
