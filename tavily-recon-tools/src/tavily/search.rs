//! Search-endpoint tools.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;

use tavily_recon_client::TavilyClient;
use tavily_recon_core::request::{
    DEFAULT_DOMAIN_LIMIT, DEFAULT_IMAGES_LIMIT, DEFAULT_NEWS_LIMIT, DEFAULT_RESEARCH_LIMIT,
    DEFAULT_SEARCH_MAX_RESULTS,
};
use tavily_recon_core::{DomainSearchParams, NewsParams, Operation, QueryParams, SearchParams};

use super::{limit_property, log_call, TIME_RANGES};
use crate::{
    schema::SchemaBuilder,
    tool::{parse_args, Tool, ToolDefinition, ToolResult},
};

/// Full-featured web search (`tavily_search`).
#[derive(Debug, Clone)]
pub struct TavilySearchTool {
    client: Arc<TavilyClient>,
}

impl TavilySearchTool {
    /// Create the tool over a shared client.
    #[must_use]
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TavilySearchTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            Operation::Search.tool_name(),
            "Search the web with Tavily. Returns a direct answer when available \
             followed by ranked results with titles, URLs, content snippets and scores.",
            SchemaBuilder::new()
                .string("query", "The search query", true)
                .enum_values(
                    "search_depth",
                    "'basic' (faster) or 'advanced' (more thorough)",
                    &["basic", "advanced"],
                    false,
                )
                .default_value("search_depth", "basic")
                .enum_values("topic", "Search category", &["general", "news"], false)
                .default_value("topic", "general")
                .integer_constrained(
                    "days",
                    "Days back from today to include (news topic only)",
                    false,
                    None,
                    None,
                )
                .enum_values("time_range", "Recency window", TIME_RANGES, false)
                .integer_constrained(
                    "max_results",
                    "Maximum number of results",
                    false,
                    Some(5),
                    Some(20),
                )
                .default_value("max_results", DEFAULT_SEARCH_MAX_RESULTS)
                .boolean("include_images", "Include query-related images", false)
                .boolean(
                    "include_image_descriptions",
                    "Include images with descriptions",
                    false,
                )
                .boolean(
                    "include_raw_content",
                    "Include the cleaned content of each result",
                    false,
                )
                .string_array("include_domains", "Only search these domains", false)
                .string_array("exclude_domains", "Never return these domains", false)
                .string(
                    "country",
                    "Boost results from this country (general topic only)",
                    false,
                )
                .boolean("include_favicon", "Include each result's favicon URL", false)
                .build(),
        )
    }

    async fn call(&self, args: JsonValue) -> ToolResult {
        let params: SearchParams = parse_args(args)?;
        log_call(Operation::Search);
        Ok(self.client.search(&params).await?)
    }
}

/// Search with image URLs (`tavily_search_with_images`).
#[derive(Debug, Clone)]
pub struct TavilyImageSearchTool {
    client: Arc<TavilyClient>,
}

impl TavilyImageSearchTool {
    /// Create the tool over a shared client.
    #[must_use]
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TavilyImageSearchTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            Operation::SearchWithImages.tool_name(),
            "Search the web and list each result together with related image URLs.",
            limit_property(
                SchemaBuilder::new().string("query", "The search query", true),
                DEFAULT_IMAGES_LIMIT,
            )
            .build(),
        )
    }

    async fn call(&self, args: JsonValue) -> ToolResult {
        let params: QueryParams = parse_args(args)?;
        log_call(Operation::SearchWithImages);
        Ok(self.client.search_with_images(&params).await?)
    }
}

/// Recent news search (`tavily_news_search`).
#[derive(Debug, Clone)]
pub struct TavilyNewsTool {
    client: Arc<TavilyClient>,
}

impl TavilyNewsTool {
    /// Create the tool over a shared client.
    #[must_use]
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TavilyNewsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            Operation::NewsSearch.tool_name(),
            "Search recent news articles, with publication dates.",
            limit_property(
                SchemaBuilder::new().string("query", "The news search query", true),
                DEFAULT_NEWS_LIMIT,
            )
            .integer_constrained("days", "Days back from today to include", false, None, None)
            .enum_values("time_range", "Recency window", TIME_RANGES, false)
            .build(),
        )
    }

    async fn call(&self, args: JsonValue) -> ToolResult {
        let params: NewsParams = parse_args(args)?;
        log_call(Operation::NewsSearch);
        Ok(self.client.news_search(&params).await?)
    }
}

/// Advanced-depth research (`tavily_research`).
#[derive(Debug, Clone)]
pub struct TavilyResearchTool {
    client: Arc<TavilyClient>,
}

impl TavilyResearchTool {
    /// Create the tool over a shared client.
    #[must_use]
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TavilyResearchTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            Operation::Research.tool_name(),
            "Deep research with advanced search depth. Each result includes a \
             preview of the page's raw content.",
            limit_property(
                SchemaBuilder::new().string("query", "The research query", true),
                DEFAULT_RESEARCH_LIMIT,
            )
            .build(),
        )
    }

    async fn call(&self, args: JsonValue) -> ToolResult {
        let params: QueryParams = parse_args(args)?;
        log_call(Operation::Research);
        Ok(self.client.research(&params).await?)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerArgs {
    query: String,
}

/// Direct answer lookup (`tavily_get_answer`).
#[derive(Debug, Clone)]
pub struct TavilyAnswerTool {
    client: Arc<TavilyClient>,
}

impl TavilyAnswerTool {
    /// Create the tool over a shared client.
    #[must_use]
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TavilyAnswerTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            Operation::GetAnswer.tool_name(),
            "Get a direct answer to a question.",
            SchemaBuilder::new()
                .string("query", "The question to answer", true)
                .build(),
        )
    }

    async fn call(&self, args: JsonValue) -> ToolResult {
        let AnswerArgs { query } = parse_args(args)?;
        log_call(Operation::GetAnswer);
        Ok(self.client.get_answer(&query).await?)
    }
}

/// Search within allow-listed domains (`tavily_domain_search`).
#[derive(Debug, Clone)]
pub struct TavilyDomainSearchTool {
    client: Arc<TavilyClient>,
}

impl TavilyDomainSearchTool {
    /// Create the tool over a shared client.
    #[must_use]
    pub fn new(client: Arc<TavilyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TavilyDomainSearchTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            Operation::DomainSearch.tool_name(),
            "Search only within the given domains.",
            limit_property(
                SchemaBuilder::new()
                    .string("query", "The search query", true)
                    .string_array("domains", "Domains to search within", true),
                DEFAULT_DOMAIN_LIMIT,
            )
            .build(),
        )
    }

    async fn call(&self, args: JsonValue) -> ToolResult {
        let params: DomainSearchParams = parse_args(args)?;
        log_call(Operation::DomainSearch);
        Ok(self.client.domain_search(&params).await?)
    }
}
