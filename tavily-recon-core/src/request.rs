//! Request types and parameter normalization.
//!
//! Caller arguments arrive as `*Params` values (deserializable straight from
//! tool-call JSON, with the same defaults the tools advertise). Normalization
//! turns them into `*Request` values that serialize to exactly the payload the
//! remote API expects:
//!
//! - result counts are clamped into a fixed range, never rejected,
//! - optional fields that are unset, blank or empty are left out of the
//!   payload entirely rather than sent as `null`/`""`/`[]`,
//! - topic-dependent fields are only attached under the matching topic.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::errors::{ReconError, Result};

/// Result-count range of the full-featured search.
pub const SEARCH_MAX_RESULTS: RangeInclusive<u32> = 5..=20;

/// Result-count range of the quick-lookup searches.
pub const LISTING_MAX_RESULTS: RangeInclusive<u32> = 1..=20;

/// Default `max_results` of the full-featured search.
pub const DEFAULT_SEARCH_MAX_RESULTS: i64 = 10;
/// Default limit of the image search.
pub const DEFAULT_IMAGES_LIMIT: i64 = 3;
/// Default limit of the news search.
pub const DEFAULT_NEWS_LIMIT: i64 = 5;
/// Default limit of the research search.
pub const DEFAULT_RESEARCH_LIMIT: i64 = 10;
/// Default limit of the domain search.
pub const DEFAULT_DOMAIN_LIMIT: i64 = 5;
/// Default crawl/map depth.
pub const DEFAULT_MAX_DEPTH: i64 = 1;
/// Default crawl/map breadth.
pub const DEFAULT_MAX_BREADTH: i64 = 20;
/// Default crawl/map link limit.
pub const DEFAULT_LINK_LIMIT: i64 = 50;

/// Clamp a caller-supplied result count into `bounds`.
#[must_use]
pub fn clamp_results(value: i64, bounds: RangeInclusive<u32>) -> u32 {
    let clamped = value.clamp(i64::from(*bounds.start()), i64::from(*bounds.end()));
    u32::try_from(clamped).unwrap_or(*bounds.end())
}

/// Raise a caller-supplied count to at least one.
#[must_use]
pub fn at_least_one(value: i64) -> u32 {
    u32::try_from(value.max(1)).unwrap_or(u32::MAX)
}

/// Search/extraction thoroughness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    /// Fast, less complete.
    #[default]
    Basic,
    /// Slower, more complete.
    Advanced,
}

impl SearchDepth {
    /// Map an "advanced" flag onto the depth enum.
    #[must_use]
    pub fn from_flag(advanced: bool) -> Self {
        if advanced {
            Self::Advanced
        } else {
            Self::Basic
        }
    }

    /// Get the API value for this depth.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
        }
    }
}

/// Search category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// General web search.
    #[default]
    General,
    /// News articles.
    News,
}

/// Recency window accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Past day.
    Day,
    /// Past week.
    Week,
    /// Past month.
    Month,
    /// Past year.
    Year,
    /// Short form of `day`.
    D,
    /// Short form of `week`.
    W,
    /// Short form of `month`.
    M,
    /// Short form of `year`.
    Y,
}

/// Output format of extracted content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// Markdown.
    #[default]
    Markdown,
    /// Plain text.
    Text,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn default_true() -> bool {
    true
}

fn default_search_max_results() -> i64 {
    DEFAULT_SEARCH_MAX_RESULTS
}

fn default_max_depth() -> i64 {
    DEFAULT_MAX_DEPTH
}

fn default_max_breadth() -> i64 {
    DEFAULT_MAX_BREADTH
}

fn default_link_limit() -> i64 {
    DEFAULT_LINK_LIMIT
}

fn require_text(value: &str, what: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ReconError::invalid_request(format!("{what} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn non_blank_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Caller arguments of the full-featured search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchParams {
    /// Search query.
    pub query: String,
    /// Search depth.
    #[serde(default)]
    pub search_depth: SearchDepth,
    /// Search category.
    #[serde(default)]
    pub topic: Topic,
    /// Days back from today; only honoured for the news topic.
    #[serde(default)]
    pub days: Option<i64>,
    /// Recency window.
    #[serde(default)]
    pub time_range: Option<TimeRange>,
    /// Maximum number of results (clamped to 5..=20).
    #[serde(default = "default_search_max_results")]
    pub max_results: i64,
    /// Include query-related images.
    #[serde(default)]
    pub include_images: bool,
    /// Include images with descriptions (implies `include_images`).
    #[serde(default)]
    pub include_image_descriptions: bool,
    /// Include the cleaned page content of each result.
    #[serde(default)]
    pub include_raw_content: bool,
    /// Domains to search within.
    #[serde(default)]
    pub include_domains: Vec<String>,
    /// Domains to leave out.
    #[serde(default)]
    pub exclude_domains: Vec<String>,
    /// Country to boost; only honoured for the general topic.
    #[serde(default)]
    pub country: Option<String>,
    /// Include the favicon URL of each result.
    #[serde(default)]
    pub include_favicon: bool,
}

impl SearchParams {
    /// Create parameters for a query with every option at its default.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_depth: SearchDepth::Basic,
            topic: Topic::General,
            days: None,
            time_range: None,
            max_results: DEFAULT_SEARCH_MAX_RESULTS,
            include_images: false,
            include_image_descriptions: false,
            include_raw_content: false,
            include_domains: Vec::new(),
            exclude_domains: Vec::new(),
            country: None,
            include_favicon: false,
        }
    }

    /// Set the search depth.
    #[must_use]
    pub fn with_search_depth(mut self, depth: SearchDepth) -> Self {
        self.search_depth = depth;
        self
    }

    /// Set the topic.
    #[must_use]
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topic = topic;
        self
    }

    /// Set the maximum number of results.
    #[must_use]
    pub fn with_max_results(mut self, max: i64) -> Self {
        self.max_results = max;
        self
    }

    /// Set the recency filter in days.
    #[must_use]
    pub fn with_days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    /// Set the recency window.
    #[must_use]
    pub fn with_time_range(mut self, range: TimeRange) -> Self {
        self.time_range = Some(range);
        self
    }

    /// Enable or disable image inclusion.
    #[must_use]
    pub fn with_images(mut self, include: bool) -> Self {
        self.include_images = include;
        self
    }

    /// Enable or disable image descriptions.
    #[must_use]
    pub fn with_image_descriptions(mut self, include: bool) -> Self {
        self.include_image_descriptions = include;
        self
    }

    /// Enable or disable raw content inclusion.
    #[must_use]
    pub fn with_raw_content(mut self, include: bool) -> Self {
        self.include_raw_content = include;
        self
    }

    /// Restrict the search to these domains.
    #[must_use]
    pub fn with_include_domains(mut self, domains: Vec<String>) -> Self {
        self.include_domains = domains;
        self
    }

    /// Exclude these domains.
    #[must_use]
    pub fn with_exclude_domains(mut self, domains: Vec<String>) -> Self {
        self.exclude_domains = domains;
        self
    }

    /// Boost results from a country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Enable or disable favicons.
    #[must_use]
    pub fn with_favicon(mut self, include: bool) -> Self {
        self.include_favicon = include;
        self
    }
}

/// Payload sent to the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    /// Search query.
    pub query: String,
    /// Search depth.
    pub search_depth: SearchDepth,
    /// Search category.
    pub topic: Topic,
    /// Clamped result count.
    pub max_results: u32,
    /// Ask the service for a direct answer.
    pub include_answer: bool,
    /// Ask for query-related images.
    pub include_images: bool,
    /// Ask for image descriptions.
    #[serde(skip_serializing_if = "is_false")]
    pub include_image_descriptions: bool,
    /// Ask for the cleaned page content.
    pub include_raw_content: bool,
    /// Recency filter in days, forwarded as given (news topic only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    /// Recency window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    /// Domain allow-list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_domains: Vec<String>,
    /// Domain deny-list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_domains: Vec<String>,
    /// Country boost (general topic only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Ask for favicons.
    #[serde(skip_serializing_if = "is_false")]
    pub include_favicon: bool,
}

impl SearchRequest {
    /// Normalize full-featured search arguments.
    pub fn from_params(params: &SearchParams) -> Result<Self> {
        let query = require_text(&params.query, "query")?;
        let days = match params.topic {
            Topic::News => params.days,
            Topic::General => None,
        };
        let country = match params.topic {
            Topic::General => non_blank(params.country.as_deref()).map(|c| c.to_lowercase()),
            Topic::News => None,
        };

        Ok(Self {
            query,
            search_depth: params.search_depth,
            topic: params.topic,
            max_results: clamp_results(params.max_results, SEARCH_MAX_RESULTS),
            include_answer: true,
            include_images: params.include_images || params.include_image_descriptions,
            include_image_descriptions: params.include_image_descriptions,
            include_raw_content: params.include_raw_content,
            days,
            time_range: params.time_range,
            include_domains: non_blank_list(&params.include_domains),
            exclude_domains: non_blank_list(&params.exclude_domains),
            country,
            include_favicon: params.include_favicon,
        })
    }

    /// Base payload of the quick-lookup searches.
    ///
    /// Raw content is requested exactly when the depth is advanced.
    fn listing(query: &str, limit: i64, depth: SearchDepth) -> Result<Self> {
        Ok(Self {
            query: require_text(query, "query")?,
            search_depth: depth,
            topic: Topic::General,
            max_results: clamp_results(limit, LISTING_MAX_RESULTS),
            include_answer: true,
            include_images: false,
            include_image_descriptions: false,
            include_raw_content: depth == SearchDepth::Advanced,
            days: None,
            time_range: None,
            include_domains: Vec::new(),
            exclude_domains: Vec::new(),
            country: None,
            include_favicon: false,
        })
    }

    /// Normalize an image-enriched search.
    pub fn with_images(params: &QueryParams) -> Result<Self> {
        let mut request = Self::listing(
            &params.query,
            params.limit.unwrap_or(DEFAULT_IMAGES_LIMIT),
            SearchDepth::Basic,
        )?;
        request.include_images = true;
        Ok(request)
    }

    /// Normalize a news search.
    pub fn news(params: &NewsParams) -> Result<Self> {
        let mut request = Self::listing(
            &params.query,
            params.limit.unwrap_or(DEFAULT_NEWS_LIMIT),
            SearchDepth::Basic,
        )?;
        request.topic = Topic::News;
        request.days = params.days;
        request.time_range = params.time_range;
        Ok(request)
    }

    /// Normalize an advanced research search.
    pub fn research(params: &QueryParams) -> Result<Self> {
        Self::listing(
            &params.query,
            params.limit.unwrap_or(DEFAULT_RESEARCH_LIMIT),
            SearchDepth::from_flag(true),
        )
    }

    /// Normalize a direct-answer lookup.
    pub fn answer(query: &str) -> Result<Self> {
        Self::listing(query, 1, SearchDepth::Basic)
    }

    /// Normalize a domain-scoped search.
    pub fn domain(params: &DomainSearchParams) -> Result<Self> {
        let domains = non_blank_list(&params.domains);
        if domains.is_empty() {
            return Err(ReconError::invalid_request(
                "domain search needs at least one domain",
            ));
        }
        let mut request = Self::listing(
            &params.query,
            params.limit.unwrap_or(DEFAULT_DOMAIN_LIMIT),
            SearchDepth::Basic,
        )?;
        request.include_answer = false;
        request.include_domains = domains;
        Ok(request)
    }
}

/// Caller arguments of the query-plus-limit lookups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryParams {
    /// Search query.
    pub query: String,
    /// Maximum number of results; the operation's default when unset.
    #[serde(default)]
    pub limit: Option<i64>,
}

impl QueryParams {
    /// Create parameters for a query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Caller arguments of the news search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsParams {
    /// Search query.
    pub query: String,
    /// Maximum number of results.
    #[serde(default)]
    pub limit: Option<i64>,
    /// Days back from today.
    #[serde(default)]
    pub days: Option<i64>,
    /// Recency window.
    #[serde(default)]
    pub time_range: Option<TimeRange>,
}

impl NewsParams {
    /// Create parameters for a query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
            days: None,
            time_range: None,
        }
    }

    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the recency filter in days.
    #[must_use]
    pub fn with_days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    /// Set the recency window.
    #[must_use]
    pub fn with_time_range(mut self, range: TimeRange) -> Self {
        self.time_range = Some(range);
        self
    }
}

/// Caller arguments of the domain-scoped search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainSearchParams {
    /// Search query.
    pub query: String,
    /// Domains to search within.
    pub domains: Vec<String>,
    /// Maximum number of results.
    #[serde(default)]
    pub limit: Option<i64>,
}

impl DomainSearchParams {
    /// Create parameters for a query over some domains.
    #[must_use]
    pub fn new(query: impl Into<String>, domains: Vec<String>) -> Self {
        Self {
            query: query.into(),
            domains,
            limit: None,
        }
    }

    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

// ---------------------------------------------------------------------------
// Extract
// ---------------------------------------------------------------------------

/// Caller arguments of content extraction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtractParams {
    /// URLs to extract.
    pub urls: Vec<String>,
    /// Extraction depth.
    #[serde(default)]
    pub extract_depth: SearchDepth,
    /// Include the images found on each page.
    #[serde(default)]
    pub include_images: bool,
    /// Output format.
    #[serde(default)]
    pub format: ContentFormat,
    /// Include the favicon URL of each page.
    #[serde(default)]
    pub include_favicon: bool,
}

impl ExtractParams {
    /// Create parameters for some URLs.
    #[must_use]
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            extract_depth: SearchDepth::Basic,
            include_images: false,
            format: ContentFormat::Markdown,
            include_favicon: false,
        }
    }

    /// Set the extraction depth.
    #[must_use]
    pub fn with_extract_depth(mut self, depth: SearchDepth) -> Self {
        self.extract_depth = depth;
        self
    }

    /// Enable or disable images.
    #[must_use]
    pub fn with_images(mut self, include: bool) -> Self {
        self.include_images = include;
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn with_format(mut self, format: ContentFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable favicons.
    #[must_use]
    pub fn with_favicon(mut self, include: bool) -> Self {
        self.include_favicon = include;
        self
    }
}

/// Payload sent to the extract endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractRequest {
    /// URLs to extract.
    pub urls: Vec<String>,
    /// Extraction depth.
    pub extract_depth: SearchDepth,
    /// Ask for page images.
    #[serde(skip_serializing_if = "is_false")]
    pub include_images: bool,
    /// Output format.
    pub format: ContentFormat,
    /// Ask for favicons.
    #[serde(skip_serializing_if = "is_false")]
    pub include_favicon: bool,
}

impl ExtractRequest {
    /// Normalize extraction arguments.
    pub fn from_params(params: &ExtractParams) -> Result<Self> {
        let urls = non_blank_list(&params.urls);
        if urls.is_empty() {
            return Err(ReconError::invalid_request("urls cannot be empty"));
        }
        Ok(Self {
            urls,
            extract_depth: params.extract_depth,
            include_images: params.include_images,
            format: params.format,
            include_favicon: params.include_favicon,
        })
    }
}

// ---------------------------------------------------------------------------
// Crawl / Map
// ---------------------------------------------------------------------------

/// Traversal limits and filters shared by crawl and map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalScope {
    /// How far from the root to explore (>= 1).
    pub max_depth: u32,
    /// Links followed per page (>= 1).
    pub max_breadth: u32,
    /// Total links processed before stopping (>= 1).
    pub limit: u32,
    /// Whether external links are returned.
    pub allow_external: bool,
    /// Natural-language guidance for the crawler.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Path regex allow-list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select_paths: Vec<String>,
    /// Domain regex allow-list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select_domains: Vec<String>,
}

/// Caller arguments of the site map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapParams {
    /// Root URL.
    pub url: String,
    /// Maximum depth.
    #[serde(default = "default_max_depth")]
    pub max_depth: i64,
    /// Maximum links per page.
    #[serde(default = "default_max_breadth")]
    pub max_breadth: i64,
    /// Maximum total links.
    #[serde(default = "default_link_limit")]
    pub limit: i64,
    /// Natural-language guidance.
    #[serde(default)]
    pub instructions: Option<String>,
    /// Path regex allow-list.
    #[serde(default)]
    pub select_paths: Vec<String>,
    /// Domain regex allow-list.
    #[serde(default)]
    pub select_domains: Vec<String>,
    /// Return external links.
    #[serde(default = "default_true")]
    pub allow_external: bool,
}

impl MapParams {
    /// Create parameters for a root URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_breadth: DEFAULT_MAX_BREADTH,
            limit: DEFAULT_LINK_LIMIT,
            instructions: None,
            select_paths: Vec::new(),
            select_domains: Vec::new(),
            allow_external: true,
        }
    }

    /// Set the depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: i64) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the breadth.
    #[must_use]
    pub fn with_max_breadth(mut self, breadth: i64) -> Self {
        self.max_breadth = breadth;
        self
    }

    /// Set the total link limit.
    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set natural-language instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Set the path allow-list.
    #[must_use]
    pub fn with_select_paths(mut self, paths: Vec<String>) -> Self {
        self.select_paths = paths;
        self
    }

    /// Set the domain allow-list.
    #[must_use]
    pub fn with_select_domains(mut self, domains: Vec<String>) -> Self {
        self.select_domains = domains;
        self
    }

    /// Allow or forbid external links.
    #[must_use]
    pub fn with_allow_external(mut self, allow: bool) -> Self {
        self.allow_external = allow;
        self
    }

    fn scope(&self) -> TraversalScope {
        TraversalScope {
            max_depth: at_least_one(self.max_depth),
            max_breadth: at_least_one(self.max_breadth),
            limit: at_least_one(self.limit),
            allow_external: self.allow_external,
            instructions: non_blank(self.instructions.as_deref()),
            select_paths: non_blank_list(&self.select_paths),
            select_domains: non_blank_list(&self.select_domains),
        }
    }
}

/// Caller arguments of the crawl.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrawlParams {
    /// Traversal settings shared with map.
    #[serde(flatten)]
    pub map: MapParams,
    /// Extraction depth.
    #[serde(default)]
    pub extract_depth: SearchDepth,
    /// Output format.
    #[serde(default)]
    pub format: ContentFormat,
    /// Include the favicon URL of each page.
    #[serde(default)]
    pub include_favicon: bool,
}

impl CrawlParams {
    /// Create parameters for a root URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::from_map(MapParams::new(url))
    }

    /// Crawl with the given traversal settings.
    #[must_use]
    pub fn from_map(map: MapParams) -> Self {
        Self {
            map,
            extract_depth: SearchDepth::Basic,
            format: ContentFormat::Markdown,
            include_favicon: false,
        }
    }

    /// Set the extraction depth.
    #[must_use]
    pub fn with_extract_depth(mut self, depth: SearchDepth) -> Self {
        self.extract_depth = depth;
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn with_format(mut self, format: ContentFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable favicons.
    #[must_use]
    pub fn with_favicon(mut self, include: bool) -> Self {
        self.include_favicon = include;
        self
    }
}

/// Payload sent to the crawl endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrawlRequest {
    /// Root URL.
    pub url: String,
    /// Traversal limits and filters.
    #[serde(flatten)]
    pub scope: TraversalScope,
    /// Extraction depth.
    pub extract_depth: SearchDepth,
    /// Output format.
    pub format: ContentFormat,
    /// Ask for favicons.
    #[serde(skip_serializing_if = "is_false")]
    pub include_favicon: bool,
}

impl CrawlRequest {
    /// Normalize crawl arguments.
    pub fn from_params(params: &CrawlParams) -> Result<Self> {
        Ok(Self {
            url: require_text(&params.map.url, "url")?,
            scope: params.map.scope(),
            extract_depth: params.extract_depth,
            format: params.format,
            include_favicon: params.include_favicon,
        })
    }
}

/// Payload sent to the map endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRequest {
    /// Root URL.
    pub url: String,
    /// Traversal limits and filters.
    #[serde(flatten)]
    pub scope: TraversalScope,
}

impl MapRequest {
    /// Normalize map arguments.
    pub fn from_params(params: &MapParams) -> Result<Self> {
        Ok(Self {
            url: require_text(&params.url, "url")?,
            scope: params.scope(),
        })
    }
}
