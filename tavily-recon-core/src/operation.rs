//! Operations exposed by the facade and their failure policies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an operation reacts when the remote call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Return the error to the caller.
    Propagate,
    /// Render the operation's "nothing found" report instead of failing.
    Degrade,
}

/// The logical capabilities of the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Full-featured web search.
    Search,
    /// Search with image enrichment.
    SearchWithImages,
    /// Recency-filtered news search.
    NewsSearch,
    /// Advanced-depth search with raw content previews.
    Research,
    /// Direct question answering.
    GetAnswer,
    /// Search restricted to allow-listed domains.
    DomainSearch,
    /// Page content extraction.
    Extract,
    /// Bounded crawl from a root URL.
    Crawl,
    /// URL discovery without content.
    Map,
}

impl Operation {
    /// Every operation, in tool registration order.
    pub const ALL: [Operation; 9] = [
        Self::Search,
        Self::SearchWithImages,
        Self::NewsSearch,
        Self::Research,
        Self::GetAnswer,
        Self::DomainSearch,
        Self::Extract,
        Self::Crawl,
        Self::Map,
    ];

    /// Name of the tool that exposes this operation.
    #[must_use]
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::Search => "tavily_search",
            Self::SearchWithImages => "tavily_search_with_images",
            Self::NewsSearch => "tavily_news_search",
            Self::Research => "tavily_research",
            Self::GetAnswer => "tavily_get_answer",
            Self::DomainSearch => "tavily_domain_search",
            Self::Extract => "tavily_extract",
            Self::Crawl => "tavily_crawl",
            Self::Map => "tavily_map",
        }
    }

    /// Failure policy used unless the configuration overrides it.
    ///
    /// The quick-lookup operations degrade to a readable sentinel; the
    /// parameter-rich operations surface the error.
    #[must_use]
    pub fn default_failure_policy(&self) -> FailurePolicy {
        match self {
            Self::SearchWithImages
            | Self::NewsSearch
            | Self::Research
            | Self::GetAnswer
            | Self::DomainSearch => FailurePolicy::Degrade,
            Self::Search | Self::Extract | Self::Crawl | Self::Map => FailurePolicy::Propagate,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}
