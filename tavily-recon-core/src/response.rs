//! Response types returned by the remote service.
//!
//! Every field the reports read is optional or defaulted: the service omits
//! fields freely, and a missing value must render as a placeholder rather
//! than fail decoding. Lists sent as `null` decode as empty.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An image attached to a search or extraction result.
///
/// The service returns bare URLs unless descriptions were requested, in
/// which case entries become objects. Both shapes can appear in one list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageEntry {
    /// A bare image URL.
    Url(String),
    /// An image object with an optional description.
    Described {
        /// Image URL.
        #[serde(default)]
        url: Option<String>,
        /// Generated description.
        #[serde(default)]
        description: Option<String>,
    },
}

impl ImageEntry {
    /// Create a bare URL entry.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Create a described entry.
    #[must_use]
    pub fn described(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Described {
            url: Some(url.into()),
            description: Some(description.into()),
        }
    }

    /// The image URL, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Described { url, .. } => url.as_deref(),
        }
    }

    /// The description, if present and non-empty.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Url(_) => None,
            Self::Described { description, .. } => {
                description.as_deref().filter(|d| !d.is_empty())
            }
        }
    }
}

/// A single search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result.
    #[serde(default)]
    pub title: Option<String>,
    /// URL of the result.
    #[serde(default)]
    pub url: Option<String>,
    /// Content snippet.
    #[serde(default)]
    pub content: Option<String>,
    /// Relevance score (0-1).
    #[serde(default)]
    pub score: Option<f64>,
    /// Published date (news results).
    #[serde(default)]
    pub published_date: Option<String>,
    /// Cleaned page content, if requested.
    #[serde(default)]
    pub raw_content: Option<String>,
    /// Images attached to this result.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<ImageEntry>,
    /// Favicon URL, if requested.
    #[serde(default)]
    pub favicon: Option<String>,
}

impl SearchResult {
    /// Create a new result.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Set the relevance score.
    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Set the published date.
    #[must_use]
    pub fn with_published_date(mut self, date: impl Into<String>) -> Self {
        self.published_date = Some(date.into());
        self
    }

    /// Set the raw content.
    #[must_use]
    pub fn with_raw_content(mut self, raw: impl Into<String>) -> Self {
        self.raw_content = Some(raw.into());
        self
    }

    /// Set the images.
    #[must_use]
    pub fn with_images(mut self, images: Vec<ImageEntry>) -> Self {
        self.images = images;
        self
    }

    /// Set the favicon.
    #[must_use]
    pub fn with_favicon(mut self, favicon: impl Into<String>) -> Self {
        self.favicon = Some(favicon.into());
        self
    }
}

/// Search endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as the service understood it.
    #[serde(default)]
    pub query: Option<String>,
    /// Direct answer, if requested and available.
    #[serde(default)]
    pub answer: Option<String>,
    /// Ranked results.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<SearchResult>,
    /// Query-related images.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<ImageEntry>,
    /// Response time in seconds.
    #[serde(default)]
    pub response_time: Option<f64>,
}

impl SearchResponse {
    /// Create a response from results.
    #[must_use]
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    /// Set the answer.
    #[must_use]
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Set the images.
    #[must_use]
    pub fn with_images(mut self, images: Vec<ImageEntry>) -> Self {
        self.images = images;
        self
    }

    /// The answer, if present and non-empty.
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref().filter(|a| !a.trim().is_empty())
    }
}

/// Content extracted from one URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Source URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Extracted content.
    #[serde(default)]
    pub raw_content: Option<String>,
    /// Images found on the page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<ImageEntry>,
    /// Favicon URL, if requested.
    #[serde(default)]
    pub favicon: Option<String>,
}

impl ExtractResult {
    /// Create a result for a URL.
    #[must_use]
    pub fn new(url: impl Into<String>, raw_content: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            raw_content: Some(raw_content.into()),
            ..Default::default()
        }
    }

    /// Set the images.
    #[must_use]
    pub fn with_images(mut self, images: Vec<ImageEntry>) -> Self {
        self.images = images;
        self
    }

    /// Set the favicon.
    #[must_use]
    pub fn with_favicon(mut self, favicon: impl Into<String>) -> Self {
        self.favicon = Some(favicon.into());
        self
    }
}

/// A URL the service could not extract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FailedExtraction {
    /// The URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Reason given by the service.
    #[serde(default)]
    pub error: Option<String>,
}

/// Extract endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Successfully extracted pages.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<ExtractResult>,
    /// URLs that failed.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub failed_results: Vec<FailedExtraction>,
    /// Response time in seconds.
    #[serde(default)]
    pub response_time: Option<f64>,
}

impl ExtractResponse {
    /// Create a response from results.
    #[must_use]
    pub fn new(results: Vec<ExtractResult>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    /// Set the failed URLs.
    #[must_use]
    pub fn with_failures(mut self, failed: Vec<FailedExtraction>) -> Self {
        self.failed_results = failed;
        self
    }
}

/// One page visited by a crawl.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrawlPage {
    /// Page URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Extracted content.
    #[serde(default)]
    pub raw_content: Option<String>,
    /// Favicon URL, if requested.
    #[serde(default)]
    pub favicon: Option<String>,
}

impl CrawlPage {
    /// Create a page.
    #[must_use]
    pub fn new(url: impl Into<String>, raw_content: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            raw_content: Some(raw_content.into()),
            favicon: None,
        }
    }
}

/// Crawl endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrawlResponse {
    /// Base URL reported by the service.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Visited pages.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<CrawlPage>,
    /// Response time in seconds.
    #[serde(default)]
    pub response_time: Option<f64>,
}

/// Map endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapResponse {
    /// Base URL reported by the service.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Discovered URLs.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<String>,
    /// Response time in seconds.
    #[serde(default)]
    pub response_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_image_entries() {
        let images: Vec<ImageEntry> = serde_json::from_value(json!([
            "https://img.example/a.png",
            {"url": "https://img.example/b.png", "description": "A crab"},
            {"url": "https://img.example/c.png"}
        ]))
        .unwrap();

        assert_eq!(images[0], ImageEntry::url("https://img.example/a.png"));
        assert_eq!(images[1].description(), Some("A crab"));
        assert_eq!(images[2].image_url(), Some("https://img.example/c.png"));
        assert_eq!(images[2].description(), None);
    }

    #[test]
    fn test_search_response_tolerates_missing_fields() {
        let response: SearchResponse = serde_json::from_value(json!({
            "query": "rust",
            "results": [{"url": "https://www.rust-lang.org"}],
            "answer": null
        }))
        .unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title, None);
        assert!(response.images.is_empty());
        assert_eq!(response.answer(), None);
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let search: SearchResponse = serde_json::from_value(json!({
            "answer": null,
            "images": null,
            "results": [{"title": "T1", "images": null}]
        }))
        .unwrap();
        assert_eq!(search.results[0].title.as_deref(), Some("T1"));
        assert!(search.results[0].images.is_empty());
        assert!(search.images.is_empty());

        let extract: ExtractResponse =
            serde_json::from_value(json!({"results": null, "failed_results": null})).unwrap();
        assert_eq!(extract, ExtractResponse::default());

        let crawl: CrawlResponse = serde_json::from_value(json!({"results": null})).unwrap();
        assert!(crawl.results.is_empty());
        let map: MapResponse = serde_json::from_value(json!({"results": null})).unwrap();
        assert!(map.results.is_empty());
    }

    #[test]
    fn test_blank_answer_is_none() {
        let response = SearchResponse::default().with_answer("  ");
        assert_eq!(response.answer(), None);
    }

    #[test]
    fn test_extract_response() {
        let response: ExtractResponse = serde_json::from_value(json!({
            "results": [{"url": "https://example.com", "raw_content": "# Example"}],
            "failed_results": [{"url": "https://broken.example", "error": "timeout"}],
            "response_time": 0.4
        }))
        .unwrap();
        assert_eq!(response.results[0].raw_content.as_deref(), Some("# Example"));
        assert_eq!(response.failed_results[0].error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_map_response() {
        let response: MapResponse = serde_json::from_value(json!({
            "base_url": "https://example.com",
            "results": ["https://example.com/a", "https://example.com/b"]
        }))
        .unwrap();
        assert_eq!(response.results.len(), 2);
    }
}
