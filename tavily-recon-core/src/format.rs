//! Plain-text report rendering.
//!
//! Reports are what the calling agent reads, so their layout is part of the
//! contract: results keep the order the service returned them in, every
//! listed field is printed (with [`PLACEHOLDER`] when the service left it
//! out), and long page content is cut to a fixed preview length.
//!
//! Everything here is pure; the client feeds it decoded responses.
//!
//! # Example
//!
//! ```rust
//! use tavily_recon_core::format::{format_listing, ListingStyle};
//! use tavily_recon_core::response::{SearchResponse, SearchResult};
//!
//! let response = SearchResponse::new(vec![
//!     SearchResult::new("Rust", "https://www.rust-lang.org", "A language").with_score(0.912),
//! ]);
//! let report = format_listing(&response, "rust", &ListingStyle::plain());
//! assert!(report.contains("Score: 0.91\n"));
//! ```

use std::borrow::Cow;

use crate::request::SearchRequest;
use crate::response::{CrawlResponse, ExtractResponse, ImageEntry, MapResponse, SearchResponse};

/// Printed in place of a field the service did not return.
pub const PLACEHOLDER: &str = "N/A";

/// Appended to content cut at [`PREVIEW_CHARS`].
pub const ELLIPSIS: &str = "...";

/// Length of content previews, in characters.
pub const PREVIEW_CHARS: usize = 200;

/// Images listed per page in extraction reports.
pub const MAX_EXTRACT_IMAGES: usize = 20;

/// Report of the answer lookup when the service has no answer.
pub const NO_ANSWER: &str = "No answer found or search error occurred.";

/// Report of any listing that has nothing to list.
#[must_use]
pub fn no_results(subject: &str) -> String {
    format!("No results found for '{subject}'.")
}

/// Cut `text` to `max_chars` characters plus [`ELLIPSIS`].
///
/// Text at or under the limit is returned unchanged.
#[must_use]
pub fn truncate_preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Render a relevance score with two decimals.
#[must_use]
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| PLACEHOLDER.to_string(), |s| format!("{s:.2}"))
}

fn or_placeholder(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn result_limit(max_results: u32) -> usize {
    usize::try_from(max_results).unwrap_or(usize::MAX)
}

/// Layout of the numbered result listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingStyle {
    /// Text printed once before the first block.
    pub header: Option<String>,
    /// Block label, printed as `<label> <n>:`.
    pub label: &'static str,
    /// Print per-result image URLs and the response's image section.
    pub images: bool,
    /// Print a truncated preview of each result's raw content.
    pub raw_preview: bool,
    /// List at most this many results.
    pub limit: Option<usize>,
}

impl ListingStyle {
    /// Unadorned `Result <n>:` blocks.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            header: None,
            label: "Result",
            images: false,
            raw_preview: false,
            limit: None,
        }
    }

    /// Cap the listing at the requested result count.
    #[must_use]
    pub fn with_limit(mut self, max_results: u32) -> Self {
        self.limit = Some(result_limit(max_results));
        self
    }

    /// Blocks with image URLs.
    #[must_use]
    pub fn images() -> Self {
        Self {
            images: true,
            ..Self::plain()
        }
    }

    /// News listing.
    #[must_use]
    pub fn news(query: &str) -> Self {
        Self {
            header: Some(format!("News search results for: {query}\n\n")),
            label: "News",
            ..Self::plain()
        }
    }

    /// Research listing with raw content previews.
    #[must_use]
    pub fn research(query: &str) -> Self {
        Self {
            header: Some(format!("Research results for: {query}\n\n")),
            label: "Research Result",
            raw_preview: true,
            ..Self::plain()
        }
    }

    /// Listing scoped to some domains.
    #[must_use]
    pub fn domain(query: &str, domains: &[String]) -> Self {
        Self {
            header: Some(format!(
                "Domain search results for '{query}' in {}:\n\n",
                domains.join(", ")
            )),
            ..Self::plain()
        }
    }
}

/// Render a numbered listing of search results.
///
/// `subject` names what was searched for in the no-results report.
#[must_use]
pub fn format_listing(response: &SearchResponse, subject: &str, style: &ListingStyle) -> String {
    if response.results.is_empty() {
        return no_results(subject);
    }

    let limit = style.limit.unwrap_or(usize::MAX);
    let mut out = style.header.clone().unwrap_or_default();
    for (i, result) in response.results.iter().take(limit).enumerate() {
        out.push_str(&format!("{} {}:\n", style.label, i + 1));
        out.push_str(&format!("Title: {}\n", or_placeholder(&result.title)));
        out.push_str(&format!("URL: {}\n", or_placeholder(&result.url)));
        out.push_str(&format!("Content: {}\n", or_placeholder(&result.content)));
        out.push_str(&format!("Score: {}\n", format_score(result.score)));
        out.push_str(&format!(
            "Published Date: {}\n",
            or_placeholder(&result.published_date)
        ));

        if style.images {
            let urls: Vec<&str> = result
                .images
                .iter()
                .filter_map(ImageEntry::image_url)
                .collect();
            if !urls.is_empty() {
                out.push_str(&format!("Images: {}\n", urls.join(", ")));
            }
        }

        if style.raw_preview {
            if let Some(raw) = non_empty(&result.raw_content) {
                out.push_str(&format!(
                    "Raw Content Preview: {}\n",
                    truncate_preview(raw, PREVIEW_CHARS)
                ));
            }
        }

        out.push('\n');
    }

    if style.images && !response.images.is_empty() {
        out.push_str("Images:\n");
        for (i, image) in response.images.iter().enumerate() {
            out.push_str(&format!(
                "[{}] URL: {}\n",
                i + 1,
                image.image_url().unwrap_or(PLACEHOLDER)
            ));
            if let Some(description) = image.description() {
                out.push_str(&format!("   Description: {description}\n"));
            }
        }
    }

    out
}

/// Render the full-featured search report.
///
/// Optional sections follow what `request` asked for: raw content,
/// favicons and the image section only appear when requested. An answer
/// without results is still a no-results report.
#[must_use]
pub fn format_search(response: &SearchResponse, request: &SearchRequest) -> String {
    if response.results.is_empty() {
        return no_results(&request.query);
    }

    let mut out = Vec::new();
    if let Some(answer) = response.answer() {
        out.push(format!("Answer: {answer}"));
        out.push(String::new());
    }

    out.push("Detailed Results:".to_string());
    for result in response.results.iter().take(result_limit(request.max_results)) {
        out.push(format!("\nTitle: {}", or_placeholder(&result.title)));
        out.push(format!("URL: {}", or_placeholder(&result.url)));
        out.push(format!("Content: {}", or_placeholder(&result.content)));
        out.push(format!("Score: {}", format_score(result.score)));
        out.push(format!(
            "Published Date: {}",
            or_placeholder(&result.published_date)
        ));

        if request.include_raw_content {
            if let Some(raw) = non_empty(&result.raw_content) {
                out.push(format!("Raw Content: {raw}"));
            }
        }
        if request.include_favicon {
            if let Some(favicon) = non_empty(&result.favicon) {
                out.push(format!("Favicon: {favicon}"));
            }
        }
    }

    if request.include_images && !response.images.is_empty() {
        out.push("\nImages:".to_string());
        for (i, image) in response.images.iter().enumerate() {
            out.push(format!(
                "\n[{}] URL: {}",
                i + 1,
                image.image_url().unwrap_or(PLACEHOLDER)
            ));
            if let Some(description) = image.description() {
                out.push(format!("   Description: {description}"));
            }
        }
    }

    out.join("\n")
}

/// Render the direct-answer report.
#[must_use]
pub fn format_answer(query: &str, answer: Option<&str>) -> String {
    match answer.filter(|a| !a.trim().is_empty()) {
        Some(answer) => format!("Answer for '{query}':\n\n{answer}"),
        None => NO_ANSWER.to_string(),
    }
}

/// Render an extraction report.
///
/// Full content is printed; image lists are capped at
/// [`MAX_EXTRACT_IMAGES`] entries per page. Failed URLs are only listed
/// alongside at least one extracted page.
#[must_use]
pub fn format_extract(
    response: &ExtractResponse,
    urls: &[String],
    include_images: bool,
    include_favicon: bool,
) -> String {
    if response.results.is_empty() {
        return no_results(&urls.join(", "));
    }

    let mut out = vec!["Detailed Results:".to_string()];
    for result in &response.results {
        out.push(format!("\nURL: {}", or_placeholder(&result.url)));

        if let Some(raw) = non_empty(&result.raw_content) {
            out.push(format!("Content: {raw}"));
        }
        if include_favicon {
            if let Some(favicon) = non_empty(&result.favicon) {
                out.push(format!("Favicon: {favicon}"));
            }
        }
        if include_images && !result.images.is_empty() {
            out.push(format!("\nImages ({} found):", result.images.len()));
            for (i, image) in result.images.iter().take(MAX_EXTRACT_IMAGES).enumerate() {
                out.push(format!(
                    "  [{}] {}",
                    i + 1,
                    image.image_url().unwrap_or(PLACEHOLDER)
                ));
                if let Some(description) = image.description() {
                    out.push(format!("      Description: {description}"));
                }
            }
        }
    }

    if !response.failed_results.is_empty() {
        out.push("\nFailed URLs:".to_string());
        for failed in &response.failed_results {
            out.push(format!(
                "  - {}: {}",
                or_placeholder(&failed.url),
                non_empty(&failed.error).unwrap_or("unknown error")
            ));
        }
    }

    out.join("\n")
}

/// Render a crawl report with content previews.
#[must_use]
pub fn format_crawl(response: &CrawlResponse, root_url: &str, include_favicon: bool) -> String {
    if response.results.is_empty() {
        return no_results(root_url);
    }

    let mut out = vec![
        "Crawl Results:".to_string(),
        format!(
            "Base URL: {}",
            non_empty(&response.base_url).unwrap_or(root_url)
        ),
        "\nCrawled Pages:".to_string(),
    ];
    for (i, page) in response.results.iter().enumerate() {
        out.push(format!("\n[{}] URL: {}", i + 1, or_placeholder(&page.url)));
        if let Some(raw) = non_empty(&page.raw_content) {
            out.push(format!("Content: {}", truncate_preview(raw, PREVIEW_CHARS)));
        }
        if include_favicon {
            if let Some(favicon) = non_empty(&page.favicon) {
                out.push(format!("Favicon: {favicon}"));
            }
        }
    }

    out.join("\n")
}

/// Render a site map report.
#[must_use]
pub fn format_map(response: &MapResponse, root_url: &str) -> String {
    if response.results.is_empty() {
        return no_results(root_url);
    }

    let mut out = vec![
        "Site Map Results:".to_string(),
        format!(
            "Base URL: {}",
            non_empty(&response.base_url).unwrap_or(root_url)
        ),
        "\nMapped Pages:".to_string(),
    ];
    for (i, url) in response.results.iter().enumerate() {
        out.push(format!("\n[{}] URL: {url}", i + 1));
    }

    out.join("\n")
}
