//! # tavily-recon-core
//!
//! Core types for the tavily-recon facade over the Tavily search API.
//!
//! This crate holds everything that does not touch the network:
//!
//! - **Config**: credential, base URL, timeout and failure policies
//! - **Errors**: the [`ReconError`] taxonomy shared by the workspace
//! - **Requests**: caller parameters and their normalization into API payloads
//! - **Responses**: tolerant decoders for the search, extract, crawl and map endpoints
//! - **Format**: deterministic plain-text reports for agents
//!
//! ## Example
//!
//! ```rust
//! use tavily_recon_core::{
//!     format::{format_listing, ListingStyle},
//!     request::{SearchParams, SearchRequest},
//!     response::{SearchResponse, SearchResult},
//! };
//!
//! let request = SearchRequest::from_params(&SearchParams::new("rust").with_max_results(100))?;
//! assert_eq!(request.max_results, 20);
//!
//! let response = SearchResponse::new(vec![SearchResult::new("Rust", "https://www.rust-lang.org", "")]);
//! let report = format_listing(&response, &request.query, &ListingStyle::plain());
//! assert!(report.starts_with("Result 1:\nTitle: Rust\n"));
//! # Ok::<(), tavily_recon_core::ReconError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod format;
pub mod operation;
pub mod request;
pub mod response;

pub use config::{Endpoint, TavilyConfig};
pub use errors::{ReconError, Result};
pub use operation::{FailurePolicy, Operation};
pub use request::{
    ContentFormat, CrawlParams, CrawlRequest, DomainSearchParams, ExtractParams, ExtractRequest,
    MapParams, MapRequest, NewsParams, QueryParams, SearchDepth, SearchParams, SearchRequest,
    TimeRange, Topic,
};
pub use response::{
    CrawlPage, CrawlResponse, ExtractResponse, ExtractResult, FailedExtraction, ImageEntry,
    MapResponse, SearchResponse, SearchResult,
};
