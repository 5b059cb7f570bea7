//! The operation facade.
//!
//! Every operation runs the same pipeline: check the credential, normalize
//! the caller's parameters, dispatch one request, and format the response.
//! A failed dispatch is either returned or rendered as the operation's
//! "nothing found" report, depending on its [`FailurePolicy`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use tavily_recon_core::format::{self, ListingStyle};
use tavily_recon_core::{
    CrawlParams, CrawlRequest, CrawlResponse, DomainSearchParams, Endpoint, ExtractParams,
    ExtractRequest, ExtractResponse, FailurePolicy, MapParams, MapRequest, MapResponse,
    NewsParams, Operation, QueryParams, ReconError, Result, SearchParams, SearchRequest,
    SearchResponse, TavilyConfig,
};

use crate::transport::{HttpTransport, Transport};

/// Facade over the Tavily search, extract, crawl and map endpoints.
///
/// Each method returns the formatted report the calling agent reads.
#[derive(Clone)]
pub struct TavilyClient {
    config: TavilyConfig,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for TavilyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TavilyClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TavilyClient {
    /// Create a client that talks HTTP to the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    /// A missing credential is only reported when an operation runs.
    pub fn new(config: TavilyConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a custom transport.
    #[must_use]
    pub fn with_transport(config: TavilyConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// The client's configuration.
    #[must_use]
    pub fn config(&self) -> &TavilyConfig {
        &self.config
    }

    /// Full-featured web search.
    pub async fn search(&self, params: &SearchParams) -> Result<String> {
        let api_key = self.config.validate()?;
        let request = SearchRequest::from_params(params)?;
        let outcome = self
            .dispatch::<_, SearchResponse>(Operation::Search, Endpoint::Search, api_key, &request)
            .await
            .map(|response| format::format_search(&response, &request));
        self.settle(Operation::Search, outcome, || format::no_results(&request.query))
    }

    /// Search with image URLs attached to the report.
    pub async fn search_with_images(&self, params: &QueryParams) -> Result<String> {
        self.listing(
            Operation::SearchWithImages,
            SearchRequest::with_images(params),
            |_| ListingStyle::images(),
        )
        .await
    }

    /// Recency-filtered news search.
    pub async fn news_search(&self, params: &NewsParams) -> Result<String> {
        self.listing(Operation::NewsSearch, SearchRequest::news(params), |r| {
            ListingStyle::news(&r.query)
        })
        .await
    }

    /// Advanced search with raw content previews.
    pub async fn research(&self, params: &QueryParams) -> Result<String> {
        self.listing(Operation::Research, SearchRequest::research(params), |r| {
            ListingStyle::research(&r.query)
        })
        .await
    }

    /// Search restricted to allow-listed domains.
    pub async fn domain_search(&self, params: &DomainSearchParams) -> Result<String> {
        self.listing(Operation::DomainSearch, SearchRequest::domain(params), |r| {
            ListingStyle::domain(&r.query, &r.include_domains)
        })
        .await
    }

    /// Direct answer to a question.
    ///
    /// Never falls back to listing results.
    pub async fn get_answer(&self, query: &str) -> Result<String> {
        let api_key = self.config.validate()?;
        let request = SearchRequest::answer(query)?;
        let outcome = self
            .dispatch::<_, SearchResponse>(
                Operation::GetAnswer,
                Endpoint::Search,
                api_key,
                &request,
            )
            .await
            .map(|response| format::format_answer(&request.query, response.answer()));
        self.settle(Operation::GetAnswer, outcome, || format::NO_ANSWER.to_string())
    }

    /// Extract the content of one or more pages.
    pub async fn extract(&self, params: &ExtractParams) -> Result<String> {
        let api_key = self.config.validate()?;
        let request = ExtractRequest::from_params(params)?;
        let outcome = self
            .dispatch::<_, ExtractResponse>(
                Operation::Extract,
                Endpoint::Extract,
                api_key,
                &request,
            )
            .await
            .map(|response| {
                format::format_extract(
                    &response,
                    &request.urls,
                    request.include_images,
                    request.include_favicon,
                )
            });
        self.settle(Operation::Extract, outcome, || {
            format::no_results(&request.urls.join(", "))
        })
    }

    /// Crawl from a root URL, previewing each page's content.
    pub async fn crawl(&self, params: &CrawlParams) -> Result<String> {
        let api_key = self.config.validate()?;
        let request = CrawlRequest::from_params(params)?;
        let outcome = self
            .dispatch::<_, CrawlResponse>(Operation::Crawl, Endpoint::Crawl, api_key, &request)
            .await
            .map(|response| format::format_crawl(&response, &request.url, request.include_favicon));
        self.settle(Operation::Crawl, outcome, || format::no_results(&request.url))
    }

    /// Discover the URLs of a site without fetching content.
    pub async fn map(&self, params: &MapParams) -> Result<String> {
        let api_key = self.config.validate()?;
        let request = MapRequest::from_params(params)?;
        let outcome = self
            .dispatch::<_, MapResponse>(Operation::Map, Endpoint::Map, api_key, &request)
            .await
            .map(|response| format::format_map(&response, &request.url));
        self.settle(Operation::Map, outcome, || format::no_results(&request.url))
    }

    /// Shared pipeline of the numbered-listing searches.
    async fn listing<F>(
        &self,
        operation: Operation,
        request: Result<SearchRequest>,
        style: F,
    ) -> Result<String>
    where
        F: FnOnce(&SearchRequest) -> ListingStyle,
    {
        let api_key = self.config.validate()?;
        let request = request?;
        let outcome = self
            .dispatch::<_, SearchResponse>(operation, Endpoint::Search, api_key, &request)
            .await
            .map(|response| {
                let style = style(&request).with_limit(request.max_results);
                format::format_listing(&response, &request.query, &style)
            });
        self.settle(operation, outcome, || format::no_results(&request.query))
    }

    async fn dispatch<B, T>(
        &self,
        operation: Operation,
        endpoint: Endpoint,
        api_key: &str,
        request: &B,
    ) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(request)?;
        debug!(operation = %operation, endpoint = %endpoint, "dispatching Tavily request");
        let value = self.transport.post(endpoint, api_key, body).await?;
        serde_json::from_value(value)
            .map_err(|e| ReconError::decode(format!("unexpected {endpoint} response: {e}")))
    }

    /// Apply the operation's failure policy to a finished call.
    fn settle(
        &self,
        operation: Operation,
        outcome: Result<String>,
        degraded: impl FnOnce() -> String,
    ) -> Result<String> {
        match outcome {
            Err(err)
                if err.is_transport_failure()
                    && self.config.failure_policy(operation) == FailurePolicy::Degrade =>
            {
                warn!(operation = %operation, error = %err, "Tavily call failed, returning empty report");
                Ok(degraded())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value as JsonValue};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tavily_recon_core::request::TimeRange;

    type Reply = Box<dyn Fn() -> Result<JsonValue> + Send + Sync>;

    struct MockTransport {
        calls: AtomicUsize,
        requests: Mutex<Vec<(Endpoint, JsonValue)>>,
        reply: Reply,
    }

    impl MockTransport {
        fn replying(body: JsonValue) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
                reply: Box::new(move || Ok(body.clone())),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
                reply: Box::new(|| Err(ReconError::api(500, "Internal Server Error"))),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_request(&self) -> (Endpoint, JsonValue) {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn post(
            &self,
            endpoint: Endpoint,
            api_key: &str,
            body: JsonValue,
        ) -> Result<JsonValue> {
            assert_eq!(api_key, "tvly-test");
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push((endpoint, body));
            (self.reply)()
        }
    }

    fn client(transport: Arc<MockTransport>) -> TavilyClient {
        TavilyClient::with_transport(TavilyConfig::new("tvly-test"), transport)
    }

    async fn run_every_operation(client: &TavilyClient) -> Vec<Result<String>> {
        vec![
            client.search(&SearchParams::new("q")).await,
            client.search_with_images(&QueryParams::new("q")).await,
            client.news_search(&NewsParams::new("q")).await,
            client.research(&QueryParams::new("q")).await,
            client.get_answer("q").await,
            client
                .domain_search(&DomainSearchParams::new("q", vec!["docs.rs".into()]))
                .await,
            client
                .extract(&ExtractParams::new(vec!["https://example.com".into()]))
                .await,
            client.crawl(&CrawlParams::new("https://example.com")).await,
            client.map(&MapParams::new("https://example.com")).await,
        ]
    }

    #[tokio::test]
    async fn test_missing_credential_never_dispatches() {
        let transport = MockTransport::replying(json!({"results": []}));
        let client = TavilyClient::with_transport(TavilyConfig::default(), transport.clone());

        let outcomes = run_every_operation(&client).await;
        assert_eq!(outcomes.len(), Operation::ALL.len());
        for outcome in outcomes {
            assert!(outcome.unwrap_err().is_configuration());
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_configuration_error_is_never_degraded() {
        let transport = MockTransport::failing();
        let config = TavilyConfig::new("  ")
            .with_failure_policy(Operation::Search, FailurePolicy::Degrade);
        let client = TavilyClient::with_transport(config, transport.clone());

        let err = client.search(&SearchParams::new("q")).await.unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_zero_results_render_sentinel_everywhere() {
        let bodies = [
            json!({"results": []}),
            json!({
                "answer": "42",
                "results": [],
                "images": ["https://img/a.png"],
                "failed_results": [{"url": "https://example.com", "error": "404"}]
            }),
            json!({"answer": null, "results": null, "images": null, "failed_results": null}),
        ];

        for body in bodies {
            let answered = body["answer"] == "42";
            let transport = MockTransport::replying(body);
            let client = client(transport.clone());

            for (operation, outcome) in Operation::ALL.iter().zip(run_every_operation(&client).await) {
                let report = outcome.unwrap();
                match operation {
                    Operation::GetAnswer if answered => assert_eq!(report, "Answer for 'q':\n\n42"),
                    Operation::GetAnswer => assert_eq!(report, format::NO_ANSWER),
                    Operation::Extract | Operation::Crawl | Operation::Map => {
                        assert_eq!(report, "No results found for 'https://example.com'.");
                    }
                    _ => assert_eq!(report, "No results found for 'q'.", "{operation}"),
                }
            }
            assert_eq!(transport.calls(), Operation::ALL.len());
        }
    }

    #[tokio::test]
    async fn test_null_lists_still_render_results() {
        let transport = MockTransport::replying(json!({
            "answer": null,
            "images": null,
            "results": [{"title": "T1", "url": "https://one", "content": "c1", "score": 0.9, "images": null}]
        }));
        let report = client(transport).search(&SearchParams::new("q")).await.unwrap();
        assert_eq!(
            report,
            "Detailed Results:\n\nTitle: T1\nURL: https://one\nContent: c1\nScore: 0.90\nPublished Date: N/A"
        );
    }

    #[tokio::test]
    async fn test_listing_stops_at_requested_limit() {
        let transport = MockTransport::replying(json!({
            "results": [
                {"title": "T1", "url": "https://one"},
                {"title": "T2", "url": "https://two"},
                {"title": "T3", "url": "https://three"}
            ]
        }));
        let report = client(transport)
            .research(&QueryParams::new("q").with_limit(2))
            .await
            .unwrap();
        assert!(report.contains("Research Result 2:\n"));
        assert!(!report.contains("T3"));
    }

    #[tokio::test]
    async fn test_listing_round_trip() {
        let transport = MockTransport::replying(json!({
            "query": "X",
            "results": [
                {"title": "T1", "url": "https://one", "content": "c1", "score": 0.91},
                {"title": "T2", "url": "https://two", "content": "c2", "score": 0.77}
            ]
        }));
        let client = client(transport.clone());

        let report = client
            .search_with_images(&QueryParams::new("X").with_limit(2))
            .await
            .unwrap();

        let (endpoint, payload) = transport.last_request();
        assert_eq!(endpoint, Endpoint::Search);
        assert_eq!(payload["max_results"], 2);
        assert_eq!(payload["include_images"], true);

        let t1 = report.find("Title: T1").unwrap();
        let t2 = report.find("Title: T2").unwrap();
        assert!(t1 < t2);
        assert!(report.contains("Score: 0.91\n"));
        assert!(report.contains("Score: 0.77\n"));
    }

    #[tokio::test]
    async fn test_search_payload_and_report() {
        let transport = MockTransport::replying(json!({
            "answer": "Rust is a systems language.",
            "results": [{"title": "Rust", "url": "https://www.rust-lang.org", "content": "c", "score": 0.5}],
            "images": ["https://img/rust.png"]
        }));
        let client = client(transport.clone());

        let params = SearchParams::new("rust")
            .with_max_results(1)
            .with_images(true)
            .with_time_range(TimeRange::Week);
        let report = client.search(&params).await.unwrap();

        let (_, payload) = transport.last_request();
        assert_eq!(payload["max_results"], 5);
        assert_eq!(payload["time_range"], "week");
        assert!(payload.get("include_domains").is_none());

        assert!(report.starts_with("Answer: Rust is a systems language.\n\nDetailed Results:\n"));
        assert!(report.ends_with("Images:\n\n[1] URL: https://img/rust.png"));
    }

    #[tokio::test]
    async fn test_search_propagates_failures() {
        let transport = MockTransport::failing();
        let err = client(transport).search(&SearchParams::new("q")).await.unwrap_err();
        assert!(matches!(err, ReconError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_news_degrades_failures() {
        let transport = MockTransport::failing();
        let report = client(transport.clone())
            .news_search(&NewsParams::new("AI news"))
            .await
            .unwrap();
        assert_eq!(report, "No results found for 'AI news'.");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_answer_degrades_failures() {
        let report = client(MockTransport::failing())
            .get_answer("What is Rust?")
            .await
            .unwrap();
        assert_eq!(report, format::NO_ANSWER);
    }

    #[tokio::test]
    async fn test_policy_override() {
        let config = TavilyConfig::new("tvly-test")
            .with_failure_policy(Operation::Research, FailurePolicy::Propagate)
            .with_failure_policy(Operation::Map, FailurePolicy::Degrade);
        let client = TavilyClient::with_transport(config, MockTransport::failing());

        assert!(client.research(&QueryParams::new("q")).await.is_err());
        assert_eq!(
            client.map(&MapParams::new("https://docs.rs")).await.unwrap(),
            "No results found for 'https://docs.rs'."
        );
    }

    #[tokio::test]
    async fn test_invalid_request_never_dispatches() {
        let transport = MockTransport::replying(json!({}));
        let client = client(transport.clone());

        let err = client.research(&QueryParams::new("  ")).await.unwrap_err();
        assert!(matches!(err, ReconError::InvalidRequest(_)));
        let err = client.extract(&ExtractParams::new(vec![])).await.unwrap_err();
        assert!(matches!(err, ReconError::InvalidRequest(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        let transport = MockTransport::replying(json!({"results": "not a list"}));
        let err = client(transport)
            .search(&SearchParams::new("q"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReconError::Decode(_)));
    }

    #[tokio::test]
    async fn test_get_answer() {
        let transport = MockTransport::replying(json!({"answer": "A language.", "results": []}));
        let report = client(transport.clone()).get_answer("What is Rust?").await.unwrap();
        assert_eq!(report, "Answer for 'What is Rust?':\n\nA language.");

        let (_, payload) = transport.last_request();
        assert_eq!(payload["max_results"], 1);
        assert_eq!(payload["include_answer"], true);
    }

    #[tokio::test]
    async fn test_domain_search() {
        let transport = MockTransport::replying(json!({
            "results": [{"title": "Book", "url": "https://doc.rust-lang.org/book", "content": "c"}]
        }));
        let report = client(transport.clone())
            .domain_search(
                &DomainSearchParams::new("book", vec!["doc.rust-lang.org".into()]).with_limit(50),
            )
            .await
            .unwrap();

        let (_, payload) = transport.last_request();
        assert_eq!(payload["include_domains"], json!(["doc.rust-lang.org"]));
        assert_eq!(payload["include_answer"], false);
        assert_eq!(payload["max_results"], 20);
        assert!(report.starts_with("Domain search results for 'book' in doc.rust-lang.org:\n\n"));
        assert!(report.contains("Score: N/A\n"));
    }

    #[tokio::test]
    async fn test_extract() {
        let transport = MockTransport::replying(json!({
            "results": [{"url": "https://example.com", "raw_content": "Example Domain"}],
            "failed_results": []
        }));
        let report = client(transport.clone())
            .extract(
                &ExtractParams::new(vec!["https://example.com".into()]).with_images(true),
            )
            .await
            .unwrap();

        let (endpoint, payload) = transport.last_request();
        assert_eq!(endpoint, Endpoint::Extract);
        assert_eq!(payload["include_images"], true);
        assert_eq!(
            report,
            "Detailed Results:\n\nURL: https://example.com\nContent: Example Domain"
        );
    }

    #[tokio::test]
    async fn test_crawl_and_map() {
        let transport = MockTransport::replying(json!({
            "base_url": "https://docs.rs",
            "results": [{"url": "https://docs.rs/about", "raw_content": "About docs.rs"}]
        }));
        let report = client(transport.clone())
            .crawl(&CrawlParams::new("https://docs.rs"))
            .await
            .unwrap();
        assert_eq!(
            report,
            "Crawl Results:\nBase URL: https://docs.rs\n\nCrawled Pages:\n\n\
             [1] URL: https://docs.rs/about\nContent: About docs.rs"
        );
        assert_eq!(transport.last_request().0, Endpoint::Crawl);

        let transport = MockTransport::replying(json!({
            "base_url": "https://docs.rs",
            "results": ["https://docs.rs/about"]
        }));
        let report = client(transport.clone())
            .map(&MapParams::new("https://docs.rs").with_max_depth(3))
            .await
            .unwrap();
        assert!(report.ends_with("Mapped Pages:\n\n[1] URL: https://docs.rs/about"));
        let (endpoint, payload) = transport.last_request();
        assert_eq!(endpoint, Endpoint::Map);
        assert_eq!(payload["max_depth"], 3);
    }
}
