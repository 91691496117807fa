//! Premium search client with sequential page aggregation.
//!
//! [`PremiumClient`] wraps the paid search endpoints
//! (`/1.1/tweets/search/{plan}/{label}.json`). Each call validates its
//! inputs, optionally cross-checks the language filter, then issues the
//! first page request and follows the server's continuation token for up to
//! `page_count - 1` further requests, concatenating the pages in fetch
//! order.
//!
//! Failure handling is deliberately asymmetric: a failed first page aborts
//! the call (the caller has nothing to act on), while a failed continuation
//! page ends the loop early and whatever was collected so far is returned.

mod languages;

pub use languages::{FixedLanguages, HelpLanguages, LanguageError, LanguageLookup};

use serde::Serialize;
use std::sync::Arc;

use crate::models::{AuthorSearchRequest, SearchPage, SearchRequest, Tweet};
use crate::utils::{
    require_non_empty, validate_page_count, validate_window, HttpClient, ValidationError,
};

const TWITTER_API_BASE: &str = "https://api.twitter.com";

/// Tweets per page, the maximum the premium endpoints allow
const PAGE_SIZE: u32 = 100;

/// Errors that can occur during a premium search call
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Malformed or missing argument, caught before any network I/O
    #[error("invalid request: {0}")]
    Validation(String),

    /// The first page request failed at the transport or HTTP level
    #[error("connection to the search API failed: {0}")]
    Connection(String),

    /// The first page body could not be decoded as JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// The supported-language lookup failed; the cause is attached as the
    /// error source but not distinguished in the message
    #[error("language lookup failed")]
    Dependency(#[source] LanguageError),

    /// Structurally successful responses yielded zero tweets
    #[error("no tweets could be retrieved")]
    EmptyResult,
}

impl From<ValidationError> for SearchError {
    fn from(err: ValidationError) -> Self {
        SearchError::Validation(err.to_string())
    }
}

impl From<LanguageError> for SearchError {
    fn from(err: LanguageError) -> Self {
        SearchError::Dependency(err)
    }
}

/// Request body for the premium search endpoint
#[derive(Debug, Serialize)]
struct SearchBody<'a> {
    query: &'a str,
    #[serde(rename = "fromDate")]
    from_date: &'a str,
    #[serde(rename = "toDate")]
    to_date: &'a str,
    #[serde(rename = "maxResults")]
    max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    next: Option<&'a str>,
}

/// Client for the Twitter Premium Search APIs.
///
/// Holds the bearer token, the product tier (`30day` or `fullarchive`) and
/// the environment label configured in the developer dashboard. The tier is
/// not validated beyond being non-empty; the server rejects unknown values.
#[derive(Debug, Clone)]
pub struct PremiumClient {
    http: HttpClient,
    base_url: String,
    token: String,
    plan: String,
    label: String,
    languages: Arc<dyn LanguageLookup>,
}

impl PremiumClient {
    /// Create a client against the production Twitter API.
    pub fn new(
        token: impl Into<String>,
        plan: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<Self, SearchError> {
        Self::with_base_url(token, plan, label, TWITTER_API_BASE)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(
        token: impl Into<String>,
        plan: impl Into<String>,
        label: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, SearchError> {
        let token = token.into();
        let plan = plan.into();
        let label = label.into();
        let base_url = base_url.into().trim_end_matches('/').to_string();

        require_non_empty("oauth_token", &token)?;
        require_non_empty("plan", &plan)?;
        require_non_empty("label", &label)?;

        let languages = Arc::new(HelpLanguages::with_base_url(&token, &base_url));

        Ok(Self {
            http: HttpClient::new(),
            base_url,
            token,
            plan,
            label,
            languages,
        })
    }

    /// Replace the supported-language lookup.
    pub fn with_language_lookup(mut self, lookup: Arc<dyn LanguageLookup>) -> Self {
        self.languages = lookup;
        self
    }

    /// Replace the HTTP client.
    pub fn with_http_client(mut self, http: HttpClient) -> Self {
        self.http = http;
        self
    }

    /// Search historical tweets matching a free-text query.
    ///
    /// Returns the tweets of up to `page_count` pages concatenated in fetch
    /// order. Fails with [`SearchError::EmptyResult`] when no tweets at all
    /// could be collected.
    pub async fn search_tweets(&self, request: &SearchRequest) -> Result<Vec<Tweet>, SearchError> {
        require_non_empty("query", &request.query)?;
        validate_page_count(request.page_count)?;
        validate_window(&request.from_date, &request.to_date)?;

        let query = self
            .apply_language_filter(request.query.clone(), request.language.as_deref())
            .await?;

        self.collect_pages(
            &query,
            request.page_count,
            &request.from_date,
            &request.to_date,
        )
        .await
    }

    /// Search the historical tweets of a single author.
    ///
    /// Identical to [`search_tweets`](Self::search_tweets) except that the
    /// query is synthesized as `from:<screen_name>`.
    pub async fn search_tweets_by_author(
        &self,
        request: &AuthorSearchRequest,
    ) -> Result<Vec<Tweet>, SearchError> {
        require_non_empty("screen_name", &request.screen_name)?;
        validate_page_count(request.page_count)?;
        validate_window(&request.from_date, &request.to_date)?;

        let query = self
            .apply_language_filter(
                format!("from:{}", request.screen_name),
                request.language.as_deref(),
            )
            .await?;

        self.collect_pages(
            &query,
            request.page_count,
            &request.from_date,
            &request.to_date,
        )
        .await
    }

    /// Cross-check an optional language code and append the `lang:` clause.
    ///
    /// No lookup call is made when no language was supplied.
    async fn apply_language_filter(
        &self,
        mut query: String,
        language: Option<&str>,
    ) -> Result<String, SearchError> {
        let Some(code) = language else {
            return Ok(query);
        };

        let supported = self.languages.available_languages().await?;
        if !supported.contains(code) {
            return Err(SearchError::Validation(format!(
                "unsupported language: {code}"
            )));
        }

        query.push_str(" lang:");
        query.push_str(code);
        Ok(query)
    }

    /// Fetch the first page, then follow continuation tokens within the
    /// page budget, merging results.
    async fn collect_pages(
        &self,
        query: &str,
        page_count: usize,
        from_date: &str,
        to_date: &str,
    ) -> Result<Vec<Tweet>, SearchError> {
        let url = format!(
            "{}/1.1/tweets/search/{}/{}.json",
            self.base_url, self.plan, self.label
        );

        tracing::debug!(%query, pages = page_count, "starting premium search");

        // First page failures are fatal: nothing has been collected yet.
        let page = self
            .fetch_page(&url, query, from_date, to_date, None)
            .await?;

        let mut tweets = match page.results {
            Some(items) => items,
            None => return Err(SearchError::EmptyResult),
        };
        let mut next = page.next;

        for page_number in 1..page_count {
            let Some(token) = next.take() else {
                break;
            };

            // Continuation failures are tolerated: keep what was collected.
            let page = match self
                .fetch_page(&url, query, from_date, to_date, Some(token.as_str()))
                .await
            {
                Ok(page) => page,
                Err(err) => {
                    tracing::warn!(
                        page = page_number + 1,
                        error = %err,
                        "continuation page failed, keeping partial results"
                    );
                    break;
                }
            };

            let Some(items) = page.results else {
                break;
            };
            tweets.extend(items);
            next = page.next;
        }

        if tweets.is_empty() {
            return Err(SearchError::EmptyResult);
        }

        tracing::debug!(count = tweets.len(), "premium search finished");
        Ok(tweets)
    }

    /// Issue one page request and decode its body.
    async fn fetch_page(
        &self,
        url: &str,
        query: &str,
        from_date: &str,
        to_date: &str,
        next: Option<&str>,
    ) -> Result<SearchPage, SearchError> {
        let body = SearchBody {
            query,
            from_date,
            to_date,
            max_results: PAGE_SIZE,
            next,
        };

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Connection(format!(
                "search API returned status {status}"
            )));
        }

        response
            .json::<SearchPage>()
            .await
            .map_err(|e| SearchError::Parse(format!("failed to decode search page: {e}")))
    }
}
