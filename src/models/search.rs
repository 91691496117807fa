//! Search request and response models.

use serde::{Deserialize, Serialize};

/// A single tweet as returned by the search endpoint.
///
/// The premium API returns richly nested objects whose layout differs
/// between tiers and enrichment settings, so records are kept opaque and
/// handed to the caller untouched.
pub type Tweet = serde_json::Value;

/// Parameters for a free-text premium search.
///
/// The query string may use the premium operator syntax documented by
/// Twitter (exact phrases, `from:`, `lang:`, and so on). Dates use the
/// compact `yyyymmddhhmm` format the premium endpoints expect and are sent
/// to the server verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Search query, premium operator syntax allowed
    pub query: String,

    /// Number of pages to fetch (100 tweets per page)
    pub page_count: usize,

    /// Start of the time window, `yyyymmddhhmm`
    pub from_date: String,

    /// End of the time window, `yyyymmddhhmm`
    pub to_date: String,

    /// Restrict results to tweets written in this language
    pub language: Option<String>,
}

impl SearchRequest {
    /// Create a request for a single page of results.
    pub fn new(
        query: impl Into<String>,
        from_date: impl Into<String>,
        to_date: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            page_count: 1,
            from_date: from_date.into(),
            to_date: to_date.into(),
            language: None,
        }
    }

    /// Set the number of pages to fetch.
    pub fn page_count(mut self, pages: usize) -> Self {
        self.page_count = pages;
        self
    }

    /// Set the language filter.
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }
}

/// Parameters for a per-author premium search.
///
/// Identical to [`SearchRequest`] except that the query is synthesized from
/// the author's screen name (`from:<screen_name>`) instead of free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorSearchRequest {
    /// Twitter screen name of the author, without the leading `@`
    pub screen_name: String,

    /// Number of pages to fetch (100 tweets per page)
    pub page_count: usize,

    /// Start of the time window, `yyyymmddhhmm`
    pub from_date: String,

    /// End of the time window, `yyyymmddhhmm`
    pub to_date: String,

    /// Restrict results to tweets written in this language
    pub language: Option<String>,
}

impl AuthorSearchRequest {
    /// Create a request for a single page of the author's tweets.
    pub fn new(
        screen_name: impl Into<String>,
        from_date: impl Into<String>,
        to_date: impl Into<String>,
    ) -> Self {
        Self {
            screen_name: screen_name.into(),
            page_count: 1,
            from_date: from_date.into(),
            to_date: to_date.into(),
            language: None,
        }
    }

    /// Set the number of pages to fetch.
    pub fn page_count(mut self, pages: usize) -> Self {
        self.page_count = pages;
        self
    }

    /// Set the language filter.
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }
}

/// One page of the search endpoint's response.
///
/// Both fields are optional on the wire: `results` is absent on some error
/// payloads even when the HTTP status is a success, and `next` is absent on
/// the final page of a query.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    /// Tweets on this page, in server order
    pub results: Option<Vec<Tweet>>,

    /// Continuation token for the next page
    pub next: Option<String>,
}
