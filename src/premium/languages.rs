//! Supported-language lookup for the `lang:` query operator.
//!
//! The premium endpoints reject queries with unknown language codes, so the
//! client cross-checks a caller-supplied code against the set Twitter
//! currently advertises. The lookup is a trait so tests (or callers with
//! their own caching policy) can substitute a fixed set without hitting the
//! network.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::utils::HttpClient;

/// Errors that can occur while fetching the supported-language set
#[derive(Debug, Error)]
pub enum LanguageError {
    /// Network or HTTP transport error
    #[error("network error: {0}")]
    Network(String),

    /// Non-success status from the languages endpoint
    #[error("API error: {0}")]
    Api(String),

    /// Response body could not be decoded
    #[error("parse error: {0}")]
    Parse(String),

    /// The endpoint answered with an empty language list
    #[error("no supported languages were returned")]
    Empty,
}

/// Provider of the set of language codes the search API accepts.
///
/// Implementations must fetch (or hold) the full set of codes valid in a
/// `lang:` clause. The client consults this once per call that supplies a
/// language, never caching the result between calls.
#[async_trait]
pub trait LanguageLookup: Send + Sync + std::fmt::Debug {
    /// Return the currently supported language codes.
    async fn available_languages(&self) -> Result<HashSet<String>, LanguageError>;
}

/// Entry in the `help/languages.json` response
#[derive(Debug, Deserialize)]
struct LanguageEntry {
    code: String,
}

/// Live lookup against Twitter's `GET /1.1/help/languages.json` endpoint.
#[derive(Debug, Clone)]
pub struct HelpLanguages {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl HelpLanguages {
    const TWITTER_API_BASE: &'static str = "https://api.twitter.com";

    /// Create a lookup against the production Twitter API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, Self::TWITTER_API_BASE)
    }

    /// Create a lookup against a custom base URL.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl LanguageLookup for HelpLanguages {
    async fn available_languages(&self) -> Result<HashSet<String>, LanguageError> {
        let url = format!("{}/1.1/help/languages.json", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| LanguageError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LanguageError::Api(format!(
                "help/languages returned status {}",
                response.status()
            )));
        }

        let entries: Vec<LanguageEntry> = response
            .json()
            .await
            .map_err(|e| LanguageError::Parse(e.to_string()))?;

        let codes: HashSet<String> = entries.into_iter().map(|entry| entry.code).collect();
        if codes.is_empty() {
            return Err(LanguageError::Empty);
        }

        Ok(codes)
    }
}

/// A fixed in-memory language set, mainly for testing.
///
/// Behaves like the live lookup: an empty set is reported as
/// [`LanguageError::Empty`] rather than silently accepted.
#[derive(Debug, Clone, Default)]
pub struct FixedLanguages {
    codes: HashSet<String>,
}

impl FixedLanguages {
    /// Create a lookup that always returns the given codes.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl LanguageLookup for FixedLanguages {
    async fn available_languages(&self) -> Result<HashSet<String>, LanguageError> {
        if self.codes.is_empty() {
            return Err(LanguageError::Empty);
        }
        Ok(self.codes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_languages() {
        let lookup = FixedLanguages::new(["en", "es"]);
        let codes = lookup.available_languages().await.unwrap();

        assert!(codes.contains("en"));
        assert!(codes.contains("es"));
        assert!(!codes.contains("fr"));
    }

    #[tokio::test]
    async fn test_fixed_languages_empty_is_an_error() {
        let lookup = FixedLanguages::default();
        let result = lookup.available_languages().await;

        assert!(matches!(result, Err(LanguageError::Empty)));
    }

    #[tokio::test]
    async fn test_help_languages_parses_codes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/1.1/help/languages.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"code": "en", "name": "English"}, {"code": "es", "name": "Spanish"}]"#)
            .create_async()
            .await;

        let lookup = HelpLanguages::with_base_url("token", server.url());
        let codes = lookup.available_languages().await.unwrap();

        mock.assert_async().await;
        assert_eq!(codes.len(), 2);
        assert!(codes.contains("en"));
        assert!(codes.contains("es"));
    }

    #[tokio::test]
    async fn test_help_languages_empty_list() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/1.1/help/languages.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let lookup = HelpLanguages::with_base_url("token", server.url());
        let result = lookup.available_languages().await;

        assert!(matches!(result, Err(LanguageError::Empty)));
    }

    #[tokio::test]
    async fn test_help_languages_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/1.1/help/languages.json")
            .with_status(503)
            .create_async()
            .await;

        let lookup = HelpLanguages::with_base_url("token", server.url());
        let result = lookup.available_languages().await;

        assert!(matches!(result, Err(LanguageError::Api(_))));
    }

    #[tokio::test]
    async fn test_help_languages_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/1.1/help/languages.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let lookup = HelpLanguages::with_base_url("token", server.url());
        let result = lookup.available_languages().await;

        assert!(matches!(result, Err(LanguageError::Parse(_))));
    }
}
