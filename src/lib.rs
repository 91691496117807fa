//! # Twitter Archive Search
//!
//! A client library for the Twitter Premium Search APIs: the paid `30day`
//! and `fullarchive` product tiers that expose historical tweets.
//!
//! The library validates caller-supplied parameters, issues authenticated
//! requests against the search endpoint of a configured environment, and
//! follows the server-supplied continuation token to aggregate multiple
//! pages of results into one ordered collection.
//!
//! ## Architecture
//!
//! - [`models`]: Request builders and wire-level response models
//! - [`premium`]: The [`PremiumClient`] with the pagination aggregator and
//!   the injectable language lookup
//! - [`utils`]: HTTP client wrapper and input validation helpers
//!
//! ## Example
//!
//! ```rust,no_run
//! use twitter_archive_search::{PremiumClient, SearchRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PremiumClient::new("<bearer token>", "fullarchive", "prod")?;
//!
//! let request = SearchRequest::new("rust lang", "201901010000", "201902010000")
//!     .page_count(3)
//!     .language("en");
//!
//! let tweets = client.search_tweets(&request).await?;
//! println!("retrieved {} tweets", tweets.len());
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod premium;
pub mod utils;

// Re-export commonly used types
pub use models::{AuthorSearchRequest, SearchPage, SearchRequest, Tweet};
pub use premium::{
    FixedLanguages, HelpLanguages, LanguageError, LanguageLookup, PremiumClient, SearchError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
