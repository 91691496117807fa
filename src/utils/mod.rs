//! Utility modules supporting the premium search client.
//!
//! - [`HttpClient`]: HTTP client wrapper with sensible defaults
//! - [`parse_compact_timestamp`]: Parse the premium API's `yyyymmddhhmm` dates
//! - [`validate_window`]: Check that a search window is well formed and ordered
//! - [`ValidationError`]: Errors produced by input validation

mod http;
mod validate;

pub use http::HttpClient;
pub use validate::{
    parse_compact_timestamp, require_non_empty, validate_page_count, validate_window,
    ValidationError,
};
