//! Core data models for premium search requests and responses.

mod search;

pub use search::{AuthorSearchRequest, SearchPage, SearchRequest, Tweet};
