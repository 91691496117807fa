//! Input validation for search parameters.
//!
//! All checks here run before any network I/O. The premium endpoints use a
//! compact `yyyymmddhhmm` date format with no separators, which is parsed
//! strictly: exactly twelve ASCII digits naming a real calendar instant.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Validation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be a non-empty string")]
    EmptyField(&'static str),

    #[error("page_count must be a positive integer")]
    BadPageCount,

    #[error("incorrect date format for `{0}`, it should be `yyyymmddhhmm`")]
    BadTimestamp(String),

    #[error("incorrect dates, from_date must be earlier than to_date")]
    UnorderedWindow,
}

/// Check that a required string argument is present.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

/// Check that the page budget allows at least one request.
pub fn validate_page_count(page_count: usize) -> Result<(), ValidationError> {
    if page_count == 0 {
        return Err(ValidationError::BadPageCount);
    }
    Ok(())
}

/// Parse a compact `yyyymmddhhmm` timestamp.
///
/// The slices are decoded by hand rather than through a chrono format
/// string: `%Y` accepts variable-width years, which would let malformed
/// inputs slip through the fixed twelve-digit layout.
pub fn parse_compact_timestamp(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let bad = || ValidationError::BadTimestamp(value.to_string());

    if value.len() != 12 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }

    let year = value[0..4].parse::<i32>().map_err(|_| bad())?;
    let month = value[4..6].parse::<u32>().map_err(|_| bad())?;
    let day = value[6..8].parse::<u32>().map_err(|_| bad())?;
    let hour = value[8..10].parse::<u32>().map_err(|_| bad())?;
    let minute = value[10..12].parse::<u32>().map_err(|_| bad())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(bad)
}

/// Validate a search window: both endpoints parse and start precedes end.
pub fn validate_window(from_date: &str, to_date: &str) -> Result<(), ValidationError> {
    require_non_empty("from_date", from_date)?;
    require_non_empty("to_date", to_date)?;

    let start = parse_compact_timestamp(from_date)?;
    let end = parse_compact_timestamp(to_date)?;

    if start >= end {
        return Err(ValidationError::UnorderedWindow);
    }
    Ok(())
}
