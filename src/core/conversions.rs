//! Timestamp parsing shared by the provider wire mappings.
//!
//! Parsing is tolerant on purpose: a timestamp the provider mangled comes
//! back as `None` and the article sorts last, instead of dropping the item
//! or failing the batch.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse an RFC 3339 timestamp (the NewsAPI/GNews `publishedAt` format).
#[must_use]
pub(crate) fn datetime_from_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse FMP's `publishedDate` format (`2024-03-01 12:30:00`, no zone,
/// effectively UTC). Falls back to RFC 3339 for zoned timestamps.
#[must_use]
pub(crate) fn datetime_from_fmp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
        .or_else(|| datetime_from_rfc3339(s))
}
