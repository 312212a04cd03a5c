//! Lenient parsing for Tracker timestamps.
//!
//! The API renders every timestamp in one fixed shape
//! (`2021-03-04T10:00:00Z`, UTC, second precision). A value that does not
//! match is logged and read as absent rather than failing the caller.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// The one timestamp format the service emits.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a Tracker timestamp, warning and returning `None` on mismatch.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    match NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        Ok(parsed) => Some(parsed.and_utc()),
        Err(_) => {
            tracing::warn!(timestamp = raw, "possibly invalid date format");
            None
        }
    }
}

/// Serde adapter for optional timestamp fields.
///
/// Combine with `#[serde(default)]`: an absent key, a JSON `null`, and a
/// malformed string all deserialize to `None`.
pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}
