//! Authors payload served by `/api/authors`
//!
//! The payload is a JSON array of authors (or `null`). Each author carries a
//! short list of poems with an optional ISO 8601 `created_at`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::error::LoadError;

/// A single work
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Poem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Unique within its author
    #[serde(default, deserialize_with = "null_as_empty")]
    pub slug: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Poem {
    /// Creation time in ms since the Unix epoch (0 when missing or invalid)
    pub fn created_millis(&self) -> i64 {
        timestamp_millis(self.created_at.as_deref())
    }
}

/// An author and their works
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Used verbatim in URL paths
    #[serde(default, deserialize_with = "null_as_empty")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poems: Vec<Poem>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Poem>, D::Error> {
    Ok(Option::<Vec<Poem>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode an authors response body
///
/// `null` and a blank body both mean "no authors".
pub fn decode_authors(body: &str) -> Result<Vec<Author>, LoadError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let authors: Option<Vec<Author>> = serde_json::from_str(body)?;
    Ok(authors.unwrap_or_default())
}

/// Parse a `created_at` value into ms since the Unix epoch
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM[:SS[.f]]` (read as UTC) and bare
/// dates. Anything else, including a missing value, is epoch 0.
pub fn timestamp_millis(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp_millis();
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return naive.and_utc().timestamp_millis();
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Up to `limit` poems, newest first
///
/// Undated poems count as epoch 0 and land after every dated one. Ties keep
/// payload order.
pub fn newest_poems(poems: &[Poem], limit: usize) -> Vec<&Poem> {
    let mut sorted: Vec<(i64, &Poem)> = poems.iter().map(|p| (p.created_millis(), p)).collect();
    sorted.sort_by(|a, b| b.0.cmp(&a.0));
    sorted.into_iter().take(limit).map(|(_, p)| p).collect()
}
