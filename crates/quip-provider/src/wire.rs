//! Response shapes of the remote search endpoint.

use chrono::{DateTime, NaiveDateTime, Utc};
use quip_core::Joke;
use serde::Deserialize;

use crate::{Error, Result};

/// `created_at` format, once any fractional seconds are stripped.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Body of `GET /jokes/search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
  pub total:  usize,
  #[serde(default)]
  pub result: Vec<SearchHit>,
}

/// One entry of [`SearchResponse::result`]. Fields we never read
/// (`categories`, `icon_url`, `updated_at`) are ignored.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
  pub id:         String,
  #[serde(default)]
  pub url:        String,
  pub value:      String,
  pub created_at: String,
}

impl SearchHit {
  pub fn into_joke(self) -> Result<Joke> {
    let created_at = parse_timestamp(&self.created_at)?;
    let url = (!self.url.is_empty()).then_some(self.url);
    Ok(Joke::new(self.id, self.value, url, created_at))
  }
}

/// Parse a provider timestamp as UTC.
///
/// The API is inconsistent about fractional-second precision, so anything
/// after the first `.` is dropped.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
  let whole_seconds = raw.split_once('.').map_or(raw, |(s, _)| s);
  NaiveDateTime::parse_from_str(whole_seconds, TIMESTAMP_FORMAT)
    .map(|naive| naive.and_utc())
    .map_err(|source| Error::Timestamp { value: raw.to_owned(), source })
}
