//! Conversions between [`Joke`] and the plain-text columns stored in SQLite.
//!
//! Timestamps are stored as RFC 3339 strings.

use chrono::{DateTime, Utc};
use quip_core::Joke;

use crate::{Error, Result};

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

/// Column list matching [`RawJoke::from_row`].
pub const JOKE_COLUMNS: &str = "id, external_id, joke_url, content, created_at";

/// A `jokes` row before timestamp decoding.
pub struct RawJoke {
  pub id:          i64,
  pub external_id: String,
  pub url:         Option<String>,
  pub content:     String,
  pub created_at:  String,
}

impl RawJoke {
  /// Read a row selected with [`JOKE_COLUMNS`] in that order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      external_id: row.get(1)?,
      url:         row.get(2)?,
      content:     row.get(3)?,
      created_at:  row.get(4)?,
    })
  }

  pub fn into_joke(self) -> Result<Joke> {
    Ok(Joke {
      id:          Some(self.id),
      external_id: self.external_id,
      content:     self.content,
      url:         self.url,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// The insertable columns of a [`Joke`], owned so they can cross into the
/// database thread.
pub struct RawNewJoke {
  pub external_id: String,
  pub url:         Option<String>,
  pub content:     String,
  pub created_at:  String,
}

impl From<&Joke> for RawNewJoke {
  fn from(joke: &Joke) -> Self {
    Self {
      external_id: joke.external_id.clone(),
      url:         joke.url.clone(),
      content:     joke.content.clone(),
      created_at:  encode_dt(joke.created_at),
    }
  }
}

/// Turn free text into an FTS5 match expression.
///
/// Each whitespace-separated token is quoted as an FTS5 string so operators
/// and punctuation in user input are taken literally; tokens are ANDed.
/// Tokens without any alphanumeric character are dropped. Returns `None`
/// when nothing searchable is left.
pub fn fts_match_expr(term: &str) -> Option<String> {
  let tokens: Vec<String> = term
    .split_whitespace()
    .filter(|t| t.chars().any(char::is_alphanumeric))
    .map(|t| format!("\"{}\"", t.replace('"', "\"\"")))
    .collect();

  if tokens.is_empty() {
    None
  } else {
    Some(tokens.join(" AND "))
  }
}

#[cfg(test)]
mod tests {
  use super::fts_match_expr;

  #[test]
  fn match_expr_quotes_and_joins() {
    assert_eq!(fts_match_expr("ninja").as_deref(), Some("\"ninja\""));
    assert_eq!(
      fts_match_expr("  roundhouse   kick ").as_deref(),
      Some("\"roundhouse\" AND \"kick\"")
    );
  }

  #[test]
  fn match_expr_escapes_quotes_and_drops_punctuation() {
    assert_eq!(fts_match_expr("say \"hi\"").as_deref(), Some("\"say\" AND \"\"\"hi\"\"\""));
    assert_eq!(fts_match_expr("!!! ---"), None);
    assert_eq!(fts_match_expr(""), None);
  }
}
