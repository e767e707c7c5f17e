//! Error type for `quip-provider`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("unexpected response status: {0}")]
  Status(reqwest::StatusCode),

  #[error("failed to decode response body: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("failed to parse timestamp {value:?}: {source}")]
  Timestamp {
    value:  String,
    #[source]
    source: chrono::ParseError,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
