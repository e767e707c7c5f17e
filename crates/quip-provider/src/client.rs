//! [`ChuckClient`], the remote [`JokeProvider`].

use std::time::Duration;

use quip_core::{Joke, provider::JokeProvider};
use reqwest::Client;
use serde::Deserialize;

use crate::{Result, wire::SearchResponse};

/// Connection settings for the remote joke API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
  pub base_url:     String,
  pub timeout_secs: u64,
  pub user_agent:   String,
}

impl Default for ProviderConfig {
  fn default() -> Self {
    Self {
      base_url:     "https://api.chucknorris.io".to_string(),
      timeout_secs: 10,
      user_agent:   concat!("quip/", env!("CARGO_PKG_VERSION")).to_string(),
    }
  }
}

/// Async HTTP client for the remote search endpoint.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ChuckClient {
  client: Client,
  config: ProviderConfig,
}

impl ChuckClient {
  pub fn new(config: ProviderConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(config.user_agent.clone())
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }
}

impl JokeProvider for ChuckClient {
  type Error = crate::Error;

  /// `GET /jokes/search?query=<term>`
  ///
  /// The endpoint has no limit parameter (a query like `chuck` returns
  /// thousands of rows), so the cap is applied here.
  async fn fetch_candidates(&self, term: &str, limit: usize) -> Result<Vec<Joke>> {
    tracing::info!(query = term, limit, "calling provider search");

    let resp = self
      .client
      .get(self.url("/jokes/search"))
      .query(&[("query", term)])
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      return Err(crate::Error::Status(status));
    }

    let body = resp.bytes().await?;
    let data: SearchResponse = serde_json::from_slice(&body)?;

    tracing::info!(query = term, total = data.total, "provider search succeeded");

    if data.total == 0 {
      tracing::debug!(query = term, "no results");
      return Ok(Vec::new());
    }

    if data.result.len() > limit {
      tracing::debug!(
        query = term,
        returned = data.result.len(),
        kept = limit,
        "truncating provider results"
      );
    }

    data
      .result
      .into_iter()
      .take(limit)
      .map(|hit| hit.into_joke())
      .collect()
  }
}
