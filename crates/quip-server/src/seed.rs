//! Loading a JSON seed file into the store.

use std::path::Path;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use quip_core::{Joke, store::JokeStore};
use serde::Deserialize;

/// One entry of a seed file. `created_at` defaults to load time.
#[derive(Debug, Deserialize)]
struct SeedJoke {
  external_id: String,
  content:     String,
  #[serde(default)]
  url:         Option<String>,
  #[serde(default)]
  created_at:  Option<DateTime<Utc>>,
}

/// Parse a JSON array of seed entries into unpersisted jokes.
pub fn parse(bytes: &[u8]) -> anyhow::Result<Vec<Joke>> {
  let entries: Vec<SeedJoke> =
    serde_json::from_slice(bytes).context("seed file is not a JSON array of jokes")?;
  let now = Utc::now();
  Ok(
    entries
      .into_iter()
      .map(|e| Joke::new(e.external_id, e.content, e.url, e.created_at.unwrap_or(now)))
      .collect(),
  )
}

/// Upsert every joke in the seed file at `path`. Jokes already present (by
/// `external_id`) are left as they are, so seeding is safe to repeat.
pub async fn seed_from_file<S: JokeStore>(store: &S, path: &Path) -> anyhow::Result<usize> {
  let bytes = tokio::fs::read(path)
    .await
    .with_context(|| format!("failed to read seed file {path:?}"))?;
  let mut jokes = parse(&bytes)?;
  store
    .upsert_batch(&mut jokes)
    .await
    .context("failed to write seed jokes")?;
  Ok(jokes.len())
}
