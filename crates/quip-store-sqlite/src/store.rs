//! [`SqliteStore`], the SQLite implementation of [`JokeStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use quip_core::{Joke, store::JokeStore};

use crate::{
  Result,
  encode::{JOKE_COLUMNS, RawJoke, RawNewJoke, fts_match_expr},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A joke store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Number of stored jokes.
  pub async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM jokes", [], |r| r.get(0))?)
      })
      .await?;
    Ok(n as u64)
  }
}

// ─── JokeStore impl ──────────────────────────────────────────────────────────

impl JokeStore for SqliteStore {
  type Error = crate::Error;

  async fn pick_random(&self) -> Result<Option<Joke>> {
    let raw: Option<RawJoke> = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {JOKE_COLUMNS} FROM jokes ORDER BY random() LIMIT 1"
              ),
              [],
              RawJoke::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawJoke::into_joke).transpose()
  }

  async fn search_one(&self, term: &str) -> Result<Option<Joke>> {
    let Some(expr) = fts_match_expr(term) else {
      return Ok(None);
    };

    let raw: Option<RawJoke> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT j.id, j.external_id, j.joke_url, j.content, j.created_at
               FROM jokes_fts f
               JOIN jokes j ON j.id = f.rowid
               WHERE jokes_fts MATCH ?1
               ORDER BY random()
               LIMIT 1",
              rusqlite::params![expr],
              RawJoke::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawJoke::into_joke).transpose()
  }

  async fn upsert_batch(&self, jokes: &mut [Joke]) -> Result<()> {
    if jokes.is_empty() {
      return Ok(());
    }

    let rows: Vec<RawNewJoke> = jokes.iter().map(RawNewJoke::from).collect();

    // Dropping the transaction without committing rolls it back, so an error
    // on any row leaves the table untouched.
    let ids: Vec<i64> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut ids = Vec::with_capacity(rows.len());
        {
          let mut insert = tx.prepare_cached(
            "INSERT INTO jokes (external_id, joke_url, content, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (external_id) DO NOTHING
             RETURNING id",
          )?;
          let mut lookup =
            tx.prepare_cached("SELECT id FROM jokes WHERE external_id = ?1")?;

          for row in &rows {
            let inserted: Option<i64> = insert
              .query_row(
                rusqlite::params![
                  row.external_id,
                  row.url,
                  row.content,
                  row.created_at,
                ],
                |r| r.get(0),
              )
              .optional()?;

            let id = match inserted {
              Some(id) => id,
              None => lookup
                .query_row(rusqlite::params![row.external_id], |r| r.get(0))?,
            };
            ids.push(id);
          }
        }
        tx.commit()?;
        Ok(ids)
      })
      .await?;

    for (joke, id) in jokes.iter_mut().zip(ids) {
      joke.id = Some(id);
    }

    tracing::debug!(count = jokes.len(), "upserted joke batch");
    Ok(())
  }
}
