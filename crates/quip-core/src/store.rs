//! The `JokeStore` trait.
//!
//! Implemented by storage backends (e.g. `quip-store-sqlite`). The resolver
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::joke::Joke;

/// Abstraction over a durable joke collection.
///
/// Reads report a miss as `Ok(None)`; `Err` is reserved for real failures so
/// the caller can tell "nothing here" apart from "could not look".
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait JokeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return one uniformly selected joke, or `None` if the store is empty.
  fn pick_random(
    &self,
  ) -> impl Future<Output = Result<Option<Joke>, Self::Error>> + Send + '_;

  /// Return one joke whose content matches `term`, or `None` if nothing
  /// matches. Which match is returned is unspecified.
  fn search_one<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Option<Joke>, Self::Error>> + Send + 'a;

  /// Insert every joke in `jokes` inside a single transaction.
  ///
  /// A joke whose `external_id` is already stored is not overwritten, but its
  /// existing `id` is written back onto the slice element. New rows get their
  /// fresh `id` written back the same way. Any other failure aborts the whole
  /// batch; nothing is committed. An empty slice is a no-op.
  fn upsert_batch<'a>(
    &'a self,
    jokes: &'a mut [Joke],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
