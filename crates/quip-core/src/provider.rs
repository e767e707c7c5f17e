//! The `JokeProvider` trait: the remote fallback source.

use std::future::Future;

use crate::joke::Joke;

/// A remote source of jokes, searched by term.
pub trait JokeProvider: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch at most `limit` jokes matching `term`.
  ///
  /// Zero matches is `Ok(vec![])`, not an error. Returned jokes are not yet
  /// persisted (`id == None`).
  fn fetch_candidates<'a>(
    &'a self,
    term: &'a str,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Joke>, Self::Error>> + Send + 'a;
}
