//! [`Resolver`]: decides where each joke comes from.
//!
//! Random picks come only from the store. Query searches try the store
//! first and fall back to the provider on a miss, caching what the provider
//! returns on a best-effort basis. Personalised jokes are random picks with
//! the canonical name swapped out.

use rand::Rng as _;

use crate::{
  Error, Result,
  joke::Joke,
  personalize::personalize,
  provider::JokeProvider,
  store::JokeStore,
};

/// Upper bound on jokes taken from a single provider search. The upstream
/// API has no limit parameter and can return thousands of rows.
pub const MAX_FETCH: usize = 100;

/// Composes a [`JokeStore`] and a [`JokeProvider`] into the three request
/// flows. Holds no per-request state.
pub struct Resolver<S, P> {
  store:     S,
  provider:  P,
  max_fetch: usize,
}

impl<S, P> Resolver<S, P>
where
  S: JokeStore,
  P: JokeProvider,
{
  pub fn new(store: S, provider: P) -> Self {
    Self { store, provider, max_fetch: MAX_FETCH }
  }

  /// Override the per-search provider fetch cap.
  pub fn with_max_fetch(mut self, max_fetch: usize) -> Self {
    self.max_fetch = max_fetch;
    self
  }

  #[cfg(test)]
  fn store(&self) -> &S { &self.store }

  /// Pick a random stored joke. The store is expected to be seeded, so an
  /// empty store is [`Error::EmptyStore`].
  pub async fn get_random(&self) -> Result<Joke> {
    self
      .store
      .pick_random()
      .await
      .map_err(|e| Error::Store(Box::new(e)))?
      .ok_or(Error::EmptyStore)
  }

  /// Find a joke matching `term`, consulting the provider on a local miss.
  ///
  /// Provider results are cached before one of them is returned, but the
  /// returned joke is drawn from the fetched batch itself, so a failed cache
  /// write only costs the `id`s it would have assigned.
  pub async fn get_by_query(&self, term: &str) -> Result<Joke> {
    if let Some(joke) = self
      .store
      .search_one(term)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?
    {
      return Ok(joke);
    }

    tracing::info!(query = term, "no cached matches, calling provider");

    let mut candidates = self
      .provider
      .fetch_candidates(term, self.max_fetch)
      .await
      .map_err(|e| Error::Provider(Box::new(e)))?;
    candidates.truncate(self.max_fetch);

    if candidates.is_empty() {
      return Err(Error::NoContentFound);
    }

    tracing::info!(query = term, count = candidates.len(), "provider returned jokes");

    if let Err(e) = self.store.upsert_batch(&mut candidates).await {
      tracing::error!(query = term, error = %e, "failed to cache provider jokes");
    }

    let pick = rand::thread_rng().gen_range(0..candidates.len());
    Ok(candidates.swap_remove(pick))
  }

  /// Pick a random joke and rewrite it about `name`. The stored row is not
  /// touched.
  pub async fn get_personalized(&self, name: &str) -> Result<Joke> {
    let mut joke = self.get_random().await?;
    joke.content = personalize(&joke.content, name);
    Ok(joke)
  }
}
