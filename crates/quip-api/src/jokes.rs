//! Handlers for `/jokes` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/jokes/random` | Random stored joke |
//! | `GET`  | `/jokes/search` | `?query=` required, 3–120 chars; falls back to the provider |
//! | `GET`  | `/jokes/personalized` | `?name=` required, 1–100 chars |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use quip_core::{Joke, Resolver, provider::JokeProvider, store::JokeStore};
use serde::Deserialize;

use crate::{error::ApiError, validation};

/// `GET /jokes/random`
pub async fn random<S, P>(
  State(resolver): State<Arc<Resolver<S, P>>>,
) -> Result<Json<Joke>, ApiError>
where
  S: JokeStore,
  P: JokeProvider,
{
  Ok(Json(resolver.get_random().await?))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchParams {
  #[serde(default)]
  pub query: String,
}

/// `GET /jokes/search?query=<term>`
pub async fn search<S, P>(
  State(resolver): State<Arc<Resolver<S, P>>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Joke>, ApiError>
where
  S: JokeStore,
  P: JokeProvider,
{
  let query = validation::query(&params.query)?;
  Ok(Json(resolver.get_by_query(query).await?))
}

// ─── Personalized ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PersonalizedParams {
  #[serde(default)]
  pub name: String,
}

/// `GET /jokes/personalized?name=<name>`
pub async fn personalized<S, P>(
  State(resolver): State<Arc<Resolver<S, P>>>,
  Query(params): Query<PersonalizedParams>,
) -> Result<Json<Joke>, ApiError>
where
  S: JokeStore,
  P: JokeProvider,
{
  let name = validation::name(&params.name)?;
  Ok(Json(resolver.get_personalized(name).await?))
}
