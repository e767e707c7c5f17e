//! JSON HTTP API for quip.
//!
//! Exposes axum routers backed by a [`quip_core::Resolver`] over any
//! [`JokeStore`] / [`JokeProvider`] pair. TLS and process lifecycle are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = quip_api::app(Arc::new(resolver), auth);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod error;
pub mod jokes;
pub mod validation;

use std::sync::Arc;

use axum::{Router, extract::Request, middleware, routing::get};
use quip_core::{Resolver, provider::JokeProvider, store::JokeStore};
use tower_http::{
  catch_panic::CatchPanicLayer,
  request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
  trace::TraceLayer,
};

pub use auth::AuthConfig;
pub use error::ApiError;

/// Build the `/jokes` router for `resolver`.
///
/// When `credentials` is set, `/jokes/search` and `/jokes/personalized` require
/// Basic credentials; `/jokes/random` stays open either way.
pub fn api_router<S, P>(
  resolver: Arc<Resolver<S, P>>,
  credentials: Option<AuthConfig>,
) -> Router<()>
where
  S: JokeStore + 'static,
  P: JokeProvider + 'static,
{
  let mut gated = Router::new()
    .route("/jokes/search", get(jokes::search::<S, P>))
    .route("/jokes/personalized", get(jokes::personalized::<S, P>));

  if let Some(credentials) = credentials {
    gated = gated.route_layer(middleware::from_fn_with_state(
      Arc::new(credentials),
      auth::require_auth,
    ));
  }

  Router::new()
    .route("/jokes/random", get(jokes::random::<S, P>))
    .merge(gated)
    .with_state(resolver)
}

/// The full application: `/health` and the API under `/api/v1`, wrapped in
/// [`with_middleware`].
pub fn app<S, P>(
  resolver: Arc<Resolver<S, P>>,
  credentials: Option<AuthConfig>,
) -> Router
where
  S: JokeStore + 'static,
  P: JokeProvider + 'static,
{
  with_middleware(
    Router::new()
      .route("/health", get(health))
      .nest("/api/v1", api_router(resolver, credentials)),
  )
}

/// Request ids on `x-request-id` (also echoed in error bodies), per-request
/// tracing spans, and panics recovered as 500s.
pub fn with_middleware(router: Router) -> Router {
  router
    .layer(CatchPanicLayer::custom(error::handle_panic))
    .layer(middleware::from_fn(error::attach_request_id))
    .layer(PropagateRequestIdLayer::x_request_id())
    .layer(TraceLayer::new_for_http().make_span_with(request_span))
    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// `GET /health`
pub async fn health() -> &'static str { "ok" }

fn request_span(req: &Request) -> tracing::Span {
  let request_id = req
    .headers()
    .get("x-request-id")
    .and_then(|v| v.to_str().ok())
    .unwrap_or("-");
  tracing::info_span!(
    "request",
    method = %req.method(),
    path = %req.uri().path(),
    request_id,
  )
}

// ─── Integration tests ────────────────────────────────────────────────────────
