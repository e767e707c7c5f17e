//! Tests for `ChuckClient` against a local axum server standing in for the
//! remote API.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex},
};

use axum::{
  Router,
  extract::Query,
  http::{StatusCode, header},
  response::IntoResponse,
  routing::get,
};
use quip_core::provider::JokeProvider;
use tokio::net::TcpListener;

use crate::{ChuckClient, Error, ProviderConfig};

const SEARCH: &str = include_str!("../testdata/search.json");
const EMPTY: &str = include_str!("../testdata/empty.json");

/// Serve `body` with `status` on `/jokes/search`, recording each `query`
/// parameter received. Returns the base URL.
async fn serve(
  status: StatusCode,
  body: &'static str,
  seen: Arc<Mutex<Vec<String>>>,
) -> String {
  let app = Router::new().route(
    "/jokes/search",
    get(move |Query(params): Query<HashMap<String, String>>| {
      let seen = seen.clone();
      async move {
        if let Some(q) = params.get("query") {
          seen.lock().unwrap().push(q.clone());
        }
        (status, [(header::CONTENT_TYPE, "application/json")], body)
          .into_response()
      }
    }),
  );

  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });
  format!("http://{addr}")
}

fn client(base_url: String) -> ChuckClient {
  ChuckClient::new(ProviderConfig { base_url, ..ProviderConfig::default() })
    .unwrap()
}

#[tokio::test]
async fn returns_all_results_under_the_limit() {
  let base = serve(StatusCode::OK, SEARCH, Arc::default()).await;

  let got = client(base).fetch_candidates("foo", 10).await.unwrap();
  assert_eq!(got.len(), 4);
  assert_eq!(got[0].external_id, "c-3yrrglr0ouxifeo2rzsw");
  assert_eq!(
    got[0].url.as_deref(),
    Some("https://api.chucknorris.io/jokes/c-3yrrglr0ouxifeo2rzsw")
  );
  assert!(got.iter().all(|j| j.id.is_none()));
}

#[tokio::test]
async fn truncates_to_the_limit() {
  let base = serve(StatusCode::OK, SEARCH, Arc::default()).await;

  let got = client(base).fetch_candidates("foo", 2).await.unwrap();
  assert_eq!(got.len(), 2);
  assert_eq!(got[0].external_id, "c-3yrrglr0ouxifeo2rzsw");
  assert_eq!(got[1].external_id, "uhrg1b2nt8eqngiggr9pza");
}

#[tokio::test]
async fn zero_total_is_empty_not_an_error() {
  let base = serve(StatusCode::OK, EMPTY, Arc::default()).await;

  let got = client(base).fetch_candidates("foo", 2).await.unwrap();
  assert!(got.is_empty());
}

#[tokio::test]
async fn query_is_sent_url_encoded() {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let base = serve(StatusCode::OK, EMPTY, seen.clone()).await;

  client(base)
    .fetch_candidates("roundhouse kick & more", 5)
    .await
    .unwrap();
  assert_eq!(*seen.lock().unwrap(), vec!["roundhouse kick & more".to_string()]);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
  let base = serve(StatusCode::SERVICE_UNAVAILABLE, EMPTY, Arc::default()).await;

  let err = client(base).fetch_candidates("foo", 2).await.unwrap_err();
  assert!(
    matches!(err, Error::Status(s) if s == StatusCode::SERVICE_UNAVAILABLE),
    "{err:?}"
  );
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
  let base = serve(StatusCode::OK, "{\"total\": \"many\"", Arc::default()).await;

  let err = client(base).fetch_candidates("foo", 2).await.unwrap_err();
  assert!(matches!(err, Error::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let err = client(format!("http://{addr}"))
    .fetch_candidates("foo", 2)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Transport(_)), "{err:?}");
}
