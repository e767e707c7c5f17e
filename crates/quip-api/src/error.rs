//! API error type and [`axum::response::IntoResponse`] implementation.

use std::any::Any;

use axum::{
  Json,
  extract::Request,
  http::{HeaderValue, StatusCode, header},
  middleware::Next,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("unauthorized")]
  Unauthorized,

  #[error(transparent)]
  Resolve(#[from] quip_core::Error),

  /// A handler panicked; the detail is logged, not returned.
  #[error("internal server error")]
  Internal,
}

/// The message of an error response, left in its extensions so
/// [`attach_request_id`] can rebuild the body once the request id is known.
#[derive(Debug, Clone)]
struct ErrorMessage(String);

impl ApiError {
  fn status(&self) -> StatusCode {
    use quip_core::Error as E;
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
      ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::Resolve(E::NoContentFound) => StatusCode::NOT_FOUND,
      ApiError::Resolve(E::EmptyStore) => StatusCode::SERVICE_UNAVAILABLE,
      ApiError::Resolve(E::Provider(_)) => StatusCode::BAD_GATEWAY,
      ApiError::Resolve(E::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(status = status.as_u16(), error = %self, "request failed");
    } else {
      tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
    }

    let message = self.to_string();
    let mut res = (status, Json(json!({ "error": message }))).into_response();
    res.extensions_mut().insert(ErrorMessage(message));
    if status == StatusCode::UNAUTHORIZED {
      res.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"quip\""),
      );
    }
    res
  }
}

/// Middleware: add the request's `x-request-id` to every JSON error body as
/// `request_id`.
pub async fn attach_request_id(req: Request, next: Next) -> Response {
  let request_id = req
    .headers()
    .get("x-request-id")
    .and_then(|v| v.to_str().ok())
    .map(str::to_owned);

  let mut res = next.run(req).await;
  let message = res.extensions_mut().remove::<ErrorMessage>();
  let (Some(request_id), Some(ErrorMessage(message))) = (request_id, message)
  else {
    return res;
  };

  let (parts, _) = res.into_parts();
  let body = Json(json!({ "error": message, "request_id": request_id }))
    .into_response()
    .into_body();
  Response::from_parts(parts, body)
}

/// Turn a handler panic into a logged 500 response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
  let detail = err
    .downcast_ref::<String>()
    .map(String::as_str)
    .or_else(|| err.downcast_ref::<&str>().copied())
    .unwrap_or("non-string panic payload");
  tracing::error!(panic = detail, "handler panicked");
  ApiError::Internal.into_response()
}
