//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! This is the single place where the repository error taxonomy becomes HTTP
//! status codes; handlers never pick their own codes for failures.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("store error: {0}")]
  Store(String),
}

impl From<dossier_core::Error> for ApiError {
  fn from(e: dossier_core::Error) -> Self {
    use dossier_core::Error;
    match e {
      Error::Validation(msg) => Self::BadRequest(msg),
      Error::CapacityExceeded { .. } => Self::Conflict(e.to_string()),
      Error::Storage(msg) => Self::Store(msg),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Store(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.clone()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
