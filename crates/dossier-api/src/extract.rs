//! Request extractors that keep rejection semantics inside the API error
//! space.
//!
//! Axum's stock extractors answer with plain-text bodies (and 422 for
//! well-formed JSON that misses the target type, e.g. an enum value outside
//! its domain). The API treats all of those as the same validation failure:
//! a 400 with a JSON error body.

use axum::{
  Json,
  extract::{FromRequest, FromRequestParts, Query, Request},
  http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// [`axum::Json`] with every rejection mapped to a 400 response.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
  T: DeserializeOwned,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    match Json::<T>::from_request(req, state).await {
      Ok(Json(value)) => Ok(Self(value)),
      Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
  }
}

/// [`axum::extract::Query`] with every rejection mapped to a 400 response.
///
/// This is what rejects an out-of-domain filter value such as
/// `?status=Bogus` instead of silently returning the unfiltered list.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
  T: DeserializeOwned,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    match Query::<T>::from_request_parts(parts, state).await {
      Ok(Query(value)) => Ok(Self(value)),
      Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
  }
}
