//! Handler for `GET /search`.
//!
//! The generator is pure; this handler only maps query parameters onto it.

use axum::Json;
use dossier_core::search::{self, SearchLink};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, extract::ApiQuery};

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  pub name:    Option<String>,
  pub name_fa: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
  pub links: Vec<SearchLink>,
}

/// `GET /search?name=<str>[&name_fa=<str>]` — 400 when `name` is missing or
/// empty.
pub async fn handler(
  ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
  let name = params.name.unwrap_or_default();
  let links = search::generate(&name, params.name_fa.as_deref())?;
  Ok(Json(SearchResponse { links }))
}
