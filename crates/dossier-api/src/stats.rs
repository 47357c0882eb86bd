//! Handler for `GET /stats`.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Utc;
use dossier_core::{
  stats::{self, SubjectStats},
  store::RecordStore,
  subject::SubjectFilter,
};

use crate::error::ApiError;

/// `GET /stats` — aggregate counts over the full subject collection,
/// computed from an in-memory snapshot. Never mutates anything.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<SubjectStats>, ApiError>
where
  S: RecordStore,
{
  let subjects = store.list_subjects(SubjectFilter::default()).await?;
  Ok(Json(stats::compute(&subjects, Utc::now())))
}
