//! Handlers for `/subjects` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/subjects` | Optional `?status=` and `?risk_level=` filters |
//! | `POST`   | `/subjects` | Body: [`CreateBody`]; returns 201 |
//! | `GET`    | `/subjects/:id` | 404 if not found |
//! | `PUT`    | `/subjects/:id` | Partial update of status/risk/notes |
//! | `DELETE` | `/subjects/:id` | 204, or 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use dossier_core::{
  store::RecordStore,
  subject::{
    NewSubject, RiskLevel, Status, Subject, SubjectFilter, SubjectPatch,
  },
};
use serde::Deserialize;

use crate::{
  error::ApiError,
  extract::{ApiJson, ApiQuery},
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub status:     Option<Status>,
  pub risk_level: Option<RiskLevel>,
}

/// `GET /subjects[?status=<status>][&risk_level=<risk>]`
///
/// A filter value outside its enum domain fails extraction and answers 400.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<Subject>>, ApiError>
where
  S: RecordStore,
{
  let subjects = store
    .list_subjects(SubjectFilter {
      status:     params.status,
      risk_level: params.risk_level,
    })
    .await?;
  Ok(Json(subjects))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name_en:       String,
  pub name_fa:       Option<String>,
  pub location:      Option<String>,
  pub event_context: Option<String>,
  pub notes:         Option<String>,
}

impl From<CreateBody> for NewSubject {
  fn from(b: CreateBody) -> Self {
    NewSubject {
      name_en:       b.name_en,
      name_fa:       b.name_fa,
      location:      b.location,
      event_context: b.event_context,
      notes:         b.notes,
    }
  }
}

/// `POST /subjects` — returns 201 + the stored subject.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let subject = store.add_subject(NewSubject::from(body)).await?;
  Ok((StatusCode::CREATED, Json(subject)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /subjects/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Subject>, ApiError>
where
  S: RecordStore,
{
  let subject = store
    .get_subject(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("subject {id} not found")))?;
  Ok(Json(subject))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /subjects/:id` — body: any subset of `{status, risk_level, notes}`.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  ApiJson(patch): ApiJson<SubjectPatch>,
) -> Result<Json<Subject>, ApiError>
where
  S: RecordStore,
{
  let subject = store
    .update_subject(id, patch)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("subject {id} not found")))?;
  Ok(Json(subject))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /subjects/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: RecordStore,
{
  if store.delete_subject(id).await? {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("subject {id} not found")))
  }
}
