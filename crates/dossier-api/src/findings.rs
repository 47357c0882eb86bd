//! Handlers for `/findings` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/findings` | Optional `?finding_type=` and `?importance=` filters |
//! | `GET`    | `/findings/:id` | 404 if not found |
//! | `POST`   | `/findings` | Body: [`NewFindingBody`]; returns 201 |
//! | `PUT`    | `/findings/:id` | Partial update; every field is mutable |
//! | `DELETE` | `/findings/:id` | 204, or 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use dossier_core::{
  finding::{
    Finding, FindingFilter, FindingPatch, FindingType, Importance, NewFinding,
  },
  store::RecordStore,
};
use serde::Deserialize;

use crate::{
  error::ApiError,
  extract::{ApiJson, ApiQuery},
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub finding_type: Option<FindingType>,
  pub importance:   Option<Importance>,
}

/// `GET /findings[?finding_type=<type>][&importance=<importance>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<Finding>>, ApiError>
where
  S: RecordStore,
{
  let findings = store
    .list_findings(FindingFilter {
      finding_type: params.finding_type,
      importance:   params.importance,
    })
    .await?;
  Ok(Json(findings))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /findings`.
#[derive(Debug, Deserialize)]
pub struct NewFindingBody {
  pub title:        String,
  pub finding_type: FindingType,
  pub source_url:   Option<String>,
  pub source_name:  Option<String>,
  pub subject_id:   Option<i64>,
  pub importance:   Option<Importance>,
  pub description:  Option<String>,
  #[serde(default)]
  pub tags:         Vec<String>,
}

impl From<NewFindingBody> for NewFinding {
  fn from(b: NewFindingBody) -> Self {
    NewFinding {
      title:        b.title,
      finding_type: b.finding_type,
      source_url:   b.source_url,
      source_name:  b.source_name,
      subject_id:   b.subject_id,
      importance:   b.importance.unwrap_or_default(),
      description:  b.description,
      tags:         b.tags,
    }
  }
}

/// `POST /findings` — returns 201 + the stored finding.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<NewFindingBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let finding = store.record_finding(NewFinding::from(body)).await?;
  Ok((StatusCode::CREATED, Json(finding)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /findings/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Finding>, ApiError>
where
  S: RecordStore,
{
  let finding = store
    .get_finding(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("finding {id} not found")))?;
  Ok(Json(finding))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /findings/:id` — body: any subset of the finding's fields.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  ApiJson(patch): ApiJson<FindingPatch>,
) -> Result<Json<Finding>, ApiError>
where
  S: RecordStore,
{
  let finding = store
    .update_finding(id, patch)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("finding {id} not found")))?;
  Ok(Json(finding))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /findings/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: RecordStore,
{
  if store.delete_finding(id).await? {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("finding {id} not found")))
  }
}
