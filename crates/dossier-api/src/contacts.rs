//! Handlers for `/contacts` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use dossier_core::{
  contact::{Contact, ContactPatch, NewContact},
  store::RecordStore,
};
use serde::Deserialize;

use crate::{error::ApiError, extract::ApiJson};

/// `GET /contacts`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: RecordStore,
{
  Ok(Json(store.list_contacts().await?))
}

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub label:       String,
  pub value:       String,
  pub description: Option<String>,
}

/// `POST /contacts` — returns 201 + the stored contact.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let contact = store
    .add_contact(NewContact {
      label:       body.label,
      value:       body.value,
      description: body.description,
    })
    .await?;
  Ok((StatusCode::CREATED, Json(contact)))
}

/// `PUT /contacts/:id` — body: any subset of `{label, value, description}`.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  ApiJson(patch): ApiJson<ContactPatch>,
) -> Result<Json<Contact>, ApiError>
where
  S: RecordStore,
{
  let contact = store
    .update_contact(id, patch)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("contact {id} not found")))?;
  Ok(Json(contact))
}

/// `DELETE /contacts/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: RecordStore,
{
  if store.delete_contact(id).await? {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("contact {id} not found")))
  }
}
