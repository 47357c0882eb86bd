//! Handlers for the `/monitor` watch-list endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/monitor/twitter` | |
//! | `POST`   | `/monitor/twitter` | 409 once the list holds 10 accounts |
//! | `PUT`    | `/monitor/twitter/:id` | Description only |
//! | `DELETE` | `/monitor/twitter/:id` | |
//! | `GET`    | `/monitor/news` | |
//! | `POST`   | `/monitor/news` | 409 once the list holds 10 sources |
//! | `PUT`    | `/monitor/news/:id` | Description only |
//! | `DELETE` | `/monitor/news/:id` | |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use dossier_core::{
  store::RecordStore,
  watchlist::{
    NewNewsSource, NewTwitterAccount, NewsSource, NewsSourcePatch,
    TwitterAccount, TwitterAccountPatch,
  },
};
use serde::Deserialize;

use crate::{error::ApiError, extract::ApiJson};

// ─── Twitter accounts ────────────────────────────────────────────────────────

/// `GET /monitor/twitter`
pub async fn list_twitter<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<TwitterAccount>>, ApiError>
where
  S: RecordStore,
{
  Ok(Json(store.list_twitter_accounts().await?))
}

#[derive(Debug, Deserialize)]
pub struct CreateTwitterBody {
  pub username:    String,
  pub description: Option<String>,
}

/// `POST /monitor/twitter` — returns 201 + the stored account.
pub async fn create_twitter<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<CreateTwitterBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let account = store
    .add_twitter_account(NewTwitterAccount {
      username:    body.username,
      description: body.description,
    })
    .await?;
  Ok((StatusCode::CREATED, Json(account)))
}

/// `PUT /monitor/twitter/:id` — body: `{"description": "..."}`.
pub async fn update_twitter<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  ApiJson(patch): ApiJson<TwitterAccountPatch>,
) -> Result<Json<TwitterAccount>, ApiError>
where
  S: RecordStore,
{
  let account = store
    .update_twitter_account(id, patch)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("account {id} not found")))?;
  Ok(Json(account))
}

/// `DELETE /monitor/twitter/:id`
pub async fn delete_twitter<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: RecordStore,
{
  if store.delete_twitter_account(id).await? {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("account {id} not found")))
  }
}

// ─── News sources ────────────────────────────────────────────────────────────

/// `GET /monitor/news`
pub async fn list_news<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<NewsSource>>, ApiError>
where
  S: RecordStore,
{
  Ok(Json(store.list_news_sources().await?))
}

#[derive(Debug, Deserialize)]
pub struct CreateNewsBody {
  pub name:        String,
  pub url:         String,
  pub description: Option<String>,
}

/// `POST /monitor/news` — returns 201 + the stored source.
pub async fn create_news<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<CreateNewsBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let source = store
    .add_news_source(NewNewsSource {
      name:        body.name,
      url:         body.url,
      description: body.description,
    })
    .await?;
  Ok((StatusCode::CREATED, Json(source)))
}

/// `PUT /monitor/news/:id` — body: `{"description": "..."}`.
pub async fn update_news<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  ApiJson(patch): ApiJson<NewsSourcePatch>,
) -> Result<Json<NewsSource>, ApiError>
where
  S: RecordStore,
{
  let source = store
    .update_news_source(id, patch)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("source {id} not found")))?;
  Ok(Json(source))
}

/// `DELETE /monitor/news/:id`
pub async fn delete_news<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: RecordStore,
{
  if store.delete_news_source(id).await? {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("source {id} not found")))
  }
}
