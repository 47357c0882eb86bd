//! JSON REST API for dossier.
//!
//! Exposes an axum [`Router`] backed by any
//! [`dossier_core::store::RecordStore`]. The router is pure translation:
//! every validation and invariant lives in the repository operations or the
//! search generator, and [`ApiError`] is the single point where the error
//! taxonomy becomes status codes.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", dossier_api::api_router(store.clone()))
//! ```

pub mod contacts;
pub mod error;
pub mod extract;
pub mod findings;
pub mod monitor;
pub mod search;
pub mod stats;
pub mod subjects;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, put},
};
use dossier_core::store::RecordStore;
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and/or
/// `DOSSIER_`-prefixed environment variables. Every field has a default, so
/// the server runs with no configuration at all.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  /// Location of the embedded database file; a leading `~` is expanded at
  /// startup and the parent directory is created on first run.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8000 }

fn default_store_path() -> PathBuf { PathBuf::from("~/.dossier/dossier.db") }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       default_host(),
      port:       default_port(),
      store_path: default_store_path(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RecordStore + 'static,
{
  Router::new()
    // Subjects
    .route(
      "/subjects",
      get(subjects::list::<S>).post(subjects::create::<S>),
    )
    .route(
      "/subjects/{id}",
      get(subjects::get_one::<S>)
        .put(subjects::update_one::<S>)
        .delete(subjects::delete_one::<S>),
    )
    // Search bundle + stats
    .route("/search", get(search::handler))
    .route("/stats", get(stats::handler::<S>))
    // Watch lists
    .route(
      "/monitor/twitter",
      get(monitor::list_twitter::<S>).post(monitor::create_twitter::<S>),
    )
    .route(
      "/monitor/twitter/{id}",
      put(monitor::update_twitter::<S>).delete(monitor::delete_twitter::<S>),
    )
    .route(
      "/monitor/news",
      get(monitor::list_news::<S>).post(monitor::create_news::<S>),
    )
    .route(
      "/monitor/news/{id}",
      put(monitor::update_news::<S>).delete(monitor::delete_news::<S>),
    )
    // Findings
    .route(
      "/findings",
      get(findings::list::<S>).post(findings::create::<S>),
    )
    .route(
      "/findings/{id}",
      get(findings::get_one::<S>)
        .put(findings::update_one::<S>)
        .delete(findings::delete_one::<S>),
    )
    // Contacts
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/{id}",
      put(contacts::update_one::<S>).delete(contacts::delete_one::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use dossier_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    Router::new().nest("/api", api_router(Arc::new(store)))
  }

  async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: &str,
  ) -> (StatusCode, Value) {
    let request = Request::builder()
      .method(method)
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
    let value = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
  }

  async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    match body {
      Some(v) => send_raw(app, method, uri, &v.to_string()).await,
      None => {
        let request = Request::builder()
          .method(method)
          .uri(uri)
          .body(Body::empty())
          .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
          .await
          .unwrap();
        let value = if bytes.is_empty() {
          Value::Null
        } else {
          serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
      }
    }
  }

  // ── Subjects ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_subject_returns_201_with_defaults() {
    let app = app().await;

    let (status, body) = send(
      &app,
      "POST",
      "/api/subjects",
      Some(json!({ "name_en": "Ali Rezaei" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["name_en"], "Ali Rezaei");
    assert_eq!(body["status"], "New");
    assert_eq!(body["risk_level"], "Unknown");
  }

  #[tokio::test]
  async fn create_subject_without_name_is_400() {
    let app = app().await;

    let (status, _) =
      send(&app, "POST", "/api/subjects", Some(json!({ "name_en": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
      send(&app, "POST", "/api/subjects", Some(json!({ "notes": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn malformed_json_body_is_400() {
    let app = app().await;
    let (status, _) =
      send_raw(&app, "POST", "/api/subjects", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn get_subject_missing_is_404() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/api/subjects/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
  }

  #[tokio::test]
  async fn list_subjects_filters_by_status() {
    let app = app().await;

    let (_, a) = send(
      &app,
      "POST",
      "/api/subjects",
      Some(json!({ "name_en": "A" })),
    )
    .await;
    send(
      &app,
      "POST",
      "/api/subjects",
      Some(json!({ "name_en": "B" })),
    )
    .await;
    send(
      &app,
      "PUT",
      &format!("/api/subjects/{}", a["id"]),
      Some(json!({ "status": "Investigating" })),
    )
    .await;

    let (status, body) =
      send(&app, "GET", "/api/subjects?status=Investigating", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name_en"], "A");
  }

  #[tokio::test]
  async fn unknown_filter_value_is_400() {
    let app = app().await;
    let (status, _) =
      send(&app, "GET", "/api/subjects?status=Bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn unrecognized_filter_field_is_ignored() {
    let app = app().await;
    send(&app, "POST", "/api/subjects", Some(json!({ "name_en": "A" }))).await;

    // Unknown query keys fall through; only out-of-domain values for known
    // filters are rejected.
    let (status, body) = send(&app, "GET", "/api/subjects?bogus=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn update_subject_with_invalid_status_is_400_and_unapplied() {
    let app = app().await;
    let (_, created) = send(
      &app,
      "POST",
      "/api/subjects",
      Some(json!({ "name_en": "Immutable" })),
    )
    .await;
    let uri = format!("/api/subjects/{}", created["id"]);

    let (status, _) =
      send(&app, "PUT", &uri, Some(json!({ "status": "Archived" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The stored record is unchanged.
    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched["status"], "New");
  }

  #[tokio::test]
  async fn update_subject_is_partial() {
    let app = app().await;
    let (_, created) = send(
      &app,
      "POST",
      "/api/subjects",
      Some(json!({ "name_en": "Partial", "notes": "before" })),
    )
    .await;
    let uri = format!("/api/subjects/{}", created["id"]);

    let (status, updated) = send(
      &app,
      "PUT",
      &uri,
      Some(json!({ "risk_level": "High" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["risk_level"], "High");
    assert_eq!(updated["status"], "New");
    assert_eq!(updated["notes"], "before");
  }

  #[tokio::test]
  async fn delete_subject_then_repeat_is_404() {
    let app = app().await;
    let (_, created) = send(
      &app,
      "POST",
      "/api/subjects",
      Some(json!({ "name_en": "Short lived" })),
    )
    .await;
    let uri = format!("/api/subjects/{}", created["id"]);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Search ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn search_returns_labeled_links() {
    let app = app().await;
    let (status, body) =
      send(&app, "GET", "/api/search?name=Ali%20Rezaei", None).await;
    assert_eq!(status, StatusCode::OK);

    let links = body["links"].as_array().unwrap();
    assert!(!links.is_empty());
    for link in links {
      assert!(link["label"].is_string());
      assert!(link["url"].as_str().unwrap().contains("Ali%20Rezaei"));
    }
  }

  #[tokio::test]
  async fn search_with_persian_name_is_longer() {
    let app = app().await;
    let (_, english) =
      send(&app, "GET", "/api/search?name=Ali%20Rezaei", None).await;
    let (_, both) = send(
      &app,
      "GET",
      "/api/search?name=Ali%20Rezaei&name_fa=Reza",
      None,
    )
    .await;

    let english_len = english["links"].as_array().unwrap().len();
    let both_len = both["links"].as_array().unwrap().len();
    assert!(both_len > english_len);
  }

  #[tokio::test]
  async fn search_without_name_is_400() {
    let app = app().await;
    let (status, _) = send(&app, "GET", "/api/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  // ── Stats ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn stats_groups_by_status_and_risk() {
    let app = app().await;

    let mut ids = Vec::new();
    for name in ["A", "B", "C", "D", "E"] {
      let (_, body) = send(
        &app,
        "POST",
        "/api/subjects",
        Some(json!({ "name_en": name })),
      )
      .await;
      ids.push(body["id"].as_i64().unwrap());
    }
    for id in &ids[..3] {
      send(
        &app,
        "PUT",
        &format!("/api/subjects/{id}"),
        Some(json!({ "risk_level": "High" })),
      )
      .await;
    }
    for id in &ids[3..] {
      send(
        &app,
        "PUT",
        &format!("/api/subjects/{id}"),
        Some(json!({ "risk_level": "Low" })),
      )
      .await;
    }

    let (status, body) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["by_risk"]["High"], 3);
    assert_eq!(body["by_risk"]["Low"], 2);
    assert_eq!(body["by_status"]["New"], 5);
    // Everything was created just now.
    assert_eq!(body["recent_count"], 5);
  }

  // ── Watch lists ─────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn twitter_watch_list_caps_at_409() {
    let app = app().await;

    for i in 0..10 {
      let (status, _) = send(
        &app,
        "POST",
        "/api/monitor/twitter",
        Some(json!({ "username": format!("account_{i}") })),
      )
      .await;
      assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
      &app,
      "POST",
      "/api/monitor/twitter",
      Some(json!({ "username": "one_too_many" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("10"));

    let (_, list) = send(&app, "GET", "/api/monitor/twitter", None).await;
    assert_eq!(list.as_array().unwrap().len(), 10);
  }

  #[tokio::test]
  async fn twitter_username_is_normalised_and_unique() {
    let app = app().await;

    let (status, body) = send(
      &app,
      "POST",
      "/api/monitor/twitter",
      Some(json!({ "username": "@osint_watch" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "osint_watch");

    let (status, _) = send(
      &app,
      "POST",
      "/api/monitor/twitter",
      Some(json!({ "username": "osint_watch" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn twitter_update_and_delete_round_trip() {
    let app = app().await;
    let (_, created) = send(
      &app,
      "POST",
      "/api/monitor/twitter",
      Some(json!({ "username": "watcher" })),
    )
    .await;
    let uri = format!("/api/monitor/twitter/{}", created["id"]);

    let (status, updated) = send(
      &app,
      "PUT",
      &uri,
      Some(json!({ "description": "protest coverage" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"], "protest coverage");

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn news_source_url_gets_a_scheme() {
    let app = app().await;
    let (status, body) = send(
      &app,
      "POST",
      "/api/monitor/news",
      Some(json!({ "name": "Radio Farda", "url": "en.radiofarda.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["url"], "https://en.radiofarda.com");
  }

  // ── Findings ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn finding_tags_round_trip_in_order() {
    let app = app().await;

    let (status, created) = send(
      &app,
      "POST",
      "/api/findings",
      Some(json!({
        "title": "Front company payment trail",
        "finding_type": "Financial",
        "tags": ["IRGC", "banking"]
      })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, fetched) = send(
      &app,
      "GET",
      &format!("/api/findings/{}", created["id"]),
      None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["tags"], json!(["IRGC", "banking"]));
    assert_eq!(fetched["importance"], "Medium");
    assert_eq!(fetched["verified"], false);
  }

  #[tokio::test]
  async fn findings_filter_by_type_is_exact() {
    let app = app().await;

    send(
      &app,
      "POST",
      "/api/findings",
      Some(json!({ "title": "OFAC match", "finding_type": "Sanctions" })),
    )
    .await;
    send(
      &app,
      "POST",
      "/api/findings",
      Some(json!({ "title": "Press mention", "finding_type": "News" })),
    )
    .await;

    let (status, body) =
      send(&app, "GET", "/api/findings?finding_type=Sanctions", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["finding_type"], "Sanctions");
  }

  #[tokio::test]
  async fn finding_with_unknown_type_is_400() {
    let app = app().await;
    let (status, _) = send(
      &app,
      "POST",
      "/api/findings",
      Some(json!({ "title": "X", "finding_type": "Gossip" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn finding_update_marks_verified() {
    let app = app().await;
    let (_, created) = send(
      &app,
      "POST",
      "/api/findings",
      Some(json!({ "title": "To confirm", "finding_type": "Other" })),
    )
    .await;
    let uri = format!("/api/findings/{}", created["id"]);

    let (status, updated) =
      send(&app, "PUT", &uri, Some(json!({ "verified": true }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["verified"], true);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Contacts ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn contacts_crud_round_trip() {
    let app = app().await;

    let (status, created) = send(
      &app,
      "POST",
      "/api/contacts",
      Some(json!({
        "label": "Access Now Helpline",
        "value": "help@accessnow.org"
      })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!("/api/contacts/{}", created["id"]);

    let (status, list) = send(&app, "GET", "/api/contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, updated) = send(
      &app,
      "PUT",
      &uri,
      Some(json!({ "description": "24/7 digital security support" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"], "24/7 digital security support");

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
  }

  #[tokio::test]
  async fn contact_without_value_is_400() {
    let app = app().await;
    let (status, _) = send(
      &app,
      "POST",
      "/api/contacts",
      Some(json!({ "label": "Nameless", "value": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  // ── Routing ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn unknown_route_is_404() {
    let app = app().await;
    let (status, _) = send(&app, "GET", "/api/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }
}
