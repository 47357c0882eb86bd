//! Watch-list entries — the capped sets of monitored Twitter accounts and
//! news sources.
//!
//! Both collections are limited to [`WATCH_LIST_CAP`] live records. The cap
//! is enforced by the repository `add` operations, not by the schema, so the
//! rejection can name the cap explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of live records per watch-list collection.
pub const WATCH_LIST_CAP: usize = 10;

// ─── Twitter accounts ────────────────────────────────────────────────────────

/// A monitored Twitter account. The username is stored without a leading `@`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterAccount {
  pub id:          i64,
  pub username:    String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::RecordStore::add_twitter_account`].
/// A leading `@` on the username is stripped before storage.
#[derive(Debug, Clone, Default)]
pub struct NewTwitterAccount {
  pub username:    String,
  pub description: Option<String>,
}

/// Partial update for a twitter account; only the description is mutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TwitterAccountPatch {
  pub description: Option<String>,
}

// ─── News sources ────────────────────────────────────────────────────────────

/// A monitored news source. The url always carries an explicit scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSource {
  pub id:          i64,
  pub name:        String,
  pub url:         String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::RecordStore::add_news_source`].
/// A url without an `http://` or `https://` scheme is prefixed with
/// `https://` before storage.
#[derive(Debug, Clone, Default)]
pub struct NewNewsSource {
  pub name:        String,
  pub url:         String,
  pub description: Option<String>,
}

/// Partial update for a news source; only the description is mutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsSourcePatch {
  pub description: Option<String>,
}
