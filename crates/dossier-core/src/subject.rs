//! Subject — an investigation target record.
//!
//! Subjects carry identity fields captured at intake plus two workflow
//! enums. Everything else discovered about a subject is recorded as a
//! [`Finding`](crate::finding::Finding).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a subject sits in the investigation workflow.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize,
  Deserialize,
)]
pub enum Status {
  #[default]
  New,
  Investigating,
  Verified,
}

/// Assessed risk associated with a subject.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize,
  Deserialize,
)]
pub enum RiskLevel {
  #[default]
  Unknown,
  Low,
  Medium,
  High,
  Critical,
}

/// A stored investigation subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
  pub id:            i64,
  /// Latin-script name; the only required intake field.
  pub name_en:       String,
  /// Persian-script name, if known.
  pub name_fa:       Option<String>,
  pub location:      Option<String>,
  /// Where or how the subject was identified.
  pub event_context: Option<String>,
  pub notes:         Option<String>,
  pub status:        Status,
  pub risk_level:    RiskLevel,
  /// Server-assigned timestamp; never changes after creation.
  pub created_at:    DateTime<Utc>,
}

/// Input to [`crate::store::RecordStore::add_subject`].
/// `id`, `created_at`, `status`, and `risk_level` are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewSubject {
  pub name_en:       String,
  pub name_fa:       Option<String>,
  pub location:      Option<String>,
  pub event_context: Option<String>,
  pub notes:         Option<String>,
}

/// Partial update for a subject. `None` fields keep their stored value.
/// Only the workflow fields and notes are mutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectPatch {
  pub status:     Option<Status>,
  pub risk_level: Option<RiskLevel>,
  pub notes:      Option<String>,
}

/// Equality filter for [`crate::store::RecordStore::list_subjects`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectFilter {
  pub status:     Option<Status>,
  pub risk_level: Option<RiskLevel>,
}
