//! Finding — a documented discovery with source attribution.
//!
//! Findings are independent records: they may reference a subject, but the
//! reference is never required and deleting the subject leaves the finding
//! in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of discovery a finding documents. Closed set; the wire strings
/// match the categories the intake form offers.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum FindingType {
  LinkedIn,
  Corporate,
  Sanctions,
  #[serde(rename = "Social Media")]
  SocialMedia,
  News,
  Financial,
  #[serde(rename = "Photo/Video")]
  PhotoVideo,
  Other,
}

/// How much weight a finding carries.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize,
  Deserialize,
)]
pub enum Importance {
  Low,
  #[default]
  Medium,
  High,
  Critical,
}

/// A stored finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
  pub id:           i64,
  pub title:        String,
  pub finding_type: FindingType,
  pub source_url:   Option<String>,
  pub source_name:  Option<String>,
  /// Optional reference to a subject; nulled if the subject is deleted.
  pub subject_id:   Option<i64>,
  pub importance:   Importance,
  /// Whether the finding has been independently confirmed.
  pub verified:     bool,
  pub description:  Option<String>,
  /// Free-form labels, kept in the order they were supplied.
  pub tags:         Vec<String>,
  /// Server-assigned timestamp; never changes after creation.
  pub created_at:   DateTime<Utc>,
}

/// Input to [`crate::store::RecordStore::record_finding`].
/// `id`, `created_at`, and `verified` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewFinding {
  pub title:        String,
  pub finding_type: FindingType,
  pub source_url:   Option<String>,
  pub source_name:  Option<String>,
  pub subject_id:   Option<i64>,
  pub importance:   Importance,
  pub description:  Option<String>,
  pub tags:         Vec<String>,
}

impl NewFinding {
  /// Convenience constructor with all optional fields at their defaults.
  pub fn new(title: impl Into<String>, finding_type: FindingType) -> Self {
    Self {
      title:        title.into(),
      finding_type,
      source_url:   None,
      source_name:  None,
      subject_id:   None,
      importance:   Importance::default(),
      description:  None,
      tags:         Vec::new(),
    }
  }
}

/// Partial update for a finding. Every field is mutable; `None` fields keep
/// their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindingPatch {
  pub title:        Option<String>,
  pub finding_type: Option<FindingType>,
  pub source_url:   Option<String>,
  pub source_name:  Option<String>,
  pub subject_id:   Option<i64>,
  pub importance:   Option<Importance>,
  pub verified:     Option<bool>,
  pub description:  Option<String>,
  pub tags:         Option<Vec<String>>,
}

/// Equality filter for [`crate::store::RecordStore::list_findings`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FindingFilter {
  pub finding_type: Option<FindingType>,
  pub importance:   Option<Importance>,
}
