//! Summary statistics over subjects.
//!
//! Computed entirely in memory from a listed snapshot; there is no separate
//! storage path and nothing here mutates data.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::subject::{RiskLevel, Status, Subject};

/// Width of the trailing window counted by `recent_count`.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Aggregate counts over the subject collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectStats {
  pub total:        usize,
  pub by_status:    BTreeMap<Status, usize>,
  pub by_risk:      BTreeMap<RiskLevel, usize>,
  /// Subjects created within the trailing [`RECENT_WINDOW_DAYS`] days.
  pub recent_count: usize,
}

/// Group a subject snapshot into summary counts as of `now`.
pub fn compute(subjects: &[Subject], now: DateTime<Utc>) -> SubjectStats {
  let window_start = now - Duration::days(RECENT_WINDOW_DAYS);

  let mut by_status = BTreeMap::new();
  let mut by_risk = BTreeMap::new();
  let mut recent_count = 0;

  for subject in subjects {
    *by_status.entry(subject.status).or_insert(0) += 1;
    *by_risk.entry(subject.risk_level).or_insert(0) += 1;
    if subject.created_at > window_start {
      recent_count += 1;
    }
  }

  SubjectStats {
    total: subjects.len(),
    by_status,
    by_risk,
    recent_count,
  }
}
