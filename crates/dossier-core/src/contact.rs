//! Contact — a directory entry for an organisation or person who can help
//! with an investigation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact. `label` names the contact, `value` is how to reach
/// them (an email address, a url, a phone number).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
  pub id:          i64,
  pub label:       String,
  pub value:       String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::RecordStore::add_contact`].
#[derive(Debug, Clone, Default)]
pub struct NewContact {
  pub label:       String,
  pub value:       String,
  pub description: Option<String>,
}

/// Partial update for a contact. Every field is mutable; `None` fields keep
/// their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPatch {
  pub label:       Option<String>,
  pub value:       Option<String>,
  pub description: Option<String>,
}
