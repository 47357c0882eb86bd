//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, enums as their wire strings,
//! and finding tags as a compact JSON array. Decoding failures surface as
//! [`Error::Storage`] — they mean the database file holds something this
//! build never wrote.

use chrono::{DateTime, Utc};
use dossier_core::{
  Error, Result,
  contact::Contact,
  finding::{Finding, FindingType, Importance},
  subject::{RiskLevel, Status, Subject},
  watchlist::{NewsSource, TwitterAccount},
};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Storage(format!("bad timestamp {s:?}: {e}")))
}

// ─── Status ──────────────────────────────────────────────────────────────────

pub fn encode_status(s: Status) -> &'static str {
  match s {
    Status::New => "New",
    Status::Investigating => "Investigating",
    Status::Verified => "Verified",
  }
}

pub fn decode_status(s: &str) -> Result<Status> {
  match s {
    "New" => Ok(Status::New),
    "Investigating" => Ok(Status::Investigating),
    "Verified" => Ok(Status::Verified),
    other => Err(Error::Storage(format!("unknown status: {other:?}"))),
  }
}

// ─── RiskLevel ───────────────────────────────────────────────────────────────

pub fn encode_risk_level(r: RiskLevel) -> &'static str {
  match r {
    RiskLevel::Unknown => "Unknown",
    RiskLevel::Low => "Low",
    RiskLevel::Medium => "Medium",
    RiskLevel::High => "High",
    RiskLevel::Critical => "Critical",
  }
}

pub fn decode_risk_level(s: &str) -> Result<RiskLevel> {
  match s {
    "Unknown" => Ok(RiskLevel::Unknown),
    "Low" => Ok(RiskLevel::Low),
    "Medium" => Ok(RiskLevel::Medium),
    "High" => Ok(RiskLevel::High),
    "Critical" => Ok(RiskLevel::Critical),
    other => Err(Error::Storage(format!("unknown risk level: {other:?}"))),
  }
}

// ─── FindingType ─────────────────────────────────────────────────────────────

pub fn encode_finding_type(t: FindingType) -> &'static str {
  match t {
    FindingType::LinkedIn => "LinkedIn",
    FindingType::Corporate => "Corporate",
    FindingType::Sanctions => "Sanctions",
    FindingType::SocialMedia => "Social Media",
    FindingType::News => "News",
    FindingType::Financial => "Financial",
    FindingType::PhotoVideo => "Photo/Video",
    FindingType::Other => "Other",
  }
}

pub fn decode_finding_type(s: &str) -> Result<FindingType> {
  match s {
    "LinkedIn" => Ok(FindingType::LinkedIn),
    "Corporate" => Ok(FindingType::Corporate),
    "Sanctions" => Ok(FindingType::Sanctions),
    "Social Media" => Ok(FindingType::SocialMedia),
    "News" => Ok(FindingType::News),
    "Financial" => Ok(FindingType::Financial),
    "Photo/Video" => Ok(FindingType::PhotoVideo),
    "Other" => Ok(FindingType::Other),
    other => Err(Error::Storage(format!("unknown finding type: {other:?}"))),
  }
}

// ─── Importance ──────────────────────────────────────────────────────────────

pub fn encode_importance(i: Importance) -> &'static str {
  match i {
    Importance::Low => "Low",
    Importance::Medium => "Medium",
    Importance::High => "High",
    Importance::Critical => "Critical",
  }
}

pub fn decode_importance(s: &str) -> Result<Importance> {
  match s {
    "Low" => Ok(Importance::Low),
    "Medium" => Ok(Importance::Medium),
    "High" => Ok(Importance::High),
    "Critical" => Ok(Importance::Critical),
    other => Err(Error::Storage(format!("unknown importance: {other:?}"))),
  }
}

// ─── Tags ────────────────────────────────────────────────────────────────────

pub fn encode_tags(tags: &[String]) -> Result<String> {
  serde_json::to_string(tags)
    .map_err(|e| Error::Storage(format!("tag encoding failed: {e}")))
}

pub fn decode_tags(s: &str) -> Result<Vec<String>> {
  serde_json::from_str(s)
    .map_err(|e| Error::Storage(format!("bad tags column {s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `subjects` row.
pub struct RawSubject {
  pub id:            i64,
  pub name_en:       String,
  pub name_fa:       Option<String>,
  pub location:      Option<String>,
  pub event_context: Option<String>,
  pub notes:         Option<String>,
  pub status:        String,
  pub risk_level:    String,
  pub created_at:    String,
}

impl RawSubject {
  pub fn into_subject(self) -> Result<Subject> {
    Ok(Subject {
      id:            self.id,
      name_en:       self.name_en,
      name_fa:       self.name_fa,
      location:      self.location,
      event_context: self.event_context,
      notes:         self.notes,
      status:        decode_status(&self.status)?,
      risk_level:    decode_risk_level(&self.risk_level)?,
      created_at:    decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `twitter_accounts` row.
pub struct RawTwitterAccount {
  pub id:          i64,
  pub username:    String,
  pub description: Option<String>,
  pub created_at:  String,
}

impl RawTwitterAccount {
  pub fn into_account(self) -> Result<TwitterAccount> {
    Ok(TwitterAccount {
      id:          self.id,
      username:    self.username,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `news_sources` row.
pub struct RawNewsSource {
  pub id:          i64,
  pub name:        String,
  pub url:         String,
  pub description: Option<String>,
  pub created_at:  String,
}

impl RawNewsSource {
  pub fn into_source(self) -> Result<NewsSource> {
    Ok(NewsSource {
      id:          self.id,
      name:        self.name,
      url:         self.url,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `findings` row.
pub struct RawFinding {
  pub id:           i64,
  pub title:        String,
  pub finding_type: String,
  pub source_url:   Option<String>,
  pub source_name:  Option<String>,
  pub subject_id:   Option<i64>,
  pub importance:   String,
  pub verified:     bool,
  pub description:  Option<String>,
  pub tags:         String,
  pub created_at:   String,
}

impl RawFinding {
  pub fn into_finding(self) -> Result<Finding> {
    Ok(Finding {
      id:           self.id,
      title:        self.title,
      finding_type: decode_finding_type(&self.finding_type)?,
      source_url:   self.source_url,
      source_name:  self.source_name,
      subject_id:   self.subject_id,
      importance:   decode_importance(&self.importance)?,
      verified:     self.verified,
      description:  self.description,
      tags:         decode_tags(&self.tags)?,
      created_at:   decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `contacts` row.
pub struct RawContact {
  pub id:          i64,
  pub label:       String,
  pub value:       String,
  pub description: Option<String>,
  pub created_at:  String,
}

impl RawContact {
  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:          self.id,
      label:       self.label,
      value:       self.value,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}
