//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `dossier-store-sqlite`).
//! Higher layers (`dossier-api`) depend on this abstraction, not on any
//! concrete backend.
//!
//! Every entity gets the same operation shape: `add`/`record` validates
//! required fields and returns the stored record with its assigned id;
//! `get` and `update` report a missing id as `None`; `delete` reports it as
//! `false`. Lists are ordered most-recently-created first.

use std::future::Future;

use crate::{
  Result,
  contact::{Contact, ContactPatch, NewContact},
  finding::{Finding, FindingFilter, FindingPatch, NewFinding},
  subject::{NewSubject, Subject, SubjectFilter, SubjectPatch},
  watchlist::{
    NewNewsSource, NewTwitterAccount, NewsSource, NewsSourcePatch,
    TwitterAccount, TwitterAccountPatch,
  },
};

/// Abstraction over a dossier record store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  // ── Subjects ──────────────────────────────────────────────────────────

  /// Validate and persist a new subject. `status` defaults to `New` and
  /// `risk_level` to `Unknown`.
  fn add_subject(
    &self,
    input: NewSubject,
  ) -> impl Future<Output = Result<Subject>> + Send + '_;

  /// Retrieve a subject by id. Returns `None` if not found.
  fn get_subject(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Subject>>> + Send + '_;

  /// List subjects newest-first, optionally filtered by status and/or risk.
  fn list_subjects(
    &self,
    filter: SubjectFilter,
  ) -> impl Future<Output = Result<Vec<Subject>>> + Send + '_;

  /// Apply a partial update. Returns the updated record, or `None` if the
  /// id does not exist (in which case nothing is written).
  fn update_subject(
    &self,
    id: i64,
    patch: SubjectPatch,
  ) -> impl Future<Output = Result<Option<Subject>>> + Send + '_;

  /// Delete by id. Returns `false` if the id did not exist.
  fn delete_subject(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool>> + Send + '_;

  // ── Twitter watch list ────────────────────────────────────────────────

  /// Validate, normalise, and persist a monitored account. Fails with
  /// `CapacityExceeded` once the watch list holds
  /// [`WATCH_LIST_CAP`](crate::watchlist::WATCH_LIST_CAP) records.
  fn add_twitter_account(
    &self,
    input: NewTwitterAccount,
  ) -> impl Future<Output = Result<TwitterAccount>> + Send + '_;

  fn get_twitter_account(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<TwitterAccount>>> + Send + '_;

  fn list_twitter_accounts(
    &self,
  ) -> impl Future<Output = Result<Vec<TwitterAccount>>> + Send + '_;

  fn update_twitter_account(
    &self,
    id: i64,
    patch: TwitterAccountPatch,
  ) -> impl Future<Output = Result<Option<TwitterAccount>>> + Send + '_;

  fn delete_twitter_account(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool>> + Send + '_;

  // ── News watch list ───────────────────────────────────────────────────

  /// Validate, normalise, and persist a monitored source. Capped like the
  /// twitter watch list.
  fn add_news_source(
    &self,
    input: NewNewsSource,
  ) -> impl Future<Output = Result<NewsSource>> + Send + '_;

  fn get_news_source(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<NewsSource>>> + Send + '_;

  fn list_news_sources(
    &self,
  ) -> impl Future<Output = Result<Vec<NewsSource>>> + Send + '_;

  fn update_news_source(
    &self,
    id: i64,
    patch: NewsSourcePatch,
  ) -> impl Future<Output = Result<Option<NewsSource>>> + Send + '_;

  fn delete_news_source(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool>> + Send + '_;

  // ── Findings ──────────────────────────────────────────────────────────

  /// Validate and persist a new finding. `verified` starts out `false`.
  fn record_finding(
    &self,
    input: NewFinding,
  ) -> impl Future<Output = Result<Finding>> + Send + '_;

  fn get_finding(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Finding>>> + Send + '_;

  /// List findings newest-first, optionally filtered by type and/or
  /// importance.
  fn list_findings(
    &self,
    filter: FindingFilter,
  ) -> impl Future<Output = Result<Vec<Finding>>> + Send + '_;

  fn update_finding(
    &self,
    id: i64,
    patch: FindingPatch,
  ) -> impl Future<Output = Result<Option<Finding>>> + Send + '_;

  fn delete_finding(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool>> + Send + '_;

  // ── Contacts ──────────────────────────────────────────────────────────

  fn add_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact>> + Send + '_;

  fn get_contact(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Contact>>> + Send + '_;

  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>>> + Send + '_;

  fn update_contact(
    &self,
    id: i64,
    patch: ContactPatch,
  ) -> impl Future<Output = Result<Option<Contact>>> + Send + '_;

  fn delete_contact(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool>> + Send + '_;
}
