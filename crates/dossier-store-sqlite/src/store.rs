//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use dossier_core::{
  Error, Result,
  contact::{Contact, ContactPatch, NewContact},
  finding::{Finding, FindingFilter, FindingPatch, NewFinding},
  store::RecordStore,
  subject::{NewSubject, RiskLevel, Status, Subject, SubjectFilter, SubjectPatch},
  watchlist::{
    NewNewsSource, NewTwitterAccount, NewsSource, NewsSourcePatch,
    TwitterAccount, TwitterAccountPatch, WATCH_LIST_CAP,
  },
};

use crate::{
  encode::{
    RawContact, RawFinding, RawNewsSource, RawSubject, RawTwitterAccount,
    encode_dt, encode_finding_type, encode_importance, encode_risk_level,
    encode_status, encode_tags,
  },
  schema::SCHEMA,
};

// ─── Column lists ────────────────────────────────────────────────────────────

const SUBJECT_COLS: &str =
  "id, name_en, name_fa, location, event_context, notes, status, risk_level, \
   created_at";
const TWITTER_COLS: &str = "id, username, description, created_at";
const NEWS_COLS: &str = "id, name, url, description, created_at";
const FINDING_COLS: &str =
  "id, title, finding_type, source_url, source_name, subject_id, importance, \
   verified, description, tags, created_at";
const CONTACT_COLS: &str = "id, label, value, description, created_at";

// ─── Row readers ─────────────────────────────────────────────────────────────

fn read_subject(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawSubject> {
  Ok(RawSubject {
    id:            row.get(0)?,
    name_en:       row.get(1)?,
    name_fa:       row.get(2)?,
    location:      row.get(3)?,
    event_context: row.get(4)?,
    notes:         row.get(5)?,
    status:        row.get(6)?,
    risk_level:    row.get(7)?,
    created_at:    row.get(8)?,
  })
}

fn read_twitter(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawTwitterAccount> {
  Ok(RawTwitterAccount {
    id:          row.get(0)?,
    username:    row.get(1)?,
    description: row.get(2)?,
    created_at:  row.get(3)?,
  })
}

fn read_news(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawNewsSource> {
  Ok(RawNewsSource {
    id:          row.get(0)?,
    name:        row.get(1)?,
    url:         row.get(2)?,
    description: row.get(3)?,
    created_at:  row.get(4)?,
  })
}

fn read_finding(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawFinding> {
  Ok(RawFinding {
    id:           row.get(0)?,
    title:        row.get(1)?,
    finding_type: row.get(2)?,
    source_url:   row.get(3)?,
    source_name:  row.get(4)?,
    subject_id:   row.get(5)?,
    importance:   row.get(6)?,
    verified:     row.get(7)?,
    description:  row.get(8)?,
    tags:         row.get(9)?,
    created_at:   row.get(10)?,
  })
}

fn read_contact(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawContact> {
  Ok(RawContact {
    id:          row.get(0)?,
    label:       row.get(1)?,
    value:       row.get(2)?,
    description: row.get(3)?,
    created_at:  row.get(4)?,
  })
}

fn db_err(e: tokio_rusqlite::Error) -> Error { Error::Storage(e.to_string()) }

// ─── Store ───────────────────────────────────────────────────────────────────

/// A dossier record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted, and all
/// access funnels through its worker thread, which is what serializes writes.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(db_err)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(db_err)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(db_err)
  }

  /// Live record count for a watch-list table.
  async fn count_rows(&self, table: &'static str) -> Result<usize> {
    let count: i64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &format!("SELECT COUNT(*) FROM {table}"),
          [],
          |row| row.get(0),
        )?)
      })
      .await
      .map_err(db_err)?;
    Ok(count as usize)
  }

  /// `DELETE ... WHERE id = ?`; `false` means no row had that id.
  async fn delete_by_id(&self, table: &'static str, id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          &format!("DELETE FROM {table} WHERE id = ?1"),
          rusqlite::params![id],
        )?)
      })
      .await
      .map_err(db_err)?;
    Ok(changed > 0)
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  // ── Subjects ──────────────────────────────────────────────────────────────

  async fn add_subject(&self, input: NewSubject) -> Result<Subject> {
    let name_en = input.name_en.trim().to_owned();
    if name_en.is_empty() {
      return Err(Error::validation("name_en must not be empty"));
    }

    let subject = Subject {
      id: 0,
      name_en,
      name_fa: input.name_fa,
      location: input.location,
      event_context: input.event_context,
      notes: input.notes,
      status: Status::default(),
      risk_level: RiskLevel::default(),
      created_at: Utc::now(),
    };

    let name_en_str = subject.name_en.clone();
    let name_fa = subject.name_fa.clone();
    let location = subject.location.clone();
    let event_context = subject.event_context.clone();
    let notes = subject.notes.clone();
    let status_str = encode_status(subject.status).to_owned();
    let risk_str = encode_risk_level(subject.risk_level).to_owned();
    let at_str = encode_dt(subject.created_at);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO subjects (
             name_en, name_fa, location, event_context, notes,
             status, risk_level, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            name_en_str,
            name_fa,
            location,
            event_context,
            notes,
            status_str,
            risk_str,
            at_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(db_err)?;

    Ok(Subject { id, ..subject })
  }

  async fn get_subject(&self, id: i64) -> Result<Option<Subject>> {
    let raw: Option<RawSubject> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {SUBJECT_COLS} FROM subjects WHERE id = ?1"),
              rusqlite::params![id],
              read_subject,
            )
            .optional()?,
        )
      })
      .await
      .map_err(db_err)?;

    raw.map(RawSubject::into_subject).transpose()
  }

  async fn list_subjects(&self, filter: SubjectFilter) -> Result<Vec<Subject>> {
    let status = filter.status.map(encode_status).map(str::to_owned);
    let risk = filter.risk_level.map(encode_risk_level).map(str::to_owned);

    let raws: Vec<RawSubject> = self
      .conn
      .call(move |conn| {
        let mut conds: Vec<String> = Vec::new();
        let mut params: Vec<String> = Vec::new();
        if let Some(s) = status {
          params.push(s);
          conds.push(format!("status = ?{}", params.len()));
        }
        if let Some(r) = risk {
          params.push(r);
          conds.push(format!("risk_level = ?{}", params.len()));
        }

        let where_clause = if conds.is_empty() {
          String::new()
        } else {
          format!("WHERE {}", conds.join(" AND "))
        };

        let sql = format!(
          "SELECT {SUBJECT_COLS} FROM subjects {where_clause}
           ORDER BY created_at DESC, id DESC"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), read_subject)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(db_err)?;

    raws.into_iter().map(RawSubject::into_subject).collect()
  }

  async fn update_subject(
    &self,
    id: i64,
    patch: SubjectPatch,
  ) -> Result<Option<Subject>> {
    let Some(mut subject) = self.get_subject(id).await? else {
      return Ok(None);
    };

    if let Some(status) = patch.status {
      subject.status = status;
    }
    if let Some(risk_level) = patch.risk_level {
      subject.risk_level = risk_level;
    }
    if let Some(notes) = patch.notes {
      subject.notes = Some(notes);
    }

    let status_str = encode_status(subject.status).to_owned();
    let risk_str = encode_risk_level(subject.risk_level).to_owned();
    let notes = subject.notes.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE subjects SET status = ?1, risk_level = ?2, notes = ?3
           WHERE id = ?4",
          rusqlite::params![status_str, risk_str, notes, id],
        )?;
        Ok(())
      })
      .await
      .map_err(db_err)?;

    Ok(Some(subject))
  }

  async fn delete_subject(&self, id: i64) -> Result<bool> {
    self.delete_by_id("subjects", id).await
  }

  // ── Twitter watch list ────────────────────────────────────────────────────

  async fn add_twitter_account(
    &self,
    input: NewTwitterAccount,
  ) -> Result<TwitterAccount> {
    let username = input
      .username
      .trim()
      .trim_start_matches('@')
      .trim()
      .to_owned();
    if username.is_empty() {
      return Err(Error::validation("username must not be empty"));
    }

    let count = self.count_rows("twitter_accounts").await?;
    if count >= WATCH_LIST_CAP {
      return Err(Error::CapacityExceeded {
        entity: "monitored twitter accounts",
        cap:    WATCH_LIST_CAP,
      });
    }

    let check = username.clone();
    let existing: Option<i64> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id FROM twitter_accounts WHERE username = ?1",
              rusqlite::params![check],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await
      .map_err(db_err)?;
    if existing.is_some() {
      return Err(Error::validation(format!(
        "account {username:?} is already monitored"
      )));
    }

    let account = TwitterAccount {
      id: 0,
      username,
      description: input.description,
      created_at: Utc::now(),
    };

    let username_str = account.username.clone();
    let description = account.description.clone();
    let at_str = encode_dt(account.created_at);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO twitter_accounts (username, description, created_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![username_str, description, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(db_err)?;

    Ok(TwitterAccount { id, ..account })
  }

  async fn get_twitter_account(
    &self,
    id: i64,
  ) -> Result<Option<TwitterAccount>> {
    let raw: Option<RawTwitterAccount> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {TWITTER_COLS} FROM twitter_accounts WHERE id = ?1"
              ),
              rusqlite::params![id],
              read_twitter,
            )
            .optional()?,
        )
      })
      .await
      .map_err(db_err)?;

    raw.map(RawTwitterAccount::into_account).transpose()
  }

  async fn list_twitter_accounts(&self) -> Result<Vec<TwitterAccount>> {
    let raws: Vec<RawTwitterAccount> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {TWITTER_COLS} FROM twitter_accounts
           ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map([], read_twitter)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(db_err)?;

    raws
      .into_iter()
      .map(RawTwitterAccount::into_account)
      .collect()
  }

  async fn update_twitter_account(
    &self,
    id: i64,
    patch: TwitterAccountPatch,
  ) -> Result<Option<TwitterAccount>> {
    let Some(mut account) = self.get_twitter_account(id).await? else {
      return Ok(None);
    };

    if let Some(description) = patch.description {
      account.description = Some(description);
    }

    let description = account.description.clone();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE twitter_accounts SET description = ?1 WHERE id = ?2",
          rusqlite::params![description, id],
        )?;
        Ok(())
      })
      .await
      .map_err(db_err)?;

    Ok(Some(account))
  }

  async fn delete_twitter_account(&self, id: i64) -> Result<bool> {
    self.delete_by_id("twitter_accounts", id).await
  }

  // ── News watch list ───────────────────────────────────────────────────────

  async fn add_news_source(
    &self,
    input: NewNewsSource,
  ) -> Result<NewsSource> {
    let name = input.name.trim().to_owned();
    if name.is_empty() {
      return Err(Error::validation("name must not be empty"));
    }

    let mut url = input.url.trim().to_owned();
    if url.is_empty() {
      return Err(Error::validation("url must not be empty"));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
      url = format!("https://{url}");
    }

    let count = self.count_rows("news_sources").await?;
    if count >= WATCH_LIST_CAP {
      return Err(Error::CapacityExceeded {
        entity: "monitored news sources",
        cap:    WATCH_LIST_CAP,
      });
    }

    let check = url.clone();
    let existing: Option<i64> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id FROM news_sources WHERE url = ?1",
              rusqlite::params![check],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await
      .map_err(db_err)?;
    if existing.is_some() {
      return Err(Error::validation(format!(
        "source {url:?} is already monitored"
      )));
    }

    let source = NewsSource {
      id: 0,
      name,
      url,
      description: input.description,
      created_at: Utc::now(),
    };

    let name_str = source.name.clone();
    let url_str = source.url.clone();
    let description = source.description.clone();
    let at_str = encode_dt(source.created_at);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO news_sources (name, url, description, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![name_str, url_str, description, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(db_err)?;

    Ok(NewsSource { id, ..source })
  }

  async fn get_news_source(&self, id: i64) -> Result<Option<NewsSource>> {
    let raw: Option<RawNewsSource> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {NEWS_COLS} FROM news_sources WHERE id = ?1"),
              rusqlite::params![id],
              read_news,
            )
            .optional()?,
        )
      })
      .await
      .map_err(db_err)?;

    raw.map(RawNewsSource::into_source).transpose()
  }

  async fn list_news_sources(&self) -> Result<Vec<NewsSource>> {
    let raws: Vec<RawNewsSource> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {NEWS_COLS} FROM news_sources
           ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map([], read_news)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(db_err)?;

    raws.into_iter().map(RawNewsSource::into_source).collect()
  }

  async fn update_news_source(
    &self,
    id: i64,
    patch: NewsSourcePatch,
  ) -> Result<Option<NewsSource>> {
    let Some(mut source) = self.get_news_source(id).await? else {
      return Ok(None);
    };

    if let Some(description) = patch.description {
      source.description = Some(description);
    }

    let description = source.description.clone();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE news_sources SET description = ?1 WHERE id = ?2",
          rusqlite::params![description, id],
        )?;
        Ok(())
      })
      .await
      .map_err(db_err)?;

    Ok(Some(source))
  }

  async fn delete_news_source(&self, id: i64) -> Result<bool> {
    self.delete_by_id("news_sources", id).await
  }

  // ── Findings ──────────────────────────────────────────────────────────────

  async fn record_finding(&self, input: NewFinding) -> Result<Finding> {
    let title = input.title.trim().to_owned();
    if title.is_empty() {
      return Err(Error::validation("title must not be empty"));
    }

    if let Some(subject_id) = input.subject_id
      && self.get_subject(subject_id).await?.is_none()
    {
      return Err(Error::validation(format!(
        "subject {subject_id} does not exist"
      )));
    }

    let finding = Finding {
      id: 0,
      title,
      finding_type: input.finding_type,
      source_url: input.source_url,
      source_name: input.source_name,
      subject_id: input.subject_id,
      importance: input.importance,
      verified: false,
      description: input.description,
      tags: input.tags,
      created_at: Utc::now(),
    };

    let title_str = finding.title.clone();
    let type_str = encode_finding_type(finding.finding_type).to_owned();
    let source_url = finding.source_url.clone();
    let source_name = finding.source_name.clone();
    let subject_id = finding.subject_id;
    let importance_str = encode_importance(finding.importance).to_owned();
    let description = finding.description.clone();
    let tags_str = encode_tags(&finding.tags)?;
    let at_str = encode_dt(finding.created_at);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO findings (
             title, finding_type, source_url, source_name, subject_id,
             importance, verified, description, tags, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            title_str,
            type_str,
            source_url,
            source_name,
            subject_id,
            importance_str,
            false,
            description,
            tags_str,
            at_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(db_err)?;

    Ok(Finding { id, ..finding })
  }

  async fn get_finding(&self, id: i64) -> Result<Option<Finding>> {
    let raw: Option<RawFinding> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {FINDING_COLS} FROM findings WHERE id = ?1"),
              rusqlite::params![id],
              read_finding,
            )
            .optional()?,
        )
      })
      .await
      .map_err(db_err)?;

    raw.map(RawFinding::into_finding).transpose()
  }

  async fn list_findings(&self, filter: FindingFilter) -> Result<Vec<Finding>> {
    let finding_type = filter
      .finding_type
      .map(encode_finding_type)
      .map(str::to_owned);
    let importance = filter.importance.map(encode_importance).map(str::to_owned);

    let raws: Vec<RawFinding> = self
      .conn
      .call(move |conn| {
        let mut conds: Vec<String> = Vec::new();
        let mut params: Vec<String> = Vec::new();
        if let Some(t) = finding_type {
          params.push(t);
          conds.push(format!("finding_type = ?{}", params.len()));
        }
        if let Some(i) = importance {
          params.push(i);
          conds.push(format!("importance = ?{}", params.len()));
        }

        let where_clause = if conds.is_empty() {
          String::new()
        } else {
          format!("WHERE {}", conds.join(" AND "))
        };

        let sql = format!(
          "SELECT {FINDING_COLS} FROM findings {where_clause}
           ORDER BY created_at DESC, id DESC"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), read_finding)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(db_err)?;

    raws.into_iter().map(RawFinding::into_finding).collect()
  }

  async fn update_finding(
    &self,
    id: i64,
    patch: FindingPatch,
  ) -> Result<Option<Finding>> {
    let Some(mut finding) = self.get_finding(id).await? else {
      return Ok(None);
    };

    if let Some(title) = patch.title {
      let title = title.trim().to_owned();
      if title.is_empty() {
        return Err(Error::validation("title must not be empty"));
      }
      finding.title = title;
    }
    if let Some(finding_type) = patch.finding_type {
      finding.finding_type = finding_type;
    }
    if let Some(source_url) = patch.source_url {
      finding.source_url = Some(source_url);
    }
    if let Some(source_name) = patch.source_name {
      finding.source_name = Some(source_name);
    }
    if let Some(subject_id) = patch.subject_id {
      if self.get_subject(subject_id).await?.is_none() {
        return Err(Error::validation(format!(
          "subject {subject_id} does not exist"
        )));
      }
      finding.subject_id = Some(subject_id);
    }
    if let Some(importance) = patch.importance {
      finding.importance = importance;
    }
    if let Some(verified) = patch.verified {
      finding.verified = verified;
    }
    if let Some(description) = patch.description {
      finding.description = Some(description);
    }
    if let Some(tags) = patch.tags {
      finding.tags = tags;
    }

    let title_str = finding.title.clone();
    let type_str = encode_finding_type(finding.finding_type).to_owned();
    let source_url = finding.source_url.clone();
    let source_name = finding.source_name.clone();
    let subject_id = finding.subject_id;
    let importance_str = encode_importance(finding.importance).to_owned();
    let verified = finding.verified;
    let description = finding.description.clone();
    let tags_str = encode_tags(&finding.tags)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE findings SET
             title = ?1, finding_type = ?2, source_url = ?3,
             source_name = ?4, subject_id = ?5, importance = ?6,
             verified = ?7, description = ?8, tags = ?9
           WHERE id = ?10",
          rusqlite::params![
            title_str,
            type_str,
            source_url,
            source_name,
            subject_id,
            importance_str,
            verified,
            description,
            tags_str,
            id,
          ],
        )?;
        Ok(())
      })
      .await
      .map_err(db_err)?;

    Ok(Some(finding))
  }

  async fn delete_finding(&self, id: i64) -> Result<bool> {
    self.delete_by_id("findings", id).await
  }

  // ── Contacts ──────────────────────────────────────────────────────────────

  async fn add_contact(&self, input: NewContact) -> Result<Contact> {
    let label = input.label.trim().to_owned();
    if label.is_empty() {
      return Err(Error::validation("label must not be empty"));
    }
    let value = input.value.trim().to_owned();
    if value.is_empty() {
      return Err(Error::validation("value must not be empty"));
    }

    let contact = Contact {
      id: 0,
      label,
      value,
      description: input.description,
      created_at: Utc::now(),
    };

    let label_str = contact.label.clone();
    let value_str = contact.value.clone();
    let description = contact.description.clone();
    let at_str = encode_dt(contact.created_at);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (label, value, description, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![label_str, value_str, description, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(db_err)?;

    Ok(Contact { id, ..contact })
  }

  async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {CONTACT_COLS} FROM contacts WHERE id = ?1"),
              rusqlite::params![id],
              read_contact,
            )
            .optional()?,
        )
      })
      .await
      .map_err(db_err)?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {CONTACT_COLS} FROM contacts
           ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map([], read_contact)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(db_err)?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn update_contact(
    &self,
    id: i64,
    patch: ContactPatch,
  ) -> Result<Option<Contact>> {
    let Some(mut contact) = self.get_contact(id).await? else {
      return Ok(None);
    };

    if let Some(label) = patch.label {
      let label = label.trim().to_owned();
      if label.is_empty() {
        return Err(Error::validation("label must not be empty"));
      }
      contact.label = label;
    }
    if let Some(value) = patch.value {
      let value = value.trim().to_owned();
      if value.is_empty() {
        return Err(Error::validation("value must not be empty"));
      }
      contact.value = value;
    }
    if let Some(description) = patch.description {
      contact.description = Some(description);
    }

    let label_str = contact.label.clone();
    let value_str = contact.value.clone();
    let description = contact.description.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE contacts SET label = ?1, value = ?2, description = ?3
           WHERE id = ?4",
          rusqlite::params![label_str, value_str, description, id],
        )?;
        Ok(())
      })
      .await
      .map_err(db_err)?;

    Ok(Some(contact))
  }

  async fn delete_contact(&self, id: i64) -> Result<bool> {
    self.delete_by_id("contacts", id).await
  }
}
