//! SQL schema for the dossier SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS subjects (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name_en       TEXT NOT NULL,
    name_fa       TEXT,
    location      TEXT,
    event_context TEXT,
    notes         TEXT,
    status        TEXT NOT NULL DEFAULT 'New',
    risk_level    TEXT NOT NULL DEFAULT 'Unknown',
    created_at    TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS twitter_accounts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    username    TEXT NOT NULL UNIQUE,   -- stored without leading '@'
    description TEXT,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS news_sources (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    url         TEXT NOT NULL UNIQUE,   -- always carries a scheme
    description TEXT,
    created_at  TEXT NOT NULL
);

-- Findings are independent of subjects: the reference is optional and is
-- nulled (never cascaded) when the subject goes away.
CREATE TABLE IF NOT EXISTS findings (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    title        TEXT NOT NULL,
    finding_type TEXT NOT NULL,
    source_url   TEXT,
    source_name  TEXT,
    subject_id   INTEGER REFERENCES subjects(id) ON DELETE SET NULL,
    importance   TEXT NOT NULL DEFAULT 'Medium',
    verified     INTEGER NOT NULL DEFAULT 0,
    description  TEXT,
    tags         TEXT NOT NULL DEFAULT '[]',   -- JSON array, order preserved
    created_at   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS contacts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    label       TEXT NOT NULL,
    value       TEXT NOT NULL,
    description TEXT,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS subjects_status_idx  ON subjects(status);
CREATE INDEX IF NOT EXISTS subjects_risk_idx    ON subjects(risk_level);
CREATE INDEX IF NOT EXISTS findings_type_idx    ON findings(finding_type);
CREATE INDEX IF NOT EXISTS findings_subject_idx ON findings(subject_id);

PRAGMA user_version = 1;
";
