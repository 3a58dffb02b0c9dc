//! SQL schema for the SQLite submission store.
//!
//! Executed on every open via `execute_batch`; idempotent thanks to
//! `CREATE TABLE IF NOT EXISTS`, so process restarts against an existing
//! database file are a no-op.

/// Full schema DDL.
///
/// `AUTOINCREMENT` guarantees ids are monotonically increasing and never
/// reused, even across deletes (which this system never issues — the table
/// is a strictly append-only log).
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS contact_submissions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT,
    email       TEXT,
    subject     TEXT,
    message     TEXT,
    created_at  TEXT NOT NULL    -- ISO 8601 UTC; store-assigned
);

PRAGMA user_version = 1;
";
