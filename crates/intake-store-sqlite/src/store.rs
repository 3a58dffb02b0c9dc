//! [`SqliteStore`] — the SQLite implementation of [`SubmissionStore`].

use std::path::Path;

use chrono::Utc;
use intake_core::{NewSubmission, Submission, SubmissionStore};

use crate::{
  Error, Result,
  encode::{RawSubmission, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A submission store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
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
      .await?;
    Ok(())
  }
}

// ─── SubmissionStore impl ────────────────────────────────────────────────────

impl SubmissionStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, input: NewSubmission) -> Result<Submission> {
    let created_at = Utc::now();
    let created_at_str = encode_dt(created_at);

    let NewSubmission { name, email, subject, message } = input;
    let (name_p, email_p, subject_p, message_p) =
      (name.clone(), email.clone(), subject.clone(), message.clone());

    // Single statement; the row id comes from the same connection, so no
    // other write can interleave.
    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contact_submissions (name, email, subject, message, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![name_p, email_p, subject_p, message_p, created_at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Submission { id, name, email, subject, message, created_at })
  }

  async fn list_all(&self) -> Result<Vec<Submission>> {
    let raws: Vec<RawSubmission> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, email, subject, message, created_at
           FROM contact_submissions
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawSubmission {
              id:         row.get(0)?,
              name:       row.get(1)?,
              email:      row.get(2)?,
              subject:    row.get(3)?,
              message:    row.get(4)?,
              created_at: row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSubmission::into_submission).collect()
  }
}
