//! Submission — one contact-form entry.
//!
//! Submissions are an append-only log: created once per successful form
//! post, never updated, never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted contact-form entry.
///
/// All text fields are stored exactly as submitted. An absent form field is
/// `None`, not an empty string; the store makes no attempt to normalise or
/// validate content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
  /// Store-assigned, unique, monotonically increasing.
  pub id:         i64,
  pub name:       Option<String>,
  pub email:      Option<String>,
  pub subject:    Option<String>,
  pub message:    Option<String>,
  /// Assigned by the store at insert time; never client-supplied.
  pub created_at: DateTime<Utc>,
}

/// A submission that has not been persisted yet.
///
/// Every field is optional: a missing form field passes through as NULL
/// rather than rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSubmission {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub subject: Option<String>,
  pub message: Option<String>,
}
