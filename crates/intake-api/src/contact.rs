//! Handler for `POST /contact`.

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use intake_core::{NewSubmission, SubmissionStore};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;

/// JSON body accepted by `POST /contact`.
///
/// Every field is optional and passed through to the store as-is; there is
/// no server-side validation of presence or format.
#[derive(Debug, Deserialize)]
pub struct ContactBody {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub subject: Option<String>,
  pub message: Option<String>,
}

impl From<ContactBody> for NewSubmission {
  fn from(b: ContactBody) -> Self {
    NewSubmission {
      name:    b.name,
      email:   b.email,
      subject: b.subject,
      message: b.message,
    }
  }
}

/// `POST /contact` — persist one submission.
///
/// Returns `{"success":true,...}` on success. On a store failure the caller
/// sees only a generic `{"success":false,...}`; the cause is logged
/// server-side.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<ContactBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubmissionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .insert(NewSubmission::from(body))
    .await
    .map_err(|e| ApiError::Save(Box::new(e)))?;

  Ok(Json(json!({
    "success": true,
    "message": "Submission saved to database (Excel-compatible)",
  })))
}
