//! Handler for `GET /export`.

use std::sync::Arc;

use axum::{
  extract::State,
  http::header,
  response::IntoResponse,
};
use intake_core::SubmissionStore;

use crate::{
  csv::{EXPORT_FILENAME, to_csv},
  error::ApiError,
};

/// `GET /export` — download the full submission log as CSV.
///
/// An empty store is reported as 404 "No data to export", which is a
/// distinct outcome from a read failure (500).
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SubmissionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let rows = store
    .list_all()
    .await
    .map_err(|e| ApiError::Export(Box::new(e)))?;

  if rows.is_empty() {
    return Err(ApiError::NoData);
  }

  let headers = [
    (header::CONTENT_TYPE, "text/csv".to_owned()),
    (
      header::CONTENT_DISPOSITION,
      format!("attachment; filename={EXPORT_FILENAME}"),
    ),
  ];

  Ok((headers, to_csv(&rows)))
}
