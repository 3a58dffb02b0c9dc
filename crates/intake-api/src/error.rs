//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Store failures are never exposed to the caller in detail: the response
//! body carries a fixed generic message and the cause goes to the server
//! log only.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The store rejected an insert. Terminal for the request; the caller
  /// must resubmit.
  #[error("store write failed: {0}")]
  Save(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The store could not be read during export.
  #[error("store read failed: {0}")]
  Export(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The store holds no rows — a distinct outcome, not a failure.
  #[error("no data to export")]
  NoData,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match &self {
      ApiError::Save(e) => {
        tracing::error!(error = %e, "failed to save submission");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "success": false, "error": "Failed to save submission" })),
        )
          .into_response()
      }
      ApiError::Export(e) => {
        tracing::error!(error = %e, "failed to export submissions");
        (StatusCode::INTERNAL_SERVER_ERROR, "Export failed").into_response()
      }
      ApiError::NoData => {
        (StatusCode::NOT_FOUND, "No data to export").into_response()
      }
    }
  }
}
