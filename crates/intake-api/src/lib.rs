//! JSON/CSV API for the contact intake service.
//!
//! Exposes an axum [`Router`] backed by any [`intake_core::SubmissionStore`].
//! TLS, static-asset serving, and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", intake_api::api_router(store.clone()))
//! ```

pub mod contact;
pub mod csv;
pub mod error;
pub mod export;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use intake_core::SubmissionStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SubmissionStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/contact", post(contact::handler::<S>))
    .route("/export", get(export::handler::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use intake_core::{NewSubmission, Submission};
  use intake_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  use super::*;

  /// A store whose operations always fail, for driving the 500 paths.
  #[derive(Debug, thiserror::Error)]
  #[error("store offline")]
  struct StoreOffline;

  #[derive(Clone)]
  struct FailingStore;

  impl SubmissionStore for FailingStore {
    type Error = StoreOffline;

    async fn insert(&self, _input: NewSubmission) -> Result<Submission, StoreOffline> {
      Err(StoreOffline)
    }

    async fn list_all(&self) -> Result<Vec<Submission>, StoreOffline> {
      Err(StoreOffline)
    }
  }

  async fn router() -> Router<()> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    api_router(Arc::new(store))
  }

  async fn post_json(app: &Router<()>, uri: &str, body: &str) -> axum::response::Response {
    let req = Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    app.clone().oneshot(req).await.unwrap()
  }

  async fn get_raw(app: &Router<()>, uri: &str) -> axum::response::Response {
    let req = Request::builder()
      .method("GET")
      .uri(uri)
      .body(Body::empty())
      .unwrap();
    app.clone().oneshot(req).await.unwrap()
  }

  async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  // ── Contact ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn contact_returns_success_json() {
    let app = router().await;
    let resp = post_json(
      &app,
      "/contact",
      r#"{"name":"Ada","email":"ada@x.com","subject":"Hi","message":"Test"}"#,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value =
      serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("saved"));
  }

  #[tokio::test]
  async fn contact_accepts_missing_fields() {
    let app = router().await;
    let resp = post_json(&app, "/contact", r#"{"name":"Ada"}"#).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The partial submission still exports, with NULLs as empty fields.
    let export = get_raw(&app, "/export").await;
    assert_eq!(export.status(), StatusCode::OK);
    let body = body_string(export).await;
    let line = body.split('\n').nth(1).unwrap();
    assert!(line.starts_with("\"1\",\"Ada\",\"\",\"\",\"\","), "line: {line}");
  }

  #[tokio::test]
  async fn contact_store_failure_returns_generic_500() {
    let app = api_router(Arc::new(FailingStore));
    let resp = post_json(
      &app,
      "/contact",
      r#"{"name":"Ada","email":"ada@x.com","subject":"Hi","message":"Test"}"#,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // The cause stays in the server log; the caller sees only the generic body.
    let json: serde_json::Value =
      serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to save submission");
  }

  // ── Export ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn export_empty_store_returns_404_no_data() {
    let app = router().await;
    let resp = get_raw(&app, "/export").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(resp).await, "No data to export");
  }

  #[tokio::test]
  async fn export_returns_csv_attachment() {
    let app = router().await;
    post_json(
      &app,
      "/contact",
      r#"{"name":"Ada","email":"ada@x.com","subject":"Hi","message":"Test"}"#,
    )
    .await;

    let resp = get_raw(&app, "/export").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert_eq!(ct, "text/csv");
    let cd = resp
      .headers()
      .get(header::CONTENT_DISPOSITION)
      .unwrap()
      .to_str()
      .unwrap();
    assert_eq!(cd, "attachment; filename=submissions.csv");

    let body = body_string(resp).await;
    let lines: Vec<_> = body.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "id,name,email,subject,message,created_at");
    assert!(
      lines[1].starts_with("\"1\",\"Ada\",\"ada@x.com\",\"Hi\",\"Test\",\""),
      "line: {}",
      lines[1]
    );
  }

  #[tokio::test]
  async fn export_store_failure_returns_500_plain_text() {
    let app = api_router(Arc::new(FailingStore));
    let resp = get_raw(&app, "/export").await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(resp).await, "Export failed");
  }

  #[tokio::test]
  async fn export_has_one_line_per_row_plus_header() {
    let app = router().await;
    for i in 0..5 {
      post_json(
        &app,
        "/contact",
        &format!(r#"{{"name":"n{i}","email":"e{i}","subject":"s","message":"m"}}"#),
      )
      .await;
    }

    let body = body_string(get_raw(&app, "/export").await).await;
    assert_eq!(body.split('\n').count(), 6);
    assert!(!body.ends_with('\n'));
  }

  #[tokio::test]
  async fn export_does_not_escape_quotes_or_commas() {
    let app = router().await;
    post_json(
      &app,
      "/contact",
      r#"{"name":"Ada","email":"ada@x.com","subject":"Hi","message":"He said \"hi\", then left"}"#,
    )
    .await;

    let body = body_string(get_raw(&app, "/export").await).await;
    assert!(
      body.contains(r#""He said "hi", then left""#),
      "body: {body}"
    );
  }
}
