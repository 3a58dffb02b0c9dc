//! The `SubmissionStore` trait.
//!
//! Implemented by storage backends (e.g. `intake-store-sqlite`). Higher
//! layers (`intake-api`, `intake-server`) depend on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use crate::submission::{NewSubmission, Submission};

/// Abstraction over a submission store backend.
///
/// The store is append-only: rows are inserted exactly once and never
/// updated or deleted.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SubmissionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append one submission and return the persisted row.
  ///
  /// The store assigns `id` and `created_at`; content is accepted as-is
  /// (empty strings and absent fields included). Validation, if any, is the
  /// caller's responsibility.
  fn insert(
    &self,
    input: NewSubmission,
  ) -> impl Future<Output = Result<Submission, Self::Error>> + Send + '_;

  /// Return every row in insertion order (`id` ascending).
  ///
  /// Reflects all committed inserts at call time; there is no staleness
  /// tolerance in this single-writer store.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Submission>, Self::Error>> + Send + '_;
}
