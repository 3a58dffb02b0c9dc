//! Core types and trait definitions for the contact intake service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod store;
pub mod submission;

pub use store::SubmissionStore;
pub use submission::{NewSubmission, Submission};
