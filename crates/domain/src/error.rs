//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HubReportError`] via `From` at port boundaries.

use std::error::Error as StdError;

/// Top-level error shared by ports and services.
#[derive(Debug, thiserror::Error)]
pub enum HubReportError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A poll run is already in progress in this process.
    #[error("a poll run is already in progress")]
    AlreadyRunning,

    /// IO failure reported by a storage adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("label must not be empty")]
    EmptyLabel,

    #[error("url must not be empty for sensor {label:?}")]
    EmptyUrl { label: String },
}

/// A requested resource does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{resource} not found")]
pub struct NotFoundError {
    pub resource: &'static str,
}
