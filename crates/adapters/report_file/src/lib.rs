//! # hubreport-adapter-report-file
//!
//! File persistence adapter for the report.
//!
//! ## Responsibilities
//! - Implement the `ReportStore` port defined in `hubreport-app::ports`
//! - Write the report to a temporary sibling file, then rename it over the
//!   final path so readers never see a half-written report
//! - Surface every write or rename failure to the caller
//!
//! ## Dependency rule
//! Depends on `hubreport-app` (for port traits) and `hubreport-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod config;
pub mod error;
pub mod store;

pub use config::ReportFileConfig;
pub use error::ReportFileError;
pub use store::AtomicFileStore;
