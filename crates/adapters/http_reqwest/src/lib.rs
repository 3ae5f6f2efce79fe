//! # hubreport-adapter-http-reqwest
//!
//! Hub state adapter using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `StateSource` port defined in `hubreport-app::ports`
//! - Send one authenticated `GET` per endpoint (bearer token, JSON accept
//!   header, bounded by a timeout), with no retries
//! - Map transport errors, non-2xx statuses, and undecodable bodies into
//!   `FetchOutcome::Failure` so a single sensor never aborts a run
//!
//! ## Dependency rule
//! Depends on `hubreport-app` (for port traits) and `hubreport-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod client;
pub mod config;
pub mod error;

pub use client::HubClient;
pub use config::HubClientConfig;
pub use error::HubClientError;
