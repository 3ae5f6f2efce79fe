//! # hubreport-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - `GET /run` — perform one poll run and answer with the parsed readings
//!   (`409` while another run is in progress)
//! - `GET /data.txt` — serve the current report as plain text
//! - `GET /api/readings` — serve the current report parsed into JSON
//! - Optionally serve a static directory (a dashboard) as the fallback route
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `hubreport-app` (for port traits and services) and `hubreport-domain`
//! (for domain types used in response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
