//! # hubreport-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StateSource` — read the current state of one sensor endpoint
//!   - `ReportStore` — persist and read back the report text
//! - Define the **driving/inbound** use-case:
//!   - `PollService` — fetch every endpoint in order, format, write once
//! - Orchestrate domain objects without knowing *how* HTTP or files work
//!
//! ## Dependency rule
//! Depends on `hubreport-domain` only (plus `tokio::sync` for the run lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
