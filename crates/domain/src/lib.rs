//! # hubreport-domain
//!
//! Pure domain model for the hubreport sensor poller.
//!
//! ## Responsibilities
//! - Define **Sensor endpoints** (a label and the URL exposing its state)
//! - Define **State records** (the hub's JSON document: state + attributes)
//! - Define **Fetch outcomes** (success with a record, or a typed failure)
//! - Define **Display lines** and the extraction rules from a record
//! - Define the **Report** text format and its parser
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod endpoint;
pub mod fetch;
pub mod line;
pub mod record;
pub mod report;
