//! Display line — one `"<name> = <value>"` entry of the report.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::StateRecord;

/// Placeholder printed when a value is missing or a sensor is unreachable.
pub const NOT_AVAILABLE: &str = "N/A";

/// A named, formatted sensor value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLine {
    pub name: String,
    pub value_text: String,
}

impl DisplayLine {
    #[must_use]
    pub fn new(name: impl Into<String>, value_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_text: value_text.into(),
        }
    }

    /// Sentinel line for a sensor that could not be read.
    #[must_use]
    pub fn unavailable(label: impl Into<String>) -> Self {
        Self::new(label, NOT_AVAILABLE)
    }

    /// Derive the display name and value text from a fetched record.
    ///
    /// The name is the record's `friendly_name`, falling back to
    /// `fallback_name`. The value is the raw state (or `N/A`), followed by
    /// a space and the unit when the record carries a non-empty
    /// `unit_of_measurement`.
    #[must_use]
    pub fn from_record(record: &StateRecord, fallback_name: &str) -> Self {
        let name = record
            .friendly_name()
            .unwrap_or_else(|| fallback_name.to_string());
        let state = record
            .state_text()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let value_text = match record.unit_of_measurement() {
            Some(unit) if !unit.is_empty() => format!("{state} {unit}"),
            _ => state,
        };
        Self { name, value_text }
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value_text)
    }
}
