//! Typed attribute values attached to state records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single typed attribute (or state) value as returned by the hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Json(serde_json::Value),
}

impl AttributeValue {
    /// Whether this value is JSON `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Json(serde_json::Value::Null))
    }

    /// Text used when the value is printed in a report line.
    ///
    /// `null` has no text form and yields `None`.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        if self.is_null() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => fmt::Display::fmt(value, f),
            Self::Int(value) => fmt::Display::fmt(value, f),
            Self::Float(value) => match serde_json::Number::from_f64(*value) {
                Some(number) => fmt::Display::fmt(&number, f),
                None => fmt::Display::fmt(value, f),
            },
            Self::String(value) => f.write_str(value),
            Self::Json(value) => fmt::Display::fmt(value, f),
        }
    }
}
