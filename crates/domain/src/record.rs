//! State record — the JSON document a hub returns for one sensor.
//!
//! Only the fields the report needs are modelled; everything else in the
//! response (`last_changed`, `context`, …) is ignored on deserialization.

mod attribute_value;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use attribute_value::AttributeValue;

/// Attribute holding the human-readable sensor name.
pub const FRIENDLY_NAME: &str = "friendly_name";
/// Attribute holding the unit of the state value.
pub const UNIT_OF_MEASUREMENT: &str = "unit_of_measurement";

/// Current state of one sensor as reported by the hub.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateRecord {
    pub entity_id: Option<String>,
    pub state: Option<AttributeValue>,
    pub attributes: HashMap<String, AttributeValue>,
}

impl StateRecord {
    #[must_use]
    pub fn with_state(mut self, state: impl Into<AttributeValue>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute by key.
    #[must_use]
    pub fn get_attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// The `friendly_name` attribute, if present and not `null`.
    #[must_use]
    pub fn friendly_name(&self) -> Option<String> {
        self.get_attribute(FRIENDLY_NAME)
            .and_then(AttributeValue::to_text)
    }

    /// The `unit_of_measurement` attribute, if present and not `null`.
    #[must_use]
    pub fn unit_of_measurement(&self) -> Option<String> {
        self.get_attribute(UNIT_OF_MEASUREMENT)
            .and_then(AttributeValue::to_text)
    }

    /// The raw state as text, if present and not `null`.
    #[must_use]
    pub fn state_text(&self) -> Option<String> {
        self.state.as_ref().and_then(AttributeValue::to_text)
    }
}
