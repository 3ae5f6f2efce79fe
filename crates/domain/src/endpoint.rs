//! Sensor endpoint — one remote URL exposing the current state of a sensor.

use serde::{Deserialize, Serialize};

use crate::error::{HubReportError, ValidationError};

/// A labelled sensor-state URL.
///
/// The label doubles as the fallback display name and as the name used in
/// the sentinel line when the endpoint cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorEndpoint {
    pub label: String,
    pub url: String,
}

impl SensorEndpoint {
    /// Build a validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HubReportError::Validation`] when the label or URL is empty.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Result<Self, HubReportError> {
        let endpoint = Self {
            label: label.into(),
            url: url.into(),
        };
        endpoint.validate()?;
        Ok(endpoint)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HubReportError::Validation`] when the label or URL is blank.
    pub fn validate(&self) -> Result<(), HubReportError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::EmptyLabel.into());
        }
        if self.url.trim().is_empty() {
            return Err(ValidationError::EmptyUrl {
                label: self.label.clone(),
            }
            .into());
        }
        Ok(())
    }
}
