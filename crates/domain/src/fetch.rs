//! Fetch outcome — the explicit result of reading one sensor endpoint.

use crate::endpoint::SensorEndpoint;
use crate::line::DisplayLine;
use crate::record::StateRecord;

/// Why a fetch produced no record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    /// Connection, TLS, or timeout error.
    #[error("transport error: {0}")]
    Transport(String),

    /// The hub answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not a JSON state document.
    #[error("invalid body: {0}")]
    Decode(String),
}

/// Result of a single fetch. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(StateRecord),
    Failure(FetchFailure),
}

impl FetchOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Turn this outcome into the report line for `endpoint`.
    #[must_use]
    pub fn into_line(self, endpoint: &SensorEndpoint) -> DisplayLine {
        match self {
            Self::Success(record) => DisplayLine::from_record(&record, &endpoint.label),
            Self::Failure(_) => DisplayLine::unavailable(&endpoint.label),
        }
    }
}

impl From<StateRecord> for FetchOutcome {
    fn from(record: StateRecord) -> Self {
        Self::Success(record)
    }
}

impl From<FetchFailure> for FetchOutcome {
    fn from(failure: FetchFailure) -> Self {
        Self::Failure(failure)
    }
}
