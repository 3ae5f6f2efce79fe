//! Hub client error types.

use hubreport_domain::error::HubReportError;

/// Errors raised while building the [`HubClient`](crate::HubClient).
///
/// Request-time failures are not errors: they become
/// `FetchOutcome::Failure` values.
#[derive(Debug, thiserror::Error)]
pub enum HubClientError {
    /// The token contains characters not allowed in an HTTP header.
    #[error("auth token is not a valid header value")]
    InvalidToken(#[source] reqwest::header::InvalidHeaderValue),

    /// The underlying reqwest client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),
}

impl From<HubClientError> for HubReportError {
    fn from(err: HubClientError) -> Self {
        HubReportError::Storage(Box::new(err))
    }
}
