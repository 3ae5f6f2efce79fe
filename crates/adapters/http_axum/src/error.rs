//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hubreport_domain::error::HubReportError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HubReportError`] to an HTTP response with appropriate status code.
pub struct ApiError(HubReportError);

impl From<HubReportError> for ApiError {
    fn from(err: HubReportError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HubReportError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HubReportError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HubReportError::AlreadyRunning => (StatusCode::CONFLICT, self.0.to_string()),
            HubReportError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
