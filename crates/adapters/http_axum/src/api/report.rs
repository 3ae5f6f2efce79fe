//! Handlers serving the stored report.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use hubreport_app::ports::{ReportStore, StateSource};
use hubreport_domain::error::{HubReportError, NotFoundError};
use hubreport_domain::report::{Reading, parse_report};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the raw report endpoint.
pub enum RawResponse {
    Ok(String),
}

impl IntoResponse for RawResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(content) => content.into_response(),
        }
    }
}

/// Possible responses from the readings endpoint.
pub enum ReadingsResponse {
    Ok(Json<Vec<Reading>>),
}

impl IntoResponse for ReadingsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

async fn load<S, R>(state: &AppState<S, R>) -> Result<String, ApiError>
where
    S: StateSource + Send + Sync + 'static,
    R: ReportStore + Send + Sync + 'static,
{
    state
        .poll_service
        .read_report()
        .await?
        .ok_or_else(|| HubReportError::from(NotFoundError { resource: "report" }).into())
}

/// `GET /data.txt`
pub async fn raw<S, R>(State(state): State<AppState<S, R>>) -> Result<RawResponse, ApiError>
where
    S: StateSource + Send + Sync + 'static,
    R: ReportStore + Send + Sync + 'static,
{
    load(&state).await.map(RawResponse::Ok)
}

/// `GET /api/readings`
pub async fn readings<S, R>(
    State(state): State<AppState<S, R>>,
) -> Result<ReadingsResponse, ApiError>
where
    S: StateSource + Send + Sync + 'static,
    R: ReportStore + Send + Sync + 'static,
{
    let content = load(&state).await?;
    Ok(ReadingsResponse::Ok(Json(parse_report(&content))))
}
