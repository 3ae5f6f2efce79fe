//! On-demand poll run.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hubreport_app::ports::{ReportStore, StateSource};
use hubreport_domain::error::HubReportError;
use hubreport_domain::report::{Reading, parse_report};

use crate::state::AppState;

/// Body of `GET /run`, tagged by `status`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "UPPERCASE")]
pub enum RunResponse {
    /// The report was refreshed.
    Ok { readings: Vec<Reading>, raw: String },
    /// Another run holds the lock.
    Running { message: String },
    /// The run failed, or is still going past the timeout.
    Error { message: String },
}

impl IntoResponse for RunResponse {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Ok { .. } => StatusCode::OK,
            Self::Running { .. } => StatusCode::CONFLICT,
            Self::Error { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// `GET /run`
///
/// The poll runs in its own task so that a timed-out request never cancels
/// a write half way: the run keeps the lock until it has either replaced the
/// report or failed, and later requests answer `RUNNING` meanwhile.
pub async fn run<S, R>(State(state): State<AppState<S, R>>) -> RunResponse
where
    S: StateSource + Send + Sync + 'static,
    R: ReportStore + Send + Sync + 'static,
{
    let service = Arc::clone(&state.poll_service);
    let task = tokio::spawn(async move { service.run().await });

    match tokio::time::timeout(state.run_timeout, task).await {
        Ok(Ok(Ok(report))) => {
            let raw = report.render();
            RunResponse::Ok {
                readings: parse_report(&raw),
                raw,
            }
        }
        Ok(Ok(Err(HubReportError::AlreadyRunning))) => RunResponse::Running {
            message: HubReportError::AlreadyRunning.to_string(),
        },
        Ok(Ok(Err(err))) => {
            tracing::error!(error = %err, source = ?std::error::Error::source(&err), "poll run failed");
            RunResponse::Error {
                message: "failed to write report".to_string(),
            }
        }
        Ok(Err(err)) => {
            tracing::error!(error = %err, "poll run aborted");
            RunResponse::Error {
                message: "poll run aborted".to_string(),
            }
        }
        Err(_) => {
            tracing::warn!(timeout = ?state.run_timeout, "poll run timed out, finishing in background");
            RunResponse::Error {
                message: format!("poll run exceeded {:?}", state.run_timeout),
            }
        }
    }
}
