//! HTTP handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod report;
pub mod run;

use axum::Router;
use axum::routing::get;

use hubreport_app::ports::{ReportStore, StateSource};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, R>() -> Router<AppState<S, R>>
where
    S: StateSource + Send + Sync + 'static,
    R: ReportStore + Send + Sync + 'static,
{
    Router::new().route("/readings", get(report::readings::<S, R>))
}
