//! Shared application state for axum handlers.

use std::sync::Arc;
use std::time::Duration;

use hubreport_app::ports::{ReportStore, StateSource};
use hubreport_app::services::poll_service::PollService;

/// Application state shared across all axum handlers.
///
/// Generic over the state source and report store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S, R> {
    /// The poll pipeline.
    pub poll_service: Arc<PollService<S, R>>,
    /// Upper bound for one `/run` request.
    pub run_timeout: Duration,
}

impl<S, R> Clone for AppState<S, R> {
    fn clone(&self) -> Self {
        Self {
            poll_service: Arc::clone(&self.poll_service),
            run_timeout: self.run_timeout,
        }
    }
}

impl<S, R> AppState<S, R>
where
    S: StateSource + Send + Sync + 'static,
    R: ReportStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(poll_service: PollService<S, R>, run_timeout: Duration) -> Self {
        Self {
            poll_service: Arc::new(poll_service),
            run_timeout,
        }
    }
}
