//! Poll service — fetch every configured sensor, format, and write the report.

use tokio::sync::Mutex;

use hubreport_domain::endpoint::SensorEndpoint;
use hubreport_domain::error::HubReportError;
use hubreport_domain::report::Report;

use crate::ports::{ReportStore, StateSource};

/// Runs the fetch → extract → write pipeline over a fixed endpoint list.
///
/// Endpoints are fetched one after another and the report keeps their
/// configured order. At most one [`run`](Self::run) is active per service
/// instance; overlapping calls fail fast with
/// [`HubReportError::AlreadyRunning`].
pub struct PollService<S, R> {
    source: S,
    store: R,
    endpoints: Vec<SensorEndpoint>,
    run_lock: Mutex<()>,
}

impl<S: StateSource, R: ReportStore> PollService<S, R> {
    /// Create a new service over `endpoints`, reading from `source` and
    /// writing to `store`.
    pub fn new(source: S, store: R, endpoints: Vec<SensorEndpoint>) -> Self {
        Self {
            source,
            store,
            endpoints,
            run_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn endpoints(&self) -> &[SensorEndpoint] {
        &self.endpoints
    }

    /// Fetch all endpoints and build the report, without writing it.
    ///
    /// Always yields exactly one line per endpoint: unreachable sensors get
    /// the `"<label> = N/A"` placeholder.
    #[tracing::instrument(skip(self), fields(endpoints = self.endpoints.len()))]
    pub async fn collect(&self) -> Report {
        let mut report = Report::default();
        for endpoint in &self.endpoints {
            let outcome = self.source.fetch(endpoint).await;
            let fetched = outcome.is_success();
            let line = outcome.into_line(endpoint);
            if fetched {
                tracing::info!(name = %line.name, value = %line.value_text, "sensor reading");
            } else {
                tracing::debug!(label = %endpoint.label, "sensor unavailable, writing placeholder");
            }
            report.push(line);
        }
        report
    }

    /// Collect the report and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`HubReportError::AlreadyRunning`] if another run holds the
    /// lock, or the storage error raised while writing the report.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self) -> Result<Report, HubReportError> {
        let _guard = self
            .run_lock
            .try_lock()
            .map_err(|_| HubReportError::AlreadyRunning)?;
        let report = self.collect().await;
        self.store.write(&report.render()).await?;
        tracing::info!(location = %self.store.location(), "report updated");
        Ok(report)
    }

    /// Read the last written report, if any.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn read_report(&self) -> Result<Option<String>, HubReportError> {
        self.store.read().await
    }
}
