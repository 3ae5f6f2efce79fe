//! Report store port — persistence for the rendered report.

use std::future::Future;

use hubreport_domain::error::HubReportError;

/// Destination of the rendered report.
pub trait ReportStore {
    /// Replace the stored report with `content`.
    ///
    /// Readers must never observe a partially written report.
    fn write(&self, content: &str) -> impl Future<Output = Result<(), HubReportError>> + Send;

    /// Read the stored report, or `None` if nothing was written yet.
    fn read(&self) -> impl Future<Output = Result<Option<String>, HubReportError>> + Send;

    /// Human-readable location of the report, used in log lines.
    fn location(&self) -> String;
}
