//! Report file adapter error types.

use std::path::PathBuf;

use hubreport_domain::error::HubReportError;

/// Errors raised while persisting or reading the report.
#[derive(Debug, thiserror::Error)]
pub enum ReportFileError {
    #[error("failed to write temporary report {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move {} onto {}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read report {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ReportFileError> for HubReportError {
    fn from(err: ReportFileError) -> Self {
        HubReportError::Storage(Box::new(err))
    }
}
