//! Report file location configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Where the report lives and where it is staged before being renamed into place.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportFileConfig {
    /// Final report path.
    pub path: PathBuf,
    /// Temporary path; defaults to `path` with a `.tmp` extension.
    pub tmp_path: Option<PathBuf>,
}

impl ReportFileConfig {
    /// The temporary path actually used for staging.
    #[must_use]
    pub fn resolved_tmp_path(&self) -> PathBuf {
        self.tmp_path
            .clone()
            .unwrap_or_else(|| self.path.with_extension("tmp"))
    }
}

impl Default for ReportFileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data.txt"),
            tmp_path: None,
        }
    }
}
