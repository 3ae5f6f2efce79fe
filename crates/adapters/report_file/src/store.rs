//! Atomic report file store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use hubreport_app::ports::ReportStore;
use hubreport_domain::error::HubReportError;

use crate::config::ReportFileConfig;
use crate::error::ReportFileError;

/// Stores the report as a UTF-8 text file, replaced atomically on each write.
///
/// The content is written and synced to `tmp_path`, then renamed onto
/// `path`. If the temporary write fails, `path` is left untouched.
#[derive(Debug, Clone)]
pub struct AtomicFileStore {
    path: PathBuf,
    tmp_path: PathBuf,
}

impl AtomicFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, tmp_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tmp_path: tmp_path.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ReportFileConfig) -> Self {
        Self::new(config.path.clone(), config.resolved_tmp_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn tmp_path(&self) -> &Path {
        &self.tmp_path
    }

    async fn write_tmp(&self, content: &str) -> Result<(), ReportFileError> {
        let wrap = |source| ReportFileError::Write {
            path: self.tmp_path.clone(),
            source,
        };
        let mut file = tokio::fs::File::create(&self.tmp_path)
            .await
            .map_err(wrap)?;
        file.write_all(content.as_bytes()).await.map_err(wrap)?;
        file.sync_all().await.map_err(wrap)?;
        Ok(())
    }

    async fn replace(&self, content: &str) -> Result<(), ReportFileError> {
        self.write_tmp(content).await?;
        if let Err(source) = tokio::fs::rename(&self.tmp_path, &self.path).await {
            if let Err(err) = tokio::fs::remove_file(&self.tmp_path).await {
                tracing::debug!(%err, path = %self.tmp_path.display(), "failed to clean up temporary report");
            }
            return Err(ReportFileError::Rename {
                from: self.tmp_path.clone(),
                to: self.path.clone(),
                source,
            });
        }
        Ok(())
    }

    async fn load(&self) -> Result<Option<String>, ReportFileError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ReportFileError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl ReportStore for AtomicFileStore {
    async fn write(&self, content: &str) -> Result<(), HubReportError> {
        self.replace(content).await.map_err(HubReportError::from)
    }

    async fn read(&self) -> Result<Option<String>, HubReportError> {
        self.load().await.map_err(HubReportError::from)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
