//! # pantry-adapter-report-fs
//!
//! Writes inventory reports to a plain UTF-8 text file, the hand-off point
//! for whatever shares or prints the document.
//!
//! ## Dependency rule
//! Depends on `pantry-app` (for the [`ReportSink`] port) and `pantry-domain`.

use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};

use pantry_app::ports::ReportSink;
use pantry_domain::error::PantryError;

/// Errors raised while writing a report file.
#[derive(Debug, thiserror::Error)]
pub enum ReportFileError {
    #[error("failed to write report to {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("report writer task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl From<ReportFileError> for PantryError {
    fn from(err: ReportFileError) -> Self {
        Self::Export(Box::new(err))
    }
}

/// [`ReportSink`] writing each report to a fixed path, replacing the
/// previous one.
///
/// The text is written to a uniquely named temporary file in the target's
/// directory and then renamed over the target, so readers never see a
/// half-written report. The temporary file is removed if the rename fails.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination of the report file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), ReportFileError> {
    let io_err = |source| ReportFileError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent).map_err(io_err)?;
            parent
        }
        None => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents).map_err(io_err)?;
    // On failure the returned handle is dropped, which deletes the file.
    tmp.persist(path).map_err(|err| io_err(err.error))?;
    Ok(())
}

impl ReportSink for FileReportSink {
    fn publish(&self, report: String) -> impl Future<Output = Result<String, PantryError>> + Send {
        let path = self.path.clone();
        async move {
            let bytes = report.len();
            let target = path.clone();
            tokio::task::spawn_blocking(move || write_atomically(&target, report.as_bytes()))
                .await
                .map_err(ReportFileError::from)??;
            tracing::debug!(path = %path.display(), bytes, "report written");
            Ok(path.display().to_string())
        }
    }
}
