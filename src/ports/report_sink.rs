use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Report;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for a finished report
pub trait ReportSink {
    /// Persist the report, returning where it went
    fn save(&mut self, report: &Report) -> Result<PathBuf, SinkError>;
}
