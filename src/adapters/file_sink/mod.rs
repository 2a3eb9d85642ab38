//! File Report Sink
//!
//! Writes the report to a plain UTF-8 text file, replacing any previous
//! contents. The file is opened, written and closed within one `save` call.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::Report;
use crate::ports::{ReportSink, SinkError};

/// Default report file name, relative to the working directory
pub const DEFAULT_REPORT_FILE: &str = "portfolio_summary.txt";

#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileReportSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_report(&self, report: &Report) -> std::io::Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        report.write_to(&mut writer)?;
        writer.flush()
    }
}

impl Default for FileReportSink {
    fn default() -> Self {
        FileReportSink::new(DEFAULT_REPORT_FILE)
    }
}

impl ReportSink for FileReportSink {
    fn save(&mut self, report: &Report) -> Result<PathBuf, SinkError> {
        tracing::info!("Writing report to {}", self.path.display());

        self.write_report(report).map_err(|source| SinkError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(self.path.clone())
    }
}
