//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - Console: stdin/stdout prompt handling
//! - File sink: plain-text report export
//! - CLI: Command-line argument handling

pub mod console;
pub mod file_sink;
pub mod cli;

pub use console::LineConsole;
pub use file_sink::{FileReportSink, DEFAULT_REPORT_FILE};
pub use cli::CliApp;
