//! CLI Adapter
//!
//! Command-line entry point for the portfolio tracker.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{execute, CliApp};

/// Initialize the CLI application
pub fn init() -> CliApp {
    use clap::Parser;
    CliApp::parse()
}
