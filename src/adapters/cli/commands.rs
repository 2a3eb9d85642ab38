//! CLI Command Handler
//!
//! The tracker is prompt-driven; flags only tune logging and point at an
//! optional configuration file.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::adapters::console::LineConsole;
use crate::adapters::file_sink::FileReportSink;
use crate::application::PortfolioTracker;
use crate::config::{load_config, Config};
use crate::domain::PriceTable;

/// Portfolio Tracker - tally stock purchases and export an investment summary
#[derive(Parser, Debug)]
#[command(
    name = "portfolio-tracker",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Interactive stock portfolio tracker",
    long_about = "Prompts for stock symbols and quantities, values them against a fixed \
                  price table and optionally saves the investment summary to a text file."
)]
pub struct CliApp {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Execute the CLI command
pub fn execute(app: CliApp) -> Result<()> {
    let config = match app.config {
        Some(ref path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    init_logging(app.verbose, app.debug, &config.logging.level)?;
    tracing::info!("Starting portfolio tracker");
    if let Some(ref path) = app.config {
        tracing::info!("Config: {}", path.display());
    }

    let output_file = config.report.resolved_output_file();
    let tracker = PortfolioTracker::new(PriceTable::builtin(), config.tracker_settings());
    let mut console = LineConsole::stdio();
    let mut sink = FileReportSink::new(output_file);

    let summary = tracker
        .run(&mut console, &mut sink)
        .context("Portfolio tracker session failed")?;

    tracing::info!(
        "Session finished: {} holdings, total {}, saved: {}",
        summary.report.lines().len(),
        summary.report.total(),
        summary.saved_to.is_some()
    );
    Ok(())
}

/// Initialize logging system
///
/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_logging(verbose: bool, debug: bool, configured_level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        configured_level
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
