//! Portfolio Tracker
//!
//! Coordinates one run: welcome banner, purchase collection, report
//! printing and the optional save.

use std::path::PathBuf;
use thiserror::Error;

use super::session::{collect_purchases, SessionError, SessionPolicy, SessionStats};
use crate::domain::{Portfolio, PriceTable, Report, ReportError};
use crate::ports::{Console, ConsoleError, ReportSink, SinkError};

pub const WELCOME_MESSAGE: &str = "Welcome to the Stock Portfolio Tracker!";
pub const SAVE_PROMPT: &str = "Do you want to save this report to a file? (yes/no): ";

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Input session failed: {0}")]
    Session(#[from] SessionError),
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),
    #[error("Failed to save report: {0}")]
    Save(#[from] SinkError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    pub policy: SessionPolicy,
    /// Lowercase answer that confirms saving
    pub confirm_word: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        TrackerSettings {
            policy: SessionPolicy::default(),
            confirm_word: "yes".to_string(),
        }
    }
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct TrackerSummary {
    pub portfolio: Portfolio,
    pub report: Report,
    pub stats: SessionStats,
    pub saved_to: Option<PathBuf>,
}

pub struct PortfolioTracker {
    prices: PriceTable,
    settings: TrackerSettings,
}

impl PortfolioTracker {
    pub fn new(prices: PriceTable, settings: TrackerSettings) -> Self {
        PortfolioTracker { prices, settings }
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Run a full session against the given console and sink
    pub fn run<C, S>(&self, console: &mut C, sink: &mut S) -> Result<TrackerSummary, TrackerError>
    where
        C: Console + ?Sized,
        S: ReportSink + ?Sized,
    {
        self.greet(console)?;

        let outcome = collect_purchases(console, &self.prices, &self.settings.policy)?;
        let report = Report::build(&outcome.portfolio, &self.prices)?;

        console.say("")?;
        for line in report.to_text().lines() {
            console.say(line)?;
        }

        let saved_to = if self.confirm_save(console)? {
            let path = sink.save(&report)?;
            console.say(&format!("Report saved to {}", path.display()))?;
            Some(path)
        } else {
            tracing::info!("Report not saved");
            None
        };

        Ok(TrackerSummary {
            portfolio: outcome.portfolio,
            report,
            stats: outcome.stats,
            saved_to,
        })
    }

    fn greet<C: Console + ?Sized>(&self, console: &mut C) -> Result<(), ConsoleError> {
        let available: Vec<&str> = self.prices.symbols().map(|s| s.as_str()).collect();
        console.say(WELCOME_MESSAGE)?;
        console.say(&format!("Available stocks: {}", available.join(", ")))
    }

    /// Anything other than the confirm word (or closed input) means no
    fn confirm_save<C: Console + ?Sized>(&self, console: &mut C) -> Result<bool, ConsoleError> {
        console.say("")?;
        let answer = console.ask(SAVE_PROMPT)?;
        Ok(answer
            .map(|a| a.trim().to_lowercase() == self.settings.confirm_word)
            .unwrap_or(false))
    }
}
