//! Purchase Session
//!
//! The interactive input loop: prompt for a symbol, then a quantity, and
//! accumulate accepted pairs into a portfolio until the sentinel is typed.
//! Bad symbols and bad quantities are reported to the user and never leave
//! the loop.

use thiserror::Error;

use crate::domain::{Portfolio, PriceTable, Symbol};
use crate::ports::{Console, ConsoleError};

pub const UNKNOWN_SYMBOL_MESSAGE: &str = "Stock not found. Please enter a valid symbol.";
pub const INVALID_QUANTITY_MESSAGE: &str = "Invalid quantity. Please enter a number.";
pub const NON_POSITIVE_QUANTITY_MESSAGE: &str = "Quantity must be a positive number.";
pub const QUANTITY_OVERFLOW_MESSAGE: &str = "Quantity too large. Please enter a smaller number.";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),
}

/// How the input loop interprets what the user types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPolicy {
    /// Uppercase word that ends collection
    pub sentinel: String,
    /// Discard zero and negative quantities
    pub reject_non_positive: bool,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        SessionPolicy {
            sentinel: "DONE".to_string(),
            reject_non_positive: false,
        }
    }
}

impl SessionPolicy {
    pub fn symbol_prompt(&self) -> String {
        format!(
            "Enter stock symbol (or '{}' to finish): ",
            self.sentinel.to_lowercase()
        )
    }

    pub fn quantity_prompt(symbol: &Symbol) -> String {
        format!("Enter quantity of {} shares: ", symbol)
    }

    fn is_sentinel(&self, normalized: &str) -> bool {
        normalized == self.sentinel
    }
}

/// Counters for what happened during a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub accepted: usize,
    pub unknown_symbols: usize,
    pub invalid_quantities: usize,
    pub rejected_quantities: usize,
}

#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub portfolio: Portfolio,
    pub stats: SessionStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Collecting,
    Done,
}

/// Run the input loop to completion and hand back the filled portfolio
pub fn collect_purchases<C: Console + ?Sized>(
    console: &mut C,
    prices: &PriceTable,
    policy: &SessionPolicy,
) -> Result<SessionOutcome, SessionError> {
    let mut portfolio = Portfolio::new();
    let mut stats = SessionStats::default();
    let mut state = SessionState::Collecting;

    while state == SessionState::Collecting {
        state = step(console, prices, policy, &mut portfolio, &mut stats)?;
    }

    tracing::info!(
        "Input finished: {} accepted, {} unknown symbols, {} invalid quantities, {} rejected",
        stats.accepted,
        stats.unknown_symbols,
        stats.invalid_quantities,
        stats.rejected_quantities
    );

    Ok(SessionOutcome { portfolio, stats })
}

/// One prompt cycle. Any outcome other than the sentinel (or end of input)
/// keeps collecting.
fn step<C: Console + ?Sized>(
    console: &mut C,
    prices: &PriceTable,
    policy: &SessionPolicy,
    portfolio: &mut Portfolio,
    stats: &mut SessionStats,
) -> Result<SessionState, SessionError> {
    let Some(raw_symbol) = console.ask(&policy.symbol_prompt())? else {
        tracing::warn!("Input closed before '{}' was entered", policy.sentinel);
        return Ok(SessionState::Done);
    };

    let normalized = raw_symbol.trim().to_uppercase();
    if policy.is_sentinel(&normalized) {
        return Ok(SessionState::Done);
    }

    let symbol = match Symbol::parse(&normalized) {
        Ok(symbol) if prices.contains(&symbol) => symbol,
        Ok(symbol) => {
            tracing::debug!("Unknown symbol {}", symbol);
            return unknown_symbol(console, stats);
        }
        Err(e) => {
            tracing::debug!("Malformed symbol {:?}: {}", raw_symbol, e);
            return unknown_symbol(console, stats);
        }
    };

    let Some(raw_quantity) = console.ask(&SessionPolicy::quantity_prompt(&symbol))? else {
        tracing::warn!("Input closed while waiting for a quantity of {}", symbol);
        return Ok(SessionState::Done);
    };

    let quantity: i64 = match raw_quantity.trim().parse() {
        Ok(q) => q,
        Err(e) => {
            tracing::debug!("Invalid quantity {:?} for {}: {}", raw_quantity, symbol, e);
            stats.invalid_quantities += 1;
            console.say(INVALID_QUANTITY_MESSAGE)?;
            return Ok(SessionState::Collecting);
        }
    };

    if policy.reject_non_positive && quantity <= 0 {
        tracing::debug!("Rejected non-positive quantity {} for {}", quantity, symbol);
        stats.rejected_quantities += 1;
        console.say(NON_POSITIVE_QUANTITY_MESSAGE)?;
        return Ok(SessionState::Collecting);
    }

    match portfolio.record(symbol.clone(), quantity) {
        Ok(total) => {
            stats.accepted += 1;
            tracing::debug!("Recorded {} x {} (now {})", quantity, symbol, total);
        }
        Err(e) => {
            tracing::warn!("{}", e);
            stats.invalid_quantities += 1;
            console.say(QUANTITY_OVERFLOW_MESSAGE)?;
        }
    }

    Ok(SessionState::Collecting)
}

fn unknown_symbol<C: Console + ?Sized>(
    console: &mut C,
    stats: &mut SessionStats,
) -> Result<SessionState, SessionError> {
    stats.unknown_symbols += 1;
    console.say(UNKNOWN_SYMBOL_MESSAGE)?;
    Ok(SessionState::Collecting)
}
