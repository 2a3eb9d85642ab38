//! Ticker Symbol
//!
//! Validated, normalized stock ticker used as the key of the price table
//! and the portfolio.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Longest ticker accepted (e.g. "BRK.B" fits comfortably)
pub const MAX_SYMBOL_LEN: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Symbol is empty")]
    Empty,
    #[error("Symbol is too long ({0} characters, max {max})", max = MAX_SYMBOL_LEN)]
    TooLong(usize),
    #[error("Symbol contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// Short uppercase ticker such as `AAPL`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Normalize raw user input into a ticker.
    ///
    /// Surrounding whitespace is dropped and letters are uppercased, so
    /// `" aapl\n"` parses to `AAPL`.
    pub fn parse(raw: &str) -> Result<Self, SymbolError> {
        let normalized = raw.trim().to_uppercase();

        if normalized.is_empty() {
            return Err(SymbolError::Empty);
        }

        let len = normalized.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(SymbolError::TooLong(len));
        }

        if let Some(bad) = normalized
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '.'))
        {
            return Err(SymbolError::InvalidCharacter(bad));
        }

        Ok(Symbol(normalized))
    }

    /// Wrap a ticker literal that is already in normalized form
    pub(crate) fn from_static(ticker: &'static str) -> Self {
        debug_assert!(Symbol::parse(ticker).map(|s| s.0 == ticker).unwrap_or(false));
        Symbol(ticker.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::parse(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
