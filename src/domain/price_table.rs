//! Price Table
//!
//! Fixed reference prices used to value the portfolio. Built once at
//! startup and only ever read afterwards.

use std::fmt;
use thiserror::Error;

use super::symbol::Symbol;

/// Tickers offered by the tracker with their unit price in rupees
pub const BUILTIN_PRICES: [(&str, i64); 5] = [
    ("AAPL", 180),
    ("TSLA", 250),
    ("GOOGL", 140),
    ("AMZN", 125),
    ("MSFT", 310),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceTableError {
    #[error("Price for {symbol} must be positive, got {price}")]
    NonPositivePrice { symbol: Symbol, price: i64 },
    #[error("Duplicate price entry for {0}")]
    DuplicateSymbol(Symbol),
}

/// Strictly positive unit price
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub fn new(value: i64) -> Option<Self> {
        (value > 0).then_some(Price(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable symbol -> price lookup, kept in listing order
#[derive(Debug, Clone)]
pub struct PriceTable {
    entries: Vec<(Symbol, Price)>,
}

impl PriceTable {
    /// The five stocks the tracker ships with
    pub fn builtin() -> Self {
        let entries = BUILTIN_PRICES
            .iter()
            .map(|&(ticker, price)| (Symbol::from_static(ticker), Price(price)))
            .collect();
        PriceTable { entries }
    }

    /// Build a table from arbitrary entries, rejecting bad prices and duplicates
    pub fn from_entries<I>(entries: I) -> Result<Self, PriceTableError>
    where
        I: IntoIterator<Item = (Symbol, i64)>,
    {
        let mut table = PriceTable { entries: Vec::new() };
        for (symbol, raw_price) in entries {
            if table.contains(&symbol) {
                return Err(PriceTableError::DuplicateSymbol(symbol));
            }
            let price = Price::new(raw_price).ok_or_else(|| PriceTableError::NonPositivePrice {
                symbol: symbol.clone(),
                price: raw_price,
            })?;
            table.entries.push((symbol, price));
        }
        Ok(table)
    }

    pub fn price_of(&self, symbol: &Symbol) -> Option<Price> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, price)| *price)
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.price_of(symbol).is_some()
    }

    /// Symbols in listing order
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.entries.iter().map(|(s, _)| s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
