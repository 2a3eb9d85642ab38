use thiserror::Error;

use super::symbol::Symbol;

/// Cumulative quantity purchased for one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holding {
    pub symbol: Symbol,
    pub quantity: i64,
}

impl Holding {
    pub fn new(symbol: Symbol, quantity: i64) -> Self {
        Holding { symbol, quantity }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("Adding {added} to {symbol} (currently {current}) overflows the share count")]
    QuantityOverflow {
        symbol: Symbol,
        current: i64,
        added: i64,
    },
}

/// Holdings keyed by symbol, kept in the order each symbol was first bought
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Portfolio {
            holdings: Vec::new(),
        }
    }

    /// Add `quantity` shares of `symbol`, returning the new cumulative quantity
    pub fn record(&mut self, symbol: Symbol, quantity: i64) -> Result<i64, PortfolioError> {
        match self.holdings.iter_mut().find(|h| h.symbol == symbol) {
            Some(holding) => {
                let updated = holding.quantity.checked_add(quantity).ok_or_else(|| {
                    PortfolioError::QuantityOverflow {
                        symbol: symbol.clone(),
                        current: holding.quantity,
                        added: quantity,
                    }
                })?;
                holding.quantity = updated;
                Ok(updated)
            }
            None => {
                self.holdings.push(Holding::new(symbol, quantity));
                Ok(quantity)
            }
        }
    }

    pub fn quantity_of(&self, symbol: &Symbol) -> Option<i64> {
        self.holdings
            .iter()
            .find(|h| &h.symbol == symbol)
            .map(|h| h.quantity)
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
