//! Investment Report
//!
//! Values the portfolio against the price table and renders the summary
//! text shared by the console and the saved file.

use std::fmt::Write as _;
use std::io;
use thiserror::Error;

use super::portfolio::Portfolio;
use super::price_table::{Price, PriceTable};
use super::symbol::Symbol;

pub const REPORT_HEADER: &str = "Investment Summary:";
pub const CURRENCY: &str = "₹";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Holding {0} has no entry in the price table")]
    UnpricedSymbol(Symbol),
}

/// One valued holding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub symbol: Symbol,
    pub quantity: i64,
    pub price: Price,
    pub value: i128,
}

impl ReportLine {
    pub fn new(symbol: Symbol, quantity: i64, price: Price) -> Self {
        let value = i128::from(price.get()) * i128::from(quantity);
        ReportLine {
            symbol,
            quantity,
            price,
            value,
        }
    }

    /// `AAPL: 10 shares × ₹180 = ₹1800`
    pub fn render(&self) -> String {
        format!(
            "{}: {} shares × {CURRENCY}{} = {CURRENCY}{}",
            self.symbol, self.quantity, self.price, self.value
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
    total: i128,
}

impl Report {
    /// Value every holding in portfolio order
    pub fn build(portfolio: &Portfolio, prices: &PriceTable) -> Result<Self, ReportError> {
        let mut lines = Vec::with_capacity(portfolio.len());
        let mut total: i128 = 0;

        for holding in portfolio.holdings() {
            let price = prices
                .price_of(&holding.symbol)
                .ok_or_else(|| ReportError::UnpricedSymbol(holding.symbol.clone()))?;
            let line = ReportLine::new(holding.symbol.clone(), holding.quantity, price);
            total += line.value;
            lines.push(line);
        }

        tracing::debug!("Built report: {} lines, total {}", lines.len(), total);
        Ok(Report { lines, total })
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn total(&self) -> i128 {
        self.total
    }

    pub fn total_line(&self) -> String {
        format!(" Total Investment: {CURRENCY}{}", self.total)
    }

    /// Full summary text. Ends on the total line with no trailing newline.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "{REPORT_HEADER}");
        for line in &self.lines {
            let _ = writeln!(text, "{}", line.render());
        }
        let _ = write!(text, "\n{}", self.total_line());
        text
    }

    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.to_text().as_bytes())
    }
}
