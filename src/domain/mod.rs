//! Domain Layer - Core business logic for the portfolio tracker
//!
//! Pure types with no I/O: the ticker symbol, the fixed price table,
//! the accumulated portfolio and the valuation report.

pub mod symbol;
pub mod price_table;
pub mod portfolio;
pub mod report;

pub use symbol::{Symbol, SymbolError, MAX_SYMBOL_LEN};
pub use price_table::{Price, PriceTable, PriceTableError, BUILTIN_PRICES};
pub use portfolio::{Portfolio, Holding, PortfolioError};
pub use report::{Report, ReportLine, ReportError, REPORT_HEADER, CURRENCY};
