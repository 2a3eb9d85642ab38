//! Portfolio Tracker Library
//!
//! Interactive stock purchase tally valued against a fixed price table.
//!
//! # Modules
//!
//! - `domain`: Core business logic (Symbol, PriceTable, Portfolio, Report)
//! - `ports`: Trait abstractions (Console, ReportSink)
//! - `adapters`: External implementations (stdin/stdout console, report file, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Input loop and run orchestration

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
