//! Ports Layer - Trait definitions for external dependencies
//!
//! Following hexagonal architecture, these traits abstract:
//! - The interactive console (prompts and messages)
//! - Where a finished report gets saved

pub mod console;
pub mod report_sink;
pub mod mocks;

pub use console::{Console, ConsoleError};
pub use report_sink::{ReportSink, SinkError};
