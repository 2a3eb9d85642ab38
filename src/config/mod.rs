//! Configuration Module
//!
//! Loads and validates configuration from TOML files.

pub mod loader;

pub use loader::{
    Config, ConfigError, load_config, parse_config,
    SessionSection, ReportSection, LoggingSection,
};
