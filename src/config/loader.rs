//! Configuration Loader
//!
//! Loads and validates the optional tracker configuration from a TOML file.
//! Every field has a default, so running without a file behaves exactly
//! like the stock prompt-driven tracker.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::adapters::file_sink::DEFAULT_REPORT_FILE;
use crate::application::{SessionPolicy, TrackerSettings};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub session: SessionSection,
    #[serde(default)]
    pub report: ReportSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Input loop configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionSection {
    /// Word that ends symbol entry (matched case-insensitively)
    pub sentinel: String,
    /// Answer to the save question that triggers a file write (case-insensitive)
    pub confirm_word: String,
    /// Discard zero and negative quantities instead of accumulating them
    pub reject_non_positive: bool,
}

impl Default for SessionSection {
    fn default() -> Self {
        SessionSection {
            sentinel: "done".to_string(),
            confirm_word: "yes".to_string(),
            reject_non_positive: false,
        }
    }
}

/// Report output configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSection {
    /// Report file path (overwritten on every save, `~` is expanded)
    pub output_file: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        ReportSection {
            output_file: DEFAULT_REPORT_FILE.to_string(),
        }
    }
}

impl ReportSection {
    /// Output path with a leading `~` expanded to the home directory
    pub fn resolved_output_file(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output_file).into_owned())
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        LoggingSection {
            level: "warn".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.sentinel.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "sentinel cannot be empty".to_string(),
            ));
        }

        if self.session.confirm_word.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "confirm_word cannot be empty".to_string(),
            ));
        }

        if self.report.output_file.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "output_file cannot be empty".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging level must be one of {:?}, got {}",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }

    /// Settings handed to the tracker
    pub fn tracker_settings(&self) -> TrackerSettings {
        TrackerSettings {
            policy: SessionPolicy {
                sentinel: self.session.sentinel.trim().to_uppercase(),
                reject_non_positive: self.session.reject_non_positive,
            },
            confirm_word: self.session.confirm_word.trim().to_lowercase(),
        }
    }
}
