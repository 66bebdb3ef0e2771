// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Router configuration
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! level = "info"
//! throttle_interval = "100ms"
//! console = "plain"
//! ```

use crate::event::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Default interval of the throttling stage
pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_millis(100);

/// How a console renders output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleOutput {
    /// Text only, grouped progress
    Plain,
    /// Interactive layout with status bar and work-in-progress panel
    Rich,
    /// Rich, without summarizing grouped output
    Verbose,
    /// Rich when attached to a terminal, plain otherwise
    #[default]
    Auto,
}

impl ConsoleOutput {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleOutput::Plain => "plain",
            ConsoleOutput::Rich => "rich",
            ConsoleOutput::Verbose => "verbose",
            ConsoleOutput::Auto => "auto",
        }
    }
}

impl fmt::Display for ConsoleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown console output mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown console output: {0} (expected one of plain, rich, verbose, auto)")]
pub struct ParseConsoleOutputError(pub String);

impl FromStr for ConsoleOutput {
    type Err = ParseConsoleOutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(ConsoleOutput::Plain),
            "rich" => Ok(ConsoleOutput::Rich),
            "verbose" => Ok(ConsoleOutput::Verbose),
            "auto" => Ok(ConsoleOutput::Auto),
            _ => Err(ParseConsoleOutputError(s.to_string())),
        }
    }
}

/// Errors from loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Initial severity threshold
    pub level: Severity,
    /// Interval at which throttling stages deliver buffered events
    #[serde(with = "humantime_serde")]
    pub throttle_interval: Duration,
    /// Console mode attached by front ends
    pub console: ConsoleOutput,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            level: Severity::Lifecycle,
            throttle_interval: DEFAULT_THROTTLE_INTERVAL,
            console: ConsoleOutput::Auto,
        }
    }
}

impl RouterConfig {
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn with_throttle_interval(mut self, interval: Duration) -> Self {
        self.throttle_interval = interval;
        self
    }

    pub fn with_console(mut self, console: ConsoleOutput) -> Self {
        self.console = console;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.throttle_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "throttle_interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
