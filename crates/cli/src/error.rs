// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing errors with context and suggestions

use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for display on stderr
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// A script line that is not a valid event
    pub fn invalid_event(line: usize, cause: &serde_json::Error) -> Self {
        CliError::new(format!("invalid event on line {}", line))
            .with_context(cause.to_string())
            .with_suggestion(
                r#"write one JSON object per line, e.g. {"kind":"log","severity":"warn","text":"hello"}"#,
            )
    }

    /// The event script could not be read
    pub fn unreadable_script(line: usize, cause: &std::io::Error) -> Self {
        CliError::new(format!("failed to read events at line {}", line))
            .with_context(cause.to_string())
    }

    /// The configuration file could not be loaded
    pub fn bad_config(path: &Path, cause: impl fmt::Display) -> Self {
        CliError::new(format!("failed to load config {}", path.display()))
            .with_context(cause.to_string())
            .with_suggestion("supported keys are level, throttle_interval and console")
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for ctx in &self.context {
            write!(f, "\n  -> {}", ctx)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\n\nsuggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                write!(f, "\n  {}. {}", i + 1, suggestion)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
