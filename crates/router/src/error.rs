// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Router error types

use logroute_console::ComposeError;
use logroute_core::{ConfigError, DestinationError};
use thiserror::Error;

/// Errors surfaced by router operations
#[derive(Debug, Error)]
pub enum RouterError {
    /// Restoring to a console other than the active one, or none
    #[error("restoring to a previously active console is not supported")]
    UnsupportedRestore,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Destination(#[from] DestinationError),
}

impl From<ComposeError> for RouterError {
    fn from(err: ComposeError) -> Self {
        RouterError::InvalidConfiguration(err.to_string())
    }
}

impl From<ConfigError> for RouterError {
    fn from(err: ConfigError) -> Self {
        RouterError::InvalidConfiguration(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
