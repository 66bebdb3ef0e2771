// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced destination wrapper for consistent observability

use logroute_core::{Destination, DestinationError, OutputEvent};

/// Wrapper that logs delivery to any destination
///
/// Failures are logged and then returned unchanged; nothing is swallowed.
pub struct TracedDestination<D> {
    inner: D,
    name: String,
}

impl<D> TracedDestination<D> {
    pub fn new(name: impl Into<String>, inner: D) -> Self {
        Self {
            inner,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<D: Destination> Destination for TracedDestination<D> {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        let result = self.inner.on_output(event);
        match &result {
            Ok(()) => tracing::trace!(destination = %self.name, event = event.name(), "delivered"),
            Err(e) => tracing::error!(
                destination = %self.name,
                event = event.name(),
                error = %e,
                "delivery failed"
            ),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
