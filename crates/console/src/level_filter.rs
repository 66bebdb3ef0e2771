// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Severity filter stage

use logroute_core::{Destination, DestinationError, OutputEvent, Severity};

/// Drops log messages below the tracked severity
///
/// The threshold starts at [`Severity::Lifecycle`] and follows every
/// `LevelChange` passing through. Events without a severity always pass.
pub struct LevelFilter<D> {
    next: D,
    threshold: Severity,
}

impl<D: Destination> LevelFilter<D> {
    pub fn new(next: D) -> Self {
        Self {
            next,
            threshold: Severity::default(),
        }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }
}

impl<D: Destination> Destination for LevelFilter<D> {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        if let OutputEvent::LevelChange { severity } = event {
            self.threshold = *severity;
            return self.next.on_output(event);
        }
        match event.severity() {
            Some(severity) if severity < self.threshold => Ok(()),
            _ => self.next.on_output(event),
        }
    }
}

#[cfg(test)]
#[path = "level_filter_tests.rs"]
mod tests;
