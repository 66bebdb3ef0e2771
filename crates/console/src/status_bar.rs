// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status bar stage: overall progress and elapsed time

use crate::console::RichConsole;
use logroute_core::{Clock, Destination, DestinationError, OutputEvent};
use std::time::{Duration, Instant};

const BAR_WIDTH: usize = 13;

/// Tracks started and completed operations and keeps the console's status
/// line current; repaints the live area on `Flush` and clears it on `End`
pub struct StatusBar<D, C> {
    next: D,
    console: RichConsole,
    clock: C,
    started_at: Option<Instant>,
    started: usize,
    completed: usize,
}

impl<D: Destination, C: Clock> StatusBar<D, C> {
    pub fn new(next: D, console: RichConsole, clock: C) -> Self {
        Self {
            next,
            console,
            clock,
            started_at: None,
            started: 0,
            completed: 0,
        }
    }

    fn status(&self) -> Option<String> {
        let started_at = self.started_at?;
        if self.completed >= self.started {
            return None;
        }
        let filled = BAR_WIDTH * self.completed / self.started;
        let percent = 100 * self.completed / self.started;
        let elapsed = Duration::from_secs(self.clock.elapsed_since(started_at).as_secs());
        Some(format!(
            "<{}{}> {}% EXECUTING [{}]",
            "=".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            percent,
            humantime::format_duration(elapsed)
        ))
    }
}

impl<D: Destination, C: Clock> Destination for StatusBar<D, C> {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        match event {
            OutputEvent::ProgressStart { .. } => {
                self.started_at.get_or_insert_with(|| self.clock.now());
                self.started += 1;
            }
            OutputEvent::ProgressComplete { .. } => {
                self.completed = (self.completed + 1).min(self.started);
            }
            _ => {}
        }

        self.next.on_output(event)?;

        match event {
            OutputEvent::Flush => {
                self.console.set_status(self.status());
                self.console.redraw()?;
            }
            OutputEvent::End => self.console.clear()?,
            _ => self.console.set_status(self.status()),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "status_bar_tests.rs"]
mod tests;
