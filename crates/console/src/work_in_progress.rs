// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work-in-progress panel stage

use crate::console::RichConsole;
use logroute_core::{Destination, DestinationError, OperationId, OutputEvent};

struct Running {
    operation_id: OperationId,
    description: String,
    status: Option<String>,
}

/// Keeps one console line per running operation, oldest first
pub struct WorkInProgress<D> {
    next: D,
    console: RichConsole,
    running: Vec<Running>,
}

impl<D: Destination> WorkInProgress<D> {
    pub fn new(next: D, console: RichConsole) -> Self {
        Self {
            next,
            console,
            running: Vec::new(),
        }
    }

    fn lines(&self) -> Vec<String> {
        self.running
            .iter()
            .map(|op| match &op.status {
                Some(status) => format!("> {} > {}", op.description, status),
                None => format!("> {}", op.description),
            })
            .collect()
    }
}

impl<D: Destination> Destination for WorkInProgress<D> {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        let changed = match event {
            OutputEvent::ProgressStart {
                operation_id,
                description,
            } => {
                self.running.push(Running {
                    operation_id: *operation_id,
                    description: description.clone(),
                    status: None,
                });
                true
            }
            OutputEvent::Progress { operation_id, text } => {
                match self
                    .running
                    .iter_mut()
                    .find(|op| op.operation_id == *operation_id)
                {
                    Some(op) => {
                        op.status = Some(text.clone());
                        true
                    }
                    None => false,
                }
            }
            OutputEvent::ProgressComplete { operation_id } => {
                let before = self.running.len();
                self.running.retain(|op| op.operation_id != *operation_id);
                self.running.len() != before
            }
            OutputEvent::End => {
                self.running.clear();
                true
            }
            _ => false,
        };
        if changed {
            self.console.set_work_in_progress(self.lines());
        }
        self.next.on_output(event)
    }
}

#[cfg(test)]
#[path = "work_in_progress_tests.rs"]
mod tests;
