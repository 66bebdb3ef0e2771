// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grouping stage
//!
//! Aggregates the progress of one operation into a single block so that
//! interleaved operations render as coherent units.

use logroute_core::{Destination, DestinationError, GroupedOutput, OperationId, OutputEvent};

struct Group {
    operation_id: OperationId,
    description: String,
    lines: Vec<String>,
    header_emitted: bool,
}

impl Group {
    /// Take the pending output as a block; the header is only sent once
    fn block(&mut self, complete: bool) -> GroupedOutput {
        let header = if self.header_emitted {
            None
        } else {
            Some(self.description.clone())
        };
        self.header_emitted = true;
        GroupedOutput {
            operation_id: self.operation_id,
            header,
            lines: std::mem::take(&mut self.lines),
            complete,
        }
    }
}

/// Buffers progress output per operation and emits it as [`GroupedOutput`]
///
/// In summary mode only the latest progress line of an operation is kept;
/// verbose mode keeps every line.
pub struct Grouping<D> {
    next: D,
    verbose: bool,
    /// Open operations in start order
    groups: Vec<Group>,
}

impl<D: Destination> Grouping<D> {
    pub fn new(next: D, verbose: bool) -> Self {
        Self {
            next,
            verbose,
            groups: Vec::new(),
        }
    }

    /// Number of operations currently buffered
    pub fn open_groups(&self) -> usize {
        self.groups.len()
    }

    fn group_mut(&mut self, id: OperationId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.operation_id == id)
    }

    /// Emit partial blocks for every open group with pending lines
    fn emit_pending(&mut self) -> Result<(), DestinationError> {
        for group in self.groups.iter_mut() {
            if group.lines.is_empty() {
                continue;
            }
            let block = group.block(false);
            self.next.on_output(&OutputEvent::Grouped(block))?;
        }
        Ok(())
    }
}

impl<D: Destination> Destination for Grouping<D> {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        match event {
            OutputEvent::ProgressStart {
                operation_id,
                description,
            } => {
                if self.group_mut(*operation_id).is_none() {
                    self.groups.push(Group {
                        operation_id: *operation_id,
                        description: description.clone(),
                        lines: Vec::new(),
                        header_emitted: false,
                    });
                }
            }
            OutputEvent::Progress { operation_id, text } => {
                let verbose = self.verbose;
                if let Some(group) = self.group_mut(*operation_id) {
                    if !verbose {
                        group.lines.clear();
                    }
                    group.lines.push(text.clone());
                }
            }
            OutputEvent::ProgressComplete { operation_id } => {
                if let Some(index) = self
                    .groups
                    .iter()
                    .position(|g| g.operation_id == *operation_id)
                {
                    let mut group = self.groups.remove(index);
                    if !group.header_emitted || !group.lines.is_empty() {
                        let block = group.block(true);
                        self.next.on_output(&OutputEvent::Grouped(block))?;
                    }
                }
            }
            OutputEvent::Flush => self.emit_pending()?,
            OutputEvent::End => {
                self.emit_pending()?;
                self.groups.clear();
            }
            _ => {}
        }
        self.next.on_output(event)
    }
}

#[cfg(test)]
#[path = "grouping_tests.rs"]
mod tests;
