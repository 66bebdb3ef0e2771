// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-lines event scripts
//!
//! One event per line, tagged by `kind`:
//!
//! ```text
//! {"kind":"log","severity":"warn","text":"disk almost full"}
//! {"kind":"progress_start","operation_id":1,"description":"Task :compile"}
//! {"kind":"flush"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::CliError;
use logroute::OutputEvent;
use std::io::BufRead;

/// Streaming reader yielding one event per script line
pub struct EventScript<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> EventScript<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for EventScript<R> {
    type Item = Result<OutputEvent, CliError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line += 1;
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(CliError::unreadable_script(self.line, &e))),
            };
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some(
                serde_json::from_str(trimmed)
                    .map_err(|e| CliError::invalid_event(self.line, &e)),
            );
        }
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
