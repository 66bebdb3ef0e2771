// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal sink: renders events as plain text

use logroute_core::{Destination, DestinationError, OutputEvent, StandardOutputListener};

/// Writes rendered text to a raw listener
///
/// Log messages become one line each; grouped output becomes a `> header`
/// line followed by its lines; prompts are written without a trailing newline.
pub struct TextSink<L> {
    output: L,
}

impl<L: StandardOutputListener> TextSink<L> {
    pub fn new(output: L) -> Self {
        Self { output }
    }
}

impl<L: StandardOutputListener> Destination for TextSink<L> {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        match event {
            OutputEvent::Log { text, .. } => {
                self.output.on_output(&format!("{}\n", text))?;
            }
            OutputEvent::Grouped(block) => {
                let mut rendered = String::new();
                if let Some(header) = &block.header {
                    rendered.push_str(&format!("> {}\n", header));
                }
                for line in &block.lines {
                    rendered.push_str(line);
                    rendered.push('\n');
                }
                if !rendered.is_empty() {
                    self.output.on_output(&rendered)?;
                }
            }
            OutputEvent::PromptRequest { prompt } => self.output.on_output(prompt)?,
            OutputEvent::Flush | OutputEvent::End => self.output.flush()?,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
