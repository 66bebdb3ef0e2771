// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive input stage

use crate::console::RichConsole;
use logroute_core::{Destination, DestinationError, OutputEvent};

/// Shows prompts on the console and hides the live area while the user types
///
/// Prompt events are consumed here; everything else is forwarded.
pub struct UserInput<D> {
    next: D,
    console: RichConsole,
}

impl<D: Destination> UserInput<D> {
    pub fn new(next: D, console: RichConsole) -> Self {
        Self { next, console }
    }
}

impl<D: Destination> Destination for UserInput<D> {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        match event {
            OutputEvent::PromptRequest { prompt } => {
                self.console.set_prompting(true)?;
                self.console.write_prompt(prompt)?;
                Ok(())
            }
            OutputEvent::PromptResume => {
                self.console.set_prompting(false)?;
                Ok(())
            }
            _ => self.next.on_output(event),
        }
    }
}

#[cfg(test)]
#[path = "user_input_tests.rs"]
mod tests;
