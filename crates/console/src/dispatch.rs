// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Split delivery between a stdout side and a stderr side

use logroute_core::{Destination, DestinationError, OutputEvent, Severity};

/// Routes error-level log messages to the stderr side and other rendered
/// output to the stdout side; control and progress events reach both sides
///
/// Either side may be absent, which confines a destination to one stream.
pub struct StreamDispatch {
    stdout: Option<Box<dyn Destination>>,
    stderr: Option<Box<dyn Destination>>,
}

impl StreamDispatch {
    pub fn split(stdout: Box<dyn Destination>, stderr: Box<dyn Destination>) -> Self {
        Self {
            stdout: Some(stdout),
            stderr: Some(stderr),
        }
    }

    pub fn stdout_only(stdout: Box<dyn Destination>) -> Self {
        Self {
            stdout: Some(stdout),
            stderr: None,
        }
    }

    pub fn stderr_only(stderr: Box<dyn Destination>) -> Self {
        Self {
            stdout: None,
            stderr: Some(stderr),
        }
    }

    fn deliver(
        side: &mut Option<Box<dyn Destination>>,
        event: &OutputEvent,
    ) -> Result<(), DestinationError> {
        match side {
            Some(destination) => destination.on_output(event),
            None => Ok(()),
        }
    }
}

impl Destination for StreamDispatch {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        match event {
            OutputEvent::Log { severity, .. } if *severity >= Severity::Error => {
                Self::deliver(&mut self.stderr, event)
            }
            OutputEvent::Log { .. }
            | OutputEvent::Grouped(_)
            | OutputEvent::PromptRequest { .. } => Self::deliver(&mut self.stdout, event),
            _ => {
                Self::deliver(&mut self.stdout, event)?;
                Self::deliver(&mut self.stderr, event)
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
