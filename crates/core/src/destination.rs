// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The destination capability: accept one event, synchronously

use crate::event::OutputEvent;
use std::fmt;
use thiserror::Error;

/// Errors raised by a destination while handling an event
#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("destination is closed")]
    Closed,
    #[error("destination failed: {0}")]
    Failed(String),
}

/// Something that consumes output events
///
/// Pipelines of stages are themselves destinations. Failures propagate to
/// whoever delivered the event; nothing is retried.
pub trait Destination: Send {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError>;
}

impl<D: Destination + ?Sized> Destination for Box<D> {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        (**self).on_output(event)
    }
}

/// Identity of a registered destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DestinationId(pub u64);

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dest-{}", self.0)
    }
}
