// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered broadcast group of destinations

use crate::destination::{Destination, DestinationError, DestinationId};
use crate::event::OutputEvent;

/// Forwards each event to every registered destination in registration order
///
/// Delivery is fail-fast: the first destination error aborts delivery to the
/// destinations registered after it.
#[derive(Default)]
pub struct Broadcast {
    destinations: Vec<(DestinationId, Box<dyn Destination>)>,
}

impl Broadcast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a destination; returns false if the id is already present
    pub fn add(&mut self, id: DestinationId, destination: Box<dyn Destination>) -> bool {
        if self.contains(id) {
            return false;
        }
        self.destinations.push((id, destination));
        true
    }

    /// Unregister a destination, handing it back to the caller
    pub fn remove(&mut self, id: DestinationId) -> Option<Box<dyn Destination>> {
        let index = self.destinations.iter().position(|(d, _)| *d == id)?;
        Some(self.destinations.remove(index).1)
    }

    pub fn contains(&self, id: DestinationId) -> bool {
        self.destinations.iter().any(|(d, _)| *d == id)
    }

    /// Registered ids in delivery order
    pub fn ids(&self) -> Vec<DestinationId> {
        self.destinations.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl Destination for Broadcast {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        for (_, destination) in self.destinations.iter_mut() {
            destination.on_output(event)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "broadcast_tests.rs"]
mod tests;
