// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording destinations and in-memory streams for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::destination::{Destination, DestinationError};
use crate::event::OutputEvent;
use crate::listener::StandardOutputListener;
use std::io;
use std::sync::{Arc, Mutex};

type FailWhen = Arc<dyn Fn(&OutputEvent) -> bool + Send + Sync>;

/// Destination that records every event it receives
///
/// Clones share the same record, so a test can keep one handle while the
/// router owns another.
#[derive(Clone, Default)]
pub struct RecordingDestination {
    name: String,
    events: Arc<Mutex<Vec<OutputEvent>>>,
    journal: Option<Arc<Mutex<Vec<String>>>>,
    fail_when: Option<FailWhen>,
}

impl RecordingDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Named recorder that also appends `name:event` entries to a shared journal
    pub fn journaled(name: impl Into<String>, journal: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name: name.into(),
            journal: Some(Arc::clone(journal)),
            ..Self::default()
        }
    }

    /// Fail (without recording) every event matching the predicate
    pub fn failing_when(
        mut self,
        predicate: impl Fn(&OutputEvent) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.fail_when = Some(Arc::new(predicate));
        self
    }

    /// All recorded events
    pub fn events(&self) -> Vec<OutputEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Recorded log texts, in order
    pub fn texts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                OutputEvent::Log { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded events matching the predicate
    pub fn count(&self, predicate: impl Fn(&OutputEvent) -> bool) -> usize {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

impl Destination for RecordingDestination {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        if let Some(fail_when) = &self.fail_when {
            if fail_when(event) {
                return Err(DestinationError::Failed(format!(
                    "{} rejected {}",
                    self.name,
                    event.name()
                )));
            }
        }
        if let Some(journal) = &self.journal {
            journal
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(format!("{}:{}", self.name, event.name()));
        }
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
        Ok(())
    }
}

/// Raw text listener that records everything written to it
#[derive(Clone, Default)]
pub struct RecordingListener {
    text: Arc<Mutex<String>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.text.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl StandardOutputListener for RecordingListener {
    fn on_output(&mut self, text: &str) -> io::Result<()> {
        self.text
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_str(text);
        Ok(())
    }
}

/// In-memory byte stream; clones share the same buffer
#[derive(Clone, Default)]
pub struct MemoryStream {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).to_string()
    }
}

impl io::Write for MemoryStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
