// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw text listeners and shared output streams

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};

/// Consumer of already-rendered text for one standard stream
pub trait StandardOutputListener: Send {
    fn on_output(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Handle for removing a raw listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

struct ListenerSetInner {
    listeners: Vec<(ListenerId, Box<dyn StandardOutputListener>)>,
    active: bool,
    next_id: u64,
}

/// Ordered set of raw listeners for one stream
///
/// Clones share the same set. While inactive (a console owns the stream) the
/// set keeps its listeners but writes nothing to them.
#[derive(Clone)]
pub struct ListenerSet {
    inner: Arc<Mutex<ListenerSetInner>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ListenerSetInner {
                listeners: Vec::new(),
                active: true,
                next_id: 0,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ListenerSetInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add(&self, listener: Box<dyn StandardOutputListener>) -> ListenerId {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = ListenerId(inner.next_id);
        inner.listeners.push((id, listener));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(l, _)| *l != id);
        inner.listeners.len() != before
    }

    pub fn clear(&self) {
        self.lock().listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn set_active(&self, active: bool) {
        self.lock().active = active;
    }

    pub fn is_active(&self) -> bool {
        self.lock().active
    }
}

impl Default for ListenerSet {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardOutputListener for ListenerSet {
    fn on_output(&mut self, text: &str) -> io::Result<()> {
        let mut inner = self.lock();
        if !inner.active {
            return Ok(());
        }
        for (_, listener) in inner.listeners.iter_mut() {
            listener.on_output(text)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self.lock();
        if !inner.active {
            return Ok(());
        }
        for (_, listener) in inner.listeners.iter_mut() {
            listener.flush()?;
        }
        Ok(())
    }
}

/// A byte stream shared between the router and the pipelines writing to it
#[derive(Clone)]
pub struct SharedStream {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    terminal: bool,
}

impl SharedStream {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            terminal: false,
        }
    }

    /// The process's standard output
    pub fn stdout() -> Self {
        let terminal = io::stdout().is_terminal();
        Self::new(io::stdout()).with_terminal(terminal)
    }

    /// The process's standard error
    pub fn stderr() -> Self {
        let terminal = io::stderr().is_terminal();
        Self::new(io::stderr()).with_terminal(terminal)
    }

    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    /// Whether the stream is attached to an interactive terminal
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// True if both handles write to the same underlying stream
    pub fn same_stream(&self, other: &SharedStream) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    pub fn write_str(&self, text: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        writer.write_all(text.as_bytes())
    }

    pub fn flush(&self) -> io::Result<()> {
        self.writer.lock().unwrap_or_else(|e| e.into_inner()).flush()
    }
}

/// Raw listener writing straight to a shared stream
#[derive(Clone)]
pub struct StreamListener {
    stream: SharedStream,
}

impl StreamListener {
    pub fn new(stream: SharedStream) -> Self {
        Self { stream }
    }
}

impl StandardOutputListener for StreamListener {
    fn on_output(&mut self, text: &str) -> io::Result<()> {
        self.stream.write_str(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
