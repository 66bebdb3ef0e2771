// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive console surface
//!
//! The console owns a live area at the bottom of the terminal (status bar and
//! work-in-progress lines) below the scrolling build output. Writing build
//! output first erases the live area; the next redraw paints it again.

use logroute_core::{SharedStream, StandardOutputListener};
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

/// Move the cursor up one line and erase it
const ERASE_LINE_ABOVE: &str = "\x1b[1A\x1b[2K";

struct ConsoleState {
    stream: SharedStream,
    status: Option<String>,
    work_in_progress: Vec<String>,
    /// Lines of live area currently painted below the build output
    drawn_lines: usize,
    prompting: bool,
}

impl ConsoleState {
    fn erase(&mut self) -> io::Result<()> {
        if self.drawn_lines > 0 {
            self.stream.write_str(&ERASE_LINE_ABOVE.repeat(self.drawn_lines))?;
            self.drawn_lines = 0;
        }
        Ok(())
    }
}

/// Shared handle to a rich console; clones drive the same terminal
#[derive(Clone)]
pub struct RichConsole {
    state: Arc<Mutex<ConsoleState>>,
}

impl RichConsole {
    pub fn new(stream: SharedStream) -> Self {
        Self {
            state: Arc::new(Mutex::new(ConsoleState {
                stream,
                status: None,
                work_in_progress: Vec::new(),
                drawn_lines: 0,
                prompting: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ConsoleState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Raw listener for the scrolling build output region
    pub fn build_output(&self) -> BuildOutputArea {
        BuildOutputArea {
            console: self.clone(),
        }
    }

    pub fn set_status(&self, status: Option<String>) {
        self.lock().status = status;
    }

    pub fn status(&self) -> Option<String> {
        self.lock().status.clone()
    }

    pub fn set_work_in_progress(&self, lines: Vec<String>) {
        self.lock().work_in_progress = lines;
    }

    pub fn work_in_progress(&self) -> Vec<String> {
        self.lock().work_in_progress.clone()
    }

    /// While prompting the live area stays hidden so it cannot overwrite the prompt
    pub fn set_prompting(&self, prompting: bool) -> io::Result<()> {
        let mut state = self.lock();
        state.prompting = prompting;
        if prompting {
            state.erase()?;
        }
        Ok(())
    }

    pub fn is_prompting(&self) -> bool {
        self.lock().prompting
    }

    /// Write a prompt below the build output
    pub fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut state = self.lock();
        state.erase()?;
        state.stream.write_str(prompt)?;
        state.stream.flush()
    }

    /// Repaint the live area
    pub fn redraw(&self) -> io::Result<()> {
        let mut state = self.lock();
        state.erase()?;
        if state.prompting {
            return state.stream.flush();
        }
        let lines: Vec<String> = state
            .status
            .iter()
            .chain(state.work_in_progress.iter())
            .cloned()
            .collect();
        for line in &lines {
            state.stream.write_str(&format!("{}\n", line))?;
        }
        state.drawn_lines = lines.len();
        state.stream.flush()
    }

    /// Remove the live area from the terminal
    pub fn clear(&self) -> io::Result<()> {
        let mut state = self.lock();
        state.status = None;
        state.work_in_progress.clear();
        state.erase()?;
        state.stream.flush()
    }
}

/// The scrolling output region of a [`RichConsole`]
pub struct BuildOutputArea {
    console: RichConsole,
}

impl StandardOutputListener for BuildOutputArea {
    fn on_output(&mut self, text: &str) -> io::Result<()> {
        let mut state = self.console.lock();
        state.erase()?;
        state.stream.write_str(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.lock().stream.flush()
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
