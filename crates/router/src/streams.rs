// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process stream handles injected into the router

use logroute_core::SharedStream;

/// The process's original standard streams, captured once at startup
#[derive(Clone)]
pub struct ProcessStreams {
    stdout: SharedStream,
    stderr: SharedStream,
}

impl ProcessStreams {
    pub fn new(stdout: SharedStream, stderr: SharedStream) -> Self {
        Self { stdout, stderr }
    }

    /// Streams inherited from the parent process
    pub fn inherit() -> Self {
        Self::new(SharedStream::stdout(), SharedStream::stderr())
    }

    pub fn stdout(&self) -> &SharedStream {
        &self.stdout
    }

    pub fn stderr(&self) -> &SharedStream {
        &self.stderr
    }
}

/// Which standard streams a destination drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleStreams {
    pub stdout: bool,
    pub stderr: bool,
}

impl ConsoleStreams {
    pub const BOTH: ConsoleStreams = ConsoleStreams {
        stdout: true,
        stderr: true,
    };
    pub const STDOUT: ConsoleStreams = ConsoleStreams {
        stdout: true,
        stderr: false,
    };
    pub const STDERR: ConsoleStreams = ConsoleStreams {
        stdout: false,
        stderr: true,
    };
    pub const NEITHER: ConsoleStreams = ConsoleStreams {
        stdout: false,
        stderr: false,
    };

    pub fn any(&self) -> bool {
        self.stdout || self.stderr
    }
}
