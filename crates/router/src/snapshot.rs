// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured routing state

use logroute_core::{DestinationId, Severity};

/// Severity and active console captured atomically by [`crate::Router::snapshot`]
///
/// The console is held by identity only; a snapshot never keeps a console alive.
/// Destination ids are per router, so a snapshot also records which router took
/// it and only that router accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    router: u64,
    severity: Severity,
    console: Option<DestinationId>,
}

impl Snapshot {
    pub(crate) fn new(router: u64, severity: Severity, console: Option<DestinationId>) -> Self {
        Self {
            router,
            severity,
            console,
        }
    }

    pub(crate) fn router(&self) -> u64 {
        self.router
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn console(&self) -> Option<DestinationId> {
        self.console
    }
}
