// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output events flowing from producers through the router to destinations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log message, ordered from most to least verbose
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    #[default]
    Lifecycle,
    Warn,
    Quiet,
    Error,
}

impl Severity {
    /// All severities in ascending order
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Lifecycle,
        Severity::Warn,
        Severity::Quiet,
        Severity::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Lifecycle => "lifecycle",
            Severity::Warn => "warn",
            Severity::Quiet => "quiet",
            Severity::Error => "error",
        }
    }

    /// Ordinal used for lock-free storage
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Severity::ordinal`]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown severity name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity: {0} (expected one of debug, info, lifecycle, warn, quiet, error)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

/// Identifier shared by the events describing one long-running operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(pub u64);

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A block of output belonging to one operation, produced by the grouping stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedOutput {
    pub operation_id: OperationId,
    /// Header line; `None` when the header was already emitted by an earlier block
    pub header: Option<String>,
    pub lines: Vec<String>,
    /// True when the operation has finished
    pub complete: bool,
}

/// Events routed to destinations
///
/// Events are immutable once created and forwarded by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputEvent {
    /// A log line at a given severity
    Log { severity: Severity, text: String },

    /// A long-running operation started
    ProgressStart {
        operation_id: OperationId,
        description: String,
    },

    /// Status update for a running operation
    Progress {
        operation_id: OperationId,
        text: String,
    },

    /// A long-running operation finished
    ProgressComplete { operation_id: OperationId },

    /// The filter threshold changed
    LevelChange { severity: Severity },

    /// Buffering stages must emit everything they hold
    Flush,

    /// No further events will follow
    End,

    /// Interactive input is requested from the user
    PromptRequest { prompt: String },

    /// Interactive input finished
    PromptResume,

    /// Aggregated operation output (emitted by the grouping stage)
    Grouped(GroupedOutput),
}

impl OutputEvent {
    pub fn log(severity: Severity, text: impl Into<String>) -> Self {
        OutputEvent::Log {
            severity,
            text: text.into(),
        }
    }

    pub fn level_change(severity: Severity) -> Self {
        OutputEvent::LevelChange { severity }
    }

    /// Severity of the event; only log messages carry one
    pub fn severity(&self) -> Option<Severity> {
        match self {
            OutputEvent::Log { severity, .. } => Some(*severity),
            _ => None,
        }
    }

    /// Progress-kind events are exempt from severity filtering
    pub fn is_progress(&self) -> bool {
        matches!(
            self,
            OutputEvent::ProgressStart { .. }
                | OutputEvent::Progress { .. }
                | OutputEvent::ProgressComplete { .. }
        )
    }

    /// Operation this event belongs to, if any
    pub fn operation_id(&self) -> Option<OperationId> {
        match self {
            OutputEvent::ProgressStart { operation_id, .. }
            | OutputEvent::Progress { operation_id, .. }
            | OutputEvent::ProgressComplete { operation_id } => Some(*operation_id),
            OutputEvent::Grouped(group) => Some(group.operation_id),
            _ => None,
        }
    }

    /// Short name for log spans (e.g., "log", "progress:start")
    pub fn name(&self) -> &'static str {
        match self {
            OutputEvent::Log { .. } => "log",
            OutputEvent::ProgressStart { .. } => "progress:start",
            OutputEvent::Progress { .. } => "progress",
            OutputEvent::ProgressComplete { .. } => "progress:complete",
            OutputEvent::LevelChange { .. } => "level:change",
            OutputEvent::Flush => "flush",
            OutputEvent::End => "end",
            OutputEvent::PromptRequest { .. } => "prompt:request",
            OutputEvent::PromptResume => "prompt:resume",
            OutputEvent::Grouped(_) => "grouped",
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
