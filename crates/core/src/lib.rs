// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! logroute-core: building blocks for the output event router
//!
//! This crate provides:
//! - The output event taxonomy and severity ordering
//! - The `Destination` capability and the ordered `Broadcast` group
//! - Raw text listeners and shared stream handles
//! - Clock abstraction and router configuration

pub mod broadcast;
pub mod clock;
pub mod config;
pub mod destination;
pub mod event;
pub mod listener;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

// Re-exports
pub use broadcast::Broadcast;
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, ConsoleOutput, ParseConsoleOutputError, RouterConfig};
pub use destination::{Destination, DestinationError, DestinationId};
pub use event::{GroupedOutput, OperationId, OutputEvent, ParseSeverityError, Severity};
pub use listener::{ListenerId, ListenerSet, SharedStream, StandardOutputListener, StreamListener};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{MemoryStream, RecordingDestination, RecordingListener};
