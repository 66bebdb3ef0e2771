// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! logroute: routes output events from concurrent producers to consoles,
//! raw stream listeners and registered destinations
//!
//! ```text
//! producers ─► Router ─┬─► default output ─► raw stdout / stderr listeners
//!                      └─► Broadcast ─► console pipeline, extra destinations
//! ```

mod error;
mod router;
mod snapshot;
mod streams;

pub use error::RouterError;
pub use router::Router;
pub use snapshot::Snapshot;
pub use streams::{ConsoleStreams, ProcessStreams};

pub use logroute_console::RichConsole;
pub use logroute_core::{
    ConsoleOutput, Destination, DestinationError, DestinationId, ListenerId, OperationId,
    OutputEvent, RouterConfig, Severity, SharedStream, StandardOutputListener,
};
