// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Pipeline stages and composition for output destinations
//!
//! A console pipeline is built outermost to innermost:
//!
//! ```text
//! Throttle ─► UserInput ─► StatusBar ─► WorkInProgress ─► LevelFilter ─► Grouping ─► TextSink
//!             └──────────── rich only ──────────────┘
//! ```

mod compose;
mod console;
mod dispatch;
mod grouping;
mod level_filter;
mod status_bar;
mod text;
mod throttle;
pub mod traced;
mod user_input;
mod work_in_progress;

pub use compose::{
    build_pipeline, default_pipeline, plain_pipeline, rich_pipeline, stages_for, ComposeError,
    ConsoleMode, PipelineContext, Stage,
};
pub use console::{BuildOutputArea, RichConsole};
pub use dispatch::StreamDispatch;
pub use grouping::Grouping;
pub use level_filter::LevelFilter;
pub use status_bar::StatusBar;
pub use text::TextSink;
pub use throttle::Throttle;
pub use traced::TracedDestination;
pub use user_input::UserInput;
pub use work_in_progress::WorkInProgress;
