// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline composition
//!
//! A mode maps to an ordered list of stages (outermost first). Building folds
//! that list innermost-first around a terminal sink:
//! - throttling sees the rawest event rate
//! - level filtering runs before grouping, so rejected events are never buffered
//! - the sink is innermost, so every stage can veto or transform first

use crate::console::RichConsole;
use crate::dispatch::StreamDispatch;
use crate::grouping::Grouping;
use crate::level_filter::LevelFilter;
use crate::status_bar::StatusBar;
use crate::text::TextSink;
use crate::throttle::Throttle;
use crate::traced::TracedDestination;
use crate::user_input::UserInput;
use crate::work_in_progress::WorkInProgress;
use logroute_core::{Clock, Destination, ListenerSet, SharedStream, StreamListener};
use std::time::Duration;
use thiserror::Error;

/// Resolved rendering mode of a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMode {
    /// Raw listener output used when nothing was attached
    Default,
    Plain,
    Rich { verbose: bool },
}

impl ConsoleMode {
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleMode::Default => "default",
            ConsoleMode::Plain => "plain",
            ConsoleMode::Rich { verbose: false } => "rich",
            ConsoleMode::Rich { verbose: true } => "verbose",
        }
    }
}

/// One stage of a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Throttle,
    UserInput,
    StatusBar,
    WorkInProgress,
    LevelFilter,
    Grouping { verbose: bool },
}

impl Stage {
    fn needs_console(&self) -> bool {
        matches!(self, Stage::UserInput | Stage::StatusBar | Stage::WorkInProgress)
    }
}

/// Errors from building a pipeline
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("stage {0:?} requires a rich console")]
    MissingConsole(Stage),
}

/// Everything stages need besides their successor
#[derive(Clone)]
pub struct PipelineContext<C> {
    pub clock: C,
    pub throttle_interval: Duration,
    /// Deliver throttled events from a background ticker
    pub ticker: bool,
    pub console: Option<RichConsole>,
}

impl<C: Clock> PipelineContext<C> {
    pub fn new(clock: C, throttle_interval: Duration) -> Self {
        Self {
            clock,
            throttle_interval,
            ticker: true,
            console: None,
        }
    }

    pub fn without_ticker(mut self) -> Self {
        self.ticker = false;
        self
    }

    pub fn with_console(mut self, console: RichConsole) -> Self {
        self.console = Some(console);
        self
    }
}

/// Stages for a mode, outermost first
pub fn stages_for(mode: ConsoleMode) -> Vec<Stage> {
    match mode {
        ConsoleMode::Default => vec![Stage::LevelFilter, Stage::Grouping { verbose: true }],
        ConsoleMode::Plain => vec![
            Stage::Throttle,
            Stage::LevelFilter,
            Stage::Grouping { verbose: true },
        ],
        ConsoleMode::Rich { verbose } => vec![
            Stage::Throttle,
            Stage::UserInput,
            Stage::StatusBar,
            Stage::WorkInProgress,
            Stage::LevelFilter,
            Stage::Grouping { verbose },
        ],
    }
}

/// Wrap `sink` in `stages`, innermost stage first
pub fn build_pipeline<C: Clock>(
    stages: &[Stage],
    sink: Box<dyn Destination>,
    ctx: &PipelineContext<C>,
) -> Result<Box<dyn Destination>, ComposeError> {
    let mut pipeline = sink;
    for stage in stages.iter().rev() {
        let console = match (&ctx.console, stage.needs_console()) {
            (Some(console), _) => Some(console.clone()),
            (None, true) => return Err(ComposeError::MissingConsole(*stage)),
            (None, false) => None,
        };
        pipeline = match (stage, console) {
            (Stage::Throttle, _) if ctx.ticker => Box::new(Throttle::with_ticker(
                pipeline,
                ctx.throttle_interval,
                ctx.clock.clone(),
            )),
            (Stage::Throttle, _) => Box::new(Throttle::new(
                pipeline,
                ctx.throttle_interval,
                ctx.clock.clone(),
            )),
            (Stage::UserInput, Some(console)) => Box::new(UserInput::new(pipeline, console)),
            (Stage::StatusBar, Some(console)) => {
                Box::new(StatusBar::new(pipeline, console, ctx.clock.clone()))
            }
            (Stage::WorkInProgress, Some(console)) => {
                Box::new(WorkInProgress::new(pipeline, console))
            }
            (Stage::LevelFilter, _) => Box::new(LevelFilter::new(pipeline)),
            (Stage::Grouping { verbose }, _) => Box::new(Grouping::new(pipeline, *verbose)),
            (stage, None) => return Err(ComposeError::MissingConsole(*stage)),
        };
    }
    Ok(pipeline)
}

/// Pipeline rendering to the raw stdout and stderr listener sets
pub fn default_pipeline<C: Clock>(
    stdout: ListenerSet,
    stderr: ListenerSet,
    ctx: &PipelineContext<C>,
) -> Result<Box<dyn Destination>, ComposeError> {
    let sink = StreamDispatch::split(
        Box::new(TextSink::new(stdout)),
        Box::new(TextSink::new(stderr)),
    );
    build_pipeline(&stages_for(ConsoleMode::Default), Box::new(sink), ctx)
}

/// Text-only console writing both streams' output to one stream
pub fn plain_pipeline<C: Clock>(
    stream: SharedStream,
    ctx: &PipelineContext<C>,
) -> Result<Box<dyn Destination>, ComposeError> {
    let sink = TextSink::new(StreamListener::new(stream));
    let pipeline = build_pipeline(&stages_for(ConsoleMode::Plain), Box::new(sink), ctx)?;
    Ok(Box::new(TracedDestination::new(
        ConsoleMode::Plain.name(),
        pipeline,
    )))
}

/// Interactive console with status bar and work-in-progress panel
pub fn rich_pipeline<C: Clock>(
    console: RichConsole,
    verbose: bool,
    ctx: &PipelineContext<C>,
) -> Result<Box<dyn Destination>, ComposeError> {
    let mode = ConsoleMode::Rich { verbose };
    let ctx = ctx.clone().with_console(console.clone());
    let sink = TextSink::new(console.build_output());
    let pipeline = build_pipeline(&stages_for(mode), Box::new(sink), &ctx)?;
    Ok(Box::new(TracedDestination::new(mode.name(), pipeline)))
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
