// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! logroute - replay an output event script through the router

mod error;
mod script;

use anyhow::Result;
use clap::Parser;
use error::CliError;
use logroute::{ConsoleOutput, OutputEvent, ProcessStreams, Router, RouterConfig, Severity};
use script::EventScript;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logroute",
    version,
    about = "Route build output events to a console"
)]
struct Cli {
    /// Router configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Console mode: plain, rich, verbose or auto
    #[arg(long, value_name = "MODE")]
    console: Option<ConsoleOutput>,

    /// Initial severity threshold
    #[arg(long, value_name = "LEVEL")]
    level: Option<Severity>,

    /// Write raw output to stdout and stderr without attaching a console
    #[arg(long)]
    raw: bool,

    /// JSON-lines event script; reads stdin when omitted
    events: Option<PathBuf>,
}

impl Cli {
    /// File configuration with command-line overrides applied
    fn router_config(&self) -> Result<RouterConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => {
                RouterConfig::load(path).map_err(|e| CliError::bad_config(path, e))?
            }
            None => RouterConfig::default(),
        };
        if let Some(level) = self.level {
            config = config.with_level(level);
        }
        if let Some(console) = self.console {
            config = config.with_console(console);
        }
        Ok(config)
    }

    fn script(&self) -> Result<Box<dyn BufRead>> {
        Ok(match &self.events {
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    CliError::new(format!("failed to open {}", path.display()))
                        .with_context(e.to_string())
                })?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(io::stdin().lock()),
        })
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Submit every scripted event, stopping at the first bad line
fn replay<R: BufRead>(router: &Router, script: EventScript<R>) -> Result<usize> {
    let mut count = 0;
    for event in script {
        router.submit(event?)?;
        count += 1;
    }
    Ok(count)
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.router_config()?;
    let script = EventScript::new(cli.script()?);
    let router = Router::new(ProcessStreams::inherit(), config)?;

    if cli.raw {
        router.attach_system_out_and_err()?;
    } else {
        router.attach_process_console(router.config().console)?;
    }

    let outcome = replay(&router, script);
    router.submit(OutputEvent::End)?;
    let count = outcome?;
    tracing::debug!(events = count, "script replayed");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();
    run(&cli)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
