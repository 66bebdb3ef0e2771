// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The output event router
//!
//! Every delivery and every reconfiguration runs under one lock, so events and
//! configuration changes share a single total order. The severity threshold is
//! mirrored in an atomic that rejects filtered log events before the lock.

use crate::error::RouterError;
use crate::snapshot::Snapshot;
use crate::streams::{ConsoleStreams, ProcessStreams};
use logroute_console::{
    default_pipeline, plain_pipeline, rich_pipeline, PipelineContext, RichConsole, StreamDispatch,
};
use logroute_core::{
    Broadcast, Clock, ConsoleOutput, Destination, DestinationId, ListenerId, ListenerSet,
    OutputEvent, RouterConfig, Severity, SharedStream, StandardOutputListener, StreamListener,
    SystemClock,
};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

static NEXT_ROUTER: AtomicU64 = AtomicU64::new(1);

/// Raw listeners registered by [`Router::attach_system_out_and_err`]
#[derive(Default)]
struct SystemListeners {
    stdout: Option<ListenerId>,
    stderr: Option<ListenerId>,
}

struct RouterState {
    destinations: Broadcast,
    /// Renders to the raw listener sets; built on first delivery
    default_output: Option<Box<dyn Destination>>,
    stdout_listeners: ListenerSet,
    stderr_listeners: ListenerSet,
    system_listeners: SystemListeners,
    console: Option<DestinationId>,
    console_streams: ConsoleStreams,
    next_id: u64,
}

impl RouterState {
    fn allocate_id(&mut self) -> DestinationId {
        self.next_id += 1;
        DestinationId(self.next_id)
    }
}

/// Routes output events from any number of producer threads to the attached
/// destinations
pub struct Router<C: Clock = SystemClock> {
    /// Process-unique tag carried by snapshots
    id: u64,
    level: AtomicU8,
    state: Mutex<RouterState>,
    streams: ProcessStreams,
    config: RouterConfig,
    clock: C,
    ticker: bool,
}

impl Router<SystemClock> {
    pub fn new(streams: ProcessStreams, config: RouterConfig) -> Result<Self, RouterError> {
        Self::with_clock(streams, config, SystemClock)
    }
}

impl<C: Clock> Router<C> {
    pub fn with_clock(
        streams: ProcessStreams,
        config: RouterConfig,
        clock: C,
    ) -> Result<Self, RouterError> {
        config.validate()?;
        Ok(Self {
            id: NEXT_ROUTER.fetch_add(1, Ordering::Relaxed),
            level: AtomicU8::new(config.level.ordinal()),
            state: Mutex::new(RouterState {
                destinations: Broadcast::new(),
                default_output: None,
                stdout_listeners: ListenerSet::new(),
                stderr_listeners: ListenerSet::new(),
                system_listeners: SystemListeners::default(),
                console: None,
                console_streams: ConsoleStreams::NEITHER,
                next_id: 0,
            }),
            streams,
            config,
            clock,
            ticker: true,
        })
    }

    /// Throttled consoles deliver only on flush, end, or a later event
    pub fn without_ticker(mut self) -> Self {
        self.ticker = false;
        self
    }

    fn lock(&self) -> MutexGuard<'_, RouterState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn pipeline_context(&self) -> PipelineContext<C> {
        let ctx = PipelineContext::new(self.clock.clone(), self.config.throttle_interval);
        if self.ticker {
            ctx
        } else {
            ctx.without_ticker()
        }
    }

    /// Current severity threshold, read without locking
    pub fn level(&self) -> Severity {
        Severity::from_ordinal(self.level.load(Ordering::SeqCst)).unwrap_or_default()
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Filter an event and apply level changes ahead of delivery
    ///
    /// Returns false when the event must not be delivered.
    fn accept(&self, event: &OutputEvent) -> bool {
        if let Some(severity) = event.severity() {
            if severity < self.level() {
                return false;
            }
        }
        if let OutputEvent::LevelChange { severity } = event {
            let previous = self.level.swap(severity.ordinal(), Ordering::SeqCst);
            return previous != severity.ordinal();
        }
        true
    }

    /// Submit one event
    ///
    /// Blocks until every destination has processed it. A failing destination
    /// aborts delivery to the destinations after it.
    pub fn submit(&self, event: OutputEvent) -> Result<(), RouterError> {
        if !self.accept(&event) {
            return Ok(());
        }
        let mut state = self.lock();
        self.deliver(&mut state, &event)
    }

    fn submit_locked(&self, state: &mut RouterState, event: OutputEvent) -> Result<(), RouterError> {
        if !self.accept(&event) {
            return Ok(());
        }
        self.deliver(state, &event)
    }

    fn deliver(&self, state: &mut RouterState, event: &OutputEvent) -> Result<(), RouterError> {
        if state.default_output.is_none() {
            let mut output = default_pipeline(
                state.stdout_listeners.clone(),
                state.stderr_listeners.clone(),
                &self.pipeline_context(),
            )?;
            output.on_output(&OutputEvent::level_change(self.level()))?;
            state.default_output = Some(output);
        }
        if let Some(output) = state.default_output.as_mut() {
            output.on_output(event)?;
        }
        state.destinations.on_output(event)?;
        Ok(())
    }

    pub fn configure(&self, severity: Severity) -> Result<(), RouterError> {
        self.submit(OutputEvent::level_change(severity))
    }

    pub fn flush(&self) -> Result<(), RouterError> {
        self.submit(OutputEvent::Flush)
    }

    /// Attach a console rendering both streams to `stream`
    pub fn attach_console(
        &self,
        stream: SharedStream,
        output: ConsoleOutput,
    ) -> Result<DestinationId, RouterError> {
        let ctx = self.pipeline_context();
        let pipeline = match output {
            ConsoleOutput::Plain => plain_pipeline(stream, &ctx)?,
            ConsoleOutput::Rich => rich_pipeline(RichConsole::new(stream), false, &ctx)?,
            ConsoleOutput::Verbose => rich_pipeline(RichConsole::new(stream), true, &ctx)?,
            ConsoleOutput::Auto if stream.is_terminal() => {
                rich_pipeline(RichConsole::new(stream), false, &ctx)?
            }
            ConsoleOutput::Auto => plain_pipeline(stream, &ctx)?,
        };
        tracing::debug!(mode = %output, "attaching console");
        self.attach_destination(pipeline, ConsoleStreams::BOTH)
    }

    /// Attach a console bound to the process's original stdout
    pub fn attach_process_console(
        &self,
        output: ConsoleOutput,
    ) -> Result<DestinationId, RouterError> {
        self.attach_console(self.streams.stdout().clone(), output)
    }

    /// Attach a rich console that owns `streams`
    pub fn attach_rich_console(
        &self,
        console: RichConsole,
        streams: ConsoleStreams,
        verbose: bool,
    ) -> Result<DestinationId, RouterError> {
        if !streams.any() {
            return Err(RouterError::InvalidConfiguration(
                "a rich console must drive stdout, stderr, or both".to_string(),
            ));
        }
        let pipeline = rich_pipeline(console, verbose, &self.pipeline_context())?;
        self.attach_destination(pipeline, streams)
    }

    /// Hand stream ownership to `pipeline` and register it
    ///
    /// A pipeline driving at least one stream becomes the active console,
    /// replacing any previous console. A pipeline driving neither stream is
    /// registered as an additional destination.
    pub fn attach_destination(
        &self,
        pipeline: Box<dyn Destination>,
        streams: ConsoleStreams,
    ) -> Result<DestinationId, RouterError> {
        let mut state = self.lock();
        self.deliver(&mut state, &OutputEvent::Flush)?;

        let mut destination: Box<dyn Destination> = match (streams.stdout, streams.stderr) {
            (true, false) => Box::new(StreamDispatch::stdout_only(pipeline)),
            (false, true) => Box::new(StreamDispatch::stderr_only(pipeline)),
            _ => pipeline,
        };
        // Prime before any ownership change
        destination.on_output(&OutputEvent::level_change(self.level()))?;

        if streams.any() {
            let previous = state.console;
            if let Some(previous) = previous {
                self.detach_console(&mut state, previous)?;
            }
            if streams.stdout {
                let listeners = state.stdout_listeners.clone();
                self.claim(&mut state, &listeners)?;
                state.system_listeners.stdout = None;
            }
            if streams.stderr {
                let listeners = state.stderr_listeners.clone();
                self.claim(&mut state, &listeners)?;
                state.system_listeners.stderr = None;
            }
        }

        let id = state.allocate_id();
        state.destinations.add(id, destination);
        if streams.any() {
            state.console = Some(id);
            state.console_streams = streams;
        }
        tracing::debug!(
            destination = %id,
            stdout = streams.stdout,
            stderr = streams.stderr,
            "attached destination"
        );
        Ok(id)
    }

    /// Flush, then clear and silence one raw listener set
    fn claim(&self, state: &mut RouterState, listeners: &ListenerSet) -> Result<(), RouterError> {
        self.deliver(state, &OutputEvent::Flush)?;
        listeners.clear();
        listeners.set_active(false);
        Ok(())
    }

    /// Give the console's streams back to the raw listener sets
    fn release(state: &mut RouterState) {
        let streams = state.console_streams;
        state.console = None;
        state.console_streams = ConsoleStreams::NEITHER;
        if streams.stdout {
            state.stdout_listeners.set_active(true);
        }
        if streams.stderr {
            state.stderr_listeners.set_active(true);
        }
    }

    /// Remove the console and send it exactly one `End`
    fn detach_console(
        &self,
        state: &mut RouterState,
        console: DestinationId,
    ) -> Result<(), RouterError> {
        Self::release(state);
        tracing::debug!(destination = %console, "detaching console");
        if let Some(mut removed) = state.destinations.remove(console) {
            removed.on_output(&OutputEvent::End)?;
        }
        Ok(())
    }

    pub fn add_output_event_listener(
        &self,
        destination: Box<dyn Destination>,
    ) -> Result<DestinationId, RouterError> {
        let mut state = self.lock();
        self.deliver(&mut state, &OutputEvent::Flush)?;
        let id = state.allocate_id();
        state.destinations.add(id, destination);
        tracing::debug!(destination = %id, "added output event listener");
        Ok(id)
    }

    /// Remove a destination; removing one that is not registered is a no-op
    pub fn remove_output_event_listener(&self, id: DestinationId) -> Result<(), RouterError> {
        let mut state = self.lock();
        self.deliver(&mut state, &OutputEvent::Flush)?;
        if state.destinations.remove(id).is_some() {
            if state.console == Some(id) {
                Self::release(&mut state);
            }
            tracing::debug!(destination = %id, "removed output event listener");
        }
        Ok(())
    }

    pub fn add_standard_output_listener(
        &self,
        listener: Box<dyn StandardOutputListener>,
    ) -> Result<ListenerId, RouterError> {
        let mut state = self.lock();
        self.deliver(&mut state, &OutputEvent::Flush)?;
        let id = state.stdout_listeners.add(listener);
        tracing::debug!(listener = %id, stream = "stdout", "added standard listener");
        Ok(id)
    }

    pub fn add_standard_error_listener(
        &self,
        listener: Box<dyn StandardOutputListener>,
    ) -> Result<ListenerId, RouterError> {
        let mut state = self.lock();
        self.deliver(&mut state, &OutputEvent::Flush)?;
        let id = state.stderr_listeners.add(listener);
        tracing::debug!(listener = %id, stream = "stderr", "added standard listener");
        Ok(id)
    }

    pub fn remove_standard_output_listener(&self, id: ListenerId) -> Result<(), RouterError> {
        let mut state = self.lock();
        self.deliver(&mut state, &OutputEvent::Flush)?;
        state.stdout_listeners.remove(id);
        Ok(())
    }

    pub fn remove_standard_error_listener(&self, id: ListenerId) -> Result<(), RouterError> {
        let mut state = self.lock();
        self.deliver(&mut state, &OutputEvent::Flush)?;
        state.stderr_listeners.remove(id);
        Ok(())
    }

    /// Write raw output straight to the original process streams
    ///
    /// Replaces listeners registered by an earlier call.
    pub fn attach_system_out_and_err(&self) -> Result<(), RouterError> {
        let mut state = self.lock();
        self.deliver(&mut state, &OutputEvent::Flush)?;
        if let Some(id) = state.system_listeners.stdout.take() {
            state.stdout_listeners.remove(id);
        }
        if let Some(id) = state.system_listeners.stderr.take() {
            state.stderr_listeners.remove(id);
        }
        let stdout = StreamListener::new(self.streams.stdout().clone());
        let stderr = StreamListener::new(self.streams.stderr().clone());
        let stdout = state.stdout_listeners.add(Box::new(stdout));
        let stderr = state.stderr_listeners.add(Box::new(stderr));
        state.system_listeners = SystemListeners {
            stdout: Some(stdout),
            stderr: Some(stderr),
        };
        tracing::debug!("attached system stdout and stderr");
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.lock();
        Snapshot::new(self.id, self.level(), state.console)
    }

    /// Reapply a snapshot's severity, then pop its console back to none
    ///
    /// Restoring to a different non-empty console, or restoring a snapshot taken
    /// by another router, fails without changing state.
    pub fn restore(&self, snapshot: &Snapshot) -> Result<(), RouterError> {
        if snapshot.router() != self.id {
            return Err(RouterError::UnsupportedRestore);
        }
        let mut state = self.lock();
        let console_changed = snapshot.console() != state.console;
        if console_changed && snapshot.console().is_some() {
            return Err(RouterError::UnsupportedRestore);
        }
        tracing::debug!(
            severity = %snapshot.severity(),
            console = ?snapshot.console(),
            "restoring router state"
        );
        if snapshot.severity() != self.level() {
            self.submit_locked(&mut state, OutputEvent::level_change(snapshot.severity()))?;
        }
        let active = state.console;
        if let (true, Some(console)) = (console_changed, active) {
            self.detach_console(&mut state, console)?;
        }
        Ok(())
    }

    pub fn console(&self) -> Option<DestinationId> {
        self.lock().console
    }

    /// Registered destinations, excluding the default output
    pub fn destination_count(&self) -> usize {
        self.lock().destinations.len()
    }

    pub fn original_stdout(&self) -> &SharedStream {
        self.streams.stdout()
    }

    pub fn original_stderr(&self) -> &SharedStream {
        self.streams.stderr()
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
