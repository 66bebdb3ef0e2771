// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Throttling stage
//!
//! Bounds rendering cost by batching bursts of events and delivering them at
//! most once per interval. Events are delayed, never reordered. A failed
//! delivery is reported once and not retried.
//!
//! ```text
//! on_output ─► [queue] ──(interval elapsed | Flush | End | tick)──► next
//! ```

use logroute_core::{Clock, Destination, DestinationError, OutputEvent};
use std::collections::VecDeque;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

struct ThrottleState<D> {
    next: D,
    queue: VecDeque<OutputEvent>,
    last_render: Instant,
    closed: bool,
    /// Failure raised while rendering from the ticker, reported to the next caller
    deferred: Option<DestinationError>,
}

impl<D: Destination> ThrottleState<D> {
    /// Deliver queued events in order
    ///
    /// A failed event is dropped; the events queued behind it stay pending.
    fn render(&mut self, now: Instant) -> Result<(), DestinationError> {
        self.last_render = now;
        while let Some(event) = self.queue.pop_front() {
            self.next.on_output(&event)?;
        }
        Ok(())
    }
}

/// Background thread that renders pending events once per interval
struct Ticker {
    stop: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl Ticker {
    fn spawn<D, C>(state: Arc<Mutex<ThrottleState<D>>>, clock: C, interval: Duration) -> Self
    where
        D: Destination + 'static,
        C: Clock,
    {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = std::thread::spawn(move || loop {
            match stopped.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    let mut state = state.lock().unwrap_or_else(|e| e.into_inner());
                    if state.closed || state.queue.is_empty() || state.deferred.is_some() {
                        continue;
                    }
                    if let Err(e) = state.render(clock.now()) {
                        tracing::warn!(error = %e, "throttled render failed");
                        state.deferred = Some(e);
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        Self { stop, handle }
    }

    fn stop(self) {
        let _ = self.stop.send(());
        if self.handle.join().is_err() {
            tracing::error!("throttle ticker panicked");
        }
    }
}

/// Batches events and delivers them to the next stage at interval boundaries
pub struct Throttle<D, C> {
    state: Arc<Mutex<ThrottleState<D>>>,
    clock: C,
    interval: Duration,
    ticker: Option<Ticker>,
}

impl<D: Destination + 'static, C: Clock> Throttle<D, C> {
    /// Throttle without a background ticker; pending events are delivered by
    /// later events, [`Throttle::tick`], `Flush` or `End`
    pub fn new(next: D, interval: Duration, clock: C) -> Self {
        let state = ThrottleState {
            next,
            queue: VecDeque::new(),
            last_render: clock.now(),
            closed: false,
            deferred: None,
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            clock,
            interval,
            ticker: None,
        }
    }

    /// Throttle with a background thread delivering pending events every interval
    pub fn with_ticker(next: D, interval: Duration, clock: C) -> Self {
        let mut throttle = Self::new(next, interval, clock);
        throttle.ticker = Some(Ticker::spawn(
            Arc::clone(&throttle.state),
            throttle.clock.clone(),
            interval,
        ));
        throttle
    }

    fn lock(&self) -> MutexGuard<'_, ThrottleState<D>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Deliver everything pending now
    pub fn tick(&self) -> Result<(), DestinationError> {
        let mut state = self.lock();
        if let Some(e) = state.deferred.take() {
            return Err(e);
        }
        state.render(self.clock.now())
    }

    /// Number of events waiting for delivery
    pub fn pending(&self) -> usize {
        self.lock().queue.len()
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

impl<D: Destination + 'static, C: Clock> Destination for Throttle<D, C> {
    fn on_output(&mut self, event: &OutputEvent) -> Result<(), DestinationError> {
        let ended = {
            let mut state = self.lock();
            if state.closed {
                return Err(DestinationError::Closed);
            }
            state.queue.push_back(event.clone());
            if let Some(e) = state.deferred.take() {
                return Err(e);
            }

            let now = self.clock.now();
            match event {
                OutputEvent::End => {
                    state.closed = true;
                    state.render(now)?;
                    true
                }
                OutputEvent::Flush => {
                    state.render(now)?;
                    false
                }
                _ => {
                    if self.clock.elapsed_since(state.last_render) >= self.interval {
                        state.render(now)?;
                    }
                    false
                }
            }
        };

        // The ticker takes the state lock, so stop it only after releasing ours
        if ended {
            if let Some(ticker) = self.ticker.take() {
                ticker.stop();
            }
        }
        Ok(())
    }
}

impl<D, C> Drop for Throttle<D, C> {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }
}

#[cfg(test)]
#[path = "throttle_tests.rs"]
mod tests;
