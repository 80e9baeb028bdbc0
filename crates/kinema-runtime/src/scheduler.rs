// Copyright 2025 kinema contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The fixed-interval tick scheduler.
//!
//! An [`IntervalScheduler`] runs a tick callback at a target interval on a
//! dedicated thread. Each cycle it measures the real elapsed time, sleeps
//! whatever fraction of the interval remains, and tells the *next* tick how
//! long the previous cycle actually took and whether it overran its budget.

use crate::error::SchedulerError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Remainders shorter than this are not worth sleeping for given typical
/// OS scheduler granularity.
const MIN_SLEEP: Duration = Duration::from_micros(100);

/// The tick callback: `(delta, total, slow)`.
///
/// `delta` is the previous cycle's measured duration in seconds (capped to
/// the interval when [`SchedulerConfig::cap_delta`] is set), `total` is the
/// wall-clock time in seconds since the loop started, and `slow` reports
/// whether the previous cycle overran the interval. Returning an `Err`
/// terminates the run through the error callback.
pub type TickFn = Box<dyn FnMut(f64, f64, bool) -> anyhow::Result<()> + Send>;

/// The error callback, invoked at most once per run on the scheduler's own
/// thread, before cleanup.
pub type ErrorFn = Box<dyn FnOnce(SchedulerError) + Send>;

/// The cleanup callback, invoked exactly once per run when the loop exits,
/// whatever the exit path.
pub type CleanupFn = Box<dyn FnOnce() + Send>;

/// Configuration for an [`IntervalScheduler`].
///
/// Fixed once `start` is called; neither side mutates it while the loop
/// runs.
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// Target interval between ticks, in seconds. Must be positive by the
    /// time the loop runs; the default of `0.0` is deliberately invalid so
    /// that an unconfigured scheduler faults instead of spinning.
    pub interval_secs: f64,
    /// Whether to cap the `delta` passed to the tick callback at the
    /// interval, hiding slow-frame spikes from delta-scaled game logic.
    pub cap_delta: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_secs: 0.0,
            cap_delta: false,
        }
    }
}

/// A drift-compensating fixed-interval tick loop on a dedicated thread.
///
/// The only state shared between the caller and the loop thread is the
/// atomic run flag; everything else (config, callbacks) moves into the
/// thread at `start`. Two independent schedulers (say, simulation and
/// presentation) are fully isolated.
///
/// # Examples
///
/// ```
/// use kinema_runtime::{IntervalScheduler, SchedulerConfig};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let ticks = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&ticks);
/// let mut scheduler = IntervalScheduler::new(SchedulerConfig {
///     interval_secs: 0.005,
///     cap_delta: false,
/// })
/// .on_tick(move |_delta, _total, _slow| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     Ok(())
/// });
///
/// scheduler.start().unwrap();
/// std::thread::sleep(std::time::Duration::from_millis(50));
/// scheduler.stop().unwrap();
/// assert!(ticks.load(Ordering::SeqCst) > 0);
/// ```
pub struct IntervalScheduler {
    config: SchedulerConfig,
    running: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
    tick: Option<TickFn>,
    error: Option<ErrorFn>,
    cleanup: Option<CleanupFn>,
}

impl IntervalScheduler {
    /// Creates a new, idle scheduler with the given configuration and no
    /// callbacks attached.
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
            tick: None,
            error: None,
            cleanup: None,
        }
    }

    /// Attaches the tick callback. Required before `start`.
    pub fn on_tick<F>(mut self, f: F) -> Self
    where
        F: FnMut(f64, f64, bool) -> anyhow::Result<()> + Send + 'static,
    {
        self.tick = Some(Box::new(f));
        self
    }

    /// Attaches the error callback. Without one, run-terminating errors are
    /// logged at error level instead.
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: FnOnce(SchedulerError) + Send + 'static,
    {
        self.error = Some(Box::new(f));
        self
    }

    /// Attaches the cleanup callback, run exactly once when the loop exits.
    pub fn on_cleanup<F>(mut self, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.cleanup = Some(Box::new(f));
        self
    }

    /// Whether the tick loop is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Starts the tick loop on its own thread.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::AlreadyRunning`] if the loop is running, or
    /// [`SchedulerError::MissingTickHandler`] if no tick callback is
    /// attached (a completed run consumes its callbacks, so a restart needs
    /// them re-attached).
    pub fn start(&mut self) -> Result<(), SchedulerError> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }
        self.spawn_loop()
    }

    /// Like [`IntervalScheduler::start`], but a silent no-op when the loop
    /// is already running.
    pub fn start_forced(&mut self) -> Result<(), SchedulerError> {
        if self.is_running() {
            return Ok(());
        }
        self.spawn_loop()
    }

    /// Stops the tick loop. A tick already in progress finishes first; a
    /// loop asleep between ticks is woken immediately rather than waiting
    /// out the interval.
    ///
    /// Joins the loop thread, unless called from the tick callback itself,
    /// in which case it signals the loop to exit and returns without
    /// joining.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::NotRunning`] if the loop is not running.
    pub fn stop(&mut self) -> Result<(), SchedulerError> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }
        self.halt();
        Ok(())
    }

    /// Like [`IntervalScheduler::stop`], but a silent no-op when the loop
    /// is not running.
    pub fn stop_forced(&mut self) {
        if self.is_running() {
            self.halt();
        }
    }

    fn spawn_loop(&mut self) -> Result<(), SchedulerError> {
        let tick = self.tick.take().ok_or(SchedulerError::MissingTickHandler)?;
        let error = self.error.take();
        let cleanup = self.cleanup.take();

        // A stale handle from a terminated run is already finished.
        if let Some(old) = self.handle.take() {
            let _ = old.join();
        }

        self.running.store(true, Ordering::SeqCst);
        let running = Arc::clone(&self.running);
        let config = self.config;
        let handle = thread::spawn(move || {
            run_loop(config, &running, tick, error, cleanup);
        });
        self.handle = Some(handle);
        Ok(())
    }

    fn halt(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            // Joining from the loop's own thread would deadlock; a tick
            // callback stopping its own scheduler detaches instead.
            if handle.thread().id() != thread::current().id() {
                let _ = handle.join();
            }
        }
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.stop_forced();
    }
}

/// Thread body: drives the loop, then reports any terminating error and
/// runs cleanup exactly once before clearing the run flag.
fn run_loop(
    config: SchedulerConfig,
    running: &AtomicBool,
    mut tick: TickFn,
    error: Option<ErrorFn>,
    cleanup: Option<CleanupFn>,
) {
    log::debug!("Scheduler thread started (interval {}s).", config.interval_secs);
    let outcome = drive(config, running, &mut tick);

    if let Err(e) = outcome {
        match error {
            Some(f) => f(e),
            None => log::error!("Scheduler terminated: {e}"),
        }
    }
    if let Some(f) = cleanup {
        f();
    }
    running.store(false, Ordering::SeqCst);
    log::debug!("Scheduler thread stopped.");
}

/// The tick loop proper. `Ok(())` is a clean stop (external stop request or
/// cancellation during sleep); `Err` is a run-terminating fault.
fn drive(
    config: SchedulerConfig,
    running: &AtomicBool,
    tick: &mut TickFn,
) -> Result<(), SchedulerError> {
    let begin = Instant::now();
    let mut previous_delta = 0.0f64;
    let mut ran_slowly = false;

    while running.load(Ordering::Relaxed) {
        // Checked conversion rejects zero, negative, NaN and overflowing
        // intervals alike.
        let interval = match Duration::try_from_secs_f64(config.interval_secs) {
            Ok(d) if d > Duration::ZERO => d,
            _ => {
                return Err(SchedulerError::InvalidInterval {
                    interval_secs: config.interval_secs,
                })
            }
        };

        let cycle_start = Instant::now();
        let delta = if config.cap_delta {
            previous_delta.min(config.interval_secs)
        } else {
            previous_delta
        };

        tick(
            delta,
            cycle_start.duration_since(begin).as_secs_f64(),
            ran_slowly,
        )
        .map_err(SchedulerError::Tick)?;

        // Slowness is judged on the work time alone, before any sleep.
        let work = cycle_start.elapsed();
        ran_slowly = work > interval;
        if work < interval {
            let remainder = interval - work;
            if remainder >= MIN_SLEEP {
                sleep_until(running, cycle_start + interval);
            }
        }
        // The real cycle duration, work plus sleep, feeds the next tick.
        previous_delta = cycle_start.elapsed().as_secs_f64();
    }
    Ok(())
}

/// Parks the thread until `deadline`, waking early if the run flag clears.
/// `stop` unparks the thread after clearing the flag, so a stop request
/// never waits out a full interval.
fn sleep_until(running: &AtomicBool, deadline: Instant) {
    loop {
        if !running.load(Ordering::Relaxed) {
            return;
        }
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        thread::park_timeout(deadline - now);
    }
}
