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

//! Defines the error types for the interval scheduler.

use std::fmt;

/// An error raised by [`IntervalScheduler`](crate::IntervalScheduler).
///
/// State-misuse errors (`AlreadyRunning`, `NotRunning`,
/// `MissingTickHandler`) are returned from `start`/`stop` on the caller's
/// thread. Run-terminating errors (`InvalidInterval`, `Tick`) are delivered
/// to the configured error callback on the scheduler's own thread, at most
/// once per run, and never propagate to the caller as a panic.
#[derive(Debug)]
pub enum SchedulerError {
    /// `start` was called while the scheduler was already running.
    AlreadyRunning,
    /// `stop` was called while the scheduler was not running.
    NotRunning,
    /// `start` was called with no tick handler attached. This also covers a
    /// restart after a completed run, which consumes its handlers.
    MissingTickHandler,
    /// The configured interval was not positive when the loop checked it.
    /// Fatal for the run; the loop aborts through the error path.
    InvalidInterval {
        /// The offending interval, in seconds.
        interval_secs: f64,
    },
    /// The tick callback reported a failure. Terminal for the run; the tick
    /// is not retried.
    Tick(anyhow::Error),
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::AlreadyRunning => {
                write!(f, "Scheduler loop is already running")
            }
            SchedulerError::NotRunning => {
                write!(f, "Scheduler loop is not currently running")
            }
            SchedulerError::MissingTickHandler => {
                write!(f, "Scheduler has no tick handler attached")
            }
            SchedulerError::InvalidInterval { interval_secs } => {
                write!(
                    f,
                    "Scheduler interval must be positive, got {interval_secs}"
                )
            }
            SchedulerError::Tick(e) => {
                write!(f, "Tick callback failed: {e}")
            }
        }
    }
}

impl std::error::Error for SchedulerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchedulerError::Tick(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
