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

//! # Kinema Runtime
//!
//! The timing runtime of kinema: a self-correcting fixed-interval scheduler
//! that drives a tick callback on a dedicated thread, measuring the real
//! duration of each cycle, sleeping the remainder of the interval, and
//! flagging cycles that overran their budget.
//!
//! A game-loop driver typically composes two independent
//! [`IntervalScheduler`] instances, one for simulation ticks and one for
//! presentation; the instances share no state, and coordinating the
//! callbacks is the driver's responsibility.

#![warn(missing_docs)]

pub mod error;
pub mod scheduler;

pub use error::SchedulerError;
pub use scheduler::{IntervalScheduler, SchedulerConfig};
