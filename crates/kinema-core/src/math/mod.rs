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

//! Foundational 2D mathematics primitives.
//!
//! This module contains the vector, ray and bounding-box types that form the
//! analytic-geometry backbone of the runtime, along with floating-point
//! comparison helpers.
//!
//! All angular functions in this module operate in **radians**. All scalars
//! are `f64`.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

// Re-export standard mathematical constants for convenience.
pub use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2, TAU};

// --- Declare Sub-Modules ---

pub mod geometry;
pub mod ray;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::geometry::Aabb;
pub use self::ray::{Ray, RayHit};
pub use self::vector::Vec2;

// --- Utility Functions ---

/// Performs an approximate equality comparison between two floats with a
/// custom tolerance.
///
/// # Examples
///
/// ```
/// use kinema_core::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default
/// [`EPSILON`].
///
/// # Examples
///
/// ```
/// use kinema_core::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
