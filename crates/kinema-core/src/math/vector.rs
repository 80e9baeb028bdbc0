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

//! Provides the 2D vector type and its associated operations.

use serde::{Deserialize, Serialize};

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 2-dimensional vector with `f64` components.
///
/// `Vec2` is an immutable value type: every operation returns a new vector.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Vec2 {
    /// The x component of the vector.
    pub x: f64,
    /// The y component of the vector.
    pub y: f64,
}

impl Vec2 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Creates a new `Vec2` with the specified components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns a new vector with the absolute value of each component.
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            x: if self.x < 0.0 { -self.x } else { self.x },
            y: if self.y < 0.0 { -self.y } else { self.y },
        }
    }

    /// Calculates the squared length (magnitude) of the vector.
    /// This is faster than `length()` as it avoids a square root.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector with a length of 1.
    ///
    /// The zero vector normalizes to `Vec2::ZERO` rather than producing NaN
    /// components. Every non-zero vector normalizes to unit length.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > 0.0 {
            *self * (1.0 / len_sq.sqrt())
        } else {
            Self::ZERO
        }
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Calculates the 2D scalar cross product of this vector and another.
    ///
    /// This is the z component of the 3D cross product of the two vectors
    /// lifted into the z = 0 plane. Its sign encodes the winding of the pair.
    #[inline]
    pub fn cross(&self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Performs a linear interpolation between two vectors.
    /// The interpolation factor `t` is clamped to the `[0.0, 1.0]` range.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        start + (end - start) * t.clamp(0.0, 1.0)
    }

    /// Returns this vector rotated counter-clockwise by `theta` radians
    /// around the origin.
    #[inline]
    pub fn rotate(&self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Returns this vector rotated counter-clockwise by `theta` radians
    /// around `pivot`.
    #[inline]
    pub fn rotate_around(&self, theta: f64, pivot: Self) -> Self {
        (*self - pivot).rotate(theta) + pivot
    }

    /// Returns the angle of this vector, in radians, measured from the
    /// positive X-axis (`atan2(y, x)`).
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns the cosine of the angle between this vector and another
    /// (the dot product normalized by both magnitudes).
    ///
    /// This is **not** the angle itself. Returns `0.0` if either vector has
    /// zero magnitude.
    #[inline]
    pub fn angle_to(&self, rhs: Self) -> f64 {
        let denom = self.length() * rhs.length();
        if denom == 0.0 {
            0.0
        } else {
            self.dot(rhs) / denom
        }
    }

    /// Returns the projection of this vector along `axis`.
    ///
    /// `axis` must be non-zero; projecting onto the zero vector propagates
    /// IEEE NaN components.
    #[inline]
    pub fn project_onto(&self, axis: Self) -> Self {
        axis * (self.dot(axis) / axis.length_squared())
    }

    /// Returns the reflection of this vector over `axis`, computed as
    /// `axis * (2 * dot(axis, v) / |axis|^2) - v`.
    ///
    /// Reflecting twice over the same non-zero axis returns the original
    /// vector. `axis` must be non-zero or the result is undefined.
    #[inline]
    pub fn reflect_over(&self, axis: Self) -> Self {
        axis * (2.0 * axis.dot(*self) / axis.length_squared()) - *self
    }

    /// Returns `true` if the turn `a -> b -> c` is clockwise.
    ///
    /// Uses the sign of the cross product of `b - a` and `c - b`, with the
    /// y-axis pointing up; collinear points are not clockwise.
    #[inline]
    pub fn clockwise(a: Self, b: Self, c: Self) -> bool {
        (b - a).cross(c - b) < 0.0
    }
}

// --- Operator Overloads ---

impl Add for Vec2 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    /// Divides the vector by a scalar.
    ///
    /// Division by exactly zero propagates IEEE `Inf`/`NaN` components; only
    /// [`Vec2::normalize`] special-cases the zero case.
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Index<usize> for Vec2 {
    type Output = f64;
    /// Allows accessing a vector component by index (`v[0]`, `v[1]`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index out of bounds for Vec2"),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    /// Allows mutably accessing a vector component by index (`v[0] = ...`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Index out of bounds for Vec2"),
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, FRAC_PI_2, PI};
    use approx::assert_relative_eq;

    fn vec2_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    #[test]
    fn test_new() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
    }

    #[test]
    fn test_abs() {
        let v = Vec2::new(-1.0, 2.0);
        assert_eq!(v.abs(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_constants() {
        assert_eq!(Vec2::ZERO, Vec2::new(0.0, 0.0));
        assert_eq!(Vec2::ONE, Vec2::new(1.0, 1.0));
        assert_eq!(Vec2::X, Vec2::new(1.0, 0.0));
        assert_eq!(Vec2::Y, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_ops() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(3.0 * v1, Vec2::new(3.0, 6.0));
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));
        assert_eq!(Vec2::new(4.0, 6.0) / 2.0, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_div_by_zero_propagates_ieee() {
        let v = Vec2::new(1.0, -1.0) / 0.0;
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
    }

    #[test]
    fn test_dot() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert!(approx_eq(v1.dot(v2), 11.0));
        assert!(approx_eq(Vec2::X.dot(Vec2::Y), 0.0));
    }

    #[test]
    fn test_cross() {
        assert_eq!(Vec2::X.cross(Vec2::Y), 1.0);
        assert_eq!(Vec2::Y.cross(Vec2::X), -1.0);
        assert_eq!(Vec2::X.cross(Vec2::X), 0.0);
        assert!(approx_eq(Vec2::new(2.0, 3.0).cross(Vec2::new(4.0, 5.0)), -2.0));
    }

    #[test]
    fn test_length() {
        let v = Vec2::new(3.0, 4.0);
        assert!(approx_eq(v.length_squared(), 25.0));
        assert!(approx_eq(v.length(), 5.0));
        assert!(approx_eq(Vec2::ZERO.length(), 0.0));
    }

    #[test]
    fn test_normalize() {
        let v1 = Vec2::new(3.0, 0.0);
        let norm_v1 = v1.normalize();
        assert!(vec2_approx_eq(norm_v1, Vec2::X));
        assert!(approx_eq(norm_v1.length(), 1.0));

        // Any non-zero vector normalizes to unit length, however small.
        let tiny = Vec2::new(1e-30, -1e-30).normalize();
        assert_relative_eq!(tiny.length(), 1.0, max_relative = 1e-12);

        let v_zero = Vec2::ZERO;
        assert_eq!(v_zero.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_lerp() {
        let start = Vec2::new(0.0, 10.0);
        let end = Vec2::new(10.0, 0.0);
        assert!(vec2_approx_eq(Vec2::lerp(start, end, 0.0), start));
        assert!(vec2_approx_eq(Vec2::lerp(start, end, 1.0), end));
        assert!(vec2_approx_eq(
            Vec2::lerp(start, end, 0.5),
            Vec2::new(5.0, 5.0)
        ));
        // Test clamping
        assert!(vec2_approx_eq(Vec2::lerp(start, end, -0.5), start));
        assert!(vec2_approx_eq(Vec2::lerp(start, end, 1.5), end));
    }

    #[test]
    fn test_rotate() {
        let v = Vec2::X.rotate(FRAC_PI_2);
        assert!(vec2_approx_eq(v, Vec2::Y));

        let v = Vec2::new(1.0, 1.0).rotate(PI);
        assert!(vec2_approx_eq(v, Vec2::new(-1.0, -1.0)));
    }

    #[test]
    fn test_rotate_round_trip() {
        let v = Vec2::new(3.7, -1.2);
        for &theta in &[0.0, 0.3, FRAC_PI_2, PI, 2.6, -4.9] {
            let back = v.rotate(theta).rotate(-theta);
            assert_relative_eq!(back.x, v.x, max_relative = 1e-12);
            assert_relative_eq!(back.y, v.y, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_rotate_around() {
        let pivot = Vec2::new(1.0, 1.0);
        let v = Vec2::new(2.0, 1.0).rotate_around(FRAC_PI_2, pivot);
        assert!(vec2_approx_eq(v, Vec2::new(1.0, 2.0)));

        // Rotating around itself is a no-op.
        let v = pivot.rotate_around(2.1, pivot);
        assert!(vec2_approx_eq(v, pivot));
    }

    #[test]
    fn test_angle() {
        assert!(approx_eq(Vec2::X.angle(), 0.0));
        assert!(approx_eq(Vec2::Y.angle(), FRAC_PI_2));
        assert!(approx_eq(Vec2::new(-1.0, 0.0).angle(), PI));
    }

    #[test]
    fn test_angle_to() {
        // Cosine of the angle, not the angle itself.
        assert!(approx_eq(Vec2::X.angle_to(Vec2::X), 1.0));
        assert!(approx_eq(Vec2::X.angle_to(Vec2::Y), 0.0));
        assert!(approx_eq(Vec2::X.angle_to(Vec2::new(-2.0, 0.0)), -1.0));
        // Zero-magnitude inputs report zero instead of NaN.
        assert_eq!(Vec2::ZERO.angle_to(Vec2::X), 0.0);
        assert_eq!(Vec2::X.angle_to(Vec2::ZERO), 0.0);
    }

    #[test]
    fn test_project_onto() {
        let v = Vec2::new(3.0, 4.0);
        assert!(vec2_approx_eq(v.project_onto(Vec2::X), Vec2::new(3.0, 0.0)));
        // Scaling the axis does not change the projection.
        assert!(vec2_approx_eq(
            v.project_onto(Vec2::new(5.0, 0.0)),
            Vec2::new(3.0, 0.0)
        ));
    }

    #[test]
    fn test_reflect_over() {
        let v = Vec2::new(1.0, 2.0);
        assert!(vec2_approx_eq(v.reflect_over(Vec2::X), Vec2::new(1.0, -2.0)));
        assert!(vec2_approx_eq(v.reflect_over(Vec2::Y), Vec2::new(-1.0, 2.0)));
    }

    #[test]
    fn test_reflect_is_involution() {
        let v = Vec2::new(-2.3, 0.7);
        for axis in [Vec2::X, Vec2::Y, Vec2::new(1.0, 1.0), Vec2::new(-3.0, 0.5)] {
            let back = v.reflect_over(axis).reflect_over(axis);
            assert_relative_eq!(back.x, v.x, max_relative = 1e-12);
            assert_relative_eq!(back.y, v.y, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_clockwise() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 0.0);
        // Turning down (y up) is clockwise; turning up is not.
        assert!(Vec2::clockwise(a, b, Vec2::new(1.0, -1.0)));
        assert!(!Vec2::clockwise(a, b, Vec2::new(1.0, 1.0)));
        // Collinear points are not clockwise.
        assert!(!Vec2::clockwise(a, b, Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn test_index() {
        let mut v = Vec2::new(5.0, 6.0);
        assert_eq!(v[0], 5.0);
        assert_eq!(v[1], 6.0);
        v[0] = 10.0;
        assert_eq!(v.x, 10.0);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let v = Vec2::new(1.0, 2.0);
        let _ = v[2]; // Should panic
    }
}
