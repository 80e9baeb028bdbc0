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

//! Provides the axis-aligned bounding box used for collision queries.

use super::vector::Vec2;

/// An axis-aligned bounding box (AABB) centered at `(x, y)` with full
/// extents `width` x `height`.
///
/// Unlike [`Vec2`], an `Aabb` is mutated in place: [`Aabb::deintersect`]
/// moves the box directly. The type does not enforce a sign on the extents;
/// callers must supply non-negative extents for the overlap semantics to be
/// meaningful. Concurrent `deintersect` calls on the same instance must be
/// serialized by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Aabb {
    /// The x coordinate of the box center.
    pub x: f64,
    /// The y coordinate of the box center.
    pub y: f64,
    /// The full horizontal extent of the box.
    pub width: f64,
    /// The full vertical extent of the box.
    pub height: f64,
}

impl Aabb {
    /// Creates a new `Aabb` from a center point and full extents.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the center point of the box.
    #[inline]
    pub const fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Per-axis separation of the two boxes: center distance minus half the
    /// absolute extent difference. Negative means the axis overlaps under
    /// the legacy collision rule.
    #[inline]
    fn axis_gaps(&self, other: &Aabb) -> (f64, f64) {
        let horizontal = (self.x - other.x).abs() - (self.width - other.width).abs() / 2.0;
        let vertical = (self.y - other.y).abs() - (self.height - other.height).abs() / 2.0;
        (horizontal, vertical)
    }

    /// Returns `true` if this box collides with `other`.
    ///
    /// A collision is declared when **either** axis gap is negative, and the
    /// extent term on each axis is half the *difference* of the two boxes'
    /// extents. Both choices are looser than a standard separating-axis
    /// test, which would require both axes to overlap and sum the extents.
    /// This is deliberately preserved legacy behavior; callers tuned against
    /// it depend on the looser policy. The test is symmetric:
    /// `a.colliding(&b) == b.colliding(&a)`.
    #[inline]
    pub fn colliding(&self, other: &Aabb) -> bool {
        let (horizontal, vertical) = self.axis_gaps(other);
        horizontal < 0.0 || vertical < 0.0
    }

    /// Pushes this box out of `other` along each overlapping axis.
    ///
    /// Every axis whose gap is negative moves `self` away from `other`'s
    /// center by the gap magnitude, toward the side `self` already occupies;
    /// coincident centers tie-break toward negative (left/up). A single call
    /// fully resolves the axes it acts on, but this is a one-step positional
    /// correction, not iterative resolution: callers re-invoke per tick while
    /// overlapping bodies remain.
    pub fn deintersect(&mut self, other: &Aabb) {
        let (horizontal, vertical) = self.axis_gaps(other);

        if horizontal < 0.0 {
            if self.x > other.x {
                self.x -= horizontal;
            } else {
                self.x += horizontal;
            }
        }

        if vertical < 0.0 {
            if self.y > other.y {
                self.y -= vertical;
            } else {
                self.y += vertical;
            }
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_new_and_center() {
        let aabb = Aabb::new(1.0, 2.0, 4.0, 6.0);
        assert_eq!(aabb.center(), Vec2::new(1.0, 2.0));
        assert_eq!(aabb.width, 4.0);
        assert_eq!(aabb.height, 6.0);
    }

    #[test]
    fn test_colliding_overlapping() {
        let a = Aabb::new(0.0, 0.0, 2.0, 2.0);
        let b = Aabb::new(0.5, 0.5, 4.0, 4.0);
        assert!(a.colliding(&b));
    }

    #[test]
    fn test_colliding_is_symmetric() {
        let cases = [
            (Aabb::new(0.0, 0.0, 2.0, 2.0), Aabb::new(0.5, 0.5, 4.0, 4.0)),
            (Aabb::new(0.0, 0.0, 2.0, 2.0), Aabb::new(10.0, 0.0, 2.0, 2.0)),
            (Aabb::new(-1.0, 3.0, 6.0, 1.0), Aabb::new(2.0, 3.5, 2.0, 5.0)),
        ];
        for (a, b) in cases {
            assert_eq!(a.colliding(&b), b.colliding(&a));
        }
    }

    #[test]
    fn test_colliding_far_apart() {
        let a = Aabb::new(0.0, 0.0, 2.0, 2.0);
        let b = Aabb::new(10.0, 10.0, 2.0, 2.0);
        assert!(!a.colliding(&b));
    }

    #[test]
    fn test_colliding_single_axis_counts() {
        // Boxes far apart horizontally but with differing vertical extents
        // and aligned centers: the vertical gap is 0 - |2 - 6| / 2 = -2, so
        // the legacy "either axis" rule reports a collision even though the
        // boxes are nowhere near each other.
        let a = Aabb::new(0.0, 0.0, 2.0, 2.0);
        let b = Aabb::new(100.0, 0.0, 2.0, 6.0);
        let (h, v) = a.axis_gaps(&b);
        assert!(h >= 0.0);
        assert!(v < 0.0);
        assert!(a.colliding(&b));
    }

    #[test]
    fn test_deintersect_resolves_vertical_axis() {
        // Equal centers vertically; vertical gap = 0 - |4 - 2| / 2 = -1.
        let mut a = Aabb::new(0.0, 0.0, 4.0, 4.0);
        let b = Aabb::new(1.0, 0.0, 2.0, 2.0);
        let (h, v) = a.axis_gaps(&b);
        assert!(h >= 0.0);
        assert!(v < 0.0);

        a.deintersect(&b);

        // Horizontal axis untouched, vertical axis fully resolved.
        assert_eq!(a.x, 0.0);
        let (_, v_after) = a.axis_gaps(&b);
        assert!(v_after >= 0.0);
    }

    #[test]
    fn test_deintersect_pushes_away_from_other() {
        // `a` sits right of `b`'s center, so it must move further right.
        let mut a = Aabb::new(1.0, 0.0, 6.0, 2.0);
        let b = Aabb::new(0.0, 0.0, 2.0, 2.0);
        let old_x = a.x;
        a.deintersect(&b);
        assert!(a.x > old_x);
        let (h_after, _) = a.axis_gaps(&b);
        assert!(approx_eq(h_after, 0.0));
    }

    #[test]
    fn test_deintersect_tie_breaks_left_and_up() {
        // Coincident centers push toward negative on both axes.
        let mut a = Aabb::new(0.0, 0.0, 4.0, 4.0);
        let b = Aabb::new(0.0, 0.0, 2.0, 2.0);
        a.deintersect(&b);
        assert!(a.x < 0.0);
        assert!(a.y < 0.0);
        let (h, v) = a.axis_gaps(&b);
        assert!(h >= 0.0);
        assert!(v >= 0.0);
    }

    #[test]
    fn test_deintersect_no_overlap_is_noop() {
        let mut a = Aabb::new(0.0, 0.0, 2.0, 2.0);
        let b = Aabb::new(10.0, 10.0, 2.0, 2.0);
        let before = a;
        a.deintersect(&b);
        assert_eq!(a, before);
    }
}
