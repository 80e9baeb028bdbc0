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

//! Provides rays and ray/segment intersection queries.

use super::vector::Vec2;

/// A ray: an origin position and a unit-length direction.
///
/// Stateless query object; both fields are plain value copies. The direction
/// is normalized at construction and stays unit length, except for the
/// degenerate zero direction, which callers must avoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin of the ray.
    pub pos: Vec2,
    /// The unit-length direction of the ray.
    pub dir: Vec2,
}

/// The result of a successful ray/segment intersection query.
///
/// Produced fresh per query; the caller owns it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The intersection point, `ray.pos + ray.dir * distance`.
    pub point: Vec2,
    /// The ray parameter `t` at the hit: the distance from the ray origin
    /// along its direction. Always `>= 0`.
    pub distance: f64,
    /// The interpolation fraction along the tested segment, in `[0, 1]`:
    /// 0 at the first endpoint, 1 at the second.
    pub line_alpha: f64,
}

impl Ray {
    /// Creates a new ray from an origin and a direction.
    ///
    /// The direction is normalized; a zero direction stays zero and produces
    /// a degenerate ray that never intersects anything.
    #[inline]
    pub fn new(pos: Vec2, dir: Vec2) -> Self {
        Self {
            pos,
            dir: dir.normalize(),
        }
    }

    /// Creates a new ray from an origin and an angle `theta` in radians,
    /// with direction `(sin theta, cos theta)`.
    ///
    /// `theta = 0` points along the positive Y-axis.
    #[inline]
    pub fn from_angle(pos: Vec2, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            pos,
            dir: Vec2::new(sin, cos),
        }
    }

    /// Computes the intersection of this ray with the segment `l1`..`l2`.
    ///
    /// Returns `None` when the ray is parallel to the segment (including the
    /// degenerate zero-length segment), when the intersection lies strictly
    /// behind the ray origin, or when it falls outside the segment. An
    /// intersection exactly at the ray origin counts as a hit.
    ///
    /// # Examples
    ///
    /// ```
    /// use kinema_core::math::{Ray, Vec2};
    ///
    /// let ray = Ray::new(Vec2::ZERO, Vec2::Y);
    /// let hit = ray
    ///     .intersect_segment(Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.0))
    ///     .unwrap();
    /// assert_eq!(hit.point, Vec2::new(0.0, 1.0));
    /// assert_eq!(hit.distance, 1.0);
    /// assert_eq!(hit.line_alpha, 0.5);
    /// ```
    #[inline]
    pub fn intersect_segment(&self, l1: Vec2, l2: Vec2) -> Option<RayHit> {
        let mut hit = RayHit::default();
        self.intersect_segment_into(l1, l2, &mut hit).then_some(hit)
    }

    /// Non-allocating form of [`Ray::intersect_segment`].
    ///
    /// Writes the hit into `out` and returns `true` on an intersection;
    /// `out` is untouched on a miss. Exists for tight per-frame query loops;
    /// agrees bit-for-bit with the allocating form on the same inputs.
    pub fn intersect_segment_into(&self, l1: Vec2, l2: Vec2, out: &mut RayHit) -> bool {
        let xd = l2.x - l1.x;
        let yd = l2.y - l1.y;
        let d1 = xd * self.dir.y;
        let d2 = yd * self.dir.x;
        // Equal determinant halves: the ray is parallel to the segment
        // (or the segment is a point). No division takes place.
        if d1 == d2 {
            return false;
        }
        let t = (yd * self.pos.x + xd * l1.y - yd * l1.x - xd * self.pos.y) / (d1 - d2);
        if t < 0.0 {
            return false;
        }
        let point = self.pos + self.dir * t;
        // The segment fraction comes from whichever axis has extent,
        // preferring x.
        let m = if xd != 0.0 {
            (point.x - l1.x) / xd
        } else {
            (point.y - l1.y) / yd
        };
        if !(0.0..=1.0).contains(&m) {
            return false;
        }
        out.point = point;
        out.distance = t;
        out.line_alpha = m;
        true
    }
}
