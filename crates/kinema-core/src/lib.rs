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

//! # Kinema Core
//!
//! The geometry kernel of the kinema runtime: 2D vector algebra, ray/segment
//! intersection, and axis-aligned bounding boxes for movement, collision and
//! visibility queries.
//!
//! Everything here is a plain value type with no shared state, so all
//! operations are safe to call from any thread. The one exception is
//! [`math::Aabb::deintersect`], which mutates its receiver in place and must
//! be serialized by the caller if an instance is shared.

#![warn(missing_docs)]

pub mod math;

pub use math::{Aabb, Ray, RayHit, Vec2};
