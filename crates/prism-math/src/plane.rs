// Copyright 2025 eraflo
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

//! Plane equations stored as `Vector(a, b, c, d)` for `ax + by + cz + d = 0`.

use crate::vector::{vec3, vec4, Vector};

/// Four-lane dot product of the plane with `v`, replicated.
#[inline]
pub fn dot(plane: Vector, v: Vector) -> Vector {
    vec4::dot(plane, v)
}

/// Signed distance term for the point `(x, y, z, 1)`, replicated.
#[inline]
pub fn dot_coord(plane: Vector, point: Vector) -> Vector {
    vec4::dot(plane, point.with_w(1.0))
}

/// Dot product of the plane normal with a direction, replicated.
#[inline]
pub fn dot_normal(plane: Vector, direction: Vector) -> Vector {
    vec3::dot(plane, direction)
}

/// Scales the plane so its normal has unit length. A zero normal leaves a zero plane.
#[inline]
pub fn normalize(plane: Vector) -> Vector {
    let length = vec3::length(plane).x;
    let inv = if length > 0.0 { 1.0 / length } else { 0.0 };
    plane * inv
}

/// Builds a plane from a point on it and its normal.
#[inline]
pub fn from_point_normal(point: Vector, normal: Vector) -> Vector {
    normal.with_w(-vec3::dot(point, normal).x)
}
