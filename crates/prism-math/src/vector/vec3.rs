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

//! 3D operations over the `x`, `y` and `z` lanes of a [`Vector`].

use super::{clamp_length_with, Vector};
use crate::matrix::Matrix;
use crate::quaternion;

lane_comparisons!(3);

/// A screen-space viewport used by [`project`] and [`unproject`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    /// Left edge in pixels.
    pub x: f32,
    /// Top edge in pixels.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    /// Depth mapped to the near plane.
    pub min_z: f32,
    /// Depth mapped to the far plane.
    pub max_z: f32,
}

impl Viewport {
    /// Creates a viewport with the default `[0, 1]` depth range.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            min_z: 0.0,
            max_z: 1.0,
        }
    }
}

/// Dot product of the `xyz` lanes, replicated.
#[inline]
pub fn dot(a: Vector, b: Vector) -> Vector {
    Vector::splat(a.x * b.x + a.y * b.y + a.z * b.z)
}

/// Cross product; the result has `w = 0`.
#[inline]
pub fn cross(a: Vector, b: Vector) -> Vector {
    Vector::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
        0.0,
    )
}

/// Squared length, replicated.
#[inline]
pub fn length_sq(v: Vector) -> Vector {
    dot(v, v)
}

/// `1 / length`, replicated.
#[inline]
pub fn reciprocal_length(v: Vector) -> Vector {
    length_sq(v).reciprocal_sqrt()
}

/// Estimated `1 / length`, replicated.
#[inline]
pub fn reciprocal_length_est(v: Vector) -> Vector {
    length_sq(v).reciprocal_sqrt_est()
}

/// Length, replicated.
#[inline]
pub fn length(v: Vector) -> Vector {
    length_sq(v).sqrt()
}

/// Estimated length, replicated.
#[inline]
pub fn length_est(v: Vector) -> Vector {
    length_sq(v).sqrt_est()
}

/// Scales `v` to unit length. All four lanes are scaled.
///
/// A vector whose length is not strictly positive is scaled by zero.
#[inline]
pub fn normalize(v: Vector) -> Vector {
    let length = length(v).x;
    let inv = if length > 0.0 { 1.0 / length } else { 0.0 };
    v * inv
}

/// Estimated normalization. The zero vector yields NaN lanes.
#[inline]
pub fn normalize_est(v: Vector) -> Vector {
    v * reciprocal_length_est(v)
}

/// Clamps the length of `v` into `[length_min, length_max]`.
#[inline]
pub fn clamp_length(v: Vector, length_min: f32, length_max: f32) -> Vector {
    clamp_length_v(v, Vector::splat(length_min), Vector::splat(length_max))
}

/// Clamps the length of `v` with replicated bounds.
#[inline]
pub fn clamp_length_v(v: Vector, length_min: Vector, length_max: Vector) -> Vector {
    clamp_length_with(v, length_sq(v), length_min, length_max)
}

/// Reflects `incident` about `normal`: `i - 2 * dot(i, n) * n`.
#[inline]
pub fn reflect(incident: Vector, normal: Vector) -> Vector {
    let d = dot(incident, normal);
    (d + d).negative_multiply_subtract(normal, incident)
}

/// Refracts `incident` through a surface with the given index ratio.
#[inline]
pub fn refract(incident: Vector, normal: Vector, refraction_index: f32) -> Vector {
    refract_v(incident, normal, Vector::splat(refraction_index))
}

/// Refraction with a replicated index. Total internal reflection yields zero.
pub fn refract_v(incident: Vector, normal: Vector, refraction_index: Vector) -> Vector {
    let i_dot_n = dot(incident, normal);
    // r = 1 - eta^2 * (1 - dot^2)
    let r = i_dot_n.negative_multiply_subtract(i_dot_n, Vector::ONE);
    let r = (r * refraction_index).negative_multiply_subtract(refraction_index, Vector::ONE);
    if super::compare::all_lanes(r.less_or_equal(Vector::ZERO), 4) {
        return Vector::ZERO;
    }
    let r = refraction_index.multiply_add(i_dot_n, r.sqrt());
    normal.negative_multiply_subtract(r, refraction_index * incident)
}

/// A vector perpendicular to `v`, built from a sign-based case split. Not normalized.
pub fn orthogonal(v: Vector) -> Vector {
    let z = v.splat_z();
    let yzyy = Vector::new(v.y, v.z, v.y, v.y);
    let negative_v = Vector::ZERO - v;

    let z_is_negative = z.less(Vector::ZERO);
    let yzyy_is_negative = yzyy.less(Vector::ZERO);

    let s = yzyy + z;
    let d = yzyy - z;

    let select = z_is_negative.equal_int(yzyy_is_negative);

    let r0 = Vector::new(s.x, negative_v.x, negative_v.x, negative_v.x);
    let r1 = Vector::new(d.x, negative_v.x, v.x, v.x);
    r1.select(r0, select)
}

/// Angle between two unit vectors, replicated.
#[inline]
pub fn angle_between_normals(n1: Vector, n2: Vector) -> Vector {
    dot(n1, n2).clamp(Vector::NEGATIVE_ONE, Vector::ONE).acos()
}

/// Estimated angle between two unit vectors, replicated.
#[inline]
pub fn angle_between_normals_est(n1: Vector, n2: Vector) -> Vector {
    dot(n1, n2).clamp(Vector::NEGATIVE_ONE, Vector::ONE).acos_est()
}

/// Angle between two arbitrary vectors, replicated.
#[inline]
pub fn angle_between_vectors(v1: Vector, v2: Vector) -> Vector {
    let inv_lengths = reciprocal_length(v1) * reciprocal_length(v2);
    (dot(v1, v2) * inv_lengths)
        .clamp(Vector::NEGATIVE_ONE, Vector::ONE)
        .acos()
}

/// Distance from `point` to the infinite line through `line_point1` and `line_point2`.
pub fn line_point_distance(line_point1: Vector, line_point2: Vector, point: Vector) -> Vector {
    let point_vector = point - line_point1;
    let line_vector = line_point2 - line_point1;
    let scale = dot(point_vector, line_vector) / length_sq(line_vector);
    length(point_vector - line_vector * scale)
}

/// Splits `v` into `(parallel, perpendicular)` components relative to a unit `normal`.
#[inline]
pub fn components_from_normal(v: Vector, normal: Vector) -> (Vector, Vector) {
    let parallel = normal * dot(v, normal);
    (parallel, v - parallel)
}

/// Rotates `v` by a unit quaternion.
pub fn rotate(v: Vector, rotation: Vector) -> Vector {
    let a = v.with_w(0.0);
    let q = quaternion::conjugate(rotation);
    let result = quaternion::multiply(q, a);
    quaternion::multiply(result, rotation)
}

/// Rotates `v` by the inverse of a unit quaternion.
pub fn inverse_rotate(v: Vector, rotation: Vector) -> Vector {
    let a = v.with_w(0.0);
    let result = quaternion::multiply(rotation, a);
    let q = quaternion::conjugate(rotation);
    quaternion::multiply(result, q)
}

/// Transforms `(x, y, z, 1)` by `m`.
#[inline]
pub fn transform(v: Vector, m: &Matrix) -> Vector {
    let result = v.splat_z().multiply_add(m.r[2], m.r[3]);
    let result = v.splat_y().multiply_add(m.r[1], result);
    v.splat_x().multiply_add(m.r[0], result)
}

/// Transforms `(x, y, z, 1)` by `m` and projects back to `w = 1`.
#[inline]
pub fn transform_coord(v: Vector, m: &Matrix) -> Vector {
    let result = transform(v, m);
    result / result.splat_w()
}

/// Transforms the direction `(x, y, z, 0)` by `m`, ignoring translation.
#[inline]
pub fn transform_normal(v: Vector, m: &Matrix) -> Vector {
    let result = v.splat_z() * m.r[2];
    let result = v.splat_y().multiply_add(m.r[1], result);
    v.splat_x().multiply_add(m.r[0], result)
}

/// Projects an object-space point into screen space.
///
/// The object is taken through `world * view * projection`, then mapped onto
/// `viewport` with `y` growing downwards.
pub fn project(
    v: Vector,
    viewport: &Viewport,
    projection: &Matrix,
    view: &Matrix,
    world: &Matrix,
) -> Vector {
    let half_width = viewport.width * 0.5;
    let half_height = viewport.height * 0.5;
    let scale = Vector::new(
        half_width,
        -half_height,
        viewport.max_z - viewport.min_z,
        0.0,
    );
    let offset = Vector::new(
        viewport.x + half_width,
        viewport.y + half_height,
        viewport.min_z,
        0.0,
    );
    let transform = *world * *view * *projection;
    transform_coord(v, &transform).multiply_add(scale, offset)
}

/// Maps a screen-space point back into object space. Inverse of [`project`].
pub fn unproject(
    v: Vector,
    viewport: &Viewport,
    projection: &Matrix,
    view: &Matrix,
    world: &Matrix,
) -> Vector {
    let d = Vector::new(-1.0, 1.0, 0.0, 0.0);
    let scale = Vector::new(
        viewport.width * 0.5,
        -viewport.height * 0.5,
        viewport.max_z - viewport.min_z,
        1.0,
    )
    .reciprocal();
    let offset = Vector::new(-viewport.x, -viewport.y, -viewport.min_z, 0.0);
    let offset = scale.multiply_add(offset, d);
    let (transform, _) = (*world * *view * *projection).inverse();
    transform_coord(v.multiply_add(scale, offset), &transform)
}
