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

//! 4D operations over all lanes of a [`Vector`].

use super::{clamp_length_with, Vector};
use crate::matrix::Matrix;

lane_comparisons!(4);

/// Dot product of all four lanes, replicated.
#[inline]
pub fn dot(a: Vector, b: Vector) -> Vector {
    Vector::splat(a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w)
}

/// The 4D cross product: a vector orthogonal to `v1`, `v2` and `v3`.
pub fn cross(v1: Vector, v2: Vector, v3: Vector) -> Vector {
    Vector::new(
        (v2.z * v3.w - v2.w * v3.z) * v1.y - (v2.y * v3.w - v2.w * v3.y) * v1.z
            + (v2.y * v3.z - v2.z * v3.y) * v1.w,
        (v2.w * v3.z - v2.z * v3.w) * v1.x - (v2.w * v3.x - v2.x * v3.w) * v1.z
            + (v2.z * v3.x - v2.x * v3.z) * v1.w,
        (v2.y * v3.w - v2.w * v3.y) * v1.x - (v2.x * v3.w - v2.w * v3.x) * v1.y
            + (v2.x * v3.y - v2.y * v3.x) * v1.w,
        (v2.z * v3.y - v2.y * v3.z) * v1.x - (v2.z * v3.x - v2.x * v3.z) * v1.y
            + (v2.y * v3.x - v2.x * v3.y) * v1.z,
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

/// Scales `v` to unit length; a non-positive length scales by zero.
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

/// Reflects `incident` about `normal`.
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
    let r = i_dot_n.negative_multiply_subtract(i_dot_n, Vector::ONE);
    let r = (r * refraction_index).negative_multiply_subtract(refraction_index, Vector::ONE);
    if less_or_equal(r, Vector::ZERO) {
        return Vector::ZERO;
    }
    let r = refraction_index.multiply_add(i_dot_n, r.sqrt());
    normal.negative_multiply_subtract(r, refraction_index * incident)
}

/// A vector perpendicular to `v`: `(z, w, -x, -y)`.
#[inline]
pub fn orthogonal(v: Vector) -> Vector {
    Vector::new(v.z, v.w, -v.x, -v.y)
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

/// Transforms all four lanes by `m` (row vector times matrix).
#[inline]
pub fn transform(v: Vector, m: &Matrix) -> Vector {
    let result = v.splat_w() * m.r[3];
    let result = v.splat_z().multiply_add(m.r[2], result);
    let result = v.splat_y().multiply_add(m.r[1], result);
    v.splat_x().multiply_add(m.r[0], result)
}
