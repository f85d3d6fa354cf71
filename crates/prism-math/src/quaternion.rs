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

//! Quaternion functions over [`Vector`].
//!
//! A quaternion is stored as `(x, y, z, w)` where `xyz` is the imaginary part and
//! `w` the real part. Rotation quaternions are expected to be unit length.

use crate::matrix::Matrix;
use crate::scalar;
use crate::vector::{vec3, vec4, Vector};

/// Upper bound on `|w|` and on `cos ω` before the logarithm and slerp fall back
/// to their near-identity forms.
pub const ONE_MINUS_EPSILON: f32 = 1.0 - 0.00001;

/// Control points produced by [`squad_setup`] for a [`squad`] segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquadControlPoints {
    /// Inner control point after the segment start.
    pub a: Vector,
    /// Inner control point before the segment end.
    pub b: Vector,
    /// The segment end, sign-adjusted onto the start's hemisphere.
    pub c: Vector,
}

/// The identity rotation `(0, 0, 0, 1)`.
#[inline]
pub const fn identity() -> Vector {
    Vector::IDENTITY_R3
}

/// Returns `true` if `q` is exactly the identity.
#[inline]
pub fn is_identity(q: Vector) -> bool {
    vec4::equal(q, identity())
}

/// Returns `true` if any component is NaN.
#[inline]
pub fn is_nan(q: Vector) -> bool {
    vec4::is_nan(q)
}

/// Returns `true` if any component is infinite.
#[inline]
pub fn is_infinite(q: Vector) -> bool {
    vec4::is_infinite(q)
}

/// Returns `true` if all four components are equal.
#[inline]
pub fn equal(q1: Vector, q2: Vector) -> bool {
    vec4::equal(q1, q2)
}

/// Returns `true` if any component differs.
#[inline]
pub fn not_equal(q1: Vector, q2: Vector) -> bool {
    vec4::not_equal(q1, q2)
}

/// Four-lane dot product, replicated.
#[inline]
pub fn dot(q1: Vector, q2: Vector) -> Vector {
    vec4::dot(q1, q2)
}

/// Concatenates two rotations: the result applies `q1` first, then `q2`.
pub fn multiply(q1: Vector, q2: Vector) -> Vector {
    Vector::new(
        q2.w * q1.x + q2.x * q1.w + q2.y * q1.z - q2.z * q1.y,
        q2.w * q1.y - q2.x * q1.z + q2.y * q1.w + q2.z * q1.x,
        q2.w * q1.z + q2.x * q1.y - q2.y * q1.x + q2.z * q1.w,
        q2.w * q1.w - q2.x * q1.x - q2.y * q1.y - q2.z * q1.z,
    )
}

/// Squared magnitude, replicated.
#[inline]
pub fn length_sq(q: Vector) -> Vector {
    vec4::length_sq(q)
}

/// `1 / |q|`, replicated.
#[inline]
pub fn reciprocal_length(q: Vector) -> Vector {
    vec4::reciprocal_length(q)
}

/// Magnitude, replicated.
#[inline]
pub fn length(q: Vector) -> Vector {
    vec4::length(q)
}

/// Scales `q` to unit length. The zero quaternion stays zero.
#[inline]
pub fn normalize(q: Vector) -> Vector {
    vec4::normalize(q)
}

/// [`normalize`] using the estimated reciprocal length.
#[inline]
pub fn normalize_est(q: Vector) -> Vector {
    vec4::normalize_est(q)
}

/// Negates the imaginary part.
#[inline]
pub fn conjugate(q: Vector) -> Vector {
    Vector::new(-q.x, -q.y, -q.z, q.w)
}

/// The multiplicative inverse `conjugate(q) / |q|²`.
///
/// Returns the zero quaternion when `|q|²` is at most [`scalar::EPSILON`].
pub fn inverse(q: Vector) -> Vector {
    let length_sq = length_sq(q).x;
    if length_sq <= scalar::EPSILON {
        log::trace!("Inverting a zero-length quaternion; returning zero.");
        return Vector::ZERO;
    }
    conjugate(q) / length_sq
}

/// Natural logarithm of a unit quaternion. The result has `w = 0`.
///
/// Near the identity (`|w| >= ONE_MINUS_EPSILON`) the imaginary part is returned
/// unscaled.
pub fn ln(q: Vector) -> Vector {
    let imaginary = q.with_w(0.0);
    if q.w.abs() < ONE_MINUS_EPSILON {
        let theta = q.w.acos();
        imaginary * (theta / theta.sin())
    } else {
        imaginary
    }
}

/// Exponential of a pure quaternion (`w` is ignored).
pub fn exp(q: Vector) -> Vector {
    let theta = vec3::length(q).x;
    let (sin_theta, cos_theta) = scalar::sin_cos(theta);
    let imaginary = if scalar::near_equal(theta, 0.0, scalar::EPSILON) {
        q
    } else {
        q * (sin_theta / theta)
    };
    imaginary.with_w(cos_theta)
}

/// Spherical linear interpolation between unit quaternions along the shorter arc.
#[inline]
pub fn slerp(q0: Vector, q1: Vector, t: f32) -> Vector {
    slerp_v(q0, q1, Vector::splat(t))
}

/// [`slerp`] with `t` replicated in a vector.
///
/// Falls back to a linear blend when the inputs are nearly parallel.
pub fn slerp_v(q0: Vector, q1: Vector, t: Vector) -> Vector {
    let t = t.x;
    let mut cos_omega = dot(q0, q1).x;
    let sign = if cos_omega < 0.0 { -1.0 } else { 1.0 };
    cos_omega *= sign;

    let (s0, s1) = if cos_omega < ONE_MINUS_EPSILON {
        let sin_omega = (1.0 - cos_omega * cos_omega).sqrt();
        let omega = sin_omega.atan2(cos_omega);
        let inv_sin_omega = 1.0 / sin_omega;
        (
            ((1.0 - t) * omega).sin() * inv_sin_omega,
            (t * omega).sin() * inv_sin_omega,
        )
    } else {
        (1.0 - t, t)
    };

    q0 * s0 + q1 * (s1 * sign)
}

/// Spherical quadrangle interpolation from `q1` to `q4` through the inner control
/// points `q2` and `q3` (see [`squad_setup`]).
#[inline]
pub fn squad(q1: Vector, q2: Vector, q3: Vector, q4: Vector, t: f32) -> Vector {
    squad_v(q1, q2, q3, q4, Vector::splat(t))
}

/// [`squad`] with `t` replicated in a vector.
pub fn squad_v(q1: Vector, q2: Vector, q3: Vector, q4: Vector, t: Vector) -> Vector {
    let q03 = slerp_v(q1, q4, t);
    let q12 = slerp_v(q2, q3, t);
    let tp = t.negative_multiply_subtract(t, t) * 2.0;
    slerp_v(q03, q12, tp)
}

/// Builds the [`squad`] control points for the segment `q1 -> q2` with neighbours
/// `q0` and `q3`.
///
/// `q0`, `q2` and `q3` are independently negated onto the hemisphere of their
/// neighbour so the curve follows the shorter arcs.
pub fn squad_setup(q0: Vector, q1: Vector, q2: Vector, q3: Vector) -> SquadControlPoints {
    let closer = |a: Vector, b: Vector| {
        if length_sq(a + b).x < length_sq(a - b).x {
            -b
        } else {
            b
        }
    };
    let sq2 = closer(q1, q2);
    let sq0 = closer(q1, q0);
    let sq3 = closer(sq2, q3);

    let inv_q1 = inverse(q1);
    let inv_q2 = inverse(sq2);

    let ln_q0 = ln(multiply(inv_q1, sq0));
    let ln_q2 = ln(multiply(inv_q1, sq2));
    let ln_q1 = ln(multiply(inv_q2, q1));
    let ln_q3 = ln(multiply(inv_q2, sq3));

    let exp_q02 = exp((ln_q0 + ln_q2) * -0.25);
    let exp_q13 = exp((ln_q1 + ln_q3) * -0.25);

    SquadControlPoints {
        a: multiply(q1, exp_q02),
        b: multiply(sq2, exp_q13),
        c: sq2,
    }
}

/// Barycentric interpolation on the sphere: `q0` at `(0, 0)`, `q1` at `(1, 0)`
/// and `q2` at `(0, 1)`.
///
/// Returns `q0` when `|f + g|` is below `1e-5`.
pub fn bary_centric(q0: Vector, q1: Vector, q2: Vector, f: f32, g: f32) -> Vector {
    let s = f + g;
    if s.abs() < 0.00001 {
        return q0;
    }
    let q01 = slerp(q0, q1, s);
    let q02 = slerp(q0, q2, s);
    slerp(q01, q02, g / s)
}

/// [`bary_centric`] with replicated weights.
#[inline]
pub fn bary_centric_v(q0: Vector, q1: Vector, q2: Vector, f: Vector, g: Vector) -> Vector {
    bary_centric(q0, q1, q2, f.x, g.x)
}

/// Rotation of `angle` radians about a unit-length axis.
pub fn rotation_normal(normal_axis: Vector, angle: f32) -> Vector {
    let (s, c) = scalar::sin_cos(0.5 * angle);
    (normal_axis * s).with_w(c)
}

/// Rotation of `angle` radians about an arbitrary finite, non-zero axis.
pub fn rotation_axis(axis: Vector, angle: f32) -> Vector {
    precondition!(!vec3::equal(axis, Vector::ZERO), "rotation axis is zero");
    precondition!(!vec3::is_infinite(axis), "rotation axis is infinite");
    rotation_normal(vec3::normalize(axis), angle)
}

/// Rotation from Euler angles in radians: roll about Z first, then pitch about X,
/// then yaw about Y.
pub fn rotation_roll_pitch_yaw(pitch: f32, yaw: f32, roll: f32) -> Vector {
    let (sp, cp) = scalar::sin_cos(0.5 * pitch);
    let (sy, cy) = scalar::sin_cos(0.5 * yaw);
    let (sr, cr) = scalar::sin_cos(0.5 * roll);
    Vector::new(
        cr * sp * cy + sr * cp * sy,
        cr * cp * sy - sr * sp * cy,
        sr * cp * cy - cr * sp * sy,
        cr * cp * cy + sr * sp * sy,
    )
}

/// Euler rotation with angles packed as `(pitch, yaw, roll, _)`.
#[inline]
pub fn rotation_roll_pitch_yaw_from_vector(angles: Vector) -> Vector {
    rotation_roll_pitch_yaw(angles.x, angles.y, angles.z)
}

/// Extracts the rotation of an orthonormal upper 3x3 block.
pub fn rotation_matrix(m: &Matrix) -> Vector {
    let [r0, r1, r2, _] = m.r;
    let r22 = r2.z;
    if r22 <= 0.0 {
        // x² + y² >= z² + w²
        let dif10 = r1.y - r0.x;
        let omr22 = 1.0 - r22;
        if dif10 <= 0.0 {
            let four_x_sq = omr22 - dif10;
            let inv = 0.5 / four_x_sq.sqrt();
            Vector::new(
                four_x_sq * inv,
                (r0.y + r1.x) * inv,
                (r0.z + r2.x) * inv,
                (r1.z - r2.y) * inv,
            )
        } else {
            let four_y_sq = omr22 + dif10;
            let inv = 0.5 / four_y_sq.sqrt();
            Vector::new(
                (r0.y + r1.x) * inv,
                four_y_sq * inv,
                (r1.z + r2.y) * inv,
                (r2.x - r0.z) * inv,
            )
        }
    } else {
        // z² + w² >= x² + y²
        let sum10 = r1.y + r0.x;
        let opr22 = 1.0 + r22;
        if sum10 <= 0.0 {
            let four_z_sq = opr22 - sum10;
            let inv = 0.5 / four_z_sq.sqrt();
            Vector::new(
                (r0.z + r2.x) * inv,
                (r1.z + r2.y) * inv,
                four_z_sq * inv,
                (r0.y - r1.x) * inv,
            )
        } else {
            let four_w_sq = opr22 + sum10;
            let inv = 0.5 / four_w_sq.sqrt();
            Vector::new(
                (r1.z - r2.y) * inv,
                (r2.x - r0.z) * inv,
                (r0.y - r1.x) * inv,
                four_w_sq * inv,
            )
        }
    }
}

/// Splits a unit quaternion into its axis (the imaginary part, not normalized)
/// and its angle in radians.
#[inline]
pub fn to_axis_angle(q: Vector) -> (Vector, f32) {
    (q, 2.0 * scalar::acos(q.w))
}

/// Recovers `(pitch, yaw, roll, 0)` Euler angles from a unit quaternion.
///
/// At gimbal lock (pitch of ±π/2) roll is reported as 0 and the whole turn about
/// the vertical axis is folded into yaw.
pub fn to_roll_pitch_yaw(q: Vector) -> Vector {
    let Vector { x, y, z, w } = q;
    let m21 = 2.0 * (y * z - x * w);
    let pitch = scalar::asin(-m21);
    if m21.abs() < ONE_MINUS_EPSILON {
        let m20 = 2.0 * (x * z + y * w);
        let m22 = 1.0 - 2.0 * (x * x + y * y);
        let m01 = 2.0 * (x * y + z * w);
        let m11 = 1.0 - 2.0 * (x * x + z * z);
        Vector::new(pitch, m20.atan2(m22), m01.atan2(m11), 0.0)
    } else {
        let m02 = 2.0 * (x * z - y * w);
        let m00 = 1.0 - 2.0 * (y * y + z * z);
        Vector::new(pitch, (-m02).atan2(m00), 0.0, 0.0)
    }
}
