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

//! 2D operations over the `x` and `y` lanes of a [`Vector`].
//!
//! Reductions such as [`dot`] and [`length`] replicate their scalar result into
//! all four lanes.

use super::{clamp_length_with, Vector};
use crate::matrix::Matrix;

lane_comparisons!(2);

/// Dot product of the `xy` lanes, replicated.
#[inline]
pub fn dot(a: Vector, b: Vector) -> Vector {
    Vector::splat(a.x * b.x + a.y * b.y)
}

/// The 2D cross product (the `z` of the 3D cross product), replicated.
#[inline]
pub fn cross(a: Vector, b: Vector) -> Vector {
    Vector::splat(a.x * b.y - a.y * b.x)
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

/// Scales `v` to unit length.
///
/// A vector whose length is not strictly positive is scaled by zero, so the zero
/// vector maps to the zero vector instead of NaN.
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

/// Refraction with a per-lane index. Each lane under total internal reflection is zero.
pub fn refract_v(incident: Vector, normal: Vector, refraction_index: Vector) -> Vector {
    let i_dot_n = incident.x * normal.x + incident.y * normal.y;
    let k = 1.0 - i_dot_n * i_dot_n;
    let lane = |i: f32, n: f32, eta: f32| -> f32 {
        let r = 1.0 - k * eta * eta;
        if r >= 0.0 {
            eta * i - n * (eta * i_dot_n + r.sqrt())
        } else {
            0.0
        }
    };
    Vector::new(
        lane(incident.x, normal.x, refraction_index.x),
        lane(incident.y, normal.y, refraction_index.y),
        0.0,
        0.0,
    )
}

/// A vector perpendicular to `v`: `(-y, x)`.
#[inline]
pub fn orthogonal(v: Vector) -> Vector {
    Vector::new(-v.y, v.x, 0.0, 0.0)
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

/// Intersects two infinite lines, each given by two points.
///
/// Returns [`Vector::INFINITY`] for coincident lines and [`Vector::QNAN`] for
/// parallel, distinct lines.
pub fn intersect_line(
    line1_point1: Vector,
    line1_point2: Vector,
    line2_point1: Vector,
    line2_point2: Vector,
) -> Vector {
    let v1 = line1_point2 - line1_point1;
    let v2 = line2_point2 - line2_point1;
    let v3 = line1_point1 - line2_point1;

    let c1 = cross(v1, v2);
    let c2 = cross(v2, v3);

    if near_equal(c1, Vector::ZERO, Vector::EPSILON) {
        if near_equal(c2, Vector::ZERO, Vector::EPSILON) {
            Vector::INFINITY
        } else {
            Vector::QNAN
        }
    } else {
        v1.multiply_add(c2 * c1.reciprocal(), line1_point1)
    }
}

/// Transforms `(x, y, 0, 1)` by `m`.
#[inline]
pub fn transform(v: Vector, m: &Matrix) -> Vector {
    let result = v.splat_y().multiply_add(m.r[1], m.r[3]);
    v.splat_x().multiply_add(m.r[0], result)
}

/// Transforms `(x, y, 0, 1)` by `m` and projects back to `w = 1`.
#[inline]
pub fn transform_coord(v: Vector, m: &Matrix) -> Vector {
    let result = transform(v, m);
    result / result.splat_w()
}

/// Transforms the direction `(x, y, 0, 0)` by `m`, ignoring translation.
#[inline]
pub fn transform_normal(v: Vector, m: &Matrix) -> Vector {
    let result = v.splat_y() * m.r[1];
    v.splat_x().multiply_add(m.r[0], result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_dot_cross_replicate() {
        let a = Vector::new(1.0, 2.0, 99.0, 99.0);
        let b = Vector::new(3.0, 4.0, -99.0, 7.0);
        assert_eq!(dot(a, b), Vector::splat(11.0));
        assert_eq!(cross(a, b), Vector::splat(-2.0));
    }

    #[test]
    fn test_length_family() {
        let v = Vector::new(3.0, 4.0, 100.0, 100.0);
        assert_eq!(length_sq(v), Vector::splat(25.0));
        assert_eq!(length(v), Vector::splat(5.0));
        assert_relative_eq!(reciprocal_length(v), Vector::splat(0.2));
    }

    #[test]
    fn test_normalize() {
        let v = normalize(Vector::new(3.0, 4.0, 0.0, 0.0));
        assert_relative_eq!(v, Vector::new(0.6, 0.8, 0.0, 0.0));
        assert_eq!(normalize(Vector::ZERO), Vector::ZERO);
    }

    #[test]
    fn test_clamp_length() {
        let v = Vector::new(3.0, 4.0, 0.0, 0.0);
        assert_eq!(clamp_length(v, 1.0, 10.0).to_bits(), v.to_bits());
        assert_relative_eq!(clamp_length(v, 1.0, 2.5), Vector::new(1.5, 2.0, 0.0, 0.0));
        assert_relative_eq!(clamp_length(v, 10.0, 20.0), Vector::new(6.0, 8.0, 0.0, 0.0));
        assert_eq!(clamp_length(Vector::ZERO, 1.0, 2.0), Vector::ZERO);
    }

    #[test]
    fn test_reflect_refract() {
        let incident = normalize(Vector::new(1.0, -1.0, 0.0, 0.0));
        let normal = Vector::new(0.0, 1.0, 0.0, 0.0);
        assert_relative_eq!(
            reflect(incident, normal),
            normalize(Vector::new(1.0, 1.0, 0.0, 0.0))
        );
        // Index 1 passes straight through.
        assert_abs_diff_eq!(refract(incident, normal, 1.0), incident, epsilon = 1e-6);
        // Grazing incidence into a denser medium is totally reflected.
        let grazing = normalize(Vector::new(1.0, -0.1, 0.0, 0.0));
        assert_eq!(refract(grazing, normal, 1.5), Vector::ZERO);
    }

    #[test]
    fn test_orthogonal_and_angles() {
        let v = Vector::new(1.0, 2.0, 0.0, 0.0);
        assert_eq!(orthogonal(v), Vector::new(-2.0, 1.0, 0.0, 0.0));
        assert_abs_diff_eq!(dot(v, orthogonal(v)).x, 0.0);
        let x = Vector::new(1.0, 0.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0, 0.0);
        assert_abs_diff_eq!(
            angle_between_normals(x, y).x,
            crate::scalar::PI_DIV_2,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            angle_between_vectors(x * 3.0, y * 0.5).x,
            crate::scalar::PI_DIV_2,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            angle_between_normals_est(x, y).x,
            crate::scalar::PI_DIV_2,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_line_point_distance() {
        let d = line_point_distance(
            Vector::new(0.0, 0.0, 0.0, 0.0),
            Vector::new(10.0, 0.0, 0.0, 0.0),
            Vector::new(3.0, 4.0, 0.0, 0.0),
        );
        assert_relative_eq!(d, Vector::splat(4.0));
    }

    #[test]
    fn test_intersect_line() {
        let p = intersect_line(
            Vector::new(0.0, 0.0, 0.0, 0.0),
            Vector::new(2.0, 2.0, 0.0, 0.0),
            Vector::new(0.0, 2.0, 0.0, 0.0),
            Vector::new(2.0, 0.0, 0.0, 0.0),
        );
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 1.0);

        let parallel = intersect_line(
            Vector::new(0.0, 0.0, 0.0, 0.0),
            Vector::new(1.0, 0.0, 0.0, 0.0),
            Vector::new(0.0, 1.0, 0.0, 0.0),
            Vector::new(1.0, 1.0, 0.0, 0.0),
        );
        assert_eq!(parallel.to_bits(), Vector::QNAN.to_bits());

        let coincident = intersect_line(
            Vector::new(0.0, 0.0, 0.0, 0.0),
            Vector::new(1.0, 0.0, 0.0, 0.0),
            Vector::new(2.0, 0.0, 0.0, 0.0),
            Vector::new(3.0, 0.0, 0.0, 0.0),
        );
        assert_eq!(coincident, Vector::INFINITY);
    }

    #[test]
    fn test_comparisons_ignore_upper_lanes() {
        let a = Vector::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector::new(1.0, 2.0, -3.0, f32::NAN);
        assert!(equal(a, b));
        assert!(!not_equal(a, b));
        assert!(!is_nan(b));
        assert!(greater_or_equal(a, b));
        assert!(equal_r(a, b).all_true());
    }

    #[test]
    fn test_transform() {
        let m = Matrix::translation(5.0, 6.0, 7.0);
        let p = transform_coord(Vector::new(1.0, 2.0, 0.0, 0.0), &m);
        assert_eq!(p, Vector::new(6.0, 8.0, 7.0, 1.0));
        let n = transform_normal(Vector::new(1.0, 2.0, 0.0, 0.0), &m);
        assert_eq!(n, Vector::new(1.0, 2.0, 0.0, 0.0));
        assert_eq!(transform(Vector::new(1.0, 2.0, 9.0, 9.0), &m).w, 1.0);
    }
}
