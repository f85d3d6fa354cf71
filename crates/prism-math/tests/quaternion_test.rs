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

//! Integration tests for quaternion interpolation and its agreement with matrices.

use approx::assert_abs_diff_eq;
use prism_math::{quaternion, vec3, Matrix, Vector};

fn rotations() -> Vec<Vector> {
    vec![
        quaternion::identity(),
        quaternion::rotation_axis(Vector::new(0.0, 0.0, 3.0, 0.0), 1.0),
        quaternion::rotation_roll_pitch_yaw(0.9, -0.3, 2.0),
        quaternion::rotation_normal(vec3::normalize(Vector::new(1.0, 1.0, 1.0, 0.0)), -2.5),
    ]
}

#[test]
fn test_slerp_endpoints() {
    for q0 in rotations() {
        for q1 in rotations() {
            assert_abs_diff_eq!(quaternion::slerp(q0, q1, 0.0), q0, epsilon = 1e-6);
            // The far endpoint is reached up to sign.
            let end = quaternion::slerp(q0, q1, 1.0);
            assert_abs_diff_eq!(quaternion::dot(end, q1).x.abs(), 1.0, epsilon = 1e-5);
            assert_abs_diff_eq!(quaternion::slerp(q1, q1, 0.42), q1, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_slerp_stays_on_unit_sphere() {
    let q0 = rotations()[2];
    let q1 = rotations()[3];
    for i in 0..=10 {
        let q = quaternion::slerp(q0, q1, i as f32 / 10.0);
        assert_abs_diff_eq!(quaternion::length(q).x, 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_rotate_matches_matrix() {
    let v = Vector::new(0.3, -1.5, 2.0, 0.0);
    for q in rotations() {
        let by_quaternion = vec3::rotate(v, q);
        let by_matrix = vec3::transform_normal(v, &Matrix::rotation_quaternion(q));
        assert_abs_diff_eq!(by_quaternion.x, by_matrix.x, epsilon = 1e-5);
        assert_abs_diff_eq!(by_quaternion.y, by_matrix.y, epsilon = 1e-5);
        assert_abs_diff_eq!(by_quaternion.z, by_matrix.z, epsilon = 1e-5);
        let back = vec3::inverse_rotate(by_quaternion, q);
        assert_abs_diff_eq!(back.x, v.x, epsilon = 1e-5);
        assert_abs_diff_eq!(back.y, v.y, epsilon = 1e-5);
        assert_abs_diff_eq!(back.z, v.z, epsilon = 1e-5);
    }
}

#[test]
fn test_matrix_quaternion_round_trip() {
    for q in rotations() {
        let back = quaternion::rotation_matrix(&Matrix::rotation_quaternion(q));
        assert_abs_diff_eq!(quaternion::dot(back, q).x.abs(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_zero_quaternion_inverse() {
    assert_eq!(quaternion::inverse(Vector::ZERO), Vector::ZERO);
    assert!(!quaternion::is_nan(quaternion::inverse(Vector::ZERO)));
}
