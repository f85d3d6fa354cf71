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

//! Integration tests for matrix algebra, builders and decomposition.

use approx::assert_abs_diff_eq;
use prism_math::scalar::PI_DIV_4;
use prism_math::{quaternion, vec3, Float4x4, MathError, Matrix, Vector, Viewport};

fn sample_transforms() -> Vec<Matrix> {
    vec![
        Matrix::IDENTITY,
        Matrix::translation(3.0, -2.0, 7.5),
        Matrix::scaling(0.5, 2.0, 4.0) * Matrix::rotation_x(0.7),
        Matrix::rotation_roll_pitch_yaw(0.2, 1.3, -0.6) * Matrix::translation(1.0, 2.0, 3.0),
        Matrix::perspective_fov_lh(PI_DIV_4, 16.0 / 9.0, 0.1, 100.0),
        Matrix::look_at_rh(
            Vector::new(4.0, 3.0, 2.0, 0.0),
            Vector::ZERO,
            Vector::IDENTITY_R1,
        ),
    ]
}

#[test]
fn test_inverse_of_inverse_round_trips() {
    for m in sample_transforms() {
        let (inv, det) = m.inverse();
        assert!(det.x != 0.0);
        let (back, _) = inv.inverse();
        assert_abs_diff_eq!(back, m, epsilon = 1e-3);
    }
}

#[test]
fn test_inverse_determinant_is_reciprocal() {
    let m = Matrix::scaling(2.0, 4.0, 0.5) * Matrix::rotation_z(1.0);
    let (inv, det) = m.inverse();
    assert_abs_diff_eq!(det.x, 4.0, epsilon = 1e-5);
    assert_abs_diff_eq!(inv.determinant().x, 0.25, epsilon = 1e-6);
}

#[test]
fn test_flat_and_storage_loads_are_exact() {
    for m in sample_transforms() {
        assert_eq!(Matrix::from_slice(&m.to_flat()), Ok(m));
        assert_eq!(Float4x4::store(&m).load(), m);
    }
    assert_eq!(
        Matrix::from_slice(&[1.0; 17]),
        Err(MathError::InvalidLength {
            expected: 16,
            actual: 17
        })
    );
}

#[test]
fn test_negating_any_row_negates_determinant() {
    let m = Matrix::new(
        1.0, 2.0, 0.5, -1.0, //
        0.0, 3.0, 1.0, 2.0, //
        4.0, -1.0, 2.0, 0.0, //
        1.0, 1.0, 1.0, 1.0,
    );
    let det = m.determinant().x;
    assert!(det != 0.0);
    for row in 0..4 {
        let mut negated = m;
        negated.r[row] = -negated.r[row];
        assert_eq!(negated.determinant().x, -det);
    }
}

#[test]
fn test_identity_inverse_is_exact() {
    assert_eq!(Matrix::IDENTITY.inverse(), (Matrix::IDENTITY, Vector::ONE));
}

#[test]
fn test_decompose_recompose() {
    let scale = Vector::new(1.5, 0.25, 3.0, 0.0);
    let rotation = quaternion::rotation_axis(Vector::new(1.0, 1.0, -2.0, 0.0), 2.2);
    let translation = Vector::new(-4.0, 0.5, 9.0, 0.0);
    let m = Matrix::scaling_from_vector(scale)
        * Matrix::rotation_quaternion(rotation)
        * Matrix::translation_from_vector(translation);

    let parts = m.decompose().unwrap();
    let rebuilt = Matrix::scaling_from_vector(parts.scale)
        * Matrix::rotation_quaternion(parts.rotation)
        * Matrix::translation_from_vector(parts.translation);
    assert_abs_diff_eq!(rebuilt, m, epsilon = 1e-4);
    assert_abs_diff_eq!(parts.scale, scale, epsilon = 1e-5);
}

#[test]
fn test_decompose_failure_keeps_partial_results() {
    let mut m = Matrix::translation(1.0, 2.0, 3.0);
    m.r[1] = Vector::new(0.5, 1.0, 0.0, 0.0);
    let failure = m.decompose().unwrap_err();
    assert_eq!(failure.rotation, Vector::ZERO);
    assert_eq!(failure.translation, m.r[3]);
    assert!(!failure.to_string().is_empty());
}

#[test]
fn test_project_unproject_round_trip() {
    let viewport = Viewport::new(0.0, 0.0, 1280.0, 720.0);
    let projection = Matrix::perspective_fov_lh(PI_DIV_4, 1280.0 / 720.0, 0.5, 50.0);
    let view = Matrix::look_at_lh(
        Vector::new(0.0, 3.0, -8.0, 0.0),
        Vector::ZERO,
        Vector::IDENTITY_R1,
    );
    let world = Matrix::rotation_y(0.3);

    let point = Vector::new(1.0, 0.5, -1.0, 0.0);
    let screen = vec3::project(point, &viewport, &projection, &view, &world);
    assert!(screen.x > 0.0 && screen.x < 1280.0);
    assert!(screen.y > 0.0 && screen.y < 720.0);
    assert!(screen.z > 0.0 && screen.z < 1.0);

    let back = vec3::unproject(screen, &viewport, &projection, &view, &world);
    assert_abs_diff_eq!(back.x, point.x, epsilon = 1e-3);
    assert_abs_diff_eq!(back.y, point.y, epsilon = 1e-3);
    assert_abs_diff_eq!(back.z, point.z, epsilon = 1e-3);
}
