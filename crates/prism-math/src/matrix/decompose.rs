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

//! Splits an affine matrix back into scale, rotation and translation.

use super::Matrix;
use crate::error::DecomposeFailure;
use crate::quaternion;
use crate::vector::{vec3, Vector};

/// Threshold under which a basis scale counts as degenerate. Also bounds the
/// squared deviation of the orthonormalized basis determinant from 1.
pub const DECOMPOSE_EPSILON: f32 = 0.0001;

const CANONICAL_BASIS: [Vector; 3] = [
    Vector::IDENTITY_R0,
    Vector::IDENTITY_R1,
    Vector::IDENTITY_R2,
];

/// The parts of a scale-rotation-translation transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposition {
    /// Per-axis scale in `xyz`, `w = 0`. One axis may be negative for mirrored bases.
    pub scale: Vector,
    /// A unit quaternion.
    pub rotation: Vector,
    /// The translation row.
    pub translation: Vector,
}

/// Indices of `(x, y, z)` ordered from the largest value to the smallest.
fn rank(x: f32, y: f32, z: f32) -> (usize, usize, usize) {
    if x < y {
        if y < z {
            (2, 1, 0)
        } else if x < z {
            (1, 2, 0)
        } else {
            (1, 0, 2)
        }
    } else if x < z {
        (2, 0, 1)
    } else if y < z {
        (0, 2, 1)
    } else {
        (0, 1, 2)
    }
}

impl Matrix {
    /// Decomposes the matrix as `scaling * rotation_quaternion * translation`.
    ///
    /// Degenerate axes (scale below [`DECOMPOSE_EPSILON`]) are rebuilt from the
    /// others so a flattened transform still yields a valid rotation. A mirrored
    /// basis gets a negative scale on its largest axis.
    ///
    /// # Errors
    ///
    /// Returns [`DecomposeFailure`] when the upper 3x3 block carries shear or
    /// projective terms. The failure keeps the extracted scale and translation.
    pub fn decompose(&self) -> Result<Decomposition, DecomposeFailure> {
        let translation = self.r[3];
        let mut basis = Matrix::from_rows(self.r[0], self.r[1], self.r[2], Vector::IDENTITY_R3);
        let mut scales = [
            vec3::length(basis.r[0]).x,
            vec3::length(basis.r[1]).x,
            vec3::length(basis.r[2]).x,
        ];

        let (a, b, c) = rank(scales[0], scales[1], scales[2]);

        if scales[a] < DECOMPOSE_EPSILON {
            basis.r[a] = CANONICAL_BASIS[a];
        }
        basis.r[a] = vec3::normalize(basis.r[a]);

        if scales[b] < DECOMPOSE_EPSILON {
            let axis = basis.r[a].abs();
            let (_, _, cc) = rank(axis.x, axis.y, axis.z);
            basis.r[b] = vec3::cross(basis.r[a], CANONICAL_BASIS[cc]);
        }
        basis.r[b] = vec3::normalize(basis.r[b]);

        if scales[c] < DECOMPOSE_EPSILON {
            basis.r[c] = vec3::cross(basis.r[a], basis.r[b]);
        }
        basis.r[c] = vec3::normalize(basis.r[c]);

        let mut det = basis.determinant().x;
        if det < 0.0 {
            scales[a] = -scales[a];
            basis.r[a] = -basis.r[a];
            det = -det;
        }

        let scale = Vector::new(scales[0], scales[1], scales[2], 0.0);
        let deviation = (det - 1.0) * (det - 1.0);
        if deviation > DECOMPOSE_EPSILON {
            log::debug!(
                "Matrix is not a scale-rotation-translation transform (basis determinant {}).",
                det
            );
            return Err(DecomposeFailure {
                scale,
                rotation: Vector::ZERO,
                translation,
            });
        }

        Ok(Decomposition {
            scale,
            rotation: quaternion::rotation_matrix(&basis),
            translation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rank_orders_descending() {
        assert_eq!(rank(1.0, 2.0, 3.0), (2, 1, 0));
        assert_eq!(rank(3.0, 2.0, 1.0), (0, 1, 2));
        assert_eq!(rank(2.0, 3.0, 1.0), (1, 0, 2));
        assert_eq!(rank(1.0, 3.0, 2.0), (1, 2, 0));
        assert_eq!(rank(2.0, 1.0, 3.0), (2, 0, 1));
        assert_eq!(rank(3.0, 1.0, 2.0), (0, 2, 1));
    }

    #[test]
    fn test_decompose_identity() {
        let parts = Matrix::IDENTITY.decompose().unwrap();
        assert_eq!(parts.scale, Vector::new(1.0, 1.0, 1.0, 0.0));
        assert_eq!(parts.rotation, quaternion::identity());
        assert_eq!(parts.translation, Vector::IDENTITY_R3);
    }

    #[test]
    fn test_decompose_recovers_parts() {
        let q = quaternion::rotation_roll_pitch_yaw(0.4, -1.0, 0.25);
        let m = Matrix::scaling(2.0, 0.5, 3.0)
            * Matrix::rotation_quaternion(q)
            * Matrix::translation(-1.0, 4.0, 2.5);
        let parts = m.decompose().unwrap();
        assert_abs_diff_eq!(parts.scale, Vector::new(2.0, 0.5, 3.0, 0.0), epsilon = 1e-5);
        assert_abs_diff_eq!(parts.translation, Vector::new(-1.0, 4.0, 2.5, 1.0));
        // q and -q encode the same rotation.
        assert_abs_diff_eq!(quaternion::dot(parts.rotation, q).x.abs(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_decompose_mirrored_basis() {
        let m = Matrix::scaling(1.0, -2.0, 1.0);
        let parts = m.decompose().unwrap();
        // The largest axis carries the reflection.
        assert_abs_diff_eq!(parts.scale, Vector::new(1.0, -2.0, 1.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(quaternion::length(parts.rotation).x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_decompose_flattened_axis() {
        let m = Matrix::scaling(2.0, 0.0, 3.0) * Matrix::translation(1.0, 2.0, 3.0);
        let parts = m.decompose().unwrap();
        assert_abs_diff_eq!(parts.scale, Vector::new(2.0, 0.0, 3.0, 0.0));
        assert_abs_diff_eq!(parts.rotation, quaternion::identity(), epsilon = 1e-6);
    }

    #[test]
    fn test_decompose_rejects_shear() {
        let mut m = Matrix::IDENTITY;
        m.r[1] = Vector::new(1.0, 1.0, 0.0, 0.0);
        let failure = m.decompose().unwrap_err();
        assert_eq!(failure.rotation, Vector::ZERO);
        assert_eq!(failure.translation, Vector::IDENTITY_R3);
        assert_abs_diff_eq!(failure.scale.y, 2.0f32.sqrt(), epsilon = 1e-6);
    }
}
