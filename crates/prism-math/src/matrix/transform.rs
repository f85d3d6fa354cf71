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

//! Affine transform builders: translation, scaling, rotation, reflection and shadow.

use super::Matrix;
use crate::plane;
use crate::scalar;
use crate::vector::{vec3, Vector};

impl Matrix {
    /// Creates a translation matrix.
    #[inline]
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows(
            Vector::IDENTITY_R0,
            Vector::IDENTITY_R1,
            Vector::IDENTITY_R2,
            Vector::new(x, y, z, 1.0),
        )
    }

    /// Creates a translation matrix from the `xyz` lanes of `offset`.
    #[inline]
    pub const fn translation_from_vector(offset: Vector) -> Self {
        Self::translation(offset.x, offset.y, offset.z)
    }

    /// Creates a scaling matrix.
    #[inline]
    pub const fn scaling(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows(
            Vector::new(x, 0.0, 0.0, 0.0),
            Vector::new(0.0, y, 0.0, 0.0),
            Vector::new(0.0, 0.0, z, 0.0),
            Vector::IDENTITY_R3,
        )
    }

    /// Creates a scaling matrix from the `xyz` lanes of `scale`.
    #[inline]
    pub const fn scaling_from_vector(scale: Vector) -> Self {
        Self::scaling(scale.x, scale.y, scale.z)
    }

    /// Rotation about the X axis. Positive angles turn +Y toward +Z.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = scalar::sin_cos(angle);
        Self::from_rows(
            Vector::IDENTITY_R0,
            Vector::new(0.0, c, s, 0.0),
            Vector::new(0.0, -s, c, 0.0),
            Vector::IDENTITY_R3,
        )
    }

    /// Rotation about the Y axis. Positive angles turn +Z toward +X.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = scalar::sin_cos(angle);
        Self::from_rows(
            Vector::new(c, 0.0, -s, 0.0),
            Vector::IDENTITY_R1,
            Vector::new(s, 0.0, c, 0.0),
            Vector::IDENTITY_R3,
        )
    }

    /// Rotation about the Z axis. Positive angles turn +X toward +Y.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = scalar::sin_cos(angle);
        Self::from_rows(
            Vector::new(c, s, 0.0, 0.0),
            Vector::new(-s, c, 0.0, 0.0),
            Vector::IDENTITY_R2,
            Vector::IDENTITY_R3,
        )
    }

    /// Rotation by `angle` radians about a unit-length axis.
    pub fn rotation_normal(normal_axis: Vector, angle: f32) -> Self {
        let (s, c) = scalar::sin_cos(angle);
        let t = 1.0 - c;
        let (x, y, z) = (normal_axis.x, normal_axis.y, normal_axis.z);
        Self::from_rows(
            Vector::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
            Vector::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0),
            Vector::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0),
            Vector::IDENTITY_R3,
        )
    }

    /// Rotation by `angle` radians about an arbitrary axis.
    ///
    /// The axis must be finite and non-zero.
    pub fn rotation_axis(axis: Vector, angle: f32) -> Self {
        precondition!(!vec3::equal(axis, Vector::ZERO), "rotation axis is zero");
        precondition!(!vec3::is_infinite(axis), "rotation axis is infinite");
        Self::rotation_normal(vec3::normalize(axis), angle)
    }

    /// Rotation from Euler angles in radians.
    ///
    /// Roll about Z is applied first, then pitch about X, then yaw about Y.
    pub fn rotation_roll_pitch_yaw(pitch: f32, yaw: f32, roll: f32) -> Self {
        let (sp, cp) = scalar::sin_cos(pitch);
        let (sy, cy) = scalar::sin_cos(yaw);
        let (sr, cr) = scalar::sin_cos(roll);
        Self::from_rows(
            Vector::new(cr * cy + sr * sp * sy, sr * cp, sr * sp * cy - cr * sy, 0.0),
            Vector::new(cr * sp * sy - sr * cy, cr * cp, sr * sy + cr * sp * cy, 0.0),
            Vector::new(cp * sy, -sp, cp * cy, 0.0),
            Vector::IDENTITY_R3,
        )
    }

    /// Euler rotation with angles packed as `(pitch, yaw, roll, _)`.
    #[inline]
    pub fn rotation_roll_pitch_yaw_from_vector(angles: Vector) -> Self {
        Self::rotation_roll_pitch_yaw(angles.x, angles.y, angles.z)
    }

    /// Rotation matrix for a unit quaternion `(x, y, z, w)`.
    pub fn rotation_quaternion(quaternion: Vector) -> Self {
        let Vector { x, y, z, w } = quaternion;
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, xz, yz) = (x * y2, x * z2, y * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);
        Self::from_rows(
            Vector::new(1.0 - yy - zz, xy + wz, xz - wy, 0.0),
            Vector::new(xy - wz, 1.0 - xx - zz, yz + wx, 0.0),
            Vector::new(xz + wy, yz - wx, 1.0 - xx - yy, 0.0),
            Vector::IDENTITY_R3,
        )
    }

    /// Full transformation built from scaling, rotation and translation.
    ///
    /// Scaling happens in the frame given by `scaling_orientation` around
    /// `scaling_origin`. The rotation then turns around `rotation_origin` and the
    /// translation is applied last. Only the `xyz` lanes of the origins, `scaling`
    /// and `translation` are used.
    pub fn transformation(
        scaling_origin: Vector,
        scaling_orientation: Vector,
        scaling: Vector,
        rotation_origin: Vector,
        rotation: Vector,
        translation: Vector,
    ) -> Self {
        let scaling_origin = scaling_origin.with_w(0.0);
        let rotation_origin = rotation_origin.with_w(0.0);
        let orientation = Self::rotation_quaternion(scaling_orientation);

        let mut m = Self::translation_from_vector(-scaling_origin) * orientation.transpose();
        m = m * Self::scaling_from_vector(scaling) * orientation;
        m.r[3] += scaling_origin - rotation_origin;
        m = m * Self::rotation_quaternion(rotation);
        m.r[3] += rotation_origin + translation.with_w(0.0);
        m
    }

    /// Affine transformation: scale, then rotate around `rotation_origin`, then
    /// translate.
    pub fn affine_transformation(
        scaling: Vector,
        rotation_origin: Vector,
        rotation: Vector,
        translation: Vector,
    ) -> Self {
        let rotation_origin = rotation_origin.with_w(0.0);
        let mut m = Self::scaling_from_vector(scaling);
        m.r[3] -= rotation_origin;
        m = m * Self::rotation_quaternion(rotation);
        m.r[3] += rotation_origin + translation.with_w(0.0);
        m
    }

    /// Reflection through a plane `(a, b, c, d)`.
    pub fn reflect(reflection_plane: Vector) -> Self {
        precondition!(
            !vec3::equal(reflection_plane, Vector::ZERO),
            "reflection plane normal is zero"
        );
        precondition!(
            !vec3::is_infinite(reflection_plane),
            "reflection plane is infinite"
        );
        let p = plane::normalize(reflection_plane);
        let s = (p * -2.0).with_w(0.0);
        Self::from_rows(
            p.splat_x().multiply_add(s, Vector::IDENTITY_R0),
            p.splat_y().multiply_add(s, Vector::IDENTITY_R1),
            p.splat_z().multiply_add(s, Vector::IDENTITY_R2),
            p.splat_w().multiply_add(s, Vector::IDENTITY_R3),
        )
    }

    /// Flattens geometry onto `shadow_plane` as seen from `light_position`.
    ///
    /// A light `w` of 0 is directional, a light `w` of 1 is a point light.
    pub fn shadow(shadow_plane: Vector, light_position: Vector) -> Self {
        precondition!(
            !vec3::equal(shadow_plane, Vector::ZERO),
            "shadow plane normal is zero"
        );
        precondition!(!vec3::is_infinite(shadow_plane), "shadow plane is infinite");
        let p = plane::normalize(shadow_plane);
        let d = plane::dot(p, light_position).x;
        let p = -p;
        let l = light_position;
        Self::from_rows(
            p.splat_x().multiply_add(l, Vector::new(d, 0.0, 0.0, 0.0)),
            p.splat_y().multiply_add(l, Vector::new(0.0, d, 0.0, 0.0)),
            p.splat_z().multiply_add(l, Vector::new(0.0, 0.0, d, 0.0)),
            p.splat_w().multiply_add(l, Vector::new(0.0, 0.0, 0.0, d)),
        )
    }
}
