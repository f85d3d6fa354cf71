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

//! View and projection builders.
//!
//! Every projection maps view-space depth `[near, far]` onto clip-space `[0, 1]`.
//! Left-handed builders look down +Z, right-handed builders look down -Z.

use super::Matrix;
use crate::scalar;
use crate::vector::{vec3, Vector};

fn check_depth_range(near_z: f32, far_z: f32) {
    precondition!(!scalar::near_equal(far_z, near_z, 0.00001), "near and far planes coincide");
}

fn check_perspective_depth(near_z: f32, far_z: f32) {
    precondition!(near_z > 0.0 && far_z > 0.0, "perspective planes must be positive");
    check_depth_range(near_z, far_z);
}

fn check_view_size(width: f32, height: f32) {
    precondition!(!scalar::near_equal(width, 0.0, 0.00001), "view width is zero");
    precondition!(!scalar::near_equal(height, 0.0, 0.00001), "view height is zero");
}

impl Matrix {
    /// Left-handed view matrix for a camera at `eye` looking along `eye_direction`.
    pub fn look_to_lh(eye: Vector, eye_direction: Vector, up: Vector) -> Self {
        precondition!(!vec3::equal(eye_direction, Vector::ZERO), "eye direction is zero");
        precondition!(!vec3::is_infinite(eye_direction), "eye direction is infinite");
        precondition!(!vec3::equal(up, Vector::ZERO), "up direction is zero");
        precondition!(!vec3::is_infinite(up), "up direction is infinite");

        let r2 = vec3::normalize(eye_direction);
        let r0 = vec3::normalize(vec3::cross(up, r2));
        let r1 = vec3::cross(r2, r0);
        let neg_eye = -eye;

        Self::from_rows(
            r0.with_w(vec3::dot(r0, neg_eye).x),
            r1.with_w(vec3::dot(r1, neg_eye).x),
            r2.with_w(vec3::dot(r2, neg_eye).x),
            Vector::IDENTITY_R3,
        )
        .transpose()
    }

    /// Right-handed view matrix for a camera at `eye` looking along `eye_direction`.
    #[inline]
    pub fn look_to_rh(eye: Vector, eye_direction: Vector, up: Vector) -> Self {
        Self::look_to_lh(eye, -eye_direction, up)
    }

    /// Left-handed view matrix for a camera at `eye` looking at `focus`.
    #[inline]
    pub fn look_at_lh(eye: Vector, focus: Vector, up: Vector) -> Self {
        Self::look_to_lh(eye, focus - eye, up)
    }

    /// Right-handed view matrix for a camera at `eye` looking at `focus`.
    #[inline]
    pub fn look_at_rh(eye: Vector, focus: Vector, up: Vector) -> Self {
        Self::look_to_lh(eye, eye - focus, up)
    }

    /// Left-handed perspective projection from the view volume size at the near plane.
    pub fn perspective_lh(view_width: f32, view_height: f32, near_z: f32, far_z: f32) -> Self {
        check_perspective_depth(near_z, far_z);
        check_view_size(view_width, view_height);
        let two_near_z = near_z + near_z;
        let range = far_z / (far_z - near_z);
        Self::from_rows(
            Vector::new(two_near_z / view_width, 0.0, 0.0, 0.0),
            Vector::new(0.0, two_near_z / view_height, 0.0, 0.0),
            Vector::new(0.0, 0.0, range, 1.0),
            Vector::new(0.0, 0.0, -range * near_z, 0.0),
        )
    }

    /// Right-handed perspective projection from the view volume size at the near plane.
    pub fn perspective_rh(view_width: f32, view_height: f32, near_z: f32, far_z: f32) -> Self {
        check_perspective_depth(near_z, far_z);
        check_view_size(view_width, view_height);
        let two_near_z = near_z + near_z;
        let range = far_z / (near_z - far_z);
        Self::from_rows(
            Vector::new(two_near_z / view_width, 0.0, 0.0, 0.0),
            Vector::new(0.0, two_near_z / view_height, 0.0, 0.0),
            Vector::new(0.0, 0.0, range, -1.0),
            Vector::new(0.0, 0.0, range * near_z, 0.0),
        )
    }

    /// Left-handed perspective projection from a vertical field of view.
    ///
    /// # Arguments
    ///
    /// * `fov_angle_y`: The top-down field of view in radians.
    /// * `aspect_ratio`: Width divided by height.
    /// * `near_z`, `far_z`: Positive distances to the clipping planes.
    pub fn perspective_fov_lh(
        fov_angle_y: f32,
        aspect_ratio: f32,
        near_z: f32,
        far_z: f32,
    ) -> Self {
        let (width, height) = fov_scales(fov_angle_y, aspect_ratio, near_z, far_z);
        let range = far_z / (far_z - near_z);
        Self::from_rows(
            Vector::new(width, 0.0, 0.0, 0.0),
            Vector::new(0.0, height, 0.0, 0.0),
            Vector::new(0.0, 0.0, range, 1.0),
            Vector::new(0.0, 0.0, -range * near_z, 0.0),
        )
    }

    /// Right-handed perspective projection from a vertical field of view.
    pub fn perspective_fov_rh(
        fov_angle_y: f32,
        aspect_ratio: f32,
        near_z: f32,
        far_z: f32,
    ) -> Self {
        let (width, height) = fov_scales(fov_angle_y, aspect_ratio, near_z, far_z);
        let range = far_z / (near_z - far_z);
        Self::from_rows(
            Vector::new(width, 0.0, 0.0, 0.0),
            Vector::new(0.0, height, 0.0, 0.0),
            Vector::new(0.0, 0.0, range, -1.0),
            Vector::new(0.0, 0.0, range * near_z, 0.0),
        )
    }

    /// Left-handed perspective projection for an off-center view volume.
    pub fn perspective_off_center_lh(
        view_left: f32,
        view_right: f32,
        view_bottom: f32,
        view_top: f32,
        near_z: f32,
        far_z: f32,
    ) -> Self {
        check_perspective_depth(near_z, far_z);
        check_view_size(view_right - view_left, view_top - view_bottom);
        let two_near_z = near_z + near_z;
        let inv_width = 1.0 / (view_right - view_left);
        let inv_height = 1.0 / (view_top - view_bottom);
        let range = far_z / (far_z - near_z);
        Self::from_rows(
            Vector::new(two_near_z * inv_width, 0.0, 0.0, 0.0),
            Vector::new(0.0, two_near_z * inv_height, 0.0, 0.0),
            Vector::new(
                -(view_left + view_right) * inv_width,
                -(view_top + view_bottom) * inv_height,
                range,
                1.0,
            ),
            Vector::new(0.0, 0.0, -range * near_z, 0.0),
        )
    }

    /// Right-handed perspective projection for an off-center view volume.
    pub fn perspective_off_center_rh(
        view_left: f32,
        view_right: f32,
        view_bottom: f32,
        view_top: f32,
        near_z: f32,
        far_z: f32,
    ) -> Self {
        check_perspective_depth(near_z, far_z);
        check_view_size(view_right - view_left, view_top - view_bottom);
        let two_near_z = near_z + near_z;
        let inv_width = 1.0 / (view_right - view_left);
        let inv_height = 1.0 / (view_top - view_bottom);
        let range = far_z / (near_z - far_z);
        Self::from_rows(
            Vector::new(two_near_z * inv_width, 0.0, 0.0, 0.0),
            Vector::new(0.0, two_near_z * inv_height, 0.0, 0.0),
            Vector::new(
                (view_left + view_right) * inv_width,
                (view_top + view_bottom) * inv_height,
                range,
                -1.0,
            ),
            Vector::new(0.0, 0.0, range * near_z, 0.0),
        )
    }

    /// Left-handed orthographic projection centered on the view axis.
    pub fn orthographic_lh(view_width: f32, view_height: f32, near_z: f32, far_z: f32) -> Self {
        check_depth_range(near_z, far_z);
        check_view_size(view_width, view_height);
        let range = 1.0 / (far_z - near_z);
        Self::from_rows(
            Vector::new(2.0 / view_width, 0.0, 0.0, 0.0),
            Vector::new(0.0, 2.0 / view_height, 0.0, 0.0),
            Vector::new(0.0, 0.0, range, 0.0),
            Vector::new(0.0, 0.0, -range * near_z, 1.0),
        )
    }

    /// Right-handed orthographic projection centered on the view axis.
    pub fn orthographic_rh(view_width: f32, view_height: f32, near_z: f32, far_z: f32) -> Self {
        check_depth_range(near_z, far_z);
        check_view_size(view_width, view_height);
        let range = 1.0 / (near_z - far_z);
        Self::from_rows(
            Vector::new(2.0 / view_width, 0.0, 0.0, 0.0),
            Vector::new(0.0, 2.0 / view_height, 0.0, 0.0),
            Vector::new(0.0, 0.0, range, 0.0),
            Vector::new(0.0, 0.0, range * near_z, 1.0),
        )
    }

    /// Left-handed orthographic projection for an off-center view volume.
    pub fn orthographic_off_center_lh(
        view_left: f32,
        view_right: f32,
        view_bottom: f32,
        view_top: f32,
        near_z: f32,
        far_z: f32,
    ) -> Self {
        check_depth_range(near_z, far_z);
        check_view_size(view_right - view_left, view_top - view_bottom);
        let inv_width = 1.0 / (view_right - view_left);
        let inv_height = 1.0 / (view_top - view_bottom);
        let range = 1.0 / (far_z - near_z);
        Self::from_rows(
            Vector::new(inv_width + inv_width, 0.0, 0.0, 0.0),
            Vector::new(0.0, inv_height + inv_height, 0.0, 0.0),
            Vector::new(0.0, 0.0, range, 0.0),
            Vector::new(
                -(view_left + view_right) * inv_width,
                -(view_top + view_bottom) * inv_height,
                -range * near_z,
                1.0,
            ),
        )
    }

    /// Right-handed orthographic projection for an off-center view volume.
    pub fn orthographic_off_center_rh(
        view_left: f32,
        view_right: f32,
        view_bottom: f32,
        view_top: f32,
        near_z: f32,
        far_z: f32,
    ) -> Self {
        check_depth_range(near_z, far_z);
        check_view_size(view_right - view_left, view_top - view_bottom);
        let inv_width = 1.0 / (view_right - view_left);
        let inv_height = 1.0 / (view_top - view_bottom);
        let range = 1.0 / (near_z - far_z);
        Self::from_rows(
            Vector::new(inv_width + inv_width, 0.0, 0.0, 0.0),
            Vector::new(0.0, inv_height + inv_height, 0.0, 0.0),
            Vector::new(0.0, 0.0, range, 0.0),
            Vector::new(
                -(view_left + view_right) * inv_width,
                -(view_top + view_bottom) * inv_height,
                range * near_z,
                1.0,
            ),
        )
    }
}

/// `(x, y)` scales of a field-of-view projection.
fn fov_scales(fov_angle_y: f32, aspect_ratio: f32, near_z: f32, far_z: f32) -> (f32, f32) {
    check_perspective_depth(near_z, far_z);
    precondition!(!scalar::near_equal(fov_angle_y, 0.0, 0.00002), "field of view is zero");
    precondition!(!scalar::near_equal(aspect_ratio, 0.0, 0.00001), "aspect ratio is zero");
    let (sin_fov, cos_fov) = scalar::sin_cos(0.5 * fov_angle_y);
    let height = cos_fov / sin_fov;
    (height / aspect_ratio, height)
}
