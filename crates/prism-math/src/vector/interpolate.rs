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

//! Interpolation and spline evaluation.
//!
//! The `_v` variants take the interpolation factor as a vector so that each lane
//! can use its own weight. Factors are not clamped.

use super::Vector;

impl Vector {
    /// Linear interpolation: `self + t * (end - self)`.
    #[inline]
    pub fn lerp(self, end: Self, t: f32) -> Self {
        self.lerp_v(end, Self::splat(t))
    }

    /// Linear interpolation with a per-lane factor.
    #[inline]
    pub fn lerp_v(self, end: Self, t: Self) -> Self {
        (end - self).multiply_add(t, self)
    }

    /// Cubic Hermite spline through `position0` and `position1` with the given tangents.
    pub fn hermite(
        position0: Self,
        tangent0: Self,
        position1: Self,
        tangent1: Self,
        t: f32,
    ) -> Self {
        let t2 = t * t;
        let t3 = t * t2;
        let p0 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let t0 = t3 - 2.0 * t2 + t;
        let p1 = -2.0 * t3 + 3.0 * t2;
        let t1 = t3 - t2;
        position0 * p0 + tangent0 * t0 + position1 * p1 + tangent1 * t1
    }

    /// Cubic Hermite spline with a per-lane factor.
    pub fn hermite_v(
        position0: Self,
        tangent0: Self,
        position1: Self,
        tangent1: Self,
        t: Self,
    ) -> Self {
        let t2 = t * t;
        let t3 = t * t2;
        let p0 = t3 * 2.0 - t2 * 3.0 + Self::ONE;
        let t0 = t3 - t2 * 2.0 + t;
        let p1 = t3 * -2.0 + t2 * 3.0;
        let t1 = t3 - t2;
        position0 * p0 + tangent0 * t0 + position1 * p1 + tangent1 * t1
    }

    /// Catmull-Rom spline through `position1` (t = 0) and `position2` (t = 1).
    pub fn catmull_rom(
        position0: Self,
        position1: Self,
        position2: Self,
        position3: Self,
        t: f32,
    ) -> Self {
        Self::catmull_rom_v(position0, position1, position2, position3, Self::splat(t))
    }

    /// Catmull-Rom spline with a per-lane factor.
    pub fn catmull_rom_v(
        position0: Self,
        position1: Self,
        position2: Self,
        position3: Self,
        t: Self,
    ) -> Self {
        let t2 = t * t;
        let t3 = t * t2;
        let p0 = (-t3 + t2 * 2.0 - t) * 0.5;
        let p1 = (t3 * 3.0 - t2 * 5.0 + Self::splat(2.0)) * 0.5;
        let p2 = (t3 * -3.0 + t2 * 4.0 + t) * 0.5;
        let p3 = (t3 - t2) * 0.5;
        position0 * p0 + position1 * p1 + position2 * p2 + position3 * p3
    }

    /// Barycentric point `p0 + f * (p1 - p0) + g * (p2 - p0)`.
    #[inline]
    pub fn bary_centric(position0: Self, position1: Self, position2: Self, f: f32, g: f32) -> Self {
        Self::bary_centric_v(position0, position1, position2, Self::splat(f), Self::splat(g))
    }

    /// Barycentric point with per-lane weights.
    #[inline]
    pub fn bary_centric_v(
        position0: Self,
        position1: Self,
        position2: Self,
        f: Self,
        g: Self,
    ) -> Self {
        let p10 = position1 - position0;
        let p20 = position2 - position0;
        p20.multiply_add(g, p10.multiply_add(f, position0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lerp() {
        let a = Vector::new(0.0, 10.0, -2.0, 1.0);
        let b = Vector::new(10.0, 20.0, 2.0, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vector::new(5.0, 15.0, 0.0, 1.0));
        assert_eq!(a.lerp(b, 2.0), Vector::new(20.0, 30.0, 6.0, 1.0));
        let v = a.lerp_v(b, Vector::new(0.0, 1.0, 0.5, 0.0));
        assert_eq!(v, Vector::new(0.0, 20.0, 0.0, 1.0));
    }

    #[test]
    fn test_hermite_endpoints() {
        let p0 = Vector::new(1.0, 2.0, 3.0, 4.0);
        let p1 = Vector::new(5.0, 6.0, 7.0, 8.0);
        let tangent = Vector::splat(3.0);
        assert_abs_diff_eq!(Vector::hermite(p0, tangent, p1, tangent, 0.0), p0);
        assert_abs_diff_eq!(Vector::hermite(p0, tangent, p1, tangent, 1.0), p1);
        let scalar = Vector::hermite(p0, tangent, p1, tangent, 0.3);
        let lanes = Vector::hermite_v(p0, tangent, p1, tangent, Vector::splat(0.3));
        assert_abs_diff_eq!(scalar, lanes, epsilon = 1e-5);
    }

    #[test]
    fn test_catmull_rom_passes_through_inner_points() {
        let p0 = Vector::splat(-1.0);
        let p1 = Vector::splat(0.0);
        let p2 = Vector::splat(1.0);
        let p3 = Vector::splat(2.0);
        assert_abs_diff_eq!(Vector::catmull_rom(p0, p1, p2, p3, 0.0), p1);
        assert_abs_diff_eq!(Vector::catmull_rom(p0, p1, p2, p3, 1.0), p2);
        // Evenly spaced collinear points give a linear curve.
        assert_abs_diff_eq!(
            Vector::catmull_rom(p0, p1, p2, p3, 0.25),
            Vector::splat(0.25),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_bary_centric() {
        let p0 = Vector::new(0.0, 0.0, 0.0, 0.0);
        let p1 = Vector::new(1.0, 0.0, 0.0, 0.0);
        let p2 = Vector::new(0.0, 1.0, 0.0, 0.0);
        assert_eq!(Vector::bary_centric(p0, p1, p2, 0.0, 0.0), p0);
        assert_eq!(Vector::bary_centric(p0, p1, p2, 1.0, 0.0), p1);
        assert_eq!(
            Vector::bary_centric(p0, p1, p2, 0.25, 0.5),
            Vector::new(0.25, 0.5, 0.0, 0.0)
        );
    }
}
