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

//! Scalar trigonometry kernel and shared numeric constants.
//!
//! The `sin`/`cos` family reduces the argument to `[-π, π]` using the nearest
//! multiple of 2π, reflects it into `[-π/2, π/2]`, and evaluates a minimax
//! polynomial. The `_est` variants use lower-degree polynomials.
//!
//! `asin` and `acos` never return NaN for finite inputs: values outside of
//! `[-1, 1]` behave as if clamped to the nearest bound.

// --- Fundamental Constants ---

/// π.
pub const PI: f32 = std::f32::consts::PI;
/// 2π.
pub const TWO_PI: f32 = std::f32::consts::TAU;
/// 1 / π.
pub const ONE_DIV_PI: f32 = std::f32::consts::FRAC_1_PI;
/// 1 / 2π.
pub const ONE_DIV_TWO_PI: f32 = 0.159_154_94;
/// π / 2.
pub const PI_DIV_2: f32 = std::f32::consts::FRAC_PI_2;
/// π / 4.
pub const PI_DIV_4: f32 = std::f32::consts::FRAC_PI_4;
/// Machine epsilon for `f32`, used as the default comparison tolerance.
pub const EPSILON: f32 = f32::EPSILON;

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use prism_math::scalar::{convert_to_radians, PI};
/// assert_eq!(convert_to_radians(180.0), PI);
/// ```
#[inline]
pub fn convert_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
#[inline]
pub fn convert_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Returns `true` if `|a - b| <= epsilon`.
#[inline]
pub fn near_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Wraps an angle into `[-π, π)`.
#[inline]
pub fn mod_angle(angle: f32) -> f32 {
    let shifted = angle + PI;
    let mut wrapped = shifted.abs();
    wrapped -= TWO_PI * ((wrapped / TWO_PI) as i32) as f32;
    wrapped -= PI;
    if shifted < 0.0 {
        -wrapped
    } else {
        wrapped
    }
}

/// Reduces `value` to `[-π, π]` by subtracting the nearest multiple of 2π.
#[inline]
fn reduce(value: f32) -> f32 {
    let quotient = ONE_DIV_TWO_PI * value;
    let quotient = if value >= 0.0 {
        (quotient + 0.5) as i32 as f32
    } else {
        (quotient - 0.5) as i32 as f32
    };
    value - TWO_PI * quotient
}

/// Reflects `y` from `[-π, π]` into `[-π/2, π/2]`, returning the cosine sign.
#[inline]
fn reflect(y: f32) -> (f32, f32) {
    if y > PI_DIV_2 {
        (PI - y, -1.0)
    } else if y < -PI_DIV_2 {
        (-PI - y, -1.0)
    } else {
        (y, 1.0)
    }
}

#[inline]
fn sin_poly(y: f32) -> f32 {
    let y2 = y * y;
    (((((-2.388_985_9e-8 * y2 + 2.752_556_2e-6) * y2 - 0.000_198_408_74) * y2
        + 0.008_333_331)
        * y2
        - 0.166_666_67)
        * y2
        + 1.0)
        * y
}

#[inline]
fn cos_poly(y: f32) -> f32 {
    let y2 = y * y;
    ((((-2.605_161_5e-7 * y2 + 2.476_049_5e-5) * y2 - 0.001_388_837_8) * y2 + 0.041_666_638)
        * y2
        - 0.5)
        * y2
        + 1.0
}

#[inline]
fn sin_poly_est(y: f32) -> f32 {
    let y2 = y * y;
    (((-0.000_185_246_7 * y2 + 0.008_313_95) * y2 - 0.166_658_52) * y2 + 1.0) * y
}

#[inline]
fn cos_poly_est(y: f32) -> f32 {
    let y2 = y * y;
    ((-0.001_271_243_6 * y2 + 0.041_493_919) * y2 - 0.499_927_46) * y2 + 1.0
}

/// Computes the sine of `value` (11-degree minimax approximation).
#[inline]
pub fn sin(value: f32) -> f32 {
    let (y, _) = reflect(reduce(value));
    sin_poly(y)
}

/// Computes the sine of `value` (7-degree minimax approximation).
#[inline]
pub fn sin_est(value: f32) -> f32 {
    let (y, _) = reflect(reduce(value));
    sin_poly_est(y)
}

/// Computes the cosine of `value` (10-degree minimax approximation).
#[inline]
pub fn cos(value: f32) -> f32 {
    let (y, sign) = reflect(reduce(value));
    sign * cos_poly(y)
}

/// Computes the cosine of `value` (6-degree minimax approximation).
#[inline]
pub fn cos_est(value: f32) -> f32 {
    let (y, sign) = reflect(reduce(value));
    sign * cos_poly_est(y)
}

/// Computes both the sine and cosine of `value`, returned as `(sin, cos)`.
#[inline]
pub fn sin_cos(value: f32) -> (f32, f32) {
    let (y, sign) = reflect(reduce(value));
    (sin_poly(y), sign * cos_poly(y))
}

/// Estimated `(sin, cos)` pair.
#[inline]
pub fn sin_cos_est(value: f32) -> (f32, f32) {
    let (y, sign) = reflect(reduce(value));
    (sin_poly_est(y), sign * cos_poly_est(y))
}

/// Returns `acos(|value|)` evaluated with a 7-degree polynomial.
#[inline]
fn acos_abs(x: f32) -> f32 {
    let root = (1.0 - x).max(0.0).sqrt();
    let poly = ((((((-0.001_262_491_1 * x + 0.006_670_09) * x - 0.017_088_126) * x
        + 0.030_891_881)
        * x
        - 0.050_174_305)
        * x
        + 0.088_978_99)
        * x
        - 0.214_598_8)
        * x
        + 1.570_796_3;
    poly * root
}

#[inline]
fn acos_abs_est(x: f32) -> f32 {
    let root = (1.0 - x).max(0.0).sqrt();
    let poly = ((-0.018_729_3 * x + 0.074_261) * x - 0.212_114_4) * x + 1.570_728_8;
    poly * root
}

/// Computes the arcsine of `value`, with inputs outside `[-1, 1]` clamped.
#[inline]
pub fn asin(value: f32) -> f32 {
    let result = acos_abs(value.abs());
    if value >= 0.0 {
        PI_DIV_2 - result
    } else {
        result - PI_DIV_2
    }
}

/// Estimated arcsine, with inputs outside `[-1, 1]` clamped.
#[inline]
pub fn asin_est(value: f32) -> f32 {
    let result = acos_abs_est(value.abs());
    if value >= 0.0 {
        PI_DIV_2 - result
    } else {
        result - PI_DIV_2
    }
}

/// Computes the arccosine of `value`, with inputs outside `[-1, 1]` clamped.
#[inline]
pub fn acos(value: f32) -> f32 {
    let result = acos_abs(value.abs());
    if value >= 0.0 {
        result
    } else {
        PI - result
    }
}

/// Estimated arccosine, with inputs outside `[-1, 1]` clamped.
#[inline]
pub fn acos_est(value: f32) -> f32 {
    let result = acos_abs_est(value.abs());
    if value >= 0.0 {
        result
    } else {
        PI - result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sin_cos_accuracy() {
        let mut angle = -10.0f32;
        while angle <= 10.0 {
            assert_abs_diff_eq!(sin(angle), angle.sin(), epsilon = 1e-5);
            assert_abs_diff_eq!(cos(angle), angle.cos(), epsilon = 1e-5);
            let (s, c) = sin_cos(angle);
            assert_abs_diff_eq!(s, angle.sin(), epsilon = 1e-5);
            assert_abs_diff_eq!(c, angle.cos(), epsilon = 1e-5);
            angle += 0.05;
        }
    }

    #[test]
    fn test_estimates_are_close() {
        let mut angle = -PI;
        while angle <= PI {
            assert_abs_diff_eq!(sin_est(angle), angle.sin(), epsilon = 1e-3);
            assert_abs_diff_eq!(cos_est(angle), angle.cos(), epsilon = 1e-3);
            let (s, c) = sin_cos_est(angle);
            assert_abs_diff_eq!(s, angle.sin(), epsilon = 1e-3);
            assert_abs_diff_eq!(c, angle.cos(), epsilon = 1e-3);
            angle += 0.1;
        }
    }

    #[test]
    fn test_inverse_trig() {
        let mut x = -1.0f32;
        while x <= 1.0 {
            assert_abs_diff_eq!(asin(x), x.asin(), epsilon = 1e-5);
            assert_abs_diff_eq!(acos(x), x.acos(), epsilon = 1e-5);
            assert_abs_diff_eq!(asin_est(x), x.asin(), epsilon = 1e-3);
            assert_abs_diff_eq!(acos_est(x), x.acos(), epsilon = 1e-3);
            x += 0.01;
        }
    }

    #[test]
    fn test_inverse_trig_clamps_out_of_range() {
        assert_abs_diff_eq!(asin(1.5), PI_DIV_2, epsilon = 1e-6);
        assert_abs_diff_eq!(asin(-7.0), -PI_DIV_2, epsilon = 1e-6);
        assert_abs_diff_eq!(acos(2.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(acos(-2.0), PI, epsilon = 1e-6);
        assert!(!acos_est(3.0).is_nan());
    }

    #[test]
    fn test_nan_propagates() {
        assert!(sin(f32::NAN).is_nan());
        assert!(cos(f32::NAN).is_nan());
    }

    #[test]
    fn test_mod_angle() {
        assert_abs_diff_eq!(mod_angle(0.0), 0.0);
        assert_abs_diff_eq!(mod_angle(TWO_PI + 0.5), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(mod_angle(-TWO_PI - 0.5), -0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(mod_angle(PI_DIV_2 + 2.0 * TWO_PI), PI_DIV_2, epsilon = 1e-5);
    }

    #[test]
    fn test_degree_conversion() {
        assert_abs_diff_eq!(convert_to_degrees(PI_DIV_2), 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(convert_to_radians(45.0), PI_DIV_4, epsilon = 1e-6);
        assert!(near_equal(1.0, 1.0 + 1e-7, EPSILON));
    }
}
