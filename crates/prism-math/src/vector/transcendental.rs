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

//! Per-lane transcendental functions.

use super::Vector;
use crate::scalar::{self, PI, PI_DIV_2, PI_DIV_4};

impl Vector {
    /// Per-lane sine.
    #[inline]
    pub fn sin(self) -> Self {
        self.map(f32::sin)
    }

    /// Per-lane cosine.
    #[inline]
    pub fn cos(self) -> Self {
        self.map(f32::cos)
    }

    /// Per-lane `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Per-lane tangent.
    #[inline]
    pub fn tan(self) -> Self {
        self.map(f32::tan)
    }

    /// Per-lane hyperbolic sine.
    #[inline]
    pub fn sinh(self) -> Self {
        self.map(f32::sinh)
    }

    /// Per-lane hyperbolic cosine.
    #[inline]
    pub fn cosh(self) -> Self {
        self.map(f32::cosh)
    }

    /// Per-lane hyperbolic tangent.
    #[inline]
    pub fn tanh(self) -> Self {
        self.map(f32::tanh)
    }

    /// Per-lane arcsine. Lanes outside `[-1, 1]` are clamped.
    #[inline]
    pub fn asin(self) -> Self {
        self.map(scalar::asin)
    }

    /// Per-lane arccosine. Lanes outside `[-1, 1]` are clamped.
    #[inline]
    pub fn acos(self) -> Self {
        self.map(scalar::acos)
    }

    /// Per-lane arctangent.
    #[inline]
    pub fn atan(self) -> Self {
        self.map(f32::atan)
    }

    /// Per-lane sine using the low-degree polynomial kernel.
    #[inline]
    pub fn sin_est(self) -> Self {
        self.map(scalar::sin_est)
    }

    /// Per-lane cosine using the low-degree polynomial kernel.
    #[inline]
    pub fn cos_est(self) -> Self {
        self.map(scalar::cos_est)
    }

    /// Per-lane estimated `(sin, cos)`.
    #[inline]
    pub fn sin_cos_est(self) -> (Self, Self) {
        (self.sin_est(), self.cos_est())
    }

    /// Per-lane arccosine using the low-degree polynomial kernel, inputs clamped.
    #[inline]
    pub fn acos_est(self) -> Self {
        self.map(scalar::acos_est)
    }

    /// Per-lane `2^self`.
    #[inline]
    pub fn exp2(self) -> Self {
        self.map(f32::exp2)
    }

    /// Per-lane `e^self`.
    #[inline]
    pub fn exp_e(self) -> Self {
        self.map(f32::exp)
    }

    /// Per-lane base-2 logarithm.
    #[inline]
    pub fn log2(self) -> Self {
        self.map(f32::log2)
    }

    /// Per-lane natural logarithm.
    #[inline]
    pub fn log_e(self) -> Self {
        self.map(f32::ln)
    }

    /// Per-lane `self^exponent`.
    #[inline]
    pub fn pow(self, exponent: Self) -> Self {
        self.zip(exponent, f32::powf)
    }

    /// Four-quadrant arctangent of `y / x`, where `self` is `y`.
    ///
    /// The boundary cases resolve as follows, the sign always taken from `y`:
    ///
    /// | y | x | result |
    /// |---|---|---|
    /// | ±0 | negative | ±π |
    /// | ±0 | positive | ±0 |
    /// | non-zero | ±0 | ±π/2 |
    /// | finite | -∞ | ±π |
    /// | finite | +∞ | ±0 |
    /// | ±∞ | finite | ±π/2 |
    /// | ±∞ | -∞ | ±3π/4 |
    /// | ±∞ | +∞ | ±π/4 |
    ///
    /// Any other pair yields `atan(y / x)`, offset by ±π when `x` is negative.
    pub fn atan2(self, x: Self) -> Self {
        let y = self;
        let valid = Self::TRUE_INT;

        let y_equals_zero = y.equal(Self::ZERO);
        let x_equals_zero = x.equal(Self::ZERO);
        let x_is_positive = x.and_int(Self::SIGN_MASK).equal_int(Self::ZERO);
        let y_equals_infinity = y.is_infinite();
        let x_equals_infinity = x.is_infinite();

        let y_sign = y.and_int(Self::SIGN_MASK);
        let pi = Self::splat(PI).or_int(y_sign);
        let pi_over_two = Self::splat(PI_DIV_2).or_int(y_sign);
        let pi_over_four = Self::splat(PI_DIV_4).or_int(y_sign);
        let three_pi_over_four = Self::splat(3.0 * PI_DIV_4).or_int(y_sign);

        let r1 = pi.select(y_sign, x_is_positive);
        let r2 = valid.select(pi_over_two, x_equals_zero);
        let r3 = r2.select(r1, y_equals_zero);
        let r4 = three_pi_over_four.select(pi_over_four, x_is_positive);
        let r5 = pi_over_two.select(r4, x_equals_infinity);
        let special = r3.select(r5, y_equals_infinity);
        let use_atan = special.equal_int(valid);

        let offset = pi.select(Self::SIGN_MASK, x_is_positive);
        let general = (y / x).atan() + offset;
        special.select(general, use_atan)
    }
}
