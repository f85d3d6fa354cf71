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

//! The 4-lane [`Vector`] type and its per-lane algebra.
//!
//! Every lane is processed independently unless an operation is explicitly
//! cross-lane (dot products, swizzles, shifts). Lanes can also be viewed as raw
//! `u32` bit patterns; comparisons produce select masks where each lane is either
//! `0x0000_0000` or `0xFFFF_FFFF`.

use crate::error::{check_index, MathError, MathResult};
use crate::storage::Float4;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// Generates the aggregated comparisons of a 2, 3 or 4 lane facade.
///
/// Only the first `$lanes` lanes take part; the rest are don't-care.
macro_rules! lane_comparisons {
    ($lanes:expr) => {
        /// Returns `true` if every compared lane of `a` equals the lane of `b`.
        #[inline]
        pub fn equal(a: Vector, b: Vector) -> bool {
            $crate::vector::compare::all_lanes(a.equal(b), $lanes)
        }

        /// Lane equality aggregated into a [`Comparison`](crate::Comparison).
        #[inline]
        pub fn equal_r(a: Vector, b: Vector) -> $crate::Comparison {
            $crate::Comparison::from_mask(a.equal(b), $lanes)
        }

        /// Returns `true` if every compared lane has the same bit pattern.
        #[inline]
        pub fn equal_int(a: Vector, b: Vector) -> bool {
            $crate::vector::compare::all_lanes(a.equal_int(b), $lanes)
        }

        /// Returns `true` if every compared lane is within `epsilon` of the other.
        #[inline]
        pub fn near_equal(a: Vector, b: Vector, epsilon: Vector) -> bool {
            $crate::vector::compare::all_lanes(a.near_equal(b, epsilon), $lanes)
        }

        /// Returns `true` if any compared lane differs.
        #[inline]
        pub fn not_equal(a: Vector, b: Vector) -> bool {
            $crate::vector::compare::any_lane(a.not_equal(b), $lanes)
        }

        /// Returns `true` if every compared lane of `a` is greater.
        #[inline]
        pub fn greater(a: Vector, b: Vector) -> bool {
            $crate::vector::compare::all_lanes(a.greater(b), $lanes)
        }

        /// Lane `>` aggregated into a [`Comparison`](crate::Comparison).
        #[inline]
        pub fn greater_r(a: Vector, b: Vector) -> $crate::Comparison {
            $crate::Comparison::from_mask(a.greater(b), $lanes)
        }

        /// Returns `true` if every compared lane of `a` is greater or equal.
        #[inline]
        pub fn greater_or_equal(a: Vector, b: Vector) -> bool {
            $crate::vector::compare::all_lanes(a.greater_or_equal(b), $lanes)
        }

        /// Returns `true` if every compared lane of `a` is less.
        #[inline]
        pub fn less(a: Vector, b: Vector) -> bool {
            $crate::vector::compare::all_lanes(a.less(b), $lanes)
        }

        /// Returns `true` if every compared lane of `a` is less or equal.
        #[inline]
        pub fn less_or_equal(a: Vector, b: Vector) -> bool {
            $crate::vector::compare::all_lanes(a.less_or_equal(b), $lanes)
        }

        /// Returns `true` if every compared lane lies in `[-bounds, bounds]`.
        #[inline]
        pub fn in_bounds(v: Vector, bounds: Vector) -> bool {
            $crate::vector::compare::all_lanes(v.in_bounds(bounds), $lanes)
        }

        /// Returns `true` if any compared lane is NaN.
        #[inline]
        pub fn is_nan(v: Vector) -> bool {
            $crate::vector::compare::any_lane(v.is_nan(), $lanes)
        }

        /// Returns `true` if any compared lane is infinite.
        #[inline]
        pub fn is_infinite(v: Vector) -> bool {
            $crate::vector::compare::any_lane(v.is_infinite(), $lanes)
        }
    };
}

pub mod compare;
pub mod convert;
pub mod interpolate;
pub mod permute;
pub mod transcendental;
pub mod vec2;
pub mod vec3;
pub mod vec4;

const ALL_ONES: u32 = 0xFFFF_FFFF;

/// A 4-lane `f32` vector.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vector {
    /// Lane 0.
    pub x: f32,
    /// Lane 1.
    pub y: f32,
    /// Lane 2.
    pub z: f32,
    /// Lane 3.
    pub w: f32,
}

impl Vector {
    /// All lanes `0.0`.
    pub const ZERO: Self = Self::splat(0.0);
    /// All lanes `1.0`.
    pub const ONE: Self = Self::splat(1.0);
    /// All lanes `-1.0`.
    pub const NEGATIVE_ONE: Self = Self::splat(-1.0);
    /// All lanes `0.5`.
    pub const ONE_HALF: Self = Self::splat(0.5);
    /// First row of the identity matrix, `(1, 0, 0, 0)`.
    pub const IDENTITY_R0: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Second row of the identity matrix, `(0, 1, 0, 0)`.
    pub const IDENTITY_R1: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Third row of the identity matrix, `(0, 0, 1, 0)`.
    pub const IDENTITY_R2: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Fourth row of the identity matrix, `(0, 0, 0, 1)`. Also the identity quaternion.
    pub const IDENTITY_R3: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// All lanes `+∞` (`0x7F80_0000`).
    pub const INFINITY: Self = Self::splat_bits(0x7F80_0000);
    /// All lanes the canonical quiet NaN (`0x7FC0_0000`).
    pub const QNAN: Self = Self::splat_bits(0x7FC0_0000);
    /// All lanes `f32::EPSILON`.
    pub const EPSILON: Self = Self::splat(f32::EPSILON);
    /// All lanes `-0.0` (`0x8000_0000`).
    pub const SIGN_MASK: Self = Self::splat_bits(0x8000_0000);
    /// All lanes `0xFFFF_FFFF`.
    pub const TRUE_INT: Self = Self::splat_bits(ALL_ONES);
    /// All lanes `0x0000_0000`.
    pub const FALSE_INT: Self = Self::splat_bits(0);
    /// Select mask taking x, y, z from the second operand.
    pub const SELECT_1110: Self = Self::from_bits([ALL_ONES, ALL_ONES, ALL_ONES, 0]);
    /// Select mask taking x, y from the second operand.
    pub const SELECT_1100: Self = Self::from_bits([ALL_ONES, ALL_ONES, 0, 0]);
    /// Select mask taking x from the second operand.
    pub const SELECT_1000: Self = Self::from_bits([ALL_ONES, 0, 0, 0]);
    /// Select mask taking x, z, w from the second operand.
    pub const SELECT_1011: Self = Self::from_bits([ALL_ONES, 0, ALL_ONES, ALL_ONES]);
    /// Select mask taking y, w from the second operand.
    pub const SELECT_0101: Self = Self::from_bits([0, ALL_ONES, 0, ALL_ONES]);

    /// Creates a new `Vector` from four lanes.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Replicates `value` into all four lanes.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Replicates a raw bit pattern into all four lanes.
    #[inline]
    pub const fn splat_bits(bits: u32) -> Self {
        Self::from_bits([bits, bits, bits, bits])
    }

    /// Creates a vector from an array, lane 0 first.
    #[inline]
    pub const fn from_array(lanes: [f32; 4]) -> Self {
        Self::new(lanes[0], lanes[1], lanes[2], lanes[3])
    }

    /// Returns the lanes as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Loads a vector from a slice of exactly four floats.
    pub fn from_slice(lanes: &[f32]) -> MathResult<Self> {
        match lanes {
            [x, y, z, w] => Ok(Self::new(*x, *y, *z, *w)),
            _ => Err(MathError::InvalidLength {
                expected: 4,
                actual: lanes.len(),
            }),
        }
    }

    /// Reinterprets four raw `u32` bit patterns as lanes.
    #[inline]
    pub const fn from_bits(bits: [u32; 4]) -> Self {
        Self::new(
            f32::from_bits(bits[0]),
            f32::from_bits(bits[1]),
            f32::from_bits(bits[2]),
            f32::from_bits(bits[3]),
        )
    }

    /// Returns the raw bit pattern of every lane.
    #[inline]
    pub const fn to_bits(self) -> [u32; 4] {
        [
            self.x.to_bits(),
            self.y.to_bits(),
            self.z.to_bits(),
            self.w.to_bits(),
        ]
    }

    /// Reinterprets four `i32` values as lane bit patterns.
    #[inline]
    pub const fn from_int(ints: [i32; 4]) -> Self {
        Self::from_bits([ints[0] as u32, ints[1] as u32, ints[2] as u32, ints[3] as u32])
    }

    /// Returns the lane bit patterns as `i32` values.
    #[inline]
    pub const fn to_int(self) -> [i32; 4] {
        let bits = self.to_bits();
        [bits[0] as i32, bits[1] as i32, bits[2] as i32, bits[3] as i32]
    }

    /// Converts from the plain storage representation.
    #[inline]
    pub const fn from_storage(storage: Float4) -> Self {
        Self::new(storage.x, storage.y, storage.z, storage.w)
    }

    /// Converts into the plain storage representation.
    #[inline]
    pub const fn to_storage(self) -> Float4 {
        Float4::new(self.x, self.y, self.z, self.w)
    }

    /// Returns the lane at `index`, or an error if `index > 3`.
    #[inline]
    pub fn lane(self, index: usize) -> MathResult<f32> {
        check_index(index, 3)?;
        Ok(self[index])
    }

    /// Returns a copy with the lane at `index` replaced, or an error if `index > 3`.
    #[inline]
    pub fn with_lane(mut self, index: usize, value: f32) -> MathResult<Self> {
        check_index(index, 3)?;
        self[index] = value;
        Ok(self)
    }

    /// Returns a copy with `x` replaced.
    #[inline]
    pub const fn with_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    /// Returns a copy with `y` replaced.
    #[inline]
    pub const fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    /// Returns a copy with `z` replaced.
    #[inline]
    pub const fn with_z(self, z: f32) -> Self {
        Self { z, ..self }
    }

    /// Returns a copy with `w` replaced.
    #[inline]
    pub const fn with_w(self, w: f32) -> Self {
        Self { w, ..self }
    }

    /// Replicates `x` into all lanes.
    #[inline]
    pub const fn splat_x(self) -> Self {
        Self::splat(self.x)
    }

    /// Replicates `y` into all lanes.
    #[inline]
    pub const fn splat_y(self) -> Self {
        Self::splat(self.y)
    }

    /// Replicates `z` into all lanes.
    #[inline]
    pub const fn splat_z(self) -> Self {
        Self::splat(self.z)
    }

    /// Replicates `w` into all lanes.
    #[inline]
    pub const fn splat_w(self) -> Self {
        Self::splat(self.w)
    }

    // --- Lane Helpers ---

    /// Applies `f` to every lane.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    /// Applies `f` lane-wise to `self` and `other`.
    #[inline]
    pub fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
            f(self.w, other.w),
        )
    }

    /// Applies `f` lane-wise to the raw bit patterns of `self` and `other`.
    #[inline]
    pub(crate) fn zip_bits(self, other: Self, f: impl Fn(u32, u32) -> u32) -> Self {
        let a = self.to_bits();
        let b = other.to_bits();
        Self::from_bits([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])])
    }

    /// Builds a select mask from a per-lane predicate.
    #[inline]
    pub(crate) fn mask_from(self, other: Self, f: impl Fn(f32, f32) -> bool) -> Self {
        let lane = |a, b| if f(a, b) { ALL_ONES } else { 0 };
        Self::from_bits([
            lane(self.x, other.x),
            lane(self.y, other.y),
            lane(self.z, other.z),
            lane(self.w, other.w),
        ])
    }

    // --- Arithmetic ---

    /// Computes `self * b + c` per lane.
    #[inline]
    pub fn multiply_add(self, b: Self, c: Self) -> Self {
        Self::new(
            self.x * b.x + c.x,
            self.y * b.y + c.y,
            self.z * b.z + c.z,
            self.w * b.w + c.w,
        )
    }

    /// Computes `c - self * b` per lane.
    #[inline]
    pub fn negative_multiply_subtract(self, b: Self, c: Self) -> Self {
        Self::new(
            c.x - self.x * b.x,
            c.y - self.y * b.y,
            c.z - self.z * b.z,
            c.w - self.w * b.w,
        )
    }

    /// Multiplies every lane by `factor`.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        self.map(|v| v * factor)
    }

    /// Returns the absolute value of every lane.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(f32::abs)
    }

    /// Per-lane minimum. When a lane compares unordered the lane from `other` wins.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip(other, |a, b| if a < b { a } else { b })
    }

    /// Per-lane maximum. When a lane compares unordered the lane from `other` wins.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip(other, |a, b| if a > b { a } else { b })
    }

    /// Clamps every lane into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y && min.z <= max.z && min.w <= max.w,
            "clamp bounds are inverted"
        );
        max.min(min.max(self))
    }

    /// Clamps every lane into `[0, 1]`.
    #[inline]
    pub fn saturate(self) -> Self {
        self.clamp(Self::ZERO, Self::ONE)
    }

    /// Computes `1 / self` per lane.
    #[inline]
    pub fn reciprocal(self) -> Self {
        self.map(|v| 1.0 / v)
    }

    /// Estimated reciprocal, with a relative error below `1e-5`.
    ///
    /// Zeros, infinities, subnormals, magnitudes of `2^125` and above and NaN take
    /// the exact path.
    #[inline]
    pub fn reciprocal_est(self) -> Self {
        self.map(reciprocal_lane_est)
    }

    /// Per-lane square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        self.map(f32::sqrt)
    }

    /// Estimated square root, with a relative error below `2e-3`.
    ///
    /// Zeros, infinities, subnormals, negatives and NaN take the exact path.
    #[inline]
    pub fn sqrt_est(self) -> Self {
        self.map(|v| {
            if v.is_normal() && v > 0.0 {
                v * reciprocal_sqrt_lane_est(v)
            } else {
                v.sqrt()
            }
        })
    }

    /// Computes `1 / sqrt(self)` per lane.
    #[inline]
    pub fn reciprocal_sqrt(self) -> Self {
        self.map(|v| 1.0 / v.sqrt())
    }

    /// Estimated `1 / sqrt(self)`, with a relative error below `2e-3`.
    ///
    /// Zeros, infinities, subnormals, negatives and NaN take the exact path.
    #[inline]
    pub fn reciprocal_sqrt_est(self) -> Self {
        self.map(reciprocal_sqrt_lane_est)
    }

    /// Floating-point remainder: `self - other * truncate(self / other)`.
    #[inline]
    pub fn modulo(self, other: Self) -> Self {
        let quotient = (self / other).truncate();
        other.negative_multiply_subtract(quotient, self)
    }

    /// Wraps every lane into `[-π, π]`.
    #[inline]
    pub fn mod_angles(self) -> Self {
        let turns = self.scale(crate::scalar::ONE_DIV_TWO_PI).round();
        Self::splat(crate::scalar::TWO_PI).negative_multiply_subtract(turns, self)
    }

    /// Adds two angle vectors, each lane in `[-π, π)`, keeping the result in range.
    pub fn add_angles(self, other: Self) -> Self {
        use crate::scalar::{PI, TWO_PI};
        let sum = self + other;
        sum.map(|v| {
            if v < -PI {
                v + TWO_PI
            } else if v >= PI {
                v - TWO_PI
            } else {
                v
            }
        })
    }

    /// Subtracts two angle vectors, each lane in `[-π, π)`, keeping the result in range.
    pub fn subtract_angles(self, other: Self) -> Self {
        self.add_angles(-other)
    }

    // --- Bitwise ---

    /// Bitwise AND of the raw lane bits.
    #[inline]
    pub fn and_int(self, other: Self) -> Self {
        self.zip_bits(other, |a, b| a & b)
    }

    /// Computes `self & !other` on the raw lane bits.
    #[inline]
    pub fn and_c_int(self, other: Self) -> Self {
        self.zip_bits(other, |a, b| a & !b)
    }

    /// Bitwise OR of the raw lane bits.
    #[inline]
    pub fn or_int(self, other: Self) -> Self {
        self.zip_bits(other, |a, b| a | b)
    }

    /// Bitwise NOR of the raw lane bits.
    #[inline]
    pub fn nor_int(self, other: Self) -> Self {
        self.zip_bits(other, |a, b| !(a | b))
    }

    /// Bitwise XOR of the raw lane bits.
    #[inline]
    pub fn xor_int(self, other: Self) -> Self {
        self.zip_bits(other, |a, b| a ^ b)
    }

    // --- Rounding ---

    /// Rounds toward zero.
    ///
    /// NaN lanes become the canonical quiet NaN (`0x7FC0_0000`). Lanes whose
    /// magnitude is at least 2^23 are already integral and pass through.
    pub fn truncate(self) -> Self {
        let lane = |v: f32| -> f32 {
            if v.is_nan() {
                f32::from_bits(0x7FC0_0000)
            } else if v.abs() < 8_388_608.0 {
                (v as i32) as f32
            } else {
                v
            }
        };
        Self::new(lane(self.x), lane(self.y), lane(self.z), lane(self.w))
    }

    /// Rounds to the nearest integer, ties to even.
    pub fn round(self) -> Self {
        self.map(round_to_nearest)
    }

    /// Rounds toward negative infinity.
    #[inline]
    pub fn floor(self) -> Self {
        self.map(f32::floor)
    }

    /// Rounds toward positive infinity.
    #[inline]
    pub fn ceiling(self) -> Self {
        self.map(f32::ceil)
    }
}

/// Rescales `v` so that its length lies in `[length_min, length_max]`.
///
/// `length_sq` is the facade-specific squared length, replicated in every lane.
/// Vectors already in range are returned bit-for-bit.
pub(crate) fn clamp_length_with(
    v: Vector,
    length_sq: Vector,
    length_min: Vector,
    length_max: Vector,
) -> Vector {
    debug_assert!(length_min.x >= 0.0, "minimum length must not be negative");
    debug_assert!(length_max.x >= length_min.x, "length bounds are inverted");
    let rcp_length = length_sq.reciprocal_sqrt();
    let infinite_length = length_sq.equal_int(Vector::INFINITY);
    let zero_length = length_sq.equal(Vector::ZERO);
    let length = length_sq * rcp_length;
    let normal = v * rcp_length;

    // Zero and infinite lengths keep their squared length as both magnitude and direction.
    let select = infinite_length.equal_int(zero_length);
    let length = length_sq.select(length, select);
    let normal = length_sq.select(normal, select);

    let control_max = length.greater(length_max);
    let control_min = length.less(length_min);
    let clamped = length.select(length_max, control_max);
    let clamped = clamped.select(length_min, control_min);
    let result = normal * clamped;

    let in_range = control_max.equal_int(control_min);
    result.select(v, in_range)
}

/// Banker's rounding that leaves NaN and infinities untouched.
fn round_to_nearest(x: f32) -> f32 {
    let floor = x.floor();
    let fraction = x - floor;
    if fraction < 0.5 {
        return floor;
    }
    if fraction > 0.5 {
        return floor + 1.0;
    }
    if (floor * 0.5).trunc() * 2.0 == floor {
        floor
    } else {
        floor + 1.0
    }
}

// --- Estimates ---

// Initial guesses come from the exponent bits, refined by Newton-Raphson.
const RECIPROCAL_MAGIC: u32 = 0x7EF3_11C7;
// 2^125; larger inputs seed the reciprocal near the subnormal range.
const RECIPROCAL_EST_LIMIT: u32 = 0x7E00_0000;
const RECIPROCAL_SQRT_MAGIC: u32 = 0x5F37_5A86;

#[inline]
fn reciprocal_lane_est(v: f32) -> f32 {
    let x = v.abs();
    if !v.is_normal() || x.to_bits() >= RECIPROCAL_EST_LIMIT {
        return 1.0 / v;
    }
    let mut y = f32::from_bits(RECIPROCAL_MAGIC - x.to_bits());
    y *= 2.0 - x * y;
    y *= 2.0 - x * y;
    y.copysign(v)
}

#[inline]
fn reciprocal_sqrt_lane_est(v: f32) -> f32 {
    if !(v.is_normal() && v > 0.0) {
        return 1.0 / v.sqrt();
    }
    let y = f32::from_bits(RECIPROCAL_SQRT_MAGIC - (v.to_bits() >> 1));
    y * (1.5 - 0.5 * v * y * y)
}

// --- Operator Overloads ---

impl Add for Vector {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a + b)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a - b)
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Vector {
    type Output = Self;
    /// Multiplies two vectors lane by lane.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a * b)
    }
}

impl Mul<f32> for Vector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Self::Output {
        rhs.scale(self)
    }
}

impl MulAssign<f32> for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl Div for Vector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a / b)
    }
}

impl Div<f32> for Vector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self.map(|v| v / rhs)
    }
}

impl Neg for Vector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl Index<usize> for Vector {
    type Output = f32;
    /// Allows accessing a lane by index.
    /// # Panics
    /// Panics if `index` is greater than 3. Use [`Vector::lane`] for a checked read.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Index out of bounds for Vector"),
        }
    }
}

impl IndexMut<usize> for Vector {
    /// Allows mutably accessing a lane by index.
    /// # Panics
    /// Panics if `index` is greater than 3.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Index out of bounds for Vector"),
        }
    }
}

impl From<[f32; 4]> for Vector {
    #[inline]
    fn from(lanes: [f32; 4]) -> Self {
        Self::from_array(lanes)
    }
}

impl From<Vector> for [f32; 4] {
    #[inline]
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

// --- Approximate Equality ---

impl AbsDiffEq for Vector {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Vector {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constants_bit_patterns() {
        assert_eq!(Vector::INFINITY.to_bits(), [0x7F80_0000; 4]);
        assert_eq!(Vector::QNAN.to_bits(), [0x7FC0_0000; 4]);
        assert_eq!(Vector::TRUE_INT.to_bits(), [0xFFFF_FFFF; 4]);
        assert_eq!(
            Vector::SELECT_1011.to_bits(),
            [0xFFFF_FFFF, 0, 0xFFFF_FFFF, 0xFFFF_FFFF]
        );
    }

    #[test]
    fn test_from_slice() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(v, Vector::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            Vector::from_slice(&[1.0, 2.0]),
            Err(MathError::InvalidLength {
                expected: 4,
                actual: 2
            })
        );
        assert!(Vector::from_slice(&[0.0; 5]).is_err());
    }

    #[test]
    fn test_lane_access() {
        let v = Vector::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.lane(2), Ok(3.0));
        assert_eq!(v.lane(4), Err(MathError::IndexOutOfRange { index: 4, max: 3 }));
        assert_eq!(v.with_lane(3, 9.0).unwrap().w, 9.0);
        assert!(v.with_lane(7, 9.0).is_err());
        assert_eq!(v[1], 2.0);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let v = Vector::ZERO;
        let _ = v[4];
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector::new(4.0, 3.0, 2.0, 1.0);
        assert_eq!(a + b, Vector::splat(5.0));
        assert_eq!(a - b, Vector::new(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(a * b, Vector::new(4.0, 6.0, 6.0, 4.0));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a.multiply_add(b, Vector::ONE), Vector::new(5.0, 7.0, 7.0, 5.0));
        assert_eq!(
            a.negative_multiply_subtract(b, Vector::splat(10.0)),
            Vector::new(6.0, 4.0, 4.0, 6.0)
        );
        assert_eq!(-a, Vector::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        let v = Vector::new(1.0, -1.0, 0.0, 2.0) / Vector::ZERO;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
        assert_eq!(Vector::ZERO.reciprocal().x, f32::INFINITY);
    }

    #[test]
    fn test_min_max_clamp_saturate() {
        let a = Vector::new(-1.0, 0.5, 2.0, 0.0);
        assert_eq!(a.min(Vector::ZERO), Vector::new(-1.0, 0.0, 0.0, 0.0));
        assert_eq!(a.max(Vector::ZERO), Vector::new(0.0, 0.5, 2.0, 0.0));
        assert_eq!(a.saturate(), Vector::new(0.0, 0.5, 1.0, 0.0));
        assert_eq!(
            a.clamp(Vector::splat(-0.5), Vector::splat(1.5)),
            Vector::new(-0.5, 0.5, 1.5, 0.0)
        );
    }

    #[test]
    fn test_bitwise() {
        let a = Vector::from_bits([0b1100, 0xFFFF_FFFF, 0, 0x8000_0000]);
        let b = Vector::from_bits([0b1010, 0x0F0F_0F0F, 0, 0x8000_0000]);
        assert_eq!(a.and_int(b).to_bits(), [0b1000, 0x0F0F_0F0F, 0, 0x8000_0000]);
        assert_eq!(a.and_c_int(b).to_bits(), [0b0100, 0xF0F0_F0F0, 0, 0]);
        assert_eq!(a.or_int(b).to_bits(), [0b1110, 0xFFFF_FFFF, 0, 0x8000_0000]);
        assert_eq!(a.xor_int(b).to_bits(), [0b0110, 0xF0F0_F0F0, 0, 0]);
        assert_eq!(a.nor_int(b).to_bits()[2], 0xFFFF_FFFF);
    }

    #[test]
    fn test_truncate() {
        let v = Vector::new(1.7, -1.7, 1.0e10, f32::NAN).truncate();
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, -1.0);
        assert_eq!(v.z, 1.0e10);
        assert_eq!(v.w.to_bits(), 0x7FC0_0000);

        let negative_nan = f32::from_bits(0xFFC0_0001);
        assert_eq!(Vector::splat(negative_nan).truncate().to_bits(), [0x7FC0_0000; 4]);
        assert_eq!(Vector::splat(f32::INFINITY).truncate().x, f32::INFINITY);
    }

    #[test]
    fn test_round_ties_to_even() {
        let v = Vector::new(0.5, 1.5, 2.5, -2.5).round();
        assert_eq!(v, Vector::new(0.0, 2.0, 2.0, -2.0));
        let v = Vector::new(1.2, -1.7, f32::INFINITY, f32::NAN).round();
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, -2.0);
        assert_eq!(v.z, f32::INFINITY);
        assert!(v.w.is_nan());
    }

    #[test]
    fn test_floor_ceiling() {
        let v = Vector::new(1.5, -1.5, 2.0, -0.2);
        assert_eq!(v.floor(), Vector::new(1.0, -2.0, 2.0, -1.0));
        assert_eq!(v.ceiling(), Vector::new(2.0, -1.0, 2.0, -0.0));
    }

    #[test]
    fn test_modulo_and_angles() {
        let v = Vector::new(5.5, -5.5, 1.0, 7.0).modulo(Vector::splat(2.0));
        assert_relative_eq!(v, Vector::new(1.5, -1.5, 1.0, 1.0));

        let wrapped = Vector::splat(3.0 * crate::scalar::PI).mod_angles();
        assert_relative_eq!(wrapped.x.abs(), crate::scalar::PI, epsilon = 1e-5);

        let sum = Vector::splat(3.0).add_angles(Vector::splat(1.0));
        assert_relative_eq!(sum.x, 4.0 - crate::scalar::TWO_PI, epsilon = 1e-6);
        let diff = Vector::splat(-3.0).subtract_angles(Vector::splat(1.0));
        assert_relative_eq!(diff.x, crate::scalar::TWO_PI - 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sqrt_family() {
        let v = Vector::new(4.0, 9.0, 16.0, 1.0);
        assert_eq!(v.sqrt(), Vector::new(2.0, 3.0, 4.0, 1.0));
        assert_relative_eq!(v.reciprocal_sqrt(), Vector::new(0.5, 1.0 / 3.0, 0.25, 1.0));
    }

    #[test]
    fn test_estimates_stay_within_tolerance() {
        let mut x = 1.0e-30f32;
        while x < 1.0e30 {
            let v = Vector::new(x, x * 1.37, x * 2.9, -x);
            let exact_rcp = v.reciprocal();
            let exact_sqrt = v.abs().sqrt();
            let exact_rsqrt = v.abs().reciprocal_sqrt();
            assert_relative_eq!(v.reciprocal_est(), exact_rcp, max_relative = 1e-5);
            assert_relative_eq!(v.abs().sqrt_est(), exact_sqrt, max_relative = 2e-3);
            assert_relative_eq!(v.abs().reciprocal_sqrt_est(), exact_rsqrt, max_relative = 2e-3);
            x *= 7.3;
        }
    }

    #[test]
    fn test_estimates_refine_a_seed() {
        // A single refinement step leaves a visible gap to the exact root.
        let v = Vector::splat(10.0);
        assert_ne!(v.reciprocal_sqrt_est(), v.reciprocal_sqrt());
        assert_relative_eq!(v.reciprocal_sqrt_est().x, 0.316_227_77, max_relative = 2e-3);
    }

    #[test]
    fn test_estimates_special_lanes() {
        let v = Vector::new(0.0, f32::INFINITY, -1.0, f32::NAN);
        let rcp = v.reciprocal_est();
        assert_eq!(rcp.x, f32::INFINITY);
        assert_eq!(rcp.y, 0.0);
        assert_relative_eq!(rcp.z, -1.0, max_relative = 1e-5);
        assert!(rcp.w.is_nan());

        let root = v.sqrt_est();
        assert_eq!(root.x, 0.0);
        assert_eq!(root.y, f32::INFINITY);
        assert!(root.z.is_nan());
        assert!(root.w.is_nan());

        let rsqrt = v.reciprocal_sqrt_est();
        assert_eq!(rsqrt.x, f32::INFINITY);
        assert_eq!(rsqrt.y, 0.0);
        assert!(rsqrt.z.is_nan());
        assert!(rsqrt.w.is_nan());

        assert_eq!(Vector::splat(f32::MAX).reciprocal_est(), Vector::splat(f32::MAX).reciprocal());
    }
}
