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

//! Per-lane comparisons producing select masks, and the [`Comparison`] record.

use super::Vector;

const EXPONENT_MASK: u32 = 0x7F80_0000;
const MANTISSA_MASK: u32 = 0x007F_FFFF;
const ABS_MASK: u32 = 0x7FFF_FFFF;

/// The aggregated outcome of a lane-wise comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Every compared lane satisfied the predicate.
    AllTrue,
    /// No compared lane satisfied the predicate.
    AllFalse,
    /// Some lanes satisfied the predicate and some did not.
    Mixed,
}

impl Comparison {
    /// Aggregates the first `lanes` lanes of a select mask.
    pub(crate) fn from_mask(mask: Vector, lanes: usize) -> Self {
        let bits = mask.to_bits();
        let set = bits[..lanes].iter().filter(|&&b| b == 0xFFFF_FFFF).count();
        if set == lanes {
            Self::AllTrue
        } else if set == 0 {
            Self::AllFalse
        } else {
            Self::Mixed
        }
    }

    /// Returns `true` if every lane compared true.
    #[inline]
    pub fn all_true(self) -> bool {
        self == Self::AllTrue
    }

    /// Returns `true` if at least one lane compared true.
    #[inline]
    pub fn any_true(self) -> bool {
        self != Self::AllFalse
    }

    /// Returns `true` if every lane compared false.
    #[inline]
    pub fn all_false(self) -> bool {
        self == Self::AllFalse
    }

    /// Returns `true` if at least one lane compared false.
    #[inline]
    pub fn any_false(self) -> bool {
        self != Self::AllTrue
    }

    /// Returns `true` if the lanes disagreed.
    #[inline]
    pub fn mixed(self) -> bool {
        self == Self::Mixed
    }

    /// For records produced by `in_bounds_r`: every lane was inside its bounds.
    #[inline]
    pub fn all_in_bounds(self) -> bool {
        self.all_true()
    }

    /// For records produced by `in_bounds_r`: at least one lane was outside its bounds.
    #[inline]
    pub fn any_out_of_bounds(self) -> bool {
        self.any_false()
    }
}

impl Vector {
    /// Lane-wise `self == other`.
    #[inline]
    pub fn equal(self, other: Self) -> Self {
        self.mask_from(other, |a, b| a == b)
    }

    /// [`Vector::equal`] aggregated into a [`Comparison`].
    #[inline]
    pub fn equal_r(self, other: Self) -> Comparison {
        Comparison::from_mask(self.equal(other), 4)
    }

    /// Lane-wise bit-pattern equality.
    #[inline]
    pub fn equal_int(self, other: Self) -> Self {
        self.zip_bits(other, |a, b| if a == b { 0xFFFF_FFFF } else { 0 })
    }

    /// [`Vector::equal_int`] aggregated into a [`Comparison`].
    #[inline]
    pub fn equal_int_r(self, other: Self) -> Comparison {
        Comparison::from_mask(self.equal_int(other), 4)
    }

    /// Lane-wise `|self - other| <= epsilon`.
    #[inline]
    pub fn near_equal(self, other: Self, epsilon: Self) -> Self {
        let delta = (self - other).abs();
        delta.mask_from(epsilon, |d, e| d <= e)
    }

    /// Lane-wise `self != other`.
    #[inline]
    pub fn not_equal(self, other: Self) -> Self {
        self.mask_from(other, |a, b| a != b)
    }

    /// Lane-wise bit-pattern inequality.
    #[inline]
    pub fn not_equal_int(self, other: Self) -> Self {
        self.zip_bits(other, |a, b| if a != b { 0xFFFF_FFFF } else { 0 })
    }

    /// Lane-wise `self > other`.
    #[inline]
    pub fn greater(self, other: Self) -> Self {
        self.mask_from(other, |a, b| a > b)
    }

    /// [`Vector::greater`] aggregated into a [`Comparison`].
    #[inline]
    pub fn greater_r(self, other: Self) -> Comparison {
        Comparison::from_mask(self.greater(other), 4)
    }

    /// Lane-wise `self >= other`.
    #[inline]
    pub fn greater_or_equal(self, other: Self) -> Self {
        self.mask_from(other, |a, b| a >= b)
    }

    /// [`Vector::greater_or_equal`] aggregated into a [`Comparison`].
    #[inline]
    pub fn greater_or_equal_r(self, other: Self) -> Comparison {
        Comparison::from_mask(self.greater_or_equal(other), 4)
    }

    /// Lane-wise `self < other`.
    #[inline]
    pub fn less(self, other: Self) -> Self {
        self.mask_from(other, |a, b| a < b)
    }

    /// Lane-wise `self <= other`.
    #[inline]
    pub fn less_or_equal(self, other: Self) -> Self {
        self.mask_from(other, |a, b| a <= b)
    }

    /// Lane-wise `-bounds <= self <= bounds`.
    #[inline]
    pub fn in_bounds(self, bounds: Self) -> Self {
        self.mask_from(bounds, |v, b| v <= b && v >= -b)
    }

    /// [`Vector::in_bounds`] aggregated into a [`Comparison`].
    #[inline]
    pub fn in_bounds_r(self, bounds: Self) -> Comparison {
        Comparison::from_mask(self.in_bounds(bounds), 4)
    }

    /// Lane-wise NaN test: all exponent bits set and a non-zero mantissa.
    #[inline]
    pub fn is_nan(self) -> Self {
        self.zip_bits(Self::ZERO, |a, _| {
            if a & EXPONENT_MASK == EXPONENT_MASK && a & MANTISSA_MASK != 0 {
                0xFFFF_FFFF
            } else {
                0
            }
        })
    }

    /// Lane-wise infinity test on the magnitude bits.
    #[inline]
    pub fn is_infinite(self) -> Self {
        self.zip_bits(Self::ZERO, |a, _| {
            if a & ABS_MASK == EXPONENT_MASK {
                0xFFFF_FFFF
            } else {
                0
            }
        })
    }
}

/// Returns `true` if the first `lanes` lanes of `mask` are all set.
#[inline]
pub(crate) fn all_lanes(mask: Vector, lanes: usize) -> bool {
    mask.to_bits()[..lanes].iter().all(|&b| b != 0)
}

/// Returns `true` if any of the first `lanes` lanes of `mask` is set.
#[inline]
pub(crate) fn any_lane(mask: Vector, lanes: usize) -> bool {
    mask.to_bits()[..lanes].iter().any(|&b| b != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_are_all_or_nothing() {
        let a = Vector::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector::new(1.0, 0.0, 5.0, 4.0);
        assert_eq!(a.equal(b).to_bits(), [0xFFFF_FFFF, 0, 0, 0xFFFF_FFFF]);
        assert_eq!(a.greater(b).to_bits(), [0, 0xFFFF_FFFF, 0, 0]);
        assert_eq!(a.less_or_equal(b).to_bits(), [0xFFFF_FFFF, 0, 0xFFFF_FFFF, 0xFFFF_FFFF]);
        assert_eq!(a.not_equal(b).to_bits(), [0, 0xFFFF_FFFF, 0xFFFF_FFFF, 0]);
    }

    #[test]
    fn test_comparison_record() {
        let a = Vector::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.equal_r(a), Comparison::AllTrue);
        assert_eq!(a.equal_r(a + Vector::ONE), Comparison::AllFalse);
        let mixed = a.greater_r(Vector::splat(2.5));
        assert_eq!(mixed, Comparison::Mixed);
        assert!(mixed.any_true() && mixed.any_false() && mixed.mixed());
        assert!(!mixed.all_true() && !mixed.all_false());
        assert!(a.greater_or_equal_r(Vector::ONE).all_true());
    }

    #[test]
    fn test_nan_compares_false() {
        let nan = Vector::splat(f32::NAN);
        assert_eq!(nan.equal_r(nan), Comparison::AllFalse);
        assert_eq!(nan.equal_int_r(nan), Comparison::AllTrue);
        assert_eq!(nan.not_equal(nan).to_bits(), [0xFFFF_FFFF; 4]);
    }

    #[test]
    fn test_near_equal() {
        let a = Vector::new(1.0, 1.0, 1.0, 1.0);
        let b = Vector::new(1.05, 0.95, 1.2, 1.0);
        assert_eq!(
            a.near_equal(b, Vector::splat(0.1)).to_bits(),
            [0xFFFF_FFFF, 0xFFFF_FFFF, 0, 0xFFFF_FFFF]
        );
    }

    #[test]
    fn test_in_bounds() {
        let v = Vector::new(-1.0, 0.5, 2.0, -0.0);
        let bounds = Vector::ONE;
        assert_eq!(v.in_bounds(bounds).to_bits(), [0xFFFF_FFFF, 0xFFFF_FFFF, 0, 0xFFFF_FFFF]);
        let record = v.in_bounds_r(bounds);
        assert!(record.any_out_of_bounds());
        assert!(!record.all_in_bounds());
        assert!(Vector::ZERO.in_bounds_r(bounds).all_in_bounds());
    }

    #[test]
    fn test_nan_and_infinity_classification() {
        let v = Vector::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1.0);
        assert_eq!(v.is_nan().to_bits(), [0xFFFF_FFFF, 0, 0, 0]);
        assert_eq!(v.is_infinite().to_bits(), [0, 0xFFFF_FFFF, 0xFFFF_FFFF, 0]);
        let negative_nan = Vector::splat(f32::from_bits(0xFFC0_0000));
        assert_eq!(negative_nan.is_nan().to_bits(), [0xFFFF_FFFF; 4]);
    }

    #[test]
    fn test_lane_aggregation() {
        let mask = Vector::SELECT_1100;
        assert!(all_lanes(mask, 2));
        assert!(!all_lanes(mask, 3));
        assert!(any_lane(mask, 1));
        assert!(!any_lane(Vector::FALSE_INT, 4));
    }
}
