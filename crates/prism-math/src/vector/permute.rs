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

//! Bitwise select and lane reordering.
//!
//! Lanes are moved as raw bit patterns, so NaN payloads and signed zeros survive
//! every operation in this module untouched.

use super::Vector;
use crate::error::{check_selector, MathResult};

impl Vector {
    /// Per-bit blend: `(self & !control) | (other & control)`.
    ///
    /// With a comparison mask as `control`, lanes whose mask is set come from
    /// `other` and the rest from `self`.
    #[inline]
    pub fn select(self, other: Self, control: Self) -> Self {
        self.and_c_int(control).or_int(other.and_int(control))
    }

    /// Builds a select mask from four `0`/`1` lane selectors.
    pub fn select_control(i0: u32, i1: u32, i2: u32, i3: u32) -> MathResult<Self> {
        let mut bits = [0u32; 4];
        for (slot, index) in bits.iter_mut().zip([i0, i1, i2, i3]) {
            check_selector(index, 1)?;
            *slot = if index == 1 { 0xFFFF_FFFF } else { 0 };
        }
        Ok(Self::from_bits(bits))
    }

    /// Reorders the lanes of `self`; each element index must be in `0..=3`.
    pub fn swizzle(self, e0: u32, e1: u32, e2: u32, e3: u32) -> MathResult<Self> {
        let bits = self.to_bits();
        let mut out = [0u32; 4];
        for (slot, index) in out.iter_mut().zip([e0, e1, e2, e3]) {
            check_selector(index, 3)?;
            *slot = bits[index as usize];
        }
        Ok(Self::from_bits(out))
    }

    /// Gathers lanes from the concatenation `[self.xyzw, other.xyzw]`;
    /// each permute index must be in `0..=7`.
    pub fn permute(self, other: Self, p0: u32, p1: u32, p2: u32, p3: u32) -> MathResult<Self> {
        let a = self.to_bits();
        let b = other.to_bits();
        let mut out = [0u32; 4];
        for (slot, index) in out.iter_mut().zip([p0, p1, p2, p3]) {
            check_selector(index, 7)?;
            let index = index as usize;
            *slot = if index < 4 { a[index] } else { b[index - 4] };
        }
        Ok(Self::from_bits(out))
    }

    /// Interleaves the low halves: `(self.x, other.x, self.y, other.y)`.
    #[inline]
    pub fn merge_xy(self, other: Self) -> Self {
        Self::new(self.x, other.x, self.y, other.y)
    }

    /// Interleaves the high halves: `(self.z, other.z, self.w, other.w)`.
    #[inline]
    pub fn merge_zw(self, other: Self) -> Self {
        Self::new(self.z, other.z, self.w, other.w)
    }

    /// Shifts `self` left by `elements` lanes, filling from `other`.
    pub fn shift_left(self, other: Self, elements: u32) -> MathResult<Self> {
        check_selector(elements, 3)?;
        self.permute(other, elements, elements + 1, elements + 2, elements + 3)
    }

    /// Rotates the lanes left by `elements`.
    pub fn rotate_left(self, elements: u32) -> MathResult<Self> {
        check_selector(elements, 3)?;
        self.swizzle(
            elements & 3,
            (elements + 1) & 3,
            (elements + 2) & 3,
            (elements + 3) & 3,
        )
    }

    /// Rotates the lanes right by `elements`.
    pub fn rotate_right(self, elements: u32) -> MathResult<Self> {
        check_selector(elements, 3)?;
        self.rotate_left((4 - elements) & 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;

    #[test]
    fn test_select() {
        let a = Vector::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.select(b, Vector::SELECT_1100), Vector::new(5.0, 6.0, 3.0, 4.0));
        assert_eq!(a.select(b, Vector::FALSE_INT), a);
        assert_eq!(a.select(b, Vector::TRUE_INT), b);
    }

    #[test]
    fn test_select_preserves_nan_bits() {
        let payload = Vector::splat_bits(0x7FC0_1234);
        let out = payload.select(Vector::ZERO, Vector::SELECT_1000);
        assert_eq!(out.to_bits(), [0, 0x7FC0_1234, 0x7FC0_1234, 0x7FC0_1234]);
    }

    #[test]
    fn test_select_control() {
        let mask = Vector::select_control(1, 0, 1, 1).unwrap();
        assert_eq!(mask.to_bits(), Vector::SELECT_1011.to_bits());
        assert_eq!(
            Vector::select_control(0, 2, 0, 0),
            Err(MathError::InvalidSelector {
                selector: 2,
                max: 1
            })
        );
    }

    #[test]
    fn test_swizzle() {
        let v = Vector::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.swizzle(3, 2, 1, 0).unwrap(), Vector::new(4.0, 3.0, 2.0, 1.0));
        assert_eq!(v.swizzle(0, 0, 0, 0).unwrap(), Vector::splat(1.0));
        assert_eq!(
            v.swizzle(0, 1, 4, 3),
            Err(MathError::InvalidSelector {
                selector: 4,
                max: 3
            })
        );
    }

    #[test]
    fn test_permute() {
        let a = Vector::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.permute(b, 0, 4, 3, 7).unwrap(), Vector::new(1.0, 5.0, 4.0, 8.0));
        assert!(a.permute(b, 0, 1, 2, 8).is_err());
    }

    #[test]
    fn test_merge_shift_rotate() {
        let a = Vector::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.merge_xy(b), Vector::new(1.0, 5.0, 2.0, 6.0));
        assert_eq!(a.merge_zw(b), Vector::new(3.0, 7.0, 4.0, 8.0));
        assert_eq!(a.shift_left(b, 2).unwrap(), Vector::new(3.0, 4.0, 5.0, 6.0));
        assert_eq!(a.rotate_left(1).unwrap(), Vector::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(a.rotate_right(1).unwrap(), Vector::new(4.0, 1.0, 2.0, 3.0));
        assert_eq!(a.rotate_right(0).unwrap(), a);
        assert!(a.rotate_left(4).is_err());
        assert!(a.shift_left(b, 5).is_err());
    }
}
