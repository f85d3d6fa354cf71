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

//! Fixed-point conversions between integer lanes and float lanes.
//!
//! The exponent selects a binary point: integer `n` with exponent `e` maps to
//! `n / 2^e`. Exponents of 32 or more are rejected.

use super::Vector;
use crate::error::{MathError, MathResult};

fn check_exponent(exponent: u32) -> MathResult<f32> {
    if exponent >= 32 {
        return Err(MathError::InvalidExponent { exponent });
    }
    Ok((1u64 << exponent) as f32)
}

impl Vector {
    /// Converts signed fixed-point lanes to floats, dividing by `2^div_exponent`.
    pub fn convert_int_to_float(ints: [i32; 4], div_exponent: u32) -> MathResult<Self> {
        let scale = 1.0 / check_exponent(div_exponent)?;
        Ok(Self::new(
            ints[0] as f32 * scale,
            ints[1] as f32 * scale,
            ints[2] as f32 * scale,
            ints[3] as f32 * scale,
        ))
    }

    /// Converts lanes to signed fixed-point, multiplying by `2^mul_exponent`.
    ///
    /// Results saturate to `i32::MIN` / `i32::MAX`. NaN lanes convert to `0`.
    pub fn convert_float_to_int(self, mul_exponent: u32) -> MathResult<[i32; 4]> {
        let scale = check_exponent(mul_exponent)?;
        let lane = |v: f32| -> i32 {
            let scaled = v * scale;
            if scaled <= -(65536.0 * 32768.0) {
                i32::MIN
            } else if scaled > (65536.0 * 32768.0) - 128.0 {
                i32::MAX
            } else {
                scaled as i32
            }
        };
        Ok([lane(self.x), lane(self.y), lane(self.z), lane(self.w)])
    }

    /// Converts unsigned fixed-point lanes to floats, dividing by `2^div_exponent`.
    pub fn convert_uint_to_float(uints: [u32; 4], div_exponent: u32) -> MathResult<Self> {
        let scale = 1.0 / check_exponent(div_exponent)?;
        Ok(Self::new(
            uints[0] as f32 * scale,
            uints[1] as f32 * scale,
            uints[2] as f32 * scale,
            uints[3] as f32 * scale,
        ))
    }

    /// Converts lanes to unsigned fixed-point, multiplying by `2^mul_exponent`.
    ///
    /// Negative lanes clamp to `0` and large lanes saturate to `u32::MAX`.
    pub fn convert_float_to_uint(self, mul_exponent: u32) -> MathResult<[u32; 4]> {
        let scale = check_exponent(mul_exponent)?;
        let lane = |v: f32| -> u32 {
            let scaled = v * scale;
            if scaled <= 0.0 {
                0
            } else if scaled >= 65536.0 * 65536.0 {
                u32::MAX
            } else {
                scaled as u32
            }
        };
        Ok([lane(self.x), lane(self.y), lane(self.z), lane(self.w)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_to_float() {
        let v = Vector::convert_int_to_float([256, -128, 1, 0], 8).unwrap();
        assert_eq!(v, Vector::new(1.0, -0.5, 1.0 / 256.0, 0.0));
        assert_eq!(
            Vector::convert_int_to_float([0; 4], 32),
            Err(MathError::InvalidExponent { exponent: 32 })
        );
    }

    #[test]
    fn test_float_to_int_saturates() {
        let ints = Vector::new(1.5, -2.75, 1.0e12, -1.0e12)
            .convert_float_to_int(1)
            .unwrap();
        assert_eq!(ints, [3, -5, i32::MAX, i32::MIN]);
        assert!(Vector::ZERO.convert_float_to_int(40).is_err());
    }

    #[test]
    fn test_uint_round_trip() {
        let v = Vector::convert_uint_to_float([4, 8, 0, 2], 2).unwrap();
        assert_eq!(v, Vector::new(1.0, 2.0, 0.0, 0.5));
        assert_eq!(v.convert_float_to_uint(2).unwrap(), [4, 8, 0, 2]);
        assert_eq!(
            Vector::new(-1.0, 1.0e12, 0.0, 3.9)
                .convert_float_to_uint(0)
                .unwrap(),
            [0, u32::MAX, 0, 3]
        );
    }
}
