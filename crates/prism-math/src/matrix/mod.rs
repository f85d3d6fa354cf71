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

//! Defines the row-major [`Matrix`] type and its algebra.
//!
//! Builders live in the [`transform`] and [`projection`] submodules, decomposition
//! into scale, rotation and translation in [`decompose`].

use crate::error::{check_index, MathError, MathResult};
use crate::storage::Float4x4;
use crate::vector::{vec4, Vector};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::ops::{Add, Div, Mul, Neg, Sub};

pub mod decompose;
pub mod projection;
pub mod transform;

pub use self::decompose::{Decomposition, DECOMPOSE_EPSILON};

/// A 4x4 row-major matrix.
///
/// Points are row vectors transformed as `v' = v * M`, so translation lives in row 3
/// and `a * b` applies `a` first, then `b`.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Matrix {
    /// The four rows. `r[3]` carries the translation of an affine transform.
    pub r: [Vector; 4],
}

impl Matrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        r: [
            Vector::IDENTITY_R0,
            Vector::IDENTITY_R1,
            Vector::IDENTITY_R2,
            Vector::IDENTITY_R3,
        ],
    };

    /// A matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        r: [Vector::ZERO; 4],
    };

    /// Creates a matrix from sixteen scalars in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            r: [
                Vector::new(m00, m01, m02, m03),
                Vector::new(m10, m11, m12, m13),
                Vector::new(m20, m21, m22, m23),
                Vector::new(m30, m31, m32, m33),
            ],
        }
    }

    /// Creates a matrix from four row vectors.
    #[inline]
    pub const fn from_rows(r0: Vector, r1: Vector, r2: Vector, r3: Vector) -> Self {
        Self {
            r: [r0, r1, r2, r3],
        }
    }

    /// Loads a matrix from exactly sixteen floats in row-major order.
    pub fn from_slice(elements: &[f32]) -> MathResult<Self> {
        if elements.len() != 16 {
            return Err(MathError::InvalidLength {
                expected: 16,
                actual: elements.len(),
            });
        }
        let mut m = Self::ZERO;
        for (row, chunk) in m.r.iter_mut().zip(elements.chunks_exact(4)) {
            *row = Vector::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        }
        Ok(m)
    }

    /// Loads a matrix from packed storage.
    #[inline]
    pub const fn from_storage(storage: Float4x4) -> Self {
        let m = storage.m;
        Self {
            r: [
                Vector::from_array(m[0]),
                Vector::from_array(m[1]),
                Vector::from_array(m[2]),
                Vector::from_array(m[3]),
            ],
        }
    }

    /// Stores the matrix into packed storage.
    #[inline]
    pub const fn to_storage(&self) -> Float4x4 {
        Float4x4 {
            m: [
                self.r[0].to_array(),
                self.r[1].to_array(),
                self.r[2].to_array(),
                self.r[3].to_array(),
            ],
        }
    }

    /// Flattens the matrix into sixteen floats in row-major order.
    pub fn to_flat(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (chunk, row) in out.chunks_exact_mut(4).zip(self.r.iter()) {
            chunk.copy_from_slice(&row.to_array());
        }
        out
    }

    /// Reads the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> MathResult<f32> {
        check_index(row, 3)?;
        check_index(col, 3)?;
        Ok(self.r[row][col])
    }

    /// Returns a copy with the element at `(row, col)` replaced.
    pub fn with_element(mut self, row: usize, col: usize, value: f32) -> MathResult<Self> {
        check_index(row, 3)?;
        check_index(col, 3)?;
        self.r[row][col] = value;
        Ok(self)
    }

    /// The product `m1 * m2`: transforming by the result applies `m1` then `m2`.
    #[inline]
    pub fn multiply(m1: &Matrix, m2: &Matrix) -> Matrix {
        Matrix {
            r: m1.r.map(|row| vec4::transform(row, m2)),
        }
    }

    /// The transpose of `m1 * m2`.
    #[inline]
    pub fn multiply_transpose(m1: &Matrix, m2: &Matrix) -> Matrix {
        Self::multiply(m1, m2).transpose()
    }

    /// Swaps rows and columns. Elements are copied bit for bit.
    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        let [r0, r1, r2, r3] = self.r;
        Self::new(
            r0.x, r1.x, r2.x, r3.x,
            r0.y, r1.y, r2.y, r3.y,
            r0.z, r1.z, r2.z, r3.z,
            r0.w, r1.w, r2.w, r3.w,
        )
    }

    /// The determinant, replicated to all four lanes.
    pub fn determinant(&self) -> Vector {
        Vector::splat(Minors::of(self).determinant())
    }

    /// Computes the inverse and the determinant.
    ///
    /// A singular matrix does not fail: the returned determinant is zero and the
    /// returned matrix holds infinities and NaNs. Callers that care check the
    /// determinant.
    pub fn inverse(&self) -> (Matrix, Vector) {
        let minors = Minors::of(self);
        let det = minors.determinant();
        if det == 0.0 {
            log::trace!("Inverting a singular matrix; the result is not finite.");
        }
        let inv_det = 1.0 / det;
        let adjugate = minors.adjugate(self);
        let inverse = Matrix {
            r: adjugate.r.map(|row| row * inv_det),
        };
        (inverse, Vector::splat(det))
    }

    /// Returns `true` if any element is NaN.
    pub fn is_nan(&self) -> bool {
        self.r.iter().any(|row| vec4::is_nan(*row))
    }

    /// Returns `true` if any element is positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        self.r.iter().any(|row| vec4::is_infinite(*row))
    }

    /// Returns `true` if the matrix is exactly the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns `true` if every element lies within `epsilon` of its counterpart.
    pub fn near_equal(&self, other: &Matrix, epsilon: f32) -> bool {
        let epsilon = Vector::splat(epsilon);
        self.r
            .iter()
            .zip(other.r.iter())
            .all(|(a, b)| vec4::near_equal(*a, *b, epsilon))
    }
}

/// The twelve 2x2 minors of the top and bottom row pairs.
struct Minors {
    s: [f32; 6],
    c: [f32; 6],
}

impl Minors {
    fn of(m: &Matrix) -> Self {
        let a = m.to_storage().m;
        Self {
            s: [
                a[0][0] * a[1][1] - a[1][0] * a[0][1],
                a[0][0] * a[1][2] - a[1][0] * a[0][2],
                a[0][0] * a[1][3] - a[1][0] * a[0][3],
                a[0][1] * a[1][2] - a[1][1] * a[0][2],
                a[0][1] * a[1][3] - a[1][1] * a[0][3],
                a[0][2] * a[1][3] - a[1][2] * a[0][3],
            ],
            c: [
                a[2][0] * a[3][1] - a[3][0] * a[2][1],
                a[2][0] * a[3][2] - a[3][0] * a[2][2],
                a[2][0] * a[3][3] - a[3][0] * a[2][3],
                a[2][1] * a[3][2] - a[3][1] * a[2][2],
                a[2][1] * a[3][3] - a[3][1] * a[2][3],
                a[2][2] * a[3][3] - a[3][2] * a[2][3],
            ],
        }
    }

    fn determinant(&self) -> f32 {
        let (s, c) = (&self.s, &self.c);
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    fn adjugate(&self, m: &Matrix) -> Matrix {
        let a = m.to_storage().m;
        let (s, c) = (&self.s, &self.c);
        Matrix::new(
            a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3],
            -a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3],
            a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3],
            -a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3],
            -a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1],
            a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1],
            -a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1],
            a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1],
            a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0],
            -a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0],
            a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0],
            -a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0],
            -a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0],
            a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0],
            -a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0],
            a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0],
        )
    }
}

// --- Operator Overloads ---

impl Mul for Matrix {
    type Output = Self;
    /// Concatenates two transforms: `self` is applied first.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::multiply(&self, &rhs)
    }
}

impl Mul<f32> for Matrix {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            r: self.r.map(|row| row * rhs),
        }
    }
}

impl Div<f32> for Matrix {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self {
            r: self.r.map(|row| row / rhs),
        }
    }
}

impl Add for Matrix {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: [
                self.r[0] + rhs.r[0],
                self.r[1] + rhs.r[1],
                self.r[2] + rhs.r[2],
                self.r[3] + rhs.r[3],
            ],
        }
    }
}

impl Sub for Matrix {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Neg for Matrix {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            r: self.r.map(|row| -row),
        }
    }
}

// --- Approximate Equality ---

impl AbsDiffEq for Matrix {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.r
            .iter()
            .zip(other.r.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.r
            .iter()
            .zip(other.r.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Matrix {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.r
            .iter()
            .zip(other.r.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
