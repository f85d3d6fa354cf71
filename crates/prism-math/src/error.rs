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

//! Error types for the math kernel.
//!
//! Only caller contract violations surface here. Numerically degenerate inputs
//! fall back to sentinel values documented on each operation.

use crate::vector::Vector;
use thiserror::Error;

/// A violated call contract, detected before any computation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A raw float slice did not hold the number of elements the target type needs.
    #[error("expected {expected} floats, got {actual}")]
    InvalidLength {
        /// The exact length required.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },
    /// A lane, row or column index was outside of its valid range.
    #[error("index {index} is out of range (max {max})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The largest valid index.
        max: usize,
    },
    /// A swizzle, permute, select-control or shift selector was out of range.
    #[error("selector {selector} is out of range (max {max})")]
    InvalidSelector {
        /// The offending selector.
        selector: u32,
        /// The largest valid selector.
        max: u32,
    },
    /// A fixed-point conversion exponent was 32 or larger.
    #[error("fixed-point exponent {exponent} must be below 32")]
    InvalidExponent {
        /// The offending exponent.
        exponent: u32,
    },
}

/// A specialized `Result` type for fallible math operations.
pub type MathResult<T> = Result<T, MathError>;

/// Returned by [`Matrix::decompose`](crate::Matrix::decompose) when the upper 3x3
/// block is not a scale-rotation product (shear or projective terms).
///
/// The partial results are preserved. The rotation is always the zero quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("matrix is not a scale-rotation-translation transform")]
pub struct DecomposeFailure {
    /// The extracted scale, with the handedness fix already applied.
    pub scale: Vector,
    /// Always [`Vector::ZERO`].
    pub rotation: Vector,
    /// The translation row.
    pub translation: Vector,
}

/// Validates that `index` does not exceed `max`.
#[inline]
pub(crate) fn check_index(index: usize, max: usize) -> MathResult<()> {
    if index > max {
        Err(MathError::IndexOutOfRange { index, max })
    } else {
        Ok(())
    }
}

/// Validates that `selector` does not exceed `max`.
#[inline]
pub(crate) fn check_selector(selector: u32, max: u32) -> MathResult<()> {
    if selector > max {
        Err(MathError::InvalidSelector { selector, max })
    } else {
        Ok(())
    }
}
