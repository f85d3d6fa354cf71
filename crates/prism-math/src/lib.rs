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

//! A self-contained `f32` linear-algebra and color-space kernel.
//!
//! The crate is built around a single 4-lane value type, [`Vector`], which doubles
//! as a position, a direction, a quaternion, a plane equation, a color or a select
//! mask depending on the function it is handed to. [`Matrix`] is a row-major 4x4
//! matrix using the row-vector convention: `v' = v * M`, so `a * b` applies `a`
//! first and `b` second.
//!
//! Two error regimes coexist:
//! - contract violations (bad indices, bad selectors, wrong slice lengths) are
//!   reported as [`MathError`];
//! - numeric degeneracies (zero-length normalize, singular inverse) never fail and
//!   instead produce documented sentinel values.
//!
//! All angular functions operate in **radians**.

#![warn(missing_docs)]

/// Checks a builder precondition.
///
/// Expands to `debug_assert!` unless the `strict-preconditions` feature is enabled,
/// in which case the check runs in every profile.
macro_rules! precondition {
    ($($arg:tt)*) => {
        if cfg!(feature = "strict-preconditions") {
            assert!($($arg)*);
        } else {
            debug_assert!($($arg)*);
        }
    };
}

pub mod color;
pub mod error;
pub mod matrix;
pub mod plane;
pub mod quaternion;
pub mod scalar;
pub mod storage;
pub mod vector;

pub use self::error::{DecomposeFailure, MathError, MathResult};
pub use self::matrix::{Decomposition, Matrix};
pub use self::quaternion::SquadControlPoints;
pub use self::storage::{Float2, Float3, Float4, Float4x4};
pub use self::vector::compare::Comparison;
pub use self::vector::vec3::Viewport;
pub use self::vector::{vec2, vec3, vec4, Vector};
