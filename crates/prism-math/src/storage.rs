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

//! Plain-old-data storage structs for crossing API and memory boundaries.
//!
//! These types carry no algebra. Load them into a [`Vector`] or [`Matrix`] with the
//! `from_storage` constructors, compute, then store the result back.

use crate::matrix::Matrix;
use crate::vector::Vector;

/// Two packed floats.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Float2 {
    /// The `x` component.
    pub x: f32,
    /// The `y` component.
    pub y: f32,
}

/// Three packed floats.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Float3 {
    /// The `x` component.
    pub x: f32,
    /// The `y` component.
    pub y: f32,
    /// The `z` component.
    pub z: f32,
}

/// Four packed floats.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Float4 {
    /// The `x` component.
    pub x: f32,
    /// The `y` component.
    pub y: f32,
    /// The `z` component.
    pub z: f32,
    /// The `w` component.
    pub w: f32,
}

/// Sixteen packed floats in row-major order, `m[row][col]`.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Float4x4 {
    /// The elements, indexed `[row][col]`.
    pub m: [[f32; 4]; 4],
}

impl Float2 {
    /// Creates a new `Float2`.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Loads into a vector with `z = w = 0`.
    #[inline]
    pub const fn load(self) -> Vector {
        Vector::new(self.x, self.y, 0.0, 0.0)
    }

    /// Stores the `xy` lanes of `v`.
    #[inline]
    pub const fn store(v: Vector) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Float3 {
    /// Creates a new `Float3`.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Loads into a vector with `w = 0`.
    #[inline]
    pub const fn load(self) -> Vector {
        Vector::new(self.x, self.y, self.z, 0.0)
    }

    /// Stores the `xyz` lanes of `v`.
    #[inline]
    pub const fn store(v: Vector) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Float4 {
    /// Creates a new `Float4`.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Loads all four lanes.
    #[inline]
    pub const fn load(self) -> Vector {
        Vector::from_storage(self)
    }

    /// Stores all four lanes of `v`.
    #[inline]
    pub const fn store(v: Vector) -> Self {
        v.to_storage()
    }
}

impl Float4x4 {
    /// Loads into a [`Matrix`].
    #[inline]
    pub fn load(self) -> Matrix {
        Matrix::from_storage(self)
    }

    /// Stores a [`Matrix`].
    #[inline]
    pub fn store(m: &Matrix) -> Self {
        m.to_storage()
    }
}
