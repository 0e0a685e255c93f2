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

//! Display-side math: `f32` points, colors and bounds.
//!
//! The integrated state lives in `f64` and only crosses into these types
//! when a frame is handed to a renderer. Angles are in radians.

pub mod color;
pub mod geometry;
pub mod vector;

pub use self::color::LinearRgba;
pub use self::geometry::Aabb;
pub use self::vector::Vec3;

pub use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Converts a field of view or other angle from degrees to radians.
///
/// ```
/// use lorenz_core::math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}
