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

//! Colors of scene elements.

use serde::{Deserialize, Serialize};

/// An RGBA color in linear space.
///
/// Scene colors are authored as packed sRGB hex values (`0xff0000`) and
/// converted once, when the scene is built.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct LinearRgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Opacity.
    pub a: f32,
}

impl LinearRgba {
    /// The X axis color.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// The Y axis color.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// The Z axis color.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// The trajectory color.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// The background color.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Builds an opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates an opaque color from a packed sRGB `0xRRGGBB` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lorenz_core::math::LinearRgba;
    /// assert_eq!(LinearRgba::from_srgb_hex(0x00ff00), LinearRgba::GREEN);
    /// ```
    pub fn from_srgb_hex(hex: u32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
        Self::rgb(channel(16), channel(8), channel(0))
    }
}

impl Default for LinearRgba {
    fn default() -> Self {
        Self::WHITE
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hex_values() {
        assert_eq!(LinearRgba::from_srgb_hex(0xff0000), LinearRgba::RED);
        assert_eq!(LinearRgba::from_srgb_hex(0x0000ff), LinearRgba::BLUE);
        assert_eq!(LinearRgba::from_srgb_hex(0xffffff), LinearRgba::WHITE);
        assert_eq!(LinearRgba::from_srgb_hex(0x000000), LinearRgba::BLACK);
    }

    #[test]
    fn test_mid_gray_is_darker_in_linear_space() {
        let gray = LinearRgba::from_srgb_hex(0x808080);
        assert!(gray.r > 0.2 && gray.r < 0.22);
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.a, 1.0);
    }
}
