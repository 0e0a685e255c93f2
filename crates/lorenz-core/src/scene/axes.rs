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

use super::{ArrowHead, LineSegment, SceneConfig, TextLabel};
use crate::math::{LinearRgba, Vec3, FRAC_PI_2, PI};
use serde::{Deserialize, Serialize};

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// The red axis.
    X,
    /// The green axis.
    Y,
    /// The blue axis.
    Z,
}

impl Axis {
    /// All axes, in drawing order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along the positive direction of the axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// The direction tick marks extend in, and tick numbers are offset along.
    fn tick_direction(self) -> Vec3 {
        match self {
            Axis::X | Axis::Z => Vec3::Y,
            Axis::Y => Vec3::X,
        }
    }

    /// Packed sRGB color of the axis.
    pub fn srgb(self) -> u32 {
        match self {
            Axis::X => 0xff0000,
            Axis::Y => 0x00ff00,
            Axis::Z => 0x0000ff,
        }
    }

    /// Linear color of the axis.
    pub fn color(self) -> LinearRgba {
        LinearRgba::from_srgb_hex(self.srgb())
    }

    /// Lower-case name, as written next to the axis.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Euler rotation turning a +Y cone to point along `+axis` (`positive`) or `-axis`.
    fn arrow_rotation(self, positive: bool) -> Vec3 {
        match (self, positive) {
            (Axis::X, true) => Vec3::new(0.0, 0.0, -FRAC_PI_2),
            (Axis::X, false) => Vec3::new(0.0, 0.0, FRAC_PI_2),
            (Axis::Y, true) => Vec3::ZERO,
            (Axis::Y, false) => Vec3::new(PI, 0.0, 0.0),
            (Axis::Z, true) => Vec3::new(FRAC_PI_2, 0.0, 0.0),
            (Axis::Z, false) => Vec3::new(-FRAC_PI_2, 0.0, 0.0),
        }
    }

    pub(super) fn line(self, config: &SceneConfig) -> LineSegment {
        let end = self.unit() * config.axis_extent as f32;
        LineSegment {
            start: -end,
            end,
            color: self.color(),
        }
    }

    pub(super) fn arrow_heads(self, config: &SceneConfig) -> [ArrowHead; 2] {
        let extent = config.axis_extent as f32;
        [true, false].map(|positive| {
            let direction = if positive { self.unit() } else { -self.unit() };
            ArrowHead {
                position: direction * extent,
                rotation: self.arrow_rotation(positive),
                direction,
                radius: config.arrow_radius,
                height: config.arrow_height,
                radial_segments: config.arrow_segments,
                color: self.color(),
            }
        })
    }

    /// One tick mark and its number for every non-zero integer on the axis.
    pub(super) fn ticks(
        self,
        config: &SceneConfig,
    ) -> impl Iterator<Item = (LineSegment, TextLabel)> {
        let config = *config;
        let extent = config.axis_extent as i32;
        let along = self.unit();
        let across = self.tick_direction();
        let color = self.color();

        (-extent..=extent).filter(|&i| i != 0).map(move |i| {
            let at = along * i as f32;
            let tick = LineSegment {
                start: at - across * config.tick_half_size,
                end: at + across * config.tick_half_size,
                color,
            };
            let label = TextLabel {
                text: i.abs().to_string(),
                position: along * (i as f32 - config.tick_label_nudge)
                    - across * config.tick_label_offset,
                size: config.tick_label_size,
                depth: config.label_depth,
                color,
            };
            (tick, label)
        })
    }

    pub(super) fn name_label(self, config: &SceneConfig) -> TextLabel {
        TextLabel {
            text: self.name().to_string(),
            position: self.unit() * (config.axis_extent as f32 + config.axis_label_gap),
            size: config.axis_label_size,
            depth: config.label_depth,
            color: self.color(),
        }
    }
}
