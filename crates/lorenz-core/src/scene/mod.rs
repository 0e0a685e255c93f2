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

//! Static scene description: coordinate axes, arrow heads, ticks and labels.
//!
//! The scene is plain data built once at start-up. Turning a [`TextLabel`] into
//! glyph geometry, or a [`LineSegment`] into a draw call, is the renderer's job.

mod axes;
mod camera;

pub use axes::Axis;
pub use camera::CameraConfig;

use crate::error::ConfigError;
use crate::math::{LinearRgba, Vec3};
use serde::{Deserialize, Serialize};

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// First endpoint.
    pub start: Vec3,
    /// Second endpoint.
    pub end: Vec3,
    /// Line color.
    pub color: LinearRgba,
}

/// A cone marking the end of an axis.
///
/// The cone is modelled pointing along +Y and then rotated by `rotation`
/// (Euler angles in radians, applied X then Y then Z).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowHead {
    /// Center of the cone.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// The outward unit direction the tip points to.
    pub direction: Vec3,
    /// Base radius.
    pub radius: f32,
    /// Height from base to tip.
    pub height: f32,
    /// Number of segments around the base.
    pub radial_segments: u32,
    /// Fill color.
    pub color: LinearRgba,
}

/// A piece of extruded text placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    /// The string to render.
    pub text: String,
    /// Anchor of the text's baseline origin.
    pub position: Vec3,
    /// Glyph height.
    pub size: f32,
    /// Extrusion depth.
    pub depth: f32,
    /// Fill color.
    pub color: LinearRgba,
}

/// How the trajectory polyline is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolylineStyle {
    /// Line color.
    pub color: LinearRgba,
    /// Line width in pixels. Backends that only support 1px lines ignore it.
    pub width: f32,
}

/// Tunables for the static scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Axes span `[-axis_extent, axis_extent]`, with one tick per integer.
    pub axis_extent: u32,
    /// Half the length of a tick mark.
    pub tick_half_size: f32,
    /// Glyph height of tick numbers.
    pub tick_label_size: f32,
    /// Distance of tick numbers from the axis.
    pub tick_label_offset: f32,
    /// Shift of tick numbers along the axis, to center them under the tick.
    pub tick_label_nudge: f32,
    /// Glyph height of the axis names.
    pub axis_label_size: f32,
    /// Gap between the end of an axis and its name.
    pub axis_label_gap: f32,
    /// Extrusion depth of all text.
    pub label_depth: f32,
    /// Arrow head base radius.
    pub arrow_radius: f32,
    /// Arrow head height.
    pub arrow_height: f32,
    /// Arrow head tessellation.
    pub arrow_segments: u32,
    /// Background clear color, packed sRGB.
    pub background: u32,
    /// Trajectory color, packed sRGB.
    pub trajectory_color: u32,
    /// Trajectory line width.
    pub trajectory_width: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            axis_extent: 10,
            tick_half_size: 0.2,
            tick_label_size: 0.3,
            tick_label_offset: 0.5,
            tick_label_nudge: 0.1,
            axis_label_size: 0.4,
            axis_label_gap: 0.5,
            label_depth: 0.01,
            arrow_radius: 0.2,
            arrow_height: 0.5,
            arrow_segments: 32,
            background: 0x000000,
            trajectory_color: 0xffffff,
            trajectory_width: 2.0,
        }
    }
}

impl SceneConfig {
    /// Rejects sizes that would produce an empty or degenerate scene.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.axis_extent == 0 {
            return Err(ConfigError::NonPositiveParameter {
                name: "axis_extent",
                value: 0.0,
            });
        }
        if self.arrow_segments < 3 {
            return Err(ConfigError::NonPositiveParameter {
                name: "arrow_segments",
                value: f64::from(self.arrow_segments),
            });
        }
        let strictly_positive = [
            ("tick_half_size", self.tick_half_size),
            ("tick_label_size", self.tick_label_size),
            ("axis_label_size", self.axis_label_size),
            ("arrow_radius", self.arrow_radius),
            ("arrow_height", self.arrow_height),
            ("trajectory_width", self.trajectory_width),
        ];
        for (name, value) in strictly_positive {
            check_finite(name, value)?;
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveParameter {
                    name,
                    value: f64::from(value),
                });
            }
        }
        for (name, value) in [
            ("tick_label_offset", self.tick_label_offset),
            ("tick_label_nudge", self.tick_label_nudge),
            ("axis_label_gap", self.axis_label_gap),
            ("label_depth", self.label_depth),
        ] {
            check_finite(name, value)?;
        }
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteParameter {
            name,
            value: f64::from(value),
        })
    }
}

/// The complete static part of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescriptor {
    /// Clear color.
    pub background: LinearRgba,
    /// One line per axis.
    pub axes: Vec<LineSegment>,
    /// Two arrow heads per axis.
    pub arrows: Vec<ArrowHead>,
    /// Tick marks on every axis.
    pub ticks: Vec<LineSegment>,
    /// Tick numbers followed by the axis names.
    pub labels: Vec<TextLabel>,
    /// Style of the animated trajectory.
    pub trajectory_style: PolylineStyle,
}

impl SceneDescriptor {
    /// Builds the coordinate system described by `config`.
    pub fn build(config: &SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut scene = Self {
            background: LinearRgba::from_srgb_hex(config.background),
            axes: Vec::with_capacity(Axis::ALL.len()),
            arrows: Vec::with_capacity(Axis::ALL.len() * 2),
            ticks: Vec::new(),
            labels: Vec::new(),
            trajectory_style: PolylineStyle {
                color: LinearRgba::from_srgb_hex(config.trajectory_color),
                width: config.trajectory_width,
            },
        };

        for axis in Axis::ALL {
            scene.axes.push(axis.line(config));
            scene.arrows.extend(axis.arrow_heads(config));
            let (ticks, labels): (Vec<_>, Vec<_>) = axis.ticks(config).unzip();
            scene.ticks.extend(ticks);
            scene.labels.extend(labels);
        }
        // Axis names come after every tick number.
        scene
            .labels
            .extend(Axis::ALL.iter().map(|axis| axis.name_label(config)));

        log::debug!(
            "Scene built: {} axes, {} arrows, {} ticks, {} labels",
            scene.axes.len(),
            scene.arrows.len(),
            scene.ticks.len(),
            scene.labels.len()
        );
        Ok(scene)
    }

    /// Number of static line primitives (axes and ticks).
    pub fn line_count(&self) -> usize {
        self.axes.len() + self.ticks.len()
    }
}

impl Default for SceneDescriptor {
    fn default() -> Self {
        // The default configuration always validates.
        match Self::build(&SceneConfig::default()) {
            Ok(scene) => scene,
            Err(e) => unreachable!("default scene config is invalid: {e}"),
        }
    }
}
