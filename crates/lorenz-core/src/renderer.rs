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

//! The contract between the frame loop and whatever presents the scene.

use crate::math::Vec3;
use crate::scene::{CameraConfig, SceneDescriptor};
use thiserror::Error;

/// Everything a renderer needs to present one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Monotonic frame counter, starting at 1.
    pub number: u64,
    /// Rotation of the whole scene about the Y axis, in radians.
    pub rotation_y: f32,
    /// The static part of the scene.
    pub scene: &'a SceneDescriptor,
    /// Where the scene is looked at from.
    pub camera: &'a CameraConfig,
    /// Width over height of the current viewport.
    pub aspect_ratio: f32,
    /// The trajectory polyline in display space, oldest point first.
    pub trajectory: &'a [Vec3],
}

/// Statistics reported by a renderer for the last frame it presented.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderStats {
    /// The frame these statistics belong to.
    pub frame_number: u64,
    /// Vertices in the trajectory polyline.
    pub trajectory_vertices: usize,
    /// Static line primitives (axes and ticks).
    pub static_lines: usize,
    /// Text labels.
    pub labels: usize,
}

impl RenderStats {
    /// Collects the counts of `frame`.
    pub fn of(frame: &Frame<'_>) -> Self {
        Self {
            frame_number: frame.number,
            trajectory_vertices: frame.trajectory.len(),
            static_lines: frame.scene.line_count(),
            labels: frame.scene.labels.len(),
        }
    }
}

/// A frame could not be presented.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A trajectory vertex is NaN or infinite.
    #[error("trajectory vertex {index} of frame {frame} is not finite: {point:?}")]
    NonFiniteVertex {
        /// The frame being rendered.
        frame: u64,
        /// Position of the vertex in the polyline.
        index: usize,
        /// The offending vertex.
        point: Vec3,
    },

    /// The polyline holds more vertices than the renderer accepts.
    #[error("frame {frame} has {count} trajectory vertices, the limit is {limit}")]
    TooManyVertices {
        /// The frame being rendered.
        frame: u64,
        /// Vertices in the polyline.
        count: usize,
        /// The renderer's limit.
        limit: usize,
    },

    /// Writing the frame to its destination failed.
    #[error("failed to write frame {frame}")]
    Io {
        /// The frame being rendered.
        frame: u64,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Encoding the frame failed.
    #[error("failed to encode frame {frame}")]
    Encode {
        /// The frame being rendered.
        frame: u64,
        /// The underlying encoder error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Checks that every trajectory vertex of `frame` is finite.
pub fn validate_trajectory(frame: &Frame<'_>) -> Result<(), RenderError> {
    match frame.trajectory.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(RenderError::NonFiniteVertex {
            frame: frame.number,
            index,
            point: frame.trajectory[index],
        }),
        None => Ok(()),
    }
}

/// A presentation backend.
pub trait TrajectoryRenderer: std::fmt::Debug {
    /// Informs the renderer that the viewport changed size.
    fn resize(&mut self, width: u32, height: u32);

    /// Presents one frame.
    fn render(&mut self, frame: &Frame<'_>) -> Result<RenderStats, RenderError>;

    /// Statistics of the last successfully presented frame.
    fn last_frame_stats(&self) -> &RenderStats;

    /// Releases resources. Called once, when the frame loop is torn down.
    fn shutdown(&mut self);
}
