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

use lorenz_core::math::Vec3;
use lorenz_core::renderer::{
    validate_trajectory, Frame, RenderError, RenderStats, TrajectoryRenderer,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// One line of a recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    /// Frame counter.
    pub frame: u64,
    /// Scene rotation about Y, in radians.
    pub rotation_y: f32,
    /// Viewport width over height.
    pub aspect_ratio: f32,
    /// Trajectory polyline in display space, oldest first.
    pub points: Vec<[f32; 3]>,
}

/// Writes frames as newline-delimited JSON.
///
/// Only every `every`-th frame is written; the others are validated and
/// counted like any other frame.
pub struct JsonFrameRecorder<W: Write> {
    writer: W,
    every: u64,
    frames_written: u64,
    last_stats: RenderStats,
}

impl<W: Write> JsonFrameRecorder<W> {
    /// Records every frame into `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            every: 1,
            frames_written: 0,
            last_stats: RenderStats::default(),
        }
    }

    /// Records only frames whose number is a multiple of `every` (zero means one).
    pub fn with_stride(mut self, every: u64) -> Self {
        self.every = every.max(1);
        self
    }

    /// Number of frames actually written.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Consumes the recorder and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_frame(&mut self, frame: &Frame<'_>) -> Result<(), RenderError> {
        let record = RecordedFrame {
            frame: frame.number,
            rotation_y: frame.rotation_y,
            aspect_ratio: frame.aspect_ratio,
            points: frame.trajectory.iter().map(|p| Vec3::to_array(*p)).collect(),
        };
        serde_json::to_writer(&mut self.writer, &record).map_err(|e| RenderError::Encode {
            frame: frame.number,
            source: Box::new(e),
        })?;
        self.writer
            .write_all(b"\n")
            .map_err(|source| RenderError::Io {
                frame: frame.number,
                source,
            })?;
        self.frames_written += 1;
        Ok(())
    }
}

impl<W: Write> fmt::Debug for JsonFrameRecorder<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFrameRecorder")
            .field("every", &self.every)
            .field("frames_written", &self.frames_written)
            .field("last_stats", &self.last_stats)
            .finish_non_exhaustive()
    }
}

impl<W: Write> TrajectoryRenderer for JsonFrameRecorder<W> {
    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("JSON recorder ignores resize to {width}x{height}");
    }

    fn render(&mut self, frame: &Frame<'_>) -> Result<RenderStats, RenderError> {
        validate_trajectory(frame)?;
        if frame.number % self.every == 0 {
            self.write_frame(frame)?;
        }
        self.last_stats = RenderStats::of(frame);
        Ok(self.last_stats)
    }

    fn last_frame_stats(&self) -> &RenderStats {
        &self.last_stats
    }

    fn shutdown(&mut self) {
        if let Err(e) = self.writer.flush() {
            log::error!("Failed to flush frame recording: {e}");
        }
        log::info!("Frame recorder wrote {} frames.", self.frames_written);
    }
}
