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

use lorenz_core::renderer::{
    validate_trajectory, Frame, RenderError, RenderStats, TrajectoryRenderer,
};
use lorenz_core::scene::CameraConfig;

/// A renderer that validates frames and keeps statistics, without drawing.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    viewport: (u32, u32),
    max_vertices: Option<usize>,
    last_stats: RenderStats,
    frames_rendered: u64,
    is_shut_down: bool,
}

impl HeadlessRenderer {
    /// Creates a renderer for a `width` x `height` viewport.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width, height),
            ..Self::default()
        }
    }

    /// Refuses frames whose polyline is longer than `max_vertices`,
    /// typically the trajectory capacity.
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = Some(max_vertices);
        self
    }

    /// Current viewport size.
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Aspect ratio of the current viewport.
    pub fn aspect_ratio(&self) -> f32 {
        CameraConfig::aspect_ratio(self.viewport.0, self.viewport.1)
    }

    /// Number of frames accepted so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Returns `true` once [`TrajectoryRenderer::shutdown`] has been called.
    pub fn is_shut_down(&self) -> bool {
        self.is_shut_down
    }
}

impl TrajectoryRenderer for HeadlessRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        log::info!("Viewport resized to: {width}x{height}");
        self.viewport = (width, height);
    }

    fn render(&mut self, frame: &Frame<'_>) -> Result<RenderStats, RenderError> {
        if let Some(limit) = self.max_vertices {
            if frame.trajectory.len() > limit {
                return Err(RenderError::TooManyVertices {
                    frame: frame.number,
                    count: frame.trajectory.len(),
                    limit,
                });
            }
        }
        validate_trajectory(frame)?;
        self.last_stats = RenderStats::of(frame);
        self.frames_rendered += 1;
        log::trace!("Frame {} rendered.", frame.number);
        Ok(self.last_stats)
    }

    fn last_frame_stats(&self) -> &RenderStats {
        &self.last_stats
    }

    fn shutdown(&mut self) {
        if !self.is_shut_down {
            log::info!(
                "Headless renderer shutting down after {} frames.",
                self.frames_rendered
            );
            self.is_shut_down = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorenz_core::math::Vec3;
    use lorenz_core::scene::SceneDescriptor;

    fn frame<'a>(
        number: u64,
        scene: &'a SceneDescriptor,
        camera: &'a CameraConfig,
        points: &'a [Vec3],
    ) -> Frame<'a> {
        Frame {
            number,
            rotation_y: 0.0,
            scene,
            camera,
            aspect_ratio: 4.0 / 3.0,
            trajectory: points,
        }
    }

    #[test]
    fn test_render_records_stats() {
        let scene = SceneDescriptor::default();
        let camera = CameraConfig::default();
        let points = vec![Vec3::ONE; 3];
        let mut renderer = HeadlessRenderer::new(800, 600);

        let stats = renderer.render(&frame(1, &scene, &camera, &points)).unwrap();

        assert_eq!(stats.trajectory_vertices, 3);
        assert_eq!(renderer.last_frame_stats(), &stats);
        assert_eq!(renderer.frames_rendered(), 1);
    }

    #[test]
    fn test_non_finite_frame_is_refused() {
        let scene = SceneDescriptor::default();
        let camera = CameraConfig::default();
        let points = vec![Vec3::new(f32::INFINITY, 0.0, 0.0)];
        let mut renderer = HeadlessRenderer::new(800, 600);

        let result = renderer.render(&frame(1, &scene, &camera, &points));
        assert!(matches!(result, Err(RenderError::NonFiniteVertex { index: 0, .. })));
        assert_eq!(renderer.frames_rendered(), 0);
    }

    #[test]
    fn test_vertex_limit() {
        let scene = SceneDescriptor::default();
        let camera = CameraConfig::default();
        let points = vec![Vec3::ZERO; 4];
        let mut renderer = HeadlessRenderer::new(800, 600).with_max_vertices(4);

        assert!(renderer.render(&frame(1, &scene, &camera, &points)).is_ok());

        let result = renderer.render(&frame(2, &scene, &camera, &[Vec3::ZERO; 5]));
        assert!(matches!(
            result,
            Err(RenderError::TooManyVertices {
                frame: 2,
                count: 5,
                limit: 4
            })
        ));
        assert_eq!(renderer.frames_rendered(), 1);
        assert_eq!(renderer.last_frame_stats().frame_number, 1);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut renderer = HeadlessRenderer::new(800, 600);
        renderer.resize(1000, 500);
        assert_eq!(renderer.viewport(), (1000, 500));
        assert_eq!(renderer.aspect_ratio(), 2.0);
    }
}
