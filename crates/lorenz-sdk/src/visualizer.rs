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

//! The frame loop: one integration step, one scene rotation and one render per frame.

use crate::config::VisualizerConfig;
use lorenz_core::math::{Vec3, TAU};
use lorenz_core::renderer::{Frame, RenderError, RenderStats, TrajectoryRenderer};
use lorenz_core::scene::{CameraConfig, SceneDescriptor};
use lorenz_core::{ConfigError, IntegrationError, TrajectoryIntegrator, TrajectoryObserver};
use lorenz_telemetry::{MetricsSnapshot, PeriodicLogObserver, TrajectoryMetrics};
use std::time::{Duration, Instant};

/// What a call to [`Visualizer::run`] did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Frames presented during the run.
    pub frames_rendered: u64,
    /// Integration steps committed since the visualizer was created.
    pub steps: u64,
    /// Points in the trajectory at the end of the run.
    pub trajectory_len: usize,
    /// Set if the integration diverged; the trajectory stopped growing there.
    pub diverged: Option<IntegrationError>,
    /// Telemetry gathered since the visualizer was created.
    pub metrics: MetricsSnapshot,
    /// Wall-clock time spent in the run.
    pub elapsed: Duration,
}

/// Drives a [`TrajectoryIntegrator`] and presents it through a [`TrajectoryRenderer`].
pub struct Visualizer {
    integrator: TrajectoryIntegrator,
    scene: SceneDescriptor,
    camera: CameraConfig,
    aspect_ratio: f32,
    rotation_y: f32,
    rotation_speed: f32,
    renderer: Box<dyn TrajectoryRenderer>,
    metrics: TrajectoryMetrics,
    frame_number: u64,
    halted: Option<IntegrationError>,
    display_points: Vec<Vec3>,
}

impl Visualizer {
    /// Builds the integrator, the scene and the telemetry observers from `config`.
    pub fn new(
        config: &VisualizerConfig,
        mut renderer: Box<dyn TrajectoryRenderer>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let metrics = TrajectoryMetrics::new();
        let mut integrator =
            TrajectoryIntegrator::new(&config.integrator)?.with_observer(Box::new(metrics.clone()));
        if config.log_interval > 0 {
            integrator.add_observer(Box::new(PeriodicLogObserver::new(config.log_interval)));
        }

        let scene = SceneDescriptor::build(&config.scene)?;
        let (width, height) = config.viewport;
        renderer.resize(width, height);

        log::info!(
            "Visualizer ready: {} static lines, {} labels, trajectory capacity {}.",
            scene.line_count(),
            scene.labels.len(),
            config.integrator.capacity
        );

        Ok(Self {
            integrator,
            scene,
            camera: config.camera,
            aspect_ratio: CameraConfig::aspect_ratio(width, height),
            rotation_y: 0.0,
            rotation_speed: config.rotation_speed,
            renderer,
            metrics,
            frame_number: 0,
            halted: None,
            display_points: Vec::with_capacity(config.integrator.capacity.min(1 << 16)),
        })
    }

    /// Registers an additional observer on the integrator.
    pub fn add_observer(&mut self, observer: Box<dyn TrajectoryObserver>) {
        self.integrator.add_observer(observer);
    }

    /// Runs one frame.
    ///
    /// Once the integration has diverged the trajectory is frozen: later
    /// frames keep rotating and rendering the last valid points.
    pub fn tick(&mut self) -> Result<RenderStats, RenderError> {
        self.frame_number += 1;

        if self.halted.is_none() {
            if let Err(e) = self.integrator.step() {
                log::error!("{e}. The trajectory will no longer advance.");
                self.halted = Some(e);
            }
        }

        self.rotation_y = (self.rotation_y + self.rotation_speed).rem_euclid(TAU);
        self.integrator.fill_display_points(&mut self.display_points);

        self.renderer.render(&Frame {
            number: self.frame_number,
            rotation_y: self.rotation_y,
            scene: &self.scene,
            camera: &self.camera,
            aspect_ratio: self.aspect_ratio,
            trajectory: &self.display_points,
        })
    }

    /// Runs `frames` frames and reports what happened.
    pub fn run(&mut self, frames: u64) -> Result<RunSummary, RenderError> {
        log::info!("Running {frames} frames...");
        let start = Instant::now();
        for _ in 0..frames {
            self.tick()?;
        }
        let summary = RunSummary {
            frames_rendered: frames,
            steps: self.integrator.steps(),
            trajectory_len: self.integrator.trajectory().len(),
            diverged: self.halted.clone(),
            metrics: self.metrics.snapshot(),
            elapsed: start.elapsed(),
        };
        log::info!(
            "Run complete: {} frames in {:.2?}, {} steps, {} points kept.",
            summary.frames_rendered,
            summary.elapsed,
            summary.steps,
            summary.trajectory_len
        );
        Ok(summary)
    }

    /// Forwards a viewport change to the renderer and updates the aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect_ratio = CameraConfig::aspect_ratio(width, height);
        self.renderer.resize(width, height);
    }

    /// The integrator being driven.
    pub fn integrator(&self) -> &TrajectoryIntegrator {
        &self.integrator
    }

    /// The static scene.
    pub fn scene(&self) -> &SceneDescriptor {
        &self.scene
    }

    /// The camera placement.
    pub fn camera(&self) -> &CameraConfig {
        &self.camera
    }

    /// Aspect ratio of the current viewport.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Current scene rotation about Y, in `[0, TAU)`.
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Number of frames run so far.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// The divergence that froze the trajectory, if any.
    pub fn halted(&self) -> Option<&IntegrationError> {
        self.halted.as_ref()
    }

    /// Current telemetry.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Statistics of the last presented frame.
    pub fn last_frame_stats(&self) -> &RenderStats {
        self.renderer.last_frame_stats()
    }
}

impl std::fmt::Debug for Visualizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visualizer")
            .field("integrator", &self.integrator)
            .field("renderer", &self.renderer)
            .field("rotation_y", &self.rotation_y)
            .field("frame_number", &self.frame_number)
            .field("halted", &self.halted)
            .finish_non_exhaustive()
    }
}

impl Drop for Visualizer {
    fn drop(&mut self) {
        log::info!("Visualizer is being dropped. Shutting down the renderer...");
        self.renderer.shutdown();
    }
}
