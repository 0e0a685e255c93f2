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

use approx::assert_relative_eq;
use lorenz_core::math::{Vec3, TAU};
use lorenz_core::scene::CameraConfig;
use lorenz_core::ConfigError;
use lorenz_sdk::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::sync::{Arc, Mutex};

fn headless(config: &VisualizerConfig) -> Visualizer {
    let (width, height) = config.viewport;
    Visualizer::new(config, Box::new(HeadlessRenderer::new(width, height))).unwrap()
}

fn with_capacity(capacity: usize) -> VisualizerConfig {
    let mut config = VisualizerConfig::default();
    config.integrator.capacity = capacity;
    config
}

#[test]
fn test_each_frame_steps_rotates_and_renders() {
    let mut visualizer = headless(&VisualizerConfig::default());

    let summary = visualizer.run(10).unwrap();

    assert_eq!(summary.frames_rendered, 10);
    assert_eq!(summary.steps, 10);
    assert_eq!(summary.trajectory_len, 10);
    assert!(summary.diverged.is_none());
    assert_eq!(summary.metrics.steps, 10);

    let stats = visualizer.last_frame_stats();
    assert_eq!(stats.frame_number, 10);
    assert_eq!(stats.trajectory_vertices, 10);
    assert_eq!(stats.static_lines, visualizer.scene().line_count());

    assert_relative_eq!(visualizer.rotation_y(), 0.02, epsilon = 1e-6);
}

#[test]
fn test_trajectory_saturates_at_capacity() {
    let mut visualizer = headless(&with_capacity(50));

    let summary = visualizer.run(120).unwrap();

    assert_eq!(summary.steps, 120);
    assert_eq!(summary.trajectory_len, 50);
    assert_eq!(summary.metrics.evictions, 70);
    assert_eq!(visualizer.last_frame_stats().trajectory_vertices, 50);
}

#[test]
fn test_rotation_wraps_around() {
    let mut config = VisualizerConfig::default();
    config.rotation_speed = 4.0;
    let mut visualizer = headless(&config);

    visualizer.tick().unwrap();
    visualizer.tick().unwrap();

    assert_relative_eq!(visualizer.rotation_y(), 8.0 - TAU, epsilon = 1e-5);
}

fn diverging_config() -> VisualizerConfig {
    let mut config = VisualizerConfig::default();
    config.integrator.params.dt = 1.0e3;
    config.integrator.initial_state = LorenzState::new(1.0, 1.0, 1.0);
    config
}

#[test]
fn test_divergence_freezes_trajectory_but_keeps_rendering() {
    let config = diverging_config();
    let (width, height) = config.viewport;
    let renderer =
        HeadlessRenderer::new(width, height).with_max_vertices(config.integrator.capacity);
    let mut visualizer = Visualizer::new(&config, Box::new(renderer)).unwrap();

    let summary = visualizer.run(50).unwrap();

    let Some(IntegrationError::Diverged { step, .. }) = summary.diverged else {
        panic!("expected the integration to diverge");
    };
    assert_eq!(step, summary.steps + 1);
    assert!(summary.steps < 50);
    assert_eq!(summary.trajectory_len as u64, summary.steps);
    assert_eq!(summary.frames_rendered, 50);
    assert_eq!(visualizer.frame_number(), 50);
    assert_eq!(visualizer.last_frame_stats().frame_number, 50);
    assert_eq!(
        visualizer.last_frame_stats().trajectory_vertices,
        summary.trajectory_len
    );
    assert!(visualizer.halted().is_some());
    assert!(visualizer
        .integrator()
        .display_points()
        .iter()
        .all(|p| p.is_finite()));
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SeenView {
    camera: CameraConfig,
    aspect_ratio: f32,
}

/// Remembers the view of every frame it is given.
#[derive(Debug, Default)]
struct ViewRecorder {
    seen: Arc<Mutex<Vec<SeenView>>>,
    stats: RenderStats,
}

impl TrajectoryRenderer for ViewRecorder {
    fn resize(&mut self, _width: u32, _height: u32) {}

    fn render(&mut self, frame: &Frame<'_>) -> Result<RenderStats, RenderError> {
        self.seen.lock().unwrap().push(SeenView {
            camera: *frame.camera,
            aspect_ratio: frame.aspect_ratio,
        });
        self.stats = RenderStats::of(frame);
        Ok(self.stats)
    }

    fn last_frame_stats(&self) -> &RenderStats {
        &self.stats
    }

    fn shutdown(&mut self) {}
}

#[test]
fn test_frames_carry_camera_and_aspect_ratio() {
    let mut config = VisualizerConfig::default();
    config.camera.position = Vec3::new(20.0, 5.0, 20.0);
    config.viewport = (800, 400);

    let recorder = ViewRecorder::default();
    let seen = recorder.seen.clone();
    let mut visualizer = Visualizer::new(&config, Box::new(recorder)).unwrap();

    visualizer.tick().unwrap();
    visualizer.resize(300, 300);
    visualizer.tick().unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].camera, config.camera);
    assert_eq!(seen[0].aspect_ratio, 2.0);
    assert_eq!(seen[1].aspect_ratio, 1.0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = Visualizer::new(&with_capacity(0), Box::new(HeadlessRenderer::default()));
    assert!(matches!(result, Err(ConfigError::ZeroCapacity)));
}

#[test]
fn test_resize_updates_aspect_ratio() {
    let mut visualizer = headless(&VisualizerConfig::default());
    assert_relative_eq!(visualizer.aspect_ratio(), 1280.0 / 720.0);

    visualizer.resize(600, 600);
    assert_eq!(visualizer.aspect_ratio(), 1.0);
}

#[test]
fn test_recording_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frames.jsonl");

    {
        let writer = BufWriter::new(File::create(&path).unwrap());
        let recorder = JsonFrameRecorder::new(writer).with_stride(2);
        let mut visualizer = Visualizer::new(&with_capacity(3), Box::new(recorder)).unwrap();
        visualizer.run(6).unwrap();
        // Dropping the visualizer shuts the recorder down, which flushes the file.
    }

    let frames: Vec<RecordedFrame> = BufReader::new(File::open(&path).unwrap())
        .lines()
        .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
        .collect();

    assert_eq!(
        frames.iter().map(|f| f.frame).collect::<Vec<_>>(),
        vec![2, 4, 6]
    );
    assert_eq!(frames[0].points.len(), 2);
    assert_eq!(frames[2].points.len(), 3);

    // Frame 2 starts with the first step from (0.1, 0, 0), scaled by 0.3.
    let first = frames[0].points[0];
    assert_relative_eq!(first[0], 0.095 * 0.3, epsilon = 1e-6);
    assert_relative_eq!(first[1], 0.014 * 0.3, epsilon = 1e-6);
    assert_eq!(first[2], 0.0);
}

#[test]
fn test_config_file_drives_the_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "integrator": {{ "capacity": 8 }}, "rotation_speed": 0.0, "log_interval": 0 }}"#
    )
    .unwrap();

    let config = VisualizerConfig::load_or_default(Some(file.path())).unwrap();
    let mut visualizer = headless(&config);
    let summary = visualizer.run(20).unwrap();

    assert_eq!(summary.trajectory_len, 8);
    assert_eq!(visualizer.rotation_y(), 0.0);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(VisualizerConfig::load_or_default(Some(&missing)).is_err());
    assert_eq!(
        VisualizerConfig::load_or_default(None).unwrap(),
        VisualizerConfig::default()
    );
}
