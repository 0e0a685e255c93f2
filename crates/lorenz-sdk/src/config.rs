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

//! Top-level configuration of the visualizer, loadable from JSON.

use anyhow::{Context, Result};
use lorenz_core::scene::{CameraConfig, SceneConfig};
use lorenz_core::{ConfigError, IntegratorConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every tunable of a visualizer run. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Integrator parameters, initial condition, capacity and display scale.
    pub integrator: IntegratorConfig,
    /// Static scene layout.
    pub scene: SceneConfig,
    /// Camera placement.
    pub camera: CameraConfig,
    /// Scene rotation about Y, in radians per frame.
    pub rotation_speed: f32,
    /// Steps between two position log lines; `0` disables them.
    pub log_interval: u64,
    /// Initial viewport size in pixels.
    pub viewport: (u32, u32),
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::default(),
            scene: SceneConfig::default(),
            camera: CameraConfig::default(),
            rotation_speed: 0.002,
            log_interval: 100,
            viewport: (1280, 720),
        }
    }
}

impl VisualizerConfig {
    /// Parses a configuration from a JSON string and validates it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse visualizer configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file '{}'", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid configuration in '{}'", path.display()))
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => {
                log::info!("No configuration file given, using defaults.");
                Ok(Self::default())
            }
        }
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize visualizer configuration")
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.integrator.validate()?;
        self.scene.validate()?;
        self.camera.validate()?;
        if !self.rotation_speed.is_finite() {
            return Err(ConfigError::NonFiniteParameter {
                name: "rotation_speed",
                value: f64::from(self.rotation_speed),
            });
        }
        Ok(())
    }
}
