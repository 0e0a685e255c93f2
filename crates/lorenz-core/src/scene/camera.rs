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

use crate::error::ConfigError;
use crate::math::{degrees_to_radians, Vec3};
use serde::{Deserialize, Serialize};

/// Perspective camera placement handed to the renderer.
///
/// Interactive orbiting is left to the host; `orbit_damping` is forwarded as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view, in degrees.
    pub fov_y_degrees: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Eye position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Damping factor for orbit controls.
    pub orbit_damping: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(15.0, 15.0, 15.0),
            target: Vec3::ZERO,
            orbit_damping: 0.05,
        }
    }
}

impl CameraConfig {
    /// Vertical field of view, in radians.
    pub fn fov_y_radians(&self) -> f32 {
        degrees_to_radians(self.fov_y_degrees)
    }

    /// Aspect ratio of a `width` x `height` viewport.
    ///
    /// A zero height (minimized window) yields `1.0` instead of infinity.
    pub fn aspect_ratio(width: u32, height: u32) -> f32 {
        if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        }
    }

    /// Rejects projections that cannot be built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("fov_y_degrees", self.fov_y_degrees),
            ("near", self.near),
            ("far", self.far),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter {
                    name,
                    value: f64::from(value),
                });
            }
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ConfigError::NonPositiveParameter {
                name: "fov_y_degrees",
                value: f64::from(self.fov_y_degrees),
            });
        }
        if self.near <= 0.0 {
            return Err(ConfigError::NonPositiveParameter {
                name: "near",
                value: f64::from(self.near),
            });
        }
        if self.far <= self.near {
            return Err(ConfigError::NonPositiveParameter {
                name: "far",
                value: f64::from(self.far - self.near),
            });
        }
        if !self.position.is_finite() || !self.target.is_finite() {
            return Err(ConfigError::NonFiniteParameter {
                name: "camera position",
                value: f64::from(self.position.length()),
            });
        }
        if !self.orbit_damping.is_finite() {
            return Err(ConfigError::NonFiniteParameter {
                name: "orbit_damping",
                value: f64::from(self.orbit_damping),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_camera_matches_demo() {
        let camera = CameraConfig::default();
        assert!(camera.validate().is_ok());
        assert_relative_eq!(camera.fov_y_radians(), 75.0_f32.to_radians(), epsilon = 1e-6);
        assert_eq!(camera.position, Vec3::new(15.0, 15.0, 15.0));
    }

    #[test]
    fn test_aspect_ratio() {
        assert_relative_eq!(CameraConfig::aspect_ratio(1920, 1080), 16.0 / 9.0, epsilon = 1e-6);
        assert_eq!(CameraConfig::aspect_ratio(800, 0), 1.0);
    }

    #[test]
    fn test_nan_fov_is_reported_as_non_finite() {
        let camera = CameraConfig {
            fov_y_degrees: f32::NAN,
            ..CameraConfig::default()
        };
        assert!(matches!(
            camera.validate(),
            Err(ConfigError::NonFiniteParameter { name: "fov_y_degrees", .. })
        ));

        let camera = CameraConfig {
            far: f32::INFINITY,
            ..CameraConfig::default()
        };
        assert!(matches!(
            camera.validate(),
            Err(ConfigError::NonFiniteParameter { name: "far", .. })
        ));
    }

    #[test]
    fn test_far_must_exceed_near() {
        let camera = CameraConfig {
            near: 10.0,
            far: 5.0,
            ..CameraConfig::default()
        };
        assert!(matches!(
            camera.validate(),
            Err(ConfigError::NonPositiveParameter { name: "far", .. })
        ));
    }
}
