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

//! The Lorenz system and its explicit Euler step.
//!
//! ```text
//! dx/dt = σ(y - x)
//! dy/dt = x(ρ - z) - y
//! dz/dt = xy - βz
//! ```
//!
//! Integration runs in `f64`; conversion to display precision happens only
//! through [`LorenzState::scaled`].

use crate::error::ConfigError;
use crate::math::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The constants of the vector field and the integration step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LorenzParams {
    /// Prandtl number σ.
    pub sigma: f64,
    /// Rayleigh number ρ.
    pub rho: f64,
    /// Geometric factor β.
    pub beta: f64,
    /// Fixed time step of the Euler integrator.
    pub dt: f64,
}

impl LorenzParams {
    /// The classic chaotic regime: σ=10, ρ=28, β=8/3, with `dt = 0.005`.
    pub const CLASSIC: Self = Self {
        sigma: 10.0,
        rho: 28.0,
        beta: 8.0 / 3.0,
        dt: 0.005,
    };

    /// Checks that every coefficient is finite and that `dt` is strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("sigma", self.sigma), ("rho", self.rho), ("beta", self.beta)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter { name, value });
            }
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.dt));
        }
        Ok(())
    }
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// A point in the phase space of the Lorenz system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzState {
    /// Convection intensity.
    pub x: f64,
    /// Horizontal temperature difference.
    pub y: f64,
    /// Vertical temperature profile deviation.
    pub z: f64,
}

impl LorenzState {
    /// The origin, a fixed point of the system.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// The starting point of the demo: just off the origin so motion begins.
    pub const DEFAULT_START: Self = Self::new(0.1, 0.0, 0.0);

    /// Creates a new state from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` if no coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Multiplies the state by `scale` and narrows it to a display vertex.
    #[inline]
    pub fn scaled(&self, scale: f64) -> Vec3 {
        Vec3::new(
            (self.x * scale) as f32,
            (self.y * scale) as f32,
            (self.z * scale) as f32,
        )
    }

    /// Euclidean distance to another state.
    pub fn distance(&self, other: &Self) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl Default for LorenzState {
    fn default() -> Self {
        Self::DEFAULT_START
    }
}

impl fmt::Display for LorenzState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Evaluates the Lorenz vector field at `state`.
#[inline]
pub fn derivative(state: &LorenzState, params: &LorenzParams) -> LorenzState {
    LorenzState {
        x: params.sigma * (state.y - state.x),
        y: state.x * (params.rho - state.z) - state.y,
        z: state.x * state.y - params.beta * state.z,
    }
}

/// Advances `state` by one explicit Euler step of `params.dt`.
///
/// All three derivatives are taken from the state before the step.
#[inline]
pub fn euler_step(state: &LorenzState, params: &LorenzParams) -> LorenzState {
    let d = derivative(state, params);
    LorenzState {
        x: state.x + d.x * params.dt,
        y: state.y + d.y * params.dt,
        z: state.z + d.z * params.dt,
    }
}
