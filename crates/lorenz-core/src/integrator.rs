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

//! The trajectory integrator: one Euler step per frame into a bounded history.

use crate::dynamics::{self, LorenzParams, LorenzState};
use crate::error::{ConfigError, IntegrationError};
use crate::math::Vec3;
use crate::trajectory::TrajectoryBuffer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything needed to build a [`TrajectoryIntegrator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegratorConfig {
    /// Vector field coefficients and time step.
    pub params: LorenzParams,
    /// The state the integration starts from.
    pub initial_state: LorenzState,
    /// Maximum number of states kept in the trajectory.
    pub capacity: usize,
    /// Uniform factor applied to states when they are handed to a renderer.
    pub scale: f64,
}

impl IntegratorConfig {
    /// Default trajectory length.
    pub const DEFAULT_CAPACITY: usize = 5000;
    /// Default display scale.
    pub const DEFAULT_SCALE: f64 = 0.3;

    /// Rejects configurations that cannot produce a finite, bounded trajectory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.scale.is_finite() {
            return Err(ConfigError::NonFiniteParameter {
                name: "scale",
                value: self.scale,
            });
        }
        if self.scale <= 0.0 {
            return Err(ConfigError::NonPositiveParameter {
                name: "scale",
                value: self.scale,
            });
        }
        if !self.initial_state.is_finite() {
            return Err(ConfigError::NonFiniteInitialState(self.initial_state));
        }
        Ok(())
    }
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            params: LorenzParams::CLASSIC,
            initial_state: LorenzState::DEFAULT_START,
            capacity: Self::DEFAULT_CAPACITY,
            scale: Self::DEFAULT_SCALE,
        }
    }
}

/// What happened during one successful step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEvent {
    /// 1-based index of the step.
    pub step: u64,
    /// The new, unscaled state.
    pub state: LorenzState,
    /// Number of states in the trajectory before the new one was appended.
    pub len_before: usize,
    /// The state pushed out of the trajectory, if it was full.
    pub evicted: Option<LorenzState>,
}

/// A hook notified after every committed step.
///
/// Observers see the integrator's data but cannot alter it.
pub trait TrajectoryObserver: Send {
    /// Called once per successful step, in registration order.
    fn on_step(&mut self, event: &StepEvent);
}

/// Owns the Lorenz state and its bounded history.
pub struct TrajectoryIntegrator {
    params: LorenzParams,
    scale: f64,
    state: LorenzState,
    trajectory: TrajectoryBuffer,
    steps: u64,
    observers: Vec<Box<dyn TrajectoryObserver>>,
}

impl TrajectoryIntegrator {
    /// Validates `config` and creates an integrator positioned at its initial state.
    ///
    /// The trajectory starts empty; the initial state itself is not recorded.
    pub fn new(config: &IntegratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let trajectory = TrajectoryBuffer::new(config.capacity)?;
        log::debug!(
            "Integrator created: sigma={}, rho={}, beta={}, dt={}, capacity={}",
            config.params.sigma,
            config.params.rho,
            config.params.beta,
            config.params.dt,
            config.capacity
        );
        Ok(Self {
            params: config.params,
            scale: config.scale,
            state: config.initial_state,
            trajectory,
            steps: 0,
            observers: Vec::new(),
        })
    }

    /// Registers an observer, builder style.
    pub fn with_observer(mut self, observer: Box<dyn TrajectoryObserver>) -> Self {
        self.add_observer(observer);
        self
    }

    /// Registers an observer.
    pub fn add_observer(&mut self, observer: Box<dyn TrajectoryObserver>) {
        self.observers.push(observer);
    }

    /// Advances the state by one Euler step, records it, and returns the scaled
    /// display point.
    ///
    /// # Errors
    /// Returns [`IntegrationError::Diverged`] if the step would produce a
    /// non-finite state or a display point outside the `f32` range. Nothing
    /// is committed in that case.
    pub fn step(&mut self) -> Result<Vec3, IntegrationError> {
        let next = dynamics::euler_step(&self.state, &self.params);
        let point = next.scaled(self.scale);
        if !next.is_finite() || !point.is_finite() {
            return Err(IntegrationError::Diverged {
                step: self.steps + 1,
                state: next,
            });
        }

        self.state = next;
        self.steps += 1;

        let len_before = self.trajectory.len();
        let evicted = self.trajectory.append_and_evict(next);

        let event = StepEvent {
            step: self.steps,
            state: next,
            len_before,
            evicted,
        };
        for observer in &mut self.observers {
            observer.on_step(&event);
        }

        Ok(point)
    }

    /// Copies the scaled trajectory, oldest first, into `out`.
    ///
    /// `out` is cleared first so a per-frame buffer can be reused.
    pub fn fill_display_points(&self, out: &mut Vec<Vec3>) {
        out.clear();
        out.extend(self.trajectory.scaled_points(self.scale));
    }

    /// The scaled trajectory, oldest first.
    pub fn display_points(&self) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(self.trajectory.len());
        self.fill_display_points(&mut out);
        out
    }

    /// The current unscaled state.
    pub fn state(&self) -> LorenzState {
        self.state
    }

    /// The fixed parameters.
    pub fn params(&self) -> &LorenzParams {
        &self.params
    }

    /// The display scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The recorded history of unscaled states.
    pub fn trajectory(&self) -> &TrajectoryBuffer {
        &self.trajectory
    }

    /// Number of committed steps.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl fmt::Debug for TrajectoryIntegrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrajectoryIntegrator")
            .field("params", &self.params)
            .field("scale", &self.scale)
            .field("state", &self.state)
            .field("trajectory_len", &self.trajectory.len())
            .field("steps", &self.steps)
            .field("observers", &self.observers.len())
            .finish()
    }
}
