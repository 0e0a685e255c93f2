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

//! Error types for configuration and integration.
//!
//! Rendering failures live with the renderer contract in [`crate::renderer`].

use crate::dynamics::LorenzState;
use thiserror::Error;

/// A configuration value was rejected before any step was executed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The integration time step is zero, negative, or not finite.
    #[error("time step must be finite and strictly positive, got {0}")]
    InvalidTimeStep(f64),

    /// The trajectory buffer would not be able to hold a single point.
    #[error("trajectory capacity must be at least 1")]
    ZeroCapacity,

    /// A numeric parameter is NaN or infinite.
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A parameter that must be strictly positive is not.
    #[error("parameter `{name}` must be strictly positive, got {value}")]
    NonPositiveParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The initial condition contains NaN or infinity.
    #[error("initial state must be finite, got {0}")]
    NonFiniteInitialState(LorenzState),
}

/// The integrator refused to advance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    /// The Euler step produced a state that is non-finite, or whose display
    /// point no longer fits in `f32`. This usually means `dt` is too large for
    /// the chosen coefficients. The rejected state is reported but never
    /// committed.
    #[error("integration diverged at step {step}: {state}")]
    Diverged {
        /// The 1-based index of the step that was rejected.
        step: u64,
        /// The state the step would have produced.
        state: LorenzState,
    },
}
