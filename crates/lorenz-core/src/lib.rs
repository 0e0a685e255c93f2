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

//! # Lorenz Core
//!
//! Foundational crate containing the Lorenz dynamics, the bounded trajectory
//! buffer, the integrator that ties them together, the static scene
//! description and the contracts renderers have to fulfil.

#![warn(missing_docs)]

pub mod dynamics;
pub mod error;
pub mod integrator;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod trajectory;

pub use dynamics::{LorenzParams, LorenzState};
pub use error::{ConfigError, IntegrationError};
pub use integrator::{IntegratorConfig, StepEvent, TrajectoryIntegrator, TrajectoryObserver};
pub use trajectory::TrajectoryBuffer;
