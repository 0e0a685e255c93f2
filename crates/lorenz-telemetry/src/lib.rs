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

//! Logging and metrics for the Lorenz visualizer.
//!
//! Both observers plug into the integrator through
//! [`lorenz_core::TrajectoryObserver`]; neither is required for it to run.

pub mod logging;
pub mod metrics;
pub mod periodic_log;

pub use logging::init_logging;
pub use metrics::{MetricsSnapshot, TrajectoryMetrics};
pub use periodic_log::PeriodicLogObserver;
