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

//! The public-facing entry point of the Lorenz visualizer.
//! It ties the integrator, the scene and a renderer together into a frame
//! loop, and loads everything from a single configuration file.

pub mod config;
pub mod renderers;
pub mod visualizer;

pub use config::VisualizerConfig;
pub use visualizer::{RunSummary, Visualizer};

pub mod prelude {
    pub use crate::renderers::{HeadlessRenderer, JsonFrameRecorder, RecordedFrame};
    pub use crate::{RunSummary, Visualizer, VisualizerConfig};
    pub use lorenz_core::renderer::{Frame, RenderError, RenderStats, TrajectoryRenderer};
    pub use lorenz_core::{
        IntegrationError, IntegratorConfig, LorenzParams, LorenzState, StepEvent,
        TrajectoryObserver,
    };
}
