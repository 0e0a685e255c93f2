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

//! Counters and bounds accumulated over the whole run.

use lorenz_core::math::Aabb;
use lorenz_core::{StepEvent, TrajectoryObserver};
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// A point-in-time copy of the trajectory metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    /// Committed steps.
    pub steps: u64,
    /// States pushed out of the trajectory buffer.
    pub evictions: u64,
    /// Bounds of every unscaled state seen, `None` before the first step.
    pub bounds: Option<Aabb>,
    /// Largest distance covered by a single step.
    pub max_step_length: f64,
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            steps: 0,
            evictions: 0,
            bounds: None,
            max_step_length: 0.0,
        }
    }
}

#[derive(Debug, Default)]
struct MetricsState {
    snapshot: MetricsSnapshot,
    last_state: Option<lorenz_core::LorenzState>,
}

/// A shareable metrics collector.
///
/// Clones share the same counters: register one clone with the integrator
/// and keep another to read [`TrajectoryMetrics::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct TrajectoryMetrics {
    inner: Arc<Mutex<MetricsState>>,
}

impl TrajectoryMetrics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner.lock().unwrap().snapshot
    }

    /// Clears every counter.
    pub fn reset(&self) {
        *self.inner.lock().unwrap() = MetricsState::default();
    }
}

impl TrajectoryObserver for TrajectoryMetrics {
    fn on_step(&mut self, event: &StepEvent) {
        let mut state = self.inner.lock().unwrap();
        let point = event.state.scaled(1.0);

        if let Some(previous) = state.last_state {
            let length = previous.distance(&event.state);
            if length > state.snapshot.max_step_length {
                state.snapshot.max_step_length = length;
            }
        }
        state.last_state = Some(event.state);

        let snapshot = &mut state.snapshot;
        snapshot.steps += 1;
        if event.evicted.is_some() {
            snapshot.evictions += 1;
        }
        snapshot.bounds = Some(
            snapshot
                .bounds
                .unwrap_or(Aabb::INVALID)
                .merged_with_point(point),
        );
    }
}
