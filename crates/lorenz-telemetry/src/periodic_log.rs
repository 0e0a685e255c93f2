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

//! Periodic dump of the integrator position.

use lorenz_core::{StepEvent, TrajectoryObserver};
use log::Level;

/// Logs the current position and point count every `interval` steps.
///
/// The first step is always logged, then steps `1 + k * interval`.
///
/// This differs from the demo this visualizer reproduces, which logged when
/// the point count was a multiple of the interval and therefore logged on
/// every frame once the trajectory was full.
#[derive(Debug, Clone)]
pub struct PeriodicLogObserver {
    interval: u64,
    level: Level,
    emitted: u64,
}

impl PeriodicLogObserver {
    /// Default number of steps between two log lines.
    pub const DEFAULT_INTERVAL: u64 = 100;

    /// Creates an observer logging at `debug` level every `interval` steps.
    ///
    /// An interval of zero is treated as one.
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            level: Level::Debug,
            emitted: 0,
        }
    }

    /// Changes the level the lines are emitted at.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns `true` if `step` falls on the logging cadence.
    pub fn is_due(&self, step: u64) -> bool {
        step > 0 && (step - 1) % self.interval == 0
    }

    /// Number of lines emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl Default for PeriodicLogObserver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

impl TrajectoryObserver for PeriodicLogObserver {
    fn on_step(&mut self, event: &StepEvent) {
        if !self.is_due(event.step) {
            return;
        }
        self.emitted += 1;
        log::log!(
            self.level,
            "Current position: {} (step {})",
            event.state,
            event.step
        );
        log::log!(self.level, "Number of points: {}", event.len_before);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorenz_core::LorenzState;

    fn event(step: u64) -> StepEvent {
        StepEvent {
            step,
            state: LorenzState::DEFAULT_START,
            len_before: step as usize - 1,
            evicted: None,
        }
    }

    #[test]
    fn test_cadence() {
        let mut observer = PeriodicLogObserver::new(100);
        for step in 1..=250 {
            observer.on_step(&event(step));
        }
        // Steps 1, 101 and 201.
        assert_eq!(observer.emitted(), 3);
        assert!(observer.is_due(1));
        assert!(!observer.is_due(100));
        assert!(observer.is_due(101));
    }

    #[test]
    fn test_zero_interval_logs_every_step() {
        let mut observer = PeriodicLogObserver::new(0).with_level(Level::Trace);
        for step in 1..=5 {
            observer.on_step(&event(step));
        }
        assert_eq!(observer.emitted(), 5);
    }
}
