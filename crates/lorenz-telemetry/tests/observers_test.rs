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

use approx::assert_relative_eq;
use lorenz_core::{IntegratorConfig, TrajectoryIntegrator};
use lorenz_telemetry::{init_logging, PeriodicLogObserver, TrajectoryMetrics};

#[test]
fn test_metrics_track_steps_evictions_and_bounds() {
    init_logging("debug");

    let metrics = TrajectoryMetrics::new();
    let config = IntegratorConfig {
        capacity: 100,
        ..IntegratorConfig::default()
    };
    let mut integrator = TrajectoryIntegrator::new(&config)
        .unwrap()
        .with_observer(Box::new(metrics.clone()))
        .with_observer(Box::new(PeriodicLogObserver::default()));

    assert_eq!(metrics.snapshot().steps, 0);
    assert!(metrics.snapshot().bounds.is_none());

    for _ in 0..250 {
        integrator.step().unwrap();
    }

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.steps, 250);
    assert_eq!(snapshot.evictions, 150);
    assert!(snapshot.max_step_length > 0.0);

    // Every recorded state lies inside the accumulated bounds.
    let bounds = snapshot.bounds.expect("bounds after stepping");
    for state in integrator.trajectory().iter() {
        assert!(bounds.contains_point(state.scaled(1.0)));
    }

    metrics.reset();
    assert_eq!(metrics.snapshot().steps, 0);
}

#[test]
fn test_max_step_length_of_first_steps() {
    let metrics = TrajectoryMetrics::new();
    let mut integrator = TrajectoryIntegrator::new(&IntegratorConfig::default())
        .unwrap()
        .with_observer(Box::new(metrics.clone()));

    integrator.step().unwrap();
    // A single step has no predecessor to measure against.
    assert_eq!(metrics.snapshot().max_step_length, 0.0);

    integrator.step().unwrap();
    // From (0.095, 0.014, 0) to (0.09095, 0.02723, 0.00000665).
    let expected = (0.00405_f64.powi(2) + 0.01323_f64.powi(2) + 0.00000665_f64.powi(2)).sqrt();
    assert_relative_eq!(metrics.snapshot().max_step_length, expected, epsilon = 1e-10);
}
