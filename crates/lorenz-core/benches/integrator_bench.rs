use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lorenz_core::{IntegratorConfig, TrajectoryIntegrator};
use std::hint::black_box;

fn saturated_integrator() -> TrajectoryIntegrator {
    let mut integrator =
        TrajectoryIntegrator::new(&IntegratorConfig::default()).expect("default config is valid");
    // Fill the buffer so every measured step also evicts.
    for _ in 0..IntegratorConfig::DEFAULT_CAPACITY {
        let _ = integrator.step();
    }
    integrator
}

fn bench_integrator(c: &mut Criterion) {
    let mut group = c.benchmark_group("Trajectory Integrator");

    group.bench_function("step (saturated buffer)", |b| {
        let mut integrator = saturated_integrator();
        b.iter(|| black_box(integrator.step()));
    });

    group.bench_function("fill_display_points (5000 points)", |b| {
        let integrator = saturated_integrator();
        let mut scratch = Vec::with_capacity(IntegratorConfig::DEFAULT_CAPACITY);
        b.iter(|| {
            integrator.fill_display_points(&mut scratch);
            black_box(scratch.len());
        });
    });

    group.bench_function("step from cold start", |b| {
        b.iter_batched(
            || TrajectoryIntegrator::new(&IntegratorConfig::default()).unwrap(),
            |mut integrator| black_box(integrator.step()),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_integrator);
criterion_main!(benches);
