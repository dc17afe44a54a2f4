//! Throughput of field generation and the reference integrator.
//!
//! Run with: `cargo bench --package galaxy`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use galaxy::{AnalyticDiskVerlet, GalaxyConfig, ParticleField};

fn bench_reset(c: &mut Criterion) {
    let mut group = c.benchmark_group("reset");

    for count in [1_000usize, 10_000, 100_000] {
        let config = GalaxyConfig::new(count, 0, 200.0, 20.0, 0.1, 100.0, 0.1, 42);
        let mut field = ParticleField::new(config).expect("valid config");

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                field.reset();
                black_box(field.total_mass())
            })
        });
    }

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for (name, integrator) in [
        ("parallel", AnalyticDiskVerlet::new()),
        ("sequential", AnalyticDiskVerlet::sequential()),
    ] {
        let config = GalaxyConfig::new(100_000, 0, 200.0, 20.0, 0.1, 100.0, 0.1, 42);
        let mut field = ParticleField::new(config).expect("valid config");

        group.bench_function(name, |b| {
            b.iter(|| {
                field.step(&integrator);
                black_box(field.steps())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reset, bench_step);
criterion_main!(benches);
