//! Criterion benchmarks for parameter and grid sweeps.

use bs_core::{ApproximationConfig, OptionType};
use bs_instruments::{Metric, ParameterKind, ParameterSet, VanillaOption};
use bs_sweep::OptionManager;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn call() -> VanillaOption {
    VanillaOption::european(OptionType::Call, 60.0, 65.0, 0.25, 0.08, 0.30, 0.08)
}

fn bench_sweep_parameter(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_parameter");
    let manager = OptionManager::with_config(ApproximationConfig::default());

    for mesh in [40, 400, 4000] {
        let spots = ParameterSet::from_range(ParameterKind::Spot, 10.0, 110.0, mesh).unwrap();
        for metric in [Metric::Price, Metric::ApproxGamma] {
            group.bench_with_input(BenchmarkId::new(metric.to_string(), mesh), &spots, |b, spots| {
                let mut option = call();
                b.iter(|| {
                    manager.sweep_parameter(&mut option, black_box(metric), black_box(spots))
                });
            });
        }
    }
    group.finish();
}

fn bench_sweep_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_grid");
    let manager = OptionManager::new();

    for mesh in [40, 400, 4000] {
        let grid: Vec<ParameterSet> = [
            (ParameterKind::Maturity, 0.1, 2.0),
            (ParameterKind::Volatility, 0.1, 0.6),
            (ParameterKind::Spot, 40.0, 90.0),
        ]
        .into_iter()
        .map(|(kind, start, end)| ParameterSet::from_range(kind, start, end, mesh).unwrap())
        .collect();

        group.bench_with_input(BenchmarkId::from_parameter(mesh), &grid, |b, grid| {
            let mut option = call();
            b.iter(|| manager.sweep_grid(&mut option, Metric::Delta, black_box(grid)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep_parameter, bench_sweep_grid);
criterion_main!(benches);
