//! Criterion benchmarks for Monte Carlo bankroll simulation.
//!
//! Benchmarks cover:
//! - Single-trajectory simulation at varying total hand counts
//! - Multi-run batches (parallelised via rayon)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stakes_core::types::StakeParams;
use stakes_mc::{simulate_run, PathSimulator, SimRng, SimulationConfig};

fn stakes_for(hands_per_stake: u64) -> Vec<StakeParams> {
    vec![
        StakeParams::new(2.0, 5.0, 100.0, hands_per_stake),
        StakeParams::new(5.0, 4.0, 95.0, hands_per_stake),
        StakeParams::new(10.0, 3.0, 90.0, hands_per_stake),
    ]
}

fn bench_simulate_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_run");

    for hands in [1_000u64, 10_000, 100_000] {
        let stakes = stakes_for(hands);
        group.bench_with_input(BenchmarkId::from_parameter(hands * 3), &stakes, |b, s| {
            let mut rng = SimRng::from_seed(42);
            b.iter(|| simulate_run(black_box(s), &mut rng).unwrap());
        });
    }

    group.finish();
}

fn bench_simulate_runs(c: &mut Criterion) {
    let stakes = stakes_for(10_000);
    let config = SimulationConfig::builder()
        .runs(10)
        .seed(42)
        .build()
        .unwrap();
    let simulator = PathSimulator::new(config).unwrap();

    c.bench_function("simulate_runs_10x30k", |b| {
        b.iter(|| simulator.simulate_runs(black_box(&stakes)).unwrap());
    });
}

criterion_group!(benches, bench_simulate_run, bench_simulate_runs);
criterion_main!(benches);
