// ABOUTME: Criterion benchmarks for the intake calculator and flock aggregator
// ABOUTME: Measures single-bird calculation, flock aggregation at several sizes, and CSV export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

//! Criterion benchmarks for the ration engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flockfeed::report::to_csv_string;
use flockfeed::{
    compute_bird_intake, compute_flock_intake, BirdInput, DietPhase, Environment, ModelConstants,
    SpeciesCatalog,
};

/// Large flock size for stress testing
const LARGE_FLOCK_SIZE: usize = 5000;

fn environment() -> Environment {
    Environment {
        temperature_c: 27.0,
        pasture_hours: 6.0,
        pasture_quality: 0.8,
        total_area_m2: 3000.0,
        bird_count: None,
    }
}

/// Mixed flock cycling through every built-in species
fn generate_flock(count: usize) -> Vec<BirdInput> {
    let species: Vec<&str> = SpeciesCatalog::builtin()
        .species()
        .map(|p| p.id.as_str())
        .collect();
    (0..count)
        .map(|index| {
            let bird = BirdInput::new(species[index % species.len()]);
            match index % 5 {
                0 => bird.with_weight_kg(1.5 + (index % 10) as f64 * 0.1),
                1 => bird.with_diet_phase(DietPhase::AllFlock),
                2 => bird.with_laying(0.6, 55.0),
                _ => bird,
            }
        })
        .collect()
}

fn bench_bird_intake(c: &mut Criterion) {
    let catalog = SpeciesCatalog::builtin();
    let constants = ModelConstants::default();
    let environment = environment();
    let hen = BirdInput::new("layer_hen").with_laying(0.75, 58.0);

    c.bench_function("compute_bird_intake", |b| {
        b.iter(|| {
            compute_bird_intake(
                black_box(catalog),
                black_box(&hen),
                black_box(&environment),
                black_box(&constants),
            )
        });
    });
}

fn bench_flock_intake(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_intake");
    let catalog = SpeciesCatalog::builtin();
    let constants = ModelConstants::default();
    let environment = environment();

    for count in [10, 100, LARGE_FLOCK_SIZE] {
        let birds = generate_flock(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("compute_flock_intake", count),
            &birds,
            |b, birds| {
                b.iter(|| {
                    compute_flock_intake(
                        black_box(catalog),
                        black_box(birds),
                        black_box(&environment),
                        black_box(&constants),
                        None,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_csv_export(c: &mut Criterion) {
    let birds = generate_flock(LARGE_FLOCK_SIZE);
    let Ok(result) = compute_flock_intake(
        SpeciesCatalog::builtin(),
        &birds,
        &environment(),
        &ModelConstants::default(),
        None,
    ) else {
        return;
    };

    c.bench_function("csv_export", |b| {
        b.iter(|| to_csv_string(black_box(&result.groups)));
    });
}

criterion_group!(
    benches,
    bench_bird_intake,
    bench_flock_intake,
    bench_csv_export
);
criterion_main!(benches);
