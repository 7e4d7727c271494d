//! Criterion micro-benchmarks for evolution and history replay.

use std::hint::black_box;

use cellum_bench::{elementary_profile, life_profile, parity_profile, seeded};
use cellum_engine::{Ca1D, Ca2D, Ca2D4};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve");

    group.bench_function("rule30_line_10k", |b| {
        b.iter_batched(
            || seeded::<cellum_engine::Line1D>(elementary_profile(10_000), 7),
            |mut ca: Ca1D| {
                ca.evolve().unwrap();
                black_box(ca.get_flat_state(None).unwrap().len());
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("life_moore_128x128", |b| {
        b.iter_batched(
            || seeded::<cellum_engine::Square8>(life_profile(128), 7),
            |mut ca: Ca2D| {
                ca.evolve().unwrap();
                black_box(ca.last_metrics().changed_cells);
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("parity_von_neumann_128x128", |b| {
        b.iter_batched(
            || seeded::<cellum_engine::Square4>(parity_profile(128), 7),
            |mut ca: Ca2D4| {
                ca.evolve().unwrap();
                black_box(ca.last_metrics().changed_cells);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    // 32 generations recorded, cursor rewound to 0.
    let mut ca: Ca2D = seeded(life_profile(128), 11);
    for _ in 0..32 {
        ca.evolve().unwrap();
    }

    c.bench_function("replay_life_128x128_32_generations", |b| {
        b.iter(|| {
            ca.goto_state(0).unwrap();
            for _ in 0..32 {
                ca.evolve().unwrap();
            }
            black_box(ca.history_len());
        });
    });
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("settle_life_32x32", |b| {
        b.iter_batched(
            || seeded::<cellum_engine::Square8>(life_profile(32), 3),
            |mut ca: Ca2D| black_box(ca.run_until_settled(200).unwrap()),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_evolve, bench_replay, bench_settle);
criterion_main!(benches);
