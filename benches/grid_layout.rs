// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the suggestions grid solver.
//!
//! The solver runs on every resize while the panel is visible, so it is
//! measured across small, reducing and large containers.

use criterion::{criterion_group, criterion_main, Criterion};
use embed_player::domain::layout::GridLayout;
use std::hint::black_box;

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_layout");

    group.bench_function("small_container", |b| {
        b.iter(|| black_box(GridLayout::solve(black_box(650.0), black_box(300.0))));
    });

    // Needs several reduction steps before it fits twelve cells.
    group.bench_function("reducing_container", |b| {
        b.iter(|| black_box(GridLayout::solve(black_box(1000.0), black_box(960.0))));
    });

    group.bench_function("large_container", |b| {
        b.iter(|| black_box(GridLayout::solve(black_box(1920.0), black_box(985.0))));
    });

    group.finish();
}

/// Sweeps container sizes the way a window drag would.
fn bench_resize_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_layout");

    group.bench_function("resize_sweep", |b| {
        b.iter(|| {
            for step in 0..200 {
                let width = 200.0 + f64::from(step) * 9.0;
                let height = 150.0 + f64::from(step) * 5.0;
                black_box(GridLayout::solve_for_container(width, height));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_solve, bench_resize_sweep);
criterion_main!(benches);
