//! Flood-fill and route-extraction benchmarks.
//!
//! The flood field is recomputed from scratch on every planning turn, so its
//! cost dominates the per-step budget.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use marga_nav::planning::extract_routes;
use marga_nav::{center_cells, flood, Cell, WallMap};

fn bench_flood(c: &mut Criterion) {
    let walls = WallMap::new(16);
    let goals = center_cells(16);

    c.bench_function("flood_16_corner_to_center", |b| {
        b.iter(|| flood(black_box(&walls), Cell::new(0, 0), black_box(&goals)).unwrap())
    });

    c.bench_function("flood_16_single_goal_far_corner", |b| {
        b.iter(|| flood(black_box(&walls), Cell::new(0, 0), &[Cell::new(15, 15)]).unwrap())
    });
}

fn bench_routes(c: &mut Criterion) {
    let walls = WallMap::new(16);
    // A single far goal on an open map maximizes route branching.
    let result = flood(&walls, Cell::new(0, 0), &[Cell::new(7, 7)]).unwrap();

    c.bench_function("extract_routes_16_branching", |b| {
        b.iter(|| extract_routes(black_box(&walls), black_box(&result)).unwrap())
    });
}

criterion_group!(benches, bench_flood, bench_routes);
criterion_main!(benches);
