// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! Projection benchmarks

use brickwrap::geometry::{cuboid, cuboid_at, TriangleMesh};
use brickwrap::{BoxUnfoldProjector, ExteriorFilter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::{Point3, Vector3};

/// A grid of bricks merged into one soup, to scale triangle count
fn brick_grid(n: usize) -> TriangleMesh {
    let mut scene = cuboid(Vector3::new(1.0, 1.0, 1.0));
    for i in 1..n {
        let offset = Point3::new(i as f32 * 1.5, 0.0, 0.0);
        scene.merge(&cuboid_at(offset, Vector3::new(1.0, 1.0, 1.0)));
    }
    scene
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    for n in [1usize, 8, 64] {
        let mesh = brick_grid(n);
        group.bench_with_input(BenchmarkId::new("plain", n * 12), &mesh, |b, mesh| {
            b.iter(|| {
                BoxUnfoldProjector::new()
                    .project(black_box(mesh))
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_exterior_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("exterior_filter");
    // Raycasts against the whole mesh dominate; keep sizes small
    group.sample_size(20);

    for n in [1usize, 8] {
        let mesh = brick_grid(n);
        group.bench_with_input(BenchmarkId::new("raycast", n * 12), &mesh, |b, mesh| {
            b.iter(|| {
                BoxUnfoldProjector::new()
                    .with_exterior_filter(ExteriorFilter::Raycast)
                    .project(black_box(mesh))
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_projection, bench_exterior_filter);
criterion_main!(benches);
