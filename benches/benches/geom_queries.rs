// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use polyfield_geom::{closest_point_in_polygon, contains_point};
use polyfield_scene::presets::PRESETS;

fn regular_ngon(n: usize, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let theta = (i as f64 / n as f64) * core::f64::consts::TAU;
            Point::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

fn bench_contains_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_point");
    let inside = Point::new(10.0, 10.0);
    let outside = Point::new(500.0, 0.0);
    for n in [8_usize, 64, 512] {
        let poly = regular_ngon(n, 100.0);
        group.bench_with_input(BenchmarkId::new("inside", n), &poly, |b, poly| {
            b.iter(|| contains_point(black_box(poly), black_box(inside)));
        });
        group.bench_with_input(BenchmarkId::new("outside", n), &poly, |b, poly| {
            b.iter(|| contains_point(black_box(poly), black_box(outside)));
        });
    }
    group.finish();
}

fn bench_closest_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_point_in_polygon");
    // An inside probe short-circuits; an outside probe walks every edge.
    let inside = Point::new(10.0, 10.0);
    let outside = Point::new(500.0, 0.0);
    for n in [8_usize, 64, 512] {
        let poly = regular_ngon(n, 100.0);
        group.bench_with_input(BenchmarkId::new("inside", n), &poly, |b, poly| {
            b.iter(|| closest_point_in_polygon(black_box(poly), black_box(inside)));
        });
        group.bench_with_input(BenchmarkId::new("outside", n), &poly, |b, poly| {
            b.iter(|| closest_point_in_polygon(black_box(poly), black_box(outside)));
        });
    }
    group.finish();
}

/// The per-frame workload: both queries against every preset polygon.
fn bench_preset_frame(c: &mut Criterion) {
    let polygons: Vec<Vec<Point>> = PRESETS
        .iter()
        .map(|p| p.to_polygon().vertices().to_vec())
        .collect();
    let probe = Point::new(320.0, 380.0);
    c.bench_function("preset_frame_queries", |b| {
        b.iter(|| {
            for poly in &polygons {
                black_box(contains_point(black_box(poly), probe));
                black_box(closest_point_in_polygon(black_box(poly), probe));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_contains_point,
    bench_closest_point,
    bench_preset_frame
);
criterion_main!(benches);
