//! Benchmarks for minimum convex decomposition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use convexcut::polygon::{min_convex_decomposition, visible_vertices, Polygon};
use convexcut::Metrics;

/// Generates a star-shaped polygon with deterministic "random" radii.
fn generate_star(num_points: usize, seed: u64) -> Polygon<f64> {
    let tau = std::f64::consts::PI * 2.0;
    let mut state = seed;
    let coords: Vec<(f64, f64)> = (0..num_points)
        .map(|i| {
            // Simple xorshift for deterministic jitter
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let jitter = 0.05 + 0.9 * (state as f64 / u64::MAX as f64);
            let radius = 2.0 + 8.0 * ((state >> 16) as f64 / (u64::MAX >> 16) as f64);
            let theta = (i as f64 + jitter) / num_points as f64 * tau;
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect();
    Polygon::from_coords(&coords)
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_convex_decomposition");

    for size in [20, 50, 100, 250] {
        let polygon = generate_star(size, 0x5eed);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("star", size), &polygon, |b, p| {
            b.iter(|| min_convex_decomposition(black_box(p)))
        });
    }

    group.finish();
}

fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_vertices");

    for size in [50, 250, 1000] {
        let polygon = generate_star(size, 0x5eed);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("star", size), &polygon, |b, p| {
            b.iter(|| {
                let mut metrics = Metrics::new();
                visible_vertices(black_box(p), 0, &mut metrics)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decompose, bench_visibility);
criterion_main!(benches);
