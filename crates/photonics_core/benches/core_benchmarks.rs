//! Criterion benchmarks for the photonics_core interpolation kernel.
//!
//! Measures plain and dual-number grid evaluation across grid sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use photonics_core::math::interpolators::{Axis, BilinearGrid, BoundaryMode};
use photonics_core::types::DualNumber;

/// Generate axes and a smooth grid for benchmarks.
fn generate_grid(nx: usize, ny: usize) -> (Axis, Axis, BilinearGrid) {
    let xs: Vec<f64> = (0..nx).map(|i| i as f64 / (nx - 1) as f64).collect();
    let ys: Vec<f64> = (0..ny).map(|j| j as f64 / (ny - 1) as f64).collect();
    let rows: Vec<Vec<f64>> = xs
        .iter()
        .map(|&x| ys.iter().map(|&y| x.sin() * y.cos()).collect())
        .collect();
    (
        Axis::new(xs).unwrap(),
        Axis::new(ys).unwrap(),
        BilinearGrid::from_rows(&rows).unwrap(),
    )
}

/// Benchmark grid construction and lookup.
fn bench_bilinear_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("bilinear_grid");

    for size in [10, 100, 1000] {
        let (xs, ys, grid) = generate_grid(size, size);

        group.bench_with_input(BenchmarkId::new("lookup", size), &grid, |b, grid| {
            b.iter(|| {
                grid.map_coordinates(
                    xs.fractional_index(black_box(0.37)),
                    ys.fractional_index(black_box(0.61)),
                    BoundaryMode::Clamp,
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("lookup_dual", size), &grid, |b, grid| {
            b.iter(|| {
                grid.map_coordinates(
                    xs.fractional_index(black_box(DualNumber::new(0.37, 1.0))),
                    ys.fractional_index(black_box(DualNumber::from(0.61))),
                    BoundaryMode::Clamp,
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("lookup_100", size), &grid, |b, grid| {
            let points: Vec<(f64, f64)> = (0..100)
                .map(|i| (i as f64 / 99.0, 1.0 - i as f64 / 99.0))
                .collect();
            b.iter(|| {
                for &(x, y) in &points {
                    black_box(grid.map_coordinates(
                        xs.fractional_index(x),
                        ys.fractional_index(y),
                        BoundaryMode::Clamp,
                    ));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bilinear_grid);
criterion_main!(benches);
