//! Benchmarks for the hex-prism lattice
//!
//! Measures performance of:
//! - Bounded neighbor lookups
//! - Axial to world transforms
//! - Full-lattice traversal

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hexfill_topology::{HexCoord, Lattice, TileGeometry};

/// Benchmark bounded neighbor computation
fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors_of");
    let lattice = Lattice::allocate(16, 8, ()).unwrap();

    let coords = [
        ("centre", HexCoord::new(0, 0, 4)),
        ("edge", HexCoord::new(8, 0, 0)),
        ("corner", HexCoord::new(8, 8, 7)),
    ];

    for (name, coord) in coords {
        group.throughput(Throughput::Elements(8));
        group.bench_with_input(BenchmarkId::from_parameter(name), &coord, |b, &c| {
            b.iter(|| lattice.neighbors_of(black_box(c)))
        });
    }
    group.finish();
}

/// Benchmark axial to world conversion
fn bench_world_position(c: &mut Criterion) {
    let geometry = TileGeometry::default();
    c.bench_function("world_position", |b| {
        b.iter(|| geometry.world_position(black_box(HexCoord::new(5, -3, 2))))
    });
}

/// Benchmark traversal over whole lattices
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("coords");

    for &radius in &[4i64, 8, 16, 32] {
        let lattice = Lattice::allocate(radius, 4, 0u32).unwrap();
        group.throughput(Throughput::Elements(lattice.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(radius), &lattice, |b, l| {
            b.iter(|| l.iter().map(|(c, v)| c.q + *v as i64).sum::<i64>())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_neighbors,
    bench_world_position,
    bench_traversal,
);

criterion_main!(benches);
