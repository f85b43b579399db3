use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gridwalk::{Coord, Direction, GridLike, JaggedGrid, Sequence};
use std::hint::black_box;

// Helper function to create test grids of different shapes
fn create_test_grid(width: usize, height: usize, shape: &str) -> JaggedGrid<u8> {
    let rows = (0..height)
        .map(|y| {
            let len = match shape {
                "square" => width,
                "jagged" => rand::random::<u8>() as usize % (width + 1),
                "sparse_rows" if y % 10 != 0 => 0,
                "sparse_rows" => width,
                "staircase" => y % (width + 1),
                _ => width,
            };
            (0..len).map(|_| rand::random::<u8>()).collect()
        })
        .collect();
    JaggedGrid::from_rows(rows)
}

// Benchmark full traversal over different sizes
fn bench_full_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_traversal");
    let sizes = [(10, 10), (100, 100), (500, 500), (1000, 1000)];

    for size in sizes.iter() {
        let (width, height) = *size;
        let grid = create_test_grid(width, height, "square");

        group.bench_with_input(
            BenchmarkId::new("size", format!("{}x{}", width, height)),
            &grid,
            |b, grid| {
                b.iter(|| black_box(grid.iter().map(|&v| v as u64).sum::<u64>()));
            },
        );
    }
    group.finish();
}

// Benchmark full traversal over different row shapes
fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");
    let shapes = ["square", "jagged", "sparse_rows", "staircase"];

    for shape in shapes.iter() {
        let grid = create_test_grid(200, 200, shape);

        group.bench_with_input(BenchmarkId::new("shape", shape), &grid, |b, grid| {
            b.iter(|| black_box(grid.locatable_iter().count()));
        });
    }
    group.finish();
}

// Benchmark value reads against location-only advancing
fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    let grid = create_test_grid(500, 500, "square");

    group.bench_function("next_value", |b| {
        b.iter(|| {
            let mut cursor = grid.iter();
            while let Ok(value) = cursor.next_value() {
                black_box(value);
            }
        });
    });

    group.bench_function("try_next", |b| {
        b.iter(|| {
            let mut cursor = grid.iter();
            while cursor.try_next() {}
            black_box(cursor.has_next());
        });
    });
    group.finish();
}

// Benchmark nested runs in every direction
fn bench_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("runs");
    let grid = create_test_grid(100, 100, "square");

    for direction in Direction::ALL {
        group.bench_with_input(
            BenchmarkId::new("direction", direction),
            &grid,
            |b, grid| {
                b.iter(|| {
                    let total: usize = grid.runs(direction).map(|run| run.count()).sum();
                    black_box(total)
                });
            },
        );
    }
    group.finish();
}

// Benchmark a single long walk
fn bench_walk(c: &mut Criterion) {
    let grid = create_test_grid(2000, 2000, "square");
    c.bench_function("walk_diagonal", |b| {
        b.iter(|| black_box(grid.walk(Coord::ORIGIN, Direction::SouthEast).count()));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20); // Reduced sample size for faster runs
    targets = bench_full_traversal, bench_shapes, bench_advance, bench_runs, bench_walk
}
criterion_main!(benches);
