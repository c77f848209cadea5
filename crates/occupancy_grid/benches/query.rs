mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use occupancy_grid::prelude::{BinaryOccupancyGrid, Cell, Neighborhood};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn random_cells(grid: &BinaryOccupancyGrid<u32>, count: usize, seed: u64) -> Vec<Cell> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (
                rng.random_range(0..grid.d_width() as i32),
                rng.random_range(0..grid.d_height() as i32),
            )
        })
        .collect()
}

fn owner_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/owner");
    let queries = 1024usize;

    for &n in &[16usize, 128, 512] {
        let scene = common::make_scene(n, 0x0BADF00D);
        let grid =
            BinaryOccupancyGrid::new(&scene, 0.1, Neighborhood::EightConnected).expect("grid");
        let cells = random_cells(&grid, queries, 0xBADC0DE);
        group.throughput(common::elements_throughput(queries));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                for cell in &cells {
                    black_box(grid.only_obstacle_uid_in_cell(*cell).ok());
                }
            });
        });
    }

    group.finish();
}

fn neighbor_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/free_neighbors");
    let queries = 4096usize;
    let scene = common::make_scene(128, 0xC0FFEE);

    for neighborhood in [Neighborhood::FourConnected, Neighborhood::EightConnected] {
        let grid = BinaryOccupancyGrid::new(&scene, 0.1, neighborhood).expect("grid");
        let cells = random_cells(&grid, queries, 0xFACEFEED);
        group.throughput(common::elements_throughput(queries));

        group.bench_function(format!("{neighborhood:?}"), |b| {
            b.iter(|| {
                let free: usize = cells.iter().map(|c| grid.free_neighbors(*c).count()).sum();
                black_box(free);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = owner_benches, neighbor_benches
}
criterion_main!(benches);
