#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::DVec2;
use occupancy_grid::prelude::{rectangle, Polygon};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub const WORLD_EXTENT: f64 = 50.0;

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Axis-aligned box with random position and a side length in `0.5..2.5`.
pub fn random_box(rng: &mut StdRng) -> Polygon {
    let min = DVec2::new(
        rng.random::<f64>() * WORLD_EXTENT,
        rng.random::<f64>() * WORLD_EXTENT,
    );
    let size = DVec2::new(
        0.5 + rng.random::<f64>() * 2.0,
        0.5 + rng.random::<f64>() * 2.0,
    );
    rectangle(min, min + size)
}

/// `count` random boxes keyed `0..count`, plus a static frame spanning the whole world.
pub fn make_scene(count: usize, seed: u64) -> HashMap<u32, Polygon> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut scene: HashMap<u32, Polygon> = (0..count as u32)
        .map(|id| (id, random_box(&mut rng)))
        .collect();
    scene.insert(
        u32::MAX,
        rectangle(DVec2::ZERO, DVec2::splat(WORLD_EXTENT + 3.0)),
    );
    scene
}
