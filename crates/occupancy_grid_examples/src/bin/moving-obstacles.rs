use std::collections::HashMap;

use geo::Translate;
use glam::DVec2;
use occupancy_grid::prelude::*;
use occupancy_grid_examples::{init_tracing, render_ascii};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Entity {
    Wall,
    Robot,
    Crate(u8),
}

fn glyph(entity: &Entity) -> char {
    match entity {
        Entity::Wall => 'W',
        Entity::Robot => 'R',
        Entity::Crate(n) => char::from(b'a' + n % 26),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut polygons = HashMap::from([
        (
            Entity::Wall,
            rectangle(DVec2::new(0.0, 0.0), DVec2::new(8.0, 0.5)),
        ),
        (
            Entity::Robot,
            polygon_from_points([[1.0, 1.0], [2.0, 1.0], [1.5, 2.0]]),
        ),
        (
            Entity::Crate(0),
            rectangle(DVec2::new(5.0, 3.0), DVec2::new(6.0, 4.0)),
        ),
        (
            Entity::Crate(1),
            rectangle(DVec2::new(2.0, 4.5), DVec2::new(3.0, 5.5)),
        ),
    ]);

    let config = GridConfig::new(0.25).with_neighborhood(Neighborhood::EightConnected);
    let mut grid = config.build(&polygons)?;
    info!(
        width = grid.d_width(),
        height = grid.d_height(),
        occupied = grid.occupied_cell_count(),
        "Initial grid"
    );
    println!("{}", render_ascii(&grid, glyph)?);

    // Drive the robot towards the first crate, then pick it up.
    for step in 1..=4 {
        let offset = DVec2::new(0.8, 0.5) * step as f64;
        let robot =
            polygon_from_points([[1.0, 1.0], [2.0, 1.0], [1.5, 2.0]]).translate(offset.x, offset.y);
        polygons.insert(Entity::Robot, robot.clone());

        let removed = if step == 4 {
            polygons.remove(&Entity::Crate(0));
            vec![Entity::Crate(0)]
        } else {
            Vec::new()
        };
        grid.update([(&Entity::Robot, &robot)], &removed);

        let probe = grid.real_to_grid(DVec2::new(5.5, 3.5));
        info!(
            step,
            owner = ?grid.only_obstacle_uid_in_cell(probe)?,
            occupied = grid.occupied_cell_count(),
            "Robot moved"
        );
    }

    grid.check_consistency()?;
    println!("{}", render_ascii(&grid, glyph)?);

    let robot_cells = grid.cells_of(&Entity::Robot).map_or(0, |c| c.len());
    let free_exits: usize = grid
        .cells_of(&Entity::Robot)
        .into_iter()
        .flatten()
        .map(|cell| grid.free_neighbors(*cell).count())
        .sum();
    info!(robot_cells, free_exits, "Robot footprint");

    Ok(())
}
