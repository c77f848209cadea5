use std::collections::HashMap;

use glam::DVec2;
use occupancy_grid::prelude::*;
use occupancy_grid_examples::{init_tracing, render_ascii};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let room: HashMap<&str, Polygon> = HashMap::from([
        (
            "north",
            rectangle(DVec2::new(0.0, 9.5), DVec2::new(12.0, 10.0)),
        ),
        (
            "south",
            rectangle(DVec2::new(0.0, 0.0), DVec2::new(12.0, 0.5)),
        ),
        (
            "west",
            rectangle(DVec2::new(0.0, 0.0), DVec2::new(0.5, 10.0)),
        ),
        (
            "east",
            rectangle(DVec2::new(11.5, 0.0), DVec2::new(12.0, 10.0)),
        ),
        (
            "table",
            rectangle(DVec2::new(4.0, 4.0), DVec2::new(7.0, 5.5)),
        ),
        (
            "pillar",
            polygon_from_points([[9.0, 7.0], [9.5, 7.5], [9.0, 8.0], [8.5, 7.5]]),
        ),
    ]);

    let robot = rectangle(DVec2::new(-0.3, -0.2), DVec2::new(0.3, 0.2));
    let config = GridConfig::new(0.25)
        .with_neighborhood(Neighborhood::EightConnected)
        .with_inflation_radius(inscribed_radius(&robot));
    config.validate()?;

    let plain = config.build(&room)?;
    let inflated = config.build_inflated(&room)?;
    info!(
        inflation_radius = inflated.inflation_radius(),
        plain = plain.occupied_cell_count(),
        inflated = inflated.occupied_cell_count(),
        "Built grids"
    );

    let glyph = |id: &&str| id.chars().next().map_or('?', |c| c.to_ascii_uppercase());
    println!("{}", render_ascii(&plain, glyph)?);
    println!("{}", render_ascii(inflated.inner(), glyph)?);

    // The robot centre may go wherever the inflated grid is free.
    for probe in [DVec2::new(2.0, 2.0), DVec2::new(3.8, 4.5), DVec2::new(9.0, 7.5)] {
        let cell = inflated.real_to_grid(probe);
        info!(
            x = probe.x,
            y = probe.y,
            plain = ?plain.only_obstacle_uid_in_cell(cell)?,
            inflated = ?inflated.only_obstacle_uid_in_cell(cell)?,
            "Probe"
        );
    }

    Ok(())
}
