#![forbid(unsafe_code)]

use std::hash::Hash;

use occupancy_grid::prelude::{BinaryOccupancyGrid, CellOwner, Result};
use tracing_subscriber::EnvFilter;

/// Install a console subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Text rendering of a grid, top row first.
///
/// `.` free, `#` contested, and owned cells use the character returned by `glyph`.
pub fn render_ascii<K>(grid: &BinaryOccupancyGrid<K>, glyph: impl Fn(&K) -> char) -> Result<String>
where
    K: Eq + Hash + Clone,
{
    let mut out = String::with_capacity((grid.d_width() + 1) * grid.d_height());
    for iy in (0..grid.d_height() as i32).rev() {
        for ix in 0..grid.d_width() as i32 {
            let c = match grid.only_obstacle_uid_in_cell((ix, iy))? {
                CellOwner::Unowned => '.',
                CellOwner::Contested => '#',
                CellOwner::Owned(id) => glyph(&id),
            };
            out.push(c);
        }
        out.push('\n');
    }
    Ok(out)
}
