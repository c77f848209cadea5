#![forbid(unsafe_code)]
//! occupancy_grid: Binary occupancy grids over polygon footprints.
//!
//! Modules:
//! - geometry: polygons, bounding boxes, outward buffering and rasterization into cells
//! - grid: grid parameters, the plain and inflated occupancy grids, cell ownership queries
//! - config: validated construction settings shared by both grid kinds
//!
//! Every cell stores how many entities cover it, and every entity remembers the cells it covers,
//! so moving or removing one footprint only touches the cells involved.
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;

/// Convenient re-exports for common types. Import with `use occupancy_grid::prelude::*;`.
pub mod prelude {
    pub use crate::config::GridConfig;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{
        circumscribed_radius, inflate, inscribed_radius, polygon_from_points,
        polygon_to_discrete_cells_set, rectangle, Cell, CellFrame, MultiPolygon, Polygon, Pose2,
        Rect, Shape,
    };
    pub use crate::grid::{
        grid_parameters, map_bounds, BinaryInflatedOccupancyGrid, BinaryOccupancyGrid, CellOwner,
        GridParameters, Neighborhood, CHESSBOARD_OFFSETS, TAXI_OFFSETS,
    };
}
