//! Planar geometry for obstacle footprints.
//!
//! Footprints are [`geo`] polygons. This module adds what the occupancy grids need on top: the
//! cell frame, outward buffering and rasterization of polygons into grid cells.
pub mod buffer;
pub mod frame;
pub mod polygon;
pub mod raster;

pub use buffer::inflate;
pub use frame::{Cell, CellFrame};
pub use geo::{MultiPolygon, Polygon, Rect};
pub use polygon::{
    circumscribed_radius, inscribed_radius, polygon_from_points, rectangle, to_coord, to_dvec,
    Pose2,
};
pub use raster::{polygon_to_discrete_cells_set, Shape};
