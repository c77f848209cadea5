//! Occupancy grids over polygon footprints.
//!
//! [`BinaryOccupancyGrid`] counts, per cell, how many entities' footprints cover it, and keeps
//! the cell set of every entity so footprints can be moved or removed incrementally.
//! [`BinaryInflatedOccupancyGrid`] does the same with every footprint buffered by a fixed radius.
pub mod binary;
pub mod inflated;
pub mod neighborhood;
pub mod owner;
pub mod params;

pub use binary::BinaryOccupancyGrid;
pub use inflated::BinaryInflatedOccupancyGrid;
pub use neighborhood::{Neighborhood, CHESSBOARD_OFFSETS, TAXI_OFFSETS};
pub use owner::CellOwner;
pub use params::{grid_parameters, map_bounds, GridParameters};
