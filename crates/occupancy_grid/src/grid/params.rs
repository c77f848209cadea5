//! Discretization frame computed from a polygon set.
//!
//! [`GridParameters`] snaps the joint bounding box of all input shapes outward to multiples of
//! the resolution, so that every shape fits in a whole number of cells.
use std::collections::HashMap;

use glam::DVec2;
use tracing::warn;

use crate::config::validate_resolution;
use crate::error::{Error, Result};
use crate::geometry::{
    polygon_from_points, to_coord, to_dvec, Cell, CellFrame, Polygon, Pose2, Rect, Shape,
};

/// Origin, size and bounding rectangle of an occupancy grid. Immutable once computed.
#[derive(Clone, Debug, PartialEq)]
pub struct GridParameters {
    /// World pose of the lower-left corner of cell `(0, 0)`; heading is always zero.
    pub grid_pose: Pose2,
    /// Number of columns.
    pub d_width: usize,
    /// Number of rows.
    pub d_height: usize,
    /// Physical width, `d_width * resolution`.
    pub r_width: f64,
    /// Physical height, `d_height * resolution`.
    pub r_height: f64,
    /// Closed rectangle covering the discretized frame.
    pub aabb_polygon: Polygon,
}

impl GridParameters {
    /// Compute parameters covering every shape in `shapes`.
    pub fn from_shapes<'a, S>(shapes: impl IntoIterator<Item = &'a S>, resolution: f64) -> Result<Self>
    where
        S: Shape + 'a,
    {
        validate_resolution(resolution)?;
        let bounds = map_bounds(shapes)?;
        Ok(Self::from_bounds(&bounds, resolution))
    }

    /// Compute parameters covering `bounds`. `resolution` must be positive.
    pub fn from_bounds(bounds: &Rect<f64>, resolution: f64) -> Self {
        debug_assert!(resolution > 0.0, "resolution must be > 0");
        let min_x = (bounds.min().x / resolution).floor();
        let min_y = (bounds.min().y / resolution).floor();
        let mut max_x = (bounds.max().x / resolution).ceil();
        let mut max_y = (bounds.max().y / resolution).ceil();
        // Zero-extent boxes on a cell border still get one cell.
        if max_x <= min_x {
            max_x = min_x + 1.0;
        }
        if max_y <= min_y {
            max_y = min_y + 1.0;
        }

        let d_width = (max_x - min_x) as usize;
        let d_height = (max_y - min_y) as usize;
        let min = DVec2::new(min_x, min_y) * resolution;
        let max = DVec2::new(max_x, max_y) * resolution;

        Self {
            grid_pose: Pose2::new(min.x, min.y, 0.0),
            d_width,
            d_height,
            r_width: d_width as f64 * resolution,
            r_height: d_height as f64 * resolution,
            aabb_polygon: polygon_from_points([
                DVec2::new(min.x, min.y),
                DVec2::new(min.x, max.y),
                DVec2::new(max.x, max.y),
                DVec2::new(max.x, min.y),
            ]),
        }
    }

    /// World-space origin of the grid.
    pub fn origin(&self) -> DVec2 {
        self.grid_pose.position()
    }

    /// Cell frame of these parameters at `resolution`.
    pub fn frame(&self, resolution: f64) -> CellFrame {
        CellFrame::new(self.origin(), resolution, self.d_width, self.d_height)
    }

    /// Cell containing `p`, by flooring. May lie outside the grid.
    pub fn real_to_grid(&self, p: DVec2, resolution: f64) -> Cell {
        self.frame(resolution).world_to_cell(p)
    }

    /// Centre of `cell` in world coordinates.
    pub fn grid_to_real(&self, cell: Cell, resolution: f64) -> DVec2 {
        self.frame(resolution).cell_to_world(cell)
    }

    pub fn contains_cell(&self, cell: Cell) -> bool {
        (0..self.d_width as i64).contains(&(cell.0 as i64))
            && (0..self.d_height as i64).contains(&(cell.1 as i64))
    }
}

/// Compute [`GridParameters`] for a mapping of entity IDs to shapes.
pub fn grid_parameters<K, S>(polygons: &HashMap<K, S>, resolution: f64) -> Result<GridParameters>
where
    S: Shape,
{
    GridParameters::from_shapes(polygons.values(), resolution)
}

/// Joint bounding box of all shapes. Shapes without vertices are skipped.
pub fn map_bounds<'a, S>(shapes: impl IntoIterator<Item = &'a S>) -> Result<Rect<f64>>
where
    S: Shape + 'a,
{
    shapes
        .into_iter()
        .filter_map(|s| s.bounds())
        .reduce(|a, b| {
            Rect::new(
                to_coord(to_dvec(a.min()).min(to_dvec(b.min()))),
                to_coord(to_dvec(a.max()).max(to_dvec(b.max()))),
            )
        })
        .ok_or_else(|| {
            warn!("No polygon with vertices, cannot compute map bounds.");
            Error::EmptyInput
        })
}
