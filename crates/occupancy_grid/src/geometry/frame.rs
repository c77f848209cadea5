//! Discretization frame shared by rasterization and the occupancy grids.
//!
//! This module defines [`Cell`] and [`CellFrame`], which partition a rectangular world region
//! into `width x height` square cells starting at a world-space origin.
use geo::Rect;
use glam::DVec2;

use super::polygon::{to_coord, to_dvec};

/// Discrete `(column, row)` cell index.
pub type Cell = (i32, i32);

/// Maps world coordinates onto a fixed grid of square cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellFrame {
    /// World-space position of the lower-left corner of cell `(0, 0)`.
    pub origin: DVec2,
    /// Edge length of one cell in world units.
    pub resolution: f64,
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl CellFrame {
    pub fn new(origin: DVec2, resolution: f64, width: usize, height: usize) -> Self {
        debug_assert!(resolution > 0.0, "resolution must be > 0");
        Self {
            origin,
            resolution,
            width,
            height,
        }
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `cell` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.0 >= 0
            && cell.1 >= 0
            && (cell.0 as usize) < self.width
            && (cell.1 as usize) < self.height
    }

    /// Column-major storage index of `cell`, or `None` when it is out of bounds.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.0 as usize * self.height + cell.1 as usize)
    }

    /// Cell containing the world position `p`. The result may be out of bounds.
    pub fn world_to_cell(&self, p: DVec2) -> Cell {
        let rel = (p - self.origin) / self.resolution;
        (rel.x.floor() as i32, rel.y.floor() as i32)
    }

    /// World position of the centre of `cell`.
    pub fn cell_to_world(&self, cell: Cell) -> DVec2 {
        self.origin + (DVec2::new(cell.0 as f64, cell.1 as f64) + 0.5) * self.resolution
    }

    /// Closed world-space square of `cell`.
    pub fn cell_rect(&self, cell: Cell) -> Rect<f64> {
        let min = self.origin + DVec2::new(cell.0 as f64, cell.1 as f64) * self.resolution;
        Rect::new(to_coord(min), to_coord(min + DVec2::splat(self.resolution)))
    }

    /// Inclusive range of in-frame cells whose closed squares touch `bounds`.
    ///
    /// A coordinate lying exactly on a cell border selects the cells on both sides.
    pub fn cell_range(&self, bounds: &Rect<f64>) -> Option<(Cell, Cell)> {
        if self.is_empty() {
            return None;
        }
        let lo = (to_dvec(bounds.min()) - self.origin) / self.resolution;
        let hi = (to_dvec(bounds.max()) - self.origin) / self.resolution;
        if !lo.is_finite() || !hi.is_finite() {
            return None;
        }

        let max_x = self.width as f64 - 1.0;
        let max_y = self.height as f64 - 1.0;
        let x0 = (lo.x.ceil() - 1.0).max(0.0);
        let y0 = (lo.y.ceil() - 1.0).max(0.0);
        let x1 = hi.x.floor().min(max_x);
        let y1 = hi.y.floor().min(max_y);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(((x0 as i32, y0 as i32), (x1 as i32, y1 as i32)))
    }
}

#[cfg(test)]
mod tests {
    use geo::coord;

    use super::*;

    fn rect(min: [f64; 2], max: [f64; 2]) -> Rect<f64> {
        Rect::new(coord! { x: min[0], y: min[1] }, coord! { x: max[0], y: max[1] })
    }

    fn sample_frame() -> CellFrame {
        CellFrame::new(DVec2::new(-5.0, -5.0), 1.0, 4, 3)
    }

    #[test]
    fn len_and_bounds() {
        let frame = sample_frame();
        assert_eq!(frame.len(), 12);
        assert!(frame.contains((0, 0)));
        assert!(frame.contains((3, 2)));
        assert!(!frame.contains((4, 0)));
        assert!(!frame.contains((0, 3)));
        assert!(!frame.contains((-1, 0)));
    }

    #[test]
    fn index_is_column_major() {
        let frame = sample_frame();
        assert_eq!(frame.index((0, 0)), Some(0));
        assert_eq!(frame.index((0, 2)), Some(2));
        assert_eq!(frame.index((1, 0)), Some(3));
        assert_eq!(frame.index((3, 2)), Some(11));
        assert_eq!(frame.index((4, 2)), None);
    }

    #[test]
    fn world_cell_roundtrip() {
        let frame = sample_frame();
        let cell = frame.world_to_cell(DVec2::new(-5.0, -5.0));
        assert_eq!(cell, (0, 0));
        assert_eq!(frame.cell_to_world(cell), DVec2::new(-4.5, -4.5));
        assert_eq!(frame.world_to_cell(DVec2::new(-5.1, -3.9)), (-1, 1));
    }

    #[test]
    fn cell_range_includes_both_sides_of_border() {
        let frame = CellFrame::new(DVec2::ZERO, 1.0, 4, 4);
        let on_line = rect([2.0, 1.5], [2.0, 1.5]);
        assert_eq!(frame.cell_range(&on_line), Some(((1, 1), (2, 1))));
    }

    #[test]
    fn cell_range_is_clipped() {
        let frame = CellFrame::new(DVec2::ZERO, 1.0, 4, 4);
        let wide = rect([-10.0, -10.0], [10.0, 0.5]);
        assert_eq!(frame.cell_range(&wide), Some(((0, 0), (3, 0))));

        let outside = rect([6.0, 6.0], [7.0, 7.0]);
        assert_eq!(frame.cell_range(&outside), None);
    }

    #[test]
    fn cell_rect_is_the_closed_square() {
        let frame = sample_frame();
        let square = frame.cell_rect((1, 2));
        assert_eq!(square.min(), coord! { x: -4.0, y: -3.0 });
        assert_eq!(square.max(), coord! { x: -3.0, y: -2.0 });
    }
}
