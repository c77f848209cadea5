//! Polygon-to-cell rasterization.
//!
//! A cell is *covered* by a region when the open cell square meets the region's interior, which for
//! areal regions means they overlap with positive area. Boundary tracing keeps only the covered
//! cells whose closed square touches one of the region's rings.
//!
//! Zero-area polygons are treated as the segment or point they collapse to, and cover the cells
//! whose open square they pass through.
//!
//! Cells outside the frame are never produced.
use std::collections::HashSet;

use geo::{
    Area, BoundingRect, Contains, Coord, Intersects, LineString, MultiLineString, MultiPolygon,
    Point, Polygon, Rect, Relate,
};
use glam::DVec2;

use super::frame::{Cell, CellFrame};
use super::polygon::to_coord;

/// A region that can be turned into a set of grid cells.
pub trait Shape {
    /// Bounding box in world coordinates, `None` for shapes without vertices.
    fn bounds(&self) -> Option<Rect<f64>>;

    /// Cells of `frame` covered by the shape. With `fill == false` only boundary cells are kept.
    fn rasterize(&self, frame: &CellFrame, fill: bool) -> HashSet<Cell>;
}

impl Shape for Polygon<f64> {
    fn bounds(&self) -> Option<Rect<f64>> {
        self.bounding_rect()
    }

    fn rasterize(&self, frame: &CellFrame, fill: bool) -> HashSet<Cell> {
        polygon_to_discrete_cells_set(self, frame, fill)
    }
}

/// Parts are rasterized as one region, so they must not overlap. Buffered polygons satisfy this.
impl Shape for MultiPolygon<f64> {
    fn bounds(&self) -> Option<Rect<f64>> {
        self.bounding_rect()
    }

    fn rasterize(&self, frame: &CellFrame, fill: bool) -> HashSet<Cell> {
        let mut cells = HashSet::new();
        let mut areas = Vec::new();
        for part in self {
            match Region::of(part) {
                Some(Region::Area(polygon)) => areas.push(polygon),
                Some(degenerate) => cells.extend(degenerate.rasterize(frame, fill)),
                None => {}
            }
        }
        if !areas.is_empty() {
            cells.extend(rasterize_area(MultiPolygon::new(areas), frame, fill));
        }
        cells
    }
}

/// Rasterize `polygon` into the cells of `frame`.
pub fn polygon_to_discrete_cells_set(
    polygon: &Polygon<f64>,
    frame: &CellFrame,
    fill: bool,
) -> HashSet<Cell> {
    match Region::of(polygon) {
        Some(region) => region.rasterize(frame, fill),
        None => HashSet::new(),
    }
}

/// What a polygon covers once degenerate rings are collapsed.
pub(crate) enum Region {
    Area(Polygon<f64>),
    Segment(LineString<f64>),
    Point(Point<f64>),
}

impl Region {
    pub(crate) fn of(polygon: &Polygon<f64>) -> Option<Self> {
        let coords = &polygon.exterior().0;
        if coords.is_empty() {
            return None;
        }
        if polygon.unsigned_area() > 0.0 {
            return Some(Region::Area(polygon.clone()));
        }
        // Collinear vertices: the lexicographic extremes are the segment's endpoints.
        let order = |p: &&Coord<f64>, q: &&Coord<f64>| p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y));
        let a = *coords.iter().min_by(order)?;
        let b = *coords.iter().max_by(order)?;
        if a == b {
            Some(Region::Point(Point::from(a)))
        } else {
            Some(Region::Segment(LineString::new(vec![a, b])))
        }
    }

    fn rasterize(self, frame: &CellFrame, fill: bool) -> HashSet<Cell> {
        match self {
            Region::Area(polygon) => rasterize_area(MultiPolygon::new(vec![polygon]), frame, fill),
            Region::Segment(line) => {
                let mut cells = HashSet::new();
                let Some(range) = line.bounding_rect().and_then(|b| frame.cell_range(&b)) else {
                    return cells;
                };
                for_each_cell(range, |cell| {
                    let square = frame.cell_rect(cell).to_polygon();
                    if crosses_interior(&square, &line) {
                        cells.insert(cell);
                    }
                });
                cells
            }
            Region::Point(point) => {
                let cell = frame.world_to_cell(DVec2::new(point.x(), point.y()));
                let min = frame.cell_rect(cell).min();
                let strictly_inside = point.x() > min.x && point.y() > min.y;
                if strictly_inside && frame.contains(cell) {
                    HashSet::from([cell])
                } else {
                    HashSet::new()
                }
            }
        }
    }
}

/// Cells covered by a region of non-overlapping polygons with positive area.
///
/// Cells whose square misses every ring lie entirely inside or outside the region and are
/// classified by their centre. Only cells on a ring need the full relate test.
fn rasterize_area(region: MultiPolygon<f64>, frame: &CellFrame, fill: bool) -> HashSet<Cell> {
    let mut cells = HashSet::new();
    let Some(range) = region.bounding_rect().and_then(|b| frame.cell_range(&b)) else {
        return cells;
    };
    let rings: MultiLineString<f64> = region
        .iter()
        .flat_map(|p| std::iter::once(p.exterior()).chain(p.interiors()))
        .cloned()
        .collect();

    for_each_cell(range, |cell| {
        let square = frame.cell_rect(cell).to_polygon();
        if square.intersects(&rings) {
            if crosses_interior(&square, &region) {
                cells.insert(cell);
            }
        } else if fill && region.contains(&Point::from(to_coord(frame.cell_to_world(cell)))) {
            cells.insert(cell);
        }
    });
    cells
}

/// Whether the open interior of `square` meets the interior of `other`.
fn crosses_interior(square: &Polygon<f64>, other: &impl Relate<f64>) -> bool {
    let matrix = square.relate(other);
    matrix.is_intersects() && !matrix.is_touches()
}

fn for_each_cell((lo, hi): (Cell, Cell), mut f: impl FnMut(Cell)) {
    for ix in lo.0..=hi.0 {
        for iy in lo.1..=hi.1 {
            f((ix, iy));
        }
    }
}
