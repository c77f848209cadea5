//! Poses, polygon construction and footprint radii in world coordinates.
use geo::{Centroid, Coord, LineString, Polygon, Rect};
use glam::DVec2;
use mint::Point2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Planar pose in world coordinates. `theta` is a heading in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose2 {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Pose2 {
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Translation part of the pose.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

pub fn to_coord(p: DVec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

pub fn to_dvec(c: Coord<f64>) -> DVec2 {
    DVec2::new(c.x, c.y)
}

/// Polygon without holes from anything convertible to [`mint::Point2`], e.g. `[f64; 2]` or `DVec2`.
///
/// The ring is closed automatically. A single point or a segment is accepted and rasterizes to the
/// cells it passes through.
pub fn polygon_from_points<P>(points: impl IntoIterator<Item = P>) -> Polygon<f64>
where
    P: Into<Point2<f64>>,
{
    let ring: Vec<Coord<f64>> = points
        .into_iter()
        .map(|p| {
            let p: Point2<f64> = p.into();
            Coord { x: p.x, y: p.y }
        })
        .collect();
    Polygon::new(LineString::new(ring), vec![])
}

/// Axis-aligned rectangle spanning `min`..`max`.
pub fn rectangle(min: DVec2, max: DVec2) -> Polygon<f64> {
    Rect::new(to_coord(min), to_coord(max)).to_polygon()
}

/// Largest distance from the centroid to a vertex.
pub fn circumscribed_radius(polygon: &Polygon<f64>) -> f64 {
    let Some(center) = polygon.centroid() else {
        return 0.0;
    };
    let center = to_dvec(center.0);
    polygon
        .exterior()
        .coords()
        .map(|c| to_dvec(*c).distance(center))
        .fold(0.0, f64::max)
}

/// Smallest distance from the centroid to an edge midpoint.
pub fn inscribed_radius(polygon: &Polygon<f64>) -> f64 {
    let Some(center) = polygon.centroid() else {
        return 0.0;
    };
    let center = to_dvec(center.0);
    polygon
        .exterior()
        .lines()
        .map(|l| ((to_dvec(l.start) + to_dvec(l.end)) * 0.5).distance(center))
        .fold(f64::INFINITY, f64::min)
}
