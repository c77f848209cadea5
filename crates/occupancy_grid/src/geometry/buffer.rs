//! Outward buffering of footprints by a fixed radius.
use geo::{Buffer, MultiPolygon, Polygon};

use super::raster::Region;

/// Grow `polygon` outward by `radius` in all directions.
///
/// The result is a single merged region (round joins), so its parts never overlap. Zero-area
/// polygons grow into the capsule or disc around the segment or point they collapse to.
/// Non-positive or non-finite radii return the polygon unchanged.
pub fn inflate(polygon: &Polygon<f64>, radius: f64) -> MultiPolygon<f64> {
    if !radius.is_finite() || radius <= 0.0 {
        return MultiPolygon::new(vec![polygon.clone()]);
    }
    match Region::of(polygon) {
        Some(Region::Area(area)) => area.buffer(radius),
        Some(Region::Segment(line)) => line.buffer(radius),
        Some(Region::Point(point)) => point.buffer(radius),
        None => MultiPolygon::new(vec![polygon.clone()]),
    }
}

#[cfg(test)]
mod tests {
    use geo::{Area, BoundingRect, Contains, Point};
    use glam::DVec2;

    use super::*;
    use crate::geometry::polygon::{polygon_from_points, rectangle};

    #[test]
    fn zero_radius_is_identity() {
        let sq = rectangle(DVec2::ZERO, DVec2::ONE);
        assert_eq!(inflate(&sq, 0.0), MultiPolygon::new(vec![sq.clone()]));
        assert_eq!(inflate(&sq, f64::NAN), MultiPolygon::new(vec![sq]));
    }

    #[test]
    fn buffer_contains_original_and_margin() {
        let sq = rectangle(DVec2::ZERO, DVec2::new(2.0, 1.0));
        let buffered = inflate(&sq, 0.5);
        assert_eq!(buffered.0.len(), 1);

        assert!(buffered.contains(&Point::new(1.0, 0.5)));
        assert!(buffered.contains(&Point::new(-0.45, 0.5)));
        assert!(buffered.contains(&Point::new(1.0, 1.45)));
        let corner = DVec2::new(2.0, 1.0) + DVec2::new(1.0, 1.0).normalize() * 0.45;
        assert!(buffered.contains(&Point::new(corner.x, corner.y)));
        assert!(!buffered.contains(&Point::new(3.0, 0.5)));

        let bounds = buffered.bounding_rect().unwrap();
        assert!((bounds.min().x + 0.5).abs() < 1e-6);
        assert!((bounds.max().y - 1.5).abs() < 1e-6);
        assert!(buffered.unsigned_area() > sq.unsigned_area());
    }

    #[test]
    fn buffered_point_is_a_disc() {
        let point = polygon_from_points([[1.0, 1.0]]);
        let buffered = inflate(&point, 1.0);
        assert!(buffered.contains(&Point::new(1.9, 1.0)));
        assert!(buffered.contains(&Point::new(1.0, 0.1)));
        assert!(!buffered.contains(&Point::new(2.2, 1.0)));
    }

    #[test]
    fn buffered_segment_is_a_capsule() {
        let segment = polygon_from_points([[0.0, 0.0], [4.0, 0.0]]);
        let buffered = inflate(&segment, 1.0);
        assert!(buffered.contains(&Point::new(2.0, 0.9)));
        assert!(buffered.contains(&Point::new(-0.9, 0.0)));
        assert!(!buffered.contains(&Point::new(2.0, 1.1)));
    }
}
