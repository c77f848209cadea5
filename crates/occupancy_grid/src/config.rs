//! Grid configuration shared by the plain and inflated occupancy grids.
use std::collections::HashMap;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{Polygon, Shape};
use crate::grid::{BinaryInflatedOccupancyGrid, BinaryOccupancyGrid, Neighborhood};

/// Configuration for building occupancy grids.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Edge length of one cell in world units.
    pub resolution: f64,
    /// Connectivity; eight-connected grids fill polygon interiors.
    pub neighborhood: Neighborhood,
    /// Radius added around every polygon by inflated grids.
    pub inflation_radius: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: 0.05,
            neighborhood: Neighborhood::default(),
            inflation_radius: 0.0,
        }
    }
}

impl GridConfig {
    /// Creates a new [`GridConfig`] with the specified resolution.
    pub fn new(resolution: f64) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }

    /// Sets the neighborhood.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the inflation radius.
    pub fn with_inflation_radius(mut self, inflation_radius: f64) -> Self {
        self.inflation_radius = inflation_radius;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        validate_resolution(self.resolution)?;
        validate_inflation_radius(self.inflation_radius)
    }

    /// Builds a plain occupancy grid over `polygons`. The inflation radius is ignored.
    pub fn build<K, S>(&self, polygons: &HashMap<K, S>) -> Result<BinaryOccupancyGrid<K>>
    where
        K: Eq + Hash + Clone,
        S: Shape,
    {
        validate_resolution(self.resolution)?;
        BinaryOccupancyGrid::new(polygons, self.resolution, self.neighborhood)
    }

    /// Builds an inflated occupancy grid over `polygons`.
    pub fn build_inflated<K>(
        &self,
        polygons: &HashMap<K, Polygon>,
    ) -> Result<BinaryInflatedOccupancyGrid<K>>
    where
        K: Eq + Hash + Clone,
    {
        self.validate()?;
        BinaryInflatedOccupancyGrid::new(
            polygons,
            self.resolution,
            self.inflation_radius,
            self.neighborhood,
        )
    }
}

pub(crate) fn validate_resolution(resolution: f64) -> Result<()> {
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(Error::InvalidConfig(
            "resolution must be finite and > 0".into(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_inflation_radius(inflation_radius: f64) -> Result<()> {
    if !inflation_radius.is_finite() || inflation_radius < 0.0 {
        return Err(Error::InvalidConfig(
            "inflation_radius must be finite and >= 0".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = GridConfig::new(0.1)
            .with_neighborhood(Neighborhood::EightConnected)
            .with_inflation_radius(0.3);
        assert_eq!(config.resolution, 0.1);
        assert_eq!(config.neighborhood, Neighborhood::EightConnected);
        assert_eq!(config.inflation_radius, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_is_valid() {
        let config = GridConfig::default();
        assert_eq!(config.neighborhood, Neighborhood::FourConnected);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            GridConfig::new(0.0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            GridConfig::new(-1.0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            GridConfig::new(1.0).with_inflation_radius(-0.1).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            GridConfig::new(1.0)
                .with_inflation_radius(f64::INFINITY)
                .validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn builds_both_grid_kinds() {
        let polygons = HashMap::from([(
            7u32,
            crate::geometry::rectangle(DVec2::ZERO, DVec2::new(2.0, 2.0)),
        )]);
        let config = GridConfig::new(1.0)
            .with_neighborhood(Neighborhood::EightConnected)
            .with_inflation_radius(0.5);

        let plain = config.build(&polygons).unwrap();
        assert_eq!(plain.occupied_cell_count(), 4);

        let inflated = config.build_inflated(&polygons).unwrap();
        assert_eq!(inflated.inflation_radius(), 0.5);
        assert_eq!(inflated.params(), plain.params());
    }
}
