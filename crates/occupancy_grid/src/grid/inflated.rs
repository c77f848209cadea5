//! Occupancy grid over footprints buffered by a fixed radius.
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Deref;

use tracing::debug;

use crate::config::{validate_inflation_radius, validate_resolution};
use crate::error::Result;
use crate::geometry::{inflate, MultiPolygon, Polygon};
use crate::grid::binary::BinaryOccupancyGrid;
use crate::grid::neighborhood::Neighborhood;
use crate::grid::params::{grid_parameters, GridParameters};

/// [`BinaryOccupancyGrid`] whose footprints are every polygon grown by `inflation_radius`.
///
/// The frame is computed from the polygons before buffering, so inflated cells beyond the
/// outermost polygons are clipped. Read access goes through [`Deref`] to the inner grid.
#[derive(Clone, Debug)]
pub struct BinaryInflatedOccupancyGrid<K> {
    inner: BinaryOccupancyGrid<K>,
    inflation_radius: f64,
}

impl<K> BinaryInflatedOccupancyGrid<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new(
        polygons: &HashMap<K, Polygon>,
        resolution: f64,
        inflation_radius: f64,
        neighborhood: Neighborhood,
    ) -> Result<Self> {
        let params = grid_parameters(polygons, resolution)?;
        Self::with_params(polygons, resolution, inflation_radius, neighborhood, params)
    }

    /// Build over precomputed `params`, e.g. those of a plain grid of the same polygons.
    pub fn with_params(
        polygons: &HashMap<K, Polygon>,
        resolution: f64,
        inflation_radius: f64,
        neighborhood: Neighborhood,
        params: GridParameters,
    ) -> Result<Self> {
        validate_resolution(resolution)?;
        validate_inflation_radius(inflation_radius)?;
        debug!(
            inflation_radius,
            entities = polygons.len(),
            "Building inflated occupancy grid."
        );
        let mut grid = Self {
            inner: BinaryOccupancyGrid::empty(resolution, neighborhood, params)?,
            inflation_radius,
        };
        grid.update(polygons, std::iter::empty());
        Ok(grid)
    }

    /// Same contract as [`BinaryOccupancyGrid::update`]; new polygons are buffered first.
    ///
    /// The caller's polygons are not modified.
    pub fn update<'n, 'r, N, R>(&mut self, new_polygons: N, removed_polygons: R)
    where
        K: 'n + 'r,
        N: IntoIterator<Item = (&'n K, &'n Polygon)>,
        R: IntoIterator<Item = &'r K>,
    {
        let buffered: Vec<(&K, MultiPolygon)> = new_polygons
            .into_iter()
            .map(|(id, polygon)| (id, inflate(polygon, self.inflation_radius)))
            .collect();
        self.inner.update(
            buffered.iter().map(|(id, shape)| (*id, shape)),
            removed_polygons,
        );
    }

    /// Add or move a single entity.
    pub fn insert(&mut self, id: K, polygon: &Polygon) {
        self.inner.insert(id, &inflate(polygon, self.inflation_radius));
    }

    /// Remove a single entity, returning `true` if it was present.
    pub fn remove(&mut self, id: &K) -> bool {
        self.inner.remove(id)
    }

    pub fn inflation_radius(&self) -> f64 {
        self.inflation_radius
    }

    pub fn inner(&self) -> &BinaryOccupancyGrid<K> {
        &self.inner
    }

    pub fn into_inner(self) -> BinaryOccupancyGrid<K> {
        self.inner
    }
}

impl<K> Deref for BinaryInflatedOccupancyGrid<K> {
    type Target = BinaryOccupancyGrid<K>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
