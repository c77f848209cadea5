//! Binary occupancy grid with per-cell owner counting.
//!
//! The grid keeps two views of the same state in sync:
//! - a dense, column-major array holding for every cell the number of entities covering it;
//! - a map from entity ID to the set of cells its footprint covers.
//!
//! Both views change only through [`BinaryOccupancyGrid::update`].
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use glam::DVec2;
use tracing::{debug, warn};

use crate::config::validate_resolution;
use crate::error::{Error, Result};
use crate::geometry::{Cell, CellFrame, Pose2, Shape};
use crate::grid::neighborhood::Neighborhood;
use crate::grid::owner::CellOwner;
use crate::grid::params::{grid_parameters, GridParameters};

/// Occupancy grid tracking which entities cover which cells.
#[derive(Clone, Debug)]
pub struct BinaryOccupancyGrid<K> {
    resolution: f64,
    params: GridParameters,
    frame: CellFrame,
    neighborhood: Neighborhood,
    cells_sets: HashMap<K, HashSet<Cell>>,
    grid: Vec<i32>,
}

impl<K> BinaryOccupancyGrid<K>
where
    K: Eq + Hash + Clone,
{
    /// Build a grid sized to cover `polygons` and register every polygon.
    pub fn new<S>(
        polygons: &HashMap<K, S>,
        resolution: f64,
        neighborhood: Neighborhood,
    ) -> Result<Self>
    where
        S: Shape,
    {
        let params = grid_parameters(polygons, resolution)?;
        Self::with_params(polygons, resolution, neighborhood, params)
    }

    /// Build a grid over precomputed `params` and register every polygon.
    ///
    /// Footprint cells outside `params` are clipped.
    pub fn with_params<S>(
        polygons: &HashMap<K, S>,
        resolution: f64,
        neighborhood: Neighborhood,
        params: GridParameters,
    ) -> Result<Self>
    where
        S: Shape,
    {
        let mut grid = Self::empty(resolution, neighborhood, params)?;
        grid.update(polygons, std::iter::empty());
        Ok(grid)
    }

    /// Grid over `params` with no entities.
    pub fn empty(
        resolution: f64,
        neighborhood: Neighborhood,
        params: GridParameters,
    ) -> Result<Self> {
        validate_resolution(resolution)?;
        let frame = params.frame(resolution);
        Ok(Self {
            resolution,
            params,
            frame,
            neighborhood,
            cells_sets: HashMap::new(),
            grid: vec![0; frame.len()],
        })
    }

    /// Reconcile the grid with changed footprints.
    ///
    /// Every entity in `new_polygons` has its previous footprint (if any) released before the
    /// new one is rasterized and counted. Every entity in `removed_polygons` has its footprint
    /// released and is forgotten; unknown IDs are ignored. Removals are applied after all
    /// additions, so an ID present in both ends up removed.
    pub fn update<'n, 's, 'r, S, N, R>(&mut self, new_polygons: N, removed_polygons: R)
    where
        K: 'n + 'r,
        S: Shape + 's,
        N: IntoIterator<Item = (&'n K, &'s S)>,
        R: IntoIterator<Item = &'r K>,
    {
        let fill = self.neighborhood.fills_interior();
        let mut added = 0usize;
        let mut moved = 0usize;
        let mut removed = 0usize;

        for (id, shape) in new_polygons {
            if let Some(previous) = self.cells_sets.remove(id) {
                adjust_counts(&mut self.grid, &self.frame, &previous, -1);
                moved += 1;
            } else {
                added += 1;
            }
            let cells = shape.rasterize(&self.frame, fill);
            adjust_counts(&mut self.grid, &self.frame, &cells, 1);
            self.cells_sets.insert(id.clone(), cells);
        }

        for id in removed_polygons {
            match self.cells_sets.remove(id) {
                Some(previous) => {
                    adjust_counts(&mut self.grid, &self.frame, &previous, -1);
                    removed += 1;
                }
                None => warn!("Ignoring removal of an entity that is not in the grid."),
            }
        }

        debug!(
            added,
            moved,
            removed,
            entities = self.cells_sets.len(),
            "Occupancy grid updated."
        );
    }

    /// Add or move a single entity.
    pub fn insert<S>(&mut self, id: K, shape: &S)
    where
        S: Shape,
    {
        self.update([(&id, shape)], std::iter::empty());
    }

    /// Remove a single entity, returning `true` if it was present.
    pub fn remove(&mut self, id: &K) -> bool {
        match self.cells_sets.remove(id) {
            Some(previous) => {
                adjust_counts(&mut self.grid, &self.frame, &previous, -1);
                true
            }
            None => false,
        }
    }

    /// Classify `cell` as unowned, contested or owned by a single entity.
    ///
    /// Cells outside the grid are unowned. A cell counted once that no entity claims means the
    /// bookkeeping is broken and yields [`Error::Invariant`].
    pub fn only_obstacle_uid_in_cell(&self, cell: Cell) -> Result<CellOwner<K>> {
        match self.count(cell) {
            0 => Ok(CellOwner::Unowned),
            1 => self
                .cells_sets
                .iter()
                .find(|(_, cells)| cells.contains(&cell))
                .map(|(id, _)| CellOwner::Owned(id.clone()))
                .ok_or_else(|| {
                    Error::Invariant(format!(
                        "cell ({}, {}) is counted once but no entity claims it",
                        cell.0, cell.1
                    ))
                }),
            n if n > 1 => Ok(CellOwner::Contested),
            n => Err(Error::Invariant(format!(
                "cell ({}, {}) has negative count {n}",
                cell.0, cell.1
            ))),
        }
    }

    /// Number of entities covering `cell`; zero outside the grid.
    pub fn count(&self, cell: Cell) -> i32 {
        self.frame.index(cell).map_or(0, |i| self.grid[i])
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.count(cell) != 0
    }

    /// Returns `true` if any of `cells` is occupied.
    pub fn is_cells_set_colliding<'a>(&self, cells: impl IntoIterator<Item = &'a Cell>) -> bool {
        cells.into_iter().any(|c| self.is_occupied(*c))
    }

    /// In-grid neighbours of `cell` under the grid's neighbourhood.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.neighborhood
            .neighbors_of(cell)
            .filter(move |c| self.frame.contains(*c))
    }

    /// In-grid neighbours of `cell` that no entity occupies.
    pub fn free_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.neighbors(cell).filter(move |c| !self.is_occupied(*c))
    }

    /// Cells currently covered by entity `id`.
    pub fn cells_of(&self, id: &K) -> Option<&HashSet<Cell>> {
        self.cells_sets.get(id)
    }

    pub fn contains_entity(&self, id: &K) -> bool {
        self.cells_sets.contains_key(id)
    }

    pub fn entity_ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.cells_sets.keys()
    }

    /// Number of cells covered by at least one entity.
    pub fn occupied_cell_count(&self) -> usize {
        self.grid.iter().filter(|&&c| c != 0).count()
    }

    /// Dense counts, column-major: `counts()[ix * d_height + iy]`.
    pub fn counts(&self) -> &[i32] {
        &self.grid
    }

    /// Cell containing the world position `p`. The result may be out of bounds.
    pub fn real_to_grid(&self, p: DVec2) -> Cell {
        self.frame.world_to_cell(p)
    }

    /// World position of the centre of `cell`.
    pub fn grid_to_real(&self, cell: Cell) -> DVec2 {
        self.frame.cell_to_world(cell)
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn params(&self) -> &GridParameters {
        &self.params
    }

    pub fn frame(&self) -> &CellFrame {
        &self.frame
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    pub fn grid_pose(&self) -> Pose2 {
        self.params.grid_pose
    }

    pub fn d_width(&self) -> usize {
        self.params.d_width
    }

    pub fn d_height(&self) -> usize {
        self.params.d_height
    }

    /// Recompute the counts from the per-entity cell sets and compare with the stored ones.
    pub fn check_consistency(&self) -> Result<()> {
        let mut expected = vec![0; self.grid.len()];
        for cells in self.cells_sets.values() {
            for cell in cells {
                let Some(i) = self.frame.index(*cell) else {
                    return Err(Error::Invariant(format!(
                        "cell ({}, {}) lies outside the grid",
                        cell.0, cell.1
                    )));
                };
                expected[i] += 1;
            }
        }
        match expected.iter().zip(&self.grid).position(|(e, g)| e != g) {
            None => Ok(()),
            Some(i) => Err(Error::Invariant(format!(
                "cell ({}, {}) is counted {} times but claimed {} times",
                i / self.frame.height,
                i % self.frame.height,
                self.grid[i],
                expected[i]
            ))),
        }
    }
}

fn adjust_counts(grid: &mut [i32], frame: &CellFrame, cells: &HashSet<Cell>, delta: i32) {
    for cell in cells {
        if let Some(i) = frame.index(*cell) {
            grid[i] += delta;
        }
    }
}
