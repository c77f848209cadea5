//! Cell connectivity.
//!
//! [`Neighborhood`] picks both the adjacency used for neighbour queries and the rasterization
//! mode of the grid: eight-connected grids fill polygon interiors, four-connected grids only
//! trace polygon boundaries.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Cell;

/// Offsets of the four edge-adjacent cells.
pub const TAXI_OFFSETS: [Cell; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Offsets of the eight edge- or corner-adjacent cells.
pub const CHESSBOARD_OFFSETS: [Cell; 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Cell connectivity of an occupancy grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Neighborhood {
    /// Taxicab adjacency; polygons are rasterized as boundaries only.
    #[default]
    FourConnected,
    /// Chessboard adjacency; polygons are rasterized with their interiors.
    EightConnected,
}

impl Neighborhood {
    /// Whether rasterization fills polygon interiors.
    pub fn fills_interior(self) -> bool {
        matches!(self, Neighborhood::EightConnected)
    }

    pub fn offsets(self) -> &'static [Cell] {
        match self {
            Neighborhood::FourConnected => &TAXI_OFFSETS,
            Neighborhood::EightConnected => &CHESSBOARD_OFFSETS,
        }
    }

    /// Neighbours of `cell`, without any bounds check.
    pub fn neighbors_of(self, cell: Cell) -> impl Iterator<Item = Cell> {
        self.offsets()
            .iter()
            .map(move |(dx, dy)| (cell.0 + dx, cell.1 + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_mode_follows_connectivity() {
        assert!(!Neighborhood::FourConnected.fills_interior());
        assert!(Neighborhood::EightConnected.fills_interior());
        assert_eq!(Neighborhood::default(), Neighborhood::FourConnected);
    }

    #[test]
    fn neighbors_are_offset_from_cell() {
        let four: Vec<_> = Neighborhood::FourConnected.neighbors_of((2, 3)).collect();
        assert_eq!(four, vec![(2, 4), (2, 2), (3, 3), (1, 3)]);

        let eight: Vec<_> = Neighborhood::EightConnected.neighbors_of((0, 0)).collect();
        assert_eq!(eight.len(), 8);
        assert!(eight.contains(&(-1, -1)));
        assert!(!eight.contains(&(0, 0)));
    }
}
