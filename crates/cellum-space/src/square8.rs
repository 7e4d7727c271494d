//! Square grid with the 8-cell Moore neighbourhood.

use cellum_core::{CellState, StateError};

use crate::boundary::BoundaryCondition;
use crate::error::SpaceError;
use crate::grid2d;
use crate::neighbourhood::Neighbourhood;
use crate::topology::{Topology, TopologyKind};

/// The 3×3 block around a cell, scanned row-major, self in the middle.
const OFFSETS_8: [(i64, i64); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A square grid whose cells see all eight surrounding cells.
///
/// Cells are addressed `[row, col]` and stored row-major. Out-of-range
/// rows and columns are resolved independently through the
/// [`BoundaryCondition`], so Periodic yields a torus and Neumann clamps
/// each axis to the nearest edge.
///
/// # Examples
///
/// ```
/// use cellum_space::{BoundaryCondition, Square8, Topology};
///
/// // Ten requested cells round up to a 4×4 grid.
/// let grid = Square8::with_cell_hint(10, BoundaryCondition::Periodic).unwrap();
/// assert_eq!(grid.side(), 4);
/// assert_eq!(grid.cell_count(), 16);
/// assert_eq!(grid.neighbourhood(5).len(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square8 {
    side: u32,
    boundary: BoundaryCondition,
}

impl Square8 {
    /// Create a `side × side` grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `side == 0`, or
    /// `Err(SpaceError::DimensionTooLarge)` if `side > i32::MAX`.
    pub fn new(side: u32, boundary: BoundaryCondition) -> Result<Self, SpaceError> {
        grid2d::check_side(side)?;
        Ok(Self { side, boundary })
    }

    /// Number of rows (and columns).
    pub fn side(&self) -> u32 {
        self.side
    }
}

impl Topology for Square8 {
    type Pattern = Vec<Vec<CellState>>;

    const KIND: TopologyKind = TopologyKind::Square8;

    fn with_cell_hint(cells: u32, boundary: BoundaryCondition) -> Result<Self, SpaceError> {
        Self::new(grid2d::side_for_cells(cells), boundary)
    }

    fn cell_count(&self) -> usize {
        (self.side as usize) * (self.side as usize)
    }

    fn centre_position(&self) -> usize {
        4
    }

    fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    fn neighbourhood(&self, index: usize) -> Neighbourhood {
        grid2d::neighbourhood_2d(index, self.side, &OFFSETS_8, self.boundary)
    }

    fn flatten(&self, pattern: &Vec<Vec<CellState>>) -> Result<Vec<CellState>, StateError> {
        grid2d::flatten_rows(pattern, self.side)
    }

    fn arrange(&self, flat: &[CellState]) -> Vec<Vec<CellState>> {
        grid2d::arrange_rows(flat, self.side)
    }
}
