//! Square grid with the 4-cell von Neumann neighbourhood.

use cellum_core::{CellState, StateError};

use crate::boundary::BoundaryCondition;
use crate::error::SpaceError;
use crate::grid2d;
use crate::neighbourhood::Neighbourhood;
use crate::topology::{Topology, TopologyKind};

/// Up, left, self, right, down.
const OFFSETS_4: [(i64, i64); 5] = [(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)];

/// A square grid whose cells see the four orthogonally adjacent cells.
///
/// Same shape, storage and boundary handling as [`Square8`](crate::Square8);
/// only the neighbourhood differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square4 {
    side: u32,
    boundary: BoundaryCondition,
}

impl Square4 {
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

impl Topology for Square4 {
    type Pattern = Vec<Vec<CellState>>;

    const KIND: TopologyKind = TopologyKind::Square4;

    fn with_cell_hint(cells: u32, boundary: BoundaryCondition) -> Result<Self, SpaceError> {
        Self::new(grid2d::side_for_cells(cells), boundary)
    }

    fn cell_count(&self) -> usize {
        (self.side as usize) * (self.side as usize)
    }

    fn centre_position(&self) -> usize {
        2
    }

    fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    fn neighbourhood(&self, index: usize) -> Neighbourhood {
        grid2d::neighbourhood_2d(index, self.side, &OFFSETS_4, self.boundary)
    }

    fn flatten(&self, pattern: &Vec<Vec<CellState>>) -> Result<Vec<CellState>, StateError> {
        grid2d::flatten_rows(pattern, self.side)
    }

    fn arrange(&self, flat: &[CellState]) -> Vec<Vec<CellState>> {
        grid2d::arrange_rows(flat, self.side)
    }
}
