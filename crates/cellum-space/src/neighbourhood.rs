//! Neighbour references into a topology's cell arena.

use cellum_core::CellState;
use smallvec::SmallVec;

/// A resolved neighbour of a cell.
///
/// Neighbours are indices into the owning automaton's flat cell storage,
/// or a constant substituted by a Dirichlet boundary. No neighbour holds a
/// reference to another cell, so a neighbourhood can never outlive or
/// alias the storage it describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeighbourRef {
    /// A grid cell, by flat row-major index.
    Cell(usize),
    /// A grid-external cell fixed at this state.
    Constant(CellState),
}

impl NeighbourRef {
    /// Read this neighbour's state from a flat state buffer.
    #[inline]
    pub fn state(self, states: &[CellState]) -> CellState {
        match self {
            Self::Cell(i) => states[i],
            Self::Constant(s) => s,
        }
    }
}

/// A cell's neighbourhood in canonical order, self included.
///
/// Inline capacity of 9 covers the largest built-in topology (Moore).
pub type Neighbourhood = SmallVec<[NeighbourRef; 9]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_reads_cells_and_constants() {
        let states = [0, 1, 0, 1];
        assert_eq!(NeighbourRef::Cell(1).state(&states), 1);
        assert_eq!(NeighbourRef::Cell(2).state(&states), 0);
        assert_eq!(NeighbourRef::Constant(1).state(&states), 1);
    }
}
