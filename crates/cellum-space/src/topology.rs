//! The `Topology` trait and the closed set of topology kinds.

use std::fmt;

use cellum_core::{CellState, StateError};

use crate::boundary::BoundaryCondition;
use crate::error::SpaceError;
use crate::neighbourhood::Neighbourhood;

/// The built-in topologies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopologyKind {
    /// 1D line, neighbours `[left, self, right]`.
    Line1D,
    /// 2D square grid with the 8-cell Moore neighbourhood.
    Square8,
    /// 2D square grid with the 4-cell von Neumann neighbourhood.
    Square4,
}

impl TopologyKind {
    /// Number of spatial dimensions.
    pub fn ndim(self) -> usize {
        match self {
            Self::Line1D => 1,
            Self::Square8 | Self::Square4 => 2,
        }
    }

    /// Neighbours per cell, self excluded.
    pub fn neighbour_count(self) -> u32 {
        match self {
            Self::Line1D => 2,
            Self::Square8 => 8,
            Self::Square4 => 4,
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line1D => "line1d",
            Self::Square8 => "square8",
            Self::Square4 => "square4",
        };
        f.write_str(name)
    }
}

/// Shape and neighbour wiring of an automaton.
///
/// A topology owns no cell state. It maps a requested cell count to a
/// concrete shape, fixes a canonical neighbour order, and resolves each
/// neighbour through its [`BoundaryCondition`]. The engine calls
/// [`neighbourhood`](Self::neighbourhood) once per cell at construction
/// and caches the result.
///
/// Cells are addressed by flat row-major index in `0..cell_count()`.
pub trait Topology: fmt::Debug + Clone + Send + Sync + 'static {
    /// The natural shape of a full-grid pattern for this topology.
    type Pattern: Clone + fmt::Debug + PartialEq;

    /// Which built-in topology this is.
    const KIND: TopologyKind;

    /// Build the topology for at least `cells` cells.
    ///
    /// Topologies with a fixed aspect ratio may round up.
    fn with_cell_hint(cells: u32, boundary: BoundaryCondition) -> Result<Self, SpaceError>;

    /// Number of spatial dimensions.
    fn ndim(&self) -> usize {
        Self::KIND.ndim()
    }

    /// Total number of cells.
    fn cell_count(&self) -> usize;

    /// Neighbours per cell, self excluded.
    fn neighbour_count(&self) -> u32 {
        Self::KIND.neighbour_count()
    }

    /// Position of the cell itself within its canonical neighbourhood.
    fn centre_position(&self) -> usize;

    /// The boundary condition fixed at construction.
    fn boundary(&self) -> BoundaryCondition;

    /// The resolved neighbourhood of cell `index`, self included, in
    /// canonical order. Length is always `neighbour_count() + 1`.
    fn neighbourhood(&self, index: usize) -> Neighbourhood;

    /// Neighbourhoods of every cell, indexed by cell.
    fn neighbourhoods(&self) -> Vec<Neighbourhood> {
        (0..self.cell_count())
            .map(|i| self.neighbourhood(i))
            .collect()
    }

    /// Convert a pattern into a flat row-major state vector.
    ///
    /// Fails with [`StateError::ShapeMismatch`] if the pattern does not
    /// cover exactly this topology's cells. Values are not range-checked.
    fn flatten(&self, pattern: &Self::Pattern) -> Result<Vec<CellState>, StateError>;

    /// Convert a flat row-major state vector into this topology's pattern shape.
    fn arrange(&self, flat: &[CellState]) -> Self::Pattern;
}
