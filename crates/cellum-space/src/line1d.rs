//! 1D line of cells with neighbourhood `[left, self, right]`.

use cellum_core::{CellState, StateError};

use crate::boundary::BoundaryCondition;
use crate::error::SpaceError;
use crate::neighbourhood::Neighbourhood;
use crate::topology::{Topology, TopologyKind};

/// Canonical neighbour offsets: left, self, right.
const OFFSETS_1D: [i64; 3] = [-1, 0, 1];

/// A one-dimensional line of cells.
///
/// Cell `i` has neighbourhood `[i - 1, i, i + 1]`, with the two outer
/// entries resolved through the [`BoundaryCondition`] when they fall off
/// either end.
///
/// # Examples
///
/// ```
/// use cellum_space::{BoundaryCondition, Line1D, NeighbourRef, Topology};
///
/// let line = Line1D::new(5, BoundaryCondition::Neumann).unwrap();
/// assert_eq!(line.cell_count(), 5);
///
/// // Left edge replicates the first cell.
/// let hood = line.neighbourhood(0);
/// assert_eq!(hood.as_slice(), &[NeighbourRef::Cell(0), NeighbourRef::Cell(0), NeighbourRef::Cell(1)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line1D {
    len: u32,
    boundary: BoundaryCondition,
}

impl Line1D {
    /// Maximum length: coordinates are resolved as signed offsets and
    /// stored as `i32`-sized extents.
    pub const MAX_LEN: u32 = i32::MAX as u32;

    /// Create a line with exactly `len` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `len == 0`, or
    /// `Err(SpaceError::DimensionTooLarge)` if `len > i32::MAX`.
    pub fn new(len: u32, boundary: BoundaryCondition) -> Result<Self, SpaceError> {
        if len == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if len > Self::MAX_LEN {
            return Err(SpaceError::DimensionTooLarge {
                name: "len",
                value: len as u64,
                max: Self::MAX_LEN as u64,
            });
        }
        Ok(Self { len, boundary })
    }

    /// Number of cells.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always returns `false`; construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Topology for Line1D {
    type Pattern = Vec<CellState>;

    const KIND: TopologyKind = TopologyKind::Line1D;

    fn with_cell_hint(cells: u32, boundary: BoundaryCondition) -> Result<Self, SpaceError> {
        Self::new(cells, boundary)
    }

    fn cell_count(&self) -> usize {
        self.len as usize
    }

    fn centre_position(&self) -> usize {
        1
    }

    fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    fn neighbourhood(&self, index: usize) -> Neighbourhood {
        let i = index as i64;
        OFFSETS_1D
            .iter()
            .map(|&d| self.boundary.resolve(&[i + d], &[self.len]))
            .collect()
    }

    fn flatten(&self, pattern: &Vec<CellState>) -> Result<Vec<CellState>, StateError> {
        if pattern.len() != self.len as usize {
            return Err(StateError::ShapeMismatch {
                expected: format!("{} cells", self.len),
                actual: format!("{} cells", pattern.len()),
            });
        }
        Ok(pattern.clone())
    }

    fn arrange(&self, flat: &[CellState]) -> Vec<CellState> {
        flat.to_vec()
    }
}
