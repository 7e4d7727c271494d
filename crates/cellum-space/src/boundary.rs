//! Boundary conditions for neighbours that fall outside the grid.

use std::fmt;
use std::str::FromStr;

use cellum_core::CellState;

use crate::error::SpaceError;
use crate::neighbourhood::NeighbourRef;

/// How a topology resolves a neighbour coordinate outside its extent.
///
/// Resolution happens once per (cell, direction) pair when the topology's
/// neighbourhoods are built, never per generation.
///
/// # Examples
///
/// ```
/// use cellum_space::{BoundaryCondition, NeighbourRef};
///
/// let extents = [5u32];
/// assert_eq!(BoundaryCondition::Periodic.resolve(&[-1], &extents), NeighbourRef::Cell(4));
/// assert_eq!(BoundaryCondition::Neumann.resolve(&[5], &extents), NeighbourRef::Cell(4));
/// assert_eq!(BoundaryCondition::Dirichlet1.resolve(&[-1], &extents), NeighbourRef::Constant(1));
/// // In-range coordinates ignore the policy.
/// assert_eq!(BoundaryCondition::Dirichlet0.resolve(&[2], &extents), NeighbourRef::Cell(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryCondition {
    /// Out-of-range neighbour is a constant cell of state 0.
    Dirichlet0,
    /// Out-of-range neighbour is a constant cell of state 1.
    Dirichlet1,
    /// Coordinates wrap modulo the extent (torus in 2D).
    Periodic,
    /// Coordinates clamp to the nearest in-range value (edge replication).
    Neumann,
}

impl BoundaryCondition {
    /// Every policy, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Dirichlet0,
        Self::Dirichlet1,
        Self::Periodic,
        Self::Neumann,
    ];

    /// The constant state substituted for out-of-range neighbours, if any.
    pub fn substitute_state(self) -> Option<CellState> {
        match self {
            Self::Dirichlet0 => Some(0),
            Self::Dirichlet1 => Some(1),
            Self::Periodic | Self::Neumann => None,
        }
    }

    /// Policy name as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dirichlet0 => "Dirichlet0",
            Self::Dirichlet1 => "Dirichlet1",
            Self::Periodic => "Periodic",
            Self::Neumann => "Neumann",
        }
    }

    /// Resolve a (possibly out-of-range) coordinate against `extents`.
    ///
    /// `coord` and `extents` are ordered outermost axis first; the returned
    /// cell index is row-major. Each axis is resolved independently, and a
    /// Dirichlet policy yields a constant as soon as any axis is out of
    /// range.
    pub fn resolve(self, coord: &[i64], extents: &[u32]) -> NeighbourRef {
        debug_assert_eq!(coord.len(), extents.len());
        let mut index = 0usize;
        for (&value, &len) in coord.iter().zip(extents) {
            let n = len as i64;
            let axis = if (0..n).contains(&value) {
                value
            } else {
                match self {
                    Self::Dirichlet0 => return NeighbourRef::Constant(0),
                    Self::Dirichlet1 => return NeighbourRef::Constant(1),
                    Self::Periodic => value.rem_euclid(n),
                    Self::Neumann => value.clamp(0, n - 1),
                }
            };
            index = index * len as usize + axis as usize;
        }
        NeighbourRef::Cell(index)
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryCondition {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SpaceError::UnknownBoundary {
                name: trimmed.to_string(),
            })
    }
}
