//! Topologies and boundary conditions for Cellum automata.
//!
//! A [`Topology`] fixes the shape of an automaton and, for every cell, the
//! canonical order of the neighbours whose states form the ruleset lookup
//! code. Neighbours that fall outside the grid are resolved once, up front,
//! by a [`BoundaryCondition`].
//!
//! # Topologies
//!
//! - [`Line1D`]: 1D line, neighbourhood `[left, self, right]`
//! - [`Square8`]: 2D square grid, 3×3 Moore neighbourhood
//! - [`Square4`]: 2D square grid, von Neumann neighbourhood

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod grid2d;
pub mod line1d;
pub mod neighbourhood;
pub mod square4;
pub mod square8;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use boundary::BoundaryCondition;
pub use error::SpaceError;
pub use line1d::Line1D;
pub use neighbourhood::{NeighbourRef, Neighbourhood};
pub use square4::Square4;
pub use square8::Square8;
pub use topology::{Topology, TopologyKind};
