//! Error types for topology construction.

use std::fmt;

/// Errors arising from topology construction or boundary parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a topology with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (e.g. "len", "side").
        name: &'static str,
        /// The requested size.
        value: u64,
        /// The maximum allowed size.
        max: u64,
    },
    /// A boundary condition name did not match any known policy.
    UnknownBoundary {
        /// The unrecognised name.
        name: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "dimension '{name}' = {value} exceeds maximum {max}")
            }
            Self::UnknownBoundary { name } => {
                write!(
                    f,
                    "unknown boundary condition {name:?}: expected one of \
                     Dirichlet0, Dirichlet1, Periodic, Neumann"
                )
            }
        }
    }
}

impl std::error::Error for SpaceError {}
