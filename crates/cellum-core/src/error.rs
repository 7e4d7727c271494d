//! Error types shared across the Cellum workspace.
//!
//! Split by concern: [`RulesetError`] covers rule table parsing and
//! construction, [`StateError`] covers caller-supplied cell patterns.

use std::error::Error;
use std::fmt;

use crate::id::CellState;

/// Errors from parsing or building a [`Ruleset`](crate::Ruleset).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RulesetError {
    /// The ruleset does not have one digit per possible neighbourhood.
    InvalidLength {
        /// `states ^ (neighbours + 1)`.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },
    /// A character is not a decimal digit below the state count.
    InvalidDigit {
        /// Zero-based character position within the ruleset.
        position: usize,
        /// The offending character.
        found: char,
        /// Number of states the automaton supports.
        states: u8,
    },
    /// The state count cannot be encoded as single ruleset digits.
    UnsupportedStateCount {
        /// The rejected state count.
        states: u8,
    },
    /// The totalistic builder needs an even neighbour count so the
    /// centre cell sits in the middle of the neighbourhood.
    UnsupportedNeighbourCount {
        /// The rejected neighbour count.
        neighbours: u32,
    },
    /// `states ^ (neighbours + 1)` does not fit in `usize`.
    LengthOverflow {
        /// Number of states.
        states: u8,
        /// Number of neighbours (self excluded).
        neighbours: u32,
    },
}

impl fmt::Display for RulesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(
                    f,
                    "invalid ruleset length: expected {expected} digits, got {actual}"
                )
            }
            Self::InvalidDigit {
                position,
                found,
                states,
            } => {
                write!(
                    f,
                    "invalid ruleset digit {found:?} at position {position}: \
                     allowed digits are 0..{states}"
                )
            }
            Self::UnsupportedStateCount { states } => {
                write!(f, "state count must be in 1..=10, got {states}")
            }
            Self::UnsupportedNeighbourCount { neighbours } => {
                write!(
                    f,
                    "totalistic rulesets need an even neighbour count, got {neighbours}"
                )
            }
            Self::LengthOverflow { states, neighbours } => {
                write!(
                    f,
                    "ruleset length {states}^({neighbours} + 1) overflows usize"
                )
            }
        }
    }
}

impl Error for RulesetError {}

/// Errors from a caller-supplied cell pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum StateError {
    /// A cell value lies outside `[0, states)`.
    OutOfRange {
        /// Flat (row-major) position of the offending cell.
        position: usize,
        /// The rejected value.
        value: CellState,
        /// Number of states the automaton supports.
        states: u8,
    },
    /// The pattern does not match the topology's shape.
    ShapeMismatch {
        /// Human-readable description of the expected shape.
        expected: String,
        /// Human-readable description of the supplied shape.
        actual: String,
    },
    /// A random-fill density outside `[0, 1]` (or NaN).
    InvalidDensity {
        /// The rejected density.
        density: f64,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                position,
                value,
                states,
            } => {
                write!(
                    f,
                    "invalid state {value} at cell {position}: allowed states are 0..{states}"
                )
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "pattern shape mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidDensity { density } => {
                write!(f, "density must be within [0, 1], got {density}")
            }
        }
    }
}

impl Error for StateError {}
