//! Runtime errors for automaton operations.

use std::error::Error;
use std::fmt;

use cellum_core::StateError;

/// Errors from seeding, evolving, or navigating an automaton.
///
/// Every operation that returns one of these leaves the automaton exactly
/// as it was before the call.
#[derive(Clone, Debug, PartialEq)]
pub enum AutomatonError {
    /// The supplied pattern was rejected.
    InvalidState(StateError),
    /// Evolution or navigation was attempted before an initial state was
    /// configured (or after [`reset`](crate::Automaton::reset)).
    NotInitialized,
    /// `devolve` was called at generation 0.
    NoPreviousGeneration,
    /// A generation index beyond the recorded history was requested.
    GenerationOutOfRange {
        /// The requested generation.
        requested: usize,
        /// Number of generations in history.
        available: usize,
    },
}

impl fmt::Display for AutomatonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(e) => write!(f, "invalid state: {e}"),
            Self::NotInitialized => {
                write!(f, "automaton has no initial state; configure one first")
            }
            Self::NoPreviousGeneration => write!(f, "no previous generation"),
            Self::GenerationOutOfRange {
                requested,
                available,
            } => write!(
                f,
                "generation {requested} does not exist ({available} recorded)"
            ),
        }
    }
}

impl Error for AutomatonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidState(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StateError> for AutomatonError {
    fn from(e: StateError) -> Self {
        Self::InvalidState(e)
    }
}
