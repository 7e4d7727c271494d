//! Cell state values and generation identifiers.

use std::fmt;

/// The state held by a single cell.
///
/// A value in `[0, states)` for the automaton that owns the cell. Rulesets
/// encode next states as single decimal digits, so at most
/// [`MAX_STATES`] distinct states are supported.
pub type CellState = u8;

/// Upper bound on the number of distinct cell states.
///
/// Each ruleset position holds one decimal digit; a state of `10` would be
/// indistinguishable from the digits `1` and `0`.
pub const MAX_STATES: u8 = 10;

/// Index of a generation within an automaton's history.
///
/// `Generation(0)` is always the configured initial state. Each computed
/// evolution appends the next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(pub usize);

impl Generation {
    /// The configured initial state.
    pub const INITIAL: Self = Self(0);

    /// The generation immediately after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The generation immediately before this one, if any.
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Generation {
    fn from(v: usize) -> Self {
        Self(v)
    }
}
