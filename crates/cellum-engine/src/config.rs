//! Automaton configuration, validation, and error types.
//!
//! [`AutomatonConfig`] is the builder input for constructing an
//! [`Automaton`](crate::Automaton). [`validate()`](AutomatonConfig::validate)
//! checks structural invariants for a given topology without building the
//! cell arena.

use std::error::Error;
use std::fmt;

use cellum_core::{Ruleset, RulesetError, MAX_STATES};
use cellum_space::{BoundaryCondition, SpaceError, Topology};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating an [`AutomatonConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Zero cells were requested.
    ZeroCells,
    /// State count outside `1..=10`.
    StateCountOutOfRange {
        /// The rejected state count.
        states: u8,
    },
    /// The topology has no neighbours.
    ZeroNeighbours,
    /// The boundary substitutes a state the automaton cannot hold
    /// (Dirichlet1 with a single state).
    BoundaryStateOutOfRange {
        /// The boundary policy.
        boundary: BoundaryCondition,
        /// The configured state count.
        states: u8,
    },
    /// The ruleset string failed validation.
    Ruleset(RulesetError),
    /// The topology could not be built.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCells => write!(f, "cell count must be at least 1"),
            Self::StateCountOutOfRange { states } => {
                write!(f, "state count {states} outside 1..={MAX_STATES}")
            }
            Self::ZeroNeighbours => write!(f, "topology must have at least one neighbour"),
            Self::BoundaryStateOutOfRange { boundary, states } => {
                write!(f, "{boundary} boundary is invalid with {states} state(s)")
            }
            Self::Ruleset(e) => write!(f, "ruleset: {e}"),
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ruleset(e) => Some(e),
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RulesetError> for ConfigError {
    fn from(e: RulesetError) -> Self {
        Self::Ruleset(e)
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── AutomatonConfig ────────────────────────────────────────────────

/// Complete configuration for constructing an automaton.
///
/// The topology is chosen by the type parameter of
/// [`Automaton`](crate::Automaton); the config carries everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutomatonConfig {
    /// Requested cell count. Square topologies round up to the next
    /// perfect square.
    pub cells: u32,
    /// Number of cell states. Default: 2.
    pub states: u8,
    /// Ruleset digit string of length `states^(neighbours + 1)`.
    pub ruleset: String,
    /// Policy for neighbours outside the grid.
    pub boundary: BoundaryCondition,
}

impl AutomatonConfig {
    /// A binary automaton configuration.
    pub fn new(cells: u32, ruleset: impl Into<String>, boundary: BoundaryCondition) -> Self {
        Self {
            cells,
            states: 2,
            ruleset: ruleset.into(),
            boundary,
        }
    }

    /// Set the number of cell states.
    pub fn with_states(mut self, states: u8) -> Self {
        self.states = states;
        self
    }

    /// Validate all structural invariants for topology `T`.
    pub fn validate<T: Topology>(&self) -> Result<(), ConfigError> {
        self.build::<T>().map(|_| ())
    }

    /// Validate, then build the topology and parse the ruleset.
    pub(crate) fn build<T: Topology>(&self) -> Result<(T, Ruleset), ConfigError> {
        // 1. Cells.
        if self.cells == 0 {
            return Err(ConfigError::ZeroCells);
        }
        // 2. States.
        if self.states == 0 || self.states > MAX_STATES {
            return Err(ConfigError::StateCountOutOfRange {
                states: self.states,
            });
        }
        // 3. Neighbours.
        let neighbours = T::KIND.neighbour_count();
        if neighbours == 0 {
            return Err(ConfigError::ZeroNeighbours);
        }
        // 4. Dirichlet constants must be valid states.
        if let Some(s) = self.boundary.substitute_state() {
            if s >= self.states {
                return Err(ConfigError::BoundaryStateOutOfRange {
                    boundary: self.boundary,
                    states: self.states,
                });
            }
        }
        // 5. Ruleset length and digits.
        let ruleset = Ruleset::parse(&self.ruleset, self.states, neighbours)?;
        // 6. Topology shape.
        let topology = T::with_cell_hint(self.cells, self.boundary)?;
        Ok((topology, ruleset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellum_space::{Line1D, Square4, Square8};

    const RULE_30: &str = "00011110";

    #[test]
    fn valid_config_passes() {
        let cfg = AutomatonConfig::new(9, RULE_30, BoundaryCondition::Dirichlet0);
        assert_eq!(cfg.states, 2);
        assert!(cfg.validate::<Line1D>().is_ok());
    }

    #[test]
    fn zero_cells_fails() {
        let cfg = AutomatonConfig::new(0, RULE_30, BoundaryCondition::Periodic);
        assert_eq!(cfg.validate::<Line1D>(), Err(ConfigError::ZeroCells));
    }

    #[test]
    fn state_count_bounds() {
        let too_many = AutomatonConfig::new(9, RULE_30, BoundaryCondition::Periodic).with_states(11);
        assert_eq!(
            too_many.validate::<Line1D>(),
            Err(ConfigError::StateCountOutOfRange { states: 11 })
        );
        let none = AutomatonConfig::new(9, RULE_30, BoundaryCondition::Periodic).with_states(0);
        assert_eq!(
            none.validate::<Line1D>(),
            Err(ConfigError::StateCountOutOfRange { states: 0 })
        );
    }

    #[test]
    fn dirichlet1_needs_two_states() {
        let cfg = AutomatonConfig::new(9, "0", BoundaryCondition::Dirichlet1).with_states(1);
        assert_eq!(
            cfg.validate::<Line1D>(),
            Err(ConfigError::BoundaryStateOutOfRange {
                boundary: BoundaryCondition::Dirichlet1,
                states: 1,
            })
        );
        // A single-state automaton is fine under the other policies.
        let cfg = AutomatonConfig::new(9, "0", BoundaryCondition::Dirichlet0).with_states(1);
        assert!(cfg.validate::<Line1D>().is_ok());
    }

    #[test]
    fn ruleset_length_depends_on_topology() {
        let cfg = AutomatonConfig::new(9, RULE_30, BoundaryCondition::Periodic);
        assert_eq!(
            cfg.validate::<Square8>(),
            Err(ConfigError::Ruleset(RulesetError::InvalidLength {
                expected: 512,
                actual: 8,
            }))
        );
        assert_eq!(
            cfg.validate::<Square4>(),
            Err(ConfigError::Ruleset(RulesetError::InvalidLength {
                expected: 32,
                actual: 8,
            }))
        );
    }

    #[test]
    fn ruleset_error_is_source() {
        let err = AutomatonConfig::new(9, "0001111x", BoundaryCondition::Periodic)
            .validate::<Line1D>()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Ruleset(RulesetError::InvalidDigit { position: 7, .. })));
        assert!(err.source().is_some());
    }

    #[test]
    fn build_rounds_square_topologies() {
        let rules = "0".repeat(512);
        let (grid, _) = AutomatonConfig::new(10, rules, BoundaryCondition::Periodic)
            .build::<Square8>()
            .unwrap();
        assert_eq!(grid.side(), 4);
        assert_eq!(grid.cell_count(), 16);
    }
}
