//! Benchmark profiles for the Cellum cellular automaton engine.
//!
//! Provides pre-built [`AutomatonConfig`] profiles and seeded automata for
//! benchmarking and examples:
//!
//! - [`elementary_profile`]: rule 30 on a 1D line
//! - [`life_profile`]: Game of Life on a Periodic Moore grid
//! - [`parity_profile`]: von Neumann parity on a Dirichlet0 grid
//! - [`seeded`]: build a profile and fill it deterministically from a seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cellum_engine::{Automaton, AutomatonConfig, BoundaryCondition, Topology};
use cellum_test_utils::fixtures::{GAME_OF_LIFE, RULE_30, VON_NEUMANN_PARITY};

/// Density of live cells in seeded benchmark automata.
pub const BENCH_DENSITY: f64 = 0.35;

/// Rule 30 on a line of `cells` cells with a Periodic boundary.
pub fn elementary_profile(cells: u32) -> AutomatonConfig {
    AutomatonConfig::new(cells, RULE_30, BoundaryCondition::Periodic)
}

/// Game of Life on a `side × side` Periodic grid.
pub fn life_profile(side: u32) -> AutomatonConfig {
    AutomatonConfig::new(side * side, GAME_OF_LIFE, BoundaryCondition::Periodic)
}

/// Von Neumann parity on a `side × side` Dirichlet0 grid.
pub fn parity_profile(side: u32) -> AutomatonConfig {
    AutomatonConfig::new(side * side, VON_NEUMANN_PARITY, BoundaryCondition::Dirichlet0)
}

/// Build an automaton from `config` and seed it at [`BENCH_DENSITY`].
///
/// # Panics
///
/// Panics if `config` is invalid for topology `T`.
pub fn seeded<T: Topology>(config: AutomatonConfig, seed: u64) -> Automaton<T> {
    let mut ca = Automaton::<T>::from_config(config).expect("benchmark profile must be valid");
    ca.configure_random_state(seed, BENCH_DENSITY)
        .expect("benchmark density is in range");
    ca
}
