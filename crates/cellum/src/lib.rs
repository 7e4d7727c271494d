//! Cellum: a discrete cellular automaton engine with boundary conditions
//! and generation history.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Cellum sub-crates. For most users, adding `cellum` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cellum::prelude::*;
//!
//! // Game of Life, built from its birth/survival counts.
//! let life = Ruleset::totalistic(8, &[2, 3], &[3]).unwrap().to_string();
//!
//! // Ten requested cells round up to a 4×4 torus.
//! let mut ca = Ca2D::new(10, &life, BoundaryCondition::Periodic).unwrap();
//! assert_eq!(ca.cell_count(), 16);
//!
//! // A blinker oscillates with period 2.
//! ca.configure_initial_state(&vec![
//!     vec![0, 0, 0, 0],
//!     vec![1, 1, 1, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//! ])
//! .unwrap();
//! ca.evolve().unwrap();
//! assert_eq!(ca.get_state_string(None).unwrap(), "0100010001000000");
//!
//! // Step back through history; evolving again replays the cached generation.
//! ca.devolve().unwrap();
//! ca.evolve().unwrap();
//! assert!(ca.last_metrics().replayed);
//! assert_eq!(ca.history_len(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cellum-core` | Cell states, generations, rulesets, state errors |
//! | [`space`] | `cellum-space` | Topologies and boundary conditions |
//! | [`engine`] | `cellum-engine` | The automaton, history, config and metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`cellum-core`).
///
/// Contains [`types::Ruleset`] with its encoding and builders, the
/// [`types::Generation`] index, and the ruleset and state error types.
pub use cellum_core as types;

/// Topologies and boundary conditions (`cellum-space`).
///
/// Provides the [`space::Topology`] trait and its implementations
/// [`space::Line1D`], [`space::Square8`] and [`space::Square4`].
pub use cellum_space as space;

/// The evolution engine (`cellum-engine`).
///
/// [`engine::Automaton`] and its aliases, [`engine::AutomatonConfig`],
/// [`engine::History`] and [`engine::EvolveMetrics`].
pub use cellum_engine as engine;

/// Common imports for typical Cellum usage.
///
/// ```rust
/// use cellum::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use cellum_core::{CellState, Generation, Ruleset};

    // Errors
    pub use cellum_core::{RulesetError, StateError};
    pub use cellum_engine::{AutomatonError, ConfigError};
    pub use cellum_space::SpaceError;

    // Space
    pub use cellum_space::{BoundaryCondition, Line1D, Square4, Square8, Topology};

    // Engine
    pub use cellum_engine::{
        Automaton, AutomatonConfig, Ca1D, Ca2D, Ca2D4, EvolveMetrics, Settlement,
    };
}
