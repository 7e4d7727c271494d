//! Evolution engine and generation history for Cellum automata.
//!
//! Provides [`Automaton`], which owns a topology's cells, applies a
//! ruleset to advance them one generation at a time, and records every
//! generation so that earlier ones can be revisited and later ones
//! replayed without recomputation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod arena;
pub mod automaton;
pub mod config;
pub mod error;
pub mod history;
pub mod metrics;
mod seed;
pub mod settle;

pub use automaton::{Automaton, Ca1D, Ca2D, Ca2D4};
pub use config::{AutomatonConfig, ConfigError};
pub use error::AutomatonError;
pub use history::History;
pub use metrics::EvolveMetrics;
pub use settle::Settlement;

pub use cellum_core::{CellState, Generation, Ruleset};
pub use cellum_space::{BoundaryCondition, Line1D, Square4, Square8, Topology};
