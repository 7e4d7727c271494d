//! Core types for the Cellum cellular automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines cell
//! state values, generation identifiers, validated rule tables, and the
//! error types shared by the topology and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod ruleset;

pub use error::{RulesetError, StateError};
pub use id::{CellState, Generation, MAX_STATES};
pub use ruleset::Ruleset;
