//! Test fixtures shared across Cellum crates.
//!
//! Provides the rulesets and golden patterns the engine and facade
//! integration tests assert against, plus small pattern builders.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;
