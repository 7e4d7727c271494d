//! Per-generation metrics for the evolution engine.
//!
//! [`EvolveMetrics`] captures timing and change data for the most recent
//! `evolve()` call, plus counters accumulated since the last seed.

/// Timing and change metrics collected during a single `evolve()`.
///
/// Durations are in microseconds. The automaton populates these fields
/// after each successful `evolve()`; seeding or resetting zeroes them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvolveMetrics {
    /// Wall-clock time for the entire call, in microseconds.
    pub total_us: u64,
    /// Whether the generation was restored from history instead of computed.
    pub replayed: bool,
    /// Number of cells whose state differs from the previous generation.
    pub changed_cells: usize,
    /// Cumulative number of generations computed from the ruleset.
    pub generations_computed: u64,
    /// Cumulative number of generations restored from history.
    pub generations_replayed: u64,
}
