//! The automaton: cell arena, ruleset and generation history.
//!
//! [`Automaton`] is the primary user-facing type. It is generic over a
//! [`Topology`], which fixes the grid shape and neighbour wiring at
//! construction; the aliases [`Ca1D`], [`Ca2D`] and [`Ca2D4`] name the
//! three built-in shapes.
//!
//! # Lifecycle
//!
//! A freshly built automaton is uninitialized: its cells are all 0 and
//! its history is empty. [`configure_initial_state`](Automaton::configure_initial_state)
//! seeds generation 0. From there [`evolve`](Automaton::evolve) computes
//! (or replays) the next generation, while [`devolve`](Automaton::devolve)
//! and [`goto_state`](Automaton::goto_state) move through generations
//! already recorded. [`reset`](Automaton::reset) returns to uninitialized.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`. Neighbours are indices into the
//! automaton's own cell buffer, so there is nothing to borrow from outside
//! and the type is [`Send`]. No internal locking is provided.

use std::fmt;
use std::time::Instant;

use log::{debug, trace};

use cellum_core::{CellState, Generation, Ruleset, StateError};
use cellum_space::{BoundaryCondition, Line1D, Square4, Square8, Topology};

use crate::arena::CellArena;
use crate::config::{AutomatonConfig, ConfigError};
use crate::error::AutomatonError;
use crate::history::History;
use crate::metrics::EvolveMetrics;

// Compile-time assertion: Automaton is Send for every built-in topology.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Ca1D>();
        assert_send::<Ca2D>();
        assert_send::<Ca2D4>();
    }
};

/// A one-dimensional automaton with neighbourhood `[left, self, right]`.
pub type Ca1D = Automaton<Line1D>;

/// A square automaton with the 8-cell Moore neighbourhood.
pub type Ca2D = Automaton<Square8>;

/// A square automaton with the 4-cell von Neumann neighbourhood.
pub type Ca2D4 = Automaton<Square4>;

/// A cellular automaton over topology `T`.
///
/// # Example
///
/// ```
/// use cellum_engine::{Ca1D, BoundaryCondition};
///
/// let mut ca = Ca1D::new(9, "00011110", BoundaryCondition::Dirichlet0).unwrap();
/// ca.configure_initial_state(&vec![0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
/// ca.evolve().unwrap();
/// assert_eq!(ca.get_state_string(None).unwrap(), "000111000");
///
/// ca.devolve().unwrap();
/// assert_eq!(ca.get_state_string(None).unwrap(), "000010000");
/// ```
pub struct Automaton<T: Topology> {
    topology: T,
    ruleset: Ruleset,
    arena: CellArena,
    history: History,
    metrics: EvolveMetrics,
}

impl<T: Topology> Automaton<T> {
    /// Build a binary automaton with roughly `cells` cells.
    ///
    /// Square topologies round `cells` up to the next perfect square.
    /// Fails if the ruleset length is not `2^(neighbours + 1)` or any
    /// digit is not `0` or `1`.
    pub fn new(
        cells: u32,
        ruleset: &str,
        boundary: BoundaryCondition,
    ) -> Result<Self, ConfigError> {
        Self::from_config(AutomatonConfig::new(cells, ruleset, boundary))
    }

    /// Build an automaton from a full [`AutomatonConfig`].
    ///
    /// Validates the configuration, builds the topology, parses the
    /// ruleset and wires every cell's neighbourhood.
    pub fn from_config(config: AutomatonConfig) -> Result<Self, ConfigError> {
        let (topology, ruleset) = config.build::<T>()?;
        let arena = CellArena::build(&topology);
        debug!(
            "built {} automaton: {} cells, {} states, {} boundary",
            T::KIND,
            topology.cell_count(),
            ruleset.states(),
            topology.boundary()
        );
        Ok(Self {
            topology,
            ruleset,
            arena,
            history: History::new(),
            metrics: EvolveMetrics::default(),
        })
    }

    // ── Seeding ─────────────────────────────────────────────────

    /// Seed generation 0 from a pattern in the topology's natural shape.
    ///
    /// Discards any previous history. The pattern must cover exactly the
    /// topology's cells and every value must be below the state count;
    /// on failure the automaton is unchanged.
    pub fn configure_initial_state(&mut self, pattern: &T::Pattern) -> Result<(), AutomatonError> {
        let flat = self.topology.flatten(pattern)?;
        self.seed_flat(flat)
    }

    /// Validate and install a flat row-major initial state.
    pub(crate) fn seed_flat(&mut self, flat: Vec<CellState>) -> Result<(), AutomatonError> {
        let states = self.ruleset.states();
        if let Some((position, &value)) = flat.iter().enumerate().find(|(_, &v)| v >= states) {
            return Err(StateError::OutOfRange {
                position,
                value,
                states,
            }
            .into());
        }
        self.arena.load(&flat);
        self.history.start(flat);
        self.metrics = EvolveMetrics::default();
        debug!("seeded generation 0 ({} cells)", self.cell_count());
        Ok(())
    }

    // ── Navigation ──────────────────────────────────────────────

    /// Advance one generation.
    ///
    /// If the next generation is already in history (after a
    /// [`devolve`](Self::devolve) or [`goto_state`](Self::goto_state)) it
    /// is restored as-is; otherwise it is computed from the current
    /// states and appended.
    pub fn evolve(&mut self) -> Result<(), AutomatonError> {
        let cursor = self.history.cursor().ok_or(AutomatonError::NotInitialized)?;
        let start = Instant::now();
        let next = cursor + 1;

        let (replayed, changed) = if self.history.has_cached_next() {
            let before = self.arena.states().to_vec();
            let snapshot = self.history.seek(next)?;
            self.arena.load(snapshot);
            let changed = count_changed(&before, self.arena.states());
            (true, changed)
        } else {
            let changed = self.arena.step(&self.ruleset);
            self.history.push(self.arena.states().to_vec());
            (false, changed)
        };

        self.record(start, replayed, changed);
        trace!(
            "generation {next}: {} ({changed} cells changed)",
            if replayed { "replayed" } else { "computed" }
        );
        Ok(())
    }

    /// Step back one generation.
    pub fn devolve(&mut self) -> Result<(), AutomatonError> {
        let cursor = self.history.cursor().ok_or(AutomatonError::NotInitialized)?;
        let prev = cursor
            .checked_sub(1)
            .ok_or(AutomatonError::NoPreviousGeneration)?;
        self.restore(prev)
    }

    /// Jump to a recorded generation.
    pub fn goto_state(&mut self, generation: usize) -> Result<(), AutomatonError> {
        if self.history.cursor().is_none() {
            return Err(AutomatonError::NotInitialized);
        }
        self.restore(generation)
    }

    /// Zero every cell and forget all history.
    ///
    /// The topology and ruleset are kept; the automaton must be seeded
    /// again before it can evolve.
    pub fn reset(&mut self) {
        self.arena.clear();
        self.history.clear();
        self.metrics = EvolveMetrics::default();
        debug!("reset {} automaton", T::KIND);
    }

    fn restore(&mut self, generation: usize) -> Result<(), AutomatonError> {
        let snapshot = self.history.seek(generation)?;
        self.arena.load(snapshot);
        trace!("restored generation {generation}");
        Ok(())
    }

    fn record(&mut self, start: Instant, replayed: bool, changed_cells: usize) {
        let m = &mut self.metrics;
        m.total_us = start.elapsed().as_micros() as u64;
        m.replayed = replayed;
        m.changed_cells = changed_cells;
        if replayed {
            m.generations_replayed += 1;
        } else {
            m.generations_computed += 1;
        }
    }

    // ── Reading state ───────────────────────────────────────────

    /// Flat row-major states of a recorded generation, or of the live
    /// cells when `generation` is `None`.
    ///
    /// The live cells are readable in every phase: all zeros before the
    /// first seed and after [`reset`](Self::reset).
    pub fn get_flat_state(&self, generation: Option<usize>) -> Result<&[CellState], AutomatonError> {
        match generation {
            None => Ok(self.arena.states()),
            Some(index) => {
                self.history
                    .get(index)
                    .ok_or(AutomatonError::GenerationOutOfRange {
                        requested: index,
                        available: self.history.len(),
                    })
            }
        }
    }

    /// States of a generation in the topology's natural shape.
    pub fn get_state(&self, generation: Option<usize>) -> Result<T::Pattern, AutomatonError> {
        let flat = self.get_flat_state(generation)?;
        Ok(self.topology.arrange(flat))
    }

    /// States of a generation as a digit string, row-major.
    pub fn get_state_string(&self, generation: Option<usize>) -> Result<String, AutomatonError> {
        let flat = self.get_flat_state(generation)?;
        Ok(flat.iter().map(|&s| char::from(b'0' + s)).collect())
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The generation the live cells hold, or `None` when uninitialized.
    pub fn current_generation(&self) -> Option<Generation> {
        self.history.current_generation()
    }

    /// Whether an initial state has been configured since construction
    /// or the last reset.
    pub fn is_initialized(&self) -> bool {
        self.history.cursor().is_some()
    }

    /// Number of recorded generations.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Recorded generations, oldest first, as flat row-major states.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &[CellState]> + '_ {
        self.history.iter()
    }

    /// The generation log together with its cursor.
    pub fn timeline(&self) -> &History {
        &self.history
    }

    /// Metrics from the most recent `evolve()`.
    pub fn last_metrics(&self) -> &EvolveMetrics {
        &self.metrics
    }

    /// The topology this automaton was built on.
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// The validated ruleset.
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// The boundary condition.
    pub fn boundary(&self) -> BoundaryCondition {
        self.topology.boundary()
    }

    /// Number of cell states.
    pub fn states(&self) -> u8 {
        self.ruleset.states()
    }

    /// Neighbours per cell, self excluded.
    pub fn neighbours(&self) -> u32 {
        self.topology.neighbour_count()
    }

    /// Total number of cells (after any rounding).
    pub fn cell_count(&self) -> usize {
        self.topology.cell_count()
    }

    pub(crate) fn live_states(&self) -> &[CellState] {
        self.arena.states()
    }
}

impl<T: Topology> fmt::Debug for Automaton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("topology", &self.topology)
            .field("ruleset", &self.ruleset.to_string())
            .field("current_generation", &self.history.cursor())
            .field("history_len", &self.history.len())
            .finish()
    }
}

fn count_changed(before: &[CellState], after: &[CellState]) -> usize {
    before.iter().zip(after).filter(|(a, b)| a != b).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE_30: &str = "00011110";

    fn rule30(boundary: BoundaryCondition) -> Ca1D {
        let mut ca = Ca1D::new(9, RULE_30, boundary).unwrap();
        ca.configure_initial_state(&vec![0, 0, 0, 0, 1, 0, 0, 0, 0])
            .unwrap();
        ca
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_automaton_is_uninitialized() {
        let ca = Ca1D::new(9, RULE_30, BoundaryCondition::Periodic).unwrap();
        assert!(!ca.is_initialized());
        assert_eq!(ca.current_generation(), None);
        assert_eq!(ca.history_len(), 0);
        assert_eq!(ca.get_flat_state(None).unwrap(), &[0; 9]);
        assert_eq!(ca.neighbours(), 2);
        assert_eq!(ca.states(), 2);
    }

    #[test]
    fn square_grids_round_up() {
        let rules = "0".repeat(512);
        let ca = Ca2D::new(10, &rules, BoundaryCondition::Neumann).unwrap();
        assert_eq!(ca.cell_count(), 16);
        assert_eq!(ca.topology().side(), 4);
    }

    // ── Seeding ─────────────────────────────────────────────────

    #[test]
    fn out_of_range_value_leaves_automaton_untouched() {
        let mut ca = rule30(BoundaryCondition::Dirichlet0);
        ca.evolve().unwrap();
        let err = ca
            .configure_initial_state(&vec![0, 0, 2, 0, 0, 0, 0, 0, 0])
            .unwrap_err();
        assert_eq!(
            err,
            AutomatonError::InvalidState(StateError::OutOfRange {
                position: 2,
                value: 2,
                states: 2,
            })
        );
        assert_eq!(ca.history_len(), 2);
        assert_eq!(ca.get_state_string(None).unwrap(), "000111000");
    }

    #[test]
    fn wrong_length_pattern_is_rejected() {
        let mut ca = Ca1D::new(9, RULE_30, BoundaryCondition::Dirichlet0).unwrap();
        let err = ca.configure_initial_state(&vec![0, 1]).unwrap_err();
        assert!(matches!(
            err,
            AutomatonError::InvalidState(StateError::ShapeMismatch { .. })
        ));
        assert!(!ca.is_initialized());
    }

    #[test]
    fn reseeding_discards_history() {
        let mut ca = rule30(BoundaryCondition::Dirichlet0);
        ca.evolve().unwrap();
        ca.evolve().unwrap();
        ca.configure_initial_state(&vec![1; 9]).unwrap();
        assert_eq!(ca.history_len(), 1);
        assert_eq!(ca.current_generation(), Some(Generation(0)));
    }

    // ── Navigation ──────────────────────────────────────────────

    #[test]
    fn evolve_before_seed_fails() {
        let mut ca = Ca1D::new(9, RULE_30, BoundaryCondition::Dirichlet0).unwrap();
        assert_eq!(ca.evolve(), Err(AutomatonError::NotInitialized));
        assert_eq!(ca.devolve(), Err(AutomatonError::NotInitialized));
        assert_eq!(ca.goto_state(0), Err(AutomatonError::NotInitialized));
    }

    #[test]
    fn devolve_at_generation_zero_fails() {
        let mut ca = rule30(BoundaryCondition::Dirichlet0);
        assert_eq!(ca.devolve(), Err(AutomatonError::NoPreviousGeneration));
        assert_eq!(ca.current_generation(), Some(Generation(0)));
    }

    #[test]
    fn first_generations_match_rule_30() {
        let mut ca = rule30(BoundaryCondition::Dirichlet0);
        let expected = ["000111000", "001100100", "011011110"];
        for want in expected {
            ca.evolve().unwrap();
            assert_eq!(ca.get_state_string(None).unwrap(), want);
        }
        assert_eq!(ca.get_state_string(Some(0)).unwrap(), "000010000");
    }

    #[test]
    fn replay_uses_cache_and_metrics_record_it() {
        let mut ca = rule30(BoundaryCondition::Dirichlet1);
        ca.evolve().unwrap();
        assert!(!ca.last_metrics().replayed);
        assert_eq!(ca.get_state_string(None).unwrap(), "100111001");

        ca.devolve().unwrap();
        ca.evolve().unwrap();
        let m = ca.last_metrics();
        assert!(m.replayed);
        assert_eq!(m.generations_computed, 1);
        assert_eq!(m.generations_replayed, 1);
        assert_eq!(m.changed_cells, 4);
        assert_eq!(ca.history_len(), 2);
    }

    #[test]
    fn goto_state_bounds() {
        let mut ca = rule30(BoundaryCondition::Dirichlet0);
        ca.evolve().unwrap();
        ca.evolve().unwrap();
        ca.goto_state(1).unwrap();
        assert_eq!(ca.current_generation(), Some(Generation(1)));
        assert_eq!(
            ca.goto_state(3),
            Err(AutomatonError::GenerationOutOfRange {
                requested: 3,
                available: 3,
            })
        );
        assert_eq!(ca.current_generation(), Some(Generation(1)));
    }

    #[test]
    fn reset_returns_to_uninitialized() {
        let mut ca = rule30(BoundaryCondition::Dirichlet0);
        ca.evolve().unwrap();
        ca.reset();
        assert!(!ca.is_initialized());
        assert_eq!(ca.history_len(), 0);
        assert_eq!(ca.get_state_string(None).unwrap(), "000000000");
        assert_eq!(ca.evolve(), Err(AutomatonError::NotInitialized));
        assert_eq!(*ca.last_metrics(), EvolveMetrics::default());
    }

    // ── Reading state ───────────────────────────────────────────

    #[test]
    fn get_state_out_of_range() {
        let ca = rule30(BoundaryCondition::Dirichlet0);
        assert_eq!(
            ca.get_state(Some(1)),
            Err(AutomatonError::GenerationOutOfRange {
                requested: 1,
                available: 1,
            })
        );
    }

    #[test]
    fn two_dimensional_state_is_rows() {
        let mut ca = Ca2D4::new(4, &"0".repeat(32), BoundaryCondition::Periodic).unwrap();
        ca.configure_initial_state(&vec![vec![1, 0], vec![0, 1]])
            .unwrap();
        assert_eq!(ca.get_state(None).unwrap(), vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(ca.get_state_string(None).unwrap(), "1001");
        ca.evolve().unwrap();
        assert_eq!(ca.get_state_string(None).unwrap(), "0000");
    }

    #[test]
    fn timeline_tracks_cursor_and_cache() {
        let mut ca = rule30(BoundaryCondition::Periodic);
        assert_eq!(ca.timeline().cursor(), Some(0));
        ca.evolve().unwrap();
        ca.evolve().unwrap();
        ca.devolve().unwrap();
        let log = ca.timeline();
        assert_eq!(log.len(), 3);
        assert_eq!(log.current_generation(), Some(Generation(1)));
        assert!(log.has_cached_next());
        assert_eq!(log.get(1), ca.get_flat_state(None).ok());
        ca.reset();
        assert!(ca.timeline().is_empty());
        assert_eq!(ca.timeline().cursor(), None);
    }

    #[test]
    fn history_iterates_in_order() {
        let mut ca = rule30(BoundaryCondition::Dirichlet0);
        ca.evolve().unwrap();
        let hist: Vec<&[CellState]> = ca.history().collect();
        assert_eq!(hist.len(), 2);
        assert_eq!(hist[0], &[0, 0, 0, 0, 1, 0, 0, 0, 0]);
        assert_eq!(hist[1], &[0, 0, 0, 1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn debug_output_names_topology() {
        let ca = rule30(BoundaryCondition::Periodic);
        let s = format!("{ca:?}");
        assert!(s.contains("Line1D"));
        assert!(s.contains("00011110"));
    }
}
