//! Double-buffered cell storage.
//!
//! [`CellArena`] holds every cell's current state in a flat row-major
//! buffer, each cell's resolved [`Neighbourhood`], and a staging buffer of
//! the same size. A step reads only the current buffer and writes only the
//! staging buffer, then swaps the two, so no cell ever observes a
//! neighbour's already-updated state.
//!
//! ```text
//! current: [s0 s1 s2 ...]  ←─── read by every lookup this step
//! staging: [n0 n1 n2 ...]  ←─── written, then swapped in
//! ```

use cellum_core::{CellState, Ruleset};
use cellum_space::{Neighbourhood, Topology};

/// Flat cell storage plus fixed neighbour wiring.
#[derive(Clone, Debug)]
pub(crate) struct CellArena {
    current: Vec<CellState>,
    staging: Vec<CellState>,
    neighbourhoods: Vec<Neighbourhood>,
}

impl CellArena {
    /// Allocate zeroed cells and wire their neighbourhoods.
    pub(crate) fn build<T: Topology>(topology: &T) -> Self {
        let n = topology.cell_count();
        Self {
            current: vec![0; n],
            staging: vec![0; n],
            neighbourhoods: topology.neighbourhoods(),
        }
    }

    /// Current states, row-major.
    pub(crate) fn states(&self) -> &[CellState] {
        &self.current
    }

    /// Overwrite every cell. `flat` must have one entry per cell.
    pub(crate) fn load(&mut self, flat: &[CellState]) {
        self.current.copy_from_slice(flat);
    }

    /// Set every cell to state 0.
    pub(crate) fn clear(&mut self) {
        self.current.fill(0);
    }

    /// Advance every cell one generation. Returns the number of cells
    /// whose state changed.
    pub(crate) fn step(&mut self, ruleset: &Ruleset) -> usize {
        let Self {
            current,
            staging,
            neighbourhoods,
        } = self;
        for (next, hood) in staging.iter_mut().zip(neighbourhoods.iter()) {
            *next = ruleset.lookup(hood.iter().map(|r| r.state(current)));
        }
        let changed = current
            .iter()
            .zip(staging.iter())
            .filter(|(a, b)| a != b)
            .count();
        std::mem::swap(current, staging);
        changed
    }
}
