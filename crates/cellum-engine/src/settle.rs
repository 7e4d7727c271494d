//! Running an automaton until it stops producing new states.

use indexmap::IndexMap;
use log::debug;

use cellum_core::{CellState, Generation};
use cellum_space::Topology;

use crate::automaton::Automaton;
use crate::error::AutomatonError;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// `generation` evolves into itself.
    Fixed {
        /// First generation of the fixed point.
        generation: Generation,
    },
    /// The states from `start` onwards repeat every `period` generations.
    Cycle {
        /// First generation of the cycle.
        start: Generation,
        /// Cycle length, always at least 2.
        period: usize,
    },
    /// No repeat was seen within the budget.
    Unsettled {
        /// Number of generations evolved.
        generations: usize,
    },
}

impl<T: Topology> Automaton<T> {
    /// Evolve up to `max_generations` times, stopping at the first
    /// repeated state.
    ///
    /// Runs from the current generation using [`evolve`](Self::evolve), so
    /// generations already in history are replayed rather than recomputed.
    /// The automaton is left at the generation where the repeat was seen.
    pub fn run_until_settled(
        &mut self,
        max_generations: usize,
    ) -> Result<Settlement, AutomatonError> {
        let first = self.current_generation().ok_or(AutomatonError::NotInitialized)?;
        let mut seen: IndexMap<Vec<CellState>, Generation> = IndexMap::new();
        seen.insert(self.live_states().to_vec(), first);

        let mut generation = first;
        for _ in 0..max_generations {
            self.evolve()?;
            generation = generation.next();
            let state = self.live_states().to_vec();
            if let Some(&earlier) = seen.get(&state) {
                let period = generation.0 - earlier.0;
                let outcome = if period == 1 {
                    Settlement::Fixed {
                        generation: earlier,
                    }
                } else {
                    Settlement::Cycle {
                        start: earlier,
                        period,
                    }
                };
                debug!("settled after {} generations: {outcome:?}", seen.len());
                return Ok(outcome);
            }
            seen.insert(state, generation);
        }
        Ok(Settlement::Unsettled {
            generations: max_generations,
        })
    }
}
