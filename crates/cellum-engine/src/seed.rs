//! Deterministic random initial states.

use log::debug;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use cellum_core::{CellState, StateError};
use cellum_space::Topology;

use crate::automaton::Automaton;
use crate::error::AutomatonError;

impl<T: Topology> Automaton<T> {
    /// Seed generation 0 with a reproducible random pattern.
    ///
    /// Each cell is non-zero with probability `density`; a non-zero cell
    /// is uniform over `1..states`. The same `seed` always produces the
    /// same pattern for the same topology and state count.
    pub fn configure_random_state(&mut self, seed: u64, density: f64) -> Result<(), AutomatonError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(StateError::InvalidDensity { density }.into());
        }
        let states = self.states();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let flat: Vec<CellState> = (0..self.cell_count())
            .map(|_| {
                if rng.random_bool(density) && states > 1 {
                    rng.random_range(1..states)
                } else {
                    0
                }
            })
            .collect();
        debug!("random state from seed {seed} at density {density}");
        self.seed_flat(flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Ca1D;
    use crate::config::AutomatonConfig;
    use cellum_space::BoundaryCondition;

    fn line(states: u8) -> Ca1D {
        let rules = "0".repeat((states as usize).pow(3));
        Ca1D::from_config(
            AutomatonConfig::new(64, rules, BoundaryCondition::Periodic).with_states(states),
        )
        .unwrap()
    }

    #[test]
    fn same_seed_same_pattern() {
        let mut a = line(2);
        let mut b = line(2);
        a.configure_random_state(7, 0.5).unwrap();
        b.configure_random_state(7, 0.5).unwrap();
        assert_eq!(a.get_flat_state(None).unwrap(), b.get_flat_state(None).unwrap());
        assert!(a.is_initialized());
    }

    #[test]
    fn density_extremes() {
        let mut ca = line(3);
        ca.configure_random_state(1, 0.0).unwrap();
        assert!(ca.get_flat_state(None).unwrap().iter().all(|&s| s == 0));
        ca.configure_random_state(1, 1.0).unwrap();
        assert!(ca
            .get_flat_state(None)
            .unwrap()
            .iter()
            .all(|&s| s == 1 || s == 2));
    }

    #[test]
    fn live_cells_cover_every_nonzero_state() {
        let mut ca = Ca1D::from_config(
            AutomatonConfig::new(1000, "0".repeat(1000), BoundaryCondition::Periodic)
                .with_states(10),
        )
        .unwrap();
        ca.configure_random_state(11, 1.0).unwrap();
        let flat = ca.get_flat_state(None).unwrap();
        let mut seen = [0usize; 10];
        for &s in flat {
            seen[s as usize] += 1;
        }
        assert_eq!(seen[0], 0);
        assert!(seen[1..].iter().all(|&n| n > 0), "{seen:?}");
    }

    #[test]
    fn invalid_density_leaves_state_untouched() {
        let mut ca = line(2);
        for bad in [-0.1, 1.5, f64::NAN] {
            let err = ca.configure_random_state(3, bad).unwrap_err();
            assert!(matches!(
                err,
                AutomatonError::InvalidState(StateError::InvalidDensity { .. })
            ));
        }
        assert!(!ca.is_initialized());
    }

    #[test]
    fn single_state_is_all_zero() {
        let mut ca = Ca1D::from_config(
            AutomatonConfig::new(8, "0", BoundaryCondition::Neumann).with_states(1),
        )
        .unwrap();
        ca.configure_random_state(9, 1.0).unwrap();
        assert_eq!(ca.get_state_string(None).unwrap(), "00000000");
    }
}
