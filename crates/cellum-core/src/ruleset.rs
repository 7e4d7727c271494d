//! Rule tables mapping neighbourhood encodings to next states.
//!
//! A ruleset is a string of decimal digits with one entry per possible
//! neighbourhood. For an automaton with `s` states and `n` neighbours
//! (self excluded) there are `s^(n + 1)` neighbourhoods.
//!
//! # Encoding
//!
//! The states of a cell's neighbourhood, read in the topology's canonical
//! order, form a base-`s` number `code`. The next state is the digit at
//! position `len - 1 - code`: the all-maximum neighbourhood maps to the
//! first digit and the all-zero neighbourhood to the last. This ordering
//! matches the conventional way elementary rules are written, so
//! `"00011110"` is Wolfram's rule 30.
//!
//! ```
//! use cellum_core::Ruleset;
//!
//! let rule30 = Ruleset::parse("00011110", 2, 2).unwrap();
//! // left=1, self=0, right=0 → code 0b100 = 4 → digit at 7 - 4 = 3.
//! assert_eq!(rule30.lookup([1, 0, 0]), 1);
//! assert_eq!(rule30.lookup([1, 1, 1]), 0);
//! assert_eq!(rule30.rule_number(), Some(30));
//! ```

use std::fmt;

use crate::error::RulesetError;
use crate::id::{CellState, MAX_STATES};

/// A validated rule table.
///
/// Construction guarantees the length is `states^(neighbours + 1)` and
/// every digit is below `states`, so [`lookup`](Self::lookup) never fails
/// for neighbourhoods of the right length holding valid states.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ruleset {
    digits: Vec<CellState>,
    states: u8,
    neighbours: u32,
}

impl Ruleset {
    /// Number of digits a ruleset needs for `states` states and
    /// `neighbours` neighbours (self excluded).
    ///
    /// Returns `None` on overflow.
    pub fn required_len(states: u8, neighbours: u32) -> Option<usize> {
        let exp = neighbours.checked_add(1)?;
        (states as usize).checked_pow(exp)
    }

    /// Parse and validate a digit string.
    ///
    /// Length is checked before digits, so a short string of invalid
    /// characters reports [`RulesetError::InvalidLength`].
    pub fn parse(text: &str, states: u8, neighbours: u32) -> Result<Self, RulesetError> {
        if states == 0 || states > MAX_STATES {
            return Err(RulesetError::UnsupportedStateCount { states });
        }
        let expected = Self::required_len(states, neighbours)
            .ok_or(RulesetError::LengthOverflow { states, neighbours })?;
        let actual = text.chars().count();
        if actual != expected {
            return Err(RulesetError::InvalidLength { expected, actual });
        }

        let mut digits = Vec::with_capacity(expected);
        for (position, ch) in text.chars().enumerate() {
            match ch.to_digit(10) {
                Some(d) if d < states as u32 => digits.push(d as CellState),
                _ => {
                    return Err(RulesetError::InvalidDigit {
                        position,
                        found: ch,
                        states,
                    })
                }
            }
        }

        Ok(Self {
            digits,
            states,
            neighbours,
        })
    }

    /// Build a binary outer-totalistic ruleset.
    ///
    /// The centre cell sits at position `neighbours / 2` of the canonical
    /// neighbourhood. A live centre survives when the number of live
    /// neighbours (self excluded) is listed in `survive`; a dead centre is
    /// born when the count is listed in `birth`.
    ///
    /// ```
    /// use cellum_core::Ruleset;
    ///
    /// // B1/S1 on a line is Wolfram's rule 90.
    /// let r = Ruleset::totalistic(2, &[1], &[1]).unwrap();
    /// assert_eq!(r.to_string(), "01011010");
    /// assert_eq!(r.rule_number(), Some(90));
    /// ```
    pub fn totalistic(neighbours: u32, survive: &[u32], birth: &[u32]) -> Result<Self, RulesetError> {
        if neighbours % 2 != 0 {
            return Err(RulesetError::UnsupportedNeighbourCount { neighbours });
        }
        let len = Self::required_len(2, neighbours).ok_or(RulesetError::LengthOverflow {
            states: 2,
            neighbours,
        })?;
        let centre_bit = neighbours - neighbours / 2;

        let digits = (0..len)
            .map(|i| {
                let code = len - 1 - i;
                let centre = (code >> centre_bit) & 1;
                let live = code.count_ones() - centre as u32;
                let rule = if centre == 1 { survive } else { birth };
                CellState::from(rule.contains(&live))
            })
            .collect();

        Ok(Self {
            digits,
            states: 2,
            neighbours,
        })
    }

    /// Number of states this ruleset was validated against.
    pub fn states(&self) -> u8 {
        self.states
    }

    /// Number of neighbours (self excluded) this ruleset was validated against.
    pub fn neighbours(&self) -> u32 {
        self.neighbours
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always returns `false`; every valid ruleset has at least one digit.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The digits in ruleset order.
    pub fn digits(&self) -> &[CellState] {
        &self.digits
    }

    /// Encode a neighbourhood as a base-`states` integer.
    ///
    /// The first state is the most significant digit.
    pub fn encode<I>(&self, neighbourhood: I) -> usize
    where
        I: IntoIterator<Item = CellState>,
    {
        let base = self.states as usize;
        neighbourhood
            .into_iter()
            .fold(0, |code, state| code * base + state as usize)
    }

    /// Next state for the neighbourhood with the given encoding.
    pub fn next_state(&self, code: usize) -> CellState {
        debug_assert!(code < self.digits.len(), "neighbourhood code {code} out of range");
        self.digits[self.digits.len() - 1 - code]
    }

    /// Next state for a neighbourhood given as states in canonical order.
    pub fn lookup<I>(&self, neighbourhood: I) -> CellState
    where
        I: IntoIterator<Item = CellState>,
    {
        self.next_state(self.encode(neighbourhood))
    }

    /// The ruleset read as a single base-`states` number.
    ///
    /// For elementary rules this is the Wolfram rule number. Returns `None`
    /// when the value does not fit in `u128` (e.g. 2D rulesets).
    pub fn rule_number(&self) -> Option<u128> {
        let base = self.states as u128;
        self.digits.iter().try_fold(0u128, |acc, &d| {
            acc.checked_mul(base)?.checked_add(d as u128)
        })
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
