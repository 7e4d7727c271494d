//! Append-only generation history with a movable cursor.

use cellum_core::{CellState, Generation};

use crate::error::AutomatonError;

/// Every generation computed since the last seed, plus the cursor that
/// marks which one the live cells hold.
///
/// Entries are never removed or rewritten until the automaton is reseeded
/// or reset. Moving the cursor backwards and forwards only ever reads
/// stored snapshots.
#[derive(Clone, Debug, Default)]
pub struct History {
    generations: Vec<Vec<CellState>>,
    cursor: Option<usize>,
}

impl History {
    /// An empty history with no cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all entries with a single initial snapshot at generation 0.
    pub(crate) fn start(&mut self, initial: Vec<CellState>) {
        self.generations.clear();
        self.generations.push(initial);
        self.cursor = Some(0);
    }

    /// Drop every entry and the cursor.
    pub(crate) fn clear(&mut self) {
        self.generations.clear();
        self.cursor = None;
    }

    /// Append a freshly computed snapshot and move the cursor onto it.
    ///
    /// Only called when the cursor is at the last entry.
    pub(crate) fn push(&mut self, snapshot: Vec<CellState>) {
        debug_assert_eq!(self.cursor.map(|c| c + 1), Some(self.generations.len()));
        self.generations.push(snapshot);
        self.cursor = Some(self.generations.len() - 1);
    }

    /// Move the cursor to `index` and return the snapshot stored there.
    pub(crate) fn seek(&mut self, index: usize) -> Result<&[CellState], AutomatonError> {
        let available = self.generations.len();
        let snapshot = self
            .generations
            .get(index)
            .ok_or(AutomatonError::GenerationOutOfRange {
                requested: index,
                available,
            })?;
        self.cursor = Some(index);
        Ok(snapshot)
    }

    /// Index of the generation the live cells hold, or `None` before seeding.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The cursor as a [`Generation`].
    pub fn current_generation(&self) -> Option<Generation> {
        self.cursor.map(Generation)
    }

    /// Whether the generation after the cursor is already stored.
    pub fn has_cached_next(&self) -> bool {
        self.cursor
            .is_some_and(|c| c + 1 < self.generations.len())
    }

    /// Number of stored generations.
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Whether no generation is stored.
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// The snapshot stored for generation `index`.
    pub fn get(&self, index: usize) -> Option<&[CellState]> {
        self.generations.get(index).map(Vec::as_slice)
    }

    /// Stored snapshots in generation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[CellState]> + '_ {
        self.generations.iter().map(Vec::as_slice)
    }
}
