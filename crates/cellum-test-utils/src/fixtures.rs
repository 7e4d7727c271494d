//! Golden rulesets and patterns.
//!
//! Expected grids were produced by an independent reference model and are
//! used bit-exact by the engine's integration tests.

use cellum_core::CellState;

/// Conway's Game of Life (B3/S23) on the Moore neighbourhood, 512 digits.
pub const GAME_OF_LIFE: &str = "00000000000000000000000000000000000000000000000100000000000000010000000000000001000000000000000100000001000101110000000100010110000000000000000100000000000000010000000100010111000000010001011000000001000101110000000100010110000101110111111000010110011010000000000000000001000000000000000100000001000101110000000100010110000000010001011100000001000101100001011101111110000101100110100000000001000101110000000100010110000101110111111000010110011010000001011101111110000101100110100001111110111010000110100010000000";

/// Wolfram's elementary rule 30.
pub const RULE_30: &str = "00011110";

/// Wolfram's elementary rule 90 (left XOR right).
pub const RULE_90: &str = "01011010";

/// Von Neumann parity: next state is the XOR of self and the four
/// orthogonal neighbours.
pub const VON_NEUMANN_PARITY: &str = "10010110011010010110100110010110";

/// A 5×5 starting grid for the Game of Life scenarios.
pub fn gol_seed() -> Vec<Vec<CellState>> {
    vec![
        vec![1, 0, 1, 0, 0],
        vec![1, 1, 0, 0, 1],
        vec![0, 0, 1, 0, 0],
        vec![1, 1, 0, 1, 0],
        vec![0, 1, 0, 1, 1],
    ]
}

/// [`gol_seed`] after one Periodic generation.
pub fn gol_periodic_gen1() -> Vec<Vec<CellState>> {
    vec![
        vec![0, 0, 1, 0, 0],
        vec![1, 0, 1, 1, 1],
        vec![0, 0, 1, 1, 0],
        vec![1, 1, 0, 1, 0],
        vec![0, 0, 0, 1, 0],
    ]
}

/// [`gol_seed`] after two Periodic generations.
pub fn gol_periodic_gen2() -> Vec<Vec<CellState>> {
    vec![
        vec![0, 1, 1, 0, 0],
        vec![0, 0, 0, 0, 1],
        vec![0, 0, 0, 0, 0],
        vec![0, 1, 0, 1, 0],
        vec![0, 1, 0, 1, 1],
    ]
}

/// [`gol_seed`] after one Dirichlet0 generation.
pub fn gol_dirichlet0_gen1() -> Vec<Vec<CellState>> {
    vec![
        vec![1, 0, 0, 0, 0],
        vec![1, 0, 1, 1, 0],
        vec![0, 0, 1, 1, 0],
        vec![1, 1, 0, 1, 1],
        vec![1, 1, 0, 1, 1],
    ]
}

/// [`gol_seed`] after one Dirichlet1 generation.
pub fn gol_dirichlet1_gen1() -> Vec<Vec<CellState>> {
    vec![
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 1, 1, 1],
        vec![0, 0, 1, 1, 0],
        vec![0, 1, 0, 1, 0],
        vec![0, 0, 0, 0, 0],
    ]
}

/// [`gol_seed`] after one Neumann generation.
pub fn gol_neumann_gen1() -> Vec<Vec<CellState>> {
    vec![
        vec![0, 0, 1, 1, 0],
        vec![0, 0, 1, 1, 0],
        vec![0, 0, 1, 1, 1],
        vec![1, 1, 0, 1, 0],
        vec![0, 1, 0, 0, 0],
    ]
}

/// A single live cell in the middle of a line of `len` cells.
pub fn centre_cell(len: usize) -> Vec<CellState> {
    let mut line = vec![0; len];
    if len > 0 {
        line[len / 2] = 1;
    }
    line
}

/// A `side × side` grid with a single live cell at `(row, col)`.
pub fn single_cell_grid(side: usize, row: usize, col: usize) -> Vec<Vec<CellState>> {
    let mut grid = vec![vec![0; side]; side];
    grid[row][col] = 1;
    grid
}

/// Parse a digit string into cell states. Panics on a non-digit.
pub fn digits(text: &str) -> Vec<CellState> {
    text.chars()
        .map(|c| c.to_digit(10).expect("fixture digit") as CellState)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rulesets_have_expected_lengths() {
        assert_eq!(GAME_OF_LIFE.len(), 512);
        assert_eq!(VON_NEUMANN_PARITY.len(), 32);
        assert_eq!(RULE_30.len(), 8);
    }

    #[test]
    fn helpers_shape() {
        assert_eq!(centre_cell(9), digits("000010000"));
        assert_eq!(single_cell_grid(3, 1, 2)[1], vec![0, 0, 1]);
        assert_eq!(gol_seed().len(), 5);
    }
}
