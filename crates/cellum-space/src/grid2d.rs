//! Shared helpers for square grid topologies (Square8, Square4).

use cellum_core::{CellState, StateError};

use crate::boundary::BoundaryCondition;
use crate::error::SpaceError;
use crate::neighbourhood::Neighbourhood;

/// Maximum side length: coordinates must fit in `i32`.
pub(crate) const MAX_SIDE: u32 = i32::MAX as u32;

/// Smallest side length whose square holds at least `cells` cells.
///
/// ```text
/// cells:  1  2  4  5  9  10  16  17
/// side:   1  2  2  3  3   4   4   5
/// ```
pub fn side_for_cells(cells: u32) -> u32 {
    let target = cells as u64;
    let mut side = (cells as f64).sqrt() as u64;
    while side * side < target {
        side += 1;
    }
    while side > 0 && (side - 1) * (side - 1) >= target {
        side -= 1;
    }
    side as u32
}

/// Validate a side length.
pub(crate) fn check_side(side: u32) -> Result<(), SpaceError> {
    if side == 0 {
        return Err(SpaceError::EmptySpace);
    }
    if side > MAX_SIDE {
        return Err(SpaceError::DimensionTooLarge {
            name: "side",
            value: side as u64,
            max: MAX_SIDE as u64,
        });
    }
    Ok(())
}

/// Resolve the neighbourhood of flat index `index` on a `side × side` grid.
pub(crate) fn neighbourhood_2d(
    index: usize,
    side: u32,
    offsets: &[(i64, i64)],
    boundary: BoundaryCondition,
) -> Neighbourhood {
    let n = side as usize;
    let r = (index / n) as i64;
    let c = (index % n) as i64;
    let extents = [side, side];
    offsets
        .iter()
        .map(|&(dr, dc)| boundary.resolve(&[r + dr, c + dc], &extents))
        .collect()
}

/// Row-major flatten of a square pattern, checking its shape.
pub(crate) fn flatten_rows(
    rows: &[Vec<CellState>],
    side: u32,
) -> Result<Vec<CellState>, StateError> {
    let n = side as usize;
    let expected = || format!("{n} rows of {n} cells");
    if rows.len() != n {
        return Err(StateError::ShapeMismatch {
            expected: expected(),
            actual: format!("{} rows", rows.len()),
        });
    }
    let mut flat = Vec::with_capacity(n * n);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(StateError::ShapeMismatch {
                expected: expected(),
                actual: format!("row {i} has {} cells", row.len()),
            });
        }
        flat.extend_from_slice(row);
    }
    Ok(flat)
}

/// Split a flat row-major vector into rows of `side` cells.
pub(crate) fn arrange_rows(flat: &[CellState], side: u32) -> Vec<Vec<CellState>> {
    flat.chunks(side as usize).map(<[CellState]>::to_vec).collect()
}
