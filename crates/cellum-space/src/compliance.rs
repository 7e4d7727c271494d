//! Topology trait compliance test helpers.
//!
//! These functions verify that a Topology implementation satisfies the
//! invariants the engine relies on. Reused by every topology's tests.

use crate::neighbourhood::NeighbourRef;
use crate::topology::Topology;
use indexmap::IndexSet;

/// Assert every neighbourhood has `neighbour_count() + 1` entries.
pub fn assert_neighbourhood_len<T: Topology>(topo: &T) {
    let expected = topo.neighbour_count() as usize + 1;
    for (i, hood) in topo.neighbourhoods().iter().enumerate() {
        assert_eq!(hood.len(), expected, "neighbourhood of cell {i} has wrong length");
    }
}

/// Assert the centre entry of each neighbourhood is the cell itself.
pub fn assert_centre_is_self<T: Topology>(topo: &T) {
    let centre = topo.centre_position();
    for (i, hood) in topo.neighbourhoods().iter().enumerate() {
        assert_eq!(hood[centre], NeighbourRef::Cell(i), "centre of cell {i}");
    }
}

/// Assert every cell reference is in range and every constant matches
/// the boundary's substitute state.
pub fn assert_refs_valid<T: Topology>(topo: &T) {
    let n = topo.cell_count();
    let substitute = topo.boundary().substitute_state();
    for (i, hood) in topo.neighbourhoods().iter().enumerate() {
        for r in hood {
            match *r {
                NeighbourRef::Cell(j) => assert!(j < n, "cell {i} references {j} >= {n}"),
                NeighbourRef::Constant(s) => assert_eq!(
                    Some(s),
                    substitute,
                    "cell {i} has constant {s} under {}",
                    topo.boundary()
                ),
            }
        }
    }
}

/// Assert that `j in N(i)` implies `i in N(j)`.
pub fn assert_neighbours_symmetric<T: Topology>(topo: &T) {
    let hoods = topo.neighbourhoods();
    for (i, hood) in hoods.iter().enumerate() {
        for r in hood {
            if let NeighbourRef::Cell(j) = *r {
                assert!(
                    hoods[j].contains(&NeighbourRef::Cell(i)),
                    "neighbour symmetry violated: {j} in N({i}) but {i} not in N({j})"
                );
            }
        }
    }
}

/// Assert no neighbourhood names more distinct cells than it has slots,
/// and that every cell appears in some neighbourhood.
pub fn assert_distinct_cells_bounded<T: Topology>(topo: &T) {
    let slots = topo.neighbour_count() as usize + 1;
    let mut reached = IndexSet::new();
    for hood in topo.neighbourhoods() {
        let distinct: IndexSet<usize> = hood
            .iter()
            .filter_map(|r| match r {
                NeighbourRef::Cell(j) => Some(*j),
                NeighbourRef::Constant(_) => None,
            })
            .collect();
        assert!(distinct.len() <= slots);
        reached.extend(distinct);
    }
    assert_eq!(reached.len(), topo.cell_count(), "some cell is never a neighbour");
}

/// Assert `arrange` then `flatten` is the identity on a full-size buffer.
pub fn assert_arrange_flatten_inverse<T: Topology>(topo: &T) {
    let flat: Vec<_> = (0..topo.cell_count()).map(|i| (i % 2) as u8).collect();
    let pattern = topo.arrange(&flat);
    assert_eq!(topo.flatten(&pattern).unwrap(), flat);
}

/// Run every compliance check.
pub fn run_full_compliance<T: Topology>(topo: &T) {
    assert_neighbourhood_len(topo);
    assert_centre_is_self(topo);
    assert_refs_valid(topo);
    assert_neighbours_symmetric(topo);
    assert_distinct_cells_bounded(topo);
    assert_arrange_flatten_inverse(topo);
}
