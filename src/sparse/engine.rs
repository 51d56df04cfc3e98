//! Transition rules for an unbounded Game of Life stored as a set of live cells.
//!
//! Only cells adjacent to at least one live cell are ever evaluated: a cell
//! with no live neighbors can neither survive nor be born, so leaving it out
//! of the evaluation gives exactly the same result as scanning the whole grid.
//!
//! The grid is the `i64` plane. A cell on its edge simply has fewer neighbors.

use super::{Cell, Generation, NEIGHBORHOOD};
use ahash::AHashSet as HashSet;

/// Cells surrounding `cell`, in `NEIGHBORHOOD` order.
///
/// Yields eight cells, fewer when `cell` lies on the edge of the `i64` plane.
pub fn neighbors_of(cell: Cell) -> impl Iterator<Item = Cell> {
    NEIGHBORHOOD
        .into_iter()
        .filter_map(move |(dx, dy)| cell.checked_offset(dx, dy))
}

/// Every cell adjacent to at least one live cell of `generation`.
///
/// Live cells with a live neighbor are included as well, which is what the
/// survival rule needs.
pub fn candidate_cells(generation: &Generation) -> HashSet<Cell> {
    let mut candidates = HashSet::with_capacity(generation.population() * NEIGHBORHOOD.len());
    for cell in generation.iter() {
        candidates.extend(neighbors_of(cell));
    }
    candidates
}

/// Number of live cells among the neighbors of `cell`, in `0..=8`.
pub fn live_neighbor_count(cell: Cell, generation: &Generation) -> u8 {
    neighbors_of(cell)
        .filter(|&neib| generation.contains(neib))
        .count() as u8
}

/// Computes the next generation.
///
/// A candidate cell is live next if it has exactly 3 live neighbors, or if it
/// is live now and has exactly 2.
pub fn step(generation: &Generation) -> Generation {
    let next = candidate_cells(generation)
        .into_iter()
        .filter(|&cell| match live_neighbor_count(cell, generation) {
            2 => generation.contains(cell),
            3 => true,
            _ => false,
        })
        .collect();
    Generation::from_set(next)
}
