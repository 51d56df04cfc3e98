use super::Cell;
use ahash::AHashSet as HashSet;

/// Set of all live cells at one moment of the simulation.
///
/// A generation is never mutated after it has been produced: the engine
/// borrows it and builds a fresh one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    cells: HashSet<Cell>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn from_set(cells: HashSet<Cell>) -> Self {
        Self { cells }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates live cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Live cells in ascending order.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells = self.cells.iter().copied().collect::<Vec<_>>();
        cells.sort_unstable();
        cells
    }
}

impl FromIterator<Cell> for Generation {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a Cell> for Generation {
    fn from_iter<I: IntoIterator<Item = &'a Cell>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
