use std::fmt;

/// Relative coordinates of the eight cells surrounding the origin.
pub const NEIGHBORHOOD: [(i64, i64); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Position on the grid.
///
/// The grid is the whole `i64` plane with no wraparound: positions past
/// `i64::MIN` or `i64::MAX` do not exist and are never live.
///
/// Ordering is lexicographic by `x`, then `y`; it carries no meaning for the
/// simulation and only makes sorted views reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Cell shifted by `(dx, dy)`, or `None` if it would leave the `i64` plane.
    pub fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
