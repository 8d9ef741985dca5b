//! Cell coordinates on the garden lattice.

use std::fmt;

use super::direction::Direction;

/// A zero-indexed (row, col) cell coordinate.
///
/// While a forage is active the cursor is always inside the garden; after
/// the terminal hop it may rest one row below the last row. Up and left
/// hops saturate at zero, so neither coordinate can wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The destination one hop toward `dir`.
    ///
    /// `Up` and `Left` saturate at index zero; `Down` and `Right` are
    /// unchecked and may leave the garden. Bounds are the caller's concern.
    pub const fn hop(self, dir: Direction) -> Self {
        match dir {
            Direction::Down => Self::new(self.row + 1, self.col),
            Direction::Up => Self::new(self.row.saturating_sub(1), self.col),
            Direction::Right => Self::new(self.row, self.col + 1),
            Direction::Left => Self::new(self.row, self.col.saturating_sub(1)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
