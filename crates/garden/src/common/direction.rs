//! Hop directions and their fixed evaluation order.
//!
//! Movement decisions scan the four neighbors in a fixed order so that ties
//! between equally-stocked cells resolve the same way on every run.

use std::fmt;

/// A single hop direction on the garden lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward a higher row index.
    Down,
    /// Toward a lower row index.
    Up,
    /// Toward a higher column index.
    Right,
    /// Toward a lower column index.
    Left,
}

impl Direction {
    /// Fixed evaluation order for movement decisions. The first direction
    /// holding the maximum neighbor value wins, so down beats up beats right
    /// beats left on equal counts.
    pub const SCAN_ORDER: [Self; 4] = [Self::Down, Self::Up, Self::Right, Self::Left];

    /// Lowercase name used in trace lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::Right => "right",
            Self::Left => "left",
        }
    }

    /// Arrow character used when rendering a path.
    pub const fn arrow(self) -> char {
        match self {
            Self::Down => '↓',
            Self::Up => '↑',
            Self::Right => '→',
            Self::Left => '←',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
