//! Garden grid: carrot counts on a rectangular lattice.
//!
//! This module owns the data the rabbit forages over. It provides:
//! 1. **Validation:** Rectangular, at least 1×1, checked before any state exists.
//! 2. **Reads:** Bounds-checked cell access and the clamp-to-self neighbor read.
//! 3. **Center selection:** The start-cell rule, including the even-dimension
//!    disambiguation order.
//! 4. **Rendering:** An aligned snapshot for trace output.

use std::fmt;

use crate::common::{Direction, GardenError, Position};

/// A rectangular garden of carrot counts.
///
/// Cells hold non-negative counts stored row-major. A grazed cell is zeroed
/// and never contributes again. A garden is owned by exactly one simulator
/// for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garden {
    rows: usize,
    cols: usize,
    /// Row-major cell storage, `rows * cols` entries.
    cells: Vec<u32>,
}

impl Garden {
    /// Validates and builds a garden from a matrix of carrot counts.
    ///
    /// # Errors
    ///
    /// Returns [`GardenError::Empty`] when either dimension is zero and
    /// [`GardenError::Ragged`] when rows differ in length.
    pub fn new(matrix: Vec<Vec<u32>>) -> Result<Self, GardenError> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GardenError::Empty { rows, cols });
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, counts) in matrix.iter().enumerate() {
            if counts.len() != cols {
                return Err(GardenError::Ragged {
                    row,
                    expected: cols,
                    found: counts.len(),
                });
            }
            cells.extend_from_slice(counts);
        }
        tracing::debug!(rows, cols, "garden constructed");
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// True when `pos` addresses a cell inside the garden.
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Carrot count at `pos`, or `None` outside the garden.
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.contains(pos).then(|| self.at(pos))
    }

    /// Grazes the cell at `pos`: returns its carrot count and zeroes it.
    ///
    /// Returns `None` outside the garden; nothing is written.
    pub fn take(&mut self, pos: Position) -> Option<u32> {
        if !self.contains(pos) {
            return None;
        }
        let idx = self.index(pos);
        Some(std::mem::take(&mut self.cells[idx]))
    }

    /// Total carrots still planted.
    pub fn remaining_carrots(&self) -> u64 {
        self.cells.iter().map(|&count| u64::from(count)).sum()
    }

    /// Reads the neighbor one cell toward `dir` from `pos`, clamping at the
    /// borders: a missing neighbor reads as the cell at `pos` itself, not as
    /// absent. An already-grazed border cell therefore competes as a
    /// zero-valued candidate instead of dropping out of the comparison.
    ///
    /// `pos` must be inside the garden.
    pub fn neighbor_clamped(&self, pos: Position, dir: Direction) -> u32 {
        let clamped = match dir {
            Direction::Down => Position::new((pos.row + 1).min(self.rows - 1), pos.col),
            Direction::Up => Position::new(pos.row.saturating_sub(1), pos.col),
            Direction::Right => Position::new(pos.row, (pos.col + 1).min(self.cols - 1)),
            Direction::Left => Position::new(pos.row, pos.col.saturating_sub(1)),
        };
        self.at(clamped)
    }

    /// Picks the start cell: the floor midpoint `(rows/2, cols/2)`, adjusted
    /// toward its up/left/diagonal neighbors when a dimension is even.
    ///
    /// With both dimensions odd the midpoint is the unique candidate. With
    /// exactly one even dimension the adjacent candidate wins only when
    /// strictly richer. With both even, the richest of the four candidates
    /// wins, preferring left, then up, then diagonal, then the midpoint on
    /// equal counts. The returned coordinates are always valid indices.
    pub fn center(&self) -> Position {
        let n = self.rows / 2;
        let m = self.cols / 2;
        let mid = Position::new(n, m);
        if self.rows % 2 == 1 && self.cols % 2 == 1 {
            return mid;
        }

        let v = self.at(mid);
        if self.rows % 2 == 1 {
            // Even column count: the left neighbor competes. cols >= 2 here.
            let left = self.at(Position::new(n, m - 1));
            if v < left {
                return Position::new(n, m - 1);
            }
            return mid;
        }
        if self.cols % 2 == 1 {
            // Even row count: the up neighbor competes. rows >= 2 here.
            let up = self.at(Position::new(n - 1, m));
            if v < up {
                return Position::new(n - 1, m);
            }
            return mid;
        }

        // Both even: four candidates, priority left > up > diagonal > midpoint.
        let up = self.at(Position::new(n - 1, m));
        let left = self.at(Position::new(n, m - 1));
        let diag = self.at(Position::new(n - 1, m - 1));
        let top = v.max(diag).max(up).max(left);
        if left == top {
            Position::new(n, m - 1)
        } else if up == top {
            Position::new(n - 1, m)
        } else if diag == top {
            Position::new(n - 1, m - 1)
        } else {
            mid
        }
    }

    /// Cell value at an in-bounds position.
    fn at(&self, pos: Position) -> u32 {
        self.cells[self.index(pos)]
    }

    const fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}

impl fmt::Display for Garden {
    /// Renders an aligned snapshot, one garden row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .max()
            .map_or(1, |top| top.to_string().len());
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", self.at(Position::new(row, col)))?;
            }
        }
        Ok(())
    }
}
