//! Error types for board construction and cell access.

use derive_more::{Display, Error};

use crate::{Cell, Grid};

/// Invalid board dimensions, rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigurationError {
    /// One or both dimensions are zero.
    #[display("board dimensions {rows}x{cols} must both be at least 1")]
    EmptyGrid {
        /// Requested row count.
        rows: u8,
        /// Requested column count.
        cols: u8,
    },
    /// Dimensions fall outside the range a consumer supports.
    #[display("board dimensions {rows}x{cols} are outside the supported {min}..={max} range")]
    UnsupportedSize {
        /// Requested row count.
        rows: u8,
        /// Requested column count.
        cols: u8,
        /// Smallest supported side length.
        min: u8,
        /// Largest supported side length.
        max: u8,
    },
}

/// A cell argument lies outside the board.
///
/// This indicates a caller-side coordinate mapping bug and is surfaced rather
/// than silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cell {cell} lies outside the {rows}x{cols} board")]
pub struct OutOfBoundsError {
    cell: Cell,
    rows: u8,
    cols: u8,
}

impl OutOfBoundsError {
    /// Creates an error for `cell` relative to `grid`.
    #[must_use]
    pub fn new(grid: Grid, cell: Cell) -> Self {
        Self {
            cell,
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }

    /// Returns the offending cell.
    #[must_use]
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let grid = Grid::new(3, 4).unwrap();
        let err = OutOfBoundsError::new(grid, Cell::new(5, 0));
        assert_eq!(err.to_string(), "cell (5, 0) lies outside the 3x4 board");

        let err = ConfigurationError::EmptyGrid { rows: 0, cols: 3 };
        assert_eq!(
            err.to_string(),
            "board dimensions 0x3 must both be at least 1"
        );
    }
}
