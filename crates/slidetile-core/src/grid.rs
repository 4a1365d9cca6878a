//! Board topology.

use crate::{Cell, ConfigurationError, OutOfBoundsError};

/// A stateless topology oracle for an `R`×`C` board.
///
/// `Grid` knows nothing about tiles; it only enumerates cells, checks bounds,
/// and answers neighbor queries. Neighbors are 4-connected: two cells are
/// neighbors when they share an edge, never just a corner.
///
/// # Examples
///
/// ```
/// use slidetile_core::{Cell, Grid};
///
/// let grid = Grid::new(3, 3)?;
/// assert!(grid.in_bounds(Cell::new(2, 2)));
/// assert!(!grid.in_bounds(Cell::new(3, 0)));
///
/// // A corner has two neighbors, an interior cell four.
/// assert_eq!(grid.neighbors(Cell::new(0, 0)).len(), 2);
/// assert_eq!(grid.neighbors(Cell::new(1, 1)).len(), 4);
/// # Ok::<(), slidetile_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    rows: u8,
    cols: u8,
}

impl Grid {
    /// Creates a grid with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyGrid`] if either dimension is zero.
    /// Upper limits are a consumer concern; the grid itself accepts any
    /// nonzero size.
    pub fn new(rows: u8, cols: u8) -> Result<Self, ConfigurationError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigurationError::EmptyGrid { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> u8 {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> u8 {
        self.cols
    }

    /// Returns the total cell count `R·C`.
    #[must_use]
    pub fn tile_count(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    /// Returns whether `cell` lies within the board.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        cell.row() < self.rows && cell.col() < self.cols
    }

    /// Returns the bottom-right cell, `(R-1, C-1)`.
    #[must_use]
    pub fn bottom_right(self) -> Cell {
        Cell::new(self.rows - 1, self.cols - 1)
    }

    /// Returns the row-major index of `cell`, or an error if it is out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if `cell` lies outside the board.
    pub fn checked_index(self, cell: Cell) -> Result<usize, OutOfBoundsError> {
        if self.in_bounds(cell) {
            Ok(self.index_of(cell))
        } else {
            Err(OutOfBoundsError::new(self, cell))
        }
    }

    pub(crate) fn index_of(self, cell: Cell) -> usize {
        debug_assert!(self.in_bounds(cell));
        usize::from(cell.row()) * usize::from(self.cols) + usize::from(cell.col())
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    /// Returns the up-to-4 in-bounds cells sharing an edge with `cell`.
    ///
    /// Diagonal cells are not neighbors. The order is fixed: up, down, left,
    /// right, with out-of-bounds candidates dropped.
    #[must_use]
    pub fn neighbors(self, cell: Cell) -> Vec<Cell> {
        debug_assert!(self.in_bounds(cell));
        let mut neighbors = Vec::with_capacity(4);
        if cell.row() > 0 {
            neighbors.push(Cell::new(cell.row() - 1, cell.col()));
        }
        if cell.row() + 1 < self.rows {
            neighbors.push(Cell::new(cell.row() + 1, cell.col()));
        }
        if cell.col() > 0 {
            neighbors.push(Cell::new(cell.row(), cell.col() - 1));
        }
        if cell.col() + 1 < self.cols {
            neighbors.push(Cell::new(cell.row(), cell.col() + 1));
        }
        neighbors
    }
}
