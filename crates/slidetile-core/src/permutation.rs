//! The tile permutation over a board.

use std::fmt::{self, Display};

use crate::{Cell, Grid, OutOfBoundsError, Tile};

/// A total bijection from board cells to tile labels `1..=N`.
///
/// Exactly one cell holds the largest label `N`, the blank slot. The blank's
/// location is cached and maintained by every mutator, so looking it up never
/// requires a scan of the board.
///
/// Two permutations are equal when their full cell→tile mappings are equal;
/// this is what solved-state detection relies on.
///
/// # Examples
///
/// ```
/// use slidetile_core::{BoardPermutation, Cell, Grid, Tile};
///
/// let grid = Grid::new(3, 3)?;
/// let mut board = BoardPermutation::identity(grid);
///
/// // Row-major identity labeling, blank in the bottom-right corner.
/// assert_eq!(board.tile_at(Cell::new(0, 0)), Tile::new(1));
/// assert_eq!(board.blank_cell(), Cell::new(2, 2));
///
/// // Swapping the blank with a neighbor keeps the cache up to date.
/// board.swap(Cell::new(2, 2), Cell::new(2, 1))?;
/// assert_eq!(board.blank_cell(), Cell::new(2, 1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPermutation {
    grid: Grid,
    tiles: Vec<Tile>,
    blank: Cell,
}

impl BoardPermutation {
    /// Creates the row-major identity labeling: `tile(row, col) = row·C + col + 1`.
    ///
    /// The blank (label `N`) lands in the bottom-right corner. This is the
    /// solved arrangement.
    ///
    /// # Panics
    ///
    /// Panics if the board has more than `u8::MAX` cells. Supported boards go
    /// up to 10×10, far below that.
    #[must_use]
    pub fn identity(grid: Grid) -> Self {
        let count = u8::try_from(grid.tile_count()).expect("board larger than 255 cells");
        let tiles = (1..=count).map(Tile::new).collect();
        Self {
            grid,
            tiles,
            blank: grid.bottom_right(),
        }
    }

    /// Creates a permutation from a row-major tile sequence.
    ///
    /// # Panics
    ///
    /// Panics unless `tiles` is a bijection over `1..=N` for this grid.
    /// A non-bijective sequence is a programmer error, not a recoverable
    /// condition.
    #[must_use]
    pub fn from_tiles(grid: Grid, tiles: Vec<Tile>) -> Self {
        assert_eq!(
            tiles.len(),
            grid.tile_count(),
            "expected {} tiles, got {}",
            grid.tile_count(),
            tiles.len()
        );
        let mut seen = vec![false; tiles.len()];
        let mut blank = None;
        for (index, tile) in tiles.iter().enumerate() {
            let value = usize::from(tile.value());
            assert!(
                value <= tiles.len() && !seen[value - 1],
                "tile sequence is not a bijection over 1..={}",
                tiles.len()
            );
            seen[value - 1] = true;
            if value == tiles.len() {
                blank = Some(index);
            }
        }
        let blank = blank.expect("bijection always contains the blank label");
        let cols = usize::from(grid.cols());
        #[expect(clippy::cast_possible_truncation)]
        let blank = Cell::new((blank / cols) as u8, (blank % cols) as u8);
        Self { grid, tiles, blank }
    }

    /// Returns the grid this permutation is defined over.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the tile at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    #[must_use]
    pub fn tile_at(&self, cell: Cell) -> Tile {
        assert!(
            self.grid.in_bounds(cell),
            "cell {cell} lies outside the board"
        );
        self.tiles[self.grid.index_of(cell)]
    }

    /// Returns the cached location of the blank slot.
    #[must_use]
    pub fn blank_cell(&self) -> Cell {
        debug_assert_eq!(self.blank, self.scan_for_blank());
        self.blank
    }

    /// Returns the blank label `N` for this board.
    #[must_use]
    pub fn blank_tile(&self) -> Tile {
        #[expect(clippy::cast_possible_truncation)]
        let value = self.tiles.len() as u8;
        Tile::new(value)
    }

    /// Returns the tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Exchanges the tiles at two cells.
    ///
    /// Swapping a cell with itself is a legal no-op. When one operand is the
    /// blank, the cached blank location moves to the other operand.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if either cell lies outside the grid; the
    /// board is left untouched in that case.
    pub fn swap(&mut self, a: Cell, b: Cell) -> Result<(), OutOfBoundsError> {
        let index_a = self.grid.checked_index(a)?;
        let index_b = self.grid.checked_index(b)?;
        if index_a == index_b {
            return Ok(());
        }
        self.tiles.swap(index_a, index_b);
        if self.blank == a {
            self.blank = b;
        } else if self.blank == b {
            self.blank = a;
        }
        Ok(())
    }

    // Consistency-check fallback only; the cache makes this unnecessary in
    // normal operation.
    fn scan_for_blank(&self) -> Cell {
        let blank = self.blank_tile();
        self.grid
            .cells()
            .find(|&cell| self.tiles[self.grid.index_of(cell)] == blank)
            .expect("a bijection always contains the blank label")
    }
}

impl Display for BoardPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.grid.tile_count().to_string().len();
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                if col > 0 {
                    write!(f, " ")?;
                }
                let cell = Cell::new(row, col);
                if cell == self.blank {
                    write!(f, "{:>width$}", "\u{b7}")?;
                } else {
                    write!(f, "{:>width$}", self.tile_at(cell).value())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
