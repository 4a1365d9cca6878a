use std::collections::BTreeMap;

use slidetile_core::{BoardPermutation, Cell, ConfigurationError, Grid, OutOfBoundsError, Tile};
use slidetile_shuffle::{BoardShuffler, ShuffleSeed, ShuffleStrategy};

use crate::{MoveOutcome, NoHintAvailable, move_engine};

/// A sliding-puzzle game session.
///
/// Owns the live board and a fixed solution reference, and exposes the
/// queries a renderer consumes every redraw (`positions`, `blank_cell`,
/// `is_correct`, `is_solved`) plus the commands driven by input events
/// (`click`, `shuffle`, `hint`).
///
/// The solution is an independent copy of the identity labeling made at
/// construction; it never shares storage with the live board, so no sequence
/// of moves or shuffles can corrupt it.
///
/// # Example
///
/// ```
/// use slidetile_game::Game;
/// use slidetile_shuffle::{BoardShuffler, RandomWalkShuffle};
///
/// let mut game = Game::new(4, 4)?;
/// assert!(game.is_solved()); // A fresh board starts in the solved state.
///
/// let shuffler = BoardShuffler::new(RandomWalkShuffle::new());
/// let seed = game.shuffle(&shuffler);
/// println!("shuffled with seed {seed}");
/// # Ok::<(), slidetile_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: BoardPermutation,
    solution: BoardPermutation,
    valid_clicks: u32,
}

impl Game {
    /// Smallest supported side length.
    pub const MIN_SIDE: u8 = 3;
    /// Largest supported side length.
    pub const MAX_SIDE: u8 = 10;

    /// Creates a game with the live board initialized to the solved state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnsupportedSize`] unless both dimensions
    /// lie in [`MIN_SIDE`](Self::MIN_SIDE)`..=`[`MAX_SIDE`](Self::MAX_SIDE).
    ///
    /// # Example
    ///
    /// ```
    /// use slidetile_core::ConfigurationError;
    /// use slidetile_game::Game;
    ///
    /// assert!(Game::new(3, 10).is_ok());
    /// assert!(matches!(
    ///     Game::new(2, 5),
    ///     Err(ConfigurationError::UnsupportedSize { .. })
    /// ));
    /// ```
    pub fn new(rows: u8, cols: u8) -> Result<Self, ConfigurationError> {
        let supported = Self::MIN_SIDE..=Self::MAX_SIDE;
        if !supported.contains(&rows) || !supported.contains(&cols) {
            return Err(ConfigurationError::UnsupportedSize {
                rows,
                cols,
                min: Self::MIN_SIDE,
                max: Self::MAX_SIDE,
            });
        }
        let grid = Grid::new(rows, cols)?;
        let solution = BoardPermutation::identity(grid);
        // The live board must never share storage with the solution.
        let board = solution.clone();
        Ok(Self {
            board,
            solution,
            valid_clicks: 0,
        })
    }

    /// Returns the grid the game is played on.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.board.grid()
    }

    /// Returns the live board.
    #[must_use]
    pub fn board(&self) -> &BoardPermutation {
        &self.board
    }

    /// Returns the fixed solution reference.
    #[must_use]
    pub fn solution(&self) -> &BoardPermutation {
        &self.solution
    }

    /// Returns the current location of the blank slot.
    #[must_use]
    pub fn blank_cell(&self) -> Cell {
        self.board.blank_cell()
    }

    /// Returns whether the tile at `cell` matches the solution.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    #[must_use]
    pub fn is_correct(&self, cell: Cell) -> bool {
        self.board.tile_at(cell) == self.solution.tile_at(cell)
    }

    /// Returns whether the live board equals the solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board == self.solution
    }

    /// Returns the cell holding the smallest misplaced tile.
    ///
    /// Useful for play modes that hide tile numbers: the hint points at the
    /// tile a player should work on next.
    ///
    /// # Errors
    ///
    /// Returns [`NoHintAvailable`] if the puzzle is already solved.
    ///
    /// # Example
    ///
    /// ```
    /// use slidetile_core::Cell;
    /// use slidetile_game::Game;
    ///
    /// let mut game = Game::new(3, 3)?;
    /// game.click(Cell::new(2, 0))?;
    ///
    /// // Tile 7 is the smallest misplaced tile; it now sits at (2, 1).
    /// assert_eq!(game.hint()?, Cell::new(2, 1));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn hint(&self) -> Result<Cell, NoHintAvailable> {
        self.grid()
            .cells()
            .filter(|&cell| !self.is_correct(cell))
            .min_by_key(|&cell| self.board.tile_at(cell))
            .ok_or(NoHintAvailable)
    }

    /// Returns an independent cell→tile snapshot of the live board.
    ///
    /// The returned map never aliases the live storage, so callers cannot
    /// corrupt the board through it.
    #[must_use]
    pub fn positions(&self) -> BTreeMap<Cell, Tile> {
        self.grid()
            .cells()
            .map(|cell| (cell, self.board.tile_at(cell)))
            .collect()
    }

    /// Applies a click to the live board.
    ///
    /// Clicks that change the board are counted; see
    /// [`valid_clicks`](Self::valid_clicks). No-op clicks (the blank itself,
    /// or a cell aligned with neither of the blank's axes) are tolerated and
    /// not counted.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if `cell` lies outside the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use slidetile_core::Cell;
    /// use slidetile_game::Game;
    ///
    /// let mut game = Game::new(4, 4)?;
    ///
    /// // Click three tiles away in the blank's row: the whole chain slides.
    /// let outcome = game.click(Cell::new(3, 0))?;
    /// assert!(outcome.is_moved());
    /// assert_eq!(game.blank_cell(), Cell::new(3, 0));
    /// assert_eq!(game.valid_clicks(), 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn click(&mut self, cell: Cell) -> Result<MoveOutcome, OutOfBoundsError> {
        let outcome = move_engine::apply_click(&mut self.board, cell)?;
        if outcome.is_moved() {
            self.valid_clicks += 1;
        }
        Ok(outcome)
    }

    /// Returns how many clicks have changed the board since construction.
    #[must_use]
    pub fn valid_clicks(&self) -> u32 {
        self.valid_clicks
    }

    /// Scrambles the live board with a freshly drawn seed and returns it.
    ///
    /// Read [`positions`](Self::positions) for the new layout; replaying the
    /// returned seed via [`shuffle_with_seed`](Self::shuffle_with_seed)
    /// reproduces it exactly.
    pub fn shuffle<S: ShuffleStrategy>(&mut self, shuffler: &BoardShuffler<S>) -> ShuffleSeed {
        shuffler.shuffle(&mut self.board)
    }

    /// Scrambles the live board deterministically from `seed`.
    pub fn shuffle_with_seed<S: ShuffleStrategy>(
        &mut self,
        shuffler: &BoardShuffler<S>,
        seed: ShuffleSeed,
    ) {
        shuffler.shuffle_with_seed(&mut self.board, seed);
    }
}
