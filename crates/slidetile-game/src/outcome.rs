//! Click outcomes.

use derive_more::IsVariant;
use slidetile_core::Cell;

/// The result of applying a click to the board.
///
/// A click either moves a chain of tiles or changes nothing at all; there is
/// no partially applied state. The `Moved` payload carries everything a
/// renderer needs for an incremental redraw.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum MoveOutcome {
    /// Nothing changed: the click hit the blank itself or a cell sharing
    /// neither row nor column with it. Tolerated input, not an error.
    NoOp,
    /// One or more tiles slid toward the old blank position.
    Moved {
        /// Cells whose contents changed, ordered from the old blank position
        /// toward the clicked cell (inclusive).
        changed: Vec<Cell>,
        /// Where the blank ended up, which is always the clicked cell.
        blank: Cell,
    },
}
