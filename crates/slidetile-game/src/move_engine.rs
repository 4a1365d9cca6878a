//! Chain-move application.
//!
//! A click on a cell in the blank's row or column slides every tile between
//! the clicked cell and the blank one step toward the old blank position, as
//! a sequence of single swaps. The board is fully consistent after each swap,
//! so no intermediate invalid state is ever observable.

use slidetile_core::{BoardPermutation, Cell, OutOfBoundsError};

use crate::MoveOutcome;

/// Applies a click to the board.
///
/// If `clicked` shares a row (or column) with the blank, the blank steps one
/// cell at a time toward `clicked`, swapping at each step; `|distance|` tiles
/// move and the blank ends at the clicked cell. A click on the blank itself
/// or on a cell aligned with neither axis is a defined no-op; stray clicks
/// are tolerated input, not errors.
///
/// # Errors
///
/// Returns [`OutOfBoundsError`] if `clicked` lies outside the grid; the board
/// is left untouched.
pub fn apply_click(
    board: &mut BoardPermutation,
    clicked: Cell,
) -> Result<MoveOutcome, OutOfBoundsError> {
    let grid = board.grid();
    if !grid.in_bounds(clicked) {
        return Err(OutOfBoundsError::new(grid, clicked));
    }

    let blank = board.blank_cell();
    if clicked == blank || (clicked.row() != blank.row() && clicked.col() != blank.col()) {
        return Ok(MoveOutcome::NoOp);
    }

    let mut changed = vec![blank];
    if clicked.row() == blank.row() {
        let mut col = blank.col();
        while col != clicked.col() {
            col = step_toward(col, clicked.col());
            let next = Cell::new(blank.row(), col);
            board.swap(board.blank_cell(), next)?;
            changed.push(next);
        }
    } else {
        let mut row = blank.row();
        while row != clicked.row() {
            row = step_toward(row, clicked.row());
            let next = Cell::new(row, blank.col());
            board.swap(board.blank_cell(), next)?;
            changed.push(next);
        }
    }

    debug_assert_eq!(board.blank_cell(), clicked);
    Ok(MoveOutcome::Moved {
        changed,
        blank: clicked,
    })
}

fn step_toward(from: u8, to: u8) -> u8 {
    if to > from { from + 1 } else { from - 1 }
}

#[cfg(test)]
mod tests {
    use slidetile_core::{Grid, Tile};

    use super::*;

    fn identity(rows: u8, cols: u8) -> BoardPermutation {
        BoardPermutation::identity(Grid::new(rows, cols).unwrap())
    }

    #[test]
    fn test_row_chain_moves_tiles_toward_old_blank() {
        let mut board = identity(4, 4);
        let outcome = apply_click(&mut board, Cell::new(3, 0)).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                changed: vec![
                    Cell::new(3, 3),
                    Cell::new(3, 2),
                    Cell::new(3, 1),
                    Cell::new(3, 0),
                ],
                blank: Cell::new(3, 0),
            }
        );
        assert_eq!(board.blank_cell(), Cell::new(3, 0));
        assert_eq!(board.tile_at(Cell::new(3, 1)), Tile::new(13));
        assert_eq!(board.tile_at(Cell::new(3, 2)), Tile::new(14));
        assert_eq!(board.tile_at(Cell::new(3, 3)), Tile::new(15));
    }

    #[test]
    fn test_column_chain_symmetric_to_row_chain() {
        let mut board = identity(4, 4);
        let outcome = apply_click(&mut board, Cell::new(0, 3)).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                changed: vec![
                    Cell::new(3, 3),
                    Cell::new(2, 3),
                    Cell::new(1, 3),
                    Cell::new(0, 3),
                ],
                blank: Cell::new(0, 3),
            }
        );
        assert_eq!(board.tile_at(Cell::new(1, 3)), Tile::new(4));
        assert_eq!(board.tile_at(Cell::new(2, 3)), Tile::new(8));
        assert_eq!(board.tile_at(Cell::new(3, 3)), Tile::new(12));
    }

    #[test]
    fn test_adjacent_click_moves_one_tile() {
        let mut board = identity(3, 3);
        let outcome = apply_click(&mut board, Cell::new(2, 1)).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                changed: vec![Cell::new(2, 2), Cell::new(2, 1)],
                blank: Cell::new(2, 1),
            }
        );
        assert_eq!(board.tile_at(Cell::new(2, 2)), Tile::new(8));
    }

    #[test]
    fn test_misaligned_click_is_noop() {
        let mut board = identity(4, 4);
        let before = board.clone();
        let outcome = apply_click(&mut board, Cell::new(1, 2)).unwrap();
        assert_eq!(outcome, MoveOutcome::NoOp);
        assert_eq!(board, before);
    }

    #[test]
    fn test_click_on_blank_is_noop() {
        let mut board = identity(4, 4);
        let before = board.clone();
        let outcome = apply_click(&mut board, Cell::new(3, 3)).unwrap();
        assert_eq!(outcome, MoveOutcome::NoOp);
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_click_is_an_error() {
        let mut board = identity(4, 4);
        let before = board.clone();
        let err = apply_click(&mut board, Cell::new(4, 0)).unwrap_err();
        assert_eq!(err.cell(), Cell::new(4, 0));
        assert_eq!(board, before);
    }

    #[test]
    fn test_click_then_inverse_click_restores_board() {
        let mut board = identity(4, 4);
        let before = board.clone();
        apply_click(&mut board, Cell::new(3, 0)).unwrap();
        apply_click(&mut board, Cell::new(3, 3)).unwrap();
        assert_eq!(board, before);
    }
}
