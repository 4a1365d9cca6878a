//! Game-level error types.

use derive_more::{Display, Error};

/// `hint` was asked for on a solved board.
///
/// Recoverable: there is simply no misplaced tile to point at. Callers should
/// check [`Game::is_solved`](crate::Game::is_solved) first or suppress the
/// hint UI on this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("the puzzle is already solved, there is no misplaced tile to point at")]
pub struct NoHintAvailable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        assert_eq!(
            NoHintAvailable.to_string(),
            "the puzzle is already solved, there is no misplaced tile to point at"
        );
    }
}
