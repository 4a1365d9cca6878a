//! Tile label representation.

use std::fmt::{self, Display};

/// A tile label in the range `1..=N`, where `N` is the cell count of the board.
///
/// The largest label `N` is reserved for the blank slot; all smaller labels are
/// ordinary numbered tiles. `Tile` itself does not know `N`; whether a tile is
/// the blank is answered by
/// [`BoardPermutation::blank_tile`](crate::BoardPermutation::blank_tile).
///
/// Tiles order by their numeric value, which is what hint selection relies on.
///
/// # Examples
///
/// ```
/// use slidetile_core::Tile;
///
/// let tile = Tile::new(5);
/// assert_eq!(tile.value(), 5);
/// assert!(Tile::new(3) < Tile::new(12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u8);

impl Tile {
    /// Creates a tile from its numeric label.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero; labels start at 1.
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(value >= 1, "tile labels start at 1, got {value}");
        Self(value)
    }

    /// Returns the numeric label of this tile.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
