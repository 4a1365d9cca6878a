//! Randomized scrambling for sliding-tile boards.
//!
//! This crate produces shuffled [`BoardPermutation`]s from seedable
//! randomness. Two strategies are provided behind the [`ShuffleStrategy`]
//! trait:
//!
//! - [`RandomWalkShuffle`] walks the blank through random neighbor swaps.
//!   Every step is a legal slide in reverse, so the result is solvable by
//!   construction. Production default.
//! - [`PermutationShuffle`] rejection-samples uniformly random permutations
//!   against the solvability predicate. Uniform over solvable arrangements,
//!   and deliberately not distribution-equivalent to the walk.
//!
//! All randomness is injected through [`ShuffleSeed`], so any shuffle can be
//! replayed exactly from its seed string.
//!
//! [`BoardPermutation`]: slidetile_core::BoardPermutation
//!
//! # Examples
//!
//! ```
//! use slidetile_core::{BoardPermutation, Grid, solvability};
//! use slidetile_shuffle::{BoardShuffler, RandomWalkShuffle};
//!
//! let grid = Grid::new(4, 4)?;
//! let mut board = BoardPermutation::identity(grid);
//!
//! let shuffler = BoardShuffler::new(RandomWalkShuffle::new());
//! let seed = shuffler.shuffle(&mut board);
//! println!("shuffled with seed {seed}");
//! assert!(solvability::is_solvable(&board));
//! # Ok::<(), slidetile_core::ConfigurationError>(())
//! ```

pub mod seed;
pub mod strategy;

pub use self::{
    seed::{SeedParseError, ShuffleSeed},
    strategy::{BoardShuffler, PermutationShuffle, RandomWalkShuffle, ShuffleStrategy},
};
