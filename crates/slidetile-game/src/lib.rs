//! Sliding-puzzle game sessions.
//!
//! This crate is the externally visible aggregate over the board model: a
//! [`Game`] owns one live [`BoardPermutation`] plus an independent solution
//! reference, applies player clicks through the chain-move engine, scrambles
//! via the strategies in `slidetile_shuffle`, and answers the solved-state
//! and hint queries a UI layer needs.
//!
//! Rendering, input mapping, and persistence live elsewhere; this crate only
//! defines the contract they consume.
//!
//! [`BoardPermutation`]: slidetile_core::BoardPermutation
//!
//! # Examples
//!
//! ```
//! use slidetile_game::Game;
//! use slidetile_shuffle::{BoardShuffler, RandomWalkShuffle};
//!
//! let mut game = Game::new(4, 4)?;
//! let shuffler = BoardShuffler::new(RandomWalkShuffle::new());
//! let seed = game.shuffle(&shuffler);
//!
//! if !game.is_solved() {
//!     let cell = game.hint()?;
//!     println!("seed {seed}: work on the tile at {cell}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod game;
pub mod move_engine;
pub mod outcome;

pub use self::{error::NoHintAvailable, game::Game, outcome::MoveOutcome};
