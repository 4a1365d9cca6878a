//! Core data structures for the sliding-tile puzzle.
//!
//! This crate provides the pure board model shared by shuffling and game
//! management: no randomness, no I/O, just the grid topology, the tile
//! permutation, and the solvability predicate.
//!
//! # Overview
//!
//! - [`cell`]: board coordinates ([`Cell`])
//! - [`tile`]: tile labels `1..=N` with the largest reserved for the blank
//!   ([`Tile`])
//! - [`grid`]: stateless topology oracle with bounds checks, row-major cell
//!   enumeration, and 4-connected neighbors ([`Grid`])
//! - [`permutation`]: the bijective cell→tile mapping with a cached blank
//!   location ([`BoardPermutation`])
//! - [`solvability`]: the permutation-parity predicate deciding which
//!   arrangements are reachable by legal slides
//! - [`error`]: construction and bounds errors
//!
//! # Examples
//!
//! ```
//! use slidetile_core::{BoardPermutation, Cell, Grid, solvability};
//!
//! let grid = Grid::new(4, 4)?;
//! let mut board = BoardPermutation::identity(grid);
//! assert!(solvability::is_solvable(&board));
//!
//! // Slide the tile above the blank down into it.
//! let blank = board.blank_cell();
//! board.swap(blank, Cell::new(blank.row() - 1, blank.col()))?;
//! assert!(solvability::is_solvable(&board));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod permutation;
pub mod solvability;
pub mod tile;

pub use self::{
    cell::Cell,
    error::{ConfigurationError, OutOfBoundsError},
    grid::Grid,
    permutation::BoardPermutation,
    tile::Tile,
};
