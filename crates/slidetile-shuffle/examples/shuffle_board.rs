//! Example demonstrating board shuffling.
//!
//! This example shows how to:
//! - Shuffle a board with either strategy
//! - Replay a shuffle from a known seed
//! - Estimate the rejection-sampling acceptance rate
//!
//! # Usage
//!
//! ```sh
//! cargo run --example shuffle_board
//! ```
//!
//! Pick the board size and strategy:
//!
//! ```sh
//! cargo run --example shuffle_board -- --rows 5 --cols 3 --strategy permutation
//! ```
//!
//! Replay a previously printed seed:
//!
//! ```sh
//! cargo run --example shuffle_board -- --seed <64-hex-chars>
//! ```
//!
//! Estimate how many uniformly random permutations pass the solvability
//! predicate (expected ≈50%):
//!
//! ```sh
//! cargo run --example shuffle_board -- --acceptance-trials 100000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use rand::seq::SliceRandom as _;
use rayon::prelude::*;
use slidetile_core::{BoardPermutation, Grid, Tile, solvability};
use slidetile_shuffle::{BoardShuffler, PermutationShuffle, RandomWalkShuffle, ShuffleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Walk,
    Permutation,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board rows.
    #[arg(long, value_name = "COUNT", default_value_t = 4)]
    rows: u8,

    /// Board columns.
    #[arg(long, value_name = "COUNT", default_value_t = 4)]
    cols: u8,

    /// Shuffle strategy.
    #[arg(long, value_enum, default_value = "walk")]
    strategy: Strategy,

    /// Seed to replay (64 hex characters). A fresh seed is drawn if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<ShuffleSeed>,

    /// Estimate the acceptance rate over this many raw permutation draws
    /// instead of shuffling.
    #[arg(long, value_name = "COUNT")]
    acceptance_trials: Option<u32>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grid = match Grid::new(args.rows, args.cols) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if let Some(trials) = args.acceptance_trials {
        if trials == 0 {
            eprintln!("--acceptance-trials must be at least 1.");
            process::exit(1);
        }
        estimate_acceptance(grid, trials);
        return;
    }

    let seed = args.seed.unwrap_or_else(ShuffleSeed::random);
    let mut board = BoardPermutation::identity(grid);
    match args.strategy {
        Strategy::Walk => {
            BoardShuffler::new(RandomWalkShuffle::new()).shuffle_with_seed(&mut board, seed);
        }
        Strategy::Permutation => {
            BoardShuffler::new(PermutationShuffle).shuffle_with_seed(&mut board, seed);
        }
    }

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Board:");
    print!("{board}");
    println!();
    println!("Solvable: {}", solvability::is_solvable(&board));
}

fn estimate_acceptance(grid: Grid, trials: u32) {
    let accepted: u32 = (0..trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = ShuffleSeed::derive(&format!("acceptance-{i}")).rng();
            let mut tiles: Vec<Tile> = BoardPermutation::identity(grid).tiles().to_vec();
            tiles.shuffle(&mut rng);
            let candidate = BoardPermutation::from_tiles(grid, tiles);
            u32::from(solvability::is_solvable(&candidate))
        })
        .sum();

    let rate = f64::from(accepted) / f64::from(trials) * 100.0;
    println!("accepted {accepted} of {trials} raw permutations ({rate:.2}%)");
}
