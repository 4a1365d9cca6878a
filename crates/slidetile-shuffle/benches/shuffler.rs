//! Benchmarks for board shuffling.
//!
//! This benchmark suite measures both shuffle strategies on the default 4×4
//! board and on the largest supported 10×10 board.
//!
//! # Benchmarks
//!
//! - **`random_walk`**: the 10 000-step blank walk. Cost is fixed by the step
//!   count, so board size barely matters.
//! - **`rejection_sampling`**: uniform permutation draws filtered by the
//!   solvability predicate. Cost is dominated by the O(N²) inversion count,
//!   repeated once per draw (≈2 draws expected).
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple
//! cases. Each seed produces a different shuffle while keeping runs
//! comparable.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench shuffler
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use slidetile_core::{BoardPermutation, Grid};
use slidetile_shuffle::{BoardShuffler, PermutationShuffle, RandomWalkShuffle, ShuffleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const SIZES: [(u8, u8); 2] = [(4, 4), (10, 10)];

fn bench_random_walk(c: &mut Criterion) {
    let shuffler = BoardShuffler::new(RandomWalkShuffle::new());

    for (rows, cols) in SIZES {
        let grid = Grid::new(rows, cols).unwrap();
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = ShuffleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new("random_walk", format!("{rows}x{cols}_seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || (BoardPermutation::identity(grid), hint::black_box(*seed)),
                        |(mut board, seed)| {
                            shuffler.shuffle_with_seed(&mut board, seed);
                            board
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_rejection_sampling(c: &mut Criterion) {
    let shuffler = BoardShuffler::new(PermutationShuffle);

    for (rows, cols) in SIZES {
        let grid = Grid::new(rows, cols).unwrap();
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = ShuffleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new("rejection_sampling", format!("{rows}x{cols}_seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || (BoardPermutation::identity(grid), hint::black_box(*seed)),
                        |(mut board, seed)| {
                            shuffler.shuffle_with_seed(&mut board, seed);
                            board
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_random_walk,
        bench_rejection_sampling
);
criterion_main!(benches);
