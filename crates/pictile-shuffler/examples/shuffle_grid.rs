//! Example demonstrating seeded board shuffling.
//!
//! This example shows how to:
//! - Create a `Shuffler` with a shuffle strategy
//! - Shuffle a board with a random or explicit seed
//! - Display the scrambled board and the seed that reproduces it
//!
//! # Usage
//!
//! ```sh
//! cargo run --example shuffle_grid
//! ```
//!
//! Select the board size and the solved position of the hole:
//!
//! ```sh
//! cargo run --example shuffle_grid -- --columns 3 --rows 4 --empty-x 2 --empty-y 0
//! ```
//!
//! Select the shuffle strategy (walk or permutation):
//!
//! ```sh
//! cargo run --example shuffle_grid -- --strategy permutation
//! ```
//!
//! Reproduce a board from an earlier run:
//!
//! ```sh
//! cargo run --example shuffle_grid -- --seed <64 hex digits>
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use pictile_core::Position;
use pictile_shuffler::{ShuffleSeed, ShuffleStrategy, Shuffler};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    Walk,
    Permutation,
}

impl From<StrategyKind> for ShuffleStrategy {
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Walk => Self::RandomWalk,
            StrategyKind::Permutation => Self::FilteredPermutation,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of columns on the board.
    #[arg(long, value_name = "COUNT", default_value_t = 4)]
    columns: u8,

    /// Number of rows on the board.
    #[arg(long, value_name = "COUNT", default_value_t = 4)]
    rows: u8,

    /// Column of the hole in the solved layout.
    #[arg(long, value_name = "X", default_value_t = 3)]
    empty_x: u8,

    /// Row of the hole in the solved layout.
    #[arg(long, value_name = "Y", default_value_t = 0)]
    empty_y: u8,

    /// Shuffle strategy to scramble the board with.
    #[arg(long, value_name = "KIND", default_value = "walk")]
    strategy: StrategyKind,

    /// Seed to reproduce a board (64 hex digits). Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    let args = Args::parse();
    let shuffler = Shuffler::new(args.strategy.into());
    let empty = Position::new(args.empty_x, args.empty_y);

    let seed = match args.seed.as_deref() {
        Some(text) => match text.parse::<ShuffleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => ShuffleSeed::random(),
    };

    let shuffled = match shuffler.shuffle_with_seed(args.columns, args.rows, empty, seed) {
        Ok(shuffled) => shuffled,
        Err(err) => {
            eprintln!("Invalid board: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", shuffled.seed);
    println!();
    println!("Board:");
    for line in shuffled.grid.to_string().lines() {
        println!("  {line}");
    }
}
