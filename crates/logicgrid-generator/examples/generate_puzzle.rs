//! Example demonstrating puzzle generation.
//!
//! Generates one or more puzzles at a requested difficulty and prints the
//! puzzle, its solution, the seed, and the achieved given count.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty and a reproducible seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard \
//!     --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Generate a batch in parallel (one derived seed per puzzle):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 16
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use logicgrid_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty to generate.
    #[arg(long, value_name = "DIFFICULTY", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Base seed as 64 hex characters; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);
    let base_seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    let generator = PuzzleGenerator::new();

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    let results: Vec<_> = (0..args.count)
        .into_par_iter()
        .map(|i| {
            let seed = if i == 0 { base_seed } else { base_seed.derive(i) };
            generator.generate_with_seed(difficulty, seed)
        })
        .collect();

    for result in results {
        match result {
            Ok(puzzle) => print_puzzle(&puzzle),
            Err(err) => {
                eprintln!("generation failed: {err}");
                process::exit(1);
            }
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Puzzle ({} givens, {}):", puzzle.puzzle.given_count(), puzzle.difficulty);
    println!("  {}", puzzle.puzzle);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();
}
