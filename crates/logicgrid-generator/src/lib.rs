//! Puzzle generation for the logicgrid puzzle engine.
//!
//! Generation is a two-phase process:
//!
//! 1. [`generate_full_grid`] fills an empty board with a randomized version
//!    of the solver's backtracking search (candidate order shuffled by the
//!    supplied RNG), yielding one of the many complete grids.
//! 2. [`PuzzleGenerator`] removes givens one random cell at a time, keeping a
//!    removal only if the board still has exactly one solution (proved with
//!    `count_solutions(·, 2)`), until the requested [`Difficulty`]'s
//!    given-count target is reached or no cell is safely removable.
//!
//! A single removal pass is best-effort: it can stall before the difficulty
//! band is reached. [`PuzzleGenerator::generate_once`] returns the
//! best-achieved puzzle with that fact exposed via
//! [`GeneratedPuzzle::in_band`]; [`PuzzleGenerator::generate_with_seed`]
//! retries with derived sub-seeds up to a bounded attempt count before
//! reporting [`GenerateError::BandNotReached`].
//!
//! All randomness flows from a [`PuzzleSeed`], so generation is fully
//! reproducible.
//!
//! # Examples
//!
//! ```
//! use logicgrid_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let seed = PuzzleSeed::from_bytes([42; 32]);
//! let puzzle = generator
//!     .generate_with_seed(Difficulty::Medium, seed)
//!     .unwrap();
//!
//! assert!(puzzle.in_band());
//! assert!(puzzle.solution.is_complete());
//! ```

pub mod difficulty;
pub mod fill;
pub mod generator;
pub mod seed;

pub use self::{
    difficulty::Difficulty,
    fill::generate_full_grid,
    generator::{GenerateError, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
