//! Removal-based puzzle generation with uniqueness proofs.

use logicgrid_core::{Board, Position};
use logicgrid_solver::{SearchBudget, SearchInterrupted, count_solutions};
use rand::seq::SliceRandom as _;

use crate::{difficulty::Difficulty, fill, seed::PuzzleSeed};

/// Tunable limits for puzzle generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Maximum removal passes (each from a fresh full grid) before
    /// [`GenerateError::BandNotReached`] is reported.
    pub max_attempts: u32,
    /// Budget applied to every search the generator runs (full-grid fill and
    /// each uniqueness probe).
    pub budget: SearchBudget,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 20,
            budget: SearchBudget::default(),
        }
    }
}

/// A generated puzzle together with its canonical solution and seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle board; every filled cell is a given.
    pub puzzle: Board,
    /// The unique solution the puzzle was carved from.
    pub solution: Board,
    /// The seed of the removal pass that produced this puzzle.
    pub seed: PuzzleSeed,
    /// The difficulty that was requested.
    pub difficulty: Difficulty,
}

impl GeneratedPuzzle {
    /// Returns `true` if the given count landed inside the requested
    /// difficulty's band.
    ///
    /// A removal pass that stalls (no more cells safely removable) can end
    /// above the band; that result is still a correct unique puzzle, just
    /// miscalibrated, and this method is how callers detect it.
    #[must_use]
    pub fn in_band(&self) -> bool {
        self.difficulty
            .givens_band()
            .contains(&self.puzzle.given_count())
    }
}

/// Errors from the retrying generation entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GenerateError {
    /// No removal pass reached the difficulty band within the attempt
    /// budget. Recoverable: retry with a fresh seed or a higher
    /// [`GeneratorConfig::max_attempts`].
    #[display(
        "no {difficulty} puzzle within {attempts} attempts (best: {best_given_count} givens)"
    )]
    BandNotReached {
        /// The difficulty that was requested.
        difficulty: Difficulty,
        /// How many removal passes were tried.
        attempts: u32,
        /// The lowest given count any pass achieved.
        best_given_count: usize,
    },
    /// A search ran out of budget or was cancelled.
    #[display("generation interrupted: {_0}")]
    Interrupted(#[from] SearchInterrupted),
}

/// Generates puzzles with a guaranteed unique solution.
///
/// # Examples
///
/// ```
/// use logicgrid_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_bytes([42; 32]);
/// let puzzle = generator
///     .generate_with_seed(Difficulty::Easy, seed)
///     .unwrap();
///
/// assert!(puzzle.puzzle.given_count() >= 40);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with an explicit configuration.
    #[must_use]
    pub const fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_seed`].
    pub fn generate(&self, difficulty: Difficulty) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates a puzzle whose given count lies inside the difficulty band,
    /// retrying stalled removal passes with sub-seeds derived from `seed`.
    ///
    /// Fully deterministic for a given seed and configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::BandNotReached`] if no pass within
    /// [`GeneratorConfig::max_attempts`] lands in the band, or
    /// [`GenerateError::Interrupted`] if a search exceeds its budget.
    pub fn generate_with_seed(
        &self,
        difficulty: Difficulty,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut best_given_count = 81;
        for attempt in 0..self.config.max_attempts {
            let attempt_seed = if attempt == 0 { seed } else { seed.derive(attempt) };
            let generated = self.generate_once(difficulty, attempt_seed)?;
            if generated.in_band() {
                return Ok(generated);
            }
            let given_count = generated.puzzle.given_count();
            best_given_count = best_given_count.min(given_count);
            log::debug!(
                "removal pass {}/{} stalled at {given_count} givens (want {difficulty}), retrying",
                attempt + 1,
                self.config.max_attempts,
            );
        }
        Err(GenerateError::BandNotReached {
            difficulty,
            attempts: self.config.max_attempts,
            best_given_count,
        })
    }

    /// Runs a single removal pass and returns whatever it achieves.
    ///
    /// Starting from a full grid, cells are visited in random order; each is
    /// tentatively cleared and the removal kept only if the board still has
    /// exactly one solution. The pass stops at the difficulty's removal
    /// target or when every cell has been attempted — whichever comes first.
    /// The result may therefore sit above the band (check
    /// [`GeneratedPuzzle::in_band`]); it always has exactly one solution.
    ///
    /// # Errors
    ///
    /// Returns [`SearchInterrupted`] if the fill or a uniqueness probe runs
    /// out of budget.
    pub fn generate_once(
        &self,
        difficulty: Difficulty,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, SearchInterrupted> {
        let mut rng = seed.rng();
        let solution = fill::generate_full_grid(&mut rng, &self.config.budget)?;

        let mut puzzle = solution.clone();
        let target = difficulty.removal_target();

        let mut order: Vec<Position> = Position::ALL.to_vec();
        order.shuffle(&mut rng);

        for pos in order {
            if puzzle.filled_count() <= target {
                break;
            }
            let Some(digit) = puzzle.get(pos) else {
                continue;
            };
            puzzle.set(pos, None);
            if count_solutions(&puzzle, 2, &self.config.budget)? != 1 {
                // Removal would admit a second solution; this cell stays a
                // given for the rest of the pass.
                puzzle.set(pos, Some(digit));
            }
        }

        puzzle.freeze_givens();
        Ok(GeneratedPuzzle {
            puzzle,
            solution,
            seed,
            difficulty,
        })
    }
}
