//! Playable puzzle session with move validation and a lifecycle state machine.

use logicgrid_core::{Board, Digit, Position};
use logicgrid_generator::{
    Difficulty, GenerateError, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed,
};
use logicgrid_solver::{SearchBudget, SearchInterrupted, solve};

use crate::hint::{Hint, HintError, request_hint};

/// Lifecycle of a [`Game`].
///
/// A session starts in `New`, moves to `InProgress` on the first accepted
/// board change, and ends in one of the terminal phases. Terminal phases
/// accept no further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GamePhase {
    /// No accepted move yet.
    #[display("new")]
    New,
    /// At least one accepted move, board not yet complete.
    #[display("in progress")]
    InProgress,
    /// The board is completely and correctly filled.
    #[display("solved")]
    Solved,
    /// The player gave up; the session is closed.
    #[display("abandoned")]
    Abandoned,
}

/// Reasons a move or clear is rejected. The board is never modified when one
/// of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The targeted cell is a given and cannot be changed.
    #[display("cell {position} is a given")]
    GivenCell {
        /// The targeted cell.
        position: Position,
    },
    /// Placing the digit would duplicate it within a row, column, or box.
    #[display("digit {digit} conflicts with a peer of {position}")]
    Conflict {
        /// The targeted cell.
        position: Position,
        /// The rejected digit.
        digit: Digit,
    },
    /// The session has ended ([`GamePhase::Solved`] or
    /// [`GamePhase::Abandoned`]).
    #[display("the game is over")]
    GameOver,
}

/// Errors from [`Game::request_solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolveRequestError {
    /// The current board admits no completion. Only reachable through
    /// erroneous (but locally consistent) player entries; the puzzle's givens
    /// always admit one.
    #[display("no completion exists from the current board")]
    Unsolvable,
    /// The search ran out of budget or was cancelled.
    #[display("solve interrupted: {_0}")]
    Interrupted(#[from] SearchInterrupted),
}

/// A puzzle being played: the player's board, the canonical solution, and the
/// session phase.
///
/// All rule enforcement lives here. Hosts call [`apply_move`](Self::apply_move)
/// and [`clear_cell`](Self::clear_cell) for every edit; an `Err` guarantees
/// the board is unchanged.
///
/// # Examples
///
/// ```
/// use logicgrid_game::{Game, GamePhase};
/// use logicgrid_generator::{Difficulty, GeneratorConfig, PuzzleSeed};
///
/// let seed = PuzzleSeed::from_bytes([42; 32]);
/// let game = Game::start_with_seed(
///     Difficulty::Easy,
///     seed,
///     GeneratorConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(game.phase(), GamePhase::New);
/// assert!(game.board().given_count() >= 40);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    solution: Board,
    phase: GamePhase,
}

impl Game {
    /// Creates a session from a generated puzzle.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self::from_parts(puzzle.puzzle, puzzle.solution)
    }

    /// Creates a session from an explicit puzzle board and its solution.
    ///
    /// The filled cells of `puzzle` must be frozen as givens and `solution`
    /// must be a completion of them; hosts restoring a saved session are
    /// responsible for passing back what they were originally handed.
    #[must_use]
    pub const fn from_parts(puzzle: Board, solution: Board) -> Self {
        Self {
            board: puzzle,
            solution,
            phase: GamePhase::New,
        }
    }

    /// Generates a fresh puzzle at `difficulty` and starts a session on it.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if generation fails; see
    /// [`PuzzleGenerator::generate`].
    pub fn start(difficulty: Difficulty, config: GeneratorConfig) -> Result<Self, GenerateError> {
        let generator = PuzzleGenerator::with_config(config);
        Ok(Self::new(generator.generate(difficulty)?))
    }

    /// Deterministic variant of [`Game::start`]: the same seed, difficulty,
    /// and configuration always produce the same session.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if generation fails; see
    /// [`PuzzleGenerator::generate_with_seed`].
    pub fn start_with_seed(
        difficulty: Difficulty,
        seed: PuzzleSeed,
        config: GeneratorConfig,
    ) -> Result<Self, GenerateError> {
        let generator = PuzzleGenerator::with_config(config);
        Ok(Self::new(generator.generate_with_seed(difficulty, seed)?))
    }

    /// The player's current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The canonical solution the puzzle was generated with.
    #[must_use]
    pub const fn solution(&self) -> &Board {
        &self.solution
    }

    /// The current session phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns `true` once the session reached [`GamePhase::Solved`].
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.phase.is_solved()
    }

    /// Places `digit` at `position`, replacing any earlier entry there.
    ///
    /// A first accepted move takes the session from [`GamePhase::New`] to
    /// [`GamePhase::InProgress`]; a move that completes the board takes it to
    /// [`GamePhase::Solved`].
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the board untouched if the session
    /// is over, the cell is a given, or the digit would duplicate a peer.
    pub fn apply_move(&mut self, position: Position, digit: Digit) -> Result<(), MoveError> {
        self.check_editable(position)?;
        if !self.board.placement_fits(position, digit) {
            return Err(MoveError::Conflict { position, digit });
        }

        self.board.set(position, Some(digit));
        self.phase = if self.board.is_complete() {
            log::debug!("board complete after move {digit} at {position}");
            GamePhase::Solved
        } else {
            GamePhase::InProgress
        };
        Ok(())
    }

    /// Empties the cell at `position`. Clearing an already empty cell is
    /// accepted and does nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the session is over or the cell is a given.
    pub fn clear_cell(&mut self, position: Position) -> Result<(), MoveError> {
        self.check_editable(position)?;
        if self.board.get(position).is_some() {
            self.board.set(position, None);
            self.phase = GamePhase::InProgress;
        }
        Ok(())
    }

    /// Closes the session as [`GamePhase::Abandoned`]. Idempotent; a solved
    /// session stays solved.
    pub const fn abandon(&mut self) {
        if !self.phase.is_solved() {
            self.phase = GamePhase::Abandoned;
        }
    }

    /// Solves forward from the player's current board, erroneous entries
    /// included, and returns the completed board. The session itself is not
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns [`SolveRequestError::Unsolvable`] if the player's entries have
    /// made the board a dead end, or [`SolveRequestError::Interrupted`] if
    /// the search exhausts `budget`.
    pub fn request_solve(&self, budget: &SearchBudget) -> Result<Board, SolveRequestError> {
        solve(&self.board, budget)?.ok_or(SolveRequestError::Unsolvable)
    }

    /// Suggests a correct digit for the most constrained empty cell, or
    /// `Ok(None)` on a full board.
    ///
    /// # Errors
    ///
    /// See [`HintError`].
    pub fn request_hint(&self, budget: &SearchBudget) -> Result<Option<Hint>, HintError> {
        request_hint(&self.board, &self.solution, budget)
    }

    fn check_editable(&self, position: Position) -> Result<(), MoveError> {
        if self.phase.is_solved() || self.phase.is_abandoned() {
            return Err(MoveError::GameOver);
        }
        if self.board.is_given(position) {
            return Err(MoveError::GivenCell { position });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    const PUZZLE_17: &str =
        "000000010400000000020000000000050407008000300001090000300400200050100000000806000";
    const SOLUTION_17: &str =
        "693784512487512936125963874932651487568247391741398625319475268856129743274836159";

    fn game_17() -> Game {
        let mut puzzle = Board::from_str(PUZZLE_17).unwrap();
        puzzle.freeze_givens();
        let solution = Board::from_str(SOLUTION_17).unwrap();
        Game::from_parts(puzzle, solution)
    }

    #[test]
    fn test_first_move_starts_the_game() {
        let mut game = game_17();
        assert_eq!(game.phase(), GamePhase::New);

        // (0, 0) is empty; 6 is its solution digit.
        game.apply_move(Position::new(0, 0), Digit::D6).unwrap();
        assert_eq!(game.phase(), GamePhase::InProgress);
        assert_eq!(game.board().get(Position::new(0, 0)), Some(Digit::D6));
    }

    #[test]
    fn test_move_on_given_is_rejected() {
        let mut game = game_17();
        // (7, 0) holds the given 1.
        let position = Position::new(7, 0);
        let err = game.apply_move(position, Digit::D9).unwrap_err();
        assert_eq!(err, MoveError::GivenCell { position });
        assert_eq!(game.board().get(position), Some(Digit::D1));
        assert_eq!(game.phase(), GamePhase::New);
    }

    #[test]
    fn test_conflicting_move_is_rejected_and_board_unchanged() {
        let mut game = game_17();
        let before = game.board().clone();
        // Row 0 already holds a 1 at (7, 0).
        let err = game.apply_move(Position::new(0, 0), Digit::D1).unwrap_err();
        assert_eq!(
            err,
            MoveError::Conflict {
                position: Position::new(0, 0),
                digit: Digit::D1,
            }
        );
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_replacing_own_entry_is_allowed() {
        let mut game = game_17();
        let position = Position::new(0, 0);
        game.apply_move(position, Digit::D6).unwrap();
        game.apply_move(position, Digit::D5).unwrap();
        assert_eq!(game.board().get(position), Some(Digit::D5));
    }

    #[test]
    fn test_clear_cell() {
        let mut game = game_17();
        let position = Position::new(0, 0);
        game.apply_move(position, Digit::D6).unwrap();
        game.clear_cell(position).unwrap();
        assert_eq!(game.board().get(position), None);

        // Clearing an empty cell is a no-op.
        game.clear_cell(position).unwrap();

        // Clearing a given is not.
        let given = Position::new(7, 0);
        assert_eq!(
            game.clear_cell(given).unwrap_err(),
            MoveError::GivenCell { position: given }
        );
    }

    #[test]
    fn test_completing_the_board_solves_the_game() {
        let mut game = game_17();
        let solution = game.solution().clone();
        for pos in game.board().empty_positions().collect::<Vec<_>>() {
            let digit = solution.get(pos).unwrap();
            game.apply_move(pos, digit).unwrap();
        }
        assert_eq!(game.phase(), GamePhase::Solved);
        assert!(game.is_solved());

        // No further edits are accepted.
        assert_eq!(
            game.clear_cell(Position::new(0, 0)).unwrap_err(),
            MoveError::GameOver
        );
    }

    #[test]
    fn test_abandon() {
        let mut game = game_17();
        game.abandon();
        assert_eq!(game.phase(), GamePhase::Abandoned);
        assert_eq!(
            game.apply_move(Position::new(0, 0), Digit::D6).unwrap_err(),
            MoveError::GameOver
        );

        // Abandoning a solved game does not un-solve it.
        let mut solved = game_17();
        let solution = solved.solution().clone();
        for pos in solved.board().empty_positions().collect::<Vec<_>>() {
            solved.apply_move(pos, solution.get(pos).unwrap()).unwrap();
        }
        solved.abandon();
        assert_eq!(solved.phase(), GamePhase::Solved);
    }

    #[test]
    fn test_request_solve_completes_the_puzzle() {
        let game = game_17();
        let solved = game.request_solve(&SearchBudget::default()).unwrap();
        assert_eq!(solved.to_string(), SOLUTION_17);
    }

    #[test]
    fn test_request_solve_from_dead_end() {
        let mut game = game_17();
        // 5 fits at (0, 0) locally but the solution digit there is 6; from a
        // 17-given puzzle with a unique solution, any wrong entry is a dead
        // end.
        game.apply_move(Position::new(0, 0), Digit::D5).unwrap();
        let err = game.request_solve(&SearchBudget::default()).unwrap_err();
        assert_eq!(err, SolveRequestError::Unsolvable);
    }
}
