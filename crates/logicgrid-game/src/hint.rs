//! Hint oracle: a correct digit for the most constrained empty cell.

use logicgrid_core::{Board, Digit, Position};
use logicgrid_solver::{SearchBudget, SearchInterrupted, solve};

/// A suggested placement. The digit is always the one the canonical solution
/// holds at the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// The empty cell the hint targets.
    pub position: Position,
    /// The correct digit for that cell.
    pub digit: Digit,
}

/// Errors from [`Game::request_hint`](crate::Game::request_hint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum HintError {
    /// The puzzle's givens admit no solution. Generated puzzles always do;
    /// this only fires on hand-built sessions with inconsistent givens.
    #[display("the puzzle givens admit no solution")]
    InternalInconsistency,
    /// The search ran out of budget or was cancelled.
    #[display("hint interrupted: {_0}")]
    Interrupted(#[from] SearchInterrupted),
}

/// Picks the empty cell with the fewest candidates (row-major tie-break) and
/// returns the canonical solution's digit for it; `Ok(None)` on a full board.
///
/// The hint is taken from `solution` only while the player's entries agree
/// with it. Once the board has diverged, the stored solution no longer
/// describes where the player actually is, so a canonical solution is
/// re-derived from the givens alone and the hint taken from that. Either
/// way the hinted digit is correct relative to the puzzle, not to the
/// player's mistakes.
pub(crate) fn request_hint(
    board: &Board,
    solution: &Board,
    budget: &SearchBudget,
) -> Result<Option<Hint>, HintError> {
    let Some(position) = pick_hint_cell(board) else {
        return Ok(None);
    };

    let digit = if diverged(board, solution) {
        log::debug!("player board diverged from the stored solution, re-solving from givens");
        let canonical = solve(&board.givens_only(), budget)?
            .ok_or(HintError::InternalInconsistency)?;
        canonical.get(position)
    } else {
        solution.get(position)
    };
    // A solved board is complete, so every empty cell has a digit there.
    let digit = digit.ok_or(HintError::InternalInconsistency)?;

    Ok(Some(Hint { position, digit }))
}

fn pick_hint_cell(board: &Board) -> Option<Position> {
    let mut best: Option<(Position, usize)> = None;
    for pos in board.empty_positions() {
        let count = board.candidates_at(pos).len();
        match best {
            Some((_, existing)) if existing <= count => {}
            _ => best = Some((pos, count)),
        }
    }
    best.map(|(pos, _)| pos)
}

fn diverged(board: &Board, solution: &Board) -> bool {
    Position::ALL
        .iter()
        .any(|&pos| board.get(pos).is_some_and(|digit| solution.get(pos) != Some(digit)))
}
