//! Randomized full-grid generation.

use logicgrid_core::{Board, Digit, DigitSet, Position};
use logicgrid_solver::{SearchBudget, SearchInterrupted};
use rand::{Rng, seq::SliceRandom as _};

/// Fills an empty board with a complete, valid grid.
///
/// This is the solver's backtracking search with one change: at each branch
/// the candidate digits are shuffled with the supplied RNG instead of being
/// tried in ascending order, so the result is a uniformly varied complete
/// grid rather than always the lexicographically first one. The same RNG
/// state always yields the same grid.
///
/// # Errors
///
/// Returns [`SearchInterrupted`] if the budget runs out. An empty board is
/// always satisfiable, so with any realistic budget this does not happen;
/// the budget exists because every search invocation in the engine is
/// bounded.
///
/// # Examples
///
/// ```
/// use logicgrid_generator::{PuzzleSeed, generate_full_grid};
/// use logicgrid_solver::SearchBudget;
///
/// let mut rng = PuzzleSeed::from_bytes([1; 32]).rng();
/// let grid = generate_full_grid(&mut rng, &SearchBudget::default()).unwrap();
/// assert!(grid.is_complete());
/// ```
pub fn generate_full_grid<R: Rng + ?Sized>(
    rng: &mut R,
    budget: &SearchBudget,
) -> Result<Board, SearchInterrupted> {
    let mut board = Board::new();
    let mut steps = 0;
    let filled = fill_rec(&mut board, rng, budget, &mut steps)?;
    debug_assert!(filled, "an empty board is always satisfiable");
    Ok(board)
}

fn fill_rec<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    budget: &SearchBudget,
    steps: &mut u64,
) -> Result<bool, SearchInterrupted> {
    *steps += 1;
    budget.check(*steps)?;

    let Some((pos, candidates)) = pick_cell(board) else {
        return Ok(true);
    };

    let mut digits: Vec<Digit> = candidates.iter().collect();
    digits.shuffle(rng);
    for digit in digits {
        board.set(pos, Some(digit));
        if fill_rec(board, rng, budget, steps)? {
            return Ok(true);
        }
        board.set(pos, None);
    }
    Ok(false)
}

/// Most-constrained empty cell, row-major tie-break; `None` when full.
fn pick_cell(board: &Board) -> Option<(Position, DigitSet)> {
    let mut best: Option<(Position, DigitSet)> = None;
    for pos in board.empty_positions() {
        let candidates = board.candidates_at(pos);
        if candidates.is_empty() {
            return Some((pos, candidates));
        }
        match &best {
            Some((_, existing)) if existing.len() <= candidates.len() => {}
            _ => best = Some((pos, candidates)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use crate::seed::PuzzleSeed;

    use super::*;

    #[test]
    fn test_full_grid_is_complete_and_valid() {
        let mut rng = PuzzleSeed::from_bytes([3; 32]).rng();
        let grid = generate_full_grid(&mut rng, &SearchBudget::default()).unwrap();
        assert!(grid.is_complete());
        assert!(grid.is_valid());
    }

    #[test]
    fn test_same_seed_same_grid() {
        let budget = SearchBudget::default();
        let a = generate_full_grid(&mut PuzzleSeed::from_bytes([9; 32]).rng(), &budget).unwrap();
        let b = generate_full_grid(&mut PuzzleSeed::from_bytes([9; 32]).rng(), &budget).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_respects_step_budget() {
        let mut rng = PuzzleSeed::from_bytes([3; 32]).rng();
        let budget = SearchBudget::new().with_max_steps(5);
        let result = generate_full_grid(&mut rng, &budget);
        assert!(matches!(
            result,
            Err(SearchInterrupted::BudgetExceeded { .. })
        ));
    }

    #[test]
    fn test_different_seeds_vary() {
        let budget = SearchBudget::default();
        let a = generate_full_grid(&mut PuzzleSeed::from_bytes([1; 32]).rng(), &budget).unwrap();
        let b = generate_full_grid(&mut PuzzleSeed::from_bytes([2; 32]).rng(), &budget).unwrap();
        assert_ne!(a, b);
    }
}
