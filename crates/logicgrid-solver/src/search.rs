//! Backtracking search with the minimum-remaining-candidates heuristic.

use logicgrid_core::{Board, Digit, DigitSet, Position};

use crate::budget::{SearchBudget, SearchInterrupted};

/// Finds the first completion of `board`, or `None` if it is unsatisfiable.
///
/// The search branches on the empty cell with the fewest candidates, breaking
/// ties by row-major position, and tries candidates in ascending order — so
/// the result is deterministic for a given board. A board that is already
/// complete and valid is returned unchanged. The given mask of the input is
/// preserved on the returned board.
///
/// # Errors
///
/// Returns [`SearchInterrupted`] if the budget's step cap is exhausted or its
/// cancellation token fires before the search reaches a definitive answer.
///
/// # Examples
///
/// ```
/// use logicgrid_core::Board;
/// use logicgrid_solver::{SearchBudget, solve};
///
/// let board = Board::new();
/// let solved = solve(&board, &SearchBudget::default()).unwrap().unwrap();
/// assert!(solved.is_complete());
/// ```
pub fn solve(board: &Board, budget: &SearchBudget) -> Result<Option<Board>, SearchInterrupted> {
    let Some(mut search) = Search::new(board, budget) else {
        return Ok(None);
    };
    if search.solve_rec()? {
        Ok(Some(search.board))
    } else {
        Ok(None)
    }
}

/// Counts completions of `board`, stopping early once `cap` are found.
///
/// This is the same search as [`solve`] continued past the first solution.
/// A cap of 2 distinguishes "unique" from "not unique" without exhaustive
/// enumeration, which is how the generator proves uniqueness cheaply.
///
/// # Errors
///
/// Returns [`SearchInterrupted`] if the budget's step cap is exhausted or its
/// cancellation token fires before `cap` solutions are found or the search
/// space is exhausted.
pub fn count_solutions(
    board: &Board,
    cap: usize,
    budget: &SearchBudget,
) -> Result<usize, SearchInterrupted> {
    if cap == 0 {
        return Ok(0);
    }
    let Some(mut search) = Search::new(board, budget) else {
        return Ok(0);
    };
    let mut found = 0;
    search.count_rec(cap, &mut found)?;
    Ok(found)
}

/// Search state: the board plus per-house occupancy masks, so constraint
/// membership tests are single bit operations.
struct Search<'a> {
    board: Board,
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    boxes: [DigitSet; 9],
    budget: &'a SearchBudget,
    steps: u64,
}

impl<'a> Search<'a> {
    /// Builds the search state, or `None` if the board already contains a
    /// duplicate digit in some house (trivially unsatisfiable).
    fn new(board: &Board, budget: &'a SearchBudget) -> Option<Self> {
        let mut search = Self {
            board: board.clone(),
            rows: [DigitSet::EMPTY; 9],
            cols: [DigitSet::EMPTY; 9],
            boxes: [DigitSet::EMPTY; 9],
            budget,
            steps: 0,
        };
        for pos in Position::ALL {
            if let Some(digit) = board.get(pos) {
                let y = usize::from(pos.y());
                let x = usize::from(pos.x());
                let b = usize::from(pos.box_index());
                if search.rows[y].contains(digit)
                    || search.cols[x].contains(digit)
                    || search.boxes[b].contains(digit)
                {
                    return None;
                }
                search.rows[y].insert(digit);
                search.cols[x].insert(digit);
                search.boxes[b].insert(digit);
            }
        }
        Some(search)
    }

    fn candidates(&self, pos: Position) -> DigitSet {
        let used = self.rows[usize::from(pos.y())]
            | self.cols[usize::from(pos.x())]
            | self.boxes[usize::from(pos.box_index())];
        DigitSet::FULL - used
    }

    fn place(&mut self, pos: Position, digit: Digit) {
        self.board.set(pos, Some(digit));
        self.rows[usize::from(pos.y())].insert(digit);
        self.cols[usize::from(pos.x())].insert(digit);
        self.boxes[usize::from(pos.box_index())].insert(digit);
    }

    fn unplace(&mut self, pos: Position, digit: Digit) {
        self.board.set(pos, None);
        self.rows[usize::from(pos.y())].remove(digit);
        self.cols[usize::from(pos.x())].remove(digit);
        self.boxes[usize::from(pos.box_index())].remove(digit);
    }

    /// Picks the empty cell with the fewest candidates, row-major tie-break.
    ///
    /// Returns `None` when the board is full.
    fn pick_cell(&self) -> Option<(Position, DigitSet)> {
        let mut best: Option<(Position, DigitSet)> = None;
        for pos in Position::ALL {
            if self.board.get(pos).is_some() {
                continue;
            }
            let candidates = self.candidates(pos);
            if candidates.is_empty() {
                // Dead end; no point scanning further.
                return Some((pos, candidates));
            }
            match &best {
                Some((_, existing)) if existing.len() <= candidates.len() => {}
                _ => best = Some((pos, candidates)),
            }
        }
        best
    }

    fn tick(&mut self) -> Result<(), SearchInterrupted> {
        self.steps += 1;
        self.budget.check(self.steps)
    }

    fn solve_rec(&mut self) -> Result<bool, SearchInterrupted> {
        self.tick()?;
        let Some((pos, candidates)) = self.pick_cell() else {
            return Ok(true);
        };
        for digit in candidates {
            self.place(pos, digit);
            if self.solve_rec()? {
                return Ok(true);
            }
            self.unplace(pos, digit);
        }
        Ok(false)
    }

    fn count_rec(&mut self, cap: usize, found: &mut usize) -> Result<(), SearchInterrupted> {
        self.tick()?;
        let Some((pos, candidates)) = self.pick_cell() else {
            *found += 1;
            return Ok(());
        };
        for digit in candidates {
            self.place(pos, digit);
            self.count_rec(cap, found)?;
            self.unplace(pos, digit);
            if *found >= cap {
                return Ok(());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::budget::CancelToken;

    use super::*;

    const PUZZLE_17: &str =
        "000000010400000000020000000000050407008000300001090000300400200050100000000806000";
    const SOLUTION_17: &str =
        "693784512487512936125963874932651487568247391741398625319475268856129743274836159";

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_solves_known_17_given_puzzle() {
        let solved = solve(&board(PUZZLE_17), &SearchBudget::default())
            .unwrap()
            .unwrap();
        assert_eq!(solved.to_string(), SOLUTION_17);
    }

    #[test]
    fn test_known_puzzle_has_unique_solution() {
        let n = count_solutions(&board(PUZZLE_17), 2, &SearchBudget::default()).unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn test_removing_a_given_breaks_uniqueness() {
        // The 17-given puzzle is minimal: dropping any given admits extra
        // solutions.
        let mut relaxed = board(PUZZLE_17);
        relaxed.set(Position::new(7, 0), None);
        let n = count_solutions(&relaxed, 2, &SearchBudget::default()).unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn test_complete_board_solves_to_itself() {
        let complete = board(SOLUTION_17);
        let solved = solve(&complete, &SearchBudget::default()).unwrap().unwrap();
        assert_eq!(solved, complete);
        assert_eq!(
            count_solutions(&complete, 2, &SearchBudget::default()).unwrap(),
            1
        );
    }

    #[test]
    fn test_conflicting_board_is_unsolvable() {
        let mut conflicting = Board::new();
        conflicting.set(Position::new(0, 0), Some(Digit::D5));
        conflicting.set(Position::new(6, 0), Some(Digit::D5));

        assert_eq!(solve(&conflicting, &SearchBudget::default()).unwrap(), None);
        assert_eq!(
            count_solutions(&conflicting, 2, &SearchBudget::default()).unwrap(),
            0
        );
    }

    #[test]
    fn test_dead_end_board_is_unsolvable() {
        // Valid placements, but (0, 0) has no remaining candidate.
        let mut board = Board::new();
        for (i, digit) in [
            Digit::D1,
            Digit::D2,
            Digit::D3,
            Digit::D4,
            Digit::D5,
            Digit::D6,
            Digit::D7,
            Digit::D8,
        ]
        .into_iter()
        .enumerate()
        {
            #[expect(clippy::cast_possible_truncation)]
            board.set(Position::new(i as u8 + 1, 0), Some(digit));
        }
        board.set(Position::new(0, 8), Some(Digit::D9));

        assert!(board.is_valid());
        assert_eq!(solve(&board, &SearchBudget::default()).unwrap(), None);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let empty = Board::new();
        let a = solve(&empty, &SearchBudget::default()).unwrap().unwrap();
        let b = solve(&empty, &SearchBudget::default()).unwrap().unwrap();
        assert_eq!(a, b);
        assert!(a.is_complete());
    }

    #[test]
    fn test_empty_board_has_many_solutions() {
        let n = count_solutions(&Board::new(), 2, &SearchBudget::default()).unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn test_cap_zero_counts_nothing() {
        let n = count_solutions(&board(PUZZLE_17), 0, &SearchBudget::default()).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn test_budget_exhaustion_is_reported() {
        // Exhaustively counting completions of the empty board is far beyond
        // any reasonable step cap.
        let budget = SearchBudget::new().with_max_steps(10_000);
        let result = count_solutions(&Board::new(), usize::MAX, &budget);
        assert!(matches!(
            result,
            Err(SearchInterrupted::BudgetExceeded { .. })
        ));
    }

    #[test]
    fn test_cancellation_is_reported() {
        let token = CancelToken::new();
        token.cancel();
        let budget = SearchBudget::new().with_cancel_token(token);
        let result = count_solutions(&Board::new(), usize::MAX, &budget);
        assert_eq!(result, Err(SearchInterrupted::Cancelled));
    }

    #[test]
    fn test_solve_preserves_given_mask() {
        let mut puzzle = board(PUZZLE_17);
        puzzle.freeze_givens();
        let solved = solve(&puzzle, &SearchBudget::default()).unwrap().unwrap();
        assert_eq!(solved.givens(), puzzle.givens());
    }
}
