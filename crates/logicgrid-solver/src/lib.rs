//! Backtracking search for the logicgrid puzzle engine.
//!
//! This crate provides the two search primitives the rest of the engine is
//! built on:
//!
//! - [`solve`]: finds the first completion of a board, or reports that none
//!   exists. "No solution" is an ordinary outcome (`Ok(None)`), not an error.
//! - [`count_solutions`]: the same search continued past the first solution
//!   with an early-exit cap. A cap of 2 is how the generator proves
//!   uniqueness without exhaustive enumeration.
//!
//! Both are deterministic: the search always branches on the empty cell with
//! the fewest candidates (row-major tie-break) and tries candidate digits in
//! ascending order.
//!
//! Backtracking is worst-case exponential, so every invocation carries a
//! [`SearchBudget`]: a step cap plus an optional cooperative [`CancelToken`]
//! checked every fixed number of steps. An exhausted budget surfaces as
//! [`SearchInterrupted`], which is always distinguishable from "no solution".
//!
//! # Examples
//!
//! ```
//! use logicgrid_core::Board;
//! use logicgrid_solver::{SearchBudget, count_solutions, solve};
//!
//! let board = Board::new();
//! let budget = SearchBudget::default();
//!
//! let solved = solve(&board, &budget).unwrap().unwrap();
//! assert!(solved.is_complete());
//!
//! // The empty board has far more than one solution.
//! assert_eq!(count_solutions(&board, 2, &budget).unwrap(), 2);
//! ```

pub mod budget;
pub mod search;

pub use self::{
    budget::{CancelToken, SearchBudget, SearchInterrupted},
    search::{count_solutions, solve},
};
