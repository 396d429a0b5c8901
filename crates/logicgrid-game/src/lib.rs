//! Game session layer: a playable puzzle with a lifecycle state machine.
//!
//! [`Game`] owns the player's board and the canonical solution, enforces the
//! move rules (givens are immutable, conflicting digits are rejected), and
//! tracks the session phase `New → InProgress → {Solved, Abandoned}`. The
//! [`hint`](Game::request_hint) oracle points at the most constrained empty
//! cell, and [`History`] keeps bounded undo/redo snapshots for hosts.

pub mod game;
pub mod hint;
pub mod history;

pub use self::{
    game::{Game, GamePhase, MoveError, SolveRequestError},
    hint::{Hint, HintError},
    history::History,
};
