//! Bounded undo/redo history of board snapshots.

use std::{collections::VecDeque, num::NonZero};

use logicgrid_core::Board;

/// Default number of snapshots kept before the oldest is dropped.
pub const DEFAULT_CAPACITY: NonZero<usize> = NonZero::new(256).unwrap();

/// A bounded sequence of immutable [`Board`] snapshots with a cursor.
///
/// Hosts [`record`](Self::record) the board after every accepted move or
/// clear; [`undo`](Self::undo) and [`redo`](Self::redo) walk the cursor and
/// return the snapshot to restore. Recording after an undo discards the redo
/// tail, and when the capacity is reached the oldest snapshot is dropped.
///
/// # Examples
///
/// ```
/// use logicgrid_core::Board;
/// use logicgrid_game::History;
///
/// let mut history = History::new();
/// history.record(Board::new());
/// assert!(!history.can_undo());
/// ```
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Board>,
    capacity: NonZero<usize>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Creates an empty history with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty history holding at most `capacity` snapshots.
    #[must_use]
    pub fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            snapshots: VecDeque::new(),
            capacity,
            cursor: 0,
        }
    }

    /// The maximum number of snapshots kept.
    #[must_use]
    pub const fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    /// The number of snapshots currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot the cursor points at, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Board> {
        self.snapshots.get(self.cursor)
    }

    /// Appends a snapshot at the cursor, discarding any redo tail. Dropping
    /// the oldest snapshot to stay within capacity shifts the cursor along
    /// with it.
    pub fn record(&mut self, board: Board) {
        if self.snapshots.is_empty() {
            self.snapshots.push_back(board);
            self.cursor = 0;
            return;
        }

        let truncate_len = self.cursor + 1;
        if truncate_len < self.snapshots.len() {
            self.snapshots.truncate(truncate_len);
        }

        if self.snapshots.len() == self.capacity.get() {
            self.snapshots.pop_front();
            if self.cursor > 0 {
                self.cursor -= 1;
            }
        }

        self.snapshots.push_back(board);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Returns `true` if there is an earlier snapshot to step back to.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Steps the cursor back one snapshot and returns it, or `None` at the
    /// oldest snapshot.
    pub fn undo(&mut self) -> Option<&Board> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    /// Returns `true` if an undone snapshot can be stepped forward to.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor + 1 < self.snapshots.len()
    }

    /// Steps the cursor forward one snapshot and returns it, or `None` at the
    /// newest snapshot.
    pub fn redo(&mut self) -> Option<&Board> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }
}
