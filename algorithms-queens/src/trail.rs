//! Undo log for domain removals made during the search.
//!
//! Every row removed from a queen's domain is recorded as a [`Removal`].
//! A checkpoint is simply the trail length at some moment; undoing to it
//! puts back every row removed since, newest first.

use crate::board::Chessboard;

/// A row removed from one column's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Removal {
    pub(crate) column: usize,
    pub(crate) row: usize,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Trail {
    removals: Vec<Removal>,
}

impl Trail {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            removals: Vec::with_capacity(capacity),
        }
    }

    /// Current checkpoint.
    pub(crate) const fn len(&self) -> usize {
        self.removals.len()
    }

    pub(crate) fn clear(&mut self) {
        self.removals.clear();
    }

    /// Remove `row` from the unplaced queen in `column`, recording the change
    /// when something was actually removed.
    pub(crate) fn exclude(&mut self, board: &mut Chessboard, column: usize, row: usize) {
        if board.exclude(column, row) {
            self.removals.push(Removal { column, row });
        }
    }

    /// Restore every removal made after `checkpoint`.
    pub(crate) fn undo_to(&mut self, board: &mut Chessboard, checkpoint: usize) {
        while self.removals.len() > checkpoint {
            let Some(Removal { column, row }) = self.removals.pop() else {
                break;
            };
            board.restore(column, row);
        }
    }
}
