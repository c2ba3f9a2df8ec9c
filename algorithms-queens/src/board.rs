//! Queens, their row domains, and the board that holds one queen per column.

use std::collections::BTreeSet;

use algorithms_core::ValidationError;
use serde::{Deserialize, Serialize};

/// Parameters for an N-Queens request.
///
/// Blocked cells are `[row, column]` pairs. Coordinates are signed so that
/// negative values can be reported as out of bounds rather than rejected by
/// the decoder.
///
/// # Examples
/// ```rust
/// use algorithms_queens::NQueensRequest;
///
/// let request: NQueensRequest =
///     serde_json::from_str(r#"{"n":4,"blocked":[[0,0],[3,2]]}"#).unwrap();
/// assert_eq!(request.blocked, vec![[0, 0], [3, 2]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NQueensRequest {
    /// Board size and number of queens.
    pub n: usize,
    /// Cells no queen may occupy.
    #[serde(default)]
    pub blocked: Vec<[i64; 2]>,
}

/// A queen bound to one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queen {
    column: usize,
    row: Option<usize>,
    domain: BTreeSet<usize>,
}

impl Queen {
    /// Column the queen lives in.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Assigned row, if placed.
    #[must_use]
    pub const fn row(&self) -> Option<usize> {
        self.row
    }

    /// Rows still open to this queen.
    #[must_use]
    pub const fn domain(&self) -> &BTreeSet<usize> {
        &self.domain
    }

    /// Whether the queen has been placed.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.row.is_some()
    }
}

/// An `n × n` board with one queen per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chessboard {
    size: usize,
    queens: Vec<Queen>,
}

impl Chessboard {
    /// Build a board whose domains exclude every blocked cell.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlockedCellOutOfBounds`] for the first
    /// blocked cell with a row or column outside `[0, size)`.
    ///
    /// # Examples
    /// ```
    /// use algorithms_queens::Chessboard;
    ///
    /// let board = Chessboard::new(3, &[[1, 0]]).unwrap();
    /// let first = board.queen(0).unwrap();
    /// assert_eq!(first.domain().iter().copied().collect::<Vec<_>>(), vec![0, 2]);
    /// ```
    pub fn new(size: usize, blocked: &[[i64; 2]]) -> Result<Self, ValidationError> {
        let mut queens: Vec<_> = (0..size)
            .map(|column| Queen {
                column,
                row: None,
                domain: (0..size).collect(),
            })
            .collect();

        for &[row, column] in blocked {
            let cell = ValidationError::checked_index(row, size)
                .zip(ValidationError::checked_index(column, size));
            let target = cell.and_then(|(row_index, column_index)| {
                queens
                    .get_mut(column_index)
                    .map(|queen| (queen, row_index))
            });
            let Some((queen, row_index)) = target else {
                return Err(ValidationError::BlockedCellOutOfBounds { row, column, size });
            };
            queen.domain.remove(&row_index);
        }

        Ok(Self { size, queens })
    }

    /// Number of rows and columns.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Queens ordered by column.
    #[must_use]
    pub fn queens(&self) -> &[Queen] {
        &self.queens
    }

    /// The queen in `column`.
    #[must_use]
    pub fn queen(&self, column: usize) -> Option<&Queen> {
        self.queens.get(column)
    }

    /// Rows by column, or `None` while any queen is unplaced.
    #[must_use]
    pub fn rows(&self) -> Option<Vec<usize>> {
        self.queens.iter().map(Queen::row).collect()
    }

    /// The unplaced queen with the fewest open rows; ties go to the lowest
    /// column.
    pub(crate) fn most_constrained(&self) -> Option<usize> {
        self.queens
            .iter()
            .filter(|queen| !queen.is_assigned())
            .min_by_key(|queen| queen.domain.len())
            .map(Queen::column)
    }

    /// Whether some unplaced queen has no rows left.
    pub(crate) fn has_wiped_out_domain(&self) -> bool {
        self.queens
            .iter()
            .any(|queen| !queen.is_assigned() && queen.domain.is_empty())
    }

    pub(crate) fn assign(&mut self, column: usize, row: usize) {
        if let Some(queen) = self.queens.get_mut(column) {
            queen.row = Some(row);
        }
    }

    pub(crate) fn unassign(&mut self, column: usize) {
        if let Some(queen) = self.queens.get_mut(column) {
            queen.row = None;
        }
    }

    /// Drop `row` from an unplaced queen's domain. Returns whether anything
    /// was removed.
    pub(crate) fn exclude(&mut self, column: usize, row: usize) -> bool {
        self.queens
            .get_mut(column)
            .filter(|queen| !queen.is_assigned())
            .is_some_and(|queen| queen.domain.remove(&row))
    }

    pub(crate) fn restore(&mut self, column: usize, row: usize) {
        if let Some(queen) = self.queens.get_mut(column) {
            queen.domain.insert(row);
        }
    }

    /// Cells sharing a row, diagonal or anti-diagonal with `(column, row)`,
    /// as `(column, row)` pairs. The origin itself appears in the list.
    pub(crate) fn attacked_cells(
        &self,
        column: usize,
        row: usize,
    ) -> impl Iterator<Item = (usize, usize)> + use<> {
        let size = self.size;
        (0..size)
            .flat_map(move |offset| {
                [
                    Some((offset, row)),
                    column.checked_add(offset).zip(row.checked_add(offset)),
                    column.checked_sub(offset).zip(row.checked_sub(offset)),
                    column.checked_sub(offset).zip(row.checked_add(offset)),
                    column.checked_add(offset).zip(row.checked_sub(offset)),
                ]
            })
            .flatten()
            .filter(move |&(target_column, target_row)| {
                target_column < size && target_row < size
            })
    }
}
