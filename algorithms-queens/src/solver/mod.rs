//! [`NQueensSolver`]: forward checking with minimum-remaining-values
//! ordering and chronological backtracking.
//!
//! Each iteration picks the unplaced queen with the smallest domain and
//! tries its rows in ascending order. Placing a queen removes the attacked
//! cells from every unplaced queen's domain; a row is accepted when no
//! domain is emptied. All removals go through a [`Trail`], so a dead end is
//! undone by rewinding to the checkpoint of the most recent placement. The
//! rejected row stays excluded from that queen's domain, so the next attempt
//! moves on.

use algorithms_core::{Solver, ValidationError};

use crate::board::{Chessboard, NQueensRequest};
use crate::result::{NQueensResult, PlacedQueen};
use crate::trail::Trail;

/// A placement on the search stack.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Placement {
    column: usize,
    row: usize,
    /// Domain of the column just before the placement.
    domain: Vec<usize>,
    /// Trail length after the placed row left its own domain.
    checkpoint: usize,
}

/// Finds one placement of `n` non-attacking queens avoiding blocked cells.
///
/// # Examples
/// ```rust
/// use algorithms_core::run;
/// use algorithms_queens::{NQueensRequest, NQueensSolver};
///
/// let request = NQueensRequest { n: 4, blocked: vec![[0, 0], [1, 1], [3, 2]] };
/// let result = run::<NQueensSolver>(&request).unwrap();
/// assert!(result.solvable);
/// assert_eq!(result.rows_by_column(), Some(vec![1, 3, 0, 2]));
/// ```
#[derive(Debug, Clone)]
pub struct NQueensSolver {
    initial: Chessboard,
    board: Chessboard,
    trail: Trail,
    placements: Vec<Placement>,
    iterations: usize,
    solvable: bool,
}

impl NQueensSolver {
    /// Build a solver for an already validated board.
    #[must_use]
    pub fn new(board: Chessboard) -> Self {
        let size = board.size();
        Self {
            initial: board.clone(),
            board,
            trail: Trail::with_capacity(size.saturating_mul(size)),
            placements: Vec::with_capacity(size),
            iterations: 0,
            solvable: true,
        }
    }

    /// The board as the search left it.
    #[must_use]
    pub const fn board(&self) -> &Chessboard {
        &self.board
    }

    fn reset(&mut self) {
        self.board.clone_from(&self.initial);
        self.trail.clear();
        self.placements.clear();
        self.iterations = 0;
        self.solvable = true;
    }

    /// Place the first row of `column` that leaves every unplaced domain
    /// non-empty.
    fn place_first_consistent(&mut self, column: usize) -> Option<Placement> {
        let domain: Vec<usize> = self
            .board
            .queen(column)?
            .domain()
            .iter()
            .copied()
            .collect();
        let (row, checkpoint) = domain
            .iter()
            .find_map(|&row| self.try_row(column, row).map(|checkpoint| (row, checkpoint)))?;
        Some(Placement {
            column,
            row,
            domain,
            checkpoint,
        })
    }

    /// Tentatively place `(column, row)` and propagate. On a wipe-out the
    /// board is restored and `None` returned; otherwise the placement stays
    /// and its checkpoint is returned.
    fn try_row(&mut self, column: usize, row: usize) -> Option<usize> {
        let mark = self.trail.len();
        self.trail.exclude(&mut self.board, column, row);
        let checkpoint = self.trail.len();
        self.board.assign(column, row);

        for (target_column, target_row) in self.board.attacked_cells(column, row) {
            self.trail
                .exclude(&mut self.board, target_column, target_row);
        }

        if self.board.has_wiped_out_domain() {
            self.trail.undo_to(&mut self.board, mark);
            self.board.unassign(column);
            return None;
        }
        Some(checkpoint)
    }

    /// Undo the most recent placement. Returns `false` when there is none.
    fn backtrack(&mut self) -> bool {
        let Some(last) = self.placements.pop() else {
            return false;
        };
        self.trail.undo_to(&mut self.board, last.checkpoint);
        self.board.unassign(last.column);
        log::trace!(
            "backtracking from queen {} at row {} (depth {})",
            last.column,
            last.row,
            self.placements.len()
        );
        true
    }
}

impl Solver for NQueensSolver {
    type Request = NQueensRequest;
    type Solution = NQueensResult;

    fn initialize(request: &NQueensRequest) -> Result<Self, ValidationError> {
        let board = Chessboard::new(request.n, &request.blocked)?;
        log::debug!(
            "n-queens initialised on a {n}x{n} board with {} blocked cells",
            request.blocked.len(),
            n = request.n
        );
        Ok(Self::new(board))
    }

    fn solve(&mut self) {
        self.reset();
        while self.placements.len() < self.board.size() {
            self.iterations += 1;
            let Some(column) = self.board.most_constrained() else {
                break;
            };
            if let Some(placement) = self.place_first_consistent(column) {
                self.placements.push(placement);
            } else if !self.backtrack() {
                self.solvable = false;
                break;
            }
        }
        log::debug!(
            "n-queens search finished after {} iterations (solvable: {})",
            self.iterations,
            self.solvable
        );
    }

    fn format_result(&self) -> NQueensResult {
        if !self.solvable {
            return NQueensResult::unsolvable(self.iterations);
        }
        let solution = self
            .placements
            .iter()
            .map(|placement| PlacedQueen {
                col: placement.column,
                row: placement.row,
                domain: placement.domain.clone(),
            })
            .collect();
        NQueensResult::solved(self.iterations, solution)
    }
}
