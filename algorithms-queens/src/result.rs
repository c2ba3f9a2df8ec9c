//! Result values reported for an N-Queens search.

use serde::{Deserialize, Serialize};

/// One placement, reported in the order the search made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedQueen {
    /// Column of the queen.
    pub col: usize,
    /// Row it was placed on.
    pub row: usize,
    /// Rows that were open to the queen when it was placed, ascending.
    pub domain: Vec<usize>,
}

/// Outcome of an N-Queens search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NQueensResult {
    /// `"Solution found"` or `"No solution"`.
    pub message: String,
    /// Whether every queen could be placed.
    pub solvable: bool,
    /// Assignment and backtrack steps taken.
    pub iterations: usize,
    /// Placements in assignment order; empty when unsolvable.
    pub solution: Vec<PlacedQueen>,
    /// One line per placement.
    pub formatted_output: String,
}

impl NQueensResult {
    /// Result for a completed search.
    #[must_use]
    pub fn solved(iterations: usize, solution: Vec<PlacedQueen>) -> Self {
        let formatted_output = solution
            .iter()
            .map(|queen| {
                let domain: Vec<_> = queen.domain.iter().map(ToString::to_string).collect();
                format!(
                    "Queen {}: [{}] -> ({}, {})\n",
                    queen.col,
                    domain.join(" "),
                    queen.row,
                    queen.col
                )
            })
            .collect();
        Self {
            message: "Solution found".to_owned(),
            solvable: true,
            iterations,
            solution,
            formatted_output,
        }
    }

    /// Result for a search that exhausted every branch.
    #[must_use]
    pub fn unsolvable(iterations: usize) -> Self {
        Self {
            message: "No solution".to_owned(),
            solvable: false,
            iterations,
            solution: Vec::new(),
            formatted_output: String::new(),
        }
    }

    /// Rows indexed by column, or `None` when unsolvable.
    ///
    /// # Examples
    /// ```
    /// use algorithms_queens::{NQueensResult, PlacedQueen};
    ///
    /// let result = NQueensResult::solved(
    ///     2,
    ///     vec![
    ///         PlacedQueen { col: 1, row: 0, domain: vec![0] },
    ///         PlacedQueen { col: 0, row: 0, domain: vec![0] },
    ///     ],
    /// );
    /// assert_eq!(result.rows_by_column(), Some(vec![0, 0]));
    /// ```
    #[must_use]
    pub fn rows_by_column(&self) -> Option<Vec<usize>> {
        if !self.solvable {
            return None;
        }
        let mut rows = vec![0; self.solution.len()];
        for queen in &self.solution {
            *rows.get_mut(queen.col)? = queen.row;
        }
        Some(rows)
    }
}
