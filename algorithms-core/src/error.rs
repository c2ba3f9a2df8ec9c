//! Validation failures raised while initializing an engine.

use thiserror::Error;

/// Errors returned by [`Solver::initialize`](crate::Solver::initialize).
///
/// Each variant names the precondition the request violated. Validation is
/// the only failure mode of an engine: once initialization succeeds, solving
/// always terminates with a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The knapsack value and weight arrays have different lengths.
    #[error(
        "length of values array ({values}) does not match length of weights array ({weights})"
    )]
    LengthMismatch {
        /// Number of values supplied.
        values: usize,
        /// Number of weights supplied.
        weights: usize,
    },
    /// A knapsack item has a weight of zero.
    #[error("weights array can not contain zero values (item {index} has weight 0)")]
    ZeroWeight {
        /// Index of the first offending item.
        index: usize,
    },
    /// A blocked chessboard cell lies outside the board.
    #[error(
        "blocked cell [{row}, {column}] is out of bounds; row and column values belong to the interval [0, {size})"
    )]
    BlockedCellOutOfBounds {
        /// Row of the blocked cell.
        row: i64,
        /// Column of the blocked cell.
        column: i64,
        /// Size of the board.
        size: usize,
    },
    /// An edge references a node outside the graph.
    #[error(
        "node {node} in edge [{from}, {to}] (weight {weight}) is out of bounds; node values belong to the interval [0, {node_count})"
    )]
    EdgeNodeOutOfBounds {
        /// The offending endpoint.
        node: i64,
        /// Edge origin.
        from: i64,
        /// Edge target.
        to: i64,
        /// Edge weight.
        weight: i64,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An edge carries a negative weight.
    #[error("edge [{from}, {to}] has a negative weight: {weight}")]
    NegativeEdgeWeight {
        /// Edge origin.
        from: i64,
        /// Edge target.
        to: i64,
        /// The negative weight.
        weight: i64,
    },
    /// The shortest-path source lies outside the graph.
    #[error(
        "source node {node} is out of bounds; node values belong to the interval [0, {node_count})"
    )]
    SourceOutOfBounds {
        /// The requested source node.
        node: i64,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

impl ValidationError {
    /// Resolve a signed request index against an exclusive upper bound.
    ///
    /// Returns `None` when the value is negative or not below `bound`;
    /// callers map that to the variant describing their input.
    ///
    /// # Examples
    /// ```
    /// use algorithms_core::ValidationError;
    ///
    /// assert_eq!(ValidationError::checked_index(2, 4), Some(2));
    /// assert_eq!(ValidationError::checked_index(-1, 4), None);
    /// assert_eq!(ValidationError::checked_index(4, 4), None);
    /// ```
    #[must_use]
    pub fn checked_index(value: i64, bound: usize) -> Option<usize> {
        usize::try_from(value).ok().filter(|index| *index < bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1, Some(0))]
    #[case(3, 4, Some(3))]
    #[case(4, 4, None)]
    #[case(-1, 4, None)]
    #[case(0, 0, None)]
    fn checked_index_respects_bounds(
        #[case] value: i64,
        #[case] bound: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(ValidationError::checked_index(value, bound), expected);
    }

    #[rstest]
    fn messages_name_the_violated_precondition() {
        let mismatch = ValidationError::LengthMismatch {
            values: 3,
            weights: 2,
        };
        assert!(mismatch.to_string().contains("(3)"));
        assert!(mismatch.to_string().contains("(2)"));

        let source = ValidationError::SourceOutOfBounds {
            node: 7,
            node_count: 3,
        };
        assert_eq!(
            source.to_string(),
            "source node 7 is out of bounds; node values belong to the interval [0, 3)"
        );
    }
}
