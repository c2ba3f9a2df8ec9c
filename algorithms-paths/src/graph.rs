//! Directed graphs with non-negative edge weights.

use algorithms_core::ValidationError;
use serde::{Deserialize, Serialize};

/// Parameters for a shortest-path request.
///
/// Edges are `[from, to, weight]` triples. Node ids and weights are signed so
/// that negative values are reported as validation failures.
///
/// # Examples
/// ```rust
/// use algorithms_paths::ShortestPathRequest;
///
/// let request: ShortestPathRequest =
///     serde_json::from_str(r#"{"n":2,"edges":[[0,1,5]],"source":0}"#).unwrap();
/// assert_eq!(request.edges, vec![[0, 1, 5]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    /// Number of nodes, labelled `0..n`.
    pub n: usize,
    /// Directed weighted edges.
    #[serde(default)]
    pub edges: Vec<[i64; 3]>,
    /// Node the distances are measured from.
    pub source: i64,
}

/// An outgoing edge in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Node the edge points to.
    pub target: usize,
    /// Non-negative cost of traversing the edge.
    pub weight: i64,
}

/// Adjacency-list graph over nodes `0..node_count`, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Build a graph from `[from, to, weight]` triples, keeping edge order.
    ///
    /// # Errors
    ///
    /// Checks each edge in turn: an origin or target outside
    /// `[0, node_count)` yields [`ValidationError::EdgeNodeOutOfBounds`] and
    /// a negative weight yields [`ValidationError::NegativeEdgeWeight`].
    ///
    /// # Examples
    /// ```
    /// use algorithms_paths::Graph;
    ///
    /// let graph = Graph::new(3, &[[0, 1, 4], [0, 2, 1]]).unwrap();
    /// assert_eq!(graph.neighbours(0).len(), 2);
    /// assert!(Graph::new(2, &[[0, 1, -3]]).is_err());
    /// ```
    pub fn new(node_count: usize, edges: &[[i64; 3]]) -> Result<Self, ValidationError> {
        let mut adjacency = vec![Vec::new(); node_count];
        for &[from, to, weight] in edges {
            let out_of_bounds = |node| ValidationError::EdgeNodeOutOfBounds {
                node,
                from,
                to,
                weight,
                node_count,
            };
            let origin =
                ValidationError::checked_index(from, node_count).ok_or_else(|| out_of_bounds(from))?;
            let target =
                ValidationError::checked_index(to, node_count).ok_or_else(|| out_of_bounds(to))?;
            if weight < 0 {
                return Err(ValidationError::NegativeEdgeWeight { from, to, weight });
            }
            if let Some(list) = adjacency.get_mut(origin) {
                list.push(Edge { target, weight });
            }
        }
        Ok(Self { adjacency })
    }

    /// Number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `node` in insertion order; empty for unknown nodes.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}
