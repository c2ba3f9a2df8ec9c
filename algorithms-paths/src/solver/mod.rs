//! [`ShortestPathSolver`]: Dijkstra's algorithm over a binary heap.

use algorithms_core::{MinPriorityQueue, Solver, ValidationError};

use crate::distance::DistanceTable;
use crate::graph::{Graph, ShortestPathRequest};
use crate::result::{NodeRoute, ShortestPathResult};

/// Single-source shortest paths on a graph with non-negative weights.
///
/// The queue has no decrease-key; an improved node is pushed again and the
/// outdated entry is skipped when it surfaces.
///
/// # Examples
/// ```rust
/// use algorithms_core::run;
/// use algorithms_paths::{ShortestPathRequest, ShortestPathSolver};
///
/// let request = ShortestPathRequest {
///     n: 3,
///     edges: vec![[0, 1, 4], [0, 2, 1], [2, 1, 2]],
///     source: 0,
/// };
/// let result = run::<ShortestPathSolver>(&request).unwrap();
/// assert_eq!(result.distances(), vec![0, 3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPathSolver {
    graph: Graph,
    source: usize,
    table: DistanceTable,
}

impl ShortestPathSolver {
    /// Build a solver for a validated graph and an in-bounds source.
    #[must_use]
    pub fn new(graph: Graph, source: usize) -> Self {
        let table = DistanceTable::new(graph.node_count(), source);
        Self {
            graph,
            source,
            table,
        }
    }

    /// The graph being searched.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Distances and predecessors as the search left them.
    #[must_use]
    pub const fn table(&self) -> &DistanceTable {
        &self.table
    }
}

impl Solver for ShortestPathSolver {
    type Request = ShortestPathRequest;
    type Solution = ShortestPathResult;

    fn initialize(request: &ShortestPathRequest) -> Result<Self, ValidationError> {
        let graph = Graph::new(request.n, &request.edges)?;
        let source = ValidationError::checked_index(request.source, request.n).ok_or(
            ValidationError::SourceOutOfBounds {
                node: request.source,
                node_count: request.n,
            },
        )?;
        log::debug!(
            "shortest path initialised with {} nodes, {} edges, source {source}",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(Self::new(graph, source))
    }

    fn solve(&mut self) {
        self.table = DistanceTable::new(self.graph.node_count(), self.source);
        let mut queue = MinPriorityQueue::with_capacity(self.graph.node_count());
        queue.push(0_i64, self.source);

        let mut settled = 0_usize;
        while let Some(entry) = queue.pop() {
            let node = entry.value;
            if self
                .table
                .distance(node)
                .is_some_and(|best| entry.priority > best)
            {
                continue;
            }
            settled += 1;
            for edge in self.graph.neighbours(node) {
                let candidate = entry.priority.saturating_add(edge.weight);
                if self.table.relax(node, edge.target, candidate) {
                    queue.push(candidate, edge.target);
                }
            }
        }
        log::debug!(
            "shortest path search settled {settled} of {} nodes",
            self.graph.node_count()
        );
    }

    fn format_result(&self) -> ShortestPathResult {
        let solution = (0..self.graph.node_count())
            .map(|node| {
                self.table.distance(node).map_or_else(
                    || NodeRoute::unreachable(node),
                    |distance| NodeRoute::reached(node, distance, self.table.path_to(node)),
                )
            })
            .collect();
        ShortestPathResult::new(solution)
    }
}
