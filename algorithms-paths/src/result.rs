//! Result values reported for a shortest-path search.

use serde::{Deserialize, Serialize};

/// Distance and route to one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRoute {
    /// The node.
    pub node: usize,
    /// Shortest distance from the source; `-1` when unreachable.
    pub distance: i64,
    /// Whether the node can be reached from the source.
    pub reachable: bool,
    /// Nodes from the source to this node; empty when unreachable.
    pub path: Vec<usize>,
}

impl NodeRoute {
    /// A route to a reachable node.
    #[must_use]
    pub const fn reached(node: usize, distance: i64, path: Vec<usize>) -> Self {
        Self {
            node,
            distance,
            reachable: true,
            path,
        }
    }

    /// Placeholder for a node the source cannot reach.
    #[must_use]
    pub const fn unreachable(node: usize) -> Self {
        Self {
            node,
            distance: -1,
            reachable: false,
            path: Vec::new(),
        }
    }

    fn render(&self) -> String {
        if !self.reachable {
            return format!("Node {}: Not reachable from source\n", self.node);
        }
        let path: Vec<_> = self.path.iter().map(ToString::to_string).collect();
        format!(
            "Node {}: distance {} with path [{}]\n",
            self.node,
            self.distance,
            path.join(" ")
        )
    }
}

/// Shortest distances and paths from the source to every node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathResult {
    /// Always `"Solution found"`; unreachable nodes are reported per node.
    pub message: String,
    /// One entry per node, ordered by node.
    pub solution: Vec<NodeRoute>,
    /// One line per node.
    pub formatted_output: String,
}

impl ShortestPathResult {
    /// Assemble a result from per-node routes.
    #[must_use]
    pub fn new(solution: Vec<NodeRoute>) -> Self {
        let formatted_output = solution.iter().map(NodeRoute::render).collect();
        Self {
            message: "Solution found".to_owned(),
            solution,
            formatted_output,
        }
    }

    /// Reported distances ordered by node, `-1` for unreachable nodes.
    #[must_use]
    pub fn distances(&self) -> Vec<i64> {
        self.solution.iter().map(|route| route.distance).collect()
    }
}
