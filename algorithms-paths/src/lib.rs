//! Shortest-path engine: Dijkstra's algorithm on a directed graph with
//! non-negative edge weights.
//!
//! [`ShortestPathSolver`] implements [`algorithms_core::Solver`]. It reports,
//! for every node, the shortest distance from the source and the path that
//! achieves it, or marks the node unreachable.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod distance;
mod graph;
mod result;
mod solver;

pub use distance::DistanceTable;
pub use graph::{Edge, Graph, ShortestPathRequest};
pub use result::{NodeRoute, ShortestPathResult};
pub use solver::ShortestPathSolver;
