//! Facade crate for the algorithm engines.
//!
//! This crate re-exports the shared solver contracts and exposes each engine
//! behind a feature flag.

#![forbid(unsafe_code)]

pub use algorithms_core::{MinPriorityQueue, Solver, ValidationError, run};

#[cfg(feature = "knapsack")]
pub use algorithms_knapsack::{KnapsackRequest, KnapsackResult, KnapsackSolver, KnapsackStatus};

#[cfg(feature = "queens")]
pub use algorithms_queens::{NQueensRequest, NQueensResult, NQueensSolver};

#[cfg(feature = "paths")]
pub use algorithms_paths::{ShortestPathRequest, ShortestPathResult, ShortestPathSolver};
