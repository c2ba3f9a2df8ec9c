//! Shared contracts for the algorithm engines.
//!
//! Every engine follows the same lifecycle: a request is validated into an
//! engine instance, the instance is solved, and the outcome is formatted into
//! an immutable result value. This crate owns that lifecycle ([`Solver`]),
//! the single validation error type raised while initializing an engine
//! ([`ValidationError`]), and the min-priority queue used by graph search
//! ([`MinPriorityQueue`]).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub mod queue;
mod solver;

pub use error::ValidationError;
pub use queue::MinPriorityQueue;
pub use solver::{Solver, run};
