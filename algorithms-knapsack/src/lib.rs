//! Knapsack engine: the 0/1 variant solved exactly and the fractional
//! variant solved greedily.
//!
//! [`KnapsackSolver`] implements [`algorithms_core::Solver`]. The 0/1
//! selection comes from an `O(n · capacity)` dynamic program; the fractional
//! selection packs items by decreasing value/weight ratio and splits at most
//! one item. Both selections are reported in a single [`KnapsackResult`]
//! together with a [`KnapsackStatus`] naming which of them found anything.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod binary;
mod fractional;
mod instance;
mod result;
mod solver;

pub use instance::{Item, KnapsackInstance, KnapsackRequest};
pub use result::{KnapsackResult, KnapsackSolution, KnapsackStatus, SelectedItem};
pub use solver::KnapsackSolver;
