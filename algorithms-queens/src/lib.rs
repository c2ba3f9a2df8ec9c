//! N-Queens engine: place `n` non-attacking queens on a board with blocked
//! cells.
//!
//! [`NQueensSolver`] implements [`algorithms_core::Solver`] as a constraint
//! search. Each column holds one queen whose domain is the set of rows still
//! open to it. The search uses forward checking, chooses the next column by
//! minimum remaining values, and backtracks through an undo log instead of
//! copying the board. An exhausted search is a normal outcome reported with
//! `solvable = false`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod board;
mod result;
mod solver;
mod trail;

pub use board::{Chessboard, NQueensRequest, Queen};
pub use result::{NQueensResult, PlacedQueen};
pub use solver::NQueensSolver;
