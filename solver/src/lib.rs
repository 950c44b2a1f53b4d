//! npuzzle Solver: optimal sliding-tile solving via dual-frontier A*.
//!
//! This crate is the search core. It knows nothing about tile layouts —
//! it consumes a board through the [`SlidingPuzzle`] capability trait and
//! races two A* tracks in lockstep: one rooted at the initial board, one
//! at its twin (two non-blank tiles swapped). Exactly one of the pair is
//! solvable, so whichever track reaches a goal first decides solvability
//! without a separate parity computation.
//!
//! # Crate dependency graph
//!
//! ```text
//! npuzzle_solver  ←  npuzzle_board  ←  npuzzle_cli
//! (trait, search)    (tile board)      (driver)
//! ```
//!
//! One-way only. The board crate implements the trait; the core never
//! depends on a concrete board.
//!
//! # Key types
//!
//! - [`SlidingPuzzle`] — the board capability contract
//! - [`SearchNode`] — immutable node with shared back-pointer
//! - [`MinFrontier`] — min-priority frontier with deterministic tie-break
//! - [`Solver`] — runs the full search at construction, then read-only

#![forbid(unsafe_code)]

pub mod contract;
pub mod frontier;
pub mod node;
pub mod solver;

#[cfg(test)]
pub(crate) mod testboard;

pub use contract::SlidingPuzzle;
pub use frontier::MinFrontier;
pub use node::SearchNode;
pub use solver::{SolutionIter, Solver};
