//! npuzzle Board: the sliding-tile board value type.
//!
//! Implements the [`npuzzle_solver::SlidingPuzzle`] capability for square
//! n-by-n tile boards: validated construction and text parsing, Hamming
//! and Manhattan distances, neighbor enumeration by sliding the blank,
//! and the twin construction used for solvability detection.
//!
//! Boards are immutable values; every operation returns a fresh board.

#![forbid(unsafe_code)]

pub mod board;
pub mod direction;
pub mod error;

pub use board::{Board, MAX_DIMENSION};
pub use direction::Direction;
pub use error::BoardError;
