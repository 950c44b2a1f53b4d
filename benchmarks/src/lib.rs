//! Shared helpers for the npuzzle benchmark suite.

#![forbid(unsafe_code)]

use npuzzle_board::Board;

/// Fixed 3x3 instances, easy to hard, plus an unsolvable one.
///
/// # Panics
///
/// Panics if a fixture fails to parse. Benchmark setup failures are fatal.
#[must_use]
pub fn fixture_boards() -> Vec<(&'static str, Board)> {
    [
        ("puzzle04", "3  0 1 3  4 2 5  7 8 6"),
        ("classic", "3  8 1 3  4 0 2  7 6 5"),
        ("unsolvable", "3  1 2 3  4 5 6  8 7 0"),
    ]
    .into_iter()
    .map(|(name, text)| (name, text.parse().expect("fixture board should parse")))
    .collect()
}
