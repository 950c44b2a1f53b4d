//! Typed board construction and parse errors.
//!
//! All validation is eager: a `Board` that constructs successfully is a
//! well-formed puzzle, and the solver never sees a malformed one.

/// Typed failure for board construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board dimension below the 2x2 minimum.
    DimensionTooSmall { dim: usize },
    /// Board dimension above [`crate::board::MAX_DIMENSION`].
    DimensionTooLarge { dim: usize, max: usize },
    /// A row's length does not match the board dimension.
    NotSquare { row: usize, len: usize, dim: usize },
    /// A tile value outside `0..dim*dim`.
    TileOutOfRange { tile: u32, max: u32 },
    /// A tile value that appears more than once.
    DuplicateTile { tile: u32 },
    /// Malformed board text.
    Parse { detail: String },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionTooSmall { dim } => {
                write!(f, "board dimension {dim} is below the 2x2 minimum")
            }
            Self::DimensionTooLarge { dim, max } => {
                write!(f, "board dimension {dim} exceeds the {max} maximum")
            }
            Self::NotSquare { row, len, dim } => {
                write!(f, "row {row} has {len} tiles, expected {dim}")
            }
            Self::TileOutOfRange { tile, max } => {
                write!(f, "tile value {tile} out of range (max {max})")
            }
            Self::DuplicateTile { tile } => write!(f, "tile value {tile} appears more than once"),
            Self::Parse { detail } => write!(f, "malformed board text: {detail}"),
        }
    }
}

impl std::error::Error for BoardError {}
