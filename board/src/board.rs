//! The n-by-n sliding-tile board.
//!
//! Tiles are stored row-major in a flat vector with the blank encoded as
//! 0 and its index tracked separately. The goal layout is `1..n*n-1` in
//! order with the blank in the last cell.
//!
//! Equality and hashing cover dimension and tile layout; two boards are
//! equal iff every cell matches.

use std::fmt;
use std::str::FromStr;

use npuzzle_solver::SlidingPuzzle;

use crate::direction::Direction;
use crate::error::BoardError;

/// Upper bound on board dimension accepted by constructors and the parser.
///
/// Untrusted input supplies the dimension before any tiles are read, so it
/// must be bounded before it sizes an allocation. Exhaustive A* is already
/// hopeless well below this cap.
pub const MAX_DIMENSION: usize = 1024;

/// An immutable sliding-tile board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dim: usize,
    /// Row-major tile values; 0 is the blank.
    tiles: Vec<u32>,
    /// Flat index of the blank. Always consistent with `tiles`.
    blank: usize,
}

impl Board {
    /// The solved board of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dim < 2`.
    #[must_use]
    pub fn goal(dim: usize) -> Self {
        assert!(dim >= 2, "board dimension must be at least 2");
        let cells = dim * dim;
        let mut tiles: Vec<u32> = (1..=cells).map(|t| u32::try_from(t).unwrap_or(0)).collect();
        tiles[cells - 1] = 0;
        Self {
            dim,
            tiles,
            blank: cells - 1,
        }
    }

    /// Build a board from rows of tile values, validating eagerly.
    ///
    /// The rows must form a square of dimension 2 to [`MAX_DIMENSION`]
    /// whose values are a permutation of `0..dim*dim` (so exactly one
    /// blank).
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] describing the first violation found.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, BoardError> {
        let dim = rows.len();
        if dim < 2 {
            return Err(BoardError::DimensionTooSmall { dim });
        }
        if dim > MAX_DIMENSION {
            return Err(BoardError::DimensionTooLarge {
                dim,
                max: MAX_DIMENSION,
            });
        }
        for (row, r) in rows.iter().enumerate() {
            if r.len() != dim {
                return Err(BoardError::NotSquare {
                    row,
                    len: r.len(),
                    dim,
                });
            }
        }

        let cells = dim * dim;
        let max = u32::try_from(cells - 1).unwrap_or(u32::MAX);
        let tiles: Vec<u32> = rows.into_iter().flatten().collect();
        let mut seen = vec![false; cells];
        for &tile in &tiles {
            if tile > max {
                return Err(BoardError::TileOutOfRange { tile, max });
            }
            let slot = &mut seen[tile as usize];
            if *slot {
                return Err(BoardError::DuplicateTile { tile });
            }
            *slot = true;
        }
        // A permutation of 0..cells necessarily contains exactly one blank.
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or(0);

        Ok(Self { dim, tiles, blank })
    }

    /// Board dimension n.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dim
    }

    /// Tile value at (row, col); 0 is the blank.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        assert!(row < self.dim && col < self.dim, "cell out of bounds");
        self.tiles[row * self.dim + col]
    }

    /// Position of the blank as (row, col).
    #[must_use]
    pub const fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.dim, self.blank % self.dim)
    }

    /// Number of tiles out of place (the blank not counted).
    #[must_use]
    pub fn hamming(&self) -> u32 {
        let mut count = 0;
        for (idx, &tile) in self.tiles.iter().enumerate() {
            if tile != 0 && tile as usize != idx + 1 {
                count += 1;
            }
        }
        count
    }

    /// Sum of the tiles' distances to their goal cells (the blank not
    /// counted). Admissible: every move slides one tile one cell.
    #[must_use]
    pub fn manhattan(&self) -> u32 {
        let mut sum = 0usize;
        for (idx, &tile) in self.tiles.iter().enumerate() {
            if tile != 0 {
                let target = tile as usize - 1;
                sum += (idx / self.dim).abs_diff(target / self.dim)
                    + (idx % self.dim).abs_diff(target % self.dim);
            }
        }
        u32::try_from(sum).unwrap_or(u32::MAX)
    }

    /// True iff every tile is in its goal cell.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.blank == self.tiles.len() - 1
            && self
                .tiles
                .iter()
                .enumerate()
                .all(|(idx, &tile)| tile == 0 || tile as usize == idx + 1)
    }

    /// The board obtained by sliding the blank one cell, or `None` if that
    /// would leave the grid.
    #[must_use]
    pub fn slide(&self, direction: Direction) -> Option<Self> {
        let (row, col) = self.blank_position();
        let (dr, dc) = direction.delta();
        let new_row = row.checked_add_signed(dr)?;
        let new_col = col.checked_add_signed(dc)?;
        if new_row >= self.dim || new_col >= self.dim {
            return None;
        }
        let target = new_row * self.dim + new_col;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Self {
            dim: self.dim,
            tiles,
            blank: target,
        })
    }

    /// All boards one legal move away, in [`Direction::ALL`] order.
    #[must_use]
    pub fn neighbors(&self) -> Vec<Self> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.slide(dir))
            .collect()
    }

    /// The blank slide that turns `self` into `next`, if they are one
    /// move apart.
    #[must_use]
    pub fn direction_to(&self, next: &Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.slide(dir).as_ref() == Some(next))
    }

    /// The board with the first two non-blank tiles (row-major) swapped.
    ///
    /// Deterministic, and flips the permutation parity: exactly one of
    /// `{board, board.twin()}` is solvable.
    #[must_use]
    pub fn twin(&self) -> Self {
        let mut non_blank = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != 0)
            .map(|(idx, _)| idx);
        let a = non_blank.next().unwrap_or(0);
        let b = non_blank.next().unwrap_or(1);
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Self {
            dim: self.dim,
            tiles,
            blank: self.blank,
        }
    }
}

impl SlidingPuzzle for Board {
    fn heuristic(&self) -> u32 {
        self.manhattan()
    }

    fn is_goal(&self) -> bool {
        Board::is_goal(self)
    }

    fn neighbors(&self) -> Vec<Self> {
        // Inherent methods take precedence over these trait methods.
        Board::neighbors(self)
    }

    fn twin(&self) -> Self {
        Board::twin(self)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the text format: dimension n first, then n*n tile values,
    /// all whitespace separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let dim_token = tokens.next().ok_or_else(|| BoardError::Parse {
            detail: "empty input".into(),
        })?;
        let dim: usize = dim_token.parse().map_err(|_| BoardError::Parse {
            detail: format!("bad dimension {dim_token:?}"),
        })?;
        // Bound the dimension before it sizes any allocation.
        if dim > MAX_DIMENSION {
            return Err(BoardError::DimensionTooLarge {
                dim,
                max: MAX_DIMENSION,
            });
        }

        let mut rows = Vec::with_capacity(dim);
        for _ in 0..dim {
            let mut row = Vec::with_capacity(dim);
            for _ in 0..dim {
                let token = tokens.next().ok_or_else(|| BoardError::Parse {
                    detail: format!("expected {} tiles, input ended early", dim * dim),
                })?;
                let tile: u32 = token.parse().map_err(|_| BoardError::Parse {
                    detail: format!("bad tile value {token:?}"),
                })?;
                row.push(tile);
            }
            rows.push(row);
        }
        if tokens.next().is_some() {
            return Err(BoardError::Parse {
                detail: "trailing input after the last tile".into(),
            });
        }

        Self::from_rows(rows)
    }
}

impl fmt::Display for Board {
    /// The same format [`FromStr`] accepts: n, then the grid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.dim * self.dim - 1).to_string().len();
        writeln!(f, "{}", self.dim)?;
        for row in 0..self.dim {
            for col in 0..self.dim {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:width$}", self.tile(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
