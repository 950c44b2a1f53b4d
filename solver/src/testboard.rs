//! Minimal 2x2 sliding board for the core's own tests.
//!
//! The real board lives in `npuzzle-board`, which depends on this crate;
//! tests here use this fixture instead so the layering stays one-way.
//! Tiles are row-major, 0 is the blank, goal is `[1, 2, 3, 0]`.

use crate::contract::SlidingPuzzle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TinyBoard {
    tiles: [u8; 4],
}

impl TinyBoard {
    pub(crate) fn new(tiles: [u8; 4]) -> Self {
        debug_assert!(tiles.iter().any(|&t| t == 0), "board needs a blank");
        Self { tiles }
    }

    pub(crate) fn goal() -> Self {
        Self::new([1, 2, 3, 0])
    }

    fn blank(&self) -> usize {
        self.tiles.iter().position(|&t| t == 0).unwrap_or(0)
    }

    fn swapped(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles;
        tiles.swap(a, b);
        Self { tiles }
    }
}

impl SlidingPuzzle for TinyBoard {
    fn heuristic(&self) -> u32 {
        // Manhattan distance on the 2x2 grid.
        let mut sum = 0u32;
        for (idx, &tile) in self.tiles.iter().enumerate() {
            if tile != 0 {
                let target = usize::from(tile) - 1;
                let dr = (idx / 2).abs_diff(target / 2);
                let dc = (idx % 2).abs_diff(target % 2);
                sum += u32::try_from(dr + dc).unwrap_or(u32::MAX);
            }
        }
        sum
    }

    fn is_goal(&self) -> bool {
        self.tiles == [1, 2, 3, 0]
    }

    fn neighbors(&self) -> Vec<Self> {
        let blank = self.blank();
        let (row, col) = (blank / 2, blank % 2);
        let mut out = Vec::with_capacity(2);
        if row > 0 {
            out.push(self.swapped(blank, blank - 2));
        }
        if row < 1 {
            out.push(self.swapped(blank, blank + 2));
        }
        if col > 0 {
            out.push(self.swapped(blank, blank - 1));
        }
        if col < 1 {
            out.push(self.swapped(blank, blank + 1));
        }
        out
    }

    fn twin(&self) -> Self {
        let mut non_blank = self.tiles.iter().enumerate().filter(|(_, &t)| t != 0);
        let a = non_blank.next().map_or(0, |(i, _)| i);
        let b = non_blank.next().map_or(1, |(i, _)| i);
        self.swapped(a, b)
    }
}
