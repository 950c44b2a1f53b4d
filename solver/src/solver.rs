//! Dual-frontier A* orchestration.
//!
//! Two independent tracks run in lockstep: one rooted at the initial
//! board, one at its twin. Each round, both tracks expand one minimal
//! node; the loop stops as soon as either track's minimum is a goal. The
//! main track's minimum then decides the verdict: if it is a goal the
//! puzzle is solvable and the node's back-pointer chain is the optimal
//! path, otherwise the twin won the race and the puzzle is unsolvable.

use std::rc::Rc;

use crate::contract::SlidingPuzzle;
use crate::frontier::MinFrontier;
use crate::node::SearchNode;

/// One A* track: a frontier seeded with a root node.
struct Track<B> {
    frontier: MinFrontier<B>,
}

impl<B: SlidingPuzzle> Track<B> {
    fn seeded(root: B) -> Self {
        let mut frontier = MinFrontier::new();
        frontier.insert(SearchNode::root(root));
        Self { frontier }
    }

    /// Whether this track's minimum node is a goal.
    fn goal_in_sight(&self) -> bool {
        self.frontier.peek_min().is_some_and(|n| n.board.is_goal())
    }

    /// One round: extract the minimum node and insert its children.
    ///
    /// A neighbor equal to a board on the extracted node's own path-to-root
    /// is skipped; duplicates across separate branches are not. No-op on an
    /// empty frontier.
    fn advance(&mut self) {
        let Some(step) = self.frontier.extract_min() else {
            return;
        };
        for neighbor in step.board.neighbors() {
            if !step.path_contains(&neighbor) {
                self.frontier.insert(SearchNode::child(neighbor, &step));
            }
        }
    }
}

/// Optimal sliding-tile solver.
///
/// The entire search runs synchronously inside [`Solver::new`]; the
/// constructed value is a read-only query object in exactly one of two
/// terminal states, solved or unsolvable, never re-evaluated. Memory grows
/// with the number of expanded nodes — acceptable for the small fixed-size
/// puzzles this targets.
pub struct Solver<B> {
    solved: bool,
    path: Vec<B>,
}

impl<B: SlidingPuzzle> Solver<B> {
    /// Run the full dual-track search from `initial`.
    ///
    /// Blocks until the verdict is reached. Termination is guaranteed for
    /// any board honoring the [`SlidingPuzzle`] contract, because exactly
    /// one of `{initial, initial.twin()}` can reach a goal.
    #[must_use]
    pub fn new(initial: B) -> Self {
        let mut main = Track::seeded(initial.clone());
        let mut twin = Track::seeded(initial.twin());

        while !(main.goal_in_sight() || twin.goal_in_sight()) {
            if main.frontier.is_empty() && twin.frontier.is_empty() {
                // Both tracks exhausted without a goal: only possible for a
                // contract-violating board. Report unsolvable rather than spin.
                break;
            }
            main.advance();
            twin.advance();
        }

        let terminal = main.frontier.extract_min();
        let solved = terminal.as_ref().is_some_and(|n| n.board.is_goal());
        let path = match &terminal {
            Some(node) if solved => reconstruct_path(node),
            _ => Vec::new(),
        };

        Self { solved, path }
    }

    /// Whether the initial board is solvable.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.solved
    }

    /// Minimum number of moves to solve the initial board; -1 if unsolvable.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn moves(&self) -> i32 {
        if self.solved {
            self.path.len() as i32 - 1
        } else {
            -1
        }
    }

    /// The boards of a shortest solution, initial board first; `None` if
    /// unsolvable.
    ///
    /// Each call yields a fresh, independently consumable traversal over
    /// the same immutable path.
    #[must_use]
    pub fn solution(&self) -> Option<SolutionIter<'_, B>> {
        if self.solved {
            Some(SolutionIter {
                inner: self.path.iter(),
            })
        } else {
            None
        }
    }
}

/// Walk parent links from the terminal node to the root, then reverse.
fn reconstruct_path<B: SlidingPuzzle>(terminal: &Rc<SearchNode<B>>) -> Vec<B> {
    let mut path = Vec::with_capacity(terminal.moves as usize + 1);
    let mut cursor = Some(terminal.as_ref());
    while let Some(node) = cursor {
        path.push(node.board.clone());
        cursor = node.parent.as_deref();
    }
    path.reverse();
    path
}

/// Restartable traversal over a solution path.
///
/// Wraps a slice iterator over the solver's materialized path; cloning or
/// calling [`Solver::solution`] again restarts from the initial board.
#[derive(Debug)]
pub struct SolutionIter<'a, B> {
    inner: std::slice::Iter<'a, B>,
}

impl<B> Clone for SolutionIter<'_, B> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, B> Iterator for SolutionIter<'a, B> {
    type Item = &'a B;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<B> ExactSizeIterator for SolutionIter<'_, B> {}
