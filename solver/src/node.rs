//! Search node and frontier ordering key.

use std::rc::Rc;

use crate::contract::SlidingPuzzle;

/// An immutable node in the search tree.
///
/// Nodes form a tree: many children may share one parent, so the parent
/// link is a shared `Rc`, never an exclusive reference. A node stays alive
/// as long as the frontier or any descendant still points at it; once the
/// search concludes, only the winning chain is retained for path
/// reconstruction and everything else is dropped with the frontiers.
#[derive(Debug)]
pub struct SearchNode<B> {
    /// Board snapshot at this node.
    pub board: B,
    /// Number of moves from the root. Equals the number of parent links
    /// between this node and the root.
    pub moves: u32,
    /// Back-pointer to the node this one was reached from (`None` at roots).
    pub parent: Option<Rc<SearchNode<B>>>,
}

impl<B: SlidingPuzzle> SearchNode<B> {
    /// A root node: zero moves, no parent.
    #[must_use]
    pub fn root(board: B) -> Self {
        Self {
            board,
            moves: 0,
            parent: None,
        }
    }

    /// A child of `parent` reached by one move.
    #[must_use]
    pub fn child(board: B, parent: &Rc<SearchNode<B>>) -> Self {
        Self {
            board,
            moves: parent.moves + 1,
            parent: Some(Rc::clone(parent)),
        }
    }

    /// Frontier priority: `moves + heuristic`.
    #[must_use]
    pub fn priority(&self) -> u32 {
        self.moves.saturating_add(self.board.heuristic())
    }

    /// True iff `board` equals a board on this node's own path to the root,
    /// this node included.
    ///
    /// This is the full extent of cycle avoidance: duplicate states reached
    /// through a *different* branch of the tree are not filtered and will be
    /// re-expanded. Keeping the check local to one chain is intentional.
    #[must_use]
    pub fn path_contains(&self, board: &B) -> bool {
        let mut cursor = Some(self);
        while let Some(node) = cursor {
            if node.board == *board {
                return true;
            }
            cursor = node.parent.as_deref();
        }
        false
    }
}

/// The frontier ordering key: `(priority, insertion)`.
///
/// Lower priority first; equal priorities break by insertion order (FIFO),
/// so extraction order is deterministic for a given insertion sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: u32,
    pub insertion: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.insertion.cmp(&other.insertion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testboard::TinyBoard;

    #[test]
    fn root_has_no_parent_and_zero_moves() {
        let node = SearchNode::root(TinyBoard::goal());
        assert_eq!(node.moves, 0);
        assert!(node.parent.is_none());
    }

    #[test]
    fn child_increments_moves_and_shares_parent() {
        let root = Rc::new(SearchNode::root(TinyBoard::goal()));
        let a = SearchNode::child(TinyBoard::new([1, 2, 0, 3]), &root);
        let b = SearchNode::child(TinyBoard::new([1, 0, 3, 2]), &root);
        assert_eq!(a.moves, 1);
        assert_eq!(b.moves, 1);
        // Root is owned by both children plus the local binding.
        assert_eq!(Rc::strong_count(&root), 3);
    }

    #[test]
    fn priority_is_moves_plus_heuristic() {
        let root = Rc::new(SearchNode::root(TinyBoard::goal()));
        let one_away = TinyBoard::new([1, 2, 0, 3]);
        let h = one_away.heuristic();
        let child = SearchNode::child(one_away, &root);
        assert_eq!(child.priority(), 1 + h);
    }

    #[test]
    fn path_contains_covers_self_and_ancestors_only() {
        let root = Rc::new(SearchNode::root(TinyBoard::goal()));
        let mid = Rc::new(SearchNode::child(TinyBoard::new([1, 2, 0, 3]), &root));
        let leaf = SearchNode::child(TinyBoard::new([0, 2, 1, 3]), &mid);

        assert!(leaf.path_contains(&TinyBoard::new([0, 2, 1, 3])), "self");
        assert!(leaf.path_contains(&TinyBoard::new([1, 2, 0, 3])), "parent");
        assert!(leaf.path_contains(&TinyBoard::goal()), "root");
        assert!(
            !leaf.path_contains(&TinyBoard::new([1, 0, 3, 2])),
            "a board from a different branch is not on this chain"
        );
    }

    #[test]
    fn frontier_key_lower_priority_wins() {
        let a = FrontierKey {
            priority: 3,
            insertion: 9,
        };
        let b = FrontierKey {
            priority: 4,
            insertion: 0,
        };
        assert!(a < b, "lower priority should sort first");
    }

    #[test]
    fn frontier_key_ties_broken_by_insertion_order() {
        let a = FrontierKey {
            priority: 3,
            insertion: 1,
        };
        let b = FrontierKey {
            priority: 3,
            insertion: 2,
        };
        assert!(a < b, "earlier insertion should sort first on a tie");
    }
}
