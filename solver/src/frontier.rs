//! Min-priority frontier over search nodes.
//!
//! `BinaryHeap` is a max-heap, so entries carry `Reverse<FrontierKey>` to
//! get min-heap behavior (lowest `moves + heuristic` first). An insertion
//! counter stamped into each key makes equal-priority extraction FIFO and
//! therefore deterministic for a given insertion sequence.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::contract::SlidingPuzzle;
use crate::node::{FrontierKey, SearchNode};

/// A frontier entry wrapping a node with its ordering key.
#[derive(Debug)]
struct FrontierEntry<B> {
    key: Reverse<FrontierKey>,
    node: Rc<SearchNode<B>>,
}

impl<B> PartialEq for FrontierEntry<B> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<B> Eq for FrontierEntry<B> {}

impl<B> PartialOrd for FrontierEntry<B> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<B> Ord for FrontierEntry<B> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier.
///
/// Supports O(log n) insert and extract-minimum. Nodes are never updated
/// in place — there is no decrease-key and none is needed, because a state
/// reached again via a cheaper path simply becomes a second entry.
pub struct MinFrontier<B> {
    heap: BinaryHeap<FrontierEntry<B>>,
    next_insertion: u64,
}

impl<B: SlidingPuzzle> MinFrontier<B> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_insertion: 0,
        }
    }

    /// Insert a node, stamping it with the next insertion counter.
    pub fn insert(&mut self, node: SearchNode<B>) {
        let key = FrontierKey {
            priority: node.priority(),
            insertion: self.next_insertion,
        };
        self.next_insertion += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node: Rc::new(node),
        });
    }

    /// The minimum-priority node, without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<&Rc<SearchNode<B>>> {
        self.heap.peek().map(|e| &e.node)
    }

    /// Remove and return the minimum-priority node.
    #[must_use]
    pub fn extract_min(&mut self) -> Option<Rc<SearchNode<B>>> {
        self.heap.pop().map(|e| e.node)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<B: SlidingPuzzle> Default for MinFrontier<B> {
    fn default() -> Self {
        Self::new()
    }
}
