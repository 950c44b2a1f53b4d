//! Board capability contract trait.

/// Trait for puzzle boards that support A* solving.
///
/// The solver treats a board as an opaque immutable value: it only ever
/// calls the operations below and compares boards for equality. All
/// methods take `&self` and return fresh values; the solver never mutates
/// a board.
///
/// # Contract
///
/// - `heuristic` must be admissible: it never exceeds the true number of
///   moves remaining to a goal. Optimality of the solution depends on this.
/// - `neighbors` must enumerate every board reachable in exactly one legal
///   move, deterministically: same board → same neighbors in the same order.
/// - `twin` must be deterministic and must swap exactly two non-blank
///   tiles, so that exactly one of `{board, board.twin()}` is solvable.
/// - Equality is tile-layout equality; it is used for cycle avoidance.
///
/// A board that violates this contract (e.g. a neighbor graph with no goal
/// and no exhaustion) may cause the search not to terminate. That is a
/// caller obligation, not defended against here.
pub trait SlidingPuzzle: Clone + Eq {
    /// Admissible lower-bound estimate of moves remaining to a goal.
    fn heuristic(&self) -> u32;

    /// True iff this board is the solved configuration.
    fn is_goal(&self) -> bool;

    /// All boards reachable in exactly one legal move.
    fn neighbors(&self) -> Vec<Self>;

    /// A deterministic variant with exactly two non-blank tiles swapped.
    fn twin(&self) -> Self;
}
