//! Greedy nearest-neighbour construction.

use cointour_core::{Cost, CostMatrix, DEPOT, NodeId, SolveError, Tour, TourSolver};

/// Repeatedly hops to the cheapest unvisited target, then closes at the
/// depot.
///
/// Ties break to the lowest node index (the first minimum found scanning the
/// row left to right). Exactly `N - 1` extensions, `O(N^2)` time, no
/// optimality guarantee.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbourSolver;

impl NearestNeighbourSolver {
    /// Construct the solver; it carries no state.
    pub const fn new() -> Self {
        Self
    }
}

impl TourSolver for NearestNeighbourSolver {
    fn solve(&self, matrix: &CostMatrix) -> Result<Tour, SolveError> {
        let n = matrix.len();
        if n <= 1 {
            return Ok(Tour::trivial());
        }
        let mut visited = vec![false; n];
        let mut interior = Vec::with_capacity(n - 1);
        let mut current = DEPOT;
        for _ in 1..n {
            let next =
                nearest_unvisited(matrix, current, &visited).ok_or(SolveError::NoTourFound)?;
            if let Some(slot) = visited.get_mut(next) {
                *slot = true;
            }
            interior.push(next);
            current = next;
        }
        Tour::through(matrix, &interior).ok_or(SolveError::NoTourFound)
    }
}

/// First minimum-cost usable edge from `current` to an unvisited target,
/// scanning targets in increasing index order.
fn nearest_unvisited(
    matrix: &CostMatrix,
    current: NodeId,
    visited: &[bool],
) -> Option<NodeId> {
    let mut best: Option<(NodeId, Cost)> = None;
    for node in matrix.targets() {
        if visited.get(node).copied().unwrap_or(true) {
            continue;
        }
        let Some(cost) = matrix.edge(current, node) else {
            continue;
        };
        // Strict comparison keeps the first minimum found.
        let improves = best.as_ref().is_none_or(|&(_, best_cost)| cost < best_cost);
        if improves {
            best = Some((node, cost));
        }
    }
    best.map(|(node, _)| node)
}
