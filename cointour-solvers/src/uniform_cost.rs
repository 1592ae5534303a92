//! Exact uniform-cost (Dijkstra-style) branch and bound.

use cointour_core::{CostMatrix, DEPOT, SolveError, Tour, TourSolver};

use crate::frontier::{PathCandidate, PriorityFrontier};

/// Uniform-cost search over path-extension states.
///
/// The frontier pops the lowest accumulated cost first (ties: longer path,
/// then lower last node), so the first complete depot-to-depot tour popped is
/// optimal. A popped path of length `N` is extended back to the depot; a
/// popped path of length `N + 1` is the answer. Missing edges are skipped, so
/// a disconnected instance drains the frontier and reports failure instead of
/// looping.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCostSolver;

impl UniformCostSolver {
    /// Construct the solver; it carries no state.
    pub const fn new() -> Self {
        Self
    }
}

impl TourSolver for UniformCostSolver {
    fn solve(&self, matrix: &CostMatrix) -> Result<Tour, SolveError> {
        let n = matrix.len();
        if n <= 1 {
            return Ok(Tour::trivial());
        }
        let mut frontier = PriorityFrontier::new();
        frontier.push(PathCandidate::root());
        let mut expansions: u64 = 0;

        while let Some(candidate) = frontier.pop() {
            expansions += 1;
            if candidate.len() == n + 1 {
                log::debug!("uniform-cost solve converged after {expansions} expansions");
                let (nodes, cost) = candidate.into_parts();
                return Ok(Tour::new(nodes, cost));
            }
            if candidate.len() == n {
                if let Some(edge) = matrix.edge(candidate.last(), DEPOT) {
                    frontier.push(candidate.extended(DEPOT, edge, 0));
                }
                continue;
            }
            for node in matrix.targets() {
                if candidate.visits(node) {
                    continue;
                }
                if let Some(edge) = matrix.edge(candidate.last(), node) {
                    frontier.push(candidate.extended(node, edge, 0));
                }
            }
        }

        log::debug!("uniform-cost frontier exhausted after {expansions} expansions");
        Err(SolveError::NoTourFound)
    }
}
