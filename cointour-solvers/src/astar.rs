//! Exact A* search guided by the spanning-tree lower bound.

use cointour_core::{CostMatrix, DEPOT, SolveError, Tour, TourSolver};

use crate::frontier::{PathCandidate, PriorityFrontier};
use crate::mst::remaining_lower_bound;

/// A* over path-extension states with the MST heuristic from [`crate::mst`].
///
/// The frontier is keyed by accumulated cost plus the admissible
/// remaining-cost bound; ties break exactly as in
/// [`UniformCostSolver`](crate::UniformCostSolver). Admissibility keeps the
/// first popped complete tour optimal while pruning far more of the state
/// space than plain uniform cost. Candidates whose unvisited subset cannot
/// be connected are dropped outright; they have no completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarSolver;

impl AStarSolver {
    /// Construct the solver; it carries no state.
    pub const fn new() -> Self {
        Self
    }
}

impl TourSolver for AStarSolver {
    fn solve(&self, matrix: &CostMatrix) -> Result<Tour, SolveError> {
        let n = matrix.len();
        if n <= 1 {
            return Ok(Tour::trivial());
        }
        let root = PathCandidate::root();
        let Some(root_bound) = remaining_lower_bound(matrix, root.nodes()) else {
            // The full node set is already disconnected.
            return Err(SolveError::NoTourFound);
        };

        let mut frontier = PriorityFrontier::new();
        frontier.push(root.with_estimate(root_bound));
        let mut expansions: u64 = 0;

        while let Some(candidate) = frontier.pop() {
            expansions += 1;
            if candidate.len() == n + 1 {
                log::debug!("a-star solve converged after {expansions} expansions");
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
                let Some(edge) = matrix.edge(candidate.last(), node) else {
                    continue;
                };
                let child = candidate.extended(node, edge, 0);
                if let Some(bound) = remaining_lower_bound(matrix, child.nodes()) {
                    frontier.push(child.with_estimate(bound));
                }
            }
        }

        log::debug!("a-star frontier exhausted after {expansions} expansions");
        Err(SolveError::NoTourFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cointour_core::test_support::{isolated_target, scrambled, triangle};
    use crate::{ExhaustiveSolver, UniformCostSolver};
    use rstest::rstest;

    #[rstest]
    fn triangle_optimum_costs_six() {
        let tour = AStarSolver::new().solve(&triangle()).expect("dense matrix");
        assert_eq!(tour.cost(), 6);
        assert_eq!(tour.nodes().len(), 4);
    }

    #[rstest]
    #[case(4, 2)]
    #[case(5, 31)]
    #[case(6, 57)]
    #[case(7, 101)]
    fn agrees_with_both_exact_strategies(#[case] n: usize, #[case] seed: u64) {
        let matrix = scrambled(n, seed);
        let exact = ExhaustiveSolver::new().solve(&matrix).expect("dense matrix");
        let uniform = UniformCostSolver::new().solve(&matrix).expect("dense matrix");
        let guided = AStarSolver::new().solve(&matrix).expect("dense matrix");
        assert_eq!(guided.cost(), exact.cost());
        assert_eq!(guided.cost(), uniform.cost());
    }

    #[rstest]
    fn disconnected_instance_terminates_with_no_tour() {
        let err = AStarSolver::new()
            .solve(&isolated_target(5, 1))
            .expect_err("target 1 unreachable");
        assert_eq!(err, SolveError::NoTourFound);
    }

    #[rstest]
    fn rerunning_yields_an_identical_tour() {
        let matrix = scrambled(6, 77);
        let first = AStarSolver::new().solve(&matrix).expect("dense matrix");
        let second = AStarSolver::new().solve(&matrix).expect("dense matrix");
        assert_eq!(first, second);
    }
}
