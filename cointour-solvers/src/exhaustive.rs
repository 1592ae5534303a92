//! Exact brute-force permutation search.

use cointour_core::{CostMatrix, NodeId, SolveError, Tour, TourSolver};

/// Evaluates every permutation of the targets and keeps the cheapest closed
/// tour.
///
/// Enumeration is lexicographic (the smallest unused index is tried first)
/// and the strict cost comparison keeps the first minimum found, so ties
/// resolve deterministically. Exact but `O((N - 1)!)`; intended for small
/// instances and as the reference the search strategies are tested against.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Construct the solver; it carries no state.
    pub const fn new() -> Self {
        Self
    }
}

impl TourSolver for ExhaustiveSolver {
    fn solve(&self, matrix: &CostMatrix) -> Result<Tour, SolveError> {
        let n = matrix.len();
        if n <= 1 {
            return Ok(Tour::trivial());
        }
        let mut used = vec![false; n];
        let mut interior = Vec::with_capacity(n - 1);
        let mut best = None;
        permute(matrix, &mut interior, &mut used, &mut best);
        best.ok_or(SolveError::NoTourFound)
    }
}

fn permute(
    matrix: &CostMatrix,
    interior: &mut Vec<NodeId>,
    used: &mut [bool],
    best: &mut Option<Tour>,
) {
    if interior.len() + 1 == matrix.len() {
        // Permutations touching a missing edge price to None and are skipped.
        if let Some(tour) = Tour::through(matrix, interior) {
            let improves = best.as_ref().is_none_or(|kept| tour.cost() < kept.cost());
            if improves {
                *best = Some(tour);
            }
        }
        return;
    }
    for node in matrix.targets() {
        if used.get(node).copied().unwrap_or(true) {
            continue;
        }
        if let Some(slot) = used.get_mut(node) {
            *slot = true;
        }
        interior.push(node);
        permute(matrix, interior, used, best);
        interior.pop();
        if let Some(slot) = used.get_mut(node) {
            *slot = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cointour_core::test_support::{isolated_target, triangle};
    use rstest::rstest;

    #[rstest]
    fn triangle_optimum_is_six_with_the_first_tied_ordering() {
        let tour = ExhaustiveSolver::new().solve(&triangle()).expect("dense matrix");
        // [0,1,2,0] and [0,2,1,0] both cost 6; lexicographic enumeration
        // finds [1, 2] first.
        assert_eq!(tour.nodes(), &[0, 1, 2, 0]);
        assert_eq!(tour.cost(), 6);
    }

    #[rstest]
    fn finds_the_minimum_over_a_four_node_instance() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0, 2, 9, 10],
            vec![2, 0, 6, 4],
            vec![9, 6, 0, 8],
            vec![10, 4, 8, 0],
        ])
        .expect("valid dense matrix");
        let tour = ExhaustiveSolver::new().solve(&matrix).expect("dense matrix");
        // [0,1,3,2,0] and [0,2,3,1,0] tie at 23; enumeration meets [1,3,2]
        // first.
        assert_eq!(tour.nodes(), &[0, 1, 3, 2, 0]);
        assert_eq!(tour.cost(), 23);
    }

    #[rstest]
    fn depot_only_matrix_yields_the_trivial_tour() {
        let matrix = CostMatrix::from_rows(vec![vec![0]]).expect("depot-only matrix");
        let tour = ExhaustiveSolver::new().solve(&matrix).expect("trivial instance");
        assert!(tour.is_trivial());
    }

    #[rstest]
    fn unreachable_target_surfaces_no_tour_found() {
        let err = ExhaustiveSolver::new()
            .solve(&isolated_target(4, 1))
            .expect_err("target 1 unreachable");
        assert_eq!(err, SolveError::NoTourFound);
    }
}
