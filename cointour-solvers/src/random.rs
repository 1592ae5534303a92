//! Baseline strategy: a uniformly random target ordering.

use cointour_core::{CostMatrix, SolveError, Tour, TourSolver};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Shuffles the targets and sandwiches them between two depot visits.
///
/// No optimality guarantee; useful as a baseline and for exercising the tour
/// invariants. [`RandomSolver::seeded`] makes the shuffle reproducible.
///
/// # Examples
/// ```
/// use cointour_core::{CostMatrix, TourSolver};
/// use cointour_solvers::RandomSolver;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0, 1, 2],
///     vec![1, 0, 3],
///     vec![2, 3, 0],
/// ])?;
/// let tour = RandomSolver::seeded(7).solve(&matrix)?;
/// assert_eq!(tour.nodes().len(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSolver {
    seed: Option<u64>,
}

impl RandomSolver {
    /// A solver drawing a fresh seed from thread-local entropy per solve.
    pub fn new() -> Self {
        Self::default()
    }

    /// A solver whose shuffle is reproducible for the given seed.
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl TourSolver for RandomSolver {
    fn solve(&self, matrix: &CostMatrix) -> Result<Tour, SolveError> {
        if matrix.len() <= 1 {
            return Ok(Tour::trivial());
        }
        let mut interior: Vec<_> = matrix.targets().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.unwrap_or_else(rand::random));
        interior.shuffle(&mut rng);
        Tour::through(matrix, &interior).ok_or(SolveError::NoTourFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cointour_core::test_support::{scrambled, triangle};
    use rstest::rstest;

    #[rstest]
    fn tour_visits_every_target_once() {
        let matrix = scrambled(6, 11);
        let tour = RandomSolver::seeded(3).solve(&matrix).expect("dense matrix");
        let nodes = tour.nodes();
        assert_eq!(nodes.first(), Some(&0));
        assert_eq!(nodes.last(), Some(&0));
        let mut interior: Vec<_> = nodes.iter().skip(1).take(5).copied().collect();
        interior.sort_unstable();
        assert_eq!(interior, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn seeded_solver_is_reproducible() {
        let matrix = scrambled(7, 23);
        let first = RandomSolver::seeded(42).solve(&matrix).expect("dense matrix");
        let second = RandomSolver::seeded(42).solve(&matrix).expect("dense matrix");
        assert_eq!(first, second);
    }

    #[rstest]
    fn depot_only_matrix_yields_the_trivial_tour() {
        let matrix = CostMatrix::from_rows(vec![vec![0]]).expect("depot-only matrix");
        let tour = RandomSolver::new().solve(&matrix).expect("trivial instance");
        assert!(tour.is_trivial());
    }

    #[rstest]
    fn missing_edge_surfaces_no_tour_found() {
        let matrix = CostMatrix::from_sparse_rows(vec![
            vec![Some(0), None],
            vec![None, Some(0)],
        ])
        .expect("valid sparse matrix");
        let err = RandomSolver::seeded(1).solve(&matrix).expect_err("unreachable target");
        assert_eq!(err, SolveError::NoTourFound);
    }

    #[rstest]
    fn triangle_tour_cost_matches_its_edges() {
        let tour = RandomSolver::seeded(5).solve(&triangle()).expect("dense matrix");
        // Both interior orderings of the symmetric triangle cost 6.
        assert_eq!(tour.cost(), 6);
    }
}
