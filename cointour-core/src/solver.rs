//! The solver contract shared by every tour strategy.

use thiserror::Error;

use crate::{CostMatrix, Tour};

/// Errors returned by [`TourSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Missing edges disconnect the depot from at least one target, so no
    /// closed tour exists.
    #[error("no tour visits every target from the depot")]
    NoTourFound,
}

/// Produce a closed depot-to-depot tour over a validated cost matrix.
///
/// Implementations must visit every target exactly once, return the trivial
/// tour for a depot-only matrix, and surface [`SolveError::NoTourFound`]
/// (rather than looping) when missing edges make a tour impossible.
/// Solvers must be `Send + Sync` so a shared matrix can be solved from
/// multiple threads.
pub trait TourSolver: Send + Sync {
    /// Solve the instance, producing a tour or an error.
    fn solve(&self, matrix: &CostMatrix) -> Result<Tour, SolveError>;
}
