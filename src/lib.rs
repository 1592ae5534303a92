//! Facade crate for the cointour tour-solving engine.
//!
//! This crate re-exports the core domain types and exposes the solver
//! strategies behind a feature flag.

#![forbid(unsafe_code)]

pub use cointour_core::{
    Cost, CostMatrix, CostMatrixError, DEPOT, NodeId, SolveError, Tour, TourSolver,
};

#[cfg(feature = "solvers")]
pub use cointour_solvers::{
    AStarSolver, ExhaustiveSolver, NearestNeighbourSolver, RandomSolver, UniformCostSolver,
};
