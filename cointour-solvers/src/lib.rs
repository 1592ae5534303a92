//! Tour-solving strategies for cointour.
//!
//! Five implementations of the [`TourSolver`](cointour_core::TourSolver)
//! contract, ordered by guarantee strength: [`RandomSolver`] (none),
//! [`NearestNeighbourSolver`] (greedy), and the exact trio
//! [`ExhaustiveSolver`], [`UniformCostSolver`], and [`AStarSolver`]. The two
//! search-based exact strategies share the [`frontier`] ordering; the A*
//! variant prunes with the [`mst`] spanning-tree lower bound.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod frontier;
pub mod mst;

mod astar;
mod exhaustive;
mod nearest_neighbour;
mod random;
mod uniform_cost;

pub use astar::AStarSolver;
pub use exhaustive::ExhaustiveSolver;
pub use nearest_neighbour::NearestNeighbourSolver;
pub use random::RandomSolver;
pub use uniform_cost::UniformCostSolver;
