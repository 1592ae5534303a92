//! Core domain types for the cointour engine.
//!
//! A [`CostMatrix`] prices travel between a depot (node `0`) and a set of
//! collectible targets; a [`TourSolver`] turns the matrix into a closed
//! [`Tour`]. Constructors return `Result` to surface malformed input before
//! any search begins.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod matrix;
mod solver;
mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use matrix::{CostMatrix, CostMatrixError};
pub use solver::{SolveError, TourSolver};
pub use tour::Tour;

/// Non-negative edge cost. Negative costs are unrepresentable by design.
pub type Cost = u32;

/// Index of a node in a [`CostMatrix`].
pub type NodeId = usize;

/// The depot node every tour starts from and returns to.
pub const DEPOT: NodeId = 0;
