//! Validated cost matrices over a depot and its collectible targets.
//!
//! Node `0` is always the depot. Edges are non-negative integral costs; a
//! missing edge is an explicit [`None`], never a reused zero, so a genuine
//! zero-cost edge between distinct nodes stays representable.

use thiserror::Error;

use crate::{Cost, NodeId};

/// Immutable square matrix of pairwise travel costs.
///
/// `edge(i, j)` is the cost from node `i` to node `j`, or [`None`] when no
/// usable edge exists. The diagonal always reads as `Some(0)`. Construction
/// validates shape eagerly so solvers never see a malformed matrix.
///
/// # Examples
/// ```
/// use cointour_core::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0, 1, 2],
///     vec![1, 0, 3],
///     vec![2, 3, 0],
/// ])?;
/// assert_eq!(matrix.len(), 3);
/// assert_eq!(matrix.edge(0, 2), Some(2));
/// # Ok::<(), cointour_core::CostMatrixError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    cells: Vec<Option<Cost>>,
    len: usize,
}

/// Errors returned by the [`CostMatrix`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostMatrixError {
    /// No rows were supplied; at least the depot row is required.
    #[error("cost matrix requires at least the depot row")]
    Empty,
    /// A row's width differs from the number of rows.
    #[error("row {row} has {found} entries but the matrix has {expected} rows")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of entries found in that row.
        found: usize,
        /// Expected row width.
        expected: usize,
    },
    /// A diagonal entry carried a non-zero cost.
    #[error("diagonal entry for node {node} must be zero")]
    NonZeroDiagonal {
        /// Node whose self-edge was non-zero.
        node: NodeId,
    },
}

impl CostMatrix {
    /// Build a dense matrix where every off-diagonal entry is a usable edge.
    ///
    /// # Errors
    ///
    /// Returns [`CostMatrixError`] when the input is empty, non-square, or
    /// carries a non-zero diagonal entry.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self, CostMatrixError> {
        let sparse = rows
            .into_iter()
            .map(|row| row.into_iter().map(Some).collect())
            .collect();
        Self::from_sparse_rows(sparse)
    }

    /// Build a matrix with explicit missing edges.
    ///
    /// `None` marks an unusable edge; solvers skip it when extending a path.
    /// Diagonal entries may be `None` or `Some(0)` and normalise to `Some(0)`.
    ///
    /// # Errors
    ///
    /// Returns [`CostMatrixError`] when the input is empty, non-square, or
    /// carries a non-zero diagonal entry.
    pub fn from_sparse_rows(rows: Vec<Vec<Option<Cost>>>) -> Result<Self, CostMatrixError> {
        let len = rows.len();
        if len == 0 {
            return Err(CostMatrixError::Empty);
        }
        let mut cells = Vec::with_capacity(len * len);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != len {
                return Err(CostMatrixError::NotSquare {
                    row: i,
                    found: row.len(),
                    expected: len,
                });
            }
            for (j, cell) in row.into_iter().enumerate() {
                if i == j {
                    if cell.unwrap_or(0) != 0 {
                        return Err(CostMatrixError::NonZeroDiagonal { node: i });
                    }
                    cells.push(Some(0));
                } else {
                    cells.push(cell);
                }
            }
        }
        Ok(Self { cells, len })
    }

    /// Number of nodes, including the depot.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the matrix has no nodes. Always `false` after construction;
    /// provided for API completeness alongside [`CostMatrix::len`].
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cost of the edge from `from` to `to`.
    ///
    /// Returns [`None`] for a missing edge or an out-of-range index.
    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        if from >= self.len || to >= self.len {
            return None;
        }
        self.cells.get(from * self.len + to).copied().flatten()
    }

    /// Iterator over every node index, depot included.
    pub fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.len
    }

    /// Iterator over the target node indices (everything but the depot).
    pub fn targets(&self) -> std::ops::Range<NodeId> {
        1..self.len
    }
}
