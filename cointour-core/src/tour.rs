//! Closed tours over a cost matrix.
//!
//! A tour starts and ends at the depot and visits every target exactly once.

use crate::{Cost, CostMatrix, DEPOT, NodeId};

/// A completed tour and its total cost.
///
/// The node sequence has length `N + 1` for an `N`-node matrix: both ends are
/// the depot and the interior is a permutation of the targets. The degenerate
/// depot-only instance is represented by the trivial single-node tour `[0]`
/// with cost zero.
///
/// # Examples
/// ```
/// use cointour_core::{CostMatrix, Tour};
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0, 1, 2],
///     vec![1, 0, 3],
///     vec![2, 3, 0],
/// ])?;
/// let tour = Tour::through(&matrix, &[1, 2]).ok_or("edge missing")?;
/// assert_eq!(tour.nodes(), &[0, 1, 2, 0]);
/// assert_eq!(tour.cost(), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    nodes: Vec<NodeId>,
    cost: Cost,
}

impl Tour {
    /// Construct a tour from an already-validated node sequence and cost.
    ///
    /// Callers are responsible for the tour invariant; solvers only build
    /// sequences that already satisfy it.
    pub const fn new(nodes: Vec<NodeId>, cost: Cost) -> Self {
        Self { nodes, cost }
    }

    /// The trivial tour for a depot-only instance.
    pub fn trivial() -> Self {
        Self::new(vec![DEPOT], 0)
    }

    /// Close an interior target ordering into a tour over `matrix`.
    ///
    /// Prepends and appends the depot and sums the edge costs along the way.
    /// Returns [`None`] when any required edge is missing or the total cost
    /// overflows. An empty interior yields the trivial tour.
    pub fn through(matrix: &CostMatrix, interior: &[NodeId]) -> Option<Self> {
        if interior.is_empty() {
            return Some(Self::trivial());
        }
        let mut nodes = Vec::with_capacity(interior.len() + 2);
        nodes.push(DEPOT);
        let mut cost: Cost = 0;
        let mut prev = DEPOT;
        for &node in interior {
            cost = cost.checked_add(matrix.edge(prev, node)?)?;
            nodes.push(node);
            prev = node;
        }
        cost = cost.checked_add(matrix.edge(prev, DEPOT)?)?;
        nodes.push(DEPOT);
        Some(Self { nodes, cost })
    }

    /// Visited nodes in order, depot at both ends.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Total cost of the tour.
    pub const fn cost(&self) -> Cost {
        self.cost
    }

    /// Whether this is the depot-only trivial tour.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }
}
