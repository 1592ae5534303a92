//! Priority frontier over partial-path candidates.
//!
//! Both exact search strategies pop the most promising partial path first.
//! The ordering uses only the candidates' own fields: lower cost plus
//! estimate wins, then the longer path, then the lower last-visited node.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use cointour_core::{Cost, DEPOT, NodeId};

/// A partial tour under construction: visited nodes, accumulated cost, and
/// an admissible estimate of the remaining cost (zero for uniform-cost
/// search).
///
/// Candidates always start at the depot and only grow by one node at a time.
#[derive(Debug, Clone)]
pub struct PathCandidate {
    nodes: Vec<NodeId>,
    cost: Cost,
    estimate: Cost,
}

impl PathCandidate {
    /// The search root: only the depot visited, nothing spent.
    pub fn root() -> Self {
        Self {
            nodes: vec![DEPOT],
            cost: 0,
            estimate: 0,
        }
    }

    /// Replace the remaining-cost estimate, consuming the candidate.
    #[must_use]
    pub fn with_estimate(mut self, estimate: Cost) -> Self {
        self.estimate = estimate;
        self
    }

    /// A new candidate extending this one by `node` over an edge of
    /// `edge_cost`, carrying `estimate` as the new remaining-cost bound.
    #[must_use]
    pub fn extended(&self, node: NodeId, edge_cost: Cost, estimate: Cost) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(node);
        Self {
            nodes,
            cost: self.cost.saturating_add(edge_cost),
            estimate,
        }
    }

    /// Last node reached so far.
    pub fn last(&self) -> NodeId {
        self.nodes.last().copied().unwrap_or(DEPOT)
    }

    /// Number of nodes visited, depot included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the candidate holds no nodes. Never true in practice; a
    /// candidate always contains at least the depot.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Accumulated edge cost.
    pub const fn cost(&self) -> Cost {
        self.cost
    }

    /// Admissible estimate of the cost still needed to close the tour.
    pub const fn estimate(&self) -> Cost {
        self.estimate
    }

    /// Ordering key: accumulated cost plus remaining estimate.
    pub const fn priority(&self) -> Cost {
        self.cost.saturating_add(self.estimate)
    }

    /// Whether `node` already appears on this path.
    pub fn visits(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Visited nodes in order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Consume the candidate, yielding its node sequence and cost.
    pub fn into_parts(self) -> (Vec<NodeId>, Cost) {
        (self.nodes, self.cost)
    }
}

impl Ord for PathCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority()
            .cmp(&other.priority())
            .then_with(|| other.nodes.len().cmp(&self.nodes.len()))
            .then_with(|| self.last().cmp(&other.last()))
    }
}

impl PartialOrd for PathCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PathCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PathCandidate {}

/// Min-frontier of [`PathCandidate`]s; `pop` yields the best candidate under
/// the ordering above.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<PathCandidate>>,
}

impl PriorityFrontier {
    /// An empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate.
    pub fn push(&mut self, candidate: PathCandidate) {
        self.heap.push(Reverse(candidate));
    }

    /// Remove and return the best candidate, if any.
    pub fn pop(&mut self) -> Option<PathCandidate> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }

    /// Number of queued candidates.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier has been exhausted.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
