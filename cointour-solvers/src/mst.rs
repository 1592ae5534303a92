//! Minimum-spanning-tree lower bound on the remaining tour cost.
//!
//! A Hamiltonian path through a node set costs at least that set's spanning
//! tree, so the MST over the depot plus the unvisited targets is an
//! admissible estimate for the A* strategy.

use cointour_core::{Cost, CostMatrix, DEPOT, NodeId};

/// Lower bound on the cost to complete a tour from a partial path.
///
/// Three cases, by how much of the matrix `visited` covers:
/// - only the depot visited: MST over all nodes;
/// - every node visited (only the return leg remains): zero, the closing
///   edge is priced exactly by the caller;
/// - otherwise: MST over the depot plus the unvisited targets.
///
/// Returns [`None`] when the relevant subset cannot be connected, in which
/// case no completion exists and the candidate can be discarded.
pub fn remaining_lower_bound(matrix: &CostMatrix, visited: &[NodeId]) -> Option<Cost> {
    let n = matrix.len();
    if visited.len() >= n {
        return Some(0);
    }
    if visited.len() <= 1 {
        let all: Vec<NodeId> = matrix.nodes().collect();
        return spanning_cost(matrix, &all);
    }
    let mut subset = Vec::with_capacity(n - visited.len() + 1);
    subset.push(DEPOT);
    subset.extend(matrix.targets().filter(|node| !visited.contains(node)));
    spanning_cost(matrix, &subset)
}

/// Total weight of a minimum spanning tree over `nodes`, by Kruskal's
/// algorithm.
///
/// Candidate edges are sorted ascending by cost (ties by endpoint indices,
/// keeping the edge set deterministic) and joined through a disjoint-set
/// forest until `nodes.len() - 1` edges are in the tree. Returns [`None`]
/// when the available edges cannot connect the subset.
pub fn spanning_cost(matrix: &CostMatrix, nodes: &[NodeId]) -> Option<Cost> {
    if nodes.len() <= 1 {
        return Some(0);
    }
    let mut edges = Vec::new();
    for (ai, &a) in nodes.iter().enumerate() {
        for (bi, &b) in nodes.iter().enumerate().skip(ai + 1) {
            if let Some(cost) = matrix.edge(a, b) {
                edges.push((cost, ai, bi));
            }
        }
    }
    edges.sort_unstable();

    let mut sets = DisjointSets::new(nodes.len());
    let mut total: Cost = 0;
    let mut joined = 0;
    for (cost, ai, bi) in edges {
        if sets.union(ai, bi) {
            total = total.saturating_add(cost);
            joined += 1;
            if joined == nodes.len() - 1 {
                return Some(total);
            }
        }
    }
    None
}

/// Disjoint-set forest over subset positions, with path halving.
struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, start: usize) -> usize {
        let mut node = start;
        loop {
            let parent = self.parent.get(node).copied().unwrap_or(node);
            if parent == node {
                return node;
            }
            let grandparent = self.parent.get(parent).copied().unwrap_or(parent);
            if let Some(slot) = self.parent.get_mut(node) {
                *slot = grandparent;
            }
            node = grandparent;
        }
    }

    /// Merge the sets holding `a` and `b`; false when already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        if let Some(slot) = self.parent.get_mut(root_a) {
            *slot = root_b;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cointour_core::test_support::{isolated_target, triangle};
    use rstest::rstest;

    #[rstest]
    fn full_mst_of_the_triangle_takes_the_two_cheapest_edges() {
        let bound = remaining_lower_bound(&triangle(), &[0]).expect("connected");
        assert_eq!(bound, 1 + 2);
    }

    #[rstest]
    fn all_visited_estimates_zero() {
        let bound = remaining_lower_bound(&triangle(), &[0, 1, 2]).expect("closing leg only");
        assert_eq!(bound, 0);
    }

    #[rstest]
    fn partial_path_spans_depot_and_unvisited_only() {
        // Visited {0, 1}: subset {0, 2}, single edge of cost 2.
        let bound = remaining_lower_bound(&triangle(), &[0, 1]).expect("connected");
        assert_eq!(bound, 2);
    }

    #[rstest]
    fn disconnected_subset_has_no_bound() {
        let matrix = isolated_target(4, 2);
        assert_eq!(remaining_lower_bound(&matrix, &[0]), None);
    }

    #[rstest]
    fn singleton_subset_costs_nothing() {
        assert_eq!(spanning_cost(&triangle(), &[1]), Some(0));
    }
}
