//! Test-only matrix fixtures shared by unit, integration, and bench code.

use crate::{Cost, CostMatrix, NodeId};

/// The documented three-node instance: optimal tour `[0, 1, 2, 0]`, cost 6.
#[expect(clippy::expect_used, reason = "fixture input is statically valid")]
pub fn triangle() -> CostMatrix {
    CostMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]])
        .expect("triangle fixture is square with a zero diagonal")
}

/// `n` equally spaced collinear points: `cost(i, j) = |i - j|`.
///
/// Greedy nearest-neighbour is optimal here (walk out, walk back), which the
/// comparison tests rely on.
#[expect(clippy::expect_used, reason = "fixture input is statically valid")]
pub fn collinear(n: usize) -> CostMatrix {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| Cost::try_from(i.abs_diff(j)).unwrap_or(Cost::MAX))
                .collect()
        })
        .collect();
    CostMatrix::from_rows(rows).expect("collinear fixture is square with a zero diagonal")
}

/// Dense unit-cost matrix with every edge touching `isolated` removed.
///
/// The isolated target makes a closed tour impossible, so search strategies
/// must report failure instead of hanging.
#[expect(clippy::expect_used, reason = "fixture input is statically valid")]
pub fn isolated_target(n: usize, isolated: NodeId) -> CostMatrix {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        Some(0)
                    } else if i == isolated || j == isolated {
                        None
                    } else {
                        Some(1)
                    }
                })
                .collect()
        })
        .collect();
    CostMatrix::from_sparse_rows(rows).expect("isolated fixture is square with a zero diagonal")
}

/// Deterministic symmetric dense matrix with costs in `1..=32`.
///
/// A cheap hash mix stands in for a real distance field so benches and tests
/// get varied instances without a random dependency in this crate.
#[expect(clippy::expect_used, reason = "fixture input is statically valid")]
pub fn scrambled(n: usize, seed: u64) -> CostMatrix {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { 0 } else { mixed_cost(i.min(j), i.max(j), seed) })
                .collect()
        })
        .collect();
    CostMatrix::from_rows(rows).expect("scrambled fixture is square with a zero diagonal")
}

fn mixed_cost(a: usize, b: usize, seed: u64) -> Cost {
    let mix = (a as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add((b as u64).wrapping_mul(0x85EB_CA6B_C2B2_AE35))
        .wrapping_add(seed);
    let small = u32::try_from((mix >> 7) & 31).unwrap_or(0);
    small + 1
}
