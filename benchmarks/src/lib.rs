//! Shared helpers for ferry benchmark suites.

use ferry_kernel::puzzle::{PuzzleParams, PuzzleState};

/// A named instance for the macro suites.
pub struct Regime {
    pub name: &'static str,
    pub params: PuzzleParams,
}

/// Instances from trivial to large, solvable and exhausted.
///
/// # Panics
///
/// Panics if a built-in capacity is below two.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    [
        ("classic_3_2", 3, 2, 20),
        ("capped_3_2", 3, 2, 10),
        ("unsolvable_4_2", 4, 2, 50),
        ("medium_10_4", 10, 4, 100),
        ("wide_50_10", 50, 10, 500),
        ("deep_200_5", 200, 5, 2_000),
    ]
    .into_iter()
    .map(|(name, n, m, k)| Regime {
        name,
        params: PuzzleParams::new(n, m, k).expect("regime params are valid"),
    })
    .collect()
}

/// Every configuration reachable from the initial state, in breadth-first
/// order. Used as a realistic input set for per-state micro benchmarks.
#[must_use]
pub fn reachable_states(params: &PuzzleParams) -> Vec<PuzzleState> {
    let root = PuzzleState::initial(params);
    let mut seen = std::collections::HashSet::from([root.key()]);
    let mut out = vec![root];
    let mut next = 0;
    while next < out.len() {
        let children = out[next].successors(params);
        for child in children {
            if seen.insert(child.key()) {
                out.push(child);
            }
        }
        next += 1;
    }
    out
}
