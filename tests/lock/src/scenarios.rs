//! Known puzzle instances with their locked search outcomes.
//!
//! The counts pin the exact best-first order: any change to successor
//! enumeration, the heuristic, tie-breaking or the pop-time checks moves at
//! least one of them.

use ferry_kernel::puzzle::PuzzleParams;
use ferry_search::search::{search, SearchResult};

/// One locked instance.
#[derive(Debug, Clone, Copy)]
pub struct KnownScenario {
    pub people: u32,
    pub capacity: u32,
    pub max_crossings: u32,
    /// Crossings in the returned solution, `None` for no solution.
    pub crossings: Option<u32>,
    pub total_pops: u64,
    pub total_expansions: u64,
    pub total_skipped_closed: u64,
    pub total_skipped_crossing_cap: u64,
    /// Nodes created, root included.
    pub nodes_created: usize,
    pub frontier_high_water: u64,
}

impl KnownScenario {
    /// # Panics
    ///
    /// Panics if the scenario's capacity is below two.
    #[must_use]
    pub fn params(&self) -> PuzzleParams {
        PuzzleParams::new(self.people, self.capacity, self.max_crossings)
            .expect("scenario params are valid")
    }

    #[must_use]
    pub fn solve(&self) -> SearchResult {
        search(&self.params())
    }

    /// `N/M/K` label for assertion messages.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}/{}", self.people, self.capacity, self.max_crossings)
    }
}

/// `((N, M, K), crossings, (pops, expansions, closed skips, cap skips), nodes, high water)`.
type Row = (
    (u32, u32, u32),
    Option<u32>,
    (u64, u64, u64, u64),
    usize,
    u64,
);

const ROWS: &[Row] = &[
    ((3, 2, 20), Some(11), (29, 14, 14, 0), 31, 6),
    ((3, 2, 11), Some(11), (29, 14, 14, 0), 31, 6),
    ((3, 2, 10), None, (27, 12, 13, 2), 27, 6),
    ((3, 2, 5), None, (16, 7, 8, 1), 16, 6),
    ((0, 2, 0), Some(0), (1, 0, 0, 0), 1, 1),
    ((1, 2, 0), None, (1, 0, 0, 1), 1, 1),
    ((1, 2, 1), Some(1), (4, 1, 0, 2), 4, 3),
    ((2, 2, 20), Some(5), (19, 9, 9, 0), 21, 7),
    ((4, 2, 50), None, (23, 11, 12, 0), 23, 6),
    ((4, 3, 20), Some(9), (50, 20, 29, 0), 56, 12),
    ((5, 3, 30), Some(11), (62, 26, 35, 0), 70, 13),
    ((10, 4, 100), Some(17), (163, 52, 110, 0), 185, 36),
    ((20, 5, 200), Some(33), (337, 98, 238, 0), 390, 59),
];

impl From<&Row> for KnownScenario {
    fn from(row: &Row) -> Self {
        let &((people, capacity, max_crossings), crossings, counts, nodes_created, high_water) =
            row;
        let (total_pops, total_expansions, total_skipped_closed, total_skipped_crossing_cap) =
            counts;
        Self {
            people,
            capacity,
            max_crossings,
            crossings,
            total_pops,
            total_expansions,
            total_skipped_closed,
            total_skipped_crossing_cap,
            nodes_created,
            frontier_high_water: high_water,
        }
    }
}

/// Every locked instance.
#[must_use]
pub fn known_scenarios() -> Vec<KnownScenario> {
    ROWS.iter().map(KnownScenario::from).collect()
}

/// Classic three-and-three with a two-seat boat and a cap of 20.
#[must_use]
pub fn classic() -> KnownScenario {
    KnownScenario::from(&ROWS[0])
}
