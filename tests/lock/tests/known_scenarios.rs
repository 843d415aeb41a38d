//! Locked outcomes for known instances: solution length and every search
//! counter, plus the shape of the classic solution path.

use ferry_kernel::puzzle::BoatSide;
use ferry_search::graph::TerminationReasonV1;
use lock_tests::scenarios::{classic, known_scenarios};

#[test]
fn known_scenarios_match_locked_counters() {
    for scenario in known_scenarios() {
        let label = scenario.label();
        let result = scenario.solve();
        let meta = &result.graph.metadata;

        assert_eq!(result.crossings(), scenario.crossings, "{label}: crossings");
        assert_eq!(meta.total_pops, scenario.total_pops, "{label}: pops");
        assert_eq!(
            meta.total_expansions, scenario.total_expansions,
            "{label}: expansions"
        );
        assert_eq!(
            meta.total_skipped_closed, scenario.total_skipped_closed,
            "{label}: closed skips"
        );
        assert_eq!(
            meta.total_skipped_crossing_cap, scenario.total_skipped_crossing_cap,
            "{label}: cap skips"
        );
        assert_eq!(result.nodes.len(), scenario.nodes_created, "{label}: nodes");
        assert_eq!(
            meta.frontier_high_water, scenario.frontier_high_water,
            "{label}: high water"
        );
        assert_eq!(
            meta.closed_set_size, scenario.total_expansions,
            "{label}: one closed entry per expansion"
        );
        assert_eq!(
            meta.total_children_generated,
            scenario.nodes_created as u64 - 1,
            "{label}: every node but the root is a generated child"
        );
    }
}

#[test]
fn classic_solution_path_is_locked() {
    let result = classic().solve();
    let path = result.solution_path().unwrap();

    // (left missionaries, left cannibals, boat) at each step.
    let expected = [
        (3, 3, BoatSide::Left),
        (3, 1, BoatSide::Right),
        (3, 2, BoatSide::Left),
        (3, 0, BoatSide::Right),
        (3, 1, BoatSide::Left),
        (1, 1, BoatSide::Right),
        (2, 2, BoatSide::Left),
        (0, 2, BoatSide::Right),
        (0, 3, BoatSide::Left),
        (0, 1, BoatSide::Right),
        (0, 2, BoatSide::Left),
        (0, 0, BoatSide::Right),
    ];
    assert_eq!(path.len(), expected.len());
    for (i, (state, &(ml, cl, boat))) in path.iter().zip(expected.iter()).enumerate() {
        assert_eq!(state.missionaries_left(), ml, "step {i}");
        assert_eq!(state.cannibals_left(), cl, "step {i}");
        assert_eq!(state.boat(), boat, "step {i}");
        assert_eq!(state.move_count() as usize, i, "step {i}");
    }

    assert_eq!(
        result.graph.metadata.termination_reason,
        TerminationReasonV1::GoalReached { node_id: 28 }
    );
}

#[test]
fn first_expansion_order_is_missionaries_outer() {
    let result = classic().solve();
    // Root children, as (missionaries, cannibals) carried: (0,1), (0,2), (1,1).
    let carried: Vec<(u32, u32)> = result.nodes[1..4]
        .iter()
        .map(|n| (n.state.missionaries_right(), n.state.cannibals_right()))
        .collect();
    assert_eq!(carried, vec![(0, 1), (0, 2), (1, 1)]);
}
