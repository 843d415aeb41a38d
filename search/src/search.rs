//! Search entry point and pop/expand loop.

use ferry_kernel::puzzle::{PuzzleParams, PuzzleState};

use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::graph::{
    FrontierPopKeyV1, PopEventV1, PopOutcomeV1, SearchGraphMetadata, SearchGraphNodeSummaryV1,
    SearchGraphV1, TerminationReasonV1,
};
use crate::node::{FrontierKey, SearchNodeV1};

/// Result of a search execution.
///
/// Always contains a complete `SearchGraphV1` audit trail regardless of how
/// the search terminated. `goal_node == None` is the "no solution within K
/// crossings" outcome, not an error.
#[derive(Debug)]
pub struct SearchResult {
    /// The terminal node (if found).
    pub goal_node: Option<SearchNodeV1>,
    /// The complete search graph audit trail.
    pub graph: SearchGraphV1,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<SearchNodeV1>,
}

impl SearchResult {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReasonV1::GoalReached { .. }
        )
    }

    /// Crossings in the solution, if there is one.
    #[must_use]
    pub fn crossings(&self) -> Option<u32> {
        self.goal_node.as_ref().map(SearchNodeV1::depth)
    }

    /// States from root to goal, if a goal was reached.
    #[must_use]
    pub fn solution_path(&self) -> Option<Vec<&PuzzleState>> {
        let goal = self.goal_node.as_ref()?;
        reconstruct_path(&self.nodes, goal.node_id)
            .into_iter()
            .map(|id| self.nodes.get(slot(id)).map(|n| &n.state))
            .collect()
    }
}

/// Run best-first search from the initial configuration of `params`.
#[must_use]
pub fn search(params: &PuzzleParams) -> SearchResult {
    run(PuzzleState::initial(params), params)
}

/// Run best-first search from an arbitrary root.
///
/// # Errors
///
/// Returns [`SearchError::RootOutsideParams`] if the root does not hold
/// exactly N missionaries and N cannibals across its banks. No
/// `SearchGraphV1` is produced in this case because no search steps were
/// taken.
pub fn search_from(root: PuzzleState, params: &PuzzleParams) -> Result<SearchResult, SearchError> {
    let missionaries = u64::from(root.missionaries_left()) + u64::from(root.missionaries_right());
    let cannibals = u64::from(root.cannibals_left()) + u64::from(root.cannibals_right());
    let people = u64::from(params.people());
    if missionaries != people || cannibals != people {
        return Err(SearchError::RootOutsideParams {
            people: params.people(),
            missionaries,
            cannibals,
        });
    }
    Ok(run(root, params))
}

#[derive(Debug, Default)]
struct Counters {
    expansions: u64,
    children_generated: u64,
    skipped_closed: u64,
    skipped_crossing_cap: u64,
}

#[allow(clippy::cast_possible_truncation)]
fn slot(node_id: u64) -> usize {
    node_id as usize
}

fn run(root: PuzzleState, params: &PuzzleParams) -> SearchResult {
    let mut frontier = BestFirstFrontier::new();
    let mut nodes: Vec<SearchNodeV1> = Vec::new();
    let mut pops: Vec<PopEventV1> = Vec::new();
    let mut counters = Counters::default();
    let mut next_creation_order: u64 = 0;

    let root_fp = root.fingerprint();
    let root_node = SearchNodeV1 {
        node_id: 0,
        parent_id: None,
        state: root,
        state_fingerprint: root_fp.clone(),
        creation_order: next_creation_order,
    };
    next_creation_order += 1;
    frontier.push(FrontierKey::from(&root_node), root_node.node_id);
    nodes.push(root_node);

    let mut termination_reason = TerminationReasonV1::FrontierExhausted;

    while let Some((key, node_id)) = frontier.pop() {
        let current = &nodes[slot(node_id)];
        let state = current.state.clone();
        let state_fingerprint = current.state_fingerprint.hex_digest().to_string();

        let outcome = if state.is_terminal() {
            PopOutcomeV1::GoalReached
        } else if frontier.is_closed(&state.key()) {
            counters.skipped_closed += 1;
            PopOutcomeV1::SkippedClosed
        } else if state.move_count() >= params.max_crossings() {
            counters.skipped_crossing_cap += 1;
            PopOutcomeV1::SkippedCrossingCap
        } else {
            frontier.close(state.key());
            counters.expansions += 1;

            let successors = state.successors(params);
            let mut children = Vec::with_capacity(successors.len());
            for child_state in successors {
                let child = SearchNodeV1 {
                    node_id: nodes.len() as u64,
                    parent_id: Some(node_id),
                    state_fingerprint: child_state.fingerprint(),
                    state: child_state,
                    creation_order: next_creation_order,
                };
                next_creation_order += 1;
                frontier.push(FrontierKey::from(&child), child.node_id);
                children.push(child.node_id);
                nodes.push(child);
            }
            counters.children_generated += children.len() as u64;
            PopOutcomeV1::Expanded { children }
        };

        let found_goal = outcome == PopOutcomeV1::GoalReached;
        pops.push(PopEventV1 {
            pop_order: pops.len() as u64,
            node_id,
            state_fingerprint,
            pop_key: FrontierPopKeyV1 {
                f_cost: key.f_cost,
                creation_order: key.creation_order,
            },
            outcome,
        });

        if found_goal {
            termination_reason = TerminationReasonV1::GoalReached { node_id };
            break;
        }
    }

    let goal_node = match &termination_reason {
        TerminationReasonV1::GoalReached { node_id } => nodes.get(slot(*node_id)).cloned(),
        TerminationReasonV1::FrontierExhausted => None,
    };

    let graph = build_graph(
        pops,
        &nodes,
        termination_reason,
        &counters,
        &frontier,
        params,
        root_fp.hex_digest(),
    );

    SearchResult {
        goal_node,
        graph,
        nodes,
    }
}

/// Reconstruct the path from root to a goal node.
///
/// Returns node IDs root first. An unknown `goal_node_id` yields just that id.
#[must_use]
pub fn reconstruct_path(nodes: &[SearchNodeV1], goal_node_id: u64) -> Vec<u64> {
    let mut path = Vec::new();
    let mut current_id = Some(goal_node_id);

    while let Some(id) = current_id {
        path.push(id);
        current_id = nodes.get(slot(id)).and_then(|n| n.parent_id);
    }

    path.reverse();
    path
}

fn build_graph(
    pops: Vec<PopEventV1>,
    all_nodes: &[SearchNodeV1],
    termination_reason: TerminationReasonV1,
    counters: &Counters,
    frontier: &BestFirstFrontier,
    params: &PuzzleParams,
    root_fp_hex: &str,
) -> SearchGraphV1 {
    // Every node is pushed once, so it is popped at most once.
    let mut pop_orders: Vec<Option<u64>> = vec![None; all_nodes.len()];
    for event in &pops {
        if let Some(entry) = pop_orders.get_mut(slot(event.node_id)) {
            *entry = Some(event.pop_order);
        }
    }

    let goal_id = match &termination_reason {
        TerminationReasonV1::GoalReached { node_id } => Some(*node_id),
        TerminationReasonV1::FrontierExhausted => None,
    };

    let node_summaries: Vec<SearchGraphNodeSummaryV1> = all_nodes
        .iter()
        .zip(pop_orders)
        .map(|(n, pop_order)| SearchGraphNodeSummaryV1 {
            node_id: n.node_id,
            parent_id: n.parent_id,
            state_fingerprint: n.state_fingerprint.hex_digest().to_string(),
            depth: n.depth(),
            f_cost: n.f_cost(),
            is_goal: goal_id == Some(n.node_id),
            pop_order,
        })
        .collect();

    SearchGraphV1 {
        metadata: SearchGraphMetadata {
            params: *params,
            root_state_fingerprint: root_fp_hex.to_string(),
            total_pops: pops.len() as u64,
            total_expansions: counters.expansions,
            total_children_generated: counters.children_generated,
            total_skipped_closed: counters.skipped_closed,
            total_skipped_crossing_cap: counters.skipped_crossing_cap,
            closed_set_size: frontier.closed_len() as u64,
            frontier_high_water: frontier.high_water(),
            termination_reason,
        },
        pops,
        node_summaries,
    }
}
