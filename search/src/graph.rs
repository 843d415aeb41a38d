//! `SearchGraphV1`: frontier-pop audit log.
//!
//! The normative decision surface is the ordered list of `PopEventV1`
//! entries: one per frontier pop, whatever happened to the popped node.
//! Node summaries are a derived index for path reconstruction.

use ferry_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ferry_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use ferry_kernel::puzzle::PuzzleParams;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraphV1 {
    /// Ordered pop events (normative decision surface).
    pub pops: Vec<PopEventV1>,
    /// Derived node index sorted by `node_id` ascending.
    pub node_summaries: Vec<SearchGraphNodeSummaryV1>,
    /// Aggregate metadata.
    pub metadata: SearchGraphMetadata,
}

/// A single frontier pop and what the driver did with it.
#[derive(Debug, Clone)]
pub struct PopEventV1 {
    /// Total order of frontier pops.
    pub pop_order: u64,
    /// The popped node.
    pub node_id: u64,
    /// Hex fingerprint of the popped node's state.
    pub state_fingerprint: String,
    /// The frontier key at time of pop.
    pub pop_key: FrontierPopKeyV1,
    /// Outcome of the pop.
    pub outcome: PopOutcomeV1,
}

/// The frontier ordering key recorded at pop time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierPopKeyV1 {
    pub f_cost: i64,
    pub creation_order: u64,
}

/// What happened to a popped node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopOutcomeV1 {
    /// The node is terminal; search stops.
    GoalReached,
    /// The node was closed and its successors pushed.
    Expanded { children: Vec<u64> },
    /// Its configuration had already been expanded.
    SkippedClosed,
    /// Its move count has reached the crossing cap.
    SkippedCrossingCap,
}

/// Derived node summary for path reconstruction.
#[derive(Debug, Clone)]
pub struct SearchGraphNodeSummaryV1 {
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub state_fingerprint: String,
    pub depth: u32,
    pub f_cost: i64,
    pub is_goal: bool,
    pub pop_order: Option<u64>,
}

/// Aggregate metadata.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    /// Echo of the puzzle constants.
    pub params: PuzzleParams,
    pub root_state_fingerprint: String,

    // Counters
    pub total_pops: u64,
    pub total_expansions: u64,
    pub total_children_generated: u64,
    pub total_skipped_closed: u64,
    pub total_skipped_crossing_cap: u64,
    pub closed_set_size: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReasonV1,
}

/// Why the search terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A terminal state was popped.
    GoalReached { node_id: u64 },
    /// Frontier emptied without reaching the far bank within the cap.
    FrontierExhausted,
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraphV1 {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// `canonical_hash(SearchGraph, canonical_json_bytes)`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
            "pops": self.pops.iter().map(pop_event_to_json).collect::<Vec<_>>(),
        })
    }
}

fn pop_event_to_json(e: &PopEventV1) -> serde_json::Value {
    serde_json::json!({
        "node_id": e.node_id,
        "outcome": outcome_to_json(&e.outcome),
        "pop_key": {
            "creation_order": e.pop_key.creation_order,
            "f_cost": e.pop_key.f_cost,
        },
        "pop_order": e.pop_order,
        "state_fingerprint": e.state_fingerprint,
    })
}

fn outcome_to_json(o: &PopOutcomeV1) -> serde_json::Value {
    match o {
        PopOutcomeV1::GoalReached => serde_json::json!({"type": "goal_reached"}),
        PopOutcomeV1::Expanded { children } => {
            serde_json::json!({"children": children, "type": "expanded"})
        }
        PopOutcomeV1::SkippedClosed => serde_json::json!({"type": "skipped_closed"}),
        PopOutcomeV1::SkippedCrossingCap => serde_json::json!({"type": "skipped_crossing_cap"}),
    }
}

fn node_summary_to_json(n: &SearchGraphNodeSummaryV1) -> serde_json::Value {
    serde_json::json!({
        "depth": n.depth,
        "f_cost": n.f_cost,
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
        "pop_order": n.pop_order,
        "state_fingerprint": n.state_fingerprint,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "closed_set_size": m.closed_set_size,
        "frontier_high_water": m.frontier_high_water,
        "params": m.params.to_json(),
        "root_state_fingerprint": m.root_state_fingerprint,
        "termination_reason": termination_reason_to_json(&m.termination_reason),
        "total_children_generated": m.total_children_generated,
        "total_expansions": m.total_expansions,
        "total_pops": m.total_pops,
        "total_skipped_closed": m.total_skipped_closed,
        "total_skipped_crossing_cap": m.total_skipped_crossing_cap,
    })
}

/// JSON form of a termination reason; also embedded in solution reports.
#[must_use]
pub fn termination_reason_to_json(r: &TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": "goal_reached"})
        }
        TerminationReasonV1::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
    }
}
