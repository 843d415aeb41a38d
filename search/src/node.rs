//! Core search node and frontier key types.

use ferry_kernel::proof::hash::ContentHash;
use ferry_kernel::puzzle::PuzzleState;

/// An immutable node in the search arena.
///
/// `node_id` is the node's index in the arena, so `parent_id` is a direct
/// index lookup. The parent link is used only for path reconstruction.
#[derive(Debug, Clone)]
pub struct SearchNodeV1 {
    /// Arena index, assigned in creation order.
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// The configuration this node stands for.
    pub state: PuzzleState,
    /// `sha256` of the state's identity bytes.
    pub state_fingerprint: ContentHash,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl SearchNodeV1 {
    /// `score + move_count` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.state.ordering_key()
    }

    /// Crossings from the root (tree depth).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.state.move_count()
    }
}

/// The frontier ordering key: `(f_cost, creation_order)`.
///
/// Lower `f_cost` first, then older `creation_order`. Popping by this key is
/// the same order as appending children to a list and stable-sorting it by
/// `f_cost` after every expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&SearchNodeV1> for FrontierKey {
    fn from(node: &SearchNodeV1) -> Self {
        Self {
            f_cost: node.f_cost(),
            creation_order: node.creation_order,
        }
    }
}
