//! Best-first frontier with a closed set of expanded configurations.
//!
//! The heap holds arena indices, not nodes; the search loop owns the arena.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use ferry_kernel::puzzle::StateKey;

use crate::node::FrontierKey;

/// A frontier entry: an arena index with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best node
/// - A `HashSet<StateKey>` of configurations already expanded
///
/// Pushing never consults the closed set: a child whose configuration is
/// already closed still enters the frontier and is discarded when popped.
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    closed: HashSet<StateKey>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            closed: HashSet::new(),
            high_water: 0,
        }
    }

    /// Push an arena index with its key.
    pub fn push(&mut self, key: FrontierKey, node_id: u64) {
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node_id,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best (lowest `f_cost`, then oldest) entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<(FrontierKey, u64)> {
        self.heap.pop().map(|e| (e.key.0, e.node_id))
    }

    /// Mark a configuration as expanded.
    ///
    /// Returns `false` if it was already closed.
    pub fn close(&mut self, key: StateKey) -> bool {
        self.closed.insert(key)
    }

    /// Whether a configuration has been expanded.
    #[must_use]
    pub fn is_closed(&self, key: &StateKey) -> bool {
        self.closed.contains(key)
    }

    /// Number of closed configurations.
    #[must_use]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
