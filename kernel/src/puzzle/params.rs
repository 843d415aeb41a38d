//! Puzzle-global constants.

/// Smallest boat that can make progress: one passenger across, one back.
pub const MIN_BOAT_CAPACITY: u32 = 2;

/// Error constructing [`PuzzleParams`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// Boat capacity below [`MIN_BOAT_CAPACITY`].
    CapacityTooSmall { capacity: u32 },
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityTooSmall { capacity } => write!(
                f,
                "boat capacity {capacity} is below the minimum of {MIN_BOAT_CAPACITY}"
            ),
        }
    }
}

impl std::error::Error for ParamsError {}

/// Validated puzzle constants.
///
/// - `people`: N, the number of missionaries (and of cannibals).
/// - `capacity`: M, boat seats. Always `>= MIN_BOAT_CAPACITY`.
/// - `max_crossings`: K, the crossing cap applied per path.
///
/// Fields are private so that `capacity >= 2` holds for every value in
/// existence; the heuristic divides by `capacity - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleParams {
    people: u32,
    capacity: u32,
    max_crossings: u32,
}

impl PuzzleParams {
    /// Build params, rejecting a boat that cannot carry two.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::CapacityTooSmall`] if `capacity < 2`.
    pub fn new(people: u32, capacity: u32, max_crossings: u32) -> Result<Self, ParamsError> {
        if capacity < MIN_BOAT_CAPACITY {
            return Err(ParamsError::CapacityTooSmall { capacity });
        }
        Ok(Self {
            people,
            capacity,
            max_crossings,
        })
    }

    /// N: missionaries (equal to cannibals).
    #[must_use]
    pub fn people(&self) -> u32 {
        self.people
    }

    /// M: boat capacity.
    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// K: maximum crossings per path.
    #[must_use]
    pub fn max_crossings(&self) -> u32 {
        self.max_crossings
    }

    /// Canonical JSON projection, used by graph metadata and reports.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "capacity": self.capacity,
            "max_crossings": self.max_crossings,
            "people": self.people,
        })
    }
}
