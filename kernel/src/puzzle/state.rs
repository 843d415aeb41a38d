//! `PuzzleState`: one configuration of the two banks and the boat.

use std::hash::{Hash, Hasher};

use super::params::PuzzleParams;
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Length of [`PuzzleState::identity_bytes`]: four `u32` counts and a boat byte.
pub const IDENTITY_LEN: usize = 17;

/// Which bank the boat is moored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoatSide {
    Left,
    Right,
}

impl BoatSide {
    /// The bank the boat sails to.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Identity-plane encoding.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    /// Lowercase name used in JSON artifacts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for BoatSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

/// Head counts on one bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Bank {
    pub missionaries: u32,
    pub cannibals: u32,
}

impl Bank {
    #[must_use]
    pub const fn new(missionaries: u32, cannibals: u32) -> Self {
        Self {
            missionaries,
            cannibals,
        }
    }

    /// Missionaries are never outnumbered where any are present.
    #[must_use]
    pub const fn is_safe(&self) -> bool {
        self.missionaries == 0 || self.cannibals <= self.missionaries
    }

    /// Nobody on this bank.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.missionaries == 0 && self.cannibals == 0
    }
}

/// Identity of a state for closed-set membership.
///
/// Two states with the same banks and boat side are the same configuration,
/// however many crossings it took to reach them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey {
    pub left: Bank,
    pub right: Bank,
    pub boat: BoatSide,
}

/// Error building a state from explicit bank counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Bank totals do not add up to N for one of the two groups.
    Unbalanced {
        people: u32,
        missionaries: u64,
        cannibals: u64,
    },
    /// Missionaries are outnumbered on the given bank.
    Unsafe { side: BoatSide },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbalanced {
                people,
                missionaries,
                cannibals,
            } => write!(
                f,
                "banks hold {missionaries} missionaries and {cannibals} cannibals, expected {people} of each"
            ),
            Self::Unsafe { side } => write!(f, "missionaries outnumbered on the {side} bank"),
        }
    }
}

impl std::error::Error for StateError {}

/// One puzzle configuration.
///
/// Immutable once built. Equality and hashing consider only the banks and the
/// boat ([`StateKey`]); `move_count` and `score` ride along for ordering.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    left: Bank,
    right: Bank,
    boat: BoatSide,
    move_count: u32,
    score: i64,
}

impl PuzzleState {
    /// Everyone on the left bank with the boat, no crossings made.
    #[must_use]
    pub fn initial(params: &PuzzleParams) -> Self {
        let left = Bank::new(params.people(), params.people());
        Self {
            left,
            right: Bank::default(),
            boat: BoatSide::Left,
            move_count: 0,
            score: heuristic(params, left, BoatSide::Left),
        }
    }

    /// A state with explicit banks, for starting a search mid-puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Unbalanced`] if either group does not total N,
    /// or [`StateError::Unsafe`] if a bank breaks the safety rule.
    pub fn with_banks(
        params: &PuzzleParams,
        left: Bank,
        right: Bank,
        boat: BoatSide,
        move_count: u32,
    ) -> Result<Self, StateError> {
        let missionaries = u64::from(left.missionaries) + u64::from(right.missionaries);
        let cannibals = u64::from(left.cannibals) + u64::from(right.cannibals);
        let people = u64::from(params.people());
        if missionaries != people || cannibals != people {
            return Err(StateError::Unbalanced {
                people: params.people(),
                missionaries,
                cannibals,
            });
        }
        if !left.is_safe() {
            return Err(StateError::Unsafe {
                side: BoatSide::Left,
            });
        }
        if !right.is_safe() {
            return Err(StateError::Unsafe {
                side: BoatSide::Right,
            });
        }
        Ok(Self {
            left,
            right,
            boat,
            move_count,
            score: heuristic(params, left, boat),
        })
    }

    #[must_use]
    pub fn cannibals_left(&self) -> u32 {
        self.left.cannibals
    }

    #[must_use]
    pub fn missionaries_left(&self) -> u32 {
        self.left.missionaries
    }

    #[must_use]
    pub fn cannibals_right(&self) -> u32 {
        self.right.cannibals
    }

    #[must_use]
    pub fn missionaries_right(&self) -> u32 {
        self.right.missionaries
    }

    #[must_use]
    pub fn left(&self) -> Bank {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> Bank {
        self.right
    }

    #[must_use]
    pub fn boat(&self) -> BoatSide {
        self.boat
    }

    /// Crossings taken to reach this state.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Heuristic score fixed at construction.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Best-first ordering key: `score + move_count`, lower first.
    #[must_use]
    pub fn ordering_key(&self) -> i64 {
        self.score + i64::from(self.move_count)
    }

    /// Everyone has reached the right bank.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.left.is_empty()
    }

    #[must_use]
    pub fn key(&self) -> StateKey {
        StateKey {
            left: self.left,
            right: self.right,
            boat: self.boat,
        }
    }

    /// Identity plane: `ml, cl, mr, cr` as little-endian `u32`, then the boat byte.
    #[must_use]
    pub fn identity_bytes(&self) -> [u8; IDENTITY_LEN] {
        let mut out = [0u8; IDENTITY_LEN];
        let counts = [
            self.left.missionaries,
            self.left.cannibals,
            self.right.missionaries,
            self.right.cannibals,
        ];
        for (chunk, count) in out.chunks_exact_mut(4).zip(counts) {
            chunk.copy_from_slice(&count.to_le_bytes());
        }
        out[IDENTITY_LEN - 1] = self.boat.as_byte();
        out
    }

    /// `sha256` of the identity plane under [`HashDomain::PuzzleState`].
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::PuzzleState, &self.identity_bytes())
    }

    fn departure(&self) -> Bank {
        match self.boat {
            BoatSide::Left => self.left,
            BoatSide::Right => self.right,
        }
    }

    fn arrival(&self) -> Bank {
        match self.boat {
            BoatSide::Left => self.right,
            BoatSide::Right => self.left,
        }
    }

    /// Whether `m` missionaries and `c` cannibals may cross from the boat's bank.
    ///
    /// 1. Boat rule: a boat without missionaries carries `1..=M` cannibals;
    ///    otherwise `m + c <= M` and `c <= m`.
    /// 2. Departure bank stays safe after they leave.
    /// 3. Arrival bank is safe once they land.
    ///
    /// Asking for more people than stand on the departure bank is illegal.
    #[must_use]
    pub fn is_legal_move(&self, params: &PuzzleParams, m: u32, c: u32) -> bool {
        let from = self.departure();
        if m > from.missionaries || c > from.cannibals {
            return false;
        }

        let capacity = u64::from(params.capacity());
        let boat_ok = if m == 0 {
            c >= 1 && u64::from(c) <= capacity
        } else {
            u64::from(m) + u64::from(c) <= capacity && c <= m
        };
        if !boat_ok {
            return false;
        }

        let remaining = Bank::new(from.missionaries - m, from.cannibals - c);
        if !remaining.is_safe() {
            return false;
        }

        let to = self.arrival();
        match (
            to.missionaries.checked_add(m),
            to.cannibals.checked_add(c),
        ) {
            (Some(missionaries), Some(cannibals)) => Bank::new(missionaries, cannibals).is_safe(),
            _ => false,
        }
    }

    /// Every legal crossing from this state, in enumeration order.
    ///
    /// Missionaries count is the outer loop, cannibals the inner, both from
    /// zero. Counts above the boat capacity can never be legal and are not
    /// visited.
    #[must_use]
    pub fn successors(&self, params: &PuzzleParams) -> Vec<Self> {
        let from = self.departure();
        let max_m = from.missionaries.min(params.capacity());
        let max_c = from.cannibals.min(params.capacity());

        let mut children = Vec::new();
        for m in 0..=max_m {
            for c in 0..=max_c {
                if self.is_legal_move(params, m, c) {
                    children.push(self.cross(params, m, c));
                }
            }
        }
        children
    }

    /// Apply a crossing already checked by [`Self::is_legal_move`].
    fn cross(&self, params: &PuzzleParams, m: u32, c: u32) -> Self {
        let (left, right) = match self.boat {
            BoatSide::Left => (
                Bank::new(self.left.missionaries - m, self.left.cannibals - c),
                Bank::new(self.right.missionaries + m, self.right.cannibals + c),
            ),
            BoatSide::Right => (
                Bank::new(self.left.missionaries + m, self.left.cannibals + c),
                Bank::new(self.right.missionaries - m, self.right.cannibals - c),
            ),
        };
        let boat = self.boat.opposite();
        Self {
            left,
            right,
            boat,
            move_count: self.move_count + 1,
            score: heuristic(params, left, boat),
        }
    }

    /// Canonical JSON projection of one path step.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "boat": self.boat.as_str(),
            "cannibals_left": self.left.cannibals,
            "cannibals_right": self.right.cannibals,
            "missionaries_left": self.left.missionaries,
            "missionaries_right": self.right.missionaries,
            "move_count": self.move_count,
            "score": self.score,
        })
    }
}

/// Estimated crossings remaining, from the left bank and the boat side.
///
/// `r = (ml + cl) mod (M - 1)`: `r > 1` adds one, `r == 0` subtracts one.
/// A boat on the right adds one for the trip back. Not admissible; the
/// best-first order depends on exactly these values.
#[must_use]
pub fn heuristic(params: &PuzzleParams, left: Bank, boat: BoatSide) -> i64 {
    let on_left = u64::from(left.missionaries) + u64::from(left.cannibals);
    let r = on_left % u64::from(params.capacity() - 1);

    let mut score = match r {
        0 => -1,
        1 => 0,
        _ => 1,
    };
    if boat == BoatSide::Right {
        score += 1;
    }
    score
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const RULE: &str = "-------------------------------------";
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Left side -> C: {} | M: {}",
            self.left.cannibals, self.left.missionaries
        )?;
        writeln!(f)?;
        writeln!(f, "Boat is {}", self.boat)?;
        writeln!(f)?;
        writeln!(
            f,
            "Right side -> C: {} | M: {}",
            self.right.cannibals, self.right.missionaries
        )?;
        writeln!(f, "{RULE}")
    }
}
