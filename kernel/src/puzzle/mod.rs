//! The river-crossing state model.
//!
//! [`PuzzleParams`] is the immutable context (N, M, K) shared by every state;
//! [`PuzzleState`] is one bank/boat configuration. States never carry the
//! params themselves, so every state-constructing operation takes them by
//! reference.

mod params;
mod state;

pub use params::{ParamsError, PuzzleParams, MIN_BOAT_CAPACITY};
pub use state::{heuristic, Bank, BoatSide, PuzzleState, StateError, StateKey, IDENTITY_LEN};
