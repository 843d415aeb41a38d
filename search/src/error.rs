//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Running out of frontier
//! without reaching the far bank is an ordinary outcome, expressed via
//! [`crate::graph::TerminationReasonV1::FrontierExhausted`] and always
//! accompanied by a `SearchGraphV1` audit trail.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No `SearchGraphV1`
/// is produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The root state's head counts do not match the params' N.
    RootOutsideParams {
        people: u32,
        missionaries: u64,
        cannibals: u64,
    },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootOutsideParams {
                people,
                missionaries,
                cannibals,
            } => write!(
                f,
                "root holds {missionaries} missionaries and {cannibals} cannibals but the puzzle has {people} of each"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
