//! Harness runner: configuration → search → report.
//!
//! The runner only orchestrates. Legality and ordering live in the kernel
//! and the search crate; the runner adds wall-clock timing and packages the
//! result.
//!
//! # Pipeline
//!
//! ```text
//! PuzzleConfig::validate() → to_params()
//!   → [start clock] search() [stop clock]
//!   → build_report()
//! ```

use std::time::{Duration, Instant};

use ferry_kernel::proof::canon::CanonError;
use ferry_kernel::puzzle::{PuzzleParams, PuzzleState};
use ferry_search::error::SearchError;
use ferry_search::search::{search, search_from, SearchResult};

use crate::config::{ConfigError, PuzzleConfig};
use crate::report::{build_report, SolutionReportV1};

/// Error during a harness run.
#[derive(Debug)]
pub enum RunError {
    /// Configuration was rejected.
    Config(ConfigError),
    /// Search pre-flight failed.
    Search(SearchError),
    /// Canonical JSON serialization failed.
    Canon(CanonError),
    /// Writing output failed.
    Io(std::io::Error),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Canon(e) => write!(f, "report serialization failed: {e}"),
            Self::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// A finished run.
#[derive(Debug)]
pub struct RunOutcome {
    pub params: PuzzleParams,
    pub result: SearchResult,
    /// Time spent inside the search call only.
    pub elapsed: Duration,
}

impl RunOutcome {
    /// Build the solution report for this run.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Canon`] if serialization fails.
    pub fn report(&self) -> Result<SolutionReportV1, RunError> {
        Ok(build_report(&self.params, &self.result, self.elapsed)?)
    }
}

/// Search from the initial configuration of `params`, timing the search.
#[must_use]
pub fn run(params: &PuzzleParams) -> RunOutcome {
    let start = Instant::now();
    let result = search(params);
    let elapsed = start.elapsed();
    RunOutcome {
        params: *params,
        result,
        elapsed,
    }
}

/// Search from a caller-supplied root, timing the search.
///
/// # Errors
///
/// Returns [`RunError::Search`] if `root` does not hold N of each.
pub fn run_from(root: PuzzleState, params: &PuzzleParams) -> Result<RunOutcome, RunError> {
    let start = Instant::now();
    let result = search_from(root, params)?;
    let elapsed = start.elapsed();
    Ok(RunOutcome {
        params: *params,
        result,
        elapsed,
    })
}

/// Validate `config` and run it.
///
/// # Errors
///
/// Returns [`RunError::Config`] if the boat capacity is below two.
pub fn run_config(config: &PuzzleConfig) -> Result<RunOutcome, RunError> {
    config.validate()?;
    let params = config.to_params()?;
    Ok(run(&params))
}
