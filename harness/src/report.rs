//! Solution report: the canonical JSON artifact of one run.
//!
//! # Normative vs observational fields
//!
//! The report body (params, outcome, path, graph digest) is normative: it is
//! serialized with the kernel canonicalizer and hashed under
//! `HashDomain::SolutionReport`. Elapsed time is observational. It travels
//! next to the body in [`SolutionReportV1::to_envelope_bytes`] and never
//! enters the digest, so identical inputs give identical digests on any
//! machine.

use std::time::Duration;

use ferry_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ferry_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use ferry_kernel::puzzle::PuzzleParams;
use ferry_search::graph::termination_reason_to_json;
use ferry_search::search::SearchResult;

/// Schema tag embedded in every report body.
pub const REPORT_SCHEMA_VERSION: &str = "solution_report.v1";

/// Domain for report digests.
pub const DOMAIN_SOLUTION_REPORT: HashDomain = HashDomain::SolutionReport;

/// A built report.
#[derive(Debug, Clone)]
pub struct SolutionReportV1 {
    pub params: PuzzleParams,
    /// Crossings in the solution; `None` when no solution was found.
    pub crossings: Option<u32>,
    /// Canonical JSON bytes of the normative body.
    pub body: Vec<u8>,
    /// `canonical_hash(DOMAIN_SOLUTION_REPORT, body)`.
    pub digest: ContentHash,
    /// Digest of the search audit graph, also embedded in `body`.
    pub graph_digest: ContentHash,
    /// Wall-clock search time (observational).
    pub elapsed: Duration,
}

/// Failure re-checking a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportVerifyError {
    /// `body` is not valid JSON.
    BodyParse { detail: String },
    /// `body` is not in canonical form.
    BodyNotCanonical,
    /// Stored digest does not match the body.
    DigestMismatch { expected: String, actual: String },
}

impl std::fmt::Display for ReportVerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BodyParse { detail } => write!(f, "report body is not JSON: {detail}"),
            Self::BodyNotCanonical => write!(f, "report body is not canonical JSON"),
            Self::DigestMismatch { expected, actual } => {
                write!(f, "report digest mismatch: stored {expected}, computed {actual}")
            }
        }
    }
}

impl std::error::Error for ReportVerifyError {}

/// Build the report for a finished search.
///
/// # Errors
///
/// Returns [`CanonError`] if the graph or body cannot be canonicalized.
pub fn build_report(
    params: &PuzzleParams,
    result: &SearchResult,
    elapsed: Duration,
) -> Result<SolutionReportV1, CanonError> {
    let graph_digest = result.graph.digest()?;

    let path: Vec<serde_json::Value> = result
        .solution_path()
        .unwrap_or_default()
        .into_iter()
        .map(|state| {
            serde_json::json!({
                "fingerprint": state.fingerprint().as_str(),
                "identity_hex": hex::encode(state.identity_bytes()),
                "state": state.to_json(),
            })
        })
        .collect();

    let crossings = result.crossings();
    let meta = &result.graph.metadata;
    let body_value = serde_json::json!({
        "crossings": crossings,
        "outcome": termination_reason_to_json(&meta.termination_reason),
        "params": params.to_json(),
        "path": path,
        "schema_version": REPORT_SCHEMA_VERSION,
        "search_graph_digest": graph_digest.as_str(),
        "search_stats": {
            "closed_set_size": meta.closed_set_size,
            "frontier_high_water": meta.frontier_high_water,
            "total_expansions": meta.total_expansions,
            "total_pops": meta.total_pops,
        },
        "solved": result.is_goal_reached(),
    });

    let body = canonical_json_bytes(&body_value)?;
    let digest = canonical_hash(DOMAIN_SOLUTION_REPORT, &body);

    Ok(SolutionReportV1 {
        params: *params,
        crossings,
        body,
        digest,
        graph_digest,
        elapsed,
    })
}

impl SolutionReportV1 {
    /// Canonical JSON envelope: body, digest and elapsed milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the body does not parse back.
    pub fn to_envelope_bytes(&self) -> Result<Vec<u8>, CanonError> {
        let body: serde_json::Value =
            serde_json::from_slice(&self.body).map_err(|e| CanonError::Serialize {
                detail: e.to_string(),
            })?;
        let elapsed_ms = u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX);
        canonical_json_bytes(&serde_json::json!({
            "digest": self.digest.as_str(),
            "elapsed_ms": elapsed_ms,
            "report": body,
        }))
    }

    /// Re-check that `body` is canonical and `digest` matches it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ReportVerifyError`] found.
    pub fn verify(&self) -> Result<(), ReportVerifyError> {
        let value: serde_json::Value =
            serde_json::from_slice(&self.body).map_err(|e| ReportVerifyError::BodyParse {
                detail: e.to_string(),
            })?;
        let recanon = canonical_json_bytes(&value).map_err(|e| ReportVerifyError::BodyParse {
            detail: e.to_string(),
        })?;
        if recanon != self.body {
            return Err(ReportVerifyError::BodyNotCanonical);
        }
        let actual = canonical_hash(DOMAIN_SOLUTION_REPORT, &self.body);
        if actual != self.digest {
            return Err(ReportVerifyError::DigestMismatch {
                expected: self.digest.as_str().to_string(),
                actual: actual.as_str().to_string(),
            });
        }
        Ok(())
    }
}
