//! Solution report lock tests: normative body binding, observational time,
//! graph digest binding and tamper detection.

use std::time::Duration;

use ferry_harness::report::{build_report, ReportVerifyError, REPORT_SCHEMA_VERSION};
use ferry_harness::runner::run;
use ferry_kernel::proof::canon::canonical_json_bytes;
use ferry_kernel::proof::hash::{canonical_hash, HashDomain};
use ferry_search::search::search;
use lock_tests::scenarios::{classic, known_scenarios};

#[test]
fn every_known_report_verifies() {
    for scenario in known_scenarios() {
        let params = scenario.params();
        let report = build_report(&params, &search(&params), Duration::ZERO).unwrap();
        report.verify().unwrap();
        assert_eq!(report.crossings, scenario.crossings, "{}", scenario.label());
    }
}

#[test]
fn body_is_canonical_and_bound_to_graph() {
    let params = classic().params();
    let result = search(&params);
    let report = build_report(&params, &result, Duration::ZERO).unwrap();

    let body: serde_json::Value = serde_json::from_slice(&report.body).unwrap();
    assert_eq!(canonical_json_bytes(&body).unwrap(), report.body);
    assert_eq!(body["schema_version"], REPORT_SCHEMA_VERSION);
    assert_eq!(
        body["search_graph_digest"],
        result.graph.digest().unwrap().as_str()
    );
    assert_eq!(
        report.digest,
        canonical_hash(HashDomain::SolutionReport, &report.body)
    );
    assert_eq!(body["params"]["max_crossings"], 20);
    assert_eq!(body["search_stats"]["total_pops"], 29);
}

#[test]
fn path_entries_carry_fingerprints() {
    let params = classic().params();
    let result = search(&params);
    let report = build_report(&params, &result, Duration::ZERO).unwrap();
    let body: serde_json::Value = serde_json::from_slice(&report.body).unwrap();

    let entries = body["path"].as_array().unwrap();
    let states = result.solution_path().unwrap();
    assert_eq!(entries.len(), states.len());
    for (entry, state) in entries.iter().zip(states) {
        assert_eq!(entry["fingerprint"], state.fingerprint().as_str());
        assert_eq!(entry["identity_hex"], hex::encode(state.identity_bytes()));
        assert_eq!(entry["state"]["move_count"], state.move_count());
    }
}

#[test]
fn envelope_carries_elapsed_outside_digest() {
    let outcome = run(&classic().params());
    let report = outcome.report().unwrap();
    let envelope: serde_json::Value =
        serde_json::from_slice(&report.to_envelope_bytes().unwrap()).unwrap();

    assert_eq!(envelope["digest"], report.digest.as_str());
    assert!(envelope["elapsed_ms"].is_u64());
    let body: serde_json::Value = serde_json::from_slice(&report.body).unwrap();
    assert_eq!(envelope["report"], body);
    assert!(body.get("elapsed_ms").is_none());
}

#[test]
fn tampered_body_is_rejected() {
    let params = classic().params();
    let mut report = build_report(&params, &search(&params), Duration::ZERO).unwrap();

    let mut body: serde_json::Value = serde_json::from_slice(&report.body).unwrap();
    body["crossings"] = serde_json::json!(3);
    report.body = canonical_json_bytes(&body).unwrap();

    match report.verify() {
        Err(ReportVerifyError::DigestMismatch { expected, actual }) => {
            assert_ne!(expected, actual);
        }
        other => panic!("expected DigestMismatch, got {other:?}"),
    }
}
