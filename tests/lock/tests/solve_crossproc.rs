//! Cross-process determinism: spawns the `solve_fixture` binary under
//! several environment variants and asserts identical output. Proves that
//! neither search order nor report digests depend on process-level state.

use lock_tests::fixture_process::{run_variant, workspace_root};

const BIN: &str = "solve_fixture";

fn assert_variants_agree(args: &[&str]) -> String {
    let root = workspace_root();
    let baseline = run_variant(BIN, args, &root, &[]);

    let alt_cwd = std::env::temp_dir();
    let variant_cwd = run_variant(BIN, args, &alt_cwd, &[]);
    assert_eq!(
        baseline,
        variant_cwd,
        "output differs when cwd changes from {} to {}",
        root.display(),
        alt_cwd.display()
    );

    let variant_locale = run_variant(BIN, args, &root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        BIN,
        args,
        &root,
        &[
            ("FERRY_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
            ("RUST_BACKTRACE", "1"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with spurious env vars");

    baseline
}

#[test]
fn crossproc_classic_four_env_variants() {
    let baseline = assert_variants_agree(&[]);

    assert!(
        baseline.contains("report_digest=sha256:"),
        "baseline output missing report_digest"
    );
    assert!(baseline.contains("termination_reason=goal_reached"));
    assert!(baseline.contains("crossings=11\n"));
    assert!(baseline.contains("total_pops=29\n"));
    assert_eq!(baseline.matches("path_state=").count(), 12);
}

#[test]
fn crossproc_unsolvable_instance() {
    let baseline = assert_variants_agree(&["4", "2", "50"]);
    assert!(baseline.contains("termination_reason=frontier_exhausted"));
    assert!(baseline.contains("crossings=none\n"));
    assert!(!baseline.contains("path_state="));
}

#[test]
fn crossproc_matches_inprocess_digest() {
    let out = run_variant(BIN, &["4", "3", "20"], &workspace_root(), &[]);

    let params = ferry_kernel::puzzle::PuzzleParams::new(4, 3, 20).unwrap();
    let report = ferry_harness::runner::run(&params).report().unwrap();
    let line = format!("report_digest={}\n", report.digest.as_str());
    assert!(
        out.contains(&line),
        "subprocess digest differs from in-process digest\n{out}"
    );
}
