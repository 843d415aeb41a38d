//! Configuration input lock tests: prompt text, token handling, capacity
//! rejection and the path from config to a finished run.

use ferry_harness::config::{
    ConfigError, PuzzleConfig, PROMPT_CAPACITY, PROMPT_MAX_CROSSINGS, PROMPT_PEOPLE,
};
use ferry_harness::runner::{run_config, RunError};

#[test]
fn prompt_text_is_locked() {
    assert_eq!(PROMPT_PEOPLE, "Enter Number of Cannibals/Missionaries: ");
    assert_eq!(PROMPT_CAPACITY, "Enter Capacity of Boat (>=2): ");
    assert_eq!(PROMPT_MAX_CROSSINGS, "Enter Max Routes Allowed: ");
}

#[test]
fn interactive_then_run() {
    let mut prompts = Vec::new();
    let config = PuzzleConfig::read_interactive("4\n3\n20\n".as_bytes(), &mut prompts).unwrap();
    let outcome = run_config(&config).unwrap();
    assert_eq!(outcome.result.crossings(), Some(9));
    assert_eq!(String::from_utf8(prompts).unwrap().lines().count(), 3);
}

#[test]
fn capacity_below_two_is_rejected_before_search() {
    for capacity in [0, 1] {
        let capacity = capacity.to_string();
        let config = PuzzleConfig::from_args(&["3", capacity.as_str(), "20"])
            .unwrap()
            .unwrap();
        let err = run_config(&config).unwrap_err();
        assert!(matches!(
            err,
            RunError::Config(ConfigError::InvalidCapacity { .. })
        ));
        assert_eq!(err.to_string(), "Invalid Boat Capacity");
    }
}

#[test]
fn garbage_tokens_are_rejected() {
    let mut sink = Vec::new();
    let err = PuzzleConfig::read_interactive("3 2.5 20".as_bytes(), &mut sink).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidNumber {
            field: "capacity",
            ..
        }
    ));
}
