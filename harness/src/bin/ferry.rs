//! `ferry`: solve a Missionaries-and-Cannibals instance from the console.
//!
//! Usage: `ferry [--json] [N M K]`
//!
//! With no positional arguments the three values are prompted for on stdin.

use std::io::Write;
use std::process::ExitCode;

use ferry_harness::config::PuzzleConfig;
use ferry_harness::render::{render_no_solution, render_solution};
use ferry_harness::runner::{run_config, RunError, RunOutcome};

fn main() -> ExitCode {
    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            positional.push(arg);
        }
    }

    match solve(&positional, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn solve(positional: &[String], json: bool) -> Result<(), RunError> {
    let config = match PuzzleConfig::from_args(positional)? {
        Some(config) => config,
        None => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            PuzzleConfig::read_interactive(stdin.lock(), &mut stdout)?
        }
    };

    let outcome = run_config(&config)?;
    print_outcome(&outcome, json)
}

fn print_outcome(outcome: &RunOutcome, json: bool) -> Result<(), RunError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        let envelope = outcome.report()?.to_envelope_bytes()?;
        out.write_all(&envelope)?;
        writeln!(out)?;
        return Ok(());
    }

    match outcome.result.solution_path() {
        Some(path) => render_solution(&mut out, &path, outcome.elapsed)?,
        None => render_no_solution(&mut out)?,
    }
    Ok(())
}
