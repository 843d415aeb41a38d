//! Console rendering of a run.
//!
//! Output lines match the classic console program byte for byte, apart from
//! the elapsed time, which depends on the machine.

use std::io::Write;
use std::time::Duration;

use ferry_kernel::puzzle::PuzzleState;

/// Line printed when the frontier runs dry.
pub const NO_SOLUTION: &str = "Could not find a solution.";

/// Write every state block root first, then the crossing count and the
/// search time.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_solution<W: Write>(
    out: &mut W,
    path: &[&PuzzleState],
    elapsed: Duration,
) -> std::io::Result<()> {
    for state in path {
        write!(out, "{state}")?;
    }
    let crossings = path.last().map_or(0, |s| s.move_count());
    writeln!(out, "Number of routes: {crossings}")?;
    writeln!(out)?;
    writeln!(out, "Search time: {} sec.", format_seconds(elapsed))
}

/// Write the no-solution line.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_no_solution<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{NO_SOLUTION}")
}

/// Whole milliseconds as decimal seconds, always with a fractional part
/// (`0.0`, `0.012`, `1.5`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_seconds(elapsed: Duration) -> String {
    let secs = elapsed.as_millis() as f64 / 1000.0;
    let text = secs.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}
