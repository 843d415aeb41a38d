//! Ferry Harness: the shell around the solver.
//!
//! The harness gathers N, M and K, runs the search with wall-clock timing,
//! and renders either the console transcript or a canonical solution report.
//!
//! The harness does NOT implement search logic; it delegates to
//! `ferry_search`, which in turn relies on the kernel for legality.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod render;
pub mod report;
pub mod runner;
