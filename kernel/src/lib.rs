//! Ferry Kernel: the deterministic state model of the river-crossing puzzle.
//!
//! # API Surface
//!
//! - [`puzzle::PuzzleParams`] -- validated puzzle constants (N, M, K)
//! - [`puzzle::PuzzleState`] -- one bank/boat configuration with legality,
//!   successor generation, heuristic and terminal test
//! - [`proof::canon::canonical_json_bytes`] -- the single JSON canonicalizer
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//!
//! # Module Dependency Direction
//!
//! `proof` ← `puzzle`
//!
//! One-way only. `puzzle` uses `proof` for state fingerprints; `proof`
//! depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod proof;
pub mod puzzle;
