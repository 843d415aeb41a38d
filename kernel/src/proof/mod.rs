//! Proof module: canonical JSON and domain-separated hashing.
//!
//! Everything that is digested (state fingerprints, search graphs, solution
//! reports) flows through this module.

pub mod canon;
pub mod hash;
pub mod hash_domain;
