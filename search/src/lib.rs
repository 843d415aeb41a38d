//! Ferry Search: deterministic best-first search over puzzle states with an
//! auditable pop log.
//!
//! This crate depends only on `ferry_kernel`; it does NOT depend on
//! `ferry_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! ferry_kernel  ←  ferry_search  ←  ferry_harness
//! (state model)    (frontier,       (config, runner,
//!                   closed set)      rendering, report)
//! ```
//!
//! # Key types
//!
//! - [`SearchNodeV1`] -- arena entry: a state plus its parent index
//! - [`BestFirstFrontier`] -- `(f_cost, creation_order)` min-heap and closed set
//! - [`SearchGraphV1`] -- pop-event audit log
//! - [`SearchResult`] -- goal node (or failure), graph, node arena
//!
//! [`SearchNodeV1`]: node::SearchNodeV1
//! [`BestFirstFrontier`]: frontier::BestFirstFrontier
//! [`SearchGraphV1`]: graph::SearchGraphV1
//! [`SearchResult`]: search::SearchResult

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod search;
