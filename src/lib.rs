//! Single-source shortest path engine.
//!
//! This library provides a weighted directed graph built from a flat edge
//! list, an array-backed binary min-heap priority queue, Dijkstra's
//! algorithm with lazy deletion of stale queue entries, and back-pointer
//! path reconstruction.
//!
//! All solver state (distances, predecessors, visited set, queue) is
//! allocated fresh per run, so a graph may be shared read-only across
//! concurrent solver invocations.
//!
//! Edge weights are assumed non-negative; results are undefined otherwise.
//! Callers that cannot guarantee the invariant can check with
//! [`DirectedGraph::validate_non_negative`] before solving.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid source vertex: {0}")]
    InvalidSource(usize),

    #[error("Cannot build a graph from an empty edge list")]
    EmptyEdgeList,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
