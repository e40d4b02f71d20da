use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// `distances[v]` is `None` when `v` is unreachable from the source; the
/// `Option` plays the role of the positive-infinity sentinel. Both vectors
/// have exactly `vertex_count` entries, indexed by vertex id.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Shortest distance from the source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor of each vertex on its shortest path tree; `None` for the
    /// source and for unreached vertices
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the shortest distance to `vertex`, `None` if it is
    /// unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Returns true if `vertex` is reachable from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Reconstructs the path from the source to `target` by walking the
    /// predecessor chain backward.
    ///
    /// For a reachable target the result starts at the source and ends at
    /// the target. For an unreachable target the walk stops immediately and
    /// the result is the single-element sequence `[target]`; callers that
    /// need to distinguish the two cases should check
    /// [`ShortestPathResult::is_reachable`] first.
    ///
    /// `target` must be below `vertex_count`.
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = Some(target);

        while let Some(vertex) = current {
            path.push(vertex);
            current = self.predecessors[vertex];
        }

        path.reverse();
        path
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
