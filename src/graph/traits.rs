use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Trait representing a read-only weighted directed graph.
///
/// This is the seam between graph representations and the shortest path
/// solver: the solver only ever reads vertex counts and outgoing edges.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges of a vertex as
    /// `(target, weight)` pairs, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex id is within `[0, vertex_count)`
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if at least one edge exists between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of the first edge between the two vertices, if any
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}
