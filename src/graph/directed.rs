use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A directed graph stored as vertex-indexed adjacency lists.
///
/// Vertices are dense `usize` ids in `[0, vertex_count)`. Self-loops and
/// parallel edges are kept as supplied; nothing is deduplicated or merged.
/// Once built, the graph is only read by the solver.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges per vertex: `outgoing[v]` is a list of
    /// `(target, weight)` pairs in insertion order
    outgoing: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with `vertices` isolated vertices and no edges.
    ///
    /// This is the construction path for graphs that cannot be described by
    /// an edge list alone, such as a single-node graph or one with trailing
    /// isolated vertices.
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            outgoing: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    ///
    /// The vertex count is one more than the largest id appearing as either
    /// endpoint; ids below that which no edge references become isolated
    /// vertices. Edge order is preserved per vertex. Weight signs are not
    /// validated.
    ///
    /// Returns [`Error::EmptyEdgeList`] for an empty slice, since the vertex
    /// count would be undefined; use [`DirectedGraph::with_vertices`] for
    /// edgeless graphs.
    pub fn from_edges(edges: &[(usize, usize, W)]) -> Result<Self> {
        let max_vertex = edges
            .iter()
            .map(|&(from, to, _)| from.max(to))
            .max()
            .ok_or(Error::EmptyEdgeList)?;

        let mut graph = Self::with_vertices(max_vertex + 1);
        for &(from, to, weight) in edges {
            graph.outgoing[from].push((to, weight));
        }

        log::debug!(
            "built graph with {} vertices and {} edges",
            graph.vertex_count(),
            edges.len()
        );

        Ok(graph)
    }

    /// Appends a directed edge between existing vertices.
    ///
    /// Returns false if either endpoint is out of range. A repeated
    /// `(from, to)` pair adds a parallel edge rather than updating the
    /// existing one.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }
        self.outgoing[from].push((to, weight));
        true
    }

    /// Returns true if no edge in the graph carries a negative weight.
    ///
    /// The solver does not perform this check itself; negative weights break
    /// the greedy invariant and leave the results undefined.
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing
            .iter()
            .all(|edges| edges.iter().all(|&(_, weight)| weight >= W::zero()))
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing
            .get(from)
            .map_or(false, |edges| edges.iter().any(|&(target, _)| target == to))
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing.get(from).and_then(|edges| {
            edges
                .iter()
                .find(|&&(target, _)| target == to)
                .map(|&(_, weight)| weight)
        })
    }
}
