use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion of stale queue entries.
///
/// Instead of a decrease-key operation, every relaxation pushes a fresh
/// queue entry; entries for an already-settled vertex are discarded when
/// popped. Each run allocates its own state, so one graph can back multiple
/// concurrent runs.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidSource(source));
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];

        distances[source] = Some(W::zero());

        let mut queue = MinHeap::new();
        queue.push(source, W::zero());

        let mut settled = 0usize;

        while let Some((vertex, dist)) = queue.pop() {
            // Stale duplicate of an already-settled vertex
            if visited[vertex] {
                continue;
            }

            // First pop finalizes the distance: with non-negative weights no
            // later entry can carry a smaller value
            visited[vertex] = true;
            settled += 1;
            log::trace!("settled vertex {} at distance {:?}", vertex, dist);

            for (neighbor, weight) in graph.outgoing_edges(vertex) {
                let candidate = dist + weight;

                let improves = match distances[neighbor] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances[neighbor] = Some(candidate);
                    predecessors[neighbor] = Some(vertex);
                    queue.push(neighbor, candidate);
                }
            }
        }

        log::debug!("settled {} of {} vertices from source {}", settled, n, source);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
