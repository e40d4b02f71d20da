use crate::graph::DirectedGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with `n` vertices where each vertex
/// gets `edges_per_vertex` outgoing edges to uniformly chosen targets.
/// Weights are uniform in `1.0..100.0`.
///
/// Self-loops and parallel edges may occur; the graph keeps them, matching
/// what the builder does for explicit edge lists.
pub fn generate_random_graph(n: usize, edges_per_vertex: usize) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(n > 0, "n must be positive");

    let mut graph = DirectedGraph::with_vertices(n);
    let mut rng = rand::thread_rng();

    for from in 0..n {
        for _ in 0..edges_per_vertex {
            let to = rng.gen_range(0..n);
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(from, to, weight);
        }
    }

    graph
}
