use ordered_float::OrderedFloat;
use sssp_core::graph::{DirectedGraph, Graph};
use sssp_core::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};

type W = OrderedFloat<f64>;

fn build_graph(edges: &[(usize, usize, f64)]) -> DirectedGraph<W> {
    let edges: Vec<(usize, usize, W)> = edges
        .iter()
        .map(|&(from, to, weight)| (from, to, OrderedFloat(weight)))
        .collect();
    DirectedGraph::from_edges(&edges).unwrap()
}

fn solve(graph: &DirectedGraph<W>, source: usize) -> ShortestPathResult<W> {
    Dijkstra::new().compute_shortest_paths(graph, source).unwrap()
}

#[test]
fn test_path_endpoints_and_edges_are_valid() {
    let graph = build_graph(&[
        (0, 1, 4.0),
        (0, 2, 2.0),
        (1, 2, 1.0),
        (1, 3, 5.0),
        (2, 3, 8.0),
        (2, 4, 10.0),
        (3, 4, 2.0),
    ]);
    let result = solve(&graph, 0);

    for target in 1..graph.vertex_count() {
        let path = result.path_to(target);
        assert_eq!(*path.first().unwrap(), 0, "path should start at the source");
        assert_eq!(*path.last().unwrap(), target, "path should end at the target");

        // Every consecutive pair must be a real edge, and the edge weights
        // must sum to the reported distance
        let mut total = OrderedFloat(0.0);
        for pair in path.windows(2) {
            let weight = graph
                .edge_weight(pair[0], pair[1])
                .expect("consecutive path vertices must be connected");
            total = total + weight;
        }
        assert_eq!(Some(total), result.distance(target));
    }
}

#[test]
fn test_path_to_source_is_the_source_alone() {
    let graph = build_graph(&[(0, 1, 2.0), (1, 2, 3.0)]);
    let result = solve(&graph, 0);

    assert_eq!(result.path_to(0), vec![0]);
}

#[test]
fn test_path_to_unreachable_target_is_target_alone() {
    // Kept from the reference behavior: the predecessor walk stops
    // immediately, so an unreachable target reconstructs as just itself
    let graph = build_graph(&[(0, 1, 5.0), (2, 3, 3.0)]);
    let result = solve(&graph, 0);

    assert!(!result.is_reachable(2));
    assert_eq!(result.path_to(2), vec![2]);
}

#[test]
fn test_predecessor_chain_has_no_cycles() {
    let graph = build_graph(&[
        (0, 1, 1.0),
        (1, 2, 1.0),
        (2, 0, 1.0),
        (2, 3, 1.0),
        (3, 1, 1.0),
    ]);
    let result = solve(&graph, 0);

    for target in 0..graph.vertex_count() {
        let path = result.path_to(target);
        // A predecessor tree rooted at the source never revisits a vertex
        assert!(path.len() <= graph.vertex_count());
        let mut seen = path.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), path.len());
    }
}

#[test]
fn test_validate_non_negative() {
    let clean = build_graph(&[(0, 1, 0.0), (1, 2, 4.5)]);
    assert!(clean.validate_non_negative());

    let tainted = build_graph(&[(0, 1, 1.0), (1, 2, -3.0)]);
    assert!(!tainted.validate_non_negative());
}
