use crate::graph::AdjacencyGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with `nodes` nodes and approximately
/// `edge_factor * nodes` edges, weighted in 1.0..10.0.
///
/// Every id in 0..nodes is declared up front, so nodes the random edges
/// never reach still appear (unreachable) in the result maps. Keep `nodes`
/// small when the graph feeds the brute force solver.
pub fn generate_random_graph(nodes: usize, edge_factor: f64) -> AdjacencyGraph<OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::new();
    let mut rng = rand::thread_rng();

    for node in 0..nodes {
        graph.declare_node(node);
    }

    let num_edges = (edge_factor * nodes as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..nodes);
        let v = rng.gen_range(0..nodes);
        // Avoid self-loops; a duplicate edge just refreshes the weight
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..10.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}
