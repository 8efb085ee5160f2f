//! Runs both shortest path solvers on one input and reports each node's
//! distance, the solver's complexity label, and wall-clock time.
//!
//! Usage:
//!   compare <graph.json> <start-node>
//!   compare - <start-node>            (read the graph from stdin)
//!
//! The graph is a JSON object mapping node ids to [neighbor, weight]
//! pairs, e.g. `{"0": [[1, 4], [2, 1]], "1": [[3, 1]], "2": [[1, 2], [3, 5]], "3": []}`.

use std::collections::HashMap;
use std::io::Read;
use std::time::Instant;

use ordered_float::OrderedFloat;
use serde::Deserialize;

use sssp_compare::{
    AdjacencyGraph, BruteForce, Dijkstra, Error, Graph, NodeId, ShortestPathAlgorithm,
};

/// Adjacency description as it arrives on the wire: node -> [(neighbor, weight)]
#[derive(Debug, Deserialize)]
struct GraphInput(HashMap<NodeId, Vec<(NodeId, f64)>>);

impl GraphInput {
    fn into_graph(self) -> AdjacencyGraph<OrderedFloat<f64>> {
        AdjacencyGraph::from_entries(self.0.into_iter().map(|(node, edges)| {
            let edges = edges
                .into_iter()
                .map(|(neighbor, weight)| (neighbor, OrderedFloat(weight)))
                .collect();
            (node, edges)
        }))
    }
}

fn parse_graph(raw: &str) -> Result<AdjacencyGraph<OrderedFloat<f64>>, Error> {
    let input: GraphInput =
        serde_json::from_str(raw).map_err(|e| Error::MalformedGraph(e.to_string()))?;
    let graph = input.into_graph();
    graph.validate_non_negative()?;
    Ok(graph)
}

fn run_solver<A>(solver: &A, graph: &AdjacencyGraph<OrderedFloat<f64>>, start: NodeId)
where
    A: ShortestPathAlgorithm<OrderedFloat<f64>, AdjacencyGraph<OrderedFloat<f64>>>,
{
    let clock = Instant::now();
    let result = solver.shortest_paths(graph, start);
    let elapsed = clock.elapsed();

    println!("Results using {} (Shortest Distances):", solver.name());
    println!();
    for (node, distance) in result.iter() {
        if distance.is_finite() {
            println!("Node {}: {} units", node, distance);
        } else {
            println!("Node {}: unreachable", node);
        }
    }
    println!();
    println!(
        "Time taken to compute: {:.10} seconds",
        elapsed.as_secs_f64()
    );
    println!("Time Complexity: {}", solver.complexity());
    println!();
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <graph.json | -> <start-node>", args[0]);
        std::process::exit(2);
    }

    let raw = if args[1] == "-" {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("error: failed to read stdin: {}", e);
            std::process::exit(2);
        }
        buf
    } else {
        match std::fs::read_to_string(&args[1]) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("error: failed to read {}: {}", args[1], e);
                std::process::exit(2);
            }
        }
    };

    let graph = match parse_graph(&raw) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    let start: NodeId = match args[2].parse() {
        Ok(start) => start,
        Err(_) => {
            eprintln!("error: start node must be an integer, got {:?}", args[2]);
            std::process::exit(2);
        }
    };

    log::info!(
        "comparing solvers on {} nodes / {} edges from node {}",
        graph.node_count(),
        graph.edge_count(),
        start
    );

    run_solver(&BruteForce::new(), &graph, start);
    run_solver(&Dijkstra::new(), &graph, start);
}
