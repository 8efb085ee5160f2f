//! The fastest-messenger scenario: four castles, two couriers, one race.
//!
//! Runs both solvers on the canonical castle graph and prints their
//! answers side by side, with timings.

use std::time::Instant;

use colored::Colorize;
use ordered_float::OrderedFloat;

use sssp_compare::{AdjacencyGraph, BruteForce, Dijkstra, NodeId, ShortestPathAlgorithm};

type W = OrderedFloat<f64>;

fn report<A>(solver: &A, graph: &AdjacencyGraph<W>, start: NodeId)
where
    A: ShortestPathAlgorithm<W, AdjacencyGraph<W>>,
{
    let clock = Instant::now();
    let distances = solver.shortest_paths(graph, start);
    let elapsed = clock.elapsed();

    println!("{}", format!("=== {} ===", solver.name()).bold());
    for (castle, distance) in distances.iter() {
        if distance.is_finite() {
            println!("Castle {}: {} units", castle, distance);
        } else {
            println!("Castle {}: {}", castle, "unreachable".red());
        }
    }
    println!("{} {:?}", "elapsed:".green(), elapsed);
    println!("{} {}", "complexity:".yellow(), solver.complexity());
    println!();
}

fn main() {
    // {0: [(1, 4), (2, 1)], 1: [(3, 1)], 2: [(1, 2), (3, 5)], 3: []}
    let graph = AdjacencyGraph::from_entries([
        (0, vec![(1, OrderedFloat(4.0)), (2, OrderedFloat(1.0))]),
        (1, vec![(3, OrderedFloat(1.0))]),
        (2, vec![(1, OrderedFloat(2.0)), (3, OrderedFloat(5.0))]),
        (3, vec![]),
    ]);

    println!("Which courier finds the shortest roads from castle 0?\n");
    report(&BruteForce::new(), &graph, 0);
    report(&Dijkstra::new(), &graph, 0);
}
