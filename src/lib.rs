//! Single-source shortest paths, computed two ways on one contract.
//!
//! [`BruteForce`] enumerates every simple path from the source depth-first,
//! relaxing a shared best-distance record as it goes. [`Dijkstra`] relaxes
//! greedily from a binary-heap frontier and assumes non-negative weights.
//! Both consume the same read-only graph and fill the same [`DistanceMap`]
//! (one entry per known node, `infinity` for unreachable), so their answers
//! and run times can be compared directly on identical input.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    brute_force::BruteForce, dijkstra::Dijkstra, DistanceMap, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Graph, NodeId};

use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("negative weight on edge {from} -> {to}")]
    NegativeWeight { from: NodeId, to: NodeId },

    #[error("malformed graph input: {0}")]
    MalformedGraph(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes shortest distances from `start` by exhaustive depth-first
/// enumeration of simple paths.
///
/// Exact for any weights, exponential on dense cyclic graphs. An unknown
/// `start` yields a map with only the start at zero.
pub fn shortest_paths_brute_force<W, G>(graph: &G, start: NodeId) -> DistanceMap<W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    BruteForce::new().shortest_paths(graph, start)
}

/// Computes shortest distances from `start` by greedy relaxation over a
/// min-priority frontier.
///
/// Precondition: all edge weights are non-negative. Results are undefined
/// otherwise; see `AdjacencyGraph::validate_non_negative` for an optional
/// fail-fast check.
pub fn shortest_paths_dijkstra<W, G>(graph: &G, start: NodeId) -> DistanceMap<W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    Dijkstra::new().shortest_paths(graph, start)
}
