use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::{DistanceMap, ShortestPathAlgorithm};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Graph, NodeId};

/// Classic Dijkstra's algorithm over a binary-heap frontier.
///
/// Precondition: all edge weights are non-negative. There is no runtime
/// check; with a negative weight in the graph the returned distances are
/// undefined.
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
        "Dijkstra (Greedy)"
    }

    fn complexity(&self) -> &'static str {
        "O((V + E) log V)"
    }

    fn shortest_paths(&self, graph: &G, source: NodeId) -> DistanceMap<W> {
        let mut distances = DistanceMap::init(graph, source);

        // Frontier of (node, tentative distance), cheapest first
        let mut frontier = BinaryHeapWrapper::new();
        frontier.push(source, W::zero());

        while let Some((node, dist)) = frontier.pop() {
            // No closed set is kept, so a node can sit in the frontier
            // several times; entries superseded by a cheaper push are
            // stale and get skipped here.
            if let Some(best) = distances.get(node) {
                if dist > best {
                    continue;
                }
            }

            // Relax all outgoing edges
            for (neighbor, weight) in graph.outgoing_edges(node) {
                let candidate = dist + weight;
                if distances.relax(neighbor, candidate) {
                    frontier.push(neighbor, candidate);
                }
            }
        }

        distances
    }
}
