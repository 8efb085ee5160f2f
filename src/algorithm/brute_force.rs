use std::collections::HashSet;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::{DistanceMap, ShortestPathAlgorithm};
use crate::graph::{Graph, NodeId};

/// Exhaustive depth-first enumeration of simple paths.
///
/// Every path from the source that repeats no node is walked, and a node's
/// entry is relaxed each time a path reaches it more cheaply. Exact for
/// arbitrary weights, but the number of simple paths is exponential in
/// dense cyclic graphs; the advertised `O(V + E)` label is the informal
/// display figure and only approximates trees and sparse DAGs.
#[derive(Debug, Default)]
pub struct BruteForce;

impl BruteForce {
    /// Creates a new brute force solver instance
    pub fn new() -> Self {
        BruteForce
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BruteForce
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Brute Force (DFS)"
    }

    fn complexity(&self) -> &'static str {
        "O(V + E)"
    }

    fn shortest_paths(&self, graph: &G, source: NodeId) -> DistanceMap<W> {
        let mut distances = DistanceMap::init(graph, source);

        // The source is on its own path, so a self-loop never recurses
        let mut on_path = HashSet::new();
        on_path.insert(source);

        explore(graph, source, W::zero(), &on_path, &mut distances);

        distances
    }
}

/// Walks every simple path leaving `current`, relaxing each node reached.
///
/// `on_path` holds exactly the nodes of the current path. Each recursion
/// level gets its own extended copy, never a shared mutable set, so a node
/// leaving the path in one branch cannot affect sibling branches. The
/// recursion enters every unvisited neighbor whether or not the relaxation
/// improved its entry; only the visited check bounds the search.
fn explore<W, G>(
    graph: &G,
    current: NodeId,
    travelled: W,
    on_path: &HashSet<NodeId>,
    distances: &mut DistanceMap<W>,
) where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    for (neighbor, weight) in graph.outgoing_edges(current) {
        if on_path.contains(&neighbor) {
            continue;
        }

        let candidate = travelled + weight;
        distances.relax(neighbor, candidate);

        let mut extended = on_path.clone();
        extended.insert(neighbor);
        explore(graph, neighbor, candidate, &extended, distances);
    }
}
