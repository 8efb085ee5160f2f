use std::collections::BTreeMap;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::{Graph, NodeId};

/// Shortest known distances from a fixed source to every node of a graph.
///
/// One entry per id in the graph's node universe, with `W::infinity()`
/// standing for unreachable. The source entry is always zero, and recorded
/// distances only ever decrease while a solver runs. Entries iterate in
/// ascending node id order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMap<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Source node this map was computed from
    source: NodeId,

    /// Best known distance per node
    distances: BTreeMap<NodeId, W>,
}

impl<W> DistanceMap<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates the starting map for one solver run: every node of `graph`
    /// at infinity, then the source forced to zero.
    ///
    /// The source entry exists even when the source is not a node of the
    /// graph, so a solver handed an undeclared start still returns a map
    /// with the start at zero.
    pub(crate) fn init<G: Graph<W>>(graph: &G, source: NodeId) -> Self {
        let mut distances: BTreeMap<NodeId, W> =
            graph.node_ids().map(|node| (node, W::infinity())).collect();
        distances.insert(source, W::zero());

        DistanceMap { source, distances }
    }

    /// Records `candidate` as the distance to `node` if it strictly
    /// improves on the current entry. Returns whether it did.
    pub(crate) fn relax(&mut self, node: NodeId, candidate: W) -> bool {
        let entry = self.distances.entry(node).or_insert_with(W::infinity);
        if candidate < *entry {
            *entry = candidate;
            true
        } else {
            false
        }
    }

    /// The source node this map was computed from
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The recorded distance to `node`.
    ///
    /// `None` means the id is outside the graph's node universe; an
    /// unreachable node returns infinity, not `None`.
    pub fn get(&self, node: NodeId) -> Option<W> {
        self.distances.get(&node).copied()
    }

    /// Returns true if a finite-cost path from the source reached `node`
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.get(node).map_or(false, |d| d.is_finite())
    }

    /// Iterates over (node, distance) pairs in ascending node id order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, W)> + '_ {
        self.distances
            .iter()
            .map(|(&node, &distance)| (node, distance))
    }

    /// Number of nodes in the map
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest distances from a source node to every known node.
    ///
    /// Total over any well-formed graph and any source: no panic, no
    /// error. An unknown or disconnected source yields a map with the
    /// source at zero and every graph node at infinity.
    fn shortest_paths(&self, graph: &G, source: NodeId) -> DistanceMap<W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// The informal complexity label displayed next to this algorithm's
    /// results
    fn complexity(&self) -> &'static str;
}
