use crate::graph::traits::{Graph, NodeId};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;

/// A directed graph held as adjacency lists keyed by node id.
///
/// Read-only once built: solvers take the graph by shared reference and
/// never mutate it, so one instance can back any number of solver runs.
/// The node universe is every declared key plus every edge target, kept
/// sorted; a node referenced only as a target is still enumerated and
/// therefore still appears in any distance map computed over the graph.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each node: node -> [(target, weight)]
    outgoing: HashMap<NodeId, Vec<(NodeId, W)>>,

    /// Every id seen so far, keys and edge targets alike.
    nodes: BTreeSet<NodeId>,
}

impl<W> AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            outgoing: HashMap::new(),
            nodes: BTreeSet::new(),
        }
    }

    /// Builds a graph from (node, edge list) entries, taking edges as given.
    ///
    /// This is the trusted path for input that was validated upstream;
    /// callers that want a fail-fast weight check run
    /// [`validate_non_negative`](Self::validate_non_negative) afterwards.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, Vec<(NodeId, W)>)>,
    {
        let mut graph = AdjacencyGraph::new();
        for (node, edges) in entries {
            graph.nodes.insert(node);
            for &(target, _) in &edges {
                graph.nodes.insert(target);
            }
            graph.outgoing.entry(node).or_default().extend(edges);
        }
        graph
    }

    /// Declares a node with no outgoing edges.
    pub fn declare_node(&mut self, node: NodeId) {
        self.nodes.insert(node);
    }

    /// Adds a directed edge between nodes with the given weight.
    ///
    /// If the edge already exists its weight is updated in place. Negative
    /// weights are rejected and leave the graph untouched.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }

        self.nodes.insert(from);
        self.nodes.insert(to);

        let edges = self.outgoing.entry(from).or_default();
        for edge in edges.iter_mut() {
            if edge.0 == to {
                edge.1 = weight;
                return true;
            }
        }
        edges.push((to, weight));
        true
    }

    /// Checks every edge for a negative weight, naming the first offender.
    ///
    /// The solvers never run this themselves: non-negative weights are a
    /// documented precondition of Dijkstra, not a guarded error.
    pub fn validate_non_negative(&self) -> Result<()> {
        for (&from, edges) in &self.outgoing {
            for &(to, weight) in edges {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight { from, to });
                }
            }
        }
        Ok(())
    }
}

impl<W> Default for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.values().map(|edges| edges.len()).sum()
    }

    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.nodes.iter().copied())
    }

    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        if let Some(edges) = self.outgoing.get(&node) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        if let Some(edges) = self.outgoing.get(&from) {
            edges.iter().any(|(target, _)| *target == to)
        } else {
            false
        }
    }

    fn get_edge_weight(&self, from: NodeId, to: NodeId) -> Option<W> {
        if let Some(edges) = self.outgoing.get(&from) {
            edges
                .iter()
                .find(|(target, _)| *target == to)
                .map(|(_, weight)| *weight)
        } else {
            None
        }
    }
}
