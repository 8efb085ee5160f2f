use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Identifier of a node in the graph.
///
/// Identifiers are arbitrary integers and need not be contiguous.
pub type NodeId = usize;

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every known node id, in ascending order.
    ///
    /// The universe covers declared nodes and nodes that only appear as
    /// edge targets. A distance map computed over this graph carries
    /// exactly one entry per id yielded here.
    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Returns an iterator over the outgoing edges from a node.
    ///
    /// A node with no outgoing edges, declared or not, yields an empty
    /// iterator.
    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: NodeId) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: NodeId, to: NodeId) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: NodeId, to: NodeId) -> Option<W>;
}
