//! The read-only view of a Graph that the Shortest-Path queries operate on

use crate::{Cost, Graph, NodeID, TableKey};
use std::borrow::Borrow;

/// Defines what a search needs to know about a Graph.
///
/// [`ShortestPaths`](crate::ShortestPaths) never touches the storage of a Graph directly. It
/// only resolves Node data to [`NodeID`]s, follows the Edges leaving a Node and looks up the
/// weight of single Edges. Any Type providing these lookups can be searched, which keeps the
/// invariants of the storage separate from the algorithm.
///
/// [`Graph`] is the implementation provided by this crate.
pub trait WeightedGraph {
    /// The data that identifies a Node
    type Data: TableKey + Clone;

    /// Resolves the data of a Node to its ID, or `None` if there is no such Node
    fn node_id<Q>(&self, data: &Q) -> Option<NodeID>
    where
        Self::Data: Borrow<Q>,
        Q: TableKey + ?Sized;

    /// The data of the Node with the given ID
    fn data(&self, id: NodeID) -> Option<&Self::Data>;

    /// All Edges leaving a Node, as `(successor, weight)`.
    ///
    /// Weights are expected to be finite and non-negative.
    fn leaving(&self, id: NodeID) -> Box<dyn Iterator<Item = (NodeID, Cost)> + '_>;

    /// The weight of the Edge from `predecessor` to `successor`, if it exists
    fn edge_weight(&self, predecessor: NodeID, successor: NodeID) -> Option<Cost>;

    /// The IDs of all Nodes, in insertion order
    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeID> + '_>;
}

impl<T: TableKey + Clone> WeightedGraph for Graph<T> {
    type Data = T;

    fn node_id<Q>(&self, data: &Q) -> Option<NodeID>
    where
        T: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        Graph::node_id(self, data)
    }

    fn data(&self, id: NodeID) -> Option<&T> {
        Graph::data(self, id)
    }

    fn leaving(&self, id: NodeID) -> Box<dyn Iterator<Item = (NodeID, Cost)> + '_> {
        Box::new(Graph::leaving(self, id))
    }

    fn edge_weight(&self, predecessor: NodeID, successor: NodeID) -> Option<Cost> {
        self.weight_between(predecessor, successor)
    }

    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeID> + '_> {
        Box::new(self.ids())
    }
}
