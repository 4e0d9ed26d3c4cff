//! The Graph Store: Nodes with arbitrary data, connected by directed, weighted Edges.

mod edge;
use self::edge::{validate_weight, Edge};

mod node;
use self::node::Node;

use crate::{Cost, Error, HashtableConfig, HashtableMap, Lookup, NodeID, Result, TableKey};
use std::borrow::Borrow;

/// The Type used to reference an Edge inside of a [`Graph`]
pub type EdgeID = usize;

/// A directed, weighted Graph with unique Node data.
///
/// Every Node wraps one value of `T` (e.g. the name of a Location) that identifies it. Edges
/// connect an ordered pair of Nodes and carry a non-negative, finite weight. There is at most
/// one Edge per ordered pair: inserting it again overwrites the weight.
///
/// Nodes are indexed through a [`HashtableMap`], and Nodes and Edges are stored in Slabs so
/// that removals never invalidate the IDs of other entries.
///
/// ## Examples
/// Basic usage:
/// ```
/// use campus_pathfinding::{Error, Graph, Lookup};
///
/// let mut graph = Graph::new();
/// graph.insert_node("Memorial Union").unwrap();
/// graph.insert_node("Science Hall").unwrap();
/// graph.insert_edge("Memorial Union", "Science Hall", 112.5).unwrap();
///
/// assert_eq!(graph.edge_weight("Memorial Union", "Science Hall"), Ok(112.5));
/// assert_eq!(
///     graph.edge_weight("Science Hall", "Memorial Union"),
///     Err(Error::NotFound(Lookup::Edge))
/// );
///
/// graph.remove_node("Science Hall").unwrap();
/// assert_eq!(graph.edge_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Graph<T> {
    nodes: slab::Slab<Node<T>>,
    edges: slab::Slab<Edge>,
    index: HashtableMap<T, NodeID>,
    order: Vec<NodeID>,
}

impl<T: TableKey + Clone> Graph<T> {
    /// Creates an empty Graph
    pub fn new() -> Self {
        Self::with_config(HashtableConfig::default())
    }

    /// Creates an empty Graph whose Node index uses the given [`HashtableConfig`]
    pub fn with_config(config: HashtableConfig) -> Self {
        Graph {
            nodes: slab::Slab::new(),
            edges: slab::Slab::new(),
            index: HashtableMap::with_config(config),
            order: Vec::new(),
        }
    }

    /// Adds a Node without any Edges.
    ///
    /// ## Errors
    /// - [`Error::DuplicateKey`] if a Node with the same data exists
    /// - [`Error::InvalidKey`] if `data` is vacant (e.g. an empty String)
    pub fn insert_node(&mut self, data: T) -> Result<NodeID> {
        let entry = self.nodes.vacant_entry();
        let id = entry.key();
        self.index.put(data.clone(), id)?;
        entry.insert(Node::new(data));
        self.order.push(id);
        Ok(id)
    }

    /// Removes a Node together with every Edge leaving or entering it, and returns its data.
    pub fn remove_node<Q>(&mut self, data: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let id = self
            .index
            .remove(data)
            .map_err(|_| Error::NotFound(Lookup::Node))?;
        let node = self.nodes.remove(id);

        let mut incident: Vec<EdgeID> =
            node.leaving.iter().chain(&node.entering).copied().collect();
        incident.sort_unstable();
        incident.dedup();

        for edge_id in incident {
            let edge = self.edges.remove(edge_id);
            if let Some(other) = self.nodes.get_mut(edge.other_end(id)) {
                other.detach(edge_id);
            }
        }
        self.order.retain(|&other| other != id);
        Ok(node.data)
    }

    /// Adds an Edge from `predecessor` to `successor`.
    ///
    /// If the Edge already exists, its weight is replaced and the old weight is returned.
    ///
    /// ## Errors
    /// - [`Error::NotFound`] if either endpoint is not a Node of this Graph
    /// - [`Error::InvalidWeight`] if `weight` is negative, infinite or NaN
    pub fn insert_edge<Q>(
        &mut self,
        predecessor: &Q,
        successor: &Q,
        weight: Cost,
    ) -> Result<Option<Cost>>
    where
        T: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let pred = self.require_node(predecessor)?;
        let succ = self.require_node(successor)?;
        let weight = validate_weight(weight)?;

        if let Some(edge_id) = self.find_edge(pred, succ) {
            let edge = &mut self.edges[edge_id];
            let old = edge.weight;
            edge.weight = weight;
            return Ok(Some(old));
        }

        let edge_id = self.edges.insert(Edge::new(pred, succ, weight));
        self.nodes[pred].leaving.push(edge_id);
        self.nodes[succ].entering.push(edge_id);
        Ok(None)
    }

    /// Removes the Edge from `predecessor` to `successor` and returns its weight.
    pub fn remove_edge<Q>(&mut self, predecessor: &Q, successor: &Q) -> Result<Cost>
    where
        T: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let pred = self.require_node(predecessor)?;
        let succ = self.require_node(successor)?;
        let edge_id = self
            .find_edge(pred, succ)
            .ok_or(Error::NotFound(Lookup::Edge))?;

        let edge = self.edges.remove(edge_id);
        self.nodes[pred].detach(edge_id);
        self.nodes[succ].detach(edge_id);
        Ok(edge.weight)
    }

    /// Checks if a Node with this data exists
    pub fn contains_node<Q>(&self, data: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.index.contains_key(data)
    }

    /// Checks if an Edge from `predecessor` to `successor` exists
    pub fn contains_edge<Q>(&self, predecessor: &Q, successor: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.edge_weight(predecessor, successor).is_ok()
    }

    /// Returns the weight of the Edge from `predecessor` to `successor`.
    ///
    /// ## Errors
    /// - [`Error::NotFound`]`(`[`Lookup::Node`]`)` if either endpoint does not exist
    /// - [`Error::NotFound`]`(`[`Lookup::Edge`]`)` if both exist, but are not connected
    pub fn edge_weight<Q>(&self, predecessor: &Q, successor: &Q) -> Result<Cost>
    where
        T: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let pred = self.require_node(predecessor)?;
        let succ = self.require_node(successor)?;
        self.find_edge(pred, succ)
            .map(|edge_id| self.edges[edge_id].weight)
            .ok_or(Error::NotFound(Lookup::Edge))
    }

    /// All Edges leaving the Node, as `(successor, weight)` in insertion order
    pub fn successors<Q>(&self, data: &Q) -> Result<Vec<(&T, Cost)>>
    where
        T: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let id = self.require_node(data)?;
        Ok(self.nodes[id]
            .leaving
            .iter()
            .map(|&edge_id| {
                let edge = &self.edges[edge_id];
                (&self.nodes[edge.successor].data, edge.weight)
            })
            .collect())
    }

    /// All Edges entering the Node, as `(predecessor, weight)` in insertion order
    pub fn predecessors<Q>(&self, data: &Q) -> Result<Vec<(&T, Cost)>>
    where
        T: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let id = self.require_node(data)?;
        Ok(self.nodes[id]
            .entering
            .iter()
            .map(|&edge_id| {
                let edge = &self.edges[edge_id];
                (&self.nodes[edge.predecessor].data, edge.weight)
            })
            .collect())
    }

    /// The number of Nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of Edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The data of every Node, in the order the Nodes were inserted
    pub fn locations(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().map(move |&id| &self.nodes[id].data)
    }

    /// Looks up the [`NodeID`] of the Node holding `data`
    pub fn node_id<Q>(&self, data: &Q) -> Option<NodeID>
    where
        T: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.index.get(data).ok().copied()
    }

    /// The data of the Node with the given ID, if it still exists
    pub fn data(&self, id: NodeID) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.data)
    }

    pub(crate) fn leaving(&self, id: NodeID) -> impl Iterator<Item = (NodeID, Cost)> + '_ {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|node| node.leaving.iter())
            .map(move |&edge_id| {
                let edge = &self.edges[edge_id];
                (edge.successor, edge.weight)
            })
    }

    pub(crate) fn weight_between(&self, pred: NodeID, succ: NodeID) -> Option<Cost> {
        self.find_edge(pred, succ).map(|edge_id| self.edges[edge_id].weight)
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = NodeID> + '_ {
        self.order.iter().copied()
    }

    fn require_node<Q>(&self, data: &Q) -> Result<NodeID>
    where
        T: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.node_id(data).ok_or(Error::NotFound(Lookup::Node))
    }

    fn find_edge(&self, pred: NodeID, succ: NodeID) -> Option<EdgeID> {
        self.nodes
            .get(pred)?
            .leaving
            .iter()
            .copied()
            .find(|&edge_id| self.edges[edge_id].successor == succ)
    }
}

impl<T: TableKey + Clone> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
