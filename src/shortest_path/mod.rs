//! Shortest Paths and reachability over a [`WeightedGraph`], using
//! [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).

mod element;
use self::element::Element;

use crate::{
    Cost, Error, HashtableConfig, HashtableMap, Lookup, NodeID, Path, Result, TableKey,
    WeightedGraph,
};

use std::borrow::Borrow;
use std::collections::BinaryHeap;
use std::sync::atomic::{self, AtomicBool};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The value returned by [`ShortestPaths::shortest_path_cost`] when there is no Path.
pub const NO_PATH_COST: Cost = -1.0;

/// One candidate Path during a search: the Node it ends in, its total Cost and the index of
/// the SearchNode it was extended from.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    node: NodeID,
    cost: Cost,
    predecessor: Option<usize>,
}

/// The result of a single search. `records` is the arena of all SearchNodes created during the
/// search, `goal` is the index of the one that reached the destination.
#[derive(Debug)]
struct SearchTree {
    records: Vec<SearchNode>,
    goal: usize,
}

impl SearchTree {
    fn cost(&self) -> Cost {
        self.records[self.goal].cost
    }

    /// the NodeIDs along the Path, start first
    fn node_ids(&self) -> Vec<NodeID> {
        let mut steps = vec![];
        let mut current = Some(self.goal);
        while let Some(index) = current {
            let record = &self.records[index];
            steps.push(record.node);
            current = record.predecessor;
        }
        steps.reverse();
        steps
    }
}

/// Answers Shortest-Path queries on a borrowed [`WeightedGraph`].
///
/// The Graph is only read. Every query runs its own search over the current contents of the
/// Graph, nothing is cached between calls.
///
/// ## Examples
/// Basic usage:
/// ```
/// use campus_pathfinding::{Error, Graph, ShortestPaths};
///
/// // A --4--> D --2--> B --1--> E
/// // A --15-----------> B
/// let mut graph = Graph::new();
/// for name in ["A", "B", "D", "E"] {
///     graph.insert_node(name).unwrap();
/// }
/// graph.insert_edge("A", "D", 4.0).unwrap();
/// graph.insert_edge("D", "B", 2.0).unwrap();
/// graph.insert_edge("B", "E", 1.0).unwrap();
/// graph.insert_edge("A", "B", 15.0).unwrap();
///
/// let paths = ShortestPaths::new(&graph);
/// assert_eq!(paths.shortest_path_data("A", "E"), Ok(vec!["A", "D", "B", "E"]));
/// assert_eq!(paths.path_cost("A", "E"), Some(7.0));
/// assert_eq!(paths.travel_times_on_path("A", "E"), Ok(vec![4.0, 2.0, 1.0]));
///
/// // Edges are directed
/// assert_eq!(paths.shortest_path_data("E", "A"), Err(Error::NoPathFound));
/// assert_eq!(paths.shortest_path_cost("E", "A"), -1.0);
/// ```
#[derive(Debug)]
pub struct ShortestPaths<'g, G> {
    graph: &'g G,
    cancel: Option<&'g AtomicBool>,
}

impl<G> Clone for ShortestPaths<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<G> Copy for ShortestPaths<'_, G> {}

impl<'g, G: WeightedGraph> ShortestPaths<'g, G> {
    /// Creates a query interface for `graph`
    pub fn new(graph: &'g G) -> Self {
        ShortestPaths {
            graph,
            cancel: None,
        }
    }

    /// Makes every search check `flag` before expanding the next Node. Once the flag is set,
    /// searches return [`Error::Cancelled`].
    pub fn with_cancel(mut self, flag: &'g AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The Graph that is searched
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Finds the cheapest Path from `start` to `end`.
    ///
    /// ## Errors
    /// - [`Error::NotFound`] if `start` is not a Node of the Graph
    /// - [`Error::NoPathFound`] if `end` cannot be reached from `start`, which includes the
    ///   case of `end` not being a Node
    /// - [`Error::Cancelled`] if the cancellation flag was set
    pub fn shortest_path<Q>(&self, start: &Q, end: &Q) -> Result<Path<G::Data>>
    where
        G::Data: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let tree = self.compute_shortest_path(start, end)?;
        let nodes = tree
            .node_ids()
            .into_iter()
            .map(|id| self.graph.data(id).cloned().ok_or(Error::NotFound(Lookup::Node)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Path::new(nodes, tree.cost()))
    }

    /// The data of every Node along the cheapest Path from `start` to `end`, both inclusive.
    ///
    /// Fails like [`shortest_path`](Self::shortest_path).
    pub fn shortest_path_data<Q>(&self, start: &Q, end: &Q) -> Result<Vec<G::Data>>
    where
        G::Data: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.shortest_path(start, end).map(Path::into_nodes)
    }

    /// The Cost of the cheapest Path from `start` to `end`, or `None` if there is no such Path
    /// or either endpoint is missing.
    pub fn path_cost<Q>(&self, start: &Q, end: &Q) -> Option<Cost>
    where
        G::Data: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.compute_shortest_path(start, end)
            .ok()
            .map(|tree| tree.cost())
    }

    /// Like [`path_cost`](Self::path_cost), but returns [`NO_PATH_COST`] (`-1`) instead of `None`.
    pub fn shortest_path_cost<Q>(&self, start: &Q, end: &Q) -> Cost
    where
        G::Data: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.path_cost(start, end).unwrap_or(NO_PATH_COST)
    }

    /// The weight of every Edge along the cheapest Path from `start` to `end`.
    ///
    /// The result has one entry less than [`shortest_path_data`](Self::shortest_path_data).
    /// Edges are looked up in the Graph after the search. Should that lookup ever fail, the
    /// entry is left out (and debug builds panic), so a shorter list signals an inconsistent
    /// Graph.
    pub fn travel_times_on_path<Q>(&self, start: &Q, end: &Q) -> Result<Vec<Cost>>
    where
        G::Data: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let steps = self.compute_shortest_path(start, end)?.node_ids();
        let mut times = Vec::with_capacity(steps.len().saturating_sub(1));
        for pair in steps.windows(2) {
            let weight = self.graph.edge_weight(pair[0], pair[1]);
            debug_assert!(weight.is_some(), "Edge along a computed Path is missing");
            match weight {
                Some(weight) => times.push(weight),
                None => warn_log!(
                    "skipping missing Edge {} -> {} on a computed Path",
                    pair[0],
                    pair[1]
                ),
            }
        }
        Ok(times)
    }

    /// Every other Node that has a direct Edge from `start` with a weight of at most `budget`,
    /// in insertion order.
    ///
    /// Only single Edges are considered: a Node that is reachable within `budget` through
    /// several Edges is **not** included. If `start` is not a Node, the result is empty.
    pub fn reachable_locations<Q>(&self, start: &Q, budget: Cost) -> Vec<G::Data>
    where
        G::Data: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let graph = self.graph;
        let start = match graph.node_id(start) {
            Some(id) => id,
            None => return vec![],
        };
        graph
            .node_ids()
            .filter(|&id| id != start)
            .filter(|&id| matches!(graph.edge_weight(start, id), Some(weight) if weight <= budget))
            .filter_map(|id| graph.data(id).cloned())
            .collect()
    }

    /// Runs [`path_cost`](Self::path_cost) from `start` to each of `ends`.
    ///
    /// The searches are independent of each other and run in parallel with the `parallel`
    /// feature.
    pub fn path_costs<Q>(&self, start: &Q, ends: &[&Q]) -> Vec<Option<Cost>>
    where
        G: Sync,
        G::Data: Borrow<Q>,
        Q: TableKey + Sync + ?Sized,
    {
        #[cfg(feature = "parallel")]
        let iter = ends.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = ends.iter();

        iter.map(|end| self.path_cost(start, *end)).collect()
    }

    fn compute_shortest_path<Q>(&self, start: &Q, end: &Q) -> Result<SearchTree>
    where
        G::Data: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let graph = self.graph;
        let start = graph.node_id(start).ok_or(Error::NotFound(Lookup::Node))?;
        // a missing `end` is never popped, so the search simply runs dry
        let end = graph.node_id(end);

        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();

        let mut records = vec![SearchNode {
            node: start,
            cost: 0.0,
            predecessor: None,
        }];
        let mut frontier = BinaryHeap::new();
        frontier.push(Element(0, 0.0));
        let mut finalized: HashtableMap<NodeID, usize> =
            HashtableMap::with_config(HashtableConfig::SMALL);

        while let Some(Element(current, current_cost)) = frontier.pop() {
            self.check_cancelled()?;

            let current_node = records[current].node;
            if Some(current_node) == end {
                debug_log!(
                    "Dijkstra reached its goal at cost {} after finalizing {} nodes in {:?}",
                    current_cost,
                    finalized.len(),
                    timer.elapsed()
                );
                return Ok(SearchTree {
                    records,
                    goal: current,
                });
            }
            if finalized.contains_key(&current_node) {
                continue;
            }
            finalized.put(current_node, current)?;

            for (successor, weight) in graph.leaving(current_node) {
                if finalized.contains_key(&successor) {
                    continue;
                }
                let cost = current_cost + weight;
                records.push(SearchNode {
                    node: successor,
                    cost,
                    predecessor: Some(current),
                });
                frontier.push(Element(records.len() - 1, cost));
            }
        }

        debug_log!(
            "Dijkstra exhausted the frontier after finalizing {} nodes in {:?}",
            finalized.len(),
            timer.elapsed()
        );
        Err(Error::NoPathFound)
    }

    fn check_cancelled(&self) -> Result<()> {
        match self.cancel {
            Some(flag) if flag.load(atomic::Ordering::Relaxed) => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }
}

impl<T: TableKey + Clone> crate::Graph<T> {
    /// Shorthand for [`ShortestPaths::new`]
    pub fn shortest_paths(&self) -> ShortestPaths<'_, Self> {
        ShortestPaths::new(self)
    }
}
