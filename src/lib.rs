#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the fastest routes across a Campus.
//!
//! ## Introduction
//! A Campus Map is a directed Graph: every Location is a Node, and every Segment that can be
//! walked from one Location to another is an Edge weighted with the time it takes. Segments are
//! directed, since walking uphill rarely takes as long as walking downhill.
//!
//! This crate provides the three pieces needed to answer questions about such a Map:
//! - [`HashtableMap`], a separate-chaining Hashtable that indexes the Nodes by their data
//! - [`Graph`], the store of Nodes and weighted, directed Edges
//! - [`ShortestPaths`], which uses [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//!   to find the cheapest Path between two Nodes, and answers some derived queries
//!
//! as well as [`CampusMap`], which loads a Map from DOT notation and combines the above.
//!
//! ## Examples
//! Building a Graph by hand:
//! ```
//! use campus_pathfinding::prelude::*;
//!
//! let mut graph = Graph::new();
//! for name in ["A", "B", "C", "D", "E"] {
//!     graph.insert_node(name).unwrap();
//! }
//! for (from, to, seconds) in [
//!     ("A", "B", 15.0), ("A", "C", 1.0), ("A", "D", 4.0),
//!     ("B", "A", 15.0), ("B", "D", 2.0), ("B", "E", 1.0),
//!     ("C", "A", 1.0), ("C", "E", 10.0),
//!     ("D", "A", 4.0), ("D", "B", 2.0), ("D", "E", 10.0),
//!     ("E", "B", 1.0), ("E", "C", 10.0), ("E", "D", 10.0),
//! ] {
//!     graph.insert_edge(from, to, seconds).unwrap();
//! }
//!
//! let paths = graph.shortest_paths();
//!
//! // shortest_path returns the Nodes along the Path and its total Cost
//! let path = paths.shortest_path("A", "E").unwrap();
//! assert_eq!(path.path, vec!["A", "D", "B", "E"]);
//! assert_eq!(path.cost, 7.0);
//!
//! assert_eq!(paths.shortest_path_data("B", "C"), Ok(vec!["B", "D", "A", "C"]));
//! assert_eq!(paths.path_cost("B", "C"), Some(7.0));
//! ```
//!
//! ### Missing Paths
//! Queries report why they failed. [`ShortestPaths::path_cost`] collapses every failure into
//! `None`, and [`ShortestPaths::shortest_path_cost`] into `-1` for callers that expect a number:
//! ```
//! # use campus_pathfinding::prelude::*;
//! let mut graph = Graph::new();
//! graph.insert_node("A").unwrap();
//! graph.insert_node("B").unwrap();
//! graph.insert_edge("A", "B", 3.0).unwrap();
//!
//! let paths = graph.shortest_paths();
//! assert_eq!(paths.shortest_path_data("B", "A"), Err(Error::NoPathFound));
//! assert_eq!(paths.shortest_path_data("Z", "A"), Err(Error::NotFound(Lookup::Node)));
//! assert_eq!(paths.path_cost("B", "A"), None);
//! assert_eq!(paths.shortest_path_cost("B", "A"), -1.0);
//! ```
//!
//! ### Reachability
//! [`ShortestPaths::reachable_locations`] only looks at single Edges. A Node that can be
//! reached within the budget through several Edges is not included:
//! ```
//! # use campus_pathfinding::prelude::*;
//! let mut graph = Graph::new();
//! for name in ["A", "B", "C"] {
//!     graph.insert_node(name).unwrap();
//! }
//! graph.insert_edge("A", "B", 1.0).unwrap();
//! graph.insert_edge("B", "C", 1.0).unwrap();
//! graph.insert_edge("A", "C", 5.0).unwrap();
//!
//! let paths = graph.shortest_paths();
//! assert_eq!(paths.reachable_locations("A", 2.0), vec!["B"]);
//! assert_eq!(paths.reachable_locations("A", 5.0), vec!["B", "C"]);
//! ```
//!
//! ### Configuration
//! The Hashtable that indexes the Nodes can be tuned with a [`HashtableConfig`]. It provides
//! defaults for small Graphs [`HashtableConfig::SMALL`] and large ones [`HashtableConfig::LARGE`]:
//! ```
//! use campus_pathfinding::{Graph, HashtableConfig};
//!
//! let mut graph = Graph::with_config(HashtableConfig {
//!     initial_capacity: 256,
//!     ..HashtableConfig::LARGE
//! });
//! graph.insert_node(42u32).unwrap();
//! assert!(graph.contains_node(&42));
//! ```
//!
//! ## Features
//! - `parallel` (default): [`ShortestPaths::path_costs`] runs its searches on the `rayon` Thread Pool
//! - `log`: emits timings and other internal measurements through the `log` crate. Recommended
//!   to leave this off unless working on improvements to campus_pathfinding.

#[cfg(feature = "log")]
macro_rules! debug_log {
	($($arg:tt)+) => {
		log::debug!($($arg)+)
	};
}
#[cfg(not(feature = "log"))]
macro_rules! debug_log {
	($($arg:tt)+) => {
		()
	};
}

#[cfg(feature = "log")]
macro_rules! warn_log {
	($($arg:tt)+) => {
		log::warn!($($arg)+)
	};
}
#[cfg(not(feature = "log"))]
macro_rules! warn_log {
	($($arg:tt)+) => {
		()
	};
}

/// The Type used to reference a Node inside of a [`Graph`]
pub type NodeID = usize;

/// The weight of an Edge and the Cost of a Path. For a Campus Map, this is a time in seconds.
pub type Cost = f64;

mod error;
pub use self::error::{Error, Lookup, Result};

pub mod hashtable;
pub use self::hashtable::{HashtableConfig, HashtableMap, TableKey};

mod graph;
pub use self::graph::{EdgeID, Graph};

mod path;
pub use self::path::Path;

mod weighted_graph;
pub use self::weighted_graph::WeightedGraph;

pub mod shortest_path;
pub use self::shortest_path::{ShortestPaths, NO_PATH_COST};

pub mod campus;
pub use self::campus::{CampusMap, LoadError};

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		CampusMap, Cost, Error, Graph, HashtableConfig, HashtableMap, Lookup, Path, ShortestPaths,
		WeightedGraph,
	};
}
