//! Loading a Campus Map and answering the questions a visitor would ask about it.
//!
//! A Campus Map is a [`Graph`] of Location names, where every Edge is the time in seconds it
//! takes to walk from one Location to another. Maps are written in DOT notation:
//! ```text
//! digraph Campus {
//!     "Memorial Union" -> "Science Hall" [seconds=112.5];
//!     "Science Hall" -> "Memorial Union" [seconds=118.0];
//! }
//! ```

mod dot;
pub use self::dot::{parse_edge_line, LoadError, Segment};

use crate::{Cost, Graph, Result, ShortestPaths};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// A Campus Map: Locations connected by directed, timed Segments.
///
/// ## Examples
/// ```
/// use campus_pathfinding::CampusMap;
///
/// let map = CampusMap::from_reader(
///     r#"digraph Campus {
///         "Union South" -> "Computer Sciences and Statistics" [seconds=176.0];
///         "Computer Sciences and Statistics" -> "Bascom Hall" [seconds=440.5];
///         "Union South" -> "Bascom Hall" [seconds=700.0];
///     }"#
///     .as_bytes(),
/// )
/// .unwrap();
///
/// assert_eq!(
///     map.locations(),
///     vec!["Union South", "Computer Sciences and Statistics", "Bascom Hall"]
/// );
/// assert_eq!(
///     map.find_shortest_path("Union South", "Bascom Hall").unwrap(),
///     vec!["Union South", "Computer Sciences and Statistics", "Bascom Hall"]
/// );
/// assert_eq!(
///     map.travel_times_on_path("Union South", "Bascom Hall").unwrap(),
///     vec![176.0, 440.5]
/// );
/// assert_eq!(
///     map.reachable_locations("Union South", 200.0),
///     vec!["Computer Sciences and Statistics"]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct CampusMap {
    graph: Graph<String>,
}

impl CampusMap {
    /// Creates an empty Map
    pub fn new() -> CampusMap {
        CampusMap::default()
    }

    /// Wraps an existing Graph of Location names
    pub fn from_graph(graph: Graph<String>) -> CampusMap {
        CampusMap { graph }
    }

    /// Reads a Map in DOT notation from `reader`
    pub fn from_reader(reader: impl BufRead) -> std::result::Result<CampusMap, LoadError> {
        let mut map = CampusMap::new();
        map.load(reader)?;
        Ok(map)
    }

    /// Reads a Map in DOT notation from the file at `path`
    pub fn from_file(
        path: impl AsRef<std::path::Path>,
    ) -> std::result::Result<CampusMap, LoadError> {
        let file = File::open(path)?;
        CampusMap::from_reader(BufReader::new(file))
    }

    /// Adds every Segment described by `reader` to this Map and returns how many there were.
    ///
    /// Locations are added the first time they appear. A Segment that appears twice keeps the
    /// travel time of its last occurrence. Loading stops at the first error, leaving the
    /// Segments read so far in the Map.
    pub fn load(&mut self, reader: impl BufRead) -> std::result::Result<usize, LoadError> {
        let mut segments = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(segment) = parse_edge_line(&line, index + 1)? {
                self.add_segment(&segment.from, &segment.to, segment.seconds)
                    .map_err(|source| LoadError::Graph {
                        line: index + 1,
                        source,
                    })?;
                segments += 1;
            }
        }
        debug_log!(
            "loaded {} segments, the map now has {} locations and {} segments",
            segments,
            self.graph.node_count(),
            self.graph.edge_count()
        );
        Ok(segments)
    }

    /// Adds a Segment from `from` to `to`, creating either Location if necessary.
    pub fn add_segment(&mut self, from: &str, to: &str, seconds: Cost) -> Result<()> {
        for location in [from, to] {
            if !self.graph.contains_node(location) {
                self.graph.insert_node(location.to_string())?;
            }
        }
        self.graph.insert_edge(from, to, seconds)?;
        Ok(())
    }

    /// Every Location, in the order they first appeared
    pub fn locations(&self) -> Vec<&str> {
        self.graph.locations().map(String::as_str).collect()
    }

    /// The Locations along the fastest route from `start` to `end`, both inclusive.
    ///
    /// See [`ShortestPaths::shortest_path_data`] for the possible errors.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Result<Vec<String>> {
        self.paths().shortest_path_data(start, end)
    }

    /// The travel time of every Segment along the fastest route from `start` to `end`
    pub fn travel_times_on_path(&self, start: &str, end: &str) -> Result<Vec<Cost>> {
        self.paths().travel_times_on_path(start, end)
    }

    /// The total travel time of the fastest route, or `None` if there is none
    pub fn path_cost(&self, start: &str, end: &str) -> Option<Cost> {
        self.paths().path_cost(start, end)
    }

    /// Every Location reachable from `start` through a **single** Segment of at most `seconds`
    pub fn reachable_locations(&self, start: &str, seconds: Cost) -> Vec<String> {
        self.paths().reachable_locations(start, seconds)
    }

    /// The underlying Graph
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Mutable access to the underlying Graph
    pub fn graph_mut(&mut self) -> &mut Graph<String> {
        &mut self.graph
    }

    /// Shortest-Path queries on this Map
    pub fn paths(&self) -> ShortestPaths<'_, Graph<String>> {
        self.graph.shortest_paths()
    }
}
