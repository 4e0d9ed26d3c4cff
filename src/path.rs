use crate::Cost;

/// A Path through a [`Graph`](crate::Graph)
///
/// Stores the sequence of Node data from start to goal (both inclusive) in `path` and the sum
/// of the Edge weights along it in `cost`.
/// The weights of the individual Edges can be retrieved with
/// [`ShortestPaths::travel_times_on_path`](crate::ShortestPaths::travel_times_on_path).
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    /// the Path
    pub path: Vec<P>,
    /// the total Cost of the Path
    pub cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use campus_pathfinding::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 42.0);
    ///
    /// assert_eq!(path.path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost, 42.0);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// The first Node of the Path
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// The last Node of the Path
    pub fn goal(&self) -> Option<&P> {
        self.path.last()
    }

    /// The number of Edges along the Path
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Consumes the Path, returning only the sequence of Nodes
    pub fn into_nodes(self) -> Vec<P> {
        self.path
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cost.total_cmp(&other.cost))
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
