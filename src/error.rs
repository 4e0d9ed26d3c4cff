use crate::Cost;
use std::fmt;
use thiserror::Error;

/// What kind of entry a failed lookup was looking for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// a Key in a [`HashtableMap`](crate::HashtableMap)
    Key,
    /// a Node in a [`Graph`](crate::Graph)
    Node,
    /// an Edge in a [`Graph`](crate::Graph)
    Edge,
}

impl fmt::Display for Lookup {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Lookup::Key => write!(fmt, "Key"),
            Lookup::Node => write!(fmt, "Node"),
            Lookup::Edge => write!(fmt, "Edge"),
        }
    }
}

/// Errors returned by the Hashtable, the Graph and the Shortest-Path queries
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// The Key carries no identity (e.g. an empty String)
    #[error("Key is empty")]
    InvalidKey,
    /// The Key or Node is already present
    #[error("Key already exists")]
    DuplicateKey,
    /// The requested entry does not exist
    #[error("{0} not found")]
    NotFound(Lookup),
    /// Both endpoints exist, but no directed Path connects them
    #[error("no Path found")]
    NoPathFound,
    /// Edge weights have to be finite and non-negative
    #[error("invalid Edge weight {0}")]
    InvalidWeight(Cost),
    /// The search was aborted through its cancellation flag
    #[error("search cancelled")]
    Cancelled,
}

impl Error {
    /// Returns `true` for any [`Error::NotFound`], regardless of what was looked up
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Shorthand for `Result<T, campus_pathfinding::Error>`
pub type Result<T> = std::result::Result<T, Error>;
