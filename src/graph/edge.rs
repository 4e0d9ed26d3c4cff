use crate::{Cost, NodeID};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Edge {
    pub predecessor: NodeID,
    pub successor: NodeID,
    pub weight: Cost,
}

impl Edge {
    pub fn new(predecessor: NodeID, successor: NodeID, weight: Cost) -> Edge {
        Edge {
            predecessor,
            successor,
            weight,
        }
    }

    /// the endpoint that is not `node`. Self-loops return `node` itself.
    pub fn other_end(&self, node: NodeID) -> NodeID {
        if self.predecessor == node {
            self.successor
        } else {
            self.predecessor
        }
    }
}

/// Edge weights are travel times and must be usable by Dijkstra.
pub(crate) fn validate_weight(weight: Cost) -> crate::Result<Cost> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(crate::Error::InvalidWeight(weight))
    }
}
