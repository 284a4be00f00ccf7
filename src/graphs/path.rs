use serde::{Deserialize, Serialize};

use super::{NodeLabel, Weight};

/// Represents a request for finding a shortest path in a graph.
///
/// This struct is used to encapsulate the information required to find a path
/// from a source node to a target node in a graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    source: NodeLabel,
    target: NodeLabel,
}

impl ShortestPathRequest {
    pub fn new(source: impl Into<NodeLabel>, target: impl Into<NodeLabel>) -> Self {
        ShortestPathRequest {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Represents a path in a graph.
///
/// This struct encapsulates the nodes that form a path, ordered from source to
/// target, and the total weight associated with traversing this path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<NodeLabel>,
    pub weight: Weight,
}
