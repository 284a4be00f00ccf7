use crate::graphs::{
    path::{Path, ShortestPathRequest},
    NodeLabel, Weight,
};

pub mod dijkstra;
pub mod dijkstra_data;
pub mod reconstruction;

/// Why no path could be reconstructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("there is no path from {start} to {end}")]
    NoPath { start: NodeLabel, end: NodeLabel },

    #[error("predecessors of {end} form a cycle through {node}")]
    PredecessorCycle { end: NodeLabel, node: NodeLabel },
}

pub trait PathFinding {
    fn shortest_path(&self, path_request: &ShortestPathRequest) -> Result<Path, PathError>;

    fn shortest_path_weight(&self, path_request: &ShortestPathRequest) -> Option<Weight> {
        self.shortest_path(path_request).ok().map(|path| path.weight)
    }
}
