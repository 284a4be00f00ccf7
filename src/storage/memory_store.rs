use super::{EdgeStore, StorageError};
use crate::graphs::edge::WeightedEdge;

#[derive(Clone, Debug, Default)]
pub struct MemoryEdgeStore {
    edges: Vec<WeightedEdge>,
}

impl MemoryEdgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges(edges: Vec<WeightedEdge>) -> Self {
        MemoryEdgeStore { edges }
    }
}

impl EdgeStore for MemoryEdgeStore {
    fn load_edges(&self) -> Result<Vec<WeightedEdge>, StorageError> {
        Ok(self.edges.clone())
    }

    fn save_edges(&mut self, edges: &[WeightedEdge]) -> Result<(), StorageError> {
        self.edges = edges.to_vec();
        Ok(())
    }
}
