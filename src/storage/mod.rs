use std::path::{Path, PathBuf};

use crate::graphs::edge::{MalformedEdgeError, WeightedEdge};

pub mod csv_store;
pub mod json_store;
pub mod memory_store;

pub use csv_store::CsvEdgeStore;
pub use json_store::JsonEdgeStore;
pub use memory_store::MemoryEdgeStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid edge list: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}:{line}: {source}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: MalformedEdgeError,
    },

    #[error("{path} is not a valid comma separated edge list: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Where the edge list of a network lives between runs.
pub trait EdgeStore {
    fn load_edges(&self) -> Result<Vec<WeightedEdge>, StorageError>;

    /// Replaces the stored edge list.
    fn save_edges(&mut self, edges: &[WeightedEdge]) -> Result<(), StorageError>;
}

impl<S: EdgeStore + ?Sized> EdgeStore for Box<S> {
    fn load_edges(&self) -> Result<Vec<WeightedEdge>, StorageError> {
        (**self).load_edges()
    }

    fn save_edges(&mut self, edges: &[WeightedEdge]) -> Result<(), StorageError> {
        (**self).save_edges(edges)
    }
}

/// Chooses the backend by file extension: `.json` files hold a JSON array,
/// everything else one `origin,destination,length` record per edge.
pub fn open_store(path: &Path) -> Box<dyn EdgeStore> {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("json") => Box::new(JsonEdgeStore::new(path)),
        _ => Box::new(CsvEdgeStore::new(path)),
    }
}
