use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use super::{EdgeStore, StorageError};
use crate::graphs::edge::WeightedEdge;

/// The edge list as a JSON array of `{ "tail", "head", "weight" }` objects.
#[derive(Clone, Debug)]
pub struct JsonEdgeStore {
    path: PathBuf,
}

impl JsonEdgeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonEdgeStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> StorageError {
        StorageError::Json {
            path: self.path.clone(),
            source,
        }
    }
}

impl EdgeStore for JsonEdgeStore {
    fn load_edges(&self) -> Result<Vec<WeightedEdge>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(self.io_error(error)),
        };

        serde_json::from_reader(BufReader::new(file)).map_err(|error| self.json_error(error))
    }

    fn save_edges(&mut self, edges: &[WeightedEdge]) -> Result<(), StorageError> {
        let file = File::create(&self.path).map_err(|error| self.io_error(error))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, edges).map_err(|error| self.json_error(error))?;
        writer.flush().map_err(|error| self.io_error(error))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn keeps_labels_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonEdgeStore::new(dir.path().join("edges.json"));
        let edges = vec![WeightedEdge::new("Paris, France", "Lyon\n", 465)];
        store.save_edges(&edges).unwrap();
        assert_eq!(store.load_edges().unwrap(), edges);
    }

    #[test]
    fn rejects_negative_weights() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edges.json");
        fs::write(&path, r#"[{"tail":"A","head":"B","weight":-3}]"#).unwrap();
        let error = JsonEdgeStore::new(&path).load_edges().unwrap_err();
        assert!(matches!(error, StorageError::Json { .. }));
    }
}
