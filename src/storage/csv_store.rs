use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use super::{EdgeStore, StorageError};
use crate::graphs::edge::WeightedEdge;

/// One `origin,destination,length` record per line. Labels containing `,`,
/// `"` or line breaks are quoted, blank lines are ignored.
#[derive(Clone, Debug)]
pub struct CsvEdgeStore {
    path: PathBuf,
}

impl CsvEdgeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvEdgeStore { path: path.into() }
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

    fn csv_error(&self, source: csv::Error) -> StorageError {
        StorageError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

impl EdgeStore for CsvEdgeStore {
    /// A file that does not exist yet holds no edges.
    fn load_edges(&self) -> Result<Vec<WeightedEdge>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(self.io_error(error)),
        };

        // field counts are checked by `WeightedEdge::from_fields`
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut edges = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|error| self.csv_error(error))?;
            let fields: Vec<&str> = record.iter().collect();
            let edge =
                WeightedEdge::from_fields(&fields).map_err(|source| StorageError::MalformedLine {
                    path: self.path.clone(),
                    line: record
                        .position()
                        .map_or(index + 1, |position| position.line() as usize),
                    source,
                })?;
            edges.push(edge);
        }

        Ok(edges)
    }

    fn save_edges(&mut self, edges: &[WeightedEdge]) -> Result<(), StorageError> {
        let file = File::create(&self.path).map_err(|error| self.io_error(error))?;
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(file);

        for edge in edges {
            let weight = edge.weight().to_string();
            writer
                .write_record([edge.tail(), edge.head(), weight.as_str()])
                .map_err(|error| self.csv_error(error))?;
        }
        writer.flush().map_err(|error| self.io_error(error))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvEdgeStore::new(dir.path().join(".paths"));
        assert!(store.load_edges().unwrap().is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvEdgeStore::new(dir.path().join(".paths"));
        let edges = vec![
            WeightedEdge::new("Lyon", "Paris", 465),
            WeightedEdge::new("Paris", "Lille", 225),
        ];
        store.save_edges(&edges).unwrap();

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "Lyon,Paris,465\r\nParis,Lille,225\r\n"
        );
        assert_eq!(store.load_edges().unwrap(), edges);
    }

    #[test]
    fn reads_quoted_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".paths");
        fs::write(&path, "\"Paris, France\",Lyon,5\r\n\"Say \"\"Hi\"\"\",B,1\r\n").unwrap();

        assert_eq!(
            CsvEdgeStore::new(&path).load_edges().unwrap(),
            vec![
                WeightedEdge::new("Paris, France", "Lyon", 5),
                WeightedEdge::new("Say \"Hi\"", "B", 1),
            ]
        );
    }

    #[test]
    fn quotes_labels_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvEdgeStore::new(dir.path().join("edges.csv"));
        let edges = vec![WeightedEdge::new("Paris, France", "Lyon", 1)];
        store.save_edges(&edges).unwrap();

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "\"Paris, France\",Lyon,1\r\n"
        );
        assert_eq!(store.load_edges().unwrap(), edges);
    }

    #[test]
    fn reports_malformed_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(&path, "A,B,1\n\nB,C,x\n").unwrap();

        let error = CsvEdgeStore::new(&path).load_edges().unwrap_err();
        assert!(matches!(error, StorageError::MalformedLine { line: 3, .. }));
    }

    #[test]
    fn reports_wrong_field_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(&path, "A,B,1\nB,C\n").unwrap();

        let error = CsvEdgeStore::new(&path).load_edges().unwrap_err();
        assert!(matches!(error, StorageError::MalformedLine { line: 2, .. }));
    }
}
