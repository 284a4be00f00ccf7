use itertools::Itertools;
use tracing::{debug, info};

use crate::{
    graphs::{
        edge::{MalformedEdgeError, WeightedEdge},
        graph_factory::GraphFactory,
        graph_functions::{edge_endpoints, edge_id},
        path::{Path, ShortestPathRequest},
        AdjacencyGraph, Directedness, NodeLabel, Weight,
    },
    search::{
        dijkstra::Dijkstra,
        PathError, PathFinding,
    },
    storage::{EdgeStore, StorageError},
};

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Malformed(#[from] MalformedEdgeError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("node labels must not be empty")]
    EmptyLabel,

    #[error("{0:?} is not a node of the network")]
    UnknownNode(NodeLabel),

    #[error("a path cannot start and end at {0:?}")]
    SelfLoop(NodeLabel),

    #[error("{0} already exists")]
    DuplicatePath(WeightedEdge),

    #[error("there is no path from {origin:?} to {destination:?}")]
    MissingPath {
        origin: NodeLabel,
        destination: NodeLabel,
    },
}

/// A network of named locations persisted in an [`EdgeStore`].
///
/// Every call reads the current edge list from the store, so edits made by
/// someone else between calls are picked up.
pub struct PathNetwork<S> {
    store: S,
    directedness: Directedness,
}

impl<S: EdgeStore> PathNetwork<S> {
    pub fn new(store: S, directedness: Directedness) -> Self {
        PathNetwork {
            store,
            directedness,
        }
    }

    pub fn edges(&self) -> Result<Vec<WeightedEdge>, NetworkError> {
        Ok(self.store.load_edges()?)
    }

    pub fn graph(&self) -> Result<AdjacencyGraph, NetworkError> {
        let edges = self.edges()?;
        Ok(GraphFactory::from_edges(&edges, self.directedness))
    }

    /// Stores `origin -> destination`, and with `two_way` also
    /// `destination -> origin`, both of the given length.
    pub fn add_path(
        &mut self,
        origin: &str,
        destination: &str,
        length: Weight,
        two_way: bool,
    ) -> Result<Vec<WeightedEdge>, NetworkError> {
        if origin.is_empty() || destination.is_empty() {
            return Err(NetworkError::EmptyLabel);
        }
        if origin == destination {
            return Err(NetworkError::SelfLoop(origin.to_string()));
        }

        let mut edges = self.edges()?;
        let mut existing: Vec<_> = edges
            .iter()
            .map(|edge| edge_id(edge.tail(), edge.head()))
            .collect();
        // an undirected edge blocks both orientations
        if self.directedness == Directedness::Undirected {
            existing.extend(edges.iter().map(|edge| edge_id(edge.head(), edge.tail())));
        }

        let forward = WeightedEdge::new(origin, destination, length);
        let mut added = vec![forward.clone()];
        if two_way {
            added.push(forward.reversed());
        }

        if let Some(duplicate) = added
            .iter()
            .find(|edge| existing.contains(&edge_id(edge.tail(), edge.head())))
        {
            debug!(path = %duplicate, "refusing duplicate path");
            return Err(NetworkError::DuplicatePath(duplicate.clone()));
        }

        edges.extend(added.iter().cloned());
        self.store.save_edges(&edges)?;
        info!(path = %forward, two_way, "added path");

        Ok(added)
    }

    /// Removes the stored path `origin -> destination`. The reverse direction
    /// of a two-way path is left alone.
    pub fn remove_path(
        &mut self,
        origin: &str,
        destination: &str,
    ) -> Result<WeightedEdge, NetworkError> {
        let mut edges = self.edges()?;
        let id = edge_id(origin, destination);
        let position = edges
            .iter()
            .position(|edge| edge_id(edge.tail(), edge.head()) == id)
            .ok_or_else(|| missing_path(origin, destination))?;

        let removed = edges.remove(position);
        self.store.save_edges(&edges)?;
        info!(path = %removed, "removed path");

        Ok(removed)
    }

    /// Sets the length of the stored path `origin -> destination` and returns
    /// the updated edge. On an undirected network a path stored as
    /// `destination -> origin` is changed as well, keeping its orientation.
    pub fn change_path(
        &mut self,
        origin: &str,
        destination: &str,
        length: Weight,
    ) -> Result<WeightedEdge, NetworkError> {
        let mut edges = self.edges()?;
        let mut ids = vec![edge_id(origin, destination)];
        if self.directedness == Directedness::Undirected {
            ids.push(edge_id(destination, origin));
        }

        let position = edges
            .iter()
            .position(|edge| ids.contains(&edge_id(edge.tail(), edge.head())))
            .ok_or_else(|| missing_path(origin, destination))?;

        let old_length = edges[position].weight();
        let changed = WeightedEdge::new(edges[position].tail(), edges[position].head(), length);
        edges[position] = changed.clone();
        self.store.save_edges(&edges)?;
        info!(path = %changed, old_length, "changed path length");

        Ok(changed)
    }

    /// Every stored path as `origin-length->destination`, sorted.
    pub fn describe_paths(&self) -> Result<Vec<String>, NetworkError> {
        Ok(self
            .edges()?
            .iter()
            .map(WeightedEdge::to_string)
            .sorted()
            .collect())
    }

    /// Nodes a search can start from: those with at least one outgoing edge.
    pub fn start_nodes(&self) -> Result<Vec<NodeLabel>, NetworkError> {
        Ok(self.graph()?.nodes().map(str::to_string).sorted().collect())
    }

    /// Every node appearing as origin or destination of a path.
    pub fn known_nodes(&self) -> Result<Vec<NodeLabel>, NetworkError> {
        let edges = self.edges()?;
        Ok(edge_endpoints(&edges)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Nodes with a path from `start`, excluding `start` itself.
    pub fn reachable_from(&self, start: &str) -> Result<Vec<NodeLabel>, NetworkError> {
        let edges = self.edges()?;
        let graph = GraphFactory::from_edges(&edges, self.directedness);
        if !graph.contains_node(start) {
            return Err(NetworkError::UnknownNode(start.to_string()));
        }

        let data = Dijkstra::new(&graph, &edges).single_source(start);
        Ok(data
            .reached_nodes()
            .filter(|&node| node != start)
            .map(str::to_string)
            .sorted()
            .collect())
    }

    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Path, NetworkError> {
        let edges = self.edges()?;
        let graph = GraphFactory::from_edges(&edges, self.directedness);
        if !graph.contains_node(start) {
            return Err(NetworkError::UnknownNode(start.to_string()));
        }
        if !edge_endpoints(&edges).contains(end) {
            return Err(NetworkError::UnknownNode(end.to_string()));
        }

        let request = ShortestPathRequest::new(start, end);
        let path = Dijkstra::new(&graph, &edges).shortest_path(&request)?;
        debug!(start, end, weight = path.weight, "found shortest path");

        Ok(path)
    }
}

fn missing_path(origin: &str, destination: &str) -> NetworkError {
    NetworkError::MissingPath {
        origin: origin.to_string(),
        destination: destination.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryEdgeStore;

    fn network() -> PathNetwork<MemoryEdgeStore> {
        PathNetwork::new(MemoryEdgeStore::new(), Directedness::Directed)
    }

    #[test]
    fn two_way_paths_store_both_directions() {
        let mut network = network();
        let added = network.add_path("A", "B", 3, true).unwrap();
        assert_eq!(added.len(), 2);
        assert_eq!(
            network.describe_paths().unwrap(),
            vec!["A-3->B".to_string(), "B-3->A".to_string()]
        );
    }

    #[test]
    fn refuses_duplicates_and_loops() {
        let mut network = network();
        network.add_path("A", "B", 3, false).unwrap();

        assert!(matches!(
            network.add_path("A", "B", 7, false),
            Err(NetworkError::DuplicatePath(_))
        ));
        assert!(matches!(
            network.add_path("B", "A", 7, true),
            Err(NetworkError::DuplicatePath(_))
        ));
        assert!(matches!(
            network.add_path("A", "A", 1, false),
            Err(NetworkError::SelfLoop(_))
        ));
        assert!(matches!(
            network.add_path("", "A", 1, false),
            Err(NetworkError::EmptyLabel)
        ));
        assert_eq!(network.edges().unwrap().len(), 1);
    }

    #[test]
    fn remove_keeps_reverse_direction() {
        let mut network = network();
        network.add_path("A", "B", 3, true).unwrap();
        let removed = network.remove_path("A", "B").unwrap();
        assert_eq!(removed, WeightedEdge::new("A", "B", 3));
        assert_eq!(network.describe_paths().unwrap(), vec!["B-3->A".to_string()]);

        assert!(matches!(
            network.remove_path("A", "B"),
            Err(NetworkError::MissingPath { .. })
        ));
    }

    #[test]
    fn undirected_refuses_reverse_duplicate() {
        let mut network = PathNetwork::new(MemoryEdgeStore::new(), Directedness::Undirected);
        network.add_path("A", "B", 10, false).unwrap();

        assert!(matches!(
            network.add_path("B", "A", 3, false),
            Err(NetworkError::DuplicatePath(edge)) if edge == WeightedEdge::new("B", "A", 3)
        ));
        assert_eq!(
            network.edges().unwrap(),
            vec![WeightedEdge::new("A", "B", 10)]
        );
        assert_eq!(network.shortest_path("B", "A").unwrap().weight, 10);
    }

    #[test]
    fn directed_allows_reverse_path() {
        let mut network = network();
        network.add_path("A", "B", 10, false).unwrap();
        network.add_path("B", "A", 3, false).unwrap();
        assert_eq!(network.edges().unwrap().len(), 2);
    }

    #[test]
    fn change_updates_length_in_place() {
        let mut network = PathNetwork::new(
            MemoryEdgeStore::from_edges(vec![
                WeightedEdge::new("A", "B", 10),
                WeightedEdge::new("B", "C", 5),
            ]),
            Directedness::Directed,
        );

        let changed = network.change_path("A", "B", 2).unwrap();
        assert_eq!(changed, WeightedEdge::new("A", "B", 2));
        assert_eq!(
            network.edges().unwrap(),
            vec![WeightedEdge::new("A", "B", 2), WeightedEdge::new("B", "C", 5)]
        );
        assert_eq!(network.shortest_path("A", "C").unwrap().weight, 7);

        assert!(matches!(
            network.change_path("B", "A", 1),
            Err(NetworkError::MissingPath { .. })
        ));
    }

    #[test]
    fn change_on_undirected_matches_either_orientation() {
        let mut network = PathNetwork::new(
            MemoryEdgeStore::from_edges(vec![WeightedEdge::new("A", "B", 10)]),
            Directedness::Undirected,
        );

        let changed = network.change_path("B", "A", 4).unwrap();
        assert_eq!(changed, WeightedEdge::new("A", "B", 4));
        assert_eq!(network.edges().unwrap(), vec![changed]);
    }
}
