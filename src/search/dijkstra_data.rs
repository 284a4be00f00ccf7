use ahash::{HashMap, HashMapExt};

use super::{reconstruction::find_shortest_path, PathError};
use crate::graphs::{edge::WeightedEdge, path::Path, NodeLabel, Weight, UNREACHED};

/// Distances and predecessors of a single source search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DijkstraData {
    distances: HashMap<NodeLabel, Weight>,
    predecessors: HashMap<NodeLabel, NodeLabel>,
}

impl DijkstraData {
    /// Every endpoint of `edge_endpoints` starts out [`UNREACHED`], `start` at
    /// distance 0.
    pub fn new(start: &str, edge_endpoints: &[WeightedEdge]) -> DijkstraData {
        let mut distances = HashMap::with_capacity(edge_endpoints.len() + 1);
        for edge in edge_endpoints {
            distances.insert(edge.tail().to_string(), UNREACHED);
            distances.insert(edge.head().to_string(), UNREACHED);
        }
        distances.insert(start.to_string(), 0);

        DijkstraData {
            distances,
            predecessors: HashMap::new(),
        }
    }

    /// `None` if the node was never seen, [`UNREACHED`] if it was seen but no
    /// path to it was found.
    pub fn distance(&self, node: &str) -> Option<Weight> {
        self.distances.get(node).copied()
    }

    pub fn predecessor(&self, node: &str) -> Option<&str> {
        self.predecessors.get(node).map(String::as_str)
    }

    pub fn distances(&self) -> &HashMap<NodeLabel, Weight> {
        &self.distances
    }

    pub fn predecessors(&self) -> &HashMap<NodeLabel, NodeLabel> {
        &self.predecessors
    }

    pub fn into_parts(self) -> (HashMap<NodeLabel, Weight>, HashMap<NodeLabel, NodeLabel>) {
        (self.distances, self.predecessors)
    }

    /// Nodes with a finite distance, including the start.
    pub fn reached_nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.distances
            .iter()
            .filter(|(_, distance)| **distance != UNREACHED)
            .map(|(node, _)| node.as_str())
    }

    /// Relaxes the edge `tail -> head`. Returns whether the distance of `head`
    /// improved. A sum that overflows never improves.
    pub fn update(&mut self, tail: &str, head: &str, edge_weight: Weight) -> bool {
        let Some(alternative_distance) = self
            .distance(tail)
            .filter(|&distance| distance != UNREACHED)
            .and_then(|distance| distance.checked_add(edge_weight))
        else {
            return false;
        };

        let current_distance = self.distance(head).unwrap_or(UNREACHED);
        if alternative_distance < current_distance {
            self.distances.insert(head.to_string(), alternative_distance);
            self.predecessors.insert(head.to_string(), tail.to_string());
            return true;
        }

        false
    }

    /// Shortest path from `start` to `end`, ordered from `start` to `end`.
    pub fn get_path(&self, start: &str, end: &str) -> Result<Path, PathError> {
        let no_path = || PathError::NoPath {
            start: start.to_string(),
            end: end.to_string(),
        };

        let weight = self
            .distance(end)
            .filter(|&distance| distance != UNREACHED)
            .ok_or_else(no_path)?;

        let mut vertices = find_shortest_path(start, end, &self.predecessors)?;
        vertices.reverse();

        Ok(Path { vertices, weight })
    }
}
