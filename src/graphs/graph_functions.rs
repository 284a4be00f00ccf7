use std::{collections::BTreeSet, fmt};

use itertools::Itertools;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{edge::WeightedEdge, path::Path, AdjacencyGraph, Weight};

/// Storage key of the edge between an ordered pair of nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hex encoded SHA-256 over the length-prefixed origin followed by the
/// destination. The prefix keeps `("AB", "C")` and `("A", "BC")` apart.
/// The id of `(a, b)` differs from the id of `(b, a)`.
pub fn edge_id(origin: &str, destination: &str) -> EdgeId {
    let mut hasher = Sha256::new();
    hasher.update((origin.len() as u64).to_le_bytes());
    hasher.update(origin.as_bytes());
    hasher.update(destination.as_bytes());
    EdgeId(format!("{:x}", hasher.finalize()))
}

/// Every distinct label appearing as origin or destination, sorted.
pub fn edge_endpoints(edges: &[WeightedEdge]) -> BTreeSet<&str> {
    edges
        .iter()
        .flat_map(|edge| [edge.tail(), edge.head()])
        .collect()
}

/// Sum of the edge weights along consecutive nodes of `vertices`, or `None` if
/// two consecutive nodes are not connected or the sum overflows.
pub fn path_weight<S: AsRef<str>>(graph: &AdjacencyGraph, vertices: &[S]) -> Option<Weight> {
    vertices
        .iter()
        .tuple_windows()
        .try_fold(0, |weight: Weight, (tail, head)| {
            weight.checked_add(graph.get_edge_weight(tail.as_ref(), head.as_ref())?)
        })
}

/// Check if a path is a valid path of the given weight in `graph`.
pub fn validate_path(graph: &AdjacencyGraph, path: &Path, weight: Weight) -> Result<(), String> {
    if path.vertices.is_empty() {
        return Err("path is empty".to_string());
    }

    if path.weight != weight {
        return Err(format!(
            "wrong path weight, expected {} got {}",
            weight, path.weight
        ));
    }

    for (tail, head) in path.vertices.iter().tuple_windows() {
        if graph.get_edge_weight(tail, head).is_none() {
            return Err(format!("no edge between {} and {} found", tail, head));
        }
    }

    match path_weight(graph, &path.vertices) {
        Some(true_weight) if true_weight == weight => Ok(()),
        Some(true_weight) => Err(format!(
            "edges along the path sum to {} instead of {}",
            true_weight, weight
        )),
        None => Err("path weight overflowed".to_string()),
    }
}

/// Generates `number_of_edges` random edges between the nodes `n0` up to
/// `n{number_of_nodes - 1}`, with weights in `0..=max_weight`. Loops are
/// never generated.
pub fn random_edges<R: Rng>(
    rng: &mut R,
    number_of_nodes: u32,
    number_of_edges: u32,
    max_weight: Weight,
) -> Vec<WeightedEdge> {
    if number_of_nodes < 2 {
        return Vec::new();
    }

    (0..number_of_edges)
        .map(|_| {
            let tail = rng.gen_range(0..number_of_nodes);
            let mut head = rng.gen_range(0..number_of_nodes - 1);
            if head >= tail {
                head += 1;
            }
            let weight = rng.gen_range(0..=max_weight);
            WeightedEdge::new(format!("n{}", tail), format!("n{}", head), weight)
        })
        .collect()
}
