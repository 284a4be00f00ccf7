use std::collections::BTreeSet;

use ahash::{HashSet, HashSetExt};

use super::{dijkstra_data::DijkstraData, PathError, PathFinding};
use crate::{
    graphs::{
        edge::WeightedEdge,
        path::{Path, ShortestPathRequest},
        AdjacencyGraph, UNREACHED,
    },
    queue::{heap_queue::HeapQueue, DijkstaQueue, DijkstraQueueElement},
};

/// Single source Dijkstra over the adjacency graph.
///
/// `edge_endpoints` must be the edge list `graph` was built from; every label
/// in it shows up in the result, unreached ones with distance [`UNREACHED`].
/// Only nodes with outgoing edges are ever settled. Among unsettled nodes of
/// equal distance the lexicographically lowest label is settled first.
///
/// Runs in O(n^2) for n nodes, which is fine for graphs of a few hundred
/// nodes. See [`dijkstra_with_queue`] for larger graphs.
pub fn dijkstra(
    graph: &AdjacencyGraph,
    start: &str,
    edge_endpoints: &[WeightedEdge],
) -> DijkstraData {
    search(graph, start, edge_endpoints, None)
}

/// Like [`dijkstra`] but stops as soon as `target` is settled. Distances of
/// nodes that were not settled yet may not be final.
pub fn dijkstra_single_pair(
    graph: &AdjacencyGraph,
    start: &str,
    target: &str,
    edge_endpoints: &[WeightedEdge],
) -> DijkstraData {
    search(graph, start, edge_endpoints, Some(target))
}

fn search(
    graph: &AdjacencyGraph,
    start: &str,
    edge_endpoints: &[WeightedEdge],
    target: Option<&str>,
) -> DijkstraData {
    let mut data = DijkstraData::new(start, edge_endpoints);
    let mut unsettled: BTreeSet<&str> = graph.nodes().collect();

    while let Some(tail) = closest_unsettled(&unsettled, &data) {
        unsettled.remove(tail);
        if Some(tail) == target {
            break;
        }

        for (head, weight) in graph.out_edges(tail) {
            data.update(tail, head, weight);
        }
    }

    data
}

/// Unsettled node with the smallest finite distance, lowest label on ties.
fn closest_unsettled<'a>(unsettled: &BTreeSet<&'a str>, data: &DijkstraData) -> Option<&'a str> {
    unsettled
        .iter()
        .map(|&node| (data.distance(node).unwrap_or(UNREACHED), node))
        .filter(|&(distance, _)| distance != UNREACHED)
        .min()
        .map(|(_, node)| node)
}

/// Same contract and result as [`dijkstra`], backed by a binary heap with
/// lazy deletion. Runs in O((n + m) log n).
pub fn dijkstra_with_queue(
    graph: &AdjacencyGraph,
    start: &str,
    edge_endpoints: &[WeightedEdge],
) -> DijkstraData {
    let mut data = DijkstraData::new(start, edge_endpoints);
    let mut settled = HashSet::new();
    let mut queue = HeapQueue::with_capacity(graph.number_of_nodes());
    queue.push(DijkstraQueueElement::new(0, start));

    while let Some(DijkstraQueueElement { weight, vertex }) = queue.pop() {
        // stale entry or settled already
        if data.distance(&vertex) != Some(weight) || !settled.insert(vertex.clone()) {
            continue;
        }

        for (head, edge_weight) in graph.out_edges(&vertex) {
            if data.update(&vertex, head, edge_weight) {
                let distance = data.distance(head).unwrap_or(UNREACHED);
                queue.push(DijkstraQueueElement::new(distance, head));
            }
        }
    }

    data
}

/// Answers shortest path requests on a graph together with the edge list it
/// was built from.
#[derive(Clone, Copy)]
pub struct Dijkstra<'a> {
    graph: &'a AdjacencyGraph,
    edges: &'a [WeightedEdge],
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a AdjacencyGraph, edges: &'a [WeightedEdge]) -> Self {
        Dijkstra { graph, edges }
    }

    pub fn single_source(&self, start: &str) -> DijkstraData {
        dijkstra(self.graph, start, self.edges)
    }
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, path_request: &ShortestPathRequest) -> Result<Path, PathError> {
        let data = dijkstra_single_pair(
            self.graph,
            path_request.source(),
            path_request.target(),
            self.edges,
        );
        data.get_path(path_request.source(), path_request.target())
    }
}
