use std::collections::hash_map::Iter;

use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

use self::edge::WeightedEdge;

pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod path;

pub type NodeLabel = String;
pub type Weight = u32;

/// Distance of every node that is known but was never reached by a search.
/// Larger than any real path length.
pub const UNREACHED: Weight = Weight::MAX;

/// Whether an edge may only be traversed from its origin to its destination
/// or in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directedness {
    Directed,
    Undirected,
}

/// Adjacency list graph keyed by node label.
///
/// Only nodes with at least one outgoing edge are keys of the outer map. A
/// node that only ever appears as a destination has no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    out_edges: HashMap<NodeLabel, HashMap<NodeLabel, Weight>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        AdjacencyGraph {
            out_edges: HashMap::new(),
        }
    }

    /// Inserts `tail -> head` with the edge's weight. An existing edge between
    /// the same pair is overwritten.
    pub fn set_edge(&mut self, edge: &WeightedEdge) {
        self.out_edges
            .entry(edge.tail().to_string())
            .or_default()
            .insert(edge.head().to_string(), edge.weight());
    }

    pub fn get_edge_weight(&self, tail: &str, head: &str) -> Option<Weight> {
        self.out_edges.get(tail)?.get(head).copied()
    }

    pub fn out_edges(&self, tail: &str) -> OutEdgeIterator<'_> {
        OutEdgeIterator {
            tail_less_edges: self.out_edges.get(tail).map(|edges| edges.iter()),
        }
    }

    /// All nodes with at least one outgoing edge, in no particular order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.out_edges.keys().map(String::as_str)
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.out_edges.contains_key(node)
    }

    pub fn number_of_nodes(&self) -> usize {
        self.out_edges.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.out_edges.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.out_edges.is_empty()
    }
}

/// Iterates `(head, weight)` pairs of a single node's outgoing edges.
pub struct OutEdgeIterator<'a> {
    tail_less_edges: Option<Iter<'a, NodeLabel, Weight>>,
}

impl<'a> Iterator for OutEdgeIterator<'a> {
    type Item = (&'a str, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        let (head, weight) = self.tail_less_edges.as_mut()?.next()?;
        Some((head.as_str(), *weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
    fn len(&self) -> usize {
        self.tail_less_edges.as_ref().map_or(0, ExactSizeIterator::len)
    }
}
