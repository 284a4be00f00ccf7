//! Shortest paths between named locations.
//!
//! Edges are `(origin, destination, length)` triples. [`graphs::graph_factory`]
//! turns them into an adjacency graph, [`search::dijkstra`] computes distances
//! and predecessors from a start node and [`search::reconstruction`] walks the
//! predecessors back into a path. [`network::PathNetwork`] ties these to an
//! [`storage::EdgeStore`].

pub mod graphs;
pub mod network;
pub mod queue;
pub mod search;
pub mod storage;
pub mod utility;

pub use graphs::{
    graph_factory::build_graph, AdjacencyGraph, Directedness, NodeLabel, Weight, UNREACHED,
};
pub use search::{dijkstra::dijkstra, reconstruction::find_shortest_path, PathError};
