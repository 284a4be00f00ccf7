use super::{
    edge::{MalformedEdgeError, WeightedEdge},
    AdjacencyGraph, Directedness,
};

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Builds an adjacency graph from typed edges. Later edges between the
    /// same pair of nodes overwrite earlier ones.
    pub fn from_edges(edges: &[WeightedEdge], directedness: Directedness) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        edges.iter().for_each(|edge| {
            graph.set_edge(edge);
            if directedness == Directedness::Undirected {
                graph.set_edge(&edge.reversed());
            }
        });
        graph
    }

    pub fn from_records<R, S>(
        records: impl IntoIterator<Item = R>,
        directedness: Directedness,
    ) -> Result<(AdjacencyGraph, Vec<WeightedEdge>), MalformedEdgeError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let edges = parse_edges(records)?;
        let graph = Self::from_edges(&edges, directedness);
        Ok((graph, edges))
    }
}

/// Parses raw `(origin, destination, length)` records, failing on the first
/// malformed one.
pub fn parse_edges<R, S>(
    records: impl IntoIterator<Item = R>,
) -> Result<Vec<WeightedEdge>, MalformedEdgeError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    records
        .into_iter()
        .map(|record| WeightedEdge::from_fields(record.as_ref()))
        .collect()
}

/// Builds an adjacency graph from raw edge records. With
/// [`Directedness::Undirected`] every edge is also inserted in reverse.
pub fn build_graph<R, S>(
    records: impl IntoIterator<Item = R>,
    directedness: Directedness,
) -> Result<AdjacencyGraph, MalformedEdgeError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    GraphFactory::from_records(records, directedness).map(|(graph, _)| graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::Directedness::{Directed, Undirected};

    #[test]
    fn directed_insertion_keeps_one_direction() {
        let graph = build_graph([["A", "B", "10"]], Directed).unwrap();
        assert_eq!(graph.get_edge_weight("A", "B"), Some(10));
        assert_eq!(graph.get_edge_weight("B", "A"), None);
        assert!(!graph.contains_node("B"));
    }

    #[test]
    fn undirected_insertion_adds_reverse_edge() {
        let graph = build_graph([["A", "B", "4"]], Undirected).unwrap();
        assert_eq!(graph.get_edge_weight("A", "B"), Some(4));
        assert_eq!(graph.get_edge_weight("B", "A"), Some(4));
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn last_write_wins() {
        let graph = build_graph([["A", "B", "10"], ["A", "B", "3"]], Directed).unwrap();
        assert_eq!(graph.get_edge_weight("A", "B"), Some(3));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let records = vec![vec!["A", "B"]];
        assert_eq!(
            build_graph(records, Directed),
            Err(MalformedEdgeError::WrongFieldCount { found: 2 })
        );

        let records = vec![vec!["A", "B", "1", "2"]];
        assert_eq!(
            build_graph(records, Directed),
            Err(MalformedEdgeError::WrongFieldCount { found: 4 })
        );
    }

    #[test]
    fn rejects_invalid_lengths() {
        for length in ["-1", "ten", "", "1.5", "99999999999"] {
            let result = build_graph([["A", "B", length]], Directed);
            assert_eq!(
                result,
                Err(MalformedEdgeError::InvalidLength {
                    length: length.to_string()
                })
            );
        }
    }

    #[test]
    fn accepts_padded_length() {
        let graph = build_graph([["A", "B", " 7 "]], Directed).unwrap();
        assert_eq!(graph.get_edge_weight("A", "B"), Some(7));
    }
}
