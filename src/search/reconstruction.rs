use ahash::{HashMap, HashSet, HashSetExt};

use super::PathError;
use crate::graphs::NodeLabel;

/// Walks the predecessor map back from `end` until `start` is reached.
///
/// The returned labels are ordered from `end` to `start`, both included. If
/// `start == end` the result is `[start]`.
pub fn find_shortest_path(
    start: &str,
    end: &str,
    predecessors: &HashMap<NodeLabel, NodeLabel>,
) -> Result<Vec<NodeLabel>, PathError> {
    let mut shortest_path = Vec::new();
    let mut visited = HashSet::new();
    let mut head = end;

    while head != start {
        if !visited.insert(head) {
            return Err(PathError::PredecessorCycle {
                end: end.to_string(),
                node: head.to_string(),
            });
        }
        shortest_path.push(head.to_string());
        head = predecessors
            .get(head)
            .map(String::as_str)
            .ok_or_else(|| PathError::NoPath {
                start: start.to_string(),
                end: end.to_string(),
            })?;
    }
    shortest_path.push(start.to_string());

    Ok(shortest_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predecessors(pairs: &[(&str, &str)]) -> HashMap<NodeLabel, NodeLabel> {
        pairs
            .iter()
            .map(|(node, predecessor)| (node.to_string(), predecessor.to_string()))
            .collect()
    }

    #[test]
    fn walks_back_to_start() {
        let predecessors = predecessors(&[("B", "A"), ("C", "B")]);
        assert_eq!(
            find_shortest_path("A", "C", &predecessors),
            Ok(vec!["C".to_string(), "B".to_string(), "A".to_string()])
        );
    }

    #[test]
    fn start_equals_end() {
        assert_eq!(
            find_shortest_path("A", "A", &HashMap::default()),
            Ok(vec!["A".to_string()])
        );
    }

    #[test]
    fn dead_end_is_no_path() {
        let predecessors = predecessors(&[("C", "B")]);
        assert_eq!(
            find_shortest_path("A", "C", &predecessors),
            Err(PathError::NoPath {
                start: "A".to_string(),
                end: "C".to_string()
            })
        );
    }

    #[test]
    fn cycle_is_detected() {
        let predecessors = predecessors(&[("B", "C"), ("C", "B")]);
        assert_eq!(
            find_shortest_path("A", "C", &predecessors),
            Err(PathError::PredecessorCycle {
                end: "C".to_string(),
                node: "C".to_string()
            })
        );
    }
}
