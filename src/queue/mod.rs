use std::cmp::Ordering;

use crate::graphs::{NodeLabel, Weight};

pub mod heap_queue;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DijkstraQueueElement {
    pub weight: Weight,
    pub vertex: NodeLabel,
}

/// Reversed on weight and then on label, so a max-heap like `BinaryHeap`
/// pops the smallest weight first and, among equal weights, the lowest label.
impl Ord for DijkstraQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for DijkstraQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DijkstraQueueElement {
    pub fn new(weight: Weight, vertex: impl Into<NodeLabel>) -> DijkstraQueueElement {
        DijkstraQueueElement {
            weight,
            vertex: vertex.into(),
        }
    }
}

pub trait DijkstaQueue {
    fn push(&mut self, state: DijkstraQueueElement);
    fn pop(&mut self) -> Option<DijkstraQueueElement>;
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
}
