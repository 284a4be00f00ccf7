use std::collections::BinaryHeap;

use super::{DijkstaQueue, DijkstraQueueElement};

/// Min-queue over `(weight, label)` backed by a binary heap. Entries are never
/// decreased in place; stale entries have to be skipped by the caller.
#[derive(Clone, Debug, Default)]
pub struct HeapQueue {
    queue: BinaryHeap<DijkstraQueueElement>,
}

impl HeapQueue {
    pub fn new() -> HeapQueue {
        HeapQueue {
            queue: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> HeapQueue {
        HeapQueue {
            queue: BinaryHeap::with_capacity(capacity),
        }
    }
}

impl DijkstaQueue for HeapQueue {
    fn push(&mut self, state: DijkstraQueueElement) {
        self.queue.push(state)
    }

    fn pop(&mut self) -> Option<DijkstraQueueElement> {
        self.queue.pop()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}
