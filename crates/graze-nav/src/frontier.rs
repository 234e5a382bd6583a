use core::cmp::Ordering;
use std::collections::BinaryHeap;

use graze_core::GridPos;

#[derive(Debug)]
pub(crate) struct OpenNode {
    pub(crate) cost: f32,
    pub(crate) cell: GridPos,
    tie: u64,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap; equal costs pop in
        // insertion order.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

/// Discovered-but-unexpanded tiles keyed by accumulated cost.
///
/// Re-inserting a tile leaves its older entry in the heap; callers skip entries whose cost no
/// longer matches their cost-so-far.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<OpenNode>,
    tie: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, cell: GridPos, cost: f32) {
        self.heap.push(OpenNode {
            cost,
            cell,
            tie: self.tie,
        });
        self.tie += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<OpenNode> {
        self.heap.pop()
    }
}
