use std::collections::BTreeMap;

use graze_core::{GridPos, HerdObserver};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Source-to-goal walk: each position maps to the next step toward `goal`.
///
/// Only the segment that could be reconstructed is present, so a truncated search yields a path
/// that does not contain the source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForwardPath {
    steps: BTreeMap<GridPos, GridPos>,
    goal: GridPos,
}

impl ForwardPath {
    pub fn new(steps: BTreeMap<GridPos, GridPos>, goal: GridPos) -> Self {
        Self { steps, goal }
    }

    pub fn goal(&self) -> GridPos {
        self.goal
    }

    pub fn next_step(&self, from: GridPos) -> Option<GridPos> {
        self.steps.get(&from).copied()
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.steps.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Positions visited when walking from `start`, excluding `start` itself.
    pub fn walk_from(&self, start: GridPos) -> Vec<GridPos> {
        let mut out = Vec::new();
        let mut current = start;
        while let Some(next) = self.next_step(current) {
            if out.len() >= self.steps.len() {
                break;
            }
            out.push(next);
            current = next;
        }
        out
    }
}

/// Walk `came_from` backward from `goal` to `source`, inverting each link into a forward step.
/// Stops early at the first tile with no predecessor.
pub fn reconstruct(
    came_from: &BTreeMap<GridPos, GridPos>,
    source: GridPos,
    goal: GridPos,
    observer: &mut dyn HerdObserver,
) -> ForwardPath {
    let mut steps = BTreeMap::new();
    let mut current = goal;

    // A predecessor tree visits each key at most once.
    for _ in 0..=came_from.len() {
        if current == source {
            break;
        }
        observer.path_chosen(current);
        let Some(&prev) = came_from.get(&current) else {
            break;
        };
        steps.insert(prev, current);
        current = prev;
    }

    ForwardPath::new(steps, goal)
}
