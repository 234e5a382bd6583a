use graze_core::{Direction, GridPos};
use graze_grid::GridWorld;

/// Directions a sheep refuses to step in because they lead away from its current interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BiasMask {
    excluded: [bool; 4],
}

impl BiasMask {
    pub const NONE: BiasMask = BiasMask {
        excluded: [false; 4],
    };

    /// Exclude every direction that cannot reduce the distance to `target`.
    ///
    /// With no target nothing is excluded.
    pub fn toward(from: GridPos, target: Option<GridPos>) -> Self {
        let Some(target) = target else {
            return Self::NONE;
        };
        let mut excluded = [false; 4];
        excluded[Direction::North.index()] = target.y > from.y;
        excluded[Direction::South.index()] = target.y < from.y;
        excluded[Direction::West.index()] = target.x > from.x;
        excluded[Direction::East.index()] = target.x < from.x;
        Self { excluded }
    }

    pub fn excludes(&self, dir: Direction) -> bool {
        self.excluded[dir.index()]
    }

    pub fn allowed(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| !self.excludes(*d))
    }
}

/// Free neighbor tiles in N, S, W, E order, restricted to the directions `mask` allows.
pub fn candidate_moves(grid: &GridWorld, from: GridPos, mask: BiasMask) -> Vec<GridPos> {
    mask.allowed()
        .map(|dir| from.step(dir))
        .filter(|pos| grid.is_free(*pos))
        .collect()
}
