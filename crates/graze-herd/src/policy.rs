use graze_core::{DeterministicRng, Direction, GridPos};
use graze_grid::{GridError, GridWorld};

use crate::{candidate_moves, find_companion, find_food, BiasMask, Sheep};

/// What a sheep chose to do this tick. Produced by [`decide`], committed by [`crate::Herd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Spend the turn asking for a new sheep at `spawn_at`.
    Breed { spawn_at: GridPos },
    /// The commanded path is finished or no longer covers the current tile.
    ClearPath,
    /// Take the commanded step.
    FollowPath { to: GridPos },
    /// The commanded step is taken by another sheep; keep the path and wait.
    PathBlocked { next: GridPos },
    /// Eat one unit from the current tile.
    Eat,
    /// Hungry: head toward `target` (or wander when none is in sight).
    SeekFood {
        target: Option<GridPos>,
        to: Option<GridPos>,
    },
    /// Full: head toward another sheep (or wander when none is in sight).
    SeekCompanion {
        target: Option<GridPos>,
        to: Option<GridPos>,
    },
}

impl Decision {
    /// The tile this decision moves the sheep onto, if any.
    pub fn destination(&self) -> Option<GridPos> {
        match *self {
            Decision::FollowPath { to } => Some(to),
            Decision::SeekFood { to, .. } | Decision::SeekCompanion { to, .. } => to,
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Decision::Breed { .. } => "breed",
            Decision::ClearPath => "clear_path",
            Decision::FollowPath { .. } => "follow_path",
            Decision::PathBlocked { .. } => "path_blocked",
            Decision::Eat => "eat",
            Decision::SeekFood { .. } => "seek_food",
            Decision::SeekCompanion { .. } => "seek_companion",
        }
    }
}

fn has_adjacent_sheep(grid: &GridWorld, pos: GridPos) -> bool {
    Direction::ALL.into_iter().any(|dir| {
        grid.tile_at(pos.step(dir))
            .map(|t| t.is_passable() && t.is_occupied())
            .unwrap_or(false)
    })
}

/// Evaluate the priority-ordered policy for one sheep without mutating anything.
///
/// Fullness is judged against the sheep's own `max_health`. `rng` is only drawn from when a
/// uniform choice between candidate tiles is needed.
pub fn decide<R: DeterministicRng>(
    sheep: &Sheep,
    grid: &GridWorld,
    rng: &mut R,
) -> Result<Decision, GridError> {
    let pos = sheep.pos();
    let full = sheep.is_full();

    if full && has_adjacent_sheep(grid, pos) {
        let spawns = candidate_moves(grid, pos, BiasMask::NONE);
        if let Some(&spawn_at) = rng.choose(&spawns) {
            return Ok(Decision::Breed { spawn_at });
        }
    }

    if let Some(path) = sheep.path() {
        if pos == path.goal() {
            return Ok(Decision::ClearPath);
        }
        let Some(next) = path.next_step(pos) else {
            return Ok(Decision::ClearPath);
        };
        if !grid.is_free(next) {
            return Ok(Decision::PathBlocked { next });
        }
        return Ok(Decision::FollowPath { to: next });
    }

    if !full {
        if grid.edible_level(pos)? > 0 {
            return Ok(Decision::Eat);
        }
        let target = find_food(grid, pos);
        let to = pick_move(grid, pos, target, rng);
        return Ok(Decision::SeekFood { target, to });
    }

    let target = find_companion(grid, pos);
    let to = pick_move(grid, pos, target, rng);
    Ok(Decision::SeekCompanion { target, to })
}

/// Uniformly pick among the free tiles the bias toward `target` allows.
///
/// A fully biased mask next to a blocking sheep leaves nothing to pick; the sheep stays put.
fn pick_move<R: DeterministicRng>(
    grid: &GridWorld,
    pos: GridPos,
    target: Option<GridPos>,
    rng: &mut R,
) -> Option<GridPos> {
    let mask = BiasMask::toward(pos, target);
    let moves = candidate_moves(grid, pos, mask);
    rng.choose(&moves).copied()
}
