use std::collections::{BTreeMap, HashMap};

use graze_core::{GridPos, HerdObserver, SheepId, TickContext};
use graze_grid::GridWorld;
use graze_nav::{reconstruct, search, ForwardPath, SearchAlgorithm};
use tracing::{debug, info};

use crate::{
    decide, Cadence, Decision, HerdConfig, HerdError, InvariantViolation, MovementResolver, Sheep,
};

/// RNG stream for per-tick decisions.
const DECISION_STREAM: u64 = 0x5EED_0000_0000_0001;

/// Owns the grid and every sheep, and runs their turns strictly one after another.
#[derive(Debug, Clone)]
pub struct Herd {
    grid: GridWorld,
    sheep: BTreeMap<SheepId, Sheep>,
    config: HerdConfig,
    next_id: u64,
}

/// What happened during one [`Herd::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub decisions: Vec<(SheepId, Decision)>,
    pub spawned: Vec<SheepId>,
    pub regrown: usize,
}

impl TickReport {
    pub fn decision_for(&self, sheep: SheepId) -> Option<Decision> {
        self.decisions
            .iter()
            .find(|(id, _)| *id == sheep)
            .map(|(_, d)| *d)
    }
}

impl Herd {
    pub fn new(grid: GridWorld, config: HerdConfig) -> Self {
        Self {
            grid,
            sheep: BTreeMap::new(),
            config,
            next_id: 0,
        }
    }

    pub fn grid(&self) -> &GridWorld {
        &self.grid
    }

    /// Setup access to the grid. Moving occupancy through this bypasses the herd's bookkeeping;
    /// use [`Herd::check_occupancy`] afterwards.
    pub fn grid_mut(&mut self) -> &mut GridWorld {
        &mut self.grid
    }

    pub fn config(&self) -> &HerdConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.sheep.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheep.is_empty()
    }

    pub fn sheep(&self, id: SheepId) -> Option<&Sheep> {
        self.sheep.get(&id)
    }

    pub fn sheep_mut(&mut self, id: SheepId) -> Option<&mut Sheep> {
        self.sheep.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sheep> + '_ {
        self.sheep.values()
    }

    /// Place a new sheep on a free tile.
    pub fn spawn(&mut self, pos: GridPos, health: u8) -> Result<SheepId, HerdError> {
        let tile = self.grid.tile_at(pos)?;
        if !tile.is_passable() {
            return Err(HerdError::TileImpassable(pos));
        }
        if tile.is_occupied() {
            return Err(HerdError::TileOccupied(pos));
        }

        let id = SheepId(self.next_id);
        self.next_id += 1;

        let mut sheep = Sheep::new(id, pos, health, self.config.max_health);
        sheep.cadence = Cadence::deterministic(id, self.config.think_every_ticks);
        self.grid.set_occupied(pos, true)?;
        self.sheep.insert(id, sheep);

        info!(sheep = %id, %pos, health, "spawned");
        Ok(id)
    }

    /// Remove a sheep and free its tile.
    pub fn despawn(&mut self, id: SheepId) -> Result<Sheep, HerdError> {
        let sheep = self.sheep.remove(&id).ok_or(HerdError::UnknownSheep(id))?;
        self.grid.set_occupied(sheep.pos(), false)?;
        Ok(sheep)
    }

    /// Search from the sheep's current tile to `goal` and store the resulting forward path.
    ///
    /// An unreachable goal is not an error: the stored path covers whatever could be
    /// reconstructed and the sheep drops it on its next turn.
    pub fn request_path_to(
        &mut self,
        id: SheepId,
        goal: GridPos,
        algorithm: SearchAlgorithm,
        observer: &mut dyn HerdObserver,
    ) -> Result<&ForwardPath, HerdError> {
        let sheep = self.sheep.get_mut(&id).ok_or(HerdError::UnknownSheep(id))?;
        let source = sheep.pos();

        let result = search(algorithm, &self.grid, source, goal, observer)?;
        let path = reconstruct(&result.came_from, source, goal, observer);
        debug!(
            sheep = %id,
            %source,
            %goal,
            ?algorithm,
            steps = path.len(),
            reached = result.reached_goal,
            "path requested"
        );

        sheep.set_path(path);
        sheep.path().ok_or(HerdError::UnknownSheep(id))
    }

    /// Run one turn for every sheep whose cadence fires on `ctx.tick`, in id order.
    ///
    /// Each turn commits fully before the next sheep decides. Sheep spawned during the tick act
    /// from the next tick on.
    pub fn tick(
        &mut self,
        ctx: &TickContext,
        observer: &mut dyn HerdObserver,
    ) -> Result<TickReport, HerdError> {
        let mut report = TickReport {
            tick: ctx.tick,
            ..TickReport::default()
        };

        let ids: Vec<SheepId> = self.sheep.keys().copied().collect();
        for id in ids {
            let Some(sheep) = self.sheep.get_mut(&id) else {
                continue;
            };
            if !sheep.cadence.should_act(ctx.tick) {
                continue;
            }

            let mut rng = ctx.rng_for_agent(id, DECISION_STREAM);
            let decision = decide(sheep, &self.grid, &mut rng)?;
            let spawn_at = apply(decision, sheep, &mut self.grid, &self.config, observer)?;
            debug!(tick = ctx.tick, sheep = %id, decision = decision.label(), "turn");
            report.decisions.push((id, decision));

            if let (Some(at), true) = (spawn_at, self.config.spawn_on_request) {
                let child = self.spawn(at, self.config.spawn_health)?;
                report.spawned.push(child);
            }
        }

        let every = self.config.regrow_every_ticks as u64;
        if every > 0 && (ctx.tick + 1) % every == 0 {
            report.regrown = self.grid.regrow();
        }

        Ok(report)
    }

    /// Verify that occupancy flags and sheep positions agree.
    pub fn check_occupancy(&self) -> Result<(), InvariantViolation> {
        let mut by_pos: HashMap<GridPos, SheepId> = HashMap::with_capacity(self.sheep.len());
        for sheep in self.sheep.values() {
            let pos = sheep.pos();
            if let Some(first) = by_pos.insert(pos, sheep.id()) {
                return Err(InvariantViolation::SharedTile {
                    pos,
                    first,
                    second: sheep.id(),
                });
            }
            if sheep.health() > self.config.max_health {
                return Err(InvariantViolation::HealthOverflow {
                    sheep: sheep.id(),
                    health: sheep.health(),
                    max: self.config.max_health,
                });
            }
            match self.grid.tile_at(pos) {
                Ok(tile) if !tile.is_passable() => {
                    return Err(InvariantViolation::NotWalkable {
                        sheep: sheep.id(),
                        pos,
                    })
                }
                Ok(tile) if !tile.is_occupied() => {
                    return Err(InvariantViolation::MissingFlag {
                        sheep: sheep.id(),
                        pos,
                    })
                }
                Ok(_) => {}
                Err(_) => {
                    return Err(InvariantViolation::NotWalkable {
                        sheep: sheep.id(),
                        pos,
                    })
                }
            }
        }

        if let Some(stray) = self
            .grid
            .occupied_positions()
            .find(|pos| !by_pos.contains_key(pos))
        {
            return Err(InvariantViolation::StrayFlag(stray));
        }
        Ok(())
    }
}

/// Commit `decision`. Returns the tile a spawn was requested on, if any.
fn apply(
    decision: Decision,
    sheep: &mut Sheep,
    grid: &mut GridWorld,
    config: &HerdConfig,
    observer: &mut dyn HerdObserver,
) -> Result<Option<GridPos>, HerdError> {
    match decision {
        Decision::Breed { spawn_at } => {
            sheep.set_health(config.breed_health);
            observer.spawn_requested(sheep.id(), spawn_at);
            return Ok(Some(spawn_at));
        }
        Decision::ClearPath => sheep.clear_path(),
        Decision::PathBlocked { .. } => {}
        Decision::Eat => {
            grid.consume_edible(sheep.pos())?;
            sheep.set_health(sheep.health().saturating_add(1));
        }
        Decision::FollowPath { .. }
        | Decision::SeekFood { .. }
        | Decision::SeekCompanion { .. } => {
            if let Some(to) = decision.destination() {
                MovementResolver::commit_move(grid, sheep, to, observer)?;
            }
        }
    }
    Ok(None)
}
