use graze_core::{AgentId, GridPos, SheepId};
use graze_nav::ForwardPath;

/// When a sheep gets a turn: on ticks where `(tick + offset) % every == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub every_ticks: u32,
    pub offset_ticks: u32,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            every_ticks: 1,
            offset_ticks: 0,
        }
    }
}

impl Cadence {
    /// Spread sheep across the cycle by id so they don't all act on the same tick.
    pub fn deterministic(sheep: impl AgentId, every_ticks: u32) -> Self {
        let every = every_ticks.max(1);
        let offset = (sheep.stable_id() % (every as u64)) as u32;
        Self {
            every_ticks: every,
            offset_ticks: offset,
        }
    }

    pub fn should_act(&self, tick: u64) -> bool {
        let every = self.every_ticks.max(1) as u64;
        ((tick + (self.offset_ticks as u64)) % every) == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheep {
    id: SheepId,
    pos: GridPos,
    health: u8,
    max_health: u8,
    path: Option<ForwardPath>,
    pub cadence: Cadence,
}

impl Sheep {
    pub(crate) fn new(id: SheepId, pos: GridPos, health: u8, max_health: u8) -> Self {
        Self {
            id,
            pos,
            health: health.min(max_health),
            max_health,
            path: None,
            cadence: Cadence::default(),
        }
    }

    pub fn id(&self) -> SheepId {
        self.id
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn max_health(&self) -> u8 {
        self.max_health
    }

    pub fn is_full(&self) -> bool {
        self.health >= self.max_health
    }

    pub fn path(&self) -> Option<&ForwardPath> {
        self.path.as_ref()
    }

    /// Clamped to `0..=max_health`.
    pub fn set_health(&mut self, health: u8) {
        self.health = health.min(self.max_health);
    }

    pub fn set_path(&mut self, path: ForwardPath) {
        self.path = Some(path);
    }

    pub fn clear_path(&mut self) {
        self.path = None;
    }

    /// Only [`crate::MovementResolver`] moves sheep.
    pub(crate) fn set_pos(&mut self, pos: GridPos) {
        self.pos = pos;
    }
}
