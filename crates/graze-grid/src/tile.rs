use graze_core::{Direction, GridPos};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_EDGE_COST: f32 = 1.0;

/// One grid cell. Tiles are created with the grid and never destroyed; only their fields change.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    pos: GridPos,
    edible: u8,
    passable: bool,
    occupied: bool,
    /// Cost of stepping from this tile toward each direction, indexed by `Direction::index`.
    costs: [f32; 4],
}

impl Tile {
    pub(crate) fn new(pos: GridPos) -> Self {
        Self {
            pos,
            edible: 0,
            passable: true,
            occupied: false,
            costs: [DEFAULT_EDGE_COST; 4],
        }
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn edible(&self) -> u8 {
        self.edible
    }

    pub fn is_passable(&self) -> bool {
        self.passable
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn cost_toward(&self, dir: Direction) -> f32 {
        self.costs[dir.index()]
    }

    pub(crate) fn set_edible(&mut self, level: u8) {
        self.edible = level;
    }

    pub(crate) fn set_passable(&mut self, passable: bool) {
        self.passable = passable;
    }

    pub(crate) fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    pub(crate) fn set_cost(&mut self, dir: Direction, cost: f32) {
        self.costs[dir.index()] = cost;
    }
}
