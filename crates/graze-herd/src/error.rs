use graze_core::{GridPos, SheepId};
use graze_grid::GridError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HerdError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("no sheep with id {0}")]
    UnknownSheep(SheepId),

    #[error("tile {0} is already occupied")]
    TileOccupied(GridPos),

    #[error("tile {0} is impassable")]
    TileImpassable(GridPos),
}

/// A disagreement between tile occupancy flags and sheep positions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{first} and {second} both stand on {pos}")]
    SharedTile {
        pos: GridPos,
        first: SheepId,
        second: SheepId,
    },

    #[error("{sheep} stands on {pos}, which is not a walkable tile")]
    NotWalkable { sheep: SheepId, pos: GridPos },

    #[error("{sheep} stands on {pos}, but the tile is not flagged occupied")]
    MissingFlag { sheep: SheepId, pos: GridPos },

    #[error("tile {0} is flagged occupied but no sheep stands there")]
    StrayFlag(GridPos),

    #[error("{sheep} has health {health}, above the maximum of {max}")]
    HealthOverflow { sheep: SheepId, health: u8, max: u8 },
}
