use graze_core::{Direction, GridPos};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("position {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        pos: GridPos,
        width: u32,
        height: u32,
    },

    #[error("grid dimensions must be non-zero and fit in i32, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("tile table holds {found} tiles, expected {expected}")]
    TileCount { expected: usize, found: usize },

    #[error("tile for {expected} is recorded at {found}")]
    MisplacedTile { expected: GridPos, found: GridPos },

    #[error("edge cost from {pos} toward {dir:?} must be finite and non-negative, got {cost}")]
    InvalidCost {
        pos: GridPos,
        dir: Direction,
        cost: f32,
    },
}
