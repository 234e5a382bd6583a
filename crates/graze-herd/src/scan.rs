use graze_core::GridPos;
use graze_grid::{GridWorld, Tile};

/// Proximity scan pattern, checked in this exact order: orthogonal at 1, orthogonal at 2,
/// diagonal at 1, orthogonal at 3, diagonal at 2. This is not sorted by true distance.
pub const SCAN_OFFSETS: [(i32, i32); 20] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (0, 2),
    (0, -2),
    (-2, 0),
    (2, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 3),
    (0, -3),
    (-3, 0),
    (3, 0),
    (2, 2),
    (2, -2),
    (-2, 2),
    (-2, -2),
];

fn first_match<F>(grid: &GridWorld, from: GridPos, accept: F) -> Option<GridPos>
where
    F: Fn(&Tile) -> bool,
{
    SCAN_OFFSETS
        .iter()
        .map(|&(dx, dy)| from.offset(dx, dy))
        .find(|&pos| {
            grid.tile_at(pos)
                .map(|tile| tile.is_passable() && accept(tile))
                .unwrap_or(false)
        })
}

/// First free tile with food in scan order.
pub fn find_food(grid: &GridWorld, from: GridPos) -> Option<GridPos> {
    first_match(grid, from, |tile| !tile.is_occupied() && tile.edible() > 0)
}

/// First occupied tile in scan order.
pub fn find_companion(grid: &GridWorld, from: GridPos) -> Option<GridPos> {
    first_match(grid, from, Tile::is_occupied)
}
