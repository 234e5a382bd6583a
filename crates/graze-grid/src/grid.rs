use graze_core::{Direction, GridPos};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::{GridError, Tile};

pub const DEFAULT_MAX_EDIBLE: u8 = 3;

/// Fixed-size tile table. Every query is O(1) and fails with [`GridError::OutOfBounds`] outside
/// `[0, width) x [0, height)`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GridWorld {
    width: i32,
    height: i32,
    max_edible: u8,
    tiles: Vec<Tile>,
}

impl GridWorld {
    /// A fully passable, unoccupied grid with no food and unit edge costs.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let w = i32::try_from(width).map_err(|_| invalid.clone())?;
        let h = i32::try_from(height).map_err(|_| invalid.clone())?;
        w.checked_mul(h).ok_or(invalid)?;

        let mut tiles = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..h {
            for x in 0..w {
                tiles.push(Tile::new(GridPos::new(x, y)));
            }
        }

        Ok(Self {
            width: w,
            height: h,
            max_edible: DEFAULT_MAX_EDIBLE,
            tiles,
        })
    }

    /// Adopt a serialized tile table. It must hold exactly `width * height` tiles in row-major
    /// order with valid edge costs.
    #[cfg(feature = "serde")]
    fn from_tiles(
        width: u32,
        height: u32,
        max_edible: u8,
        tiles: Vec<Tile>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?.with_max_edible(max_edible);
        if tiles.len() != grid.tiles.len() {
            return Err(GridError::TileCount {
                expected: grid.tiles.len(),
                found: tiles.len(),
            });
        }
        for (slot, tile) in grid.tiles.iter().zip(&tiles) {
            if tile.pos() != slot.pos() {
                return Err(GridError::MisplacedTile {
                    expected: slot.pos(),
                    found: tile.pos(),
                });
            }
            for dir in Direction::ALL {
                let cost = tile.cost_toward(dir);
                if !cost.is_finite() || cost < 0.0 {
                    return Err(GridError::InvalidCost {
                        pos: tile.pos(),
                        dir,
                        cost,
                    });
                }
            }
        }
        grid.tiles = tiles;
        Ok(grid)
    }

    pub fn with_max_edible(mut self, max_edible: u8) -> Self {
        self.max_edible = max_edible;
        self
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// `(width, height)`.
    pub fn bounds(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn max_edible(&self) -> u8 {
        self.max_edible
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn idx(&self, pos: GridPos) -> Result<usize, GridError> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok((pos.y * self.width + pos.x) as usize)
    }

    pub fn tile_at(&self, pos: GridPos) -> Result<&Tile, GridError> {
        let idx = self.idx(pos)?;
        Ok(&self.tiles[idx])
    }

    fn tile_mut(&mut self, pos: GridPos) -> Result<&mut Tile, GridError> {
        let idx = self.idx(pos)?;
        Ok(&mut self.tiles[idx])
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    pub fn is_passable(&self, pos: GridPos) -> Result<bool, GridError> {
        Ok(self.tile_at(pos)?.is_passable())
    }

    pub fn is_occupied(&self, pos: GridPos) -> Result<bool, GridError> {
        Ok(self.tile_at(pos)?.is_occupied())
    }

    pub fn edible_level(&self, pos: GridPos) -> Result<u8, GridError> {
        Ok(self.tile_at(pos)?.edible())
    }

    /// In bounds and passable. Out-of-bounds positions are simply not walkable.
    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.tile_at(pos).map(Tile::is_passable).unwrap_or(false)
    }

    /// Walkable and unoccupied: a tile a sheep may step onto or spawn on.
    pub fn is_free(&self, pos: GridPos) -> bool {
        self.tile_at(pos)
            .map(|t| t.is_passable() && !t.is_occupied())
            .unwrap_or(false)
    }

    pub fn set_occupied(&mut self, pos: GridPos, occupied: bool) -> Result<(), GridError> {
        self.tile_mut(pos)?.set_occupied(occupied);
        Ok(())
    }

    /// Eat one unit. Returns the remaining level; a bare tile stays at 0.
    pub fn consume_edible(&mut self, pos: GridPos) -> Result<u8, GridError> {
        let tile = self.tile_mut(pos)?;
        let level = tile.edible().saturating_sub(1);
        tile.set_edible(level);
        Ok(level)
    }

    pub fn set_edible_level(&mut self, pos: GridPos, level: u8) -> Result<(), GridError> {
        self.tile_mut(pos)?.set_edible(level);
        Ok(())
    }

    /// Set every passable tile's edible level.
    pub fn fill_edible(&mut self, level: u8) {
        for tile in self.tiles.iter_mut().filter(|t| t.is_passable()) {
            tile.set_edible(level);
        }
    }

    pub fn set_passable(&mut self, pos: GridPos, passable: bool) -> Result<(), GridError> {
        let tile = self.tile_mut(pos)?;
        tile.set_passable(passable);
        if !passable {
            tile.set_edible(0);
        }
        Ok(())
    }

    pub fn set_edge_cost(
        &mut self,
        pos: GridPos,
        dir: Direction,
        cost: f32,
    ) -> Result<(), GridError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(GridError::InvalidCost { pos, dir, cost });
        }
        self.tile_mut(pos)?.set_cost(dir, cost);
        Ok(())
    }

    /// Cost of stepping `from -> neighbor`.
    ///
    /// `Ok(None)` when the pair is not orthogonally adjacent or either side is impassable.
    pub fn edge_cost(&self, from: GridPos, neighbor: GridPos) -> Result<Option<f32>, GridError> {
        let from_tile = self.tile_at(from)?;
        let to_tile = self.tile_at(neighbor)?;
        let Some(dir) = from.direction_to(neighbor) else {
            return Ok(None);
        };
        if !from_tile.is_passable() || !to_tile.is_passable() {
            return Ok(None);
        }
        Ok(Some(from_tile.cost_toward(dir)))
    }

    /// In-bounds, passable orthogonal neighbors in N, S, W, E order.
    pub fn neighbors(&self, pos: GridPos) -> Result<Neighbors, GridError> {
        self.idx(pos)?;
        let mut cells = [None; 4];
        for (slot, dir) in cells.iter_mut().zip(Direction::ALL) {
            let n = pos.step(dir);
            if self.is_walkable(n) {
                *slot = Some(n);
            }
        }
        Ok(Neighbors { cells, next: 0 })
    }

    /// Grow one unit of food on every passable tile below `max_edible`. Returns how many grew.
    pub fn regrow(&mut self) -> usize {
        let max = self.max_edible;
        let mut grown = 0;
        for tile in self.tiles.iter_mut() {
            if tile.is_passable() && tile.edible() < max {
                tile.set_edible(tile.edible() + 1);
                grown += 1;
            }
        }
        grown
    }

    pub fn occupied_positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.tiles
            .iter()
            .filter(|t| t.is_occupied())
            .map(Tile::pos)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GridWorld {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr {
            width: u32,
            height: u32,
            max_edible: u8,
            tiles: Vec<Tile>,
        }

        let repr = Repr::deserialize(deserializer)?;
        Self::from_tiles(repr.width, repr.height, repr.max_edible, repr.tiles)
            .map_err(serde::de::Error::custom)
    }
}

/// Up to four neighbor positions, produced without allocating.
#[derive(Debug, Clone)]
pub struct Neighbors {
    cells: [Option<GridPos>; 4],
    next: usize,
}

impl Iterator for Neighbors {
    type Item = GridPos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.cells.len() {
            let cell = self.cells[self.next];
            self.next += 1;
            if cell.is_some() {
                return cell;
            }
        }
        None
    }
}
