use std::fmt::Write;

use graze_core::GridPos;
use graze_grid::GridWorld;

/// One character per tile: `#` ice, `S` sheep, otherwise the edible level (capped at 9).
pub fn snapshot(grid: &GridWorld) -> String {
    let mut out = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let glyph = match grid.tile_at(GridPos::new(x, y)) {
                Ok(tile) if !tile.is_passable() => '#',
                Ok(tile) if tile.is_occupied() => 'S',
                Ok(tile) => char::from_digit(u32::from(tile.edible().min(9)), 10).unwrap_or('?'),
                Err(_) => '?',
            };
            out.push(glyph);
        }
        let _ = writeln!(out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_ice_sheep_and_grass() {
        let mut grid = GridWorld::new(3, 2).unwrap();
        grid.set_passable(GridPos::new(1, 0), false).unwrap();
        grid.set_occupied(GridPos::new(2, 1), true).unwrap();
        grid.set_edible_level(GridPos::new(0, 1), 3).unwrap();

        assert_eq!(snapshot(&grid), "0#0\n30S\n");
    }
}
