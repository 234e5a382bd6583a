use graze_core::{GridPos, NullObserver, TickContext};
use graze_grid::{GridError, GridWorld};
use graze_herd::{Herd, HerdConfig, HerdError, MovementResolver};
use proptest::prelude::*;

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "tried to move onto")]
fn moving_onto_an_occupied_tile_panics_in_debug() {
    let mut herd = Herd::new(GridWorld::new(3, 1).unwrap(), HerdConfig::default());
    let a = herd.spawn(GridPos::new(0, 0), 5).unwrap();
    herd.spawn(GridPos::new(1, 0), 5).unwrap();

    let mut grid = herd.grid().clone();
    let sheep = herd.sheep_mut(a).unwrap();
    let _ = MovementResolver::commit_move(&mut grid, sheep, GridPos::new(1, 0), &mut NullObserver);
}

#[test]
fn commit_transfers_occupancy() {
    let mut herd = Herd::new(GridWorld::new(3, 1).unwrap(), HerdConfig::default());
    let a = herd.spawn(GridPos::new(0, 0), 5).unwrap();

    let mut grid = herd.grid().clone();
    let sheep = herd.sheep_mut(a).unwrap();
    let moved =
        MovementResolver::commit_move(&mut grid, sheep, GridPos::new(1, 0), &mut NullObserver)
            .unwrap();

    assert!(moved);
    assert_eq!(sheep.pos(), GridPos::new(1, 0));
    assert!(grid.is_occupied(GridPos::new(1, 0)).unwrap());
    assert!(!grid.is_occupied(GridPos::new(0, 0)).unwrap());
}

#[test]
fn failed_commit_leaves_the_grid_untouched() {
    let mut herd = Herd::new(GridWorld::new(5, 5).unwrap(), HerdConfig::default());
    let a = herd.spawn(GridPos::new(4, 4), 5).unwrap();

    // The sheep stands outside this smaller grid.
    let mut grid = GridWorld::new(3, 3).unwrap();
    let sheep = herd.sheep_mut(a).unwrap();
    let result =
        MovementResolver::commit_move(&mut grid, sheep, GridPos::new(1, 1), &mut NullObserver);

    assert!(matches!(
        result,
        Err(HerdError::Grid(GridError::OutOfBounds { .. }))
    ));
    assert_eq!(grid.occupied_positions().count(), 0);
    assert_eq!(sheep.pos(), GridPos::new(4, 4));
}

fn arb_scenario() -> impl Strategy<Value = (u32, u32, Vec<(i32, i32, u8)>, Vec<(i32, i32)>, u64)> {
    (3u32..10, 3u32..10).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            prop::collection::vec((0..w as i32, 0..h as i32, 0u8..=10), 1..12),
            prop::collection::vec((0..w as i32, 0..h as i32), 0..8),
            any::<u64>(),
        )
    })
}

proptest! {
    #[test]
    fn occupancy_matches_positions_every_tick((w, h, sheep, ice, seed) in arb_scenario()) {
        let mut grid = GridWorld::new(w, h).unwrap();
        grid.fill_edible(2);
        for (x, y) in ice {
            grid.set_passable(GridPos::new(x, y), false).unwrap();
        }
        let config = HerdConfig { regrow_every_ticks: 3, ..HerdConfig::default() };
        let mut herd = Herd::new(grid, config);
        for (x, y, health) in sheep {
            // Blocked tiles are skipped.
            let _ = herd.spawn(GridPos::new(x, y), health);
        }

        for tick in 0..25 {
            herd.tick(&TickContext::new(tick, seed), &mut NullObserver).unwrap();
            prop_assert_eq!(herd.check_occupancy(), Ok(()));
            prop_assert!(herd.iter().all(|s| s.health() <= herd.config().max_health));
        }
    }
}
