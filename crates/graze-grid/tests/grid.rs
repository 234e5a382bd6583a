use graze_core::{Direction, GridPos};
use graze_grid::{GridError, GridWorld};
use proptest::prelude::*;

fn grid(width: u32, height: u32) -> GridWorld {
    GridWorld::new(width, height).expect("valid dimensions")
}

#[test]
fn rejects_empty_dimensions() {
    assert_eq!(
        GridWorld::new(0, 4).unwrap_err(),
        GridError::InvalidDimensions {
            width: 0,
            height: 4
        }
    );
}

#[test]
fn out_of_bounds_is_reported_not_clamped() {
    let g = grid(3, 2);
    let err = g.tile_at(GridPos::new(3, 0)).unwrap_err();
    assert_eq!(
        err,
        GridError::OutOfBounds {
            pos: GridPos::new(3, 0),
            width: 3,
            height: 2
        }
    );
    assert!(g.is_occupied(GridPos::new(-1, 0)).is_err());
    assert!(g.edible_level(GridPos::new(0, 2)).is_err());
}

#[test]
fn consume_edible_floors_at_zero() {
    let mut g = grid(2, 2);
    let pos = GridPos::new(1, 1);
    g.set_edible_level(pos, 2).unwrap();
    assert_eq!(g.consume_edible(pos).unwrap(), 1);
    assert_eq!(g.consume_edible(pos).unwrap(), 0);
    assert_eq!(g.consume_edible(pos).unwrap(), 0);
    assert_eq!(g.edible_level(pos).unwrap(), 0);
}

#[test]
fn neighbors_skip_ice_and_edges() {
    let mut g = grid(3, 3);
    g.set_passable(GridPos::new(1, 0), false).unwrap();

    let center: Vec<GridPos> = g.neighbors(GridPos::new(1, 1)).unwrap().collect();
    assert_eq!(
        center,
        vec![GridPos::new(1, 2), GridPos::new(0, 1), GridPos::new(2, 1)]
    );

    let corner: Vec<GridPos> = g.neighbors(GridPos::new(0, 0)).unwrap().collect();
    assert_eq!(corner, vec![GridPos::new(0, 1)]);
}

#[test]
fn edge_cost_defined_only_for_adjacent_passable_pairs() {
    let mut g = grid(3, 3);
    g.set_edge_cost(GridPos::new(1, 1), Direction::East, 2.5)
        .unwrap();
    g.set_passable(GridPos::new(1, 2), false).unwrap();

    assert_eq!(
        g.edge_cost(GridPos::new(1, 1), GridPos::new(2, 1)).unwrap(),
        Some(2.5)
    );
    // Costs are directional.
    assert_eq!(
        g.edge_cost(GridPos::new(2, 1), GridPos::new(1, 1)).unwrap(),
        Some(1.0)
    );
    assert_eq!(
        g.edge_cost(GridPos::new(1, 1), GridPos::new(1, 2)).unwrap(),
        None
    );
    assert_eq!(
        g.edge_cost(GridPos::new(0, 0), GridPos::new(1, 1)).unwrap(),
        None
    );
    assert!(g.edge_cost(GridPos::new(2, 2), GridPos::new(3, 2)).is_err());
}

#[test]
fn negative_costs_are_rejected() {
    let mut g = grid(2, 2);
    let err = g
        .set_edge_cost(GridPos::new(0, 0), Direction::South, -1.0)
        .unwrap_err();
    assert!(matches!(err, GridError::InvalidCost { .. }));
    assert!(g
        .set_edge_cost(GridPos::new(0, 0), Direction::South, f32::NAN)
        .is_err());
}

#[test]
fn regrow_caps_at_max_and_skips_ice() {
    let mut g = grid(2, 1).with_max_edible(2);
    g.set_passable(GridPos::new(1, 0), false).unwrap();

    assert_eq!(g.regrow(), 1);
    assert_eq!(g.regrow(), 1);
    assert_eq!(g.regrow(), 0);
    assert_eq!(g.edible_level(GridPos::new(0, 0)).unwrap(), 2);
    assert_eq!(g.edible_level(GridPos::new(1, 0)).unwrap(), 0);
}

#[test]
fn occupancy_flags_round_trip() {
    let mut g = grid(4, 4);
    g.set_occupied(GridPos::new(2, 3), true).unwrap();
    assert!(g.is_occupied(GridPos::new(2, 3)).unwrap());
    assert!(!g.is_free(GridPos::new(2, 3)));
    assert_eq!(
        g.occupied_positions().collect::<Vec<_>>(),
        vec![GridPos::new(2, 3)]
    );
    g.set_occupied(GridPos::new(2, 3), false).unwrap();
    assert_eq!(g.occupied_positions().count(), 0);
}

proptest! {
    #[test]
    fn queries_fail_exactly_outside_bounds(
        width in 1u32..12,
        height in 1u32..12,
        x in -20i32..20,
        y in -20i32..20,
    ) {
        let mut g = grid(width, height);
        let pos = GridPos::new(x, y);
        let inside = x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height;

        prop_assert_eq!(g.tile_at(pos).is_ok(), inside);
        prop_assert_eq!(g.is_passable(pos).is_ok(), inside);
        prop_assert_eq!(g.is_occupied(pos).is_ok(), inside);
        prop_assert_eq!(g.edible_level(pos).is_ok(), inside);
        prop_assert_eq!(g.neighbors(pos).is_ok(), inside);
        prop_assert_eq!(g.consume_edible(pos).is_ok(), inside);
        prop_assert_eq!(g.set_occupied(pos, false).is_ok(), inside);
    }
}
