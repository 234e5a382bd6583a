#![cfg(feature = "serde")]

use graze_core::{Direction, GridPos};
use graze_grid::{GridError, GridWorld};
use serde_json::{json, Value};

fn sample() -> GridWorld {
    let mut grid = GridWorld::new(3, 2).unwrap().with_max_edible(5);
    grid.set_passable(GridPos::new(1, 0), false).unwrap();
    grid.set_edible_level(GridPos::new(2, 1), 4).unwrap();
    grid.set_edge_cost(GridPos::new(0, 1), Direction::East, 2.5)
        .unwrap();
    grid
}

fn error_text(value: Value) -> String {
    serde_json::from_value::<GridWorld>(value)
        .expect_err("tile table should be rejected")
        .to_string()
}

#[test]
fn grid_json_roundtrip() {
    let grid = sample();
    let json = serde_json::to_string(&grid).expect("serialize");
    let roundtrip: GridWorld = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(roundtrip.bounds(), (3, 2));
    assert_eq!(roundtrip.max_edible(), 5);
    assert!(!roundtrip.is_passable(GridPos::new(1, 0)).unwrap());
    assert_eq!(roundtrip.edible_level(GridPos::new(2, 1)).unwrap(), 4);
    assert_eq!(
        roundtrip
            .edge_cost(GridPos::new(0, 1), GridPos::new(1, 1))
            .unwrap(),
        Some(2.5)
    );
}

#[test]
fn short_tile_table_is_rejected() {
    let text = error_text(json!({ "width": 3, "height": 3, "max_edible": 3, "tiles": [] }));
    let expected = GridError::TileCount {
        expected: 9,
        found: 0,
    };
    assert!(text.contains(&expected.to_string()), "{text}");
}

#[test]
fn swapped_tiles_are_rejected() {
    let mut value = serde_json::to_value(sample()).unwrap();
    value["tiles"].as_array_mut().unwrap().swap(0, 1);

    let text = error_text(value);
    let expected = GridError::MisplacedTile {
        expected: GridPos::new(0, 0),
        found: GridPos::new(1, 0),
    };
    assert!(text.contains(&expected.to_string()), "{text}");
}

#[test]
fn negative_edge_cost_is_rejected() {
    let mut value = serde_json::to_value(sample()).unwrap();
    value["tiles"][4]["costs"][0] = json!(-1.0);

    let text = error_text(value);
    assert!(text.contains("must be finite and non-negative"), "{text}");
}

#[test]
fn zero_dimensions_are_rejected() {
    let text = error_text(json!({ "width": 0, "height": 2, "max_edible": 3, "tiles": [] }));
    let expected = GridError::InvalidDimensions {
        width: 0,
        height: 2,
    };
    assert!(text.contains(&expected.to_string()), "{text}");
}
