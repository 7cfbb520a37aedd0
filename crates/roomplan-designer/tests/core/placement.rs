use proptest::prelude::*;
use roomplan_core::{Dimensions, FurnitureDefinition, Point3};
use roomplan_designer::{find_placement, PlacedItem, PlacementGrid, PlacementValidator, Scene};

fn item(w: f64, d: f64) -> PlacedItem {
    PlacedItem::new(
        FurnitureDefinition::new("box", "Box", "test"),
        Dimensions::new(w, 1.0, d),
    )
}

#[test]
fn test_search_is_deterministic() {
    let existing = vec![
        item(1.0, 1.0).with_position(Point3::on_floor(-4.5, -4.0)),
        item(2.0, 1.0).with_position(Point3::on_floor(0.0, 0.0)),
    ];
    let new_item = item(1.0, 1.0);
    let first = find_placement(&new_item, &existing);
    let second = find_placement(&new_item, &existing);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_packed_room_has_no_space() {
    let mut scene = Scene::new();
    // One slab covering the whole floor
    assert!(scene.add_item(item(10.0, 9.5)));

    let result = find_placement(&item(0.1, 0.1), scene.items());
    assert_eq!(result, None);
}

#[test]
fn test_packed_room_of_many_items() {
    let mut scene = Scene::new();
    // 10 columns x 9 rows of 1x1 cubes plus a thin strip along the far wall
    for col in 0..10 {
        for row in 0..9 {
            let x = -4.5 + col as f64;
            let z = -4.25 + row as f64;
            assert!(scene.add_item(item(1.0, 1.0).with_position(Point3::on_floor(x, z))));
        }
    }
    assert!(scene.add_item(item(10.0, 0.5).with_position(Point3::on_floor(0.0, 4.5))));

    assert_eq!(find_placement(&item(0.2, 0.2), scene.items()), None);
}

#[test]
fn test_custom_grid_and_room() {
    let validator = PlacementValidator::new(roomplan_core::RoomBoundary::new(0.0, 2.0, 0.0, 2.0));
    let grid = PlacementGrid::new(0.0, 2.0, 1.0);
    let found = grid.find_placement(&validator, &item(1.0, 1.0).footprint(), &[]);
    // (0,0) leaves the room; (1,1) is the first cell that fits
    assert_eq!(found, Some(Point3::on_floor(1.0, 1.0)));
}

proptest! {
    #[test]
    fn found_cell_is_always_valid(
        w in 0.2f64..4.0,
        d in 0.2f64..4.0,
        bx in -4.0f64..4.0,
        bz in -3.5f64..3.5,
    ) {
        let blocker = item(1.5, 1.5).with_position(Point3::on_floor(bx, bz));
        let existing = vec![blocker];
        let new_item = item(w, d);

        if let Some(cell) = find_placement(&new_item, &existing) {
            prop_assert_eq!(cell.y, 0.0);
            prop_assert!(PlacementValidator::default().is_valid_item_position(cell, &new_item, &existing));
        }
    }
}
