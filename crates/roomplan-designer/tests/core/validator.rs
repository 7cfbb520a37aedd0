use roomplan_core::{Dimensions, FurnitureDefinition, Point3};
use roomplan_designer::{is_valid_position, PlacedItem};

fn unit_item() -> PlacedItem {
    PlacedItem::new(FurnitureDefinition::new("cube", "Cube", "test"), Dimensions::unit())
}

#[test]
fn test_touching_items_are_valid() {
    let a = unit_item();
    let b = unit_item();
    assert!(is_valid_position(Point3::new(1.0, 0.0, 0.0), &b, [&a]));
}

#[test]
fn test_overlapping_items_are_invalid() {
    let a = unit_item();
    let b = unit_item();
    assert!(!is_valid_position(Point3::new(0.9, 0.0, 0.0), &b, [&a]));
}

#[test]
fn test_room_boundary() {
    let item = unit_item();
    let none: Vec<PlacedItem> = Vec::new();
    assert!(!is_valid_position(Point3::new(4.6, 0.0, 0.0), &item, &none));
    assert!(is_valid_position(Point3::new(4.4, 0.0, 0.0), &item, &none));
}

#[test]
fn test_depth_boundary_is_narrower() {
    let item = unit_item();
    let none: Vec<PlacedItem> = Vec::new();
    assert!(is_valid_position(Point3::new(0.0, 0.0, 4.25), &item, &none));
    assert!(!is_valid_position(Point3::new(0.0, 0.0, 4.3), &item, &none));
}

#[test]
fn test_first_overlap_decides() {
    let far = unit_item().with_position(Point3::on_floor(-3.0, 0.0));
    let near = unit_item();
    let probe = unit_item();
    assert!(!is_valid_position(Point3::new(0.5, 0.0, 0.5), &probe, [&far, &near]));
}
