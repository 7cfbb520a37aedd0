use roomplan_core::{Dimensions, FurnitureDefinition, Point3, Scale3};
use roomplan_designer::{
    GestureOutcome, ItemInteraction, PlacedItem, PlannerState, RotationDirection,
};
use std::f64::consts::{FRAC_PI_8, TAU};

fn projector(sx: f64, sy: f64) -> Option<Point3> {
    Some(Point3::on_floor(sx / 100.0, sy / 100.0))
}

fn state_with(positions: &[(f64, f64)]) -> (PlannerState, Vec<roomplan_core::ItemId>) {
    let mut state = PlannerState::new();
    let ids = positions
        .iter()
        .map(|&(x, z)| {
            let item = PlacedItem::new(
                FurnitureDefinition::new("cube", "Cube", "test"),
                Dimensions::unit(),
            )
            .with_position(Point3::on_floor(x, z));
            state.place_item(item).id().expect("placement")
        })
        .collect();
    (state, ids)
}

#[test]
fn test_scale_stays_within_bounds_over_many_deltas() {
    let (mut state, ids) = state_with(&[(0.0, 0.0)]);
    let mut ctl = ItemInteraction::new(&state, ids[0]).unwrap();
    let p = projector;

    ctl.scale_start(&mut state, &p, 0.0, 0.0);
    for step in 0..40 {
        // Sweep far left, then far right
        let sx = if step < 20 { -50.0 * step as f64 } else { 50.0 * (step - 20) as f64 };
        ctl.scale_move(&state, &p, sx, 0.0);
        let s = ctl.live_scale().uniform_value();
        assert!((0.3..=3.0).contains(&s), "scale {} out of range", s);
    }
    ctl.scale_end(&mut state);

    let committed = state.scene.item(ids[0]).unwrap().scale.uniform_value();
    assert!((0.3..=3.0).contains(&committed));
}

#[test]
fn test_scale_clamps_at_minimum() {
    let (mut state, ids) = state_with(&[(0.0, 0.0)]);
    let mut ctl = ItemInteraction::new(&state, ids[0]).unwrap();
    let p = projector;

    ctl.scale_start(&mut state, &p, 0.0, 0.0);
    assert!(ctl.scale_move(&state, &p, -1000.0, 0.0));
    assert_eq!(ctl.live_scale(), Scale3::uniform(0.3));
}

#[test]
fn test_scale_blocked_by_neighbour_sticks() {
    let (mut state, ids) = state_with(&[(0.0, 0.0), (1.5, 0.0)]);
    let mut ctl = ItemInteraction::new(&state, ids[0]).unwrap();
    let p = projector;

    ctl.scale_start(&mut state, &p, 0.0, 0.0);
    assert!(ctl.scale_move(&state, &p, 100.0, 0.0));
    assert_eq!(ctl.live_scale(), Scale3::uniform(1.5));
    // 2.5 would reach x = 1.25 and overlap the neighbour at 1.0
    assert!(!ctl.scale_move(&state, &p, 300.0, 0.0));
    assert_eq!(ctl.live_scale(), Scale3::uniform(1.5));
    assert_eq!(ctl.scale_end(&mut state), GestureOutcome::Committed);
}

#[test]
fn test_rotation_never_rejected() {
    let (mut state, ids) = state_with(&[(0.0, 0.0), (1.05, 0.0)]);
    for _ in 0..16 {
        assert!(state.rotate_item(ids[1], RotationDirection::CounterClockwise));
    }
    let yaw = state.scene.item(ids[1]).unwrap().yaw();
    assert!((yaw - 16.0 * FRAC_PI_8).abs() < 1e-9);
    assert!((yaw - TAU).abs() < 1e-9);
}

#[test]
fn test_drag_then_undo_restores_position() {
    let (mut state, ids) = state_with(&[(0.0, 0.0)]);
    state.scene.select(ids[0]);
    let mut ctl = ItemInteraction::new(&state, ids[0]).unwrap();
    let p = projector;

    ctl.pointer_down(&mut state, &p, 0.0, 0.0);
    ctl.pointer_move(&state, &p, 200.0, -100.0);
    assert_eq!(ctl.pointer_up(&mut state), GestureOutcome::Committed);
    assert_eq!(state.scene.item(ids[0]).unwrap().position, Point3::on_floor(2.0, -1.0));

    assert!(state.undo());
    ctl.sync(&state);
    assert_eq!(ctl.live_position(), Point3::ORIGIN);
    assert_eq!(ctl.render_item(&state).unwrap().position, Point3::ORIGIN);
}
