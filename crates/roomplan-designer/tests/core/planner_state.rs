use roomplan_core::{
    Catalog, Dimensions, FurnitureDefinition, NotificationCenter, Point3, Severity,
};
use roomplan_designer::{
    DimensionResolver, ManifestAssetLoader, PlacementOutcome, PlannerState, SceneFile,
};
use std::collections::HashMap;
use std::sync::Arc;

#[tokio::test]
async fn test_place_catalog_furniture() {
    let catalog = Catalog::builtin();
    let resolver = DimensionResolver::offline();
    let center = NotificationCenter::default();
    let mut state = PlannerState::new();

    for id in ["bed-1", "wardrobe-1", "sofa-1"] {
        let def = catalog.get(id).unwrap();
        let outcome = state.place_furniture(def, &resolver, &center).await;
        assert!(outcome.is_placed(), "{} was not placed", id);
    }

    assert_eq!(state.scene.item_count(), 3);
    assert_eq!(center.len(), 3);
    assert!(center
        .notifications()
        .iter()
        .all(|n| n.severity == Severity::Success));
    assert!(state.is_modified);
}

#[tokio::test]
async fn test_asset_dimensions_drive_placement() {
    let mut manifest = HashMap::new();
    manifest.insert("/models/wide.glb".to_string(), Dimensions::new(9.0, 1.0, 1.0));
    let resolver = DimensionResolver::new(Arc::new(ManifestAssetLoader::new(manifest)));
    let center = NotificationCenter::default();
    let mut state = PlannerState::new();

    let wide = FurnitureDefinition::new("wide", "Wide Shelf", "misc").with_asset("/models/wide.glb");
    let first = state.place_furniture(&wide, &resolver, &center).await;
    assert!(matches!(first, PlacementOutcome::Placed { relocated: false, .. }));
    let id = first.id().unwrap();
    assert_eq!(state.scene.item(id).unwrap().dimensions.width, 9.0);
    assert!(resolver.is_cached("/models/wide.glb"));
}

#[tokio::test]
async fn test_fill_until_no_space() {
    let resolver = DimensionResolver::offline();
    let center = NotificationCenter::default();
    let mut rx = center.subscribe();
    let mut state = PlannerState::new();
    let block = FurnitureDefinition::new("block", "Block", "misc")
        .with_dimensions(Dimensions::new(4.0, 1.0, 4.0));

    let mut placed = 0;
    loop {
        match state.place_furniture(&block, &resolver, &center).await {
            PlacementOutcome::Placed { .. } => placed += 1,
            PlacementOutcome::NoSpace => break,
        }
        assert!(placed < 100, "grid scan never ran out of space");
    }
    // Once a block sits at the origin no other 4 x 4 block fits around it
    assert_eq!(placed, 1);

    let mut last = None;
    while let Ok(n) = rx.try_recv() {
        last = Some(n);
    }
    let last = last.unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert_eq!(last.title, "Cannot add Block to scene");
}

#[test]
fn test_undo_redo_round_trip() {
    let mut state = PlannerState::new();
    let center = NotificationCenter::default();
    let chair = FurnitureDefinition::new("chair", "Chair", "misc");
    let id = state
        .place_definition(&chair, Dimensions::unit(), &center)
        .id()
        .unwrap();

    assert!(state.commit_move(id, Point3::on_floor(2.0, 2.0)));
    state.reset_scene();
    assert!(state.scene.is_empty());

    assert!(state.undo());
    assert_eq!(state.scene.item(id).unwrap().position, Point3::on_floor(2.0, 2.0));
    assert!(state.undo());
    assert_eq!(state.scene.item(id).unwrap().position, Point3::ORIGIN);
    assert!(state.undo());
    assert!(state.scene.is_empty());
    assert!(!state.undo());

    assert!(state.redo());
    assert!(state.redo());
    assert_eq!(state.scene.item(id).unwrap().position, Point3::on_floor(2.0, 2.0));
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("living.json");

    let mut state = PlannerState::new();
    state.scene_name = "Living room".to_string();
    let center = NotificationCenter::default();
    let sofa = FurnitureDefinition::new("sofa", "Sofa", "livingRoom");
    let a = state.place_definition(&sofa, Dimensions::new(2.0, 0.8, 0.9), &center).id().unwrap();
    let b = state.place_definition(&sofa, Dimensions::new(2.0, 0.8, 0.9), &center).id().unwrap();

    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);
    assert_eq!(state.display_name(), "living.json");

    let mut restored = PlannerState::new();
    let summary = restored.load_from_file(&path).unwrap();
    assert_eq!(summary.loaded, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(restored.scene_name, "Living room");
    assert_eq!(restored.scene.items()[0].id, a);
    assert_eq!(restored.scene.items()[1].id, b);
    assert!(!restored.can_undo());
}

#[test]
fn test_load_skips_invalid_items() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");

    let sofa = FurnitureDefinition::new("sofa", "Sofa", "livingRoom");
    let mut file = SceneFile::new("Broken");
    let keep = PlannerState::instantiate(&sofa, Dimensions::unit());
    let overlapping = PlannerState::instantiate(&sofa, Dimensions::unit())
        .with_position(Point3::on_floor(0.5, 0.0));
    let outside = PlannerState::instantiate(&sofa, Dimensions::unit())
        .with_position(Point3::on_floor(7.0, 0.0));
    file.items = vec![keep.clone(), overlapping, outside];
    file.save_to_file(&path).unwrap();

    let mut state = PlannerState::new();
    let summary = state.load_from_file(&path).unwrap();
    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.skipped, 2);
    assert_eq!(state.scene.items()[0].id, keep.id);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = PlannerState::new();
    assert!(state.load_from_file(dir.path().join("nope.json")).is_err());
}
