//! Authoritative scene state: placed items, selection, camera and gesture mode.
//!
//! Every public mutation that can change an item's footprint consults the
//! [`PlacementValidator`] first and is refused (returns `false`) when the
//! result would overlap another item or leave the room. Refusals are silent.
//! The only exception is rotation, which is applied unchecked unless
//! [`Scene::set_validate_rotation`] turns the check on.

mod types;

pub use types::{
    CameraPreset, CameraView, InteractiveMode, RenderItem, RenderShape, Renderer, TransformMode,
};

use crate::item::{PlacedItem, Transform};
use crate::scene_store::SceneStore;
use crate::selection_manager::SelectionManager;
use crate::validator::PlacementValidator;
use roomplan_core::{EulerRotation, ItemId, Point3, RoomBoundary, Scale3};

/// Partial update of an item's transform. `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemUpdate {
    pub position: Option<Point3>,
    pub rotation: Option<EulerRotation>,
    pub scale: Option<Scale3>,
}

impl ItemUpdate {
    pub fn position(position: Point3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn rotation(rotation: EulerRotation) -> Self {
        Self {
            rotation: Some(rotation),
            ..Self::default()
        }
    }

    pub fn scale(scale: Scale3) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }

    fn apply_to(&self, base: Transform) -> Transform {
        Transform {
            position: self.position.map(Point3::to_floor).unwrap_or(base.position),
            rotation: self.rotation.unwrap_or(base.rotation),
            scale: self.scale.unwrap_or(base.scale),
        }
    }
}

/// Scene state managing placed items.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub(crate) store: SceneStore,
    pub(crate) selection: SelectionManager,
    validator: PlacementValidator,
    validate_rotation: bool,
    camera_view: CameraView,
    interactive_mode: InteractiveMode,
}

impl Scene {
    /// Creates an empty scene with the default room.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scene bounded by `room`.
    pub fn with_room(room: RoomBoundary) -> Self {
        Self {
            validator: PlacementValidator::new(room),
            ..Self::default()
        }
    }

    pub fn validator(&self) -> &PlacementValidator {
        &self.validator
    }

    pub fn room(&self) -> &RoomBoundary {
        self.validator.room()
    }

    /// Turns the collision check for rotations on or off.
    pub fn set_validate_rotation(&mut self, enabled: bool) {
        self.validate_rotation = enabled;
    }

    pub fn validates_rotation(&self) -> bool {
        self.validate_rotation
    }

    // ---- queries ----

    pub fn items(&self) -> &[PlacedItem] {
        self.store.as_slice()
    }

    pub fn item(&self, id: ItemId) -> Option<&PlacedItem> {
        self.store.get(id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.store.contains(id)
    }

    pub fn item_count(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Items other than `id`.
    pub fn others(&self, id: ItemId) -> impl Iterator<Item = &PlacedItem> {
        self.store.others(id)
    }

    /// Would `item`, at its own position, fit among the current items?
    pub fn can_add(&self, item: &PlacedItem) -> bool {
        self.validator
            .is_valid_item_position(item.position, item, self.store.others(item.id))
    }

    /// Would item `id` still be legal with `transform` applied?
    /// Unknown ids are never legal.
    pub fn can_transform(&self, id: ItemId, transform: &Transform) -> bool {
        match self.store.get(id) {
            Some(item) => self.validator.is_valid_position(
                transform.position.to_floor(),
                &item.footprint_with(transform),
                self.store.others(id),
            ),
            None => false,
        }
    }

    // ---- validated mutations ----

    /// Adds `item` if it fits at its own position. The item keeps its id.
    pub fn add_item(&mut self, mut item: PlacedItem) -> bool {
        item.position = item.position.to_floor();
        if self.store.contains(item.id) || !self.can_add(&item) {
            tracing::debug!("Rejected add of {} at {}", item.name(), item.position);
            return false;
        }
        tracing::debug!("Added {} ({}) at {}", item.name(), item.id, item.position);
        self.store.insert(item);
        true
    }

    /// Moves item `id` to `position` (forced onto the floor).
    pub fn move_item(&mut self, id: ItemId, position: Point3) -> bool {
        self.update_item(id, ItemUpdate::position(position))
    }

    /// Scales item `id` in place.
    pub fn scale_item(&mut self, id: ItemId, scale: Scale3) -> bool {
        self.update_item(id, ItemUpdate::scale(scale))
    }

    /// Adds `delta` radians to the yaw of item `id`.
    ///
    /// Only refused for an unknown id, or for a collision when rotation
    /// validation is enabled.
    pub fn rotate_item(&mut self, id: ItemId, delta: f64) -> bool {
        let Some(item) = self.store.get(id) else {
            return false;
        };
        let rotation = item.rotation.with_yaw(item.yaw() + delta);
        self.update_item(id, ItemUpdate::rotation(rotation))
    }

    /// Applies a partial transform update to item `id`.
    ///
    /// An update that touches only the rotation skips validation unless
    /// rotation validation is enabled.
    pub fn update_item(&mut self, id: ItemId, update: ItemUpdate) -> bool {
        match self.propose_update(id, update) {
            Some(next) => self.set_transform_unchecked(id, next),
            None => false,
        }
    }

    /// The transform item `id` would have after `update`, or `None` when the
    /// update would be refused. Nothing is mutated.
    pub fn propose_update(&self, id: ItemId, update: ItemUpdate) -> Option<Transform> {
        let item = self.store.get(id)?;
        let next = update.apply_to(item.transform());

        let rotation_only = update.position.is_none() && update.scale.is_none();
        let needs_check = !rotation_only || self.validate_rotation;
        if needs_check && !self.can_transform(id, &next) {
            tracing::debug!("Rejected update of {}: {:?}", id, update);
            return None;
        }
        Some(next)
    }

    /// Removes item `id`, clearing the selection and gesture if they
    /// pointed at it.
    pub fn remove_item(&mut self, id: ItemId) -> Option<PlacedItem> {
        self.remove_indexed(id).map(|(_, item)| item)
    }

    /// Removes every item and clears selection and gesture state.
    pub fn reset(&mut self) -> Vec<PlacedItem> {
        self.selection.clear();
        self.interactive_mode = InteractiveMode::default();
        self.store.drain()
    }

    // ---- history support ----
    //
    // Undo and redo only ever restore states that existed before, so these
    // bypass the validator.

    pub(crate) fn remove_indexed(&mut self, id: ItemId) -> Option<(usize, PlacedItem)> {
        let removed = self.store.remove_indexed(id)?;
        self.selection.forget(id);
        if self.interactive_mode.targets(id) {
            self.interactive_mode = InteractiveMode::default();
        }
        Some(removed)
    }

    pub(crate) fn restore_item(&mut self, index: usize, item: PlacedItem) {
        self.store.insert_at(index, item);
    }

    pub(crate) fn restore_all(&mut self, items: Vec<PlacedItem>) {
        self.store.clear();
        for item in items {
            self.store.insert(item);
        }
    }

    pub(crate) fn set_transform_unchecked(&mut self, id: ItemId, transform: Transform) -> bool {
        match self.store.get_mut(id) {
            Some(item) => {
                item.set_transform(transform);
                true
            }
            None => false,
        }
    }

    // ---- selection ----

    /// Selects item `id`, replacing any previous selection.
    pub fn select(&mut self, id: ItemId) -> bool {
        self.selection.select(&self.store, id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.selection.selected_id()
    }

    pub fn selected_item(&self) -> Option<&PlacedItem> {
        self.selected_id().and_then(|id| self.store.get(id))
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selection.is_selected(id)
    }

    // ---- camera & gesture ----

    pub fn camera_view(&self) -> CameraView {
        self.camera_view
    }

    pub fn set_camera_view(&mut self, view: CameraView) {
        self.camera_view = view;
    }

    pub fn camera_preset(&self) -> CameraPreset {
        self.camera_view.preset()
    }

    /// Orbit controls would fight item gestures, so they are only enabled
    /// while nothing is selected.
    pub fn orbit_controls_enabled(&self) -> bool {
        !self.selection.has_selection()
    }

    pub fn interactive_mode(&self) -> &InteractiveMode {
        &self.interactive_mode
    }

    /// Records the start of a gesture on item `id`.
    pub fn begin_interaction(&mut self, mode: TransformMode, id: ItemId) -> bool {
        match self.store.get(id) {
            Some(item) => {
                self.interactive_mode = InteractiveMode::begin(mode, item);
                true
            }
            None => false,
        }
    }

    pub fn end_interaction(&mut self) {
        self.interactive_mode = InteractiveMode::default();
    }

    // ---- rendering ----

    /// Committed state of every item, in insertion order.
    pub fn render_list(&self) -> Vec<RenderItem> {
        self.store
            .iter()
            .map(|item| RenderItem::from_item(item, self.is_selected(item.id)))
            .collect()
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.set_camera(self.camera_preset());
        renderer.draw(&self.render_list());
    }
}
