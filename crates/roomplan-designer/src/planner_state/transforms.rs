//! Committed transforms (move, scale, rotate, delete) for planner state.
//!
//! These are the store writes made at the end of a gesture or by a discrete
//! button press. Each one is validated, recorded for undo, and silently
//! refused when invalid.

use super::PlannerState;
use crate::commands::{PlannerCommand, RemoveItem, TransformItem};
use crate::item::Transform;
use crate::scene::ItemUpdate;
use roomplan_core::{ItemId, Point3, Scale3};

/// Direction of a discrete rotation step, seen from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    fn sign(self) -> f64 {
        match self {
            // Positive yaw turns counter-clockwise when looking down the Y axis
            RotationDirection::CounterClockwise => 1.0,
            RotationDirection::Clockwise => -1.0,
        }
    }
}

impl PlannerState {
    /// Applies `update` to item `id` after validation and records it.
    pub fn update_item(&mut self, id: ItemId, update: ItemUpdate) -> bool {
        let Some(item) = self.scene.item(id) else {
            return false;
        };
        let before = item.transform();
        match self.scene.propose_update(id, update) {
            Some(after) => self.commit_transform(id, before, after),
            None => false,
        }
    }

    /// Persists the final position of a drag.
    pub fn commit_move(&mut self, id: ItemId, position: Point3) -> bool {
        self.update_item(id, ItemUpdate::position(position))
    }

    /// Persists the final scale and position of a scale gesture together.
    pub fn commit_scale(&mut self, id: ItemId, position: Point3, scale: Scale3) -> bool {
        self.update_item(
            id,
            ItemUpdate {
                position: Some(position),
                scale: Some(scale),
                ..ItemUpdate::default()
            },
        )
    }

    /// Turns item `id` one rotation step. Never blocked by collisions unless
    /// rotation validation is enabled.
    pub fn rotate_item(&mut self, id: ItemId, direction: RotationDirection) -> bool {
        let Some(item) = self.scene.item(id) else {
            return false;
        };
        let step = self.settings.interaction.rotation_step * direction.sign();
        let rotation = item.rotation.with_yaw(item.yaw() + step);
        self.update_item(id, ItemUpdate::rotation(rotation))
    }

    /// Removes item `id` from the scene, clearing the selection if it was
    /// the selected item. Undoable.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        if !self.scene.contains(id) {
            return false;
        }
        self.push_command(PlannerCommand::RemoveItem(RemoveItem::new(id)));
        tracing::info!("Deleted {}", id);
        true
    }

    /// Removes the selected item, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.scene.selected_id() {
            Some(id) => self.delete_item(id),
            None => false,
        }
    }

    fn commit_transform(&mut self, id: ItemId, before: Transform, after: Transform) -> bool {
        if before == after {
            return true;
        }
        self.push_command(PlannerCommand::TransformItem(TransformItem { id, before, after }));
        true
    }
}
