use crate::item::{PlacedItem, Transform};
use crate::scene::Scene;
use roomplan_core::ItemId;

/// A reversible scene mutation recorded in the undo history.
///
/// Commands are only constructed after the mutation they describe has been
/// validated, so `apply` and `undo` never consult the validator.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum PlannerCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    TransformItem(TransformItem),
    Reset(Reset),
}

#[derive(Debug, Clone)]
pub struct AddItem {
    pub id: ItemId,
    pub index: usize,
    pub item: Option<PlacedItem>, // None when in the scene, Some when undone
}

impl AddItem {
    pub fn new(item: PlacedItem, index: usize) -> Self {
        Self {
            id: item.id,
            index,
            item: Some(item),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RemoveItem {
    pub id: ItemId,
    pub index: usize,
    pub item: Option<PlacedItem>, // Some when removed, None when restored
}

impl RemoveItem {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            index: 0,
            item: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformItem {
    pub id: ItemId,
    pub before: Transform,
    pub after: Transform,
}

#[derive(Debug, Clone, Default)]
pub struct Reset {
    pub items: Vec<PlacedItem>,
}

impl PlannerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            PlannerCommand::AddItem(_) => "Add Item",
            PlannerCommand::RemoveItem(_) => "Remove Item",
            PlannerCommand::TransformItem(_) => "Transform Item",
            PlannerCommand::Reset(_) => "Reset Scene",
        }
    }

    pub fn apply(&mut self, scene: &mut Scene) {
        match self {
            PlannerCommand::AddItem(cmd) => {
                if let Some(item) = cmd.item.take() {
                    scene.restore_item(cmd.index, item);
                }
            }
            PlannerCommand::RemoveItem(cmd) => {
                if let Some((index, item)) = scene.remove_indexed(cmd.id) {
                    cmd.index = index;
                    cmd.item = Some(item);
                }
            }
            PlannerCommand::TransformItem(cmd) => {
                scene.set_transform_unchecked(cmd.id, cmd.after);
            }
            PlannerCommand::Reset(cmd) => {
                cmd.items = scene.reset();
            }
        }
    }

    pub fn undo(&mut self, scene: &mut Scene) {
        match self {
            PlannerCommand::AddItem(cmd) => {
                if let Some((index, item)) = scene.remove_indexed(cmd.id) {
                    cmd.index = index;
                    cmd.item = Some(item);
                }
            }
            PlannerCommand::RemoveItem(cmd) => {
                if let Some(item) = cmd.item.take() {
                    scene.restore_item(cmd.index, item);
                }
            }
            PlannerCommand::TransformItem(cmd) => {
                scene.set_transform_unchecked(cmd.id, cmd.before);
            }
            PlannerCommand::Reset(cmd) => {
                scene.restore_all(std::mem::take(&mut cmd.items));
            }
        }
    }
}
