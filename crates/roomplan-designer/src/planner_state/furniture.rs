//! Adding catalog furniture to the scene.

use super::PlannerState;
use crate::assets::DimensionResolver;
use crate::commands::{AddItem, PlannerCommand};
use crate::item::PlacedItem;
use roomplan_core::data::random_hex_color;
use roomplan_core::{Dimensions, FurnitureDefinition, ItemId, Notification, NotificationSink, Point3};

/// Result of trying to add an item to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementOutcome {
    /// The item entered the scene at `position`. `relocated` is set when the
    /// default position was taken and the grid scan picked another cell.
    Placed {
        id: ItemId,
        position: Point3,
        relocated: bool,
    },
    /// Every grid cell collided; the scene is unchanged.
    NoSpace,
}

impl PlacementOutcome {
    pub fn id(&self) -> Option<ItemId> {
        match self {
            PlacementOutcome::Placed { id, .. } => Some(*id),
            PlacementOutcome::NoSpace => None,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed { .. })
    }
}

impl PlannerState {
    /// Builds a new instance of `definition` at the origin.
    ///
    /// Items drawn as primitives (no asset) always get a color: the
    /// definition's own, or a random one.
    pub fn instantiate(definition: &FurnitureDefinition, dimensions: Dimensions) -> PlacedItem {
        let mut item = PlacedItem::new(definition.clone(), dimensions);
        if definition.asset_ref.is_none() && item.color.is_none() {
            item.color = Some(random_hex_color());
        }
        item
    }

    /// Adds `item` at its own position, or at the first free grid cell when
    /// that position is taken. Undoable.
    ///
    /// An item whose id is already in the scene is added as a new instance
    /// under a fresh id.
    pub fn place_item(&mut self, mut item: PlacedItem) -> PlacementOutcome {
        if self.scene.contains(item.id) {
            let fresh = ItemId::new();
            tracing::debug!("Id {} already placed, re-keying as {}", item.id, fresh);
            item.id = fresh;
        }
        item.position = item.position.to_floor();
        let mut relocated = false;

        if !self.scene.can_add(&item) {
            let found = self.settings.grid.find_placement(
                self.scene.validator(),
                &item.footprint(),
                self.scene.items(),
            );
            match found {
                Some(position) => {
                    item.position = position;
                    relocated = true;
                }
                None => {
                    tracing::info!("No space for {} among {} items", item.name(), self.scene.item_count());
                    return PlacementOutcome::NoSpace;
                }
            }
        }

        let id = item.id;
        let position = item.position;
        tracing::info!("Placed {} ({}) at {}", item.name(), id, position);
        let index = self.scene.item_count();
        self.push_command(PlannerCommand::AddItem(AddItem::new(item, index)));

        PlacementOutcome::Placed {
            id,
            position,
            relocated,
        }
    }

    /// Places an instance of `definition` with already resolved dimensions
    /// and reports the outcome to `sink`.
    pub fn place_definition(
        &mut self,
        definition: &FurnitureDefinition,
        dimensions: Dimensions,
        sink: &dyn NotificationSink,
    ) -> PlacementOutcome {
        let item = Self::instantiate(definition, dimensions);
        let outcome = self.place_item(item);

        match outcome {
            PlacementOutcome::Placed { .. } => {
                sink.notify(Notification::success(format!(
                    "Added {} to scene",
                    definition.name
                )));
            }
            PlacementOutcome::NoSpace => {
                sink.notify(
                    Notification::error(format!("Cannot add {} to scene", definition.name))
                        .with_description("No space available for this furniture"),
                );
            }
        }
        outcome
    }

    /// Resolves the dimensions of `definition`, then places it.
    ///
    /// Resolution is awaited before the item enters the scene so the
    /// validator always sees real dimensions.
    pub async fn place_furniture(
        &mut self,
        definition: &FurnitureDefinition,
        resolver: &DimensionResolver,
        sink: &dyn NotificationSink,
    ) -> PlacementOutcome {
        let dimensions = resolver.resolve(definition).await;
        self.place_definition(definition, dimensions, sink)
    }
}
