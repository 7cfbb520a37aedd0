//! Placement legality predicate.
//!
//! A candidate placement is legal when its bounding box overlaps no other
//! item's box and its X/Z footprint stays inside the room. The check is pure
//! and silent: malformed inputs (NaN, negative extents) simply produce a
//! verdict, never an error.

use crate::item::{Footprint, PlacedItem};
use roomplan_core::{Point3, RoomBoundary};

/// Decides whether a candidate placement is legal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementValidator {
    room: RoomBoundary,
}

impl PlacementValidator {
    pub fn new(room: RoomBoundary) -> Self {
        Self { room }
    }

    pub fn room(&self) -> &RoomBoundary {
        &self.room
    }

    /// Checks `footprint` placed at `position` against `others` and the room.
    ///
    /// `others` must already exclude the item being moved. Each other item is
    /// boxed with its stored position, rotation and scale. The scan stops at
    /// the first overlap.
    pub fn is_valid_position<'a, I>(&self, position: Point3, footprint: &Footprint, others: I) -> bool
    where
        I: IntoIterator<Item = &'a PlacedItem>,
    {
        let candidate = footprint.bounding_box(position);

        if others
            .into_iter()
            .any(|other| candidate.overlaps(&other.bounding_box()))
        {
            return false;
        }

        candidate.within_room(&self.room)
    }

    /// Convenience wrapper taking the candidate item itself; its stored
    /// rotation and scale are used.
    pub fn is_valid_item_position<'a, I>(&self, position: Point3, item: &PlacedItem, others: I) -> bool
    where
        I: IntoIterator<Item = &'a PlacedItem>,
    {
        self.is_valid_position(position, &item.footprint(), others)
    }
}

/// Validates against the default room boundary.
pub fn is_valid_position<'a, I>(position: Point3, item: &PlacedItem, others: I) -> bool
where
    I: IntoIterator<Item = &'a PlacedItem>,
{
    PlacementValidator::default().is_valid_item_position(position, item, others)
}
