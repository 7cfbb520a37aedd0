//! Placed furniture instances.

use crate::bounding_box::BoundingBox;
use roomplan_core::{
    Dimensions, EulerRotation, FurnitureDefinition, FurnitureType, ItemId, Point3, Scale3,
};
use serde::{Deserialize, Serialize};

/// The mutable part of a placed item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub position: Point3,
    pub rotation: EulerRotation,
    pub scale: Scale3,
}

impl Transform {
    pub fn at(position: Point3) -> Self {
        Self {
            position: position.to_floor(),
            ..Self::default()
        }
    }
}

/// Everything the validator needs to know about an item except where it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub dimensions: Dimensions,
    pub scale: Scale3,
    pub yaw: f64,
}

impl Footprint {
    pub fn new(dimensions: Dimensions, scale: Scale3, yaw: f64) -> Self {
        Self {
            dimensions,
            scale,
            yaw,
        }
    }

    pub fn bounding_box(&self, position: Point3) -> BoundingBox {
        BoundingBox::compute(position, self.dimensions, self.scale, self.yaw)
    }

    /// Half extents of the rotated, scaled footprint along X and Z.
    pub fn half_extents(&self) -> (f64, f64) {
        let b = self.bounding_box(Point3::ORIGIN);
        (b.width() / 2.0, b.depth() / 2.0)
    }
}

/// A furniture instance living in a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: ItemId,
    pub definition: FurnitureDefinition,
    pub position: Point3,
    pub rotation: EulerRotation,
    pub scale: Scale3,
    pub dimensions: Dimensions,
    /// Display color for items drawn as primitives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PlacedItem {
    /// Creates an instance of `definition` at the origin with identity
    /// rotation and scale. A fresh instance id is generated.
    pub fn new(definition: FurnitureDefinition, dimensions: Dimensions) -> Self {
        let color = definition.color.clone();
        Self {
            id: ItemId::new(),
            definition,
            position: Point3::ORIGIN,
            rotation: EulerRotation::default(),
            scale: Scale3::IDENTITY,
            dimensions,
            color,
        }
    }

    pub fn with_position(mut self, position: Point3) -> Self {
        self.position = position.to_floor();
        self
    }

    pub fn with_yaw(mut self, yaw: f64) -> Self {
        self.rotation = self.rotation.with_yaw(yaw);
        self
    }

    pub fn with_scale(mut self, scale: Scale3) -> Self {
        self.scale = scale;
        self
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn kind(&self) -> Option<FurnitureType> {
        self.definition.kind
    }

    pub fn yaw(&self) -> f64 {
        self.rotation.yaw()
    }

    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    pub(crate) fn set_transform(&mut self, transform: Transform) {
        self.position = transform.position.to_floor();
        self.rotation = transform.rotation;
        self.scale = transform.scale;
    }

    /// Footprint using the stored rotation and scale.
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.dimensions, self.scale, self.yaw())
    }

    /// Footprint with the given transform's rotation and scale.
    pub fn footprint_with(&self, transform: &Transform) -> Footprint {
        Footprint::new(self.dimensions, transform.scale, transform.rotation.yaw())
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.footprint().bounding_box(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chair() -> PlacedItem {
        let def = FurnitureDefinition::new("chair-1", "Chair", "livingRoom")
            .with_kind(FurnitureType::Chair)
            .with_color("#aa0000");
        PlacedItem::new(def, FurnitureType::Chair.default_dimensions())
    }

    #[test]
    fn test_new_item_defaults() {
        let item = chair();
        assert_eq!(item.position, Point3::ORIGIN);
        assert_eq!(item.scale, Scale3::IDENTITY);
        assert_eq!(item.yaw(), 0.0);
        assert_eq!(item.color.as_deref(), Some("#aa0000"));
        assert_eq!(item.name(), "Chair");
    }

    #[test]
    fn test_instances_of_same_definition_differ() {
        assert_ne!(chair().id, chair().id);
    }

    #[test]
    fn test_position_forced_to_floor() {
        let item = chair().with_position(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(item.position, Point3::on_floor(1.0, 3.0));

        let mut item = chair();
        item.set_transform(Transform {
            position: Point3::new(0.5, -1.0, 0.5),
            ..item.transform()
        });
        assert_eq!(item.position.y, 0.0);
    }

    #[test]
    fn test_half_extents() {
        let item = chair();
        let (hw, hd) = item.footprint().half_extents();
        assert!((hw - 0.3).abs() < 1e-9);
        assert!((hd - 0.3).abs() < 1e-9);
    }
}
