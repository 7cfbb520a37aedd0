//! Scene type definitions: CameraView, CameraPreset, InteractiveMode, RenderItem.

use crate::item::PlacedItem;
use roomplan_core::{
    Dimensions, EulerRotation, FurnitureType, ItemId, Point3, Scale3,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Camera presets offered by the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraView {
    Top,
    Side,
    Front,
    #[default]
    Orbit,
}

impl CameraView {
    pub fn all() -> &'static [CameraView] {
        &[
            CameraView::Top,
            CameraView::Side,
            CameraView::Front,
            CameraView::Orbit,
        ]
    }

    /// Camera placement for this view.
    pub fn preset(self) -> CameraPreset {
        match self {
            CameraView::Top => CameraPreset::new(Point3::new(0.0, 15.0, 0.0), Point3::ORIGIN),
            CameraView::Side => CameraPreset::new(Point3::new(15.0, 5.0, 0.0), Point3::ORIGIN),
            CameraView::Front => {
                CameraPreset::new(Point3::new(0.0, 5.0, 15.0), Point3::new(20.0, 0.0, 5.0))
            }
            CameraView::Orbit => CameraPreset::new(Point3::new(8.0, 8.0, 8.0), Point3::ORIGIN),
        }
    }
}

impl fmt::Display for CameraView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraView::Top => write!(f, "top"),
            CameraView::Side => write!(f, "side"),
            CameraView::Front => write!(f, "front"),
            CameraView::Orbit => write!(f, "orbit"),
        }
    }
}

/// Camera position and look-at target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPreset {
    pub position: Point3,
    pub look_at: Point3,
}

impl CameraPreset {
    pub fn new(position: Point3, look_at: Point3) -> Self {
        Self { position, look_at }
    }
}

/// Kind of gesture currently manipulating an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    #[default]
    None,
    Drag,
    Rotate,
    Scale,
}

/// Gesture bookkeeping shared with the rest of the UI.
///
/// Records which item is being manipulated and its transform when the
/// gesture started. Reset to the default when the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractiveMode {
    pub mode: TransformMode,
    pub target_id: Option<ItemId>,
    pub start_position: Option<Point3>,
    pub start_rotation: Option<EulerRotation>,
    pub start_scale: Option<Scale3>,
}

impl InteractiveMode {
    /// Mode for a gesture on `item` starting now.
    pub fn begin(mode: TransformMode, item: &PlacedItem) -> Self {
        Self {
            mode,
            target_id: Some(item.id),
            start_position: Some(item.position),
            start_rotation: Some(item.rotation),
            start_scale: Some(item.scale),
        }
    }

    pub fn is_active(&self) -> bool {
        self.mode != TransformMode::None
    }

    pub fn targets(&self, id: ItemId) -> bool {
        self.target_id == Some(id)
    }
}

/// What a renderer should draw for an item.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderShape {
    /// A loaded model, by asset reference
    Asset(String),
    /// Fallback primitive keyed by furniture type
    Primitive(Option<FurnitureType>),
}

/// Everything a renderer needs to draw one item.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub id: ItemId,
    pub position: Point3,
    pub yaw: f64,
    pub scale: Scale3,
    pub dimensions: Dimensions,
    pub shape: RenderShape,
    pub color: Option<String>,
    pub selected: bool,
}

impl RenderItem {
    pub fn from_item(item: &PlacedItem, selected: bool) -> Self {
        let shape = match &item.definition.asset_ref {
            Some(asset) => RenderShape::Asset(asset.clone()),
            None => RenderShape::Primitive(item.kind()),
        };
        Self {
            id: item.id,
            position: item.position,
            yaw: item.yaw(),
            scale: item.scale,
            dimensions: item.dimensions,
            shape,
            color: item.color.clone(),
            selected,
        }
    }
}

/// Draws the scene. Implemented by the viewport.
pub trait Renderer {
    fn set_camera(&mut self, camera: CameraPreset);

    fn draw(&mut self, items: &[RenderItem]);
}
