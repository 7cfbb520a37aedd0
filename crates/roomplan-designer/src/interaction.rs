//! Per-item pointer interaction.
//!
//! [`ItemInteraction`] turns raw pointer events into proposed transforms,
//! checks each proposal with the validator and keeps the last valid one as
//! the item's *live* transform. The live transform is only written to the
//! scene when the gesture ends.
//!
//! ```text
//!   idle ──pointer_down──▶ dragging ──pointer_up──▶ idle   (move commit or click)
//!   idle ──scale_start───▶ scaling  ──scale_end───▶ idle   (scale commit)
//! ```
//!
//! Invalid proposals are dropped without any feedback, so an item dragged
//! against an obstacle stays at its last valid spot.

use crate::item::Footprint;
use crate::planner_state::PlannerState;
use crate::scene::{RenderItem, TransformMode};
use roomplan_core::{ItemId, Point3, Scale3};
use std::f64::consts::FRAC_PI_8;

/// Maps a screen position onto the floor plane (y = 0).
pub trait FloorProjector {
    /// Returns `None` when the pointer ray misses the floor.
    fn project_to_floor(&self, screen_x: f64, screen_y: f64) -> Option<Point3>;
}

impl<F> FloorProjector for F
where
    F: Fn(f64, f64) -> Option<Point3>,
{
    fn project_to_floor(&self, screen_x: f64, screen_y: f64) -> Option<Point3> {
        self(screen_x, screen_y)
    }
}

/// Gesture tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSettings {
    /// Screen travel below which a press/release is a click
    pub drag_threshold_px: f64,
    /// Scale change per world unit of pointer travel along X
    pub scale_sensitivity: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Yaw increment of one rotate step, in radians
    pub rotation_step: f64,
    pub validate_rotation: bool,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            drag_threshold_px: 3.0,
            scale_sensitivity: 0.5,
            min_scale: 0.3,
            max_scale: 3.0,
            rotation_step: FRAC_PI_8,
            validate_rotation: false,
        }
    }
}

impl InteractionSettings {
    pub fn clamp_scale(&self, value: f64) -> f64 {
        value.clamp(self.min_scale, self.max_scale)
    }
}

/// Gesture phase of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionPhase {
    Idle,
    Dragging {
        anchor_point: Point3,
        anchor_position: Point3,
        press: (f64, f64),
        travelled: bool,
    },
    Scaling {
        anchor_point: Point3,
        anchor_scale: f64,
    },
}

/// What a finished pointer gesture amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No gesture was in progress
    Ignored,
    /// Travel stayed under the threshold; the item was selected
    Clicked,
    /// The live transform was written to the scene
    Committed,
    /// The item vanished, never moved, or the commit was refused
    Discarded,
}

/// Pointer interaction controller for one placed item.
#[derive(Debug, Clone)]
pub struct ItemInteraction {
    item_id: ItemId,
    settings: InteractionSettings,
    phase: InteractionPhase,
    live_position: Point3,
    live_scale: Scale3,
}

impl ItemInteraction {
    /// Creates an idle controller for item `id`. Returns `None` if the item
    /// is not in the scene.
    pub fn new(state: &PlannerState, id: ItemId) -> Option<Self> {
        let item = state.scene.item(id)?;
        Some(Self {
            item_id: id,
            settings: state.settings.interaction,
            phase: InteractionPhase::Idle,
            live_position: item.position,
            live_scale: item.scale,
        })
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == InteractionPhase::Idle
    }

    pub fn live_position(&self) -> Point3 {
        self.live_position
    }

    pub fn live_scale(&self) -> Scale3 {
        self.live_scale
    }

    /// Re-reads the committed transform, e.g. after an undo. Ignored while
    /// a gesture is in progress.
    pub fn sync(&mut self, state: &PlannerState) {
        if !self.is_idle() {
            return;
        }
        if let Some(item) = state.scene.item(self.item_id) {
            self.live_position = item.position;
            self.live_scale = item.scale;
        }
    }

    /// Render data using the live transform.
    pub fn render_item(&self, state: &PlannerState) -> Option<RenderItem> {
        let item = state.scene.item(self.item_id)?;
        let mut render = RenderItem::from_item(item, state.scene.is_selected(self.item_id));
        render.position = self.live_position;
        render.scale = self.live_scale;
        Some(render)
    }

    // ---- drag ----

    /// Pointer pressed on the item: records the anchor pair.
    pub fn pointer_down(
        &mut self,
        state: &mut PlannerState,
        projector: &dyn FloorProjector,
        screen_x: f64,
        screen_y: f64,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }
        let Some(anchor_point) = projector.project_to_floor(screen_x, screen_y) else {
            return false;
        };
        let Some(item) = state.scene.item(self.item_id) else {
            return false;
        };
        let anchor_position = item.position;

        self.live_position = anchor_position;
        self.live_scale = item.scale;
        self.phase = InteractionPhase::Dragging {
            anchor_point,
            anchor_position,
            press: (screen_x, screen_y),
            travelled: false,
        };
        state.scene.begin_interaction(TransformMode::Drag, self.item_id);
        true
    }

    /// Pointer moved during a drag. Returns whether the live position moved.
    ///
    /// Only an item that is currently selected can be dragged. Motion below
    /// the click threshold is ignored.
    pub fn pointer_move(
        &mut self,
        state: &PlannerState,
        projector: &dyn FloorProjector,
        screen_x: f64,
        screen_y: f64,
    ) -> bool {
        let InteractionPhase::Dragging {
            anchor_point,
            anchor_position,
            press,
            travelled,
        } = &mut self.phase
        else {
            return false;
        };

        if !*travelled {
            let distance = (screen_x - press.0).hypot(screen_y - press.1);
            if distance < self.settings.drag_threshold_px {
                return false;
            }
            *travelled = true;
        }

        if !state.scene.is_selected(self.item_id) {
            return false;
        }
        let Some(item) = state.scene.item(self.item_id) else {
            return false;
        };
        let Some(current) = projector.project_to_floor(screen_x, screen_y) else {
            return false;
        };

        let proposed = (*anchor_position + (current - *anchor_point)).to_floor();
        let footprint = Footprint::new(item.dimensions, self.live_scale, item.yaw());
        let (half_w, half_d) = footprint.half_extents();
        let (x, z) = state
            .scene
            .room()
            .clamp_center(proposed.x, proposed.z, half_w, half_d);
        let proposed = Point3::on_floor(x, z);

        if state.scene.validator().is_valid_position(
            proposed,
            &footprint,
            state.scene.others(self.item_id),
        ) {
            self.live_position = proposed;
            true
        } else {
            tracing::debug!("Drag of {} stuck at {}", self.item_id, self.live_position);
            false
        }
    }

    /// Pointer released. A press that never travelled past the threshold
    /// selects the item; otherwise the live position is committed.
    pub fn pointer_up(&mut self, state: &mut PlannerState) -> GestureOutcome {
        let InteractionPhase::Dragging { travelled, .. } = self.phase else {
            return GestureOutcome::Ignored;
        };
        self.phase = InteractionPhase::Idle;
        state.scene.end_interaction();

        if !travelled {
            return if state.scene.select(self.item_id) {
                GestureOutcome::Clicked
            } else {
                GestureOutcome::Discarded
            };
        }

        let unchanged = state
            .scene
            .item(self.item_id)
            .is_some_and(|item| item.position == self.live_position);
        if unchanged {
            return GestureOutcome::Discarded;
        }

        if state.commit_move(self.item_id, self.live_position) {
            GestureOutcome::Committed
        } else {
            self.sync(state);
            GestureOutcome::Discarded
        }
    }

    // ---- scale ----

    /// Scale handle pressed: records the anchor point and current scale.
    pub fn scale_start(
        &mut self,
        state: &mut PlannerState,
        projector: &dyn FloorProjector,
        screen_x: f64,
        screen_y: f64,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }
        let Some(anchor_point) = projector.project_to_floor(screen_x, screen_y) else {
            return false;
        };
        let Some(item) = state.scene.item(self.item_id) else {
            return false;
        };

        self.live_position = item.position;
        self.live_scale = item.scale;
        self.phase = InteractionPhase::Scaling {
            anchor_point,
            anchor_scale: item.scale.uniform_value(),
        };
        state.scene.begin_interaction(TransformMode::Scale, self.item_id);
        true
    }

    /// Scale handle moved. X travel from the anchor drives a uniform scale,
    /// clamped to the configured range and validated at the live position.
    pub fn scale_move(
        &mut self,
        state: &PlannerState,
        projector: &dyn FloorProjector,
        screen_x: f64,
        screen_y: f64,
    ) -> bool {
        let InteractionPhase::Scaling {
            anchor_point,
            anchor_scale,
        } = self.phase
        else {
            return false;
        };
        let Some(item) = state.scene.item(self.item_id) else {
            return false;
        };
        let Some(current) = projector.project_to_floor(screen_x, screen_y) else {
            return false;
        };

        let delta = (current.x - anchor_point.x) * self.settings.scale_sensitivity;
        let candidate = Scale3::uniform(self.settings.clamp_scale(anchor_scale + delta));
        let footprint = Footprint::new(item.dimensions, candidate, item.yaw());

        if state.scene.validator().is_valid_position(
            self.live_position,
            &footprint,
            state.scene.others(self.item_id),
        ) {
            self.live_scale = candidate;
            true
        } else {
            false
        }
    }

    /// Scale handle released: commits scale and position together.
    pub fn scale_end(&mut self, state: &mut PlannerState) -> GestureOutcome {
        if !matches!(self.phase, InteractionPhase::Scaling { .. }) {
            return GestureOutcome::Ignored;
        }
        self.phase = InteractionPhase::Idle;
        state.scene.end_interaction();

        if state.commit_scale(self.item_id, self.live_position, self.live_scale) {
            GestureOutcome::Committed
        } else {
            self.sync(state);
            GestureOutcome::Discarded
        }
    }

    /// Abandons the current gesture. The scene keeps its committed state.
    pub fn cancel(&mut self, state: &mut PlannerState) {
        if self.is_idle() {
            return;
        }
        self.phase = InteractionPhase::Idle;
        state.scene.end_interaction();
        self.sync(state);
    }
}
