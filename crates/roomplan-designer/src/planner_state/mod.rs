//! Planner state manager for UI integration.
//! Owns the scene plus everything around it that a session needs.
//!
//! This module is split into submodules:
//! - `history`: Undo/redo functionality
//! - `furniture`: Adding catalog furniture with auto-placement
//! - `transforms`: Committed move, scale, rotate, delete
//! - `file_io`: Save/load operations

mod file_io;
mod furniture;
mod history;
mod transforms;

pub use file_io::LoadSummary;
pub use furniture::PlacementOutcome;
pub use transforms::RotationDirection;

use crate::commands::PlannerCommand;
use crate::interaction::InteractionSettings;
use crate::placement::PlacementGrid;
use crate::scene::Scene;
use roomplan_core::RoomBoundary;

/// Tunables for a planner session.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerSettings {
    pub room: RoomBoundary,
    pub grid: PlacementGrid,
    pub interaction: InteractionSettings,
    pub max_undo_depth: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            room: RoomBoundary::default(),
            grid: PlacementGrid::default(),
            interaction: InteractionSettings::default(),
            max_undo_depth: 50,
        }
    }
}

/// Planner state for UI integration
#[derive(Clone, Debug)]
pub struct PlannerState {
    pub scene: Scene,
    pub settings: PlannerSettings,
    pub current_file_path: Option<std::path::PathBuf>,
    pub is_modified: bool,
    pub scene_name: String,
    pub(crate) undo_stack: Vec<PlannerCommand>,
    pub(crate) redo_stack: Vec<PlannerCommand>,
}

impl PlannerState {
    /// Creates a new planner state with default settings.
    pub fn new() -> Self {
        Self::with_settings(PlannerSettings::default())
    }

    /// Creates a new planner state with the given settings.
    pub fn with_settings(settings: PlannerSettings) -> Self {
        let mut scene = Scene::with_room(settings.room);
        scene.set_validate_rotation(settings.interaction.validate_rotation);
        Self {
            scene,
            settings,
            current_file_path: None,
            is_modified: false,
            scene_name: "Untitled".to_string(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Turns collision checking of rotations on or off.
    pub fn set_validate_rotation(&mut self, enabled: bool) {
        self.settings.interaction.validate_rotation = enabled;
        self.scene.set_validate_rotation(enabled);
    }

    /// Removes every item from the scene. Undoable.
    pub fn reset_scene(&mut self) {
        if self.scene.is_empty() {
            self.scene.clear_selection();
            return;
        }
        self.push_command(PlannerCommand::Reset(Default::default()));
        tracing::info!("Scene reset");
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}
