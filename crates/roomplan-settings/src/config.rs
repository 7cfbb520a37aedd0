//! Configuration and settings management for RoomPlan
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Room boundary (the rectangle every footprint must stay inside)
//! - Placement grid used for automatic placement
//! - Interaction tuning (drag threshold, scale sensitivity and limits)
//! - Undo history depth
//! - Asset manifest location

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use roomplan_core::RoomBoundary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placement grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    /// First grid coordinate on both axes
    pub grid_min: f64,
    /// Last grid coordinate on both axes (inclusive)
    pub grid_max: f64,
    /// Distance between neighbouring grid cells
    pub grid_step: f64,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            grid_min: -5.0,
            grid_max: 5.0,
            grid_step: 0.5,
        }
    }
}

/// Pointer gesture settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Screen-space travel in pixels before a press becomes a drag
    pub drag_threshold_px: f64,
    /// Scale change per world unit of pointer travel along X
    pub scale_sensitivity: f64,
    /// Smallest uniform scale an item may take
    pub min_scale: f64,
    /// Largest uniform scale an item may take
    pub max_scale: f64,
    /// Yaw change of one rotate step, in degrees
    pub rotation_step_degrees: f64,
    /// Reject rotations that would overlap or leave the room
    pub validate_rotation: bool,
}

impl InteractionConfig {
    pub fn rotation_step_radians(&self) -> f64 {
        self.rotation_step_degrees.to_radians()
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 3.0,
            scale_sensitivity: 0.5,
            min_scale: 0.3,
            max_scale: 3.0,
            rotation_step_degrees: 22.5,
            validate_rotation: false,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undoable commands kept
    pub max_undo_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_undo_depth: 50 }
    }
}

/// Asset settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// JSON manifest mapping asset references to dimensions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<PathBuf>,
}

/// Complete planner configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Room boundary
    pub room: RoomBoundary,
    /// Automatic placement grid
    pub placement: PlacementSettings,
    /// Gesture tuning
    pub interaction: InteractionConfig,
    /// Undo history
    pub history: HistorySettings,
    /// Asset lookup
    pub assets: AssetSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::debug!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let room = &self.room;
        let bounds = [room.min_x, room.max_x, room.min_z, room.max_z];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::InvalidRange {
                key: "room".to_string(),
                reason: "bounds must be finite".to_string(),
            });
        }
        if room.max_x <= room.min_x || room.max_z <= room.min_z {
            return Err(ConfigError::InvalidRange {
                key: "room".to_string(),
                reason: "max must be greater than min on both axes".to_string(),
            });
        }

        let placement = &self.placement;
        if !(placement.grid_step.is_finite() && placement.grid_step > 0.0) {
            return Err(ConfigError::out_of_range(
                "placement.grid_step",
                placement.grid_step,
            ));
        }
        if !(placement.grid_min.is_finite() && placement.grid_max.is_finite())
            || placement.grid_max < placement.grid_min
        {
            return Err(ConfigError::InvalidRange {
                key: "placement".to_string(),
                reason: "grid_max must not be less than grid_min".to_string(),
            });
        }

        let interaction = &self.interaction;
        if !(interaction.drag_threshold_px >= 0.0) {
            return Err(ConfigError::out_of_range(
                "interaction.drag_threshold_px",
                interaction.drag_threshold_px,
            ));
        }
        if !(interaction.scale_sensitivity > 0.0) {
            return Err(ConfigError::out_of_range(
                "interaction.scale_sensitivity",
                interaction.scale_sensitivity,
            ));
        }
        if !(interaction.min_scale > 0.0) {
            return Err(ConfigError::out_of_range(
                "interaction.min_scale",
                interaction.min_scale,
            ));
        }
        if !(interaction.max_scale >= interaction.min_scale) {
            return Err(ConfigError::InvalidRange {
                key: "interaction".to_string(),
                reason: "max_scale must not be less than min_scale".to_string(),
            });
        }
        if !(interaction.rotation_step_degrees > 0.0 && interaction.rotation_step_degrees < 360.0)
        {
            return Err(ConfigError::out_of_range(
                "interaction.rotation_step_degrees",
                interaction.rotation_step_degrees,
            ));
        }

        if self.history.max_undo_depth == 0 {
            return Err(ConfigError::out_of_range("history.max_undo_depth", 0));
        }

        Ok(())
    }
}
