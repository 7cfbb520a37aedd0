//! # RoomPlan
//!
//! Furniture placement planner: keeps every item of a room layout inside
//! the room walls and free of overlaps.
//!
//! ## Architecture
//!
//! RoomPlan is organized as a workspace with multiple crates:
//!
//! 1. **roomplan-core** - Geometry value types, furniture catalog, errors, notifications
//! 2. **roomplan-designer** - Bounding boxes, placement validation, grid search,
//!    scene store, interaction and undo history
//! 3. **roomplan-settings** - Configuration files and their validation
//! 4. **roomplan** - Headless binary that integrates all crates

use anyhow::Context;
use std::sync::Arc;

pub use roomplan_core::{
    Catalog, Dimensions, Error, FurnitureDefinition, FurnitureType, ItemId, Notification,
    NotificationCenter, NotificationSink, Point3, Result, RoomBoundary, Severity,
};

pub use roomplan_designer::{
    DimensionResolver, InteractionSettings, ManifestAssetLoader, PlacedItem, PlacementGrid,
    PlacementOutcome, PlacementValidator, PlannerSettings, PlannerState, Scene,
};

pub use roomplan_settings::{Config, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("ROOMPLAN_BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Planner tunables described by `config`.
pub fn planner_settings(config: &Config) -> PlannerSettings {
    let interaction = &config.interaction;
    PlannerSettings {
        room: config.room,
        grid: PlacementGrid::new(
            config.placement.grid_min,
            config.placement.grid_max,
            config.placement.grid_step,
        ),
        interaction: InteractionSettings {
            drag_threshold_px: interaction.drag_threshold_px,
            scale_sensitivity: interaction.scale_sensitivity,
            min_scale: interaction.min_scale,
            max_scale: interaction.max_scale,
            rotation_step: interaction.rotation_step_radians(),
            validate_rotation: interaction.validate_rotation,
        },
        max_undo_depth: config.history.max_undo_depth,
    }
}

/// Empty planner session configured by `config`.
pub fn planner_from_config(config: &Config) -> PlannerState {
    PlannerState::with_settings(planner_settings(config))
}

/// Dimension resolver for `config`: manifest backed when a manifest is
/// configured, offline otherwise.
pub fn resolver_from_config(config: &Config) -> anyhow::Result<DimensionResolver> {
    match &config.assets.manifest_path {
        Some(path) => {
            let loader = ManifestAssetLoader::load_from_file(path)
                .with_context(|| format!("Failed to load asset manifest {:?}", path))?;
            Ok(DimensionResolver::new(Arc::new(loader)))
        }
        None => Ok(DimensionResolver::offline()),
    }
}
