//! RoomPlan Settings Crate
//!
//! Handles planner configuration: room boundary, placement grid, gesture
//! tuning, history depth and the asset manifest location.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{AssetSettings, Config, HistorySettings, InteractionConfig, PlacementSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use manager::SettingsManager;
