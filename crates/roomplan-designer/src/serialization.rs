//! Serialization and deserialization for scene files.
//!
//! A scene file is a JSON document holding the placed items of one room
//! layout together with some metadata.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use roomplan_core::{RoomBoundary, SceneFileError};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::item::PlacedItem;

/// Scene file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete scene file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub version: String,
    pub metadata: SceneMetadata,
    /// Room the items were laid out in
    #[serde(default)]
    pub room: Option<RoomBoundary>,
    pub items: Vec<PlacedItem>,
}

/// Scene metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl SceneFile {
    /// Create new empty scene file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: SceneMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            room: None,
            items: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let scene: SceneFile = serde_json::from_str(json).map_err(|e| SceneFileError::Malformed {
            reason: e.to_string(),
        })?;

        if scene.version != FILE_FORMAT_VERSION {
            return Err(SceneFileError::UnsupportedVersion {
                found: scene.version,
                expected: FILE_FORMAT_VERSION.to_string(),
            }
            .into());
        }
        Ok(scene)
    }

    /// Save scene to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize scene")?;

        std::fs::write(path.as_ref(), json).context("Failed to write scene file")?;

        Ok(())
    }

    /// Load scene from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read scene file")?;

        Self::from_json(&content)
            .with_context(|| format!("Failed to parse scene file {:?}", path.as_ref()))
    }
}
