//! File I/O operations (save, load, new) for planner state.

use super::PlannerState;
use crate::serialization::SceneFile;

/// How many saved items made it back into the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

impl PlannerState {
    /// Save scene to file.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let mut file = SceneFile::new(&self.scene_name);
        file.room = Some(*self.scene.room());
        file.items = self.scene.items().to_vec();

        file.save_to_file(&path)?;
        tracing::info!("Saved {} items to {:?}", file.items.len(), path.as_ref());

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;

        Ok(())
    }

    /// Load scene from file.
    ///
    /// Items are re-validated in file order against the current room; any
    /// item that would overlap an earlier one or leave the room is skipped.
    pub fn load_from_file(
        &mut self,
        path: impl AsRef<std::path::Path>,
    ) -> anyhow::Result<LoadSummary> {
        let file = SceneFile::load_from_file(&path)?;

        self.scene.reset();
        let mut summary = LoadSummary::default();
        for item in file.items {
            let name = item.name().to_string();
            let id = item.id;
            if self.scene.add_item(item) {
                summary.loaded += 1;
            } else {
                tracing::warn!("Skipping {} ({}) from {:?}: invalid placement", name, id, path.as_ref());
                summary.skipped += 1;
            }
        }

        self.scene_name = file.metadata.name;
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        self.clear_history();

        tracing::info!(
            "Loaded {} items from {:?} ({} skipped)",
            summary.loaded,
            path.as_ref(),
            summary.skipped
        );
        Ok(summary)
    }

    /// Create new scene (clear all).
    pub fn new_scene(&mut self) {
        self.scene.reset();
        self.current_file_path = None;
        self.is_modified = false;
        self.scene_name = "Untitled".to_string();
        self.clear_history();
    }

    /// Mark scene as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Get display name for the scene.
    pub fn display_name(&self) -> String {
        let name = if let Some(path) = &self.current_file_path {
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(&self.scene_name)
        } else {
            &self.scene_name
        };

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
