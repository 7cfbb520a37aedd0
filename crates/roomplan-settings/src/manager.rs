//! Settings manager
//!
//! Owns the active [`Config`] and knows where it lives on disk:
//! `<platform config dir>/roomplan/config.toml`.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "roomplan";
const CONFIG_FILE: &str = "config.toml";

/// Active configuration plus the file it was read from.
#[derive(Debug, Clone, Default)]
pub struct SettingsManager {
    config: Config,
    path: Option<PathBuf>,
}

impl SettingsManager {
    /// Create a manager holding the default config, not bound to any file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform configuration directory for RoomPlan.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Full path of the default config file.
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Create the configuration directory if it does not exist yet.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    /// Load a config file and bind the manager to it.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config = Config::load_from_file(path)?;
        Ok(Self {
            config,
            path: Some(path.to_path_buf()),
        })
    }

    /// Load `path`, or defaults when the file does not exist.
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            return Self::load_from_file(path);
        }
        tracing::info!("No configuration at {:?}, using defaults", path);
        Ok(Self {
            config: Config::default(),
            path: Some(path.to_path_buf()),
        })
    }

    /// Load the platform config file, falling back to defaults.
    ///
    /// Never fails: an unreadable or invalid file is reported and ignored.
    pub fn load_default() -> Self {
        let path = match Self::config_file_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("{}; using default configuration", e);
                return Self::new();
            }
        };

        match Self::load_or_default(&path) {
            Ok(manager) => manager,
            Err(e) => {
                tracing::warn!("Ignoring configuration at {:?}: {}", path, e);
                Self {
                    config: Config::default(),
                    path: Some(path),
                }
            }
        }
    }

    /// Write the config back to the file it was loaded from, or to the
    /// platform default location.
    pub fn save(&self) -> SettingsResult<PathBuf> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => {
                Self::ensure_config_dir()?;
                Self::config_file_path()?
            }
        };
        self.config
            .save_to_file(&path)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(path)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Restore default settings, keeping the bound file.
    pub fn restore_defaults(&mut self) {
        self.config = Config::default();
    }
}
