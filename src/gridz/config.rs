use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

const CONFIG_FILENAME: &str = "config.json";

/// Editor defaults, stored as config.json in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridzConfig {
    /// Side of the grid a new puzzle starts with.
    #[serde(default = "default_grid_size")]
    pub default_size: usize,

    /// Maximum number of undo steps retained per session.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}

fn default_history_capacity() -> usize {
    crate::history::DEFAULT_HISTORY_CAPACITY
}

impl Default for GridzConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_GRID_SIZE,
            history_capacity: default_history_capacity(),
        }
    }
}

impl GridzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: GridzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Set the default grid size, clamped into the editable range.
    pub fn set_default_size(&mut self, size: usize) {
        self.default_size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
    }
}

/// Platform data directory for gridz, if one can be resolved.
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gridz").map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GridzConfig::default();
        assert_eq!(config.default_size, 15);
        assert_eq!(config.history_capacity, 1000);
    }

    #[test]
    fn set_default_size_clamps() {
        let mut config = GridzConfig::default();
        config.set_default_size(1);
        assert_eq!(config.default_size, MIN_GRID_SIZE);
        config.set_default_size(5000);
        assert_eq!(config.default_size, MAX_GRID_SIZE);
        config.set_default_size(21);
        assert_eq!(config.default_size, 21);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = GridzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, GridzConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = GridzConfig::default();
        config.set_default_size(21);
        config.save(temp_dir.path()).unwrap();

        let loaded = GridzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GridzConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GridzConfig::default());
    }
}
