use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::PaddockError;

const CONFIG_DIR_NAME: &str = "paddock";
const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_TOP_DRIVERS: usize = 5;
pub const DEFAULT_CONSTRUCTOR_COUNT: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the collection documents, used when none is given on the command line
    pub data_dir: Option<PathBuf>,
    pub default_top_drivers: usize,
    pub default_constructor_count: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_top_drivers: DEFAULT_TOP_DRIVERS,
            default_constructor_count: DEFAULT_CONSTRUCTOR_COUNT,
        }
    }
}

impl DashboardConfig {
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read the config from the platform config directory. `Ok(None)` when no file exists yet.
    pub fn from_local_file() -> Result<Option<Self>, PaddockError> {
        let config_path = Self::default_path().ok_or(PaddockError::NoConfigDir)?;
        if config_path.exists() {
            Self::from_path(&config_path).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, PaddockError> {
        debug!("Reading config from {:?}", path);
        let file = File::open(path).map_err(|e| PaddockError::ConfigIOError { source: e })?;
        serde_json::from_reader(file).map_err(|e| PaddockError::ConfigSerializeError { source: e })
    }

    pub fn save(&self) -> Result<(), PaddockError> {
        let config_path = Self::default_path().ok_or(PaddockError::NoConfigDir)?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), PaddockError> {
        if let Some(parent) = config_path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| PaddockError::ConfigIOError { source: e })?;
        }

        let file = File::create(config_path).map_err(|e| PaddockError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| PaddockError::ConfigSerializeError { source: e })
    }
}
