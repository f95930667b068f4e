//! Configuration management for the takt application.
//!
//! The configuration is a JSON file in the platform application data
//! directory. Its one section today selects the storage backend and,
//! optionally, a custom path for the storage file. A missing file is not
//! an error; reads fall back to the default configuration, which stores
//! tasks in a CSV flat file under the application data directory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use takt::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let target = config.storage_target()?;
//! # Ok(())
//! # }
//! ```

use crate::db::db::DB_FILE_NAME;
use crate::libs::data_storage::DataStorage;
use crate::libs::flat_file::FLAT_FILE_NAME;
use crate::libs::messages::Message;
use crate::libs::storage::StorageTarget;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Storage backend named in the configuration file.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    FlatFile,
    Sqlite,
}

/// Storage selection: which backend to use and where its file lives.
///
/// When `path` is omitted the backend's default file name is resolved
/// under the application data directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Root configuration object.
///
/// Sections are optional so an absent or partial configuration file keeps
/// working; unset sections are omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl StorageConfig {
    /// Interactive storage setup: pick a backend, optionally a custom path.
    pub fn init(current: Option<&StorageConfig>) -> Result<Self> {
        let options = ["Flat file (CSV)", "Embedded database (SQLite)"];
        let default_index = match current.map(|c| c.backend) {
            Some(StorageBackend::Sqlite) => 1,
            _ => 0,
        };
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Storage backend")
            .items(&options)
            .default(default_index)
            .interact()?;
        let backend = match selection {
            1 => StorageBackend::Sqlite,
            _ => StorageBackend::FlatFile,
        };

        let current_path = current
            .and_then(|c| c.path.as_ref())
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Storage file path (empty for default)")
            .with_initial_text(current_path)
            .allow_empty(true)
            .interact_text()?;
        let path = if path.trim().is_empty() { None } else { Some(PathBuf::from(path.trim())) };

        Ok(StorageConfig { backend, path })
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard over the current settings.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        msg_print!(Message::ConfigWizardHeader, true);
        config.storage = Some(StorageConfig::init(config.storage.as_ref())?);

        Ok(config)
    }

    /// Resolves the active storage target from this configuration.
    ///
    /// Without a storage section the flat-file backend is used with its
    /// default file name, matching the behavior of a fresh installation.
    pub fn storage_target(&self) -> Result<StorageTarget> {
        let storage = self.storage.as_ref();
        let backend = storage.map(|s| s.backend).unwrap_or(StorageBackend::FlatFile);
        let custom_path = storage.and_then(|s| s.path.clone());

        let target = match backend {
            StorageBackend::FlatFile => {
                let path = match custom_path {
                    Some(path) => path,
                    None => DataStorage::new().get_path(FLAT_FILE_NAME)?,
                };
                StorageTarget::FlatFile(path)
            }
            StorageBackend::Sqlite => {
                let path = match custom_path {
                    Some(path) => path,
                    None => DataStorage::new().get_path(DB_FILE_NAME)?,
                };
                StorageTarget::Sqlite(path)
            }
        };

        Ok(target)
    }
}
