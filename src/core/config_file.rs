//! User configuration file handling
//!
//! Manages settings from ~/.config/bezy-selection/settings.json

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::state::FilterState;

/// User configuration from ~/.config/bezy-selection/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    /// Log level used when RUST_LOG is not set (e.g., "warn", "debug")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// The filter option each palette row was last left on
    #[serde(default)]
    pub filters: FilterState,
}

impl ConfigFile {
    /// Get the path to the bezy-selection config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("bezy-selection")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or `None` if it is missing or broken
    pub fn load_from(path: &Path) -> Option<Self> {
        match Self::try_load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        }
    }

    /// Like [`ConfigFile::load`], but a broken file is an error
    pub fn try_load() -> anyhow::Result<Option<Self>> {
        Self::try_load_from(&Self::config_path())
    }

    /// `Ok(None)` if there is no file at `path`, an error if it can't be used
    pub fn try_load_from(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings.json at {:?}", path))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings.json at {:?}", path))?;
        debug!("Loaded user settings from {:?}", path);
        Ok(Some(config))
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/bezy-selection directory
    /// 2. A settings.json file with default values
    /// 3. A logs/ directory for `--log-file` output
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        Self::initialize_config_directory_at(&Self::config_dir())
    }

    pub fn initialize_config_directory_at(config_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("settings.json");
        if !settings_path.exists() {
            let example = ConfigFile {
                log_level: Some("warn".to_string()),
                filters: FilterState::default(),
            };
            example.save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}
