//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which currently holds the tournament picked in a previous session.
//!
//! Configuration is stored at `~/.config/courtdesk/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::Tournament;
use crate::registry;

/// Application name used for config directory paths
const APP_NAME: &str = "courtdesk";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub tournament: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// The tournament to open at startup: the saved pick while it still
    /// exists in the registry, otherwise the first registered stop.
    pub fn active_tournament(&self) -> Option<&'static Tournament> {
        match self.tournament.as_deref().and_then(registry::tournament) {
            Some(t) => Some(t),
            None => registry::all_tournaments().first(),
        }
    }
}
