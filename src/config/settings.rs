// src/config/settings.rs
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Serialize, Deserialize};

use super::Theme;

pub const DEFAULT_ENDPOINT: &str = "https://stock-rocket-server.onrender.com/api/analyze-stocks";

const APP_DIR: &str = "stock-rocket";
const SETTINGS_STEM: &str = "settings";
const ENV_PREFIX: &str = "STOCK_ROCKET";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub themable: bool,
    pub theme: Theme,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            themable: true,
            theme: Theme::Light,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Directory holding `settings.{ron,toml,json}`, if the platform has one.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_dir().as_deref())
    }

    /// Defaults, then the optional settings file in `dir`, then `STOCK_ROCKET_*` variables.
    pub fn load_from(dir: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(dir) = dir {
            let stem = dir.join(SETTINGS_STEM);
            builder = builder.add_source(
                File::with_name(&stem.to_string_lossy()).required(false)
            );
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")
    }
}
