//! Configuration handling
//!
//! Configuration is read from the file given with `--config` (or
//! `BACKLOG_CONFIG`), otherwise from `~/.config/backlog-graph/config.toml`
//! (platform equivalent). A missing global file means defaults; the CLI
//! also falls back to defaults when the global file cannot be loaded.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::RenderStyle;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),
}

/// Settings read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Refuse to render a backlog that fails validation
    pub strict: bool,

    /// Colors and attributes of the generated graph
    pub style: RenderStyle,

    /// Where the configuration came from, if anywhere
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Loads configuration, preferring an explicit path over the global file
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::load_file(path)
            }
            None => Self::load_global(),
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "backlog", "backlog-graph")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads the global configuration, or defaults if there is none
    fn load_global() -> Result<Self> {
        let config_path = match Self::global_config_dir() {
            Some(dir) => dir.join("config.toml"),
            None => return Ok(Self::default()),
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(&config_path)
    }

    /// Loads configuration from a specific file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parses and validates configuration text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let style = &self.style;
        for (key, value) in [
            ("style.done_color", &style.done_color),
            ("style.todo_color", &style.todo_color),
            ("style.node_style", &style.node_style),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }
}
