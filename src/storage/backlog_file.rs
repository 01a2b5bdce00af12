//! Backlog files
//!
//! A backlog can be declared in a file instead of using the built-in one.
//! The format follows the extension: `.toml`, `.yaml`/`.yml` or `.json`.
//!
//! TOML layout:
//!
//! ```toml
//! [[direction]]
//! name = "Unit Tests"
//!
//! [[direction.item]]
//! id = "UT1"
//! label = "Unit Tests"
//! done = true
//!
//! [[direction.item]]
//! id = "UT2"
//! label = "Parameterized tests"
//! depends_on = "UT1"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::domain::Backlog;

#[derive(Debug, Error)]
pub enum BacklogFileError {
    #[error("Unsupported backlog file extension: {0} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {format} backlog: {message}")]
    Parse {
        format: BacklogFormat,
        message: String,
    },
}

/// Serialization format of a backlog file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BacklogFormat {
    #[default]
    Toml,
    Yaml,
    Json,
}

impl BacklogFormat {
    /// Picks the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, BacklogFileError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(BacklogFileError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }

    /// Parses backlog text in this format
    pub fn parse(&self, content: &str) -> Result<Backlog, BacklogFileError> {
        let parsed: Result<Backlog, String> = match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| BacklogFileError::Parse {
            format: *self,
            message,
        })
    }

    /// Serializes a backlog in this format
    pub fn serialize(&self, backlog: &Backlog) -> Result<String> {
        let text = match self {
            Self::Toml => toml::to_string_pretty(backlog).context("Failed to serialize TOML")?,
            Self::Yaml => serde_yaml::to_string(backlog).context("Failed to serialize YAML")?,
            Self::Json => {
                let mut json = serde_json::to_string_pretty(backlog)
                    .context("Failed to serialize JSON")?;
                json.push('\n');
                json
            }
        };
        Ok(text)
    }
}

impl std::fmt::Display for BacklogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads a backlog file
pub fn load_backlog(path: &Path) -> Result<Backlog> {
    let format = BacklogFormat::from_path(path)?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read backlog file: {}", path.display()))?;

    let backlog = format
        .parse(&content)
        .with_context(|| format!("Failed to load backlog file: {}", path.display()))?;

    Ok(backlog)
}

/// Writes a backlog file, choosing the format from the extension
pub fn save_backlog(path: &Path, backlog: &Backlog) -> Result<()> {
    let format = BacklogFormat::from_path(path)?;
    let content = format.serialize(backlog)?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write backlog file: {}", path.display()))
}
