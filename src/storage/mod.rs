//! # Storage Layer
//!
//! Everything that touches the filesystem.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | TOML | `--config`, `BACKLOG_CONFIG` or `<config dir>/backlog-graph/config.toml` |
//! | Backlog | TOML, YAML or JSON | `--file` or `BACKLOG_FILE` |
//!
//! Without a backlog file the built-in backlog is used, so nothing here is
//! needed for the default invocation.
//!
//! ## Key Types
//!
//! - [`Config`] - Render style and strictness
//! - [`BacklogFormat`] - Reads and writes backlog files

mod backlog_file;
mod config;

pub use backlog_file::{load_backlog, save_backlog, BacklogFileError, BacklogFormat};
pub use config::{Config, ConfigError};
