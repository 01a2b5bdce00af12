//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | *(none)*, `render` | Print the backlog as a DOT graph |
//! | `check` | Report duplicate IDs and unknown dependencies |
//! | `stats` | Item, edge and completion counts |
//! | `ready`, `blocked` | Work queue views |
//! | `export` | Print the backlog as TOML, YAML or JSON |
//!
//! ## Output Formats
//!
//! Report commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! The DOT graph is always plain text:
//! ```bash
//! backlog | dot -Tsvg > backlog.svg
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod render;
mod query;
mod export;

pub use app::{Cli, Commands, Session, run};
pub use output::{Output, OutputFormat};
