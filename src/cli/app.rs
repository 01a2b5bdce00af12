//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{export, query, render};
use crate::domain::{builtin_backlog, Backlog};
use crate::storage::{load_backlog, BacklogFormat, Config};

#[derive(Parser)]
#[command(name = "backlog")]
#[command(author, version, about = "Draw a project backlog as a Graphviz graph")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Backlog file (.toml, .yaml, .yml or .json); the built-in backlog is used otherwise
    #[arg(long, short = 'i', global = true, env = "BACKLOG_FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, env = "BACKLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for reports
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Defaults to `render`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the backlog as a DOT graph
    Render {
        /// Fail on duplicate IDs, unknown dependencies or self-dependencies
        #[arg(long)]
        strict: bool,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Check for duplicate IDs, unknown dependencies and self-dependencies
    Check,

    /// Show backlog statistics
    Stats,

    /// Show items ready to work on
    Ready,

    /// Show items waiting on other items
    Blocked,

    /// Print the backlog model as a backlog file
    Export {
        /// File format to print
        #[arg(long, value_enum, default_value = "toml")]
        to: BacklogFormat,

        /// Write to a file instead; the format follows its extension
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Configuration and backlog for one invocation
pub struct Session {
    pub config: Config,
    pub backlog: Backlog,
}

impl Session {
    /// Loads configuration and the backlog (file or built-in)
    pub fn open(file: Option<&Path>, config: Option<&Path>, output: &Output) -> Result<Self> {
        // An explicit file must load; a broken global file only costs its settings
        let config = match config {
            Some(path) => Config::load(Some(path))?,
            None => Config::load(None).unwrap_or_else(|err| {
                output.verbose_ctx(
                    "config",
                    &format!("Ignoring global configuration: {:#}", err),
                );
                Config::default()
            }),
        };
        match &config.source {
            Some(path) => output.verbose_ctx("config", &format!("Loaded {}", path.display())),
            None => output.verbose_ctx("config", "Using default configuration"),
        }

        let backlog = match file {
            Some(path) => {
                output.verbose_ctx("backlog", &format!("Reading {}", path.display()));
                load_backlog(path)?
            }
            None => {
                output.verbose_ctx("backlog", "Using built-in backlog");
                builtin_backlog()
            }
        };
        output.verbose_ctx(
            "backlog",
            &format!(
                "{} directions, {} items",
                backlog.directions.len(),
                backlog.len()
            ),
        );

        Ok(Self { config, backlog })
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("backlog starting");

    let session = Session::open(cli.file.as_deref(), cli.config.as_deref(), &output)?;

    match cli.command {
        None => render::run(&session, &output, false, None)?,
        Some(Commands::Render { strict, output: path }) => {
            render::run(&session, &output, strict, path.as_deref())?
        }
        Some(Commands::Check) => query::check(&session, &output)?,
        Some(Commands::Stats) => query::stats(&session, &output)?,
        Some(Commands::Ready) => query::ready(&session, &output)?,
        Some(Commands::Blocked) => query::blocked(&session, &output)?,
        Some(Commands::Export { to, output: path }) => {
            export::run(&session, &output, to, path.as_deref())?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
