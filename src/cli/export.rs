//! Export command: print or save the backlog model as a backlog file

use std::path::Path;

use anyhow::Result;

use super::app::Session;
use super::output::Output;
use crate::storage::{save_backlog, BacklogFormat};

/// Prints the backlog in the chosen format, or saves it to `path`
///
/// `backlog export > backlog.toml` is the easiest way to start a file from
/// the built-in backlog.
pub fn run(
    session: &Session,
    output: &Output,
    format: BacklogFormat,
    path: Option<&Path>,
) -> Result<()> {
    match path {
        Some(path) => {
            output.verbose_ctx("export", &format!("Saving to {}", path.display()));
            save_backlog(path, &session.backlog)?;
            output.success(&format!("Exported backlog to {}", path.display()));
        }
        None => {
            output.verbose_ctx("export", &format!("Serializing as {}", format));
            let text = format.serialize(&session.backlog)?;
            output.raw(&text);
        }
    }
    Ok(())
}
