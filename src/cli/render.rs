//! Render command: backlog to DOT

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::app::Session;
use super::output::Output;
use crate::domain::BacklogGraph;
use crate::render::DotRenderer;

/// Renders the session backlog and writes it once, to stdout or a file
pub fn run(session: &Session, output: &Output, strict: bool, path: Option<&Path>) -> Result<()> {
    let strict = strict || session.config.strict;

    if strict || output.is_verbose() {
        let graph = BacklogGraph::from_backlog(&session.backlog);
        output.verbose_ctx(
            "render",
            &format!(
                "{} sequence edges, {} dependency edges, {} dangling",
                graph.sequence_edge_count(),
                graph.dependency_edge_count(),
                graph.dangling().len()
            ),
        );

        if strict {
            output.verbose_ctx("render", "Strict mode: validating backlog");
            graph.validate().context("Backlog is invalid")?;
        }
    }

    let dot = DotRenderer::new(session.config.style.clone()).render(&session.backlog);

    match path {
        Some(path) => {
            fs::write(path, &dot)
                .with_context(|| format!("Failed to write graph: {}", path.display()))?;
            output.success(&format!("Wrote graph to {}", path.display()));
        }
        None => output.raw(&dot),
    }

    Ok(())
}
