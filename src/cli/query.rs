//! Query commands (check, stats, ready, blocked)

use anyhow::Result;
use serde::Serialize;

use super::app::Session;
use super::output::Output;
use crate::domain::{Backlog, BacklogGraph, BacklogStats, Edge, ItemId};

/// JSON shape of `stats`: the counts plus every edge
#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: &'a BacklogStats,
    edges: Vec<Edge>,
}

fn label_of<'a>(backlog: &'a Backlog, id: &ItemId) -> &'a str {
    backlog.find(id).map(|item| item.label.as_str()).unwrap_or("")
}

/// Check the backlog for duplicate IDs, unknown dependencies and self-dependencies
pub fn check(session: &Session, output: &Output) -> Result<()> {
    let graph = BacklogGraph::from_backlog(&session.backlog);
    let problems = graph.problems();
    output.verbose_ctx("check", &format!("Found {} problems", problems.len()));

    if output.is_json() {
        let items: Vec<String> = problems.iter().map(|p| p.to_string()).collect();
        output.data(&serde_json::json!({
            "valid": problems.is_empty(),
            "problems": items,
        }))?;
    } else if problems.is_empty() {
        println!("Backlog is valid ({} items).", session.backlog.len());
    } else {
        println!("Problems ({}):", problems.len());
        for problem in &problems {
            println!("  - {}", problem);
        }
    }

    if !problems.is_empty() {
        anyhow::bail!("Backlog has {} problem(s)", problems.len());
    }

    Ok(())
}

/// Show backlog statistics
pub fn stats(session: &Session, output: &Output) -> Result<()> {
    let graph = BacklogGraph::from_backlog(&session.backlog);
    let stats = BacklogStats::compute(&session.backlog, &graph);

    if output.is_json() {
        return output.data(&StatsReport {
            stats: &stats,
            edges: graph.edges(),
        });
    }

    println!("Backlog Status");
    println!("{}", "=".repeat(40));
    println!();
    println!("Directions:       {}", stats.directions);
    println!(
        "Items:            {} ({} done, {}%)",
        stats.items,
        stats.done,
        stats.percent_done()
    );
    if stats.sized_items > 0 {
        println!(
            "Size:             {} over {} sized items",
            stats.total_size, stats.sized_items
        );
    }
    println!();
    println!("Sequence edges:   {}", stats.sequence_edges);
    println!("Dependency edges: {}", stats.dependency_edges);
    if stats.dangling > 0 || stats.duplicates > 0 {
        println!();
        println!("Unknown IDs:      {}", stats.dangling);
        println!("Duplicate IDs:    {}", stats.duplicates);
    }

    Ok(())
}

/// Show items ready to work on
pub fn ready(session: &Session, output: &Output) -> Result<()> {
    let graph = BacklogGraph::from_backlog(&session.backlog);
    let ready = graph.ready();
    output.verbose_ctx("ready", &format!("Found {} ready items", ready.len()));

    if output.is_json() {
        let items: Vec<_> = ready
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "label": label_of(&session.backlog, id),
                    "direction": session.backlog.direction_of(id).map(|d| d.name.as_str()),
                    "unblocks": graph.dependents(id),
                })
            })
            .collect();
        output.data(&items)?;
    } else if ready.is_empty() {
        println!("No items ready to work on.");
    } else {
        println!("Ready items ({}):", ready.len());
        println!("{:<12} LABEL", "ID");
        println!("{}", "-".repeat(60));
        for id in &ready {
            println!("{:<12} {}", id, label_of(&session.backlog, id));
        }
    }

    Ok(())
}

/// Show blocked items
pub fn blocked(session: &Session, output: &Output) -> Result<()> {
    let graph = BacklogGraph::from_backlog(&session.backlog);
    let blocked = graph.blocked();
    output.verbose_ctx("blocked", &format!("Found {} blocked items", blocked.len()));

    if output.is_json() {
        let items: Vec<_> = blocked
            .iter()
            .map(|(id, blockers)| {
                serde_json::json!({
                    "id": id,
                    "label": label_of(&session.backlog, id),
                    "blocked_by": blockers,
                })
            })
            .collect();
        output.data(&items)?;
    } else if blocked.is_empty() {
        println!("No blocked items.");
    } else {
        println!("Blocked items ({}):", blocked.len());
        println!("{:<12} {:<40} BLOCKED BY", "ID", "LABEL");
        println!("{}", "-".repeat(80));
        for (id, blockers) in &blocked {
            let blockers: Vec<&str> = blockers.iter().map(ItemId::as_str).collect();
            println!(
                "{:<12} {:<40} {}",
                id,
                label_of(&session.backlog, id),
                blockers.join(", ")
            );
        }
    }

    Ok(())
}
