//! Graphviz DOT rendering
//!
//! Output layout:
//!
//! ```text
//! // Backlog
//! digraph {
//!     node [color="lightblue2" style="filled"]
//!     subgraph "cluster_Unittests" {
//!         label="Unit tests"
//!         "UT1" [label="Unit Tests" color="lightgreen"]
//!         "UT2" [label="Parameterized tests" color="lightblue2"]
//!         "UT1" -> "UT2"
//!     }
//!     "UT1" -> "RB2"
//! }
//! ```
//!
//! Sequence edges live inside their cluster; dependency edges are collected
//! over all directions and written after the last cluster.

use serde::{Deserialize, Serialize};

use crate::domain::{Backlog, Direction, Item, ItemId};

const INDENT: &str = "\t";

/// Colors and attributes used for the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Comment line written above the graph
    pub comment: String,

    /// Fill color of done items
    pub done_color: String,

    /// Fill color of every other item
    pub todo_color: String,

    /// Graphviz node style
    pub node_style: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            comment: "Backlog".to_string(),
            done_color: "lightgreen".to_string(),
            todo_color: "lightblue2".to_string(),
            node_style: "filled".to_string(),
        }
    }
}

impl RenderStyle {
    /// Color for an item given its completion flag
    pub fn color_for(&self, done: bool) -> &str {
        if done {
            &self.done_color
        } else {
            &self.todo_color
        }
    }
}

/// Renders a backlog as DOT text
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    style: RenderStyle,
}

impl DotRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Renders the whole backlog
    pub fn render(&self, backlog: &Backlog) -> String {
        let mut out = String::new();
        let mut explicit_edges: Vec<(&ItemId, &ItemId)> = Vec::new();

        for line in self.style.comment.lines() {
            out.push_str(&format!("// {}\n", line));
        }
        out.push_str("digraph {\n");
        out.push_str(&format!(
            "{}node [color={} style={}]\n",
            INDENT,
            quote(&self.style.todo_color),
            quote(&self.style.node_style)
        ));

        for direction in &backlog.directions {
            self.render_cluster(direction, &mut out);

            for item in &direction.items {
                for dependency in &item.depends_on {
                    explicit_edges.push((dependency, &item.id));
                }
            }
        }

        for (from, to) in explicit_edges {
            out.push_str(&edge_line(INDENT, from, to));
        }

        out.push_str("}\n");
        out
    }

    fn render_cluster(&self, direction: &Direction, out: &mut String) {
        let inner = INDENT.repeat(2);

        out.push_str(&format!(
            "{}subgraph {} {{\n",
            INDENT,
            quote(&cluster_name(&direction.name))
        ));
        out.push_str(&format!("{}label={}\n", inner, quote(&direction.name)));

        let mut previous: Option<&Item> = None;
        for item in &direction.items {
            out.push_str(&self.node_line(&inner, item));
            if let Some(prev) = previous {
                out.push_str(&edge_line(&inner, &prev.id, &item.id));
            }
            previous = Some(item);
        }

        out.push_str(&format!("{}}}\n", INDENT));
    }

    fn node_line(&self, indent: &str, item: &Item) -> String {
        format!(
            "{}{} [label={} color={}]\n",
            indent,
            quote(item.id.as_str()),
            quote(&item.label),
            quote(self.style.color_for(item.done))
        )
    }
}

/// Subgraph name for a direction; the `cluster_` prefix makes Graphviz
/// draw a box around it
pub fn cluster_name(direction: &str) -> String {
    let compact: String = direction.chars().filter(|c| !c.is_whitespace()).collect();
    format!("cluster_{}", compact)
}

fn edge_line(indent: &str, from: &ItemId, to: &ItemId) -> String {
    format!(
        "{}{} -> {}\n",
        indent,
        quote(from.as_str()),
        quote(to.as_str())
    )
}

/// Double-quotes a DOT string, escaping quotes, backslashes and newlines
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
