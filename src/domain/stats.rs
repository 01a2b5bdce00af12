//! Backlog statistics

use serde::Serialize;

use super::graph::BacklogGraph;
use super::item::Backlog;

/// Summary counts for a backlog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BacklogStats {
    pub directions: usize,
    pub items: usize,
    pub done: usize,
    /// Sum of sizes over sized items
    pub total_size: u64,
    pub sized_items: usize,
    pub sequence_edges: usize,
    pub dependency_edges: usize,
    pub dangling: usize,
    pub duplicates: usize,
}

impl BacklogStats {
    pub fn compute(backlog: &Backlog, graph: &BacklogGraph) -> Self {
        let sizes: Vec<u32> = backlog.items().filter_map(|item| item.size).collect();

        Self {
            directions: backlog.directions.len(),
            items: backlog.len(),
            done: backlog.items().filter(|item| item.done).count(),
            total_size: sizes.iter().map(|s| u64::from(*s)).sum(),
            sized_items: sizes.len(),
            sequence_edges: graph.sequence_edge_count(),
            dependency_edges: graph.dependency_edge_count(),
            dangling: graph.dangling().len(),
            duplicates: graph.duplicates().len(),
        }
    }

    /// Share of items done, in percent (0 for an empty backlog)
    pub fn percent_done(&self) -> u32 {
        if self.items == 0 {
            return 0;
        }
        ((self.done * 100) / self.items) as u32
    }
}
