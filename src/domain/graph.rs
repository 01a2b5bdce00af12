//! Backlog graph
//!
//! Nodes are items, edges are either the implicit sequence inside a
//! direction or an explicit dependency. Uses petgraph for graph operations.
//!
//! Building never fails: a dependency on an undeclared ID gets a node of
//! its own, marked undeclared, so that the edge survives. Validation is a
//! separate, opt-in step.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction as Flow;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use super::id::ItemId;
use super::item::Backlog;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Item declared more than once: {0}")]
    DuplicateItem(ItemId),

    #[error("Item {item} depends on unknown item {dependency}")]
    UnknownDependency { item: ItemId, dependency: ItemId },

    #[error("Item depends on itself: {0}")]
    SelfDependency(ItemId),
}

/// Kind of edge between two items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Item N -> item N+1 within one direction
    Sequence,
    /// Declared dependency -> dependent item
    Dependency,
}

/// A node of the backlog graph
#[derive(Debug, Clone, PartialEq)]
struct Node {
    id: ItemId,
    /// `None` when the ID is only referenced, never declared
    done: Option<bool>,
}

/// An edge as seen from outside the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: ItemId,
    pub to: ItemId,
    pub kind: EdgeKind,
}

/// Directed graph of a backlog
#[derive(Debug, Default)]
pub struct BacklogGraph {
    graph: DiGraph<Node, EdgeKind>,

    /// Map from ItemId to node index
    node_map: HashMap<ItemId, NodeIndex>,

    /// IDs declared more than once, in the order the repeats were seen
    duplicates: Vec<ItemId>,
}

impl BacklogGraph {
    /// Builds the graph of a backlog
    pub fn from_backlog(backlog: &Backlog) -> Self {
        let mut graph = Self::default();

        // First pass: declared items, in declaration order
        for item in backlog.items() {
            if graph.node_map.contains_key(&item.id) {
                graph.duplicates.push(item.id.clone());
                continue;
            }
            let idx = graph.graph.add_node(Node {
                id: item.id.clone(),
                done: Some(item.done),
            });
            graph.node_map.insert(item.id.clone(), idx);
        }

        // Second pass: edges
        for direction in &backlog.directions {
            for (previous, item) in direction.sequence() {
                let from = graph.node_for(&previous.id);
                let to = graph.node_for(&item.id);
                graph.graph.add_edge(from, to, EdgeKind::Sequence);
            }
        }
        for item in backlog.items() {
            let to = graph.node_for(&item.id);
            for dependency in &item.depends_on {
                let from = graph.node_for(dependency);
                graph.graph.add_edge(from, to, EdgeKind::Dependency);
            }
        }

        graph
    }

    /// Returns the node for an ID, adding an undeclared one if needed
    fn node_for(&mut self, id: &ItemId) -> NodeIndex {
        if let Some(idx) = self.node_map.get(id) {
            return *idx;
        }
        let idx = self.graph.add_node(Node {
            id: id.clone(),
            done: None,
        });
        self.node_map.insert(id.clone(), idx);
        idx
    }

    /// Number of distinct IDs, declared or only referenced
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct declared items
    pub fn declared_count(&self) -> usize {
        self.graph
            .node_weights()
            .filter(|node| node.done.is_some())
            .count()
    }

    fn edge_count_of(&self, kind: EdgeKind) -> usize {
        self.graph
            .edge_weights()
            .filter(|weight| **weight == kind)
            .count()
    }

    /// Number of implicit edges
    pub fn sequence_edge_count(&self) -> usize {
        self.edge_count_of(EdgeKind::Sequence)
    }

    /// Number of explicit edges
    pub fn dependency_edge_count(&self) -> usize {
        self.edge_count_of(EdgeKind::Dependency)
    }

    /// All edges in insertion order: sequence edges first, then dependencies
    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_references()
            .map(|edge| Edge {
                from: self.graph[edge.source()].id.clone(),
                to: self.graph[edge.target()].id.clone(),
                kind: *edge.weight(),
            })
            .collect()
    }

    /// Returns true if the ID is declared by some item
    pub fn is_declared(&self, id: &ItemId) -> bool {
        self.node_map
            .get(id)
            .is_some_and(|idx| self.graph[*idx].done.is_some())
    }

    /// Returns the completion flag of a declared item
    pub fn is_done(&self, id: &ItemId) -> Option<bool> {
        self.node_map.get(id).and_then(|idx| self.graph[*idx].done)
    }

    /// Direct predecessors of an item (sequence and dependency edges)
    pub fn dependencies(&self, id: &ItemId) -> Vec<ItemId> {
        self.neighbors(id, Flow::Incoming)
    }

    /// Direct successors of an item
    pub fn dependents(&self, id: &ItemId) -> Vec<ItemId> {
        self.neighbors(id, Flow::Outgoing)
    }

    fn neighbors(&self, id: &ItemId, flow: Flow) -> Vec<ItemId> {
        let idx = match self.node_map.get(id) {
            Some(idx) => *idx,
            None => return vec![],
        };

        let mut edges: Vec<_> = self
            .graph
            .edges_directed(idx, flow)
            .map(|edge| {
                let other = if flow == Flow::Incoming {
                    edge.source()
                } else {
                    edge.target()
                };
                (edge.id(), other)
            })
            .collect();
        // Insertion order, not adjacency-list order
        edges.sort_by_key(|(edge, _)| *edge);

        let mut seen = HashSet::new();
        edges
            .into_iter()
            .filter(|(_, other)| seen.insert(*other))
            .map(|(_, other)| self.graph[other].id.clone())
            .collect()
    }

    /// IDs referenced as dependencies but never declared
    pub fn dangling(&self) -> Vec<ItemId> {
        self.graph
            .node_weights()
            .filter(|node| node.done.is_none())
            .map(|node| node.id.clone())
            .collect()
    }

    /// IDs declared more than once
    pub fn duplicates(&self) -> &[ItemId] {
        &self.duplicates
    }

    /// Every problem found in the backlog, duplicates first
    pub fn problems(&self) -> Vec<GraphError> {
        let mut problems: Vec<GraphError> = self
            .duplicates
            .iter()
            .cloned()
            .map(GraphError::DuplicateItem)
            .collect();

        for edge in self.graph.edge_references() {
            if *edge.weight() != EdgeKind::Dependency {
                continue;
            }
            let source = &self.graph[edge.source()];
            let target = &self.graph[edge.target()];
            if edge.source() == edge.target() {
                problems.push(GraphError::SelfDependency(target.id.clone()));
            } else if !self.is_declared(&source.id) {
                problems.push(GraphError::UnknownDependency {
                    item: target.id.clone(),
                    dependency: source.id.clone(),
                });
            }
        }

        problems
    }

    /// Fails on the first problem found
    pub fn validate(&self) -> Result<(), GraphError> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }

    /// Undone predecessors of an item; undeclared ones always block
    pub fn blockers(&self, id: &ItemId) -> Vec<ItemId> {
        self.dependencies(id)
            .into_iter()
            .filter(|dep| self.is_done(dep) != Some(true))
            .collect()
    }

    /// Items that are not done and have every predecessor done,
    /// in declaration order
    pub fn ready(&self) -> Vec<ItemId> {
        self.pending()
            .filter(|id| self.blockers(id).is_empty())
            .collect()
    }

    /// Items that are not done and wait on at least one predecessor,
    /// with the predecessors they wait on
    pub fn blocked(&self) -> Vec<(ItemId, Vec<ItemId>)> {
        self.pending()
            .filter_map(|id| {
                let blockers = self.blockers(&id);
                (!blockers.is_empty()).then_some((id, blockers))
            })
            .collect()
    }

    fn pending(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.graph
            .node_weights()
            .filter(|node| node.done == Some(false))
            .map(|node| node.id.clone())
    }
}
