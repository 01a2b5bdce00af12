//! Domain models for the backlog
//!
//! Contains the backlog model and graph logic without any I/O concerns.

mod id;
mod item;
mod graph;
mod builtin;
mod stats;

pub use id::{ItemId, IdError};
pub use item::{Backlog, Dependencies, Direction, Item};
pub use graph::{BacklogGraph, Edge, EdgeKind, GraphError};
pub use builtin::builtin_backlog;
pub use stats::BacklogStats;
