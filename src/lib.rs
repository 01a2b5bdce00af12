//! Backlog Graph - draw a project backlog as a Graphviz diagram
//!
//! A backlog is an ordered list of directions (themes), each holding an
//! ordered list of items. Items in a direction are chained in order, and
//! items may also depend on items of any other direction. The output is a
//! DOT graph with one cluster per direction and nodes colored by completion.

pub mod domain;
pub mod render;
pub mod storage;
pub mod cli;

pub use domain::{Backlog, BacklogGraph, Direction, Item, ItemId};
pub use render::{DotRenderer, RenderStyle};
