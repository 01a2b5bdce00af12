//! Text renderers for a backlog
//!
//! Only Graphviz DOT for now. Rendering is a pure function of the backlog
//! and a [`RenderStyle`]; writing the result is left to the caller.

mod dot;

pub use dot::{cluster_name, quote, DotRenderer, RenderStyle};
