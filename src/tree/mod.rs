//! Lazily grown game tree.
//!
//! - [`Tree`] — arena owning every vertex; expansion, scoring, paths
//! - [`Node`] — read-only handle for navigating toward the root
//! - [`Vertex`] — per-position payload with its cached child order
//! - [`Descriptor`] — printable snapshot of one position

mod descriptor;
mod node;
mod tree;
mod vertex;

pub use descriptor::*;
pub use node::*;
pub use tree::*;
pub use vertex::*;
