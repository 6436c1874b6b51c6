//! Participants in a session.
//!
//! ## Implementations
//!
//! - [`Robot`] — Always takes the lowest-scoring child
//! - [`Fish`] — Random player for testing and simulation
//! - [`Human`] — Interactive player prompted on the terminal (requires `cli` feature)
mod fish;
#[cfg(feature = "cli")]
mod human;
mod robot;

pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use robot::*;

use crate::*;
use petgraph::graph::NodeIndex;

/// Anything that can pick a move from a position.
pub trait Player {
    /// Choose one of the children of `at`, or `None` to walk away.
    /// Only called on non-terminal positions.
    fn decide(&mut self, tree: &mut Tree, at: NodeIndex) -> Option<NodeIndex>;
}
